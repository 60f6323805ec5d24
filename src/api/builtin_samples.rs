//! Manually extracted captures of the calendar banner.
//!
//! Line 1 (the main day 1 line) is static, so only the decorations above day 1 and
//! day 2 are listed.

/// Label of the decoration line above day 1.
pub const TOP_DECOR_LABEL: &str = "0";

/// Label of the decoration line above day 2.
pub const DAY_TWO_DECOR_LABEL: &str = "2";

/// Top decoration above day 1.
pub const TOP_DECOR_SAMPLES: [&str; 5] = [
    " .  ...  ____   .  ...  * . .   .'       <o   '         ",
    "    '.   ____ .    .    * '     ' '.'  ' <o ''  '       ",
    "      '' ____  . ' .    *         '  .   <o             ",
    "      .  ____  ' ' '    *              ' <o '  '        ",
    "   '   . ____  '      . * ..       '' .' <o     .       ",
];

/// Decoration above day 2.
pub const DAY_TWO_DECOR_SAMPLES: [&str; 5] = [
    " ' _______||_________    ..    . '   .'..'              ",
    " ' _______||_________      .   .  '   ' .. ..           ",
    "   _______||_________ .' '  '     . . '  .  '   '       ",
    ".  _______||_________ '  ''            ' .              ",
    " . _______||_________ '.'  '  ' .   .  '                ",
];
