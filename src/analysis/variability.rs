use hashbrown::HashSet;
use tracing::debug;

/// Character used to extend shorter samples to the width of the longest one.
///
/// # Remarks
///
/// A missing trailing character is compared as if it were this character, so a column
/// is reported mutable when one sample ends early and another has a non-space there.
pub const PAD_CHAR: char = ' ';

/// Result of comparing every column of a single sample group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupVariability {
    /// Zero-based columns where at least two samples disagree, ascending.
    pub mutable_indices: Vec<usize>,
    /// Every character seen in any of the [`Self::mutable_indices`] columns.
    pub allowed_chars: HashSet<char>,
    /// Length (in chars) of the longest sample; all samples are padded to this.
    pub width: usize,
}

impl GroupVariability {
    /// Returns `true` if no column of the group varies.
    pub fn is_static(&self) -> bool {
        self.mutable_indices.is_empty()
    }
}

/// Right-pads each sample with [`PAD_CHAR`] so that all samples share one length.
///
/// # Arguments
/// * `samples` - The samples of a single group.
///
/// # Returns
/// The padded samples as char vectors (in input order) and the shared width.
pub fn pad_samples<S: AsRef<str>>(samples: &[S]) -> (Vec<Vec<char>>, usize) {
    let mut padded: Vec<Vec<char>> = samples
        .iter()
        .map(|sample| sample.as_ref().chars().collect())
        .collect();

    let width = padded.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut padded {
        row.resize(width, PAD_CHAR);
    }

    (padded, width)
}

/// Finds the columns of a sample group which differ between samples.
///
/// Samples are padded with [`PAD_CHAR`] first, then each column is compared across
/// all samples. A column with more than one distinct character is mutable, and all of
/// its characters become allowed characters.
///
/// # Arguments
/// * `samples` - The samples of a single group. May be empty.
///
/// # Returns
/// The [`GroupVariability`] of the group. Empty and single-sample groups never vary.
pub fn analyze_group<S: AsRef<str>>(samples: &[S]) -> GroupVariability {
    let (padded, width) = pad_samples(samples);

    let mut mutable_indices = Vec::new();
    let mut allowed_chars = HashSet::new();
    let mut column = HashSet::with_capacity(padded.len());

    for index in 0..width {
        column.clear();
        column.extend(padded.iter().map(|row| row[index]));

        if column.len() > 1 {
            mutable_indices.push(index);
            allowed_chars.extend(column.iter().copied());
        }
    }

    debug!(
        samples = samples.len(),
        width,
        mutable = mutable_indices.len(),
        "analyzed sample group"
    );

    GroupVariability {
        mutable_indices,
        allowed_chars,
        width,
    }
}
