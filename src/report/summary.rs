//! ASCII table summary of a run, using the [`tabled`] crate.

use crate::analysis::variability::analyze_group;
use crate::api::sample_set::SampleSet;
use derive_new::new;
use tabled::{Table, Tabled};

/// One table row describing a single analyzed group.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, new)]
pub struct GroupSummary {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Samples")]
    pub samples: usize,
    /// Padded width of the group.
    #[tabled(rename = "Width")]
    pub width: usize,
    /// Number of mutable columns.
    #[tabled(rename = "Mutable")]
    pub mutable: usize,
}

/// Builds one [`GroupSummary`] per group, in group order.
pub fn summarize(sample_set: &SampleSet) -> Vec<GroupSummary> {
    sample_set
        .iter()
        .map(|(label, group)| {
            let variability = analyze_group(&group.samples);
            GroupSummary::new(
                label.to_string(),
                group.len(),
                variability.width,
                variability.mutable_indices.len(),
            )
        })
        .collect()
}

/// Formats group summaries as an ASCII table
///
/// # Arguments
/// * `rows` - A slice of [`GroupSummary`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_summary_table(rows: &[GroupSummary], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No sample groups analyzed".to_string();
    }

    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}
