use crate::analysis::variability::analyze_group;
use crate::api::sample_set::SampleSet;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// The persisted record of a run.
///
/// Field order matches the on-disk layout: `mutable_indices`, then `allowed_chars`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Mutable columns of each group, keyed by group label in input order.
    pub mutable_indices: IndexMap<String, Vec<usize>>,
    /// Union of the allowed characters of all groups, sorted by code point.
    #[serde(serialize_with = "serialize_chars")]
    pub allowed_chars: Vec<char>,
}

/// Writes chars as single-character strings, e.g. `[" ", "'", "."]`.
fn serialize_chars<S: serde::Serializer>(
    chars: &[char],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(chars.iter().map(char::to_string))
}

/// Analyzes every group of a sample set and merges the results.
///
/// # Arguments
/// * `sample_set` - Labeled groups; analyzed in insertion order.
///
/// # Returns
/// An [`AnalysisResult`] with one entry per group and the sorted union of all
/// allowed characters.
pub fn build_report(sample_set: &SampleSet) -> AnalysisResult {
    let mut mutable_indices = IndexMap::with_capacity(sample_set.len());
    let mut allowed_chars = BTreeSet::new();

    for (label, group) in sample_set.iter() {
        let variability = analyze_group(&group.samples);
        debug!(
            label,
            mutable = variability.mutable_indices.len(),
            "merged group into report"
        );

        allowed_chars.extend(variability.allowed_chars);
        mutable_indices.insert(label.to_string(), variability.mutable_indices);
    }

    AnalysisResult {
        mutable_indices,
        allowed_chars: allowed_chars.into_iter().collect(),
    }
}
