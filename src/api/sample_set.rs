use crate::api::builtin_samples::*;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while assembling a [`SampleSet`]
#[derive(Error, Debug)]
pub enum SampleSetError {
    #[error("Failed to read sample file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse sample file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sample group label '{label}' is used more than once")]
    DuplicateLabel { label: String },
}

type Result<T> = core::result::Result<T, SampleSetError>;

/// Different manual observations of the same logical banner line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SampleGroup {
    pub samples: Vec<String>,
}

impl SampleGroup {
    pub fn new<I, S>(samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            samples: samples.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Sample groups keyed by a unique label (usually the banner line number).
///
/// Groups are kept in the order they were inserted; this is also the order in which
/// they are analyzed and written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    groups: IndexMap<String, SampleGroup>,
}

/// On-disk layout of a sample file.
///
/// ```json
/// {"groups": [{"label": "0", "samples": [" .  ...", "    '."]}]}
/// ```
#[derive(Debug, Deserialize)]
struct SampleFile {
    groups: Vec<LabeledGroup>,
}

#[derive(Debug, Deserialize)]
struct LabeledGroup {
    label: String,
    samples: SampleGroup,
}

impl SampleSet {
    /// Creates an empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The banner lines captured by hand which ship with the library.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.groups.insert(
            TOP_DECOR_LABEL.to_string(),
            SampleGroup::new(TOP_DECOR_SAMPLES),
        );
        set.groups.insert(
            DAY_TWO_DECOR_LABEL.to_string(),
            SampleGroup::new(DAY_TWO_DECOR_SAMPLES),
        );
        set
    }

    /// Adds a group under the given label.
    ///
    /// # Arguments
    /// * `label` - Unique identifier of the group.
    /// * `group` - The samples for this banner line.
    ///
    /// # Returns
    /// * `Ok(())` - If the group was added
    /// * `Err(SampleSetError::DuplicateLabel)` - If the label is already taken
    pub fn insert(&mut self, label: impl Into<String>, group: SampleGroup) -> Result<()> {
        match self.groups.entry(label.into()) {
            Entry::Occupied(entry) => Err(SampleSetError::DuplicateLabel {
                label: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(group);
                Ok(())
            }
        }
    }

    /// Parses a sample set from the JSON sample file format.
    ///
    /// # Arguments
    /// * `json` - Contents of the sample file.
    ///
    /// # Returns
    /// * `Ok(SampleSet)` - Groups in file order
    /// * `Err(SampleSetError)` - If the JSON is malformed or a label repeats
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: SampleFile = serde_json::from_str(json)?;
        let mut set = Self::new();
        for group in file.groups {
            set.insert(group.label, group.samples)?;
        }

        Ok(set)
    }

    /// Reads and parses a sample file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, label: &str) -> Option<&SampleGroup> {
        self.groups.get(label)
    }

    /// Iterates over `(label, group)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SampleGroup)> {
        self.groups
            .iter()
            .map(|(label, group)| (label.as_str(), group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_has_both_decoration_lines() {
        let set = SampleSet::builtin();
        let labels: Vec<&str> = set.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["0", "2"]);
        assert!(set.iter().all(|(_, group)| group.len() == 5));
    }

    #[test]
    fn builtin_samples_share_one_width() {
        let set = SampleSet::builtin();
        for (label, group) in set.iter() {
            let widths: Vec<usize> = group.samples.iter().map(|s| s.chars().count()).collect();
            assert!(
                widths.iter().all(|&w| w == widths[0]),
                "group {label} has widths {widths:?}"
            );
        }
    }

    #[test]
    fn parses_groups_in_file_order() {
        let json = r#"{"groups": [
            {"label": "7", "samples": ["ab", "ac"]},
            {"label": "3", "samples": []}
        ]}"#;
        let set = SampleSet::from_json_str(json).unwrap();

        let labels: Vec<&str> = set.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["7", "3"]);
        assert_eq!(set.get("7"), Some(&SampleGroup::new(["ab", "ac"])));
        assert!(set.get("3").unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_labels() {
        let json = r#"{"groups": [
            {"label": "1", "samples": ["a"]},
            {"label": "1", "samples": ["b"]}
        ]}"#;
        let err = SampleSet::from_json_str(json).unwrap_err();
        assert!(matches!(err, SampleSetError::DuplicateLabel { ref label } if label == "1"));
    }

    #[test]
    fn insert_keeps_first_group_on_collision() {
        let mut set = SampleSet::new();
        set.insert("0", SampleGroup::new(["first"])).unwrap();
        assert!(set.insert("0", SampleGroup::new(["second"])).is_err());
        assert_eq!(set.get("0"), Some(&SampleGroup::new(["first"])));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    #[case::not_json("groups")]
    #[case::missing_groups(r#"{"lines": []}"#)]
    #[case::non_string_sample(r#"{"groups": [{"label": "0", "samples": [1, 2]}]}"#)]
    #[case::missing_label(r#"{"groups": [{"samples": ["a"]}]}"#)]
    fn rejects_malformed_sample_files(#[case] json: &str) {
        let err = SampleSet::from_json_str(json).unwrap_err();
        assert!(matches!(err, SampleSetError::Json(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"groups": [{{"label": "0", "samples": ["x", "xy"]}}]}}"#
        )
        .unwrap();

        let set = SampleSet::load(file.path()).unwrap();
        assert_eq!(set.get("0"), Some(&SampleGroup::new(["x", "xy"])));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SampleSet::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SampleSetError::Io(_)));
    }
}
