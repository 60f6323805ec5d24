//! # Banner Variability
//! Finds the columns of hand-collected ASCII-art banner lines that change between
//! observations, along with the characters seen in those columns.
//!
//! The output is meant to drive randomized generation of similar banners.

/// Public High Level API
pub mod api {
    /// Labeled sample groups and how they are loaded.
    pub mod sample_set;

    /// Banner captures embedded in the library, used when no sample file is given.
    pub mod builtin_samples;
}

/// Per-group column comparison.
pub mod analysis {
    pub mod variability;
}

/// This module contains everything needed to turn a set of analyzed groups
/// into the persisted record.
pub mod report {
    /// Merges per-group results into one [`AnalysisResult`](builder::AnalysisResult).
    pub mod builder;

    /// Writes the record to disk.
    pub mod persist;

    /// Human readable tables for operators.
    pub mod summary;
}
