//! Canonical in-memory representations persisted by the text codec.
//!
//! These are plain data containers: the codec builds each of them exactly once
//! from already-decoded children and never mutates them afterwards.

pub mod binning;
pub mod cut;
pub mod forest;
pub mod tree;

pub use binning::FeatureBinning;
pub use cut::Cut;
pub use forest::Forest;
pub use tree::Tree;
