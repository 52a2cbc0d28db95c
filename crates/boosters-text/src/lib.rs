//! boosters-text: plain-text persistence for boosted decision tree models.
//!
//! Encodes a forest of trees, and the per-feature binnings used to
//! discretize its inputs, into a whitespace-delimited token stream, and
//! decodes that stream back into equal in-memory values.
//!
//! # Key Types
//!
//! - [`Forest`] / [`Tree`] / [`Cut`] - The persisted tree ensemble
//! - [`FeatureBinning`] - Per-feature bin boundaries
//! - [`TextWriter`] / [`TextReader`] - Encoder and decoder over caller-owned streams
//! - [`TextWriteOptions`] / [`TextReadOptions`] - Formatting and limits
//!
//! # Loading a Model
//!
//! A model file typically holds the binnings followed by the forest, read
//! through one [`TextReader`]:
//!
//! ```
//! use boosters_text::{FeatureBinning, Forest, TextReader};
//!
//! let text = "1\n1\n2 0 1\n0.5\n0.1\n0\n";
//! let mut reader = TextReader::new(text.as_bytes());
//! let binnings: Vec<FeatureBinning<f32>> = reader.read_feature_binnings().unwrap();
//! let forest: Forest = reader.read_forest().unwrap();
//!
//! assert_eq!(binnings[0].boundaries(), &[0.0, 1.0]);
//! assert_eq!(forest.f0(), 0.5);
//! ```
//!
//! The crate never installs a `tracing` subscriber; warnings about
//! non-finite values go to whatever subscriber the application configured.

pub mod repr;
pub mod text;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use repr::{Cut, FeatureBinning, Forest, Tree};

pub use text::{
    feature_binnings_from_str, feature_binnings_to_string, forest_from_str, forest_to_string,
    read_feature_binnings, read_forest, write_feature_binnings, write_forest, BoolStyle,
    FloatFormat, MalformedInput, NonFiniteValue, ReadError, TextReadOptions, TextReader, TextValue,
    TextWriteOptions, TextWriter, WriteError,
};
