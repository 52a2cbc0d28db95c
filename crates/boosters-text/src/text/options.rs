//! Read and write options for the text codec.
//!
//! Both option structs are built with `bon` and can be embedded in a caller's
//! configuration file through `serde`; missing fields fall back to defaults.
//!
//! # Example
//!
//! ```
//! use boosters_text::text::{FloatFormat, TextWriteOptions};
//!
//! // Same numeric layout as a C++ iostream with default precision.
//! let options = TextWriteOptions::builder()
//!     .float_format(FloatFormat::Significant(6))
//!     .build();
//! assert_eq!(options.float_format, FloatFormat::Significant(6));
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

/// How floating-point values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatFormat {
    /// Shortest text that parses back to the identical value.
    #[default]
    Shortest,
    /// `%g`-style with the given number of significant digits (clamped to 1..=17).
    ///
    /// Trailing zeros are trimmed and exponents are written as `e+06` / `e-07`.
    Significant(u8),
}

/// How booleans are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolStyle {
    /// `1` / `0`.
    #[default]
    Numeric,
    /// `true` / `false`.
    Word,
}

/// Options controlling the textual layout produced by
/// [`TextWriter`](super::TextWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder, Serialize, Deserialize)]
#[builder(derive(Clone, Debug))]
#[serde(default)]
pub struct TextWriteOptions {
    /// Float rendering. Default: [`FloatFormat::Shortest`].
    #[builder(default)]
    pub float_format: FloatFormat,

    /// Boolean rendering. Default: [`BoolStyle::Numeric`].
    #[builder(default)]
    pub bool_style: BoolStyle,
}

/// Limits applied by [`TextReader`](super::TextReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(derive(Clone, Debug))]
#[serde(default)]
pub struct TextReadOptions {
    /// Largest declared element count accepted for any sequence.
    /// Default: `u32::MAX`.
    #[builder(default = u32::MAX as usize)]
    pub max_sequence_len: usize,

    /// Largest token accepted, in bytes. Default: 1024.
    #[builder(default = 1024)]
    pub max_token_len: usize,
}

impl Default for TextReadOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
