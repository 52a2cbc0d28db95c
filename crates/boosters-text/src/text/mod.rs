//! Plain-text model format.
//!
//! The format is positional and whitespace-delimited; there is no header,
//! version tag or per-field type information:
//!
//! ```text
//! Forest               := F0 shrinkage treeCount Tree*
//! Tree                 := cutCount Cut* boostWeightSeq puritySeq
//! Cut                  := feature index valid gain
//! boostWeightSeq       := count value*
//! puritySeq            := count value*
//! FeatureBinning<T>    := nLevels count value*
//! FeatureBinning<T>Seq := count FeatureBinning<T>*
//! ```
//!
//! [`TextWriter`] and [`TextReader`] carry the stream cursor; every entity
//! codec is a method on them, so several entities can share one stream.
//! The free functions below cover the common single-entity cases.
//!
//! # Example
//!
//! ```
//! use boosters_text::repr::{Cut, Forest, Tree};
//! use boosters_text::text::{forest_from_str, forest_to_string, TextWriteOptions};
//!
//! let mut forest = Forest::new(0.1, 0.5);
//! forest.push_tree(Tree::new(vec![Cut::new(2, 7, 1.25)], vec![0.3], vec![0.9]));
//!
//! let text = forest_to_string(&forest, &TextWriteOptions::default());
//! assert_eq!(forest_from_str(&text).unwrap(), forest);
//! ```

pub mod binning;
pub mod cut;
pub mod error;
pub mod forest;
pub mod options;
pub mod reader;
pub mod seq;
pub mod tree;
pub mod value;
pub mod writer;

use std::io::{BufRead, Write};

pub use error::{MalformedInput, NonFiniteValue, ReadError, WriteError};
pub use options::{BoolStyle, FloatFormat, TextReadOptions, TextWriteOptions};
pub use reader::TextReader;
pub use value::TextValue;
pub use writer::TextWriter;

use crate::repr::{FeatureBinning, Forest};

/// Write a forest to `out` and flush it.
///
/// Returns the non-finite values that were written, if any.
pub fn write_forest<W: Write + ?Sized>(
    out: &mut W,
    forest: &Forest,
    options: &TextWriteOptions,
) -> Result<Vec<NonFiniteValue>, WriteError> {
    let mut writer = TextWriter::with_options(out, *options);
    writer.write_forest(forest)?;
    writer.flush()?;
    Ok(writer.into_warnings())
}

/// Read a forest from `input`, leaving any following data unread.
pub fn read_forest<R: BufRead>(input: R, options: &TextReadOptions) -> Result<Forest, ReadError> {
    TextReader::with_options(input, *options).read_forest()
}

/// Write a list of feature binnings to `out` and flush it.
pub fn write_feature_binnings<T: TextValue, W: Write + ?Sized>(
    out: &mut W,
    binnings: &[FeatureBinning<T>],
    options: &TextWriteOptions,
) -> Result<Vec<NonFiniteValue>, WriteError> {
    let mut writer = TextWriter::with_options(out, *options);
    writer.write_feature_binnings(binnings)?;
    writer.flush()?;
    Ok(writer.into_warnings())
}

/// Read a list of feature binnings from `input`.
pub fn read_feature_binnings<T: TextValue, R: BufRead>(
    input: R,
    options: &TextReadOptions,
) -> Result<Vec<FeatureBinning<T>>, ReadError> {
    TextReader::with_options(input, *options).read_feature_binnings()
}

/// Render a forest as text.
///
/// Non-finite values are only reported through `tracing`; use
/// [`write_forest`] to collect them as [`NonFiniteValue`]s.
pub fn forest_to_string(forest: &Forest, options: &TextWriteOptions) -> String {
    let mut out: Vec<u8> = Vec::new();
    match write_forest(&mut out, forest, options) {
        Ok(_warnings) => {}
        // Writing into a Vec cannot fail.
        Err(WriteError::Io(_)) => {}
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parse a forest from text, rejecting trailing data.
pub fn forest_from_str(text: &str) -> Result<Forest, ReadError> {
    let mut reader = TextReader::new(text.as_bytes());
    let forest = reader.read_forest()?;
    reader.expect_end()?;
    Ok(forest)
}

/// Render a list of feature binnings as text.
///
/// Non-finite boundaries are only reported through `tracing`; use
/// [`write_feature_binnings`] to collect them as [`NonFiniteValue`]s.
pub fn feature_binnings_to_string<T: TextValue>(
    binnings: &[FeatureBinning<T>],
    options: &TextWriteOptions,
) -> String {
    let mut out: Vec<u8> = Vec::new();
    match write_feature_binnings(&mut out, binnings, options) {
        Ok(_warnings) => {}
        // Writing into a Vec cannot fail.
        Err(WriteError::Io(_)) => {}
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parse a list of feature binnings from text, rejecting trailing data.
pub fn feature_binnings_from_str<T: TextValue>(
    text: &str,
) -> Result<Vec<FeatureBinning<T>>, ReadError> {
    let mut reader = TextReader::new(text.as_bytes());
    let binnings = reader.read_feature_binnings()?;
    reader.expect_end()?;
    Ok(binnings)
}
