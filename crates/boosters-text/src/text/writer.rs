//! Token emitter over a writer.

use std::io::Write;

use tracing::warn;

use super::error::{NonFiniteValue, WriteError};
use super::options::TextWriteOptions;
use super::value::TextValue;

/// Encoder half of the text codec.
///
/// Borrows the caller's writer; it never closes it and only flushes on
/// [`flush`](Self::flush). Entity encoders (`write_cut`, `write_tree`,
/// `write_forest`, ...) are defined next to their decoders.
///
/// Non-finite floats in sequences are logged with `tracing::warn!` and
/// collected in [`warnings`](Self::warnings); they never make a write fail.
#[derive(Debug)]
pub struct TextWriter<'w, W: ?Sized> {
    inner: &'w mut W,
    options: TextWriteOptions,
    warnings: Vec<NonFiniteValue>,
}

impl<'w, W: Write + ?Sized> TextWriter<'w, W> {
    /// Create a writer with default formatting.
    pub fn new(inner: &'w mut W) -> Self {
        Self::with_options(inner, TextWriteOptions::default())
    }

    /// Create a writer with explicit formatting options.
    pub fn with_options(inner: &'w mut W, options: TextWriteOptions) -> Self {
        Self {
            inner,
            options,
            warnings: Vec::new(),
        }
    }

    /// Formatting options in effect.
    pub fn options(&self) -> &TextWriteOptions {
        &self.options
    }

    /// Non-finite values written so far.
    pub fn warnings(&self) -> &[NonFiniteValue] {
        &self.warnings
    }

    /// Consume the writer, returning the collected warnings.
    pub fn into_warnings(self) -> Vec<NonFiniteValue> {
        self.warnings
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), WriteError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Write a single value token.
    pub fn write_value<T: TextValue>(&mut self, value: &T) -> Result<(), WriteError> {
        value.write_text(&mut self.inner, &self.options)?;
        Ok(())
    }

    /// Write a value token followed by a line break.
    pub fn write_line<T: TextValue>(&mut self, value: &T) -> Result<(), WriteError> {
        self.write_value(value)?;
        self.newline()
    }

    pub(crate) fn space(&mut self) -> Result<(), WriteError> {
        self.inner.write_all(b" ")?;
        Ok(())
    }

    pub(crate) fn newline(&mut self) -> Result<(), WriteError> {
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    pub(crate) fn warn_non_finite(&mut self, field: &'static str, position: usize, value: f64) {
        warn!(
            field,
            position,
            value,
            "writing a non-finite value; strict readers will not be able to load this model"
        );
        self.warnings.push(NonFiniteValue {
            field,
            position,
            value,
        });
    }
}
