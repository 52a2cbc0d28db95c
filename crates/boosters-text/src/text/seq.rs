//! Size-prefixed sequences of primitive values.
//!
//! Layout: `count v1 v2 ... vn\n`. Floating-point elements are checked for
//! finiteness before being written (see [`TextValue::non_finite`]).

use std::io::{BufRead, Write};

use super::error::{ReadError, WriteError};
use super::reader::TextReader;
use super::value::TextValue;
use super::writer::TextWriter;

/// Upper bound on elements preallocated from a declared count.
pub(crate) const MAX_PREALLOC: usize = 4096;

impl<W: Write + ?Sized> TextWriter<'_, W> {
    /// Write a size-prefixed sequence on one line.
    ///
    /// Non-finite floats are reported as warnings and still written.
    pub fn write_seq<T: TextValue>(
        &mut self,
        field: &'static str,
        values: &[T],
    ) -> Result<(), WriteError> {
        self.write_value(&values.len())?;
        for (position, value) in values.iter().enumerate() {
            if let Some(v) = value.non_finite() {
                self.warn_non_finite(field, position, v);
            }
            self.space()?;
            self.write_value(value)?;
        }
        self.newline()
    }
}

impl<R: BufRead> TextReader<R> {
    /// Read a size-prefixed sequence.
    ///
    /// Fails if fewer elements than declared are available or any element
    /// does not parse as `T`.
    pub fn read_seq<T: TextValue>(&mut self, field: &'static str) -> Result<Vec<T>, ReadError> {
        let count = self.read_count(field)?;
        let mut values = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            values.push(self.read_value(field)?);
        }
        Ok(values)
    }
}
