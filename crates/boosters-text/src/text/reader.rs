//! Token cursor over a buffered reader.

use std::io::BufRead;

use super::error::{MalformedInput, ReadError};
use super::options::TextReadOptions;
use super::value::TextValue;

/// Decoder half of the text codec.
///
/// Splits the underlying stream into tokens separated by ASCII whitespace.
/// Line breaks carry no meaning on read. Entity decoders (`read_cut`,
/// `read_tree`, `read_forest`, ...) are defined next to their encoders.
#[derive(Debug)]
pub struct TextReader<R> {
    inner: R,
    options: TextReadOptions,
    token: Vec<u8>,
}

impl<R: BufRead> TextReader<R> {
    /// Create a reader with default limits.
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, TextReadOptions::default())
    }

    /// Create a reader with explicit limits.
    pub fn with_options(inner: R, options: TextReadOptions) -> Self {
        Self {
            inner,
            options,
            token: Vec::new(),
        }
    }

    /// Limits in effect.
    pub fn options(&self) -> &TextReadOptions {
        &self.options
    }

    /// Give back the underlying reader, positioned after the last token read.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Advance to the next token and return it.
    pub fn next_token(&mut self, context: &'static str) -> Result<&str, ReadError> {
        if !self.skip_whitespace()? {
            return Err(MalformedInput::UnexpectedEnd { context }.into());
        }

        self.token.clear();
        let limit = self.options.max_token_len;
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let len = buf.len();
            let take = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
            if self.token.len() + take > limit {
                return Err(MalformedInput::TokenTooLong { context, limit }.into());
            }
            self.token.extend_from_slice(&buf[..take]);
            self.inner.consume(take);
            if take < len {
                break;
            }
        }

        std::str::from_utf8(&self.token).map_err(|_| {
            MalformedInput::InvalidValue {
                field: context,
                token: String::from_utf8_lossy(&self.token).into_owned(),
                message: "token is not valid UTF-8".to_string(),
            }
            .into()
        })
    }

    /// Read one token and parse it as `T`.
    pub fn read_value<T: TextValue>(&mut self, field: &'static str) -> Result<T, ReadError> {
        let token = self.next_token(field)?;
        T::parse_text(token).map_err(|message| {
            MalformedInput::InvalidValue {
                field,
                token: token.to_string(),
                message: format!("expected {}: {message}", T::TYPE_NAME),
            }
            .into()
        })
    }

    /// Read an element count and check it against `max_sequence_len`.
    pub fn read_count(&mut self, field: &'static str) -> Result<usize, ReadError> {
        let count: u64 = self.read_value(field)?;
        let limit = self.options.max_sequence_len;
        match usize::try_from(count) {
            Ok(n) if n <= limit => Ok(n),
            _ => Err(MalformedInput::CountTooLarge { field, count, limit }.into()),
        }
    }

    /// Whether only whitespace remains in the stream.
    pub fn is_exhausted(&mut self) -> Result<bool, ReadError> {
        Ok(!self.skip_whitespace()?)
    }

    /// Fail with [`MalformedInput::TrailingData`] unless only whitespace remains.
    pub fn expect_end(&mut self) -> Result<(), ReadError> {
        if self.is_exhausted()? {
            return Ok(());
        }
        let token = self.next_token("trailing data")?.to_string();
        Err(MalformedInput::TrailingData { token }.into())
    }

    /// Skip whitespace; returns `false` at end of stream.
    fn skip_whitespace(&mut self) -> Result<bool, ReadError> {
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }
            let len = buf.len();
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            self.inner.consume(skip);
            if skip < len {
                return Ok(true);
            }
        }
    }
}
