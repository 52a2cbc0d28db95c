//! Cut codec: `feature index valid gain\n`.

use std::io::{BufRead, Write};

use crate::repr::Cut;

use super::error::{ReadError, WriteError};
use super::reader::TextReader;
use super::writer::TextWriter;

impl<W: Write + ?Sized> TextWriter<'_, W> {
    /// Write one cut on its own line.
    pub fn write_cut(&mut self, cut: &Cut) -> Result<(), WriteError> {
        self.write_value(&cut.feature)?;
        self.space()?;
        self.write_value(&cut.index)?;
        self.space()?;
        self.write_value(&cut.valid)?;
        self.space()?;
        self.write_value(&cut.gain)?;
        self.newline()
    }
}

impl<R: BufRead> TextReader<R> {
    /// Read one cut.
    pub fn read_cut(&mut self) -> Result<Cut, ReadError> {
        let feature = self.read_value("cut.feature")?;
        let index = self.read_value("cut.index")?;
        let valid = self.read_value("cut.valid")?;
        let gain = self.read_value("cut.gain")?;
        Ok(Cut {
            feature,
            index,
            valid,
            gain,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;
    use crate::text::error::MalformedInput;

    fn read(input: &str) -> Result<Cut, ReadError> {
        TextReader::new(Cursor::new(input.as_bytes())).read_cut()
    }

    #[test]
    fn field_order() {
        let mut out: Vec<u8> = Vec::new();
        TextWriter::new(&mut out)
            .write_cut(&Cut::new(2, 7, 1.25))
            .unwrap();
        assert_eq!(out, b"2 7 1 1.25\n");

        let mut out: Vec<u8> = Vec::new();
        TextWriter::new(&mut out)
            .write_cut(&Cut::placeholder())
            .unwrap();
        assert_eq!(out, b"0 0 0 0\n");
    }

    #[test]
    fn reads_fields_in_order() {
        let cut = read("2 7 1 1.25\n").unwrap();
        assert_eq!(cut, Cut::new(2, 7, 1.25));

        let cut = read("4 0 false -0.5").unwrap();
        assert_eq!(
            cut,
            Cut {
                feature: 4,
                index: 0,
                valid: false,
                gain: -0.5
            }
        );
    }

    #[rstest]
    #[case("x 7 1 1.25", "cut.feature")]
    #[case("2 -7 1 1.25", "cut.index")]
    #[case("2 7 maybe 1.25", "cut.valid")]
    #[case("2 7 1 high", "cut.gain")]
    fn reports_bad_field(#[case] input: &str, #[case] expected: &str) {
        match read(input).unwrap_err() {
            ReadError::Malformed(MalformedInput::InvalidValue { field, .. }) => {
                assert_eq!(field, expected)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_gain_is_unexpected_end() {
        assert!(matches!(
            read("2 7 1\n").unwrap_err(),
            ReadError::Malformed(MalformedInput::UnexpectedEnd { context: "cut.gain" })
        ));
    }
}
