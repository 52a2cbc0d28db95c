//! Primitive values with a textual round-trip.

use std::io::{self, Write};

use super::options::{BoolStyle, FloatFormat, TextWriteOptions};

/// A primitive value that can be written as, and parsed from, one token.
///
/// Implemented for the integer types, `bool`, `f32` and `f64`. The float
/// implementations override [`non_finite`](TextValue::non_finite) so the
/// sequence writer can warn about NaN and infinities.
pub trait TextValue: Sized {
    /// Human-readable type name used in parse errors.
    const TYPE_NAME: &'static str;

    /// Write this value's token (no separators).
    fn write_text<W: Write>(&self, out: &mut W, options: &TextWriteOptions) -> io::Result<()>;

    /// Parse a single token.
    fn parse_text(token: &str) -> Result<Self, String>;

    /// `Some(value)` if this is a non-finite floating-point value.
    #[inline]
    fn non_finite(&self) -> Option<f64> {
        None
    }
}

macro_rules! impl_text_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                #[inline]
                fn write_text<W: Write>(&self, out: &mut W, _: &TextWriteOptions) -> io::Result<()> {
                    write!(out, "{self}")
                }

                #[inline]
                fn parse_text(token: &str) -> Result<Self, String> {
                    token.parse().map_err(|e: std::num::ParseIntError| e.to_string())
                }
            }
        )*
    };
}

impl_text_value_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl TextValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn write_text<W: Write>(&self, out: &mut W, options: &TextWriteOptions) -> io::Result<()> {
        let token = match (options.bool_style, *self) {
            (BoolStyle::Numeric, true) => "1",
            (BoolStyle::Numeric, false) => "0",
            (BoolStyle::Word, true) => "true",
            (BoolStyle::Word, false) => "false",
        };
        out.write_all(token.as_bytes())
    }

    fn parse_text(token: &str) -> Result<Self, String> {
        match token {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => Err("expected 0, 1, true or false".to_string()),
        }
    }
}

macro_rules! impl_text_value_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                #[inline]
                fn write_text<W: Write>(&self, out: &mut W, options: &TextWriteOptions) -> io::Result<()> {
                    match options.float_format {
                        FloatFormat::Shortest => write!(out, "{self}"),
                        FloatFormat::Significant(digits) => {
                            let text = format_significant(f64::from(*self), digits);
                            // Rounding up near the type's maximum can overflow on read.
                            if self.is_finite() && !text.parse::<$ty>().is_ok_and(<$ty>::is_finite) {
                                return write!(out, "{self}");
                            }
                            out.write_all(text.as_bytes())
                        }
                    }
                }

                #[inline]
                fn parse_text(token: &str) -> Result<Self, String> {
                    token.parse().map_err(|e: std::num::ParseFloatError| e.to_string())
                }

                #[inline]
                fn non_finite(&self) -> Option<f64> {
                    (!self.is_finite()).then_some(f64::from(*self))
                }
            }
        )*
    };
}

impl_text_value_float!(f32, f64);

/// Format `value` the way `printf("%.*g", digits, value)` does.
fn format_significant(value: f64, digits: u8) -> String {
    if !value.is_finite() || value == 0.0 {
        return value.to_string();
    }

    let digits = usize::from(digits.clamp(1, 17));
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{value:.decimals$}");
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
