//! Renderers for Rust primitive types.
//!
//! # Numbers
//!
//! Integers of every width are written in plain decimal. Floats are written with the shortest
//! digit sequence that round-trips for their own type, without a trailing `.0`, so `1.0` is
//! written as `1`. Magnitudes whose decimal exponent falls outside `-4..21` use the Wolfram
//! `*^` notation (`1.5*^-7`) unless [crate::Exponent::Never] is configured. There is no literal
//! for non-finite floats, so they are written as the symbols `Indeterminate`, `Infinity` and
//! `-Infinity`.
//!
//! # Strings
//!
//! Strings are double-quoted. `"` and `\` are backslash-escaped, the common control characters
//! use their named escapes (`\n`, `\t`, `\r`, `\b`, `\f`) and every other control character is
//! written as a `\.xx` hex escape. All other characters are copied through as UTF-8.

use crate::{Error, Sink, Write};

const TRUE: &[u8] = b"True";
const FALSE: &[u8] = b"False";
const QUOTE: u8 = b'"';
const HEX_ESCAPE: &[u8] = br"\.";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const EXPONENT: &[u8] = b"*^";
const INDETERMINATE: &[u8] = b"Indeterminate";
const INFINITY: &[u8] = b"Infinity";
const NEG_INFINITY: &[u8] = b"-Infinity";

/// Writes `True` or `False`.
#[inline]
pub fn write_bool(sink: &mut Sink, value: bool) {
    sink.put_slice(if value { TRUE } else { FALSE });
}

/// Writes `value` as a quoted, escaped string literal.
pub fn write_str(sink: &mut Sink, value: &str) {
    let bytes = value.as_bytes();
    sink.put_u8(QUOTE);
    let mut start = 0;
    for (i, c) in value.char_indices() {
        let named = named_escape(c);
        if named.is_none() && !c.is_control() {
            continue;
        }
        sink.put_slice(&bytes[start..i]);
        start = i + c.len_utf8();
        match named {
            Some(escape) => sink.put_slice(escape),
            None => write_hex_escape(sink, c),
        }
    }
    sink.put_slice(&bytes[start..]);
    sink.put_u8(QUOTE);
}

fn named_escape(c: char) -> Option<&'static [u8]> {
    match c {
        '"' => Some(br#"\""#),
        '\\' => Some(br"\\"),
        '\n' => Some(br"\n"),
        '\t' => Some(br"\t"),
        '\r' => Some(br"\r"),
        '\u{8}' => Some(br"\b"),
        '\u{c}' => Some(br"\f"),
        _ => None,
    }
}

// Control characters (Unicode category Cc) all lie below U+00A0.
fn write_hex_escape(sink: &mut Sink, c: char) {
    let code = c as u32;
    debug_assert!(code <= 0xFF);
    sink.put_slice(HEX_ESCAPE);
    sink.put_u8(HEX_DIGITS[(code >> 4) as usize & 0xF]);
    sink.put_u8(HEX_DIGITS[code as usize & 0xF]);
}

/// Splits the `{:e}` form of a float into its mantissa and decimal exponent.
fn split_exponent(scientific: &str) -> Result<(&str, i32), Error> {
    let (mantissa, exp) = scientific
        .split_once('e')
        .ok_or(Error::Invalid("float", "missing exponent"))?;
    let exp = exp
        .parse()
        .map_err(|_| Error::Invalid("float", "malformed exponent"))?;
    Ok((mantissa, exp))
}

macro_rules! impl_integer {
    ($($type:ty),+) => {
        $(
            impl Write for $type {
                #[inline]
                fn write(&self, sink: &mut Sink) -> Result<(), Error> {
                    sink.put_fmt(format_args!("{}", self))
                }
            }
        )+
    };
}

impl_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float {
    ($type:ty) => {
        impl Write for $type {
            fn write(&self, sink: &mut Sink) -> Result<(), Error> {
                if self.is_nan() {
                    sink.put_slice(INDETERMINATE);
                    return Ok(());
                }
                if self.is_infinite() {
                    sink.put_slice(if self.is_sign_negative() {
                        NEG_INFINITY
                    } else {
                        INFINITY
                    });
                    return Ok(());
                }

                let scientific = format!("{:e}", self);
                let (mantissa, exp) = split_exponent(&scientific)?;
                if sink.config().exponent.is_scientific(exp) {
                    sink.put_slice(mantissa.as_bytes());
                    sink.put_slice(EXPONENT);
                    sink.put_fmt(format_args!("{}", exp))
                } else {
                    sink.put_fmt(format_args!("{}", self))
                }
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

impl Write for bool {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        write_bool(sink, *self);
        Ok(())
    }
}

impl Write for str {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        write_str(sink, self);
        Ok(())
    }
}

impl Write for String {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        write_str(sink, self);
        Ok(())
    }
}

impl Write for char {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        write_str(sink, self.encode_utf8(&mut [0; 4]));
        Ok(())
    }
}

impl Write for () {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("unit"))
    }
}
