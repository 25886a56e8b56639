//! Output buffer and the composite (sequence and record) renderers.
//!
//! A [Sink] is created by [crate::marshal_cfg] for exactly one top-level value. It only ever
//! grows and is frozen once with [Sink::finish]. Composite values are written through the
//! [Sequence] and [Record] builders, which take care of delimiters and separators and recurse
//! into [crate::write_value] for every contained value.

use crate::{types::primitives::write_str, write_value, Config, Error, Write};
use bytes::{BufMut, Bytes, BytesMut};

const SEQUENCE_OPEN: &[u8] = b"{";
const SEQUENCE_CLOSE: &[u8] = b"}";
const RECORD_OPEN: &[u8] = b"<|";
const RECORD_CLOSE: &[u8] = b"|>";
const RULE: &[u8] = b"->";
const SEPARATOR: u8 = b',';

/// Append-only destination for encoded output.
#[derive(Debug)]
pub struct Sink {
    buf: BytesMut,
    cfg: Config,
    depth: usize,
}

impl Sink {
    /// Creates an empty sink that renders according to `cfg`.
    pub fn new(cfg: Config) -> Self {
        Self {
            buf: BytesMut::new(),
            cfg,
            depth: 0,
        }
    }

    /// Returns the configuration this sink renders with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends raw bytes without any quoting or escaping.
    #[inline]
    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Appends a single raw byte.
    #[inline]
    pub fn put_u8(&mut self, byte: u8) {
        self.buf.put_u8(byte);
    }

    /// Writes an already-formatted value (a number or a symbol) verbatim.
    pub fn put_fmt(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), Error> {
        std::fmt::Write::write_fmt(&mut self.buf, args)?;
        Ok(())
    }

    /// Opens a sequence (`{...}`).
    pub fn sequence(&mut self) -> Result<Sequence<'_>, Error> {
        self.enter()?;
        self.put_slice(SEQUENCE_OPEN);
        Ok(Sequence {
            sink: self,
            first: true,
        })
    }

    /// Writes every item of `items` as a single sequence.
    pub fn put_sequence<'a, T, I>(&mut self, items: I) -> Result<(), Error>
    where
        T: Write + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut seq = self.sequence()?;
        for item in items {
            seq.element(item)?;
        }
        seq.end();
        Ok(())
    }

    /// Opens a record (`<|...|>`).
    pub fn record(&mut self) -> Result<Record<'_>, Error> {
        self.enter()?;
        self.put_slice(RECORD_OPEN);
        Ok(Record {
            sink: self,
            first: true,
        })
    }

    /// Encodes `value` into a new buffer with this sink's configuration, starting at its current
    /// nesting depth. Nothing is appended to `self`.
    ///
    /// [crate::Render] implementations use this to encode their sub-values.
    pub fn marshal<T: Write + ?Sized>(&self, value: &T) -> Result<Bytes, Error> {
        let mut child = Self {
            buf: BytesMut::new(),
            cfg: self.cfg,
            depth: self.depth,
        };
        write_value(&mut child, value)?;
        Ok(child.finish())
    }

    /// Freezes the written bytes.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }

    fn enter(&mut self) -> Result<(), Error> {
        if let Some(max) = self.cfg.max_depth {
            if self.depth >= max {
                return Err(Error::DepthExceeded(max));
            }
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// An open sequence. Dropping it without calling [Sequence::end] leaves the sink unterminated,
/// which only happens on the error path where the sink is discarded anyway.
#[must_use = "a sequence must be closed with `end`"]
pub struct Sequence<'a> {
    sink: &'a mut Sink,
    first: bool,
}

impl Sequence<'_> {
    /// Appends one element, separated from the previous one by a comma.
    pub fn element<T: Write + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        if !std::mem::take(&mut self.first) {
            self.sink.put_u8(SEPARATOR);
        }
        write_value(self.sink, value)
    }

    /// Closes the sequence.
    pub fn end(self) {
        self.sink.put_slice(SEQUENCE_CLOSE);
        self.sink.leave();
    }
}

/// An open record.
#[must_use = "a record must be closed with `end`"]
pub struct Record<'a> {
    sink: &'a mut Sink,
    first: bool,
}

impl Record<'_> {
    /// Appends a `"name"->value` member.
    pub fn member<T: Write + ?Sized>(&mut self, name: &str, value: &T) -> Result<(), Error> {
        if !std::mem::take(&mut self.first) {
            self.sink.put_u8(SEPARATOR);
        }
        write_str(self.sink, name);
        self.sink.put_slice(RULE);
        write_value(self.sink, value)
    }

    /// Closes the record.
    pub fn end(self) {
        self.sink.put_slice(RECORD_CLOSE);
        self.sink.leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink() -> Sink {
        Sink::new(Config::default())
    }

    #[test]
    fn test_len() {
        let mut sink = sink();
        assert!(sink.is_empty());
        sink.put_slice(b"True");
        sink.put_u8(SEPARATOR);
        assert_eq!(sink.len(), 5);
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        let mut sink = sink();
        sink.sequence().unwrap().end();
        assert_eq!(sink.finish(), "{}");
    }

    #[test]
    fn test_sequence_separators() {
        let mut sink = sink();
        let mut seq = sink.sequence().unwrap();
        seq.element(&0i32).unwrap();
        seq.element(&-1i32).unwrap();
        seq.element("x").unwrap();
        seq.end();
        assert_eq!(sink.finish(), r#"{0,-1,"x"}"#);
    }

    #[test]
    fn test_empty_record() {
        let mut sink = sink();
        sink.record().unwrap().end();
        assert_eq!(sink.finish(), "<||>");
    }

    #[test]
    fn test_record_members() {
        let mut sink = sink();
        let mut rec = sink.record().unwrap();
        rec.member("X", &1u8).unwrap();
        rec.member("Name \"quoted\"", &true).unwrap();
        rec.end();
        assert_eq!(sink.finish(), r#"<|"X"->1,"Name \"quoted\""->True|>"#);
    }

    #[test]
    fn test_put_sequence() {
        let mut sink = sink();
        sink.put_sequence(&[1u32, 2, 3]).unwrap();
        assert_eq!(sink.finish(), "{1,2,3}");
    }

    #[test]
    fn test_element_error_stops() {
        let mut sink = sink();
        let mut seq = sink.sequence().unwrap();
        seq.element(&1u8).unwrap();
        let missing: Option<u8> = None;
        assert!(matches!(
            seq.element(&missing),
            Err(Error::Unencodable("absent value"))
        ));
    }

    #[test]
    fn test_depth_limit() {
        let cfg = Config {
            max_depth: Some(2),
            ..Config::default()
        };
        let mut sink = Sink::new(cfg);
        let nested = vec![vec![vec![1u8]]];
        assert!(matches!(
            write_value(&mut sink, &nested),
            Err(Error::DepthExceeded(2))
        ));

        let mut sink = Sink::new(cfg);
        write_value(&mut sink, &vec![vec![1u8], vec![2u8]]).unwrap();
        assert_eq!(sink.finish(), "{{1},{2}}");
    }

    #[test]
    fn test_marshal_nested() {
        let cfg = Config {
            max_depth: Some(2),
            ..Config::default()
        };
        let mut sink = Sink::new(cfg);
        let seq = sink.sequence().unwrap();
        assert_eq!(seq.sink.marshal(&vec![1u8]).unwrap(), "{1}");
        assert!(matches!(
            seq.sink.marshal(&vec![vec![1u8]]),
            Err(Error::DepthExceeded(2))
        ));
        assert_eq!(seq.sink.len(), 1);
        seq.end();

        // The nested encoding is not appended.
        assert_eq!(sink.finish(), "{}");
    }
}
