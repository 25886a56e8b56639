//! Sequence implementations for byte buffers.
//!
//! There is no byte-string literal in the target syntax, so buffers are written as a list of
//! their `u8` values, the same as `Vec<u8>`.

use crate::{Error, Sink, Write};
use bytes::{Bytes, BytesMut};

impl Write for Bytes {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        sink.put_sequence(&self[..])
    }
}

impl Write for BytesMut {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        sink.put_sequence(&self[..])
    }
}
