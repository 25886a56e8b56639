//! Sequence implementations for ordered collections

use crate::{Error, Sink, Write};
use std::collections::{BTreeSet, VecDeque};

impl<T: Write> Write for [T] {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        sink.put_sequence(self)
    }
}

impl<T: Write, const N: usize> Write for [T; N] {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        sink.put_sequence(self)
    }
}

impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        sink.put_sequence(self)
    }
}

impl<T: Write> Write for VecDeque<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        sink.put_sequence(self)
    }
}

// Iterates in ascending order, so the output is stable.
impl<T: Write> Write for BTreeSet<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        sink.put_sequence(self)
    }
}
