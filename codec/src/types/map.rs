//! Unordered and keyed collections.
//!
//! Maps have no sequence or record shape (record members are fixed by a type, map keys are
//! not), and hash sets have no stable element order. All of them fail to encode.

use crate::{Error, Sink, Write};
use std::collections::{BTreeMap, HashMap, HashSet};

impl<K, V, S> Write for HashMap<K, V, S> {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("map"))
    }
}

impl<K, V> Write for BTreeMap<K, V> {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("map"))
    }
}

impl<T, S> Write for HashSet<T, S> {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("unordered set"))
    }
}
