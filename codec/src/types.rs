//! Implementations of [crate::Write] for common types

pub mod bytes;
pub mod map;
pub mod net;
pub mod primitives;
pub mod tuple;
pub mod vec;
pub mod wrappers;
