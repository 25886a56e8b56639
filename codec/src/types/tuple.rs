//! Sequence implementations for tuples
//!
//! Tuples are heterogeneous sequences: `(1, "a", true)` is written as `{1,"a",True}`.

use crate::{Error, Sink, Write};
use paste::paste;

macro_rules! impl_write_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                #[inline]
                fn write(&self, sink: &mut Sink) -> Result<(), Error> {
                    let mut seq = sink.sequence()?;
                    $( seq.element(&self.$index)?; )*
                    seq.end();
                    Ok(())
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_write_for_tuple!(0);
impl_write_for_tuple!(0, 1);
impl_write_for_tuple!(0, 1, 2);
impl_write_for_tuple!(0, 1, 2, 3);
impl_write_for_tuple!(0, 1, 2, 3, 4);
impl_write_for_tuple!(0, 1, 2, 3, 4, 5);
impl_write_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_write_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_write_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_write_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_write_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_write_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
