//! Pointers, optional values, and the adapters that select a rendering rule.
//!
//! Smart pointers and references are transparent: they encode as the value they point to.
//! `Option` is transparent when `Some` and unencodable when `None`. Raw pointers and channel
//! endpoints carry no encodable contents and always fail.

use crate::{codec::write_rendered, types::primitives::write_str, Error, Render, Sink, Write};
use std::{
    borrow::Cow,
    fmt::{self, Display},
    rc::Rc,
    sync::{
        mpsc::{Receiver, Sender, SyncSender},
        Arc,
    },
};

/// Writes the `Display` output of `value` as a string literal.
pub fn write_display<T: Display + ?Sized>(sink: &mut Sink, value: &T) -> Result<(), Error> {
    let mut text = String::new();
    fmt::Write::write_fmt(&mut text, format_args!("{}", value))?;
    write_str(sink, &text);
    Ok(())
}

/// Encodes the wrapped value as the string produced by its `Display` implementation.
///
/// # Examples
///
/// ```
/// use mathematica_codec::{marshal, Text};
/// use std::path::Path;
///
/// let path = Path::new("/tmp/data.csv");
/// assert_eq!(marshal(&Text(path.display())).unwrap(), r#""/tmp/data.csv""#);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Text<T>(pub T);

impl<T: Display> Write for Text<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        write_display(sink, &self.0)
    }
}

/// Encodes the wrapped value with its [Render] implementation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rendered<T>(pub T);

impl<T: Render> Write for Rendered<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        write_rendered(sink, &self.0)
    }
}

impl<T: Write> Write for Option<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        match self {
            Some(inner) => inner.write(sink),
            None => Err(Error::Unencodable("absent value")),
        }
    }
}

impl<T: Write + ?Sized> Write for &T {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        (**self).write(sink)
    }
}

impl<T: Write + ?Sized> Write for &mut T {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        (**self).write(sink)
    }
}

impl<T: Write + ?Sized> Write for Box<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        (**self).write(sink)
    }
}

impl<T: Write + ?Sized> Write for Rc<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        (**self).write(sink)
    }
}

impl<T: Write + ?Sized> Write for Arc<T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        (**self).write(sink)
    }
}

impl<T: Write + ToOwned + ?Sized> Write for Cow<'_, T> {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        (**self).write(sink)
    }
}

impl<T: ?Sized> Write for *const T {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("raw pointer"))
    }
}

impl<T: ?Sized> Write for *mut T {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("raw pointer"))
    }
}

impl<T> Write for Sender<T> {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("channel"))
    }
}

impl<T> Write for SyncSender<T> {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("channel"))
    }
}

impl<T> Write for Receiver<T> {
    #[inline]
    fn write(&self, _: &mut Sink) -> Result<(), Error> {
        Err(Error::Unencodable("channel"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal;
    use bytes::Bytes;
    use std::sync::mpsc;

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    struct Pi;

    impl Render for Pi {
        fn render(&self, _: &Sink) -> Result<Bytes, Error> {
            Ok(Bytes::from_static(b"Pi"))
        }
    }

    #[test]
    fn test_option() {
        assert_eq!(marshal(&Some(5u8)).unwrap(), "5");
        assert!(matches!(
            marshal(&None::<u8>),
            Err(Error::Unencodable("absent value"))
        ));
    }

    #[test]
    fn test_pointers() {
        let value = vec![1u8, 2];
        assert_eq!(marshal(&&value).unwrap(), "{1,2}");
        assert_eq!(marshal(&Box::new(value.clone())).unwrap(), "{1,2}");
        assert_eq!(marshal(&Rc::new(value.clone())).unwrap(), "{1,2}");
        assert_eq!(marshal(&Arc::new(value)).unwrap(), "{1,2}");
        assert_eq!(marshal(&Box::<str>::from("x")).unwrap(), r#""x""#);
        assert_eq!(marshal(&Arc::<str>::from("y")).unwrap(), r#""y""#);
        assert_eq!(marshal(&Cow::Borrowed("z")).unwrap(), r#""z""#);
    }

    #[test]
    fn test_raw_pointer() {
        let value = 1u8;
        let ptr: *const u8 = &value;
        assert!(matches!(
            marshal(&ptr),
            Err(Error::Unencodable("raw pointer"))
        ));
    }

    #[test]
    fn test_channel() {
        let (sender, receiver) = mpsc::channel::<u8>();
        assert!(matches!(marshal(&sender), Err(Error::Unencodable("channel"))));
        let (sync_sender, _) = mpsc::sync_channel::<u8>(1);
        assert!(matches!(
            marshal(&sync_sender),
            Err(Error::Unencodable("channel"))
        ));
        assert!(matches!(
            marshal(&receiver),
            Err(Error::Unencodable("channel"))
        ));
    }

    #[test]
    fn test_text() {
        assert_eq!(marshal(&Text(42)).unwrap(), r#""42""#);
        assert_eq!(marshal(&Text("a\"b")).unwrap(), r#""a\"b""#);
        assert!(matches!(marshal(&Text(Broken)), Err(Error::Fmt(_))));
    }

    #[test]
    fn test_rendered() {
        assert_eq!(marshal(&Rendered(Pi)).unwrap(), "Pi");
        assert_eq!(marshal(&vec![Rendered(Pi), Rendered(Pi)]).unwrap(), "{Pi,Pi}");
    }
}
