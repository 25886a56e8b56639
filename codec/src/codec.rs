//! Core encoding traits and the top-level entry point

use crate::{error::Error, sink::Sink, Config};
use bytes::Bytes;
use tracing::{debug, trace};

/// Trait for types that can be written (encoded) as a Wolfram Language expression.
///
/// Every implementation decides how its values are classified: as a custom rendering, a
/// primitive, a sequence, a record, or an unencodable shape. Implementations for composite
/// types recurse through [write_value] for each contained value.
///
/// The trait is object safe, so heterogeneous sequences can be built from `Box<dyn Write>`.
pub trait Write {
    /// Encodes this value by appending to the sink.
    ///
    /// Returns the first error encountered. On error, the contents of the sink are unspecified
    /// and must be discarded.
    fn write(&self, sink: &mut Sink) -> Result<(), Error>;
}

/// Trait for values that supply their own complete encoding.
///
/// When a type routes its [Write] implementation through `Render` (with
/// `#[mathematica(render)]` or the [crate::Rendered] wrapper), the rendered bytes are written
/// verbatim and no other rule applies to that value.
///
/// `scope` is the sink the rendering will be appended to. Sub-values should be encoded with
/// [Sink::marshal] so they inherit its [Config] and remaining depth budget.
pub trait Render {
    /// Produces the full encoding of `self`, or fails.
    fn render(&self, scope: &Sink) -> Result<Bytes, Error>;
}

impl Write for dyn Render + '_ {
    #[inline]
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        write_rendered(sink, self)
    }
}

/// Writes the output of a [Render] implementation verbatim.
pub fn write_rendered<T: Render + ?Sized>(sink: &mut Sink, value: &T) -> Result<(), Error> {
    let rendered = value.render(sink)?;
    sink.put_slice(&rendered);
    Ok(())
}

/// Encodes a single (possibly nested) value into the sink.
#[inline]
pub fn write_value<T: Write + ?Sized>(sink: &mut Sink, value: &T) -> Result<(), Error> {
    value.write(sink)
}

/// Encodes `value` with the default [Config].
///
/// Returns the complete expression text, or the first error encountered. Partial output is
/// never returned.
///
/// # Examples
///
/// ```
/// use mathematica_codec::marshal;
///
/// assert_eq!(marshal(&vec![0, -1]).unwrap(), "{0,-1}");
/// assert_eq!(marshal(&(true, "hunter", 1.5)).unwrap(), r#"{True,"hunter",1.5}"#);
/// ```
pub fn marshal<T: Write + ?Sized>(value: &T) -> Result<Bytes, Error> {
    marshal_cfg(value, &Config::default())
}

/// Encodes `value` with the provided configuration.
pub fn marshal_cfg<T: Write + ?Sized>(value: &T, cfg: &Config) -> Result<Bytes, Error> {
    let mut sink = Sink::new(*cfg);
    match write_value(&mut sink, value) {
        Ok(()) => {
            let encoded = sink.finish();
            trace!(len = encoded.len(), "marshaled value");
            Ok(encoded)
        }
        Err(err) => {
            debug!(?err, "failed to marshal value");
            Err(err)
        }
    }
}

/// Extension trait providing method-call access to [marshal].
pub trait Encode: Write {
    /// Encodes `self` with the default [Config].
    ///
    /// (Provided method).
    fn encode(&self) -> Result<Bytes, Error> {
        marshal(self)
    }

    /// Encodes `self` with the provided configuration.
    ///
    /// (Provided method).
    fn encode_cfg(&self, cfg: &Config) -> Result<Bytes, Error> {
        marshal_cfg(self, cfg)
    }
}

// Automatically implement `Encode` for types that implement `Write`.
impl<T: Write + ?Sized> Encode for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Exponent;
    use std::collections::HashMap;

    struct Symbol(&'static str);

    impl Render for Symbol {
        fn render(&self, _: &Sink) -> Result<Bytes, Error> {
            Ok(Bytes::from_static(self.0.as_bytes()))
        }
    }

    struct Broken;

    // Writes `Quantity[magnitude, "unit"]` around encoded sub-values.
    struct Quantity {
        magnitude: Vec<f64>,
        unit: &'static str,
    }

    impl Render for Quantity {
        fn render(&self, scope: &Sink) -> Result<Bytes, Error> {
            let mut out = b"Quantity[".to_vec();
            out.extend_from_slice(&scope.marshal(&self.magnitude)?);
            out.push(b',');
            out.extend_from_slice(&scope.marshal(self.unit)?);
            out.push(b']');
            Ok(out.into())
        }
    }

    impl Render for Broken {
        fn render(&self, _: &Sink) -> Result<Bytes, Error> {
            Err(Error::Invalid("Broken", "cannot render"))
        }
    }

    #[test]
    fn test_marshal_primitives() {
        assert_eq!(marshal(&true).unwrap(), "True");
        assert_eq!(marshal(&1u8).unwrap(), "1");
        assert_eq!(marshal("hunter").unwrap(), r#""hunter""#);
    }

    #[test]
    fn test_marshal_unencodable() {
        let mut map = HashMap::new();
        map.insert("a", 1);
        assert!(matches!(marshal(&map), Err(Error::Unencodable("map"))));

        // The error aborts the whole value, not just the failing element.
        let values: Vec<Box<dyn Write>> = vec![Box::new(1u8), Box::new(map)];
        assert!(matches!(marshal(&values), Err(Error::Unencodable("map"))));
    }

    #[test]
    fn test_render_verbatim() {
        let symbol = Symbol("Pi");
        assert_eq!(marshal(&symbol as &dyn Render).unwrap(), "Pi");
    }

    #[test]
    fn test_render_inherits_config() {
        let quantity = Quantity {
            magnitude: vec![1e-7],
            unit: "Meters",
        };
        let value: [&dyn Render; 1] = [&quantity];
        assert_eq!(
            marshal(&value).unwrap(),
            r#"{Quantity[{1*^-7},"Meters"]}"#
        );

        let cfg = Config {
            exponent: Exponent::Never,
            max_depth: Some(2),
        };
        assert_eq!(
            marshal_cfg(&value, &cfg).unwrap(),
            r#"{Quantity[{0.0000001},"Meters"]}"#
        );

        // The rendered sub-sequence is nested inside the outer sequence.
        let cfg = Config {
            max_depth: Some(1),
            ..cfg
        };
        assert!(matches!(
            marshal_cfg(&value, &cfg),
            Err(Error::DepthExceeded(1))
        ));
    }

    #[test]
    fn test_render_error_propagated() {
        let broken: &dyn Render = &Broken;
        assert!(matches!(
            marshal(broken),
            Err(Error::Invalid("Broken", "cannot render"))
        ));
    }

    #[test]
    fn test_encode_ext() {
        assert_eq!(vec![1u8, 2].encode().unwrap(), "{1,2}");
        let cfg = Config {
            max_depth: Some(0),
            ..Config::default()
        };
        assert!(matches!(
            vec![1u8].encode_cfg(&cfg),
            Err(Error::DepthExceeded(0))
        ));
    }

    #[test]
    fn test_idempotent() {
        let value = (vec![0.1f64, -2.5], "x\ny", [true, false]);
        assert_eq!(marshal(&value).unwrap(), marshal(&value).unwrap());
    }
}
