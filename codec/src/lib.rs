//! Serialize structured data into Wolfram Language expressions.
//!
//! # Overview
//!
//! An encoder that turns Rust values into the literal expression syntax understood by
//! Mathematica: lists, associations, booleans, strings and numbers. Output is produced in one
//! pass and is either complete and well-formed or not produced at all.
//!
//! ```text
//! value      := bool | number | string | sequence | record
//! bool       := "True" | "False"
//! string     := '"' escaped-chars '"'
//! sequence   := "{" [ value ("," value)* ] "}"
//! record     := "<|" [ member ("," member)* ] "|>"
//! member     := string "->" value
//! ```
//!
//! There is no decoder.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `u8`..`u128`, `usize`, `i8`..`i128`, `isize`, `f32`, `f64`, `bool`, `char`,
//!   `str`, `String`
//! - Sequences: slices, arrays, `Vec<T>`, `VecDeque<T>`, `BTreeSet<T>`, `Bytes`, tuples
//! - Network addresses, written as strings
//! - References and smart pointers, which encode as their target, and `Option<T>`
//!
//! Maps, hash sets, `None`, `()`, raw pointers and channels are rejected with
//! [Error::Unencodable].
//!
//! Structs become records with `#[derive(Write)]`. Only `pub` fields are written, in
//! declaration order, named by their identifier or by `#[mathematica(rename = "...")]`.
//! A type can take over its own rendering entirely by implementing [Render].
//!
//! # Resolution Order
//!
//! Each value is rendered by the first rule that applies to it:
//! 1. a custom [Render] implementation (`#[mathematica(render)]`, [Rendered]),
//! 2. numbers,
//! 3. booleans,
//! 4. strings,
//! 5. `Display` stringification (`#[mathematica(display)]`, [Text]),
//! 6. sequences and records, or [Error::Unencodable] for any other shape.
//!
//! # Example
//!
//! ```
//! use mathematica_codec::{marshal, Write};
//!
//! #[derive(Write)]
//! pub struct Sample {
//!     pub name: String,
//!     #[mathematica(rename = "Values")]
//!     pub values: Vec<f64>,
//!     pub valid: bool,
//!     checksum: u32,
//! }
//!
//! let sample = Sample {
//!     name: "run-1".into(),
//!     values: vec![1.0, 2.5],
//!     valid: true,
//!     checksum: 7,
//! };
//! assert_eq!(
//!     marshal(&sample).unwrap(),
//!     r#"<|"name"->"run-1","Values"->{1,2.5},"valid"->True|>"#
//! );
//! # let _ = sample.checksum;
//! ```
//!
//! Encoding recurses once per level of nesting and does not detect cycles. Use
//! [Config::max_depth] to bound the nesting of untrusted values.

pub mod codec;
pub mod config;
pub mod error;
pub mod sink;
pub mod types;

// Re-export main types and traits
pub use codec::{marshal, marshal_cfg, write_rendered, write_value, Encode, Render, Write};
pub use config::{Config, Exponent};
pub use error::Error;
pub use sink::{Record, Sequence, Sink};
pub use types::{
    primitives::{write_bool, write_str},
    wrappers::{write_display, Rendered, Text},
};

/// Derives [Write] for a struct.
///
/// Structs with named fields encode as records and tuple structs as sequences. Only `pub`
/// fields are written.
///
/// Container attributes:
/// - `#[mathematica(render)]`: encode through the type's [Render] implementation.
/// - `#[mathematica(display)]`: encode the type's `Display` output as a string.
///
/// Field attributes:
/// - `#[mathematica(rename = "...")]`: emitted member name.
/// - `#[mathematica(skip)]`: never write this field.
pub use mathematica_macros_impl::Write;
