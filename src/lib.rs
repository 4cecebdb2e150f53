//! Translating between BER encoded data and a readable text form.
//!
//! This crate converts data encoded in the Basic Encoding Rules (BER) or
//! its subset, the Distinguished Encoding Rules (DER), into a text form that
//! can be edited and converted back. The conversion in both directions is
//! lossless: any octet sequence, valid encoding or not, survives the trip
//! from octets to text and back unchanged. This makes the text form a good
//! tool for writing test data, including deliberately broken data.
//!
//! # The Text Form
//!
//! The text form is a sequence of tokens, each of which stands for a run of
//! octets. Element headers are written as tag names such as `SEQUENCE` or
//! `[0]` followed by the content in curly braces, which produces the
//! length octets:
//!
//! ```text
//! SEQUENCE {
//!   INTEGER { 1 }
//!   # Comments run until the end of the line.
//!   OCTET_STRING { "hello" `0a0b` }
//! }
//! ```
//!
//! Integers, object identifiers like `1.2.840.113549`, quoted strings, hex
//! literals in backticks, and bit string literals such as ``b`101` `` all
//! produce their content octets. The length of a braced scope can be
//! modified with `indefinite`, `long-form:N` and `adjust-length:N` placed
//! before the opening brace.
//!
//! # Overview
//!
//! The [`encode`] module translates text into octets. Use
//! [`ascii_to_der`] for a one-off translation or [`encode::exec`] with a
//! prepared [`encode::Context`] for defining variables and custom
//! functions. The [`print`] module goes the other way. Use [`render`] or a
//! configured [`print::Printer`]. The [`decode`] module provides the
//! lenient element parser both directions share.
//!
//! The codecs for the content of individual types live in the [`int`],
//! [`oid`], and [`string`] modules, while [`Tag`] and [`Length`] deal with
//! identifier and length octets. Wrapping formats of the command line
//! tools are in [`framing`].
//!
//! ```
//! use der_ascii::{ascii_to_der, render};
//!
//! let der = ascii_to_der(b"SEQUENCE { INTEGER { 1 } }").unwrap();
//! assert_eq!(der.as_ref(), b"\x30\x03\x02\x01\x01");
//! assert_eq!(
//!     render(&der),
//!     "SEQUENCE {\n  INTEGER { 1 }\n}\n"
//! );
//! ```

//--- Re-exports

pub use self::encode::ascii_to_der;
pub use self::error::ContentError;
pub use self::length::Length;
pub use self::oid::{ConstOid, Oid};
pub use self::print::render;
pub use self::tag::{Class, Tag};


//--- Public modules

#[macro_use] mod debug;

pub mod base128;
pub mod decode;
pub mod encode;
pub mod framing;
pub mod int;
pub mod oid;
pub mod print;
pub mod string;


//--- Private modules

mod error;
mod length;
mod tag;
