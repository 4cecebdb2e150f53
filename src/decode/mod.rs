//! Parsing encoded data.
//!
//! This module provides the binary side of the translation: splitting BER
//! encoded data into elements. The parser is deliberately lenient. It
//! accepts non-minimal identifier and length octets and records them as
//! long form overrides so the exact encoding can be reproduced later. It
//! also accepts tag number zero anywhere.
//!
//! Parsing works on a [`SliceSource`], a cursor over a byte slice. The
//! functions [`parse_tag`], [`parse_tag_and_length`], and [`parse_element`]
//! are convenience wrappers that take a slice and return the remainder.
//! Errors are reported as [`DecodeError`]s that carry the position at which
//! parsing failed.

pub use self::element::{
    Element, MAX_LENGTH, parse_element, parse_element_with_limit, parse_tag,
    parse_tag_and_length, parse_tag_and_length_with_limit, starts_with_eoc,
};
pub use self::error::DecodeError;
pub use self::source::{Pos, SliceSource};

mod element;
mod error;
mod source;
