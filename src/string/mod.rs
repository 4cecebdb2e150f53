//! The string literals of the text form.
//!
//! Besides plain byte strings, the text form has dedicated literals for the
//! content of BIT STRING values, where the bits are written out one by one,
//! and for the two wide character string types, BMPString using UTF-16 and
//! UniversalString using UTF-32. Arbitrary octets are written as hex
//! literals. This module provides the conversion of these literals in both
//! directions.

//--- Re-exports

pub use self::bit::{append_bits, fmt_bits};
pub use self::hex::{append_hex, fmt_hex, parse_hex_value};
pub use self::unicode::{
    append_utf16, append_utf32, fmt_utf16, fmt_utf32, is_print
};

//--- Private modules

mod bit;
mod hex;
mod unicode;
