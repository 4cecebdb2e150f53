//! Fallback literals for arbitrary octets.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::string::fmt_hex;


/// Writes `data` as either a quoted string or a hex literal.
///
/// A quoted string is used if more than 85 percent of the octets are
/// printable ASCII characters or newlines. Otherwise, the data is written
/// in hex.
pub fn fmt_literal(data: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    let printable = data.iter().filter(|&&ch| {
        ch == b'\n' || is_printable_ascii(ch)
    }).count();
    if !data.is_empty() && printable * 100 > data.len() * 85 {
        fmt_quoted(data, f)
    }
    else {
        fmt_hex(data, f)
    }
}

/// Writes `data` as a quoted string.
///
/// Newlines, quotes and backslashes are escaped with a backslash. All
/// other octets that aren’t printable ASCII characters become `\x` escapes.
pub fn fmt_quoted(data: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    f.write_char('"')?;
    for &ch in data {
        match ch {
            b'\n' => f.write_str("\\n")?,
            b'"' => f.write_str("\\\"")?,
            b'\\' => f.write_str("\\\\")?,
            _ if is_printable_ascii(ch) => f.write_char(char::from(ch))?,
            _ => write!(f, "\\x{:02x}", ch)?,
        }
    }
    f.write_char('"')
}

fn is_printable_ascii(ch: u8) -> bool {
    (0x20..0x7f).contains(&ch)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn literal(data: &[u8]) -> String {
        let mut res = String::new();
        fmt_literal(data, &mut res).unwrap();
        res
    }

    #[test]
    fn choice() {
        assert_eq!(
            literal(b"hello\nworld\n\xff\"\\"),
            r#""hello\nworld\n\xff\"\\""#
        );
        assert_eq!(literal(b"\x01\x02\x03\x04\x05"), "`0102030405`");
        assert_eq!(literal(b"garbage"), "\"garbage\"");
        assert_eq!(literal(b""), "``");

        // Exactly 85 percent isn’t enough.
        let mut data = vec![b'a'; 17];
        data.extend_from_slice(&[0; 3]);
        assert!(literal(&data).starts_with('`'));
        data[17] = b'a';
        assert!(literal(&data).starts_with('"'));
    }

    #[test]
    fn quoted() {
        let mut res = String::new();
        fmt_quoted(b"a\tb\x7f\x00 ~", &mut res).unwrap();
        assert_eq!(res, r#""a\x09b\x7f\x00 ~""#);
    }
}
