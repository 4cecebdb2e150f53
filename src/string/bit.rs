//! Bit string literals.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use bytes::BufMut;
use crate::error::ContentError;


//------------ append_bits ---------------------------------------------------

/// Appends the content octets of a bit string literal to `target`.
///
/// The literal `bits` consists of the characters `0` and `1`, each
/// providing one bit. The first content octet is the number of unused bits
/// in the last octet. An optional single `|` marks the start of explicit
/// padding bits: the bits after it are placed into the unused bits of the
/// last octet. They may not spill over into another octet.
///
/// Nothing is written if the literal is invalid.
pub fn append_bits<B: BufMut>(
    target: &mut B, bits: &str
) -> Result<(), ContentError> {
    let mut value = vec![0u8];
    let mut count = 0usize;
    let mut padding = None;
    for (idx, ch) in bits.char_indices() {
        match ch {
            '0' | '1' => {
                if count % 8 == 0 {
                    value.push(0)
                }
                if ch == '1' {
                    value[count / 8 + 1] |= 0x80 >> (count % 8);
                }
                count += 1;
            }
            '|' => {
                if padding.is_some() {
                    xerr!(return Err("duplicate | in bit string".into()))
                }
                let available = (value.len() - 1) * 8 - count;
                let explicit = bits.len() - idx - 1;
                if explicit > available {
                    xerr!(return Err(format!(
                        "expected at most {} explicit padding bits, \
                         found {}",
                        available, explicit
                    ).into()))
                }
                padding = Some(available);
            }
            _ => {
                xerr!(return Err(format!(
                    "unexpected character {:?} in bit string", ch
                ).into()))
            }
        }
    }
    // Panic: Both values are less than 8.
    value[0] = match padding {
        Some(padding) => padding as u8,
        None => ((value.len() - 1) * 8 - count) as u8,
    };
    target.put_slice(&value);
    Ok(())
}


//------------ fmt_bits ------------------------------------------------------

/// Writes the content octets of a bit string as a bit string literal.
///
/// Returns `Ok(false)` without writing anything if the content can’t be
/// represented as a literal, i.e., if it is empty or the first octet is not
/// a valid number of unused bits. Unused bits in the last octet are only
/// written if any of them is set, separated by a `|`.
pub fn fmt_bits(
    content: &[u8], f: &mut impl fmt::Write
) -> Result<bool, fmt::Error> {
    let Some((&unused, octets)) = content.split_first() else {
        return Ok(false)
    };
    if unused >= 8 || (octets.is_empty() && unused != 0) {
        return Ok(false)
    }
    let significant = 8 - usize::from(unused);
    f.write_str("b`")?;
    for (idx, &octet) in octets.iter().enumerate() {
        let last = idx + 1 == octets.len();
        let mut octet = octet;
        for bit in 0..8 {
            if last && bit == significant {
                if octet == 0 {
                    break
                }
                f.write_char('|')?;
            }
            f.write_char(if octet & 0x80 == 0 { '0' } else { '1' })?;
            octet <<= 1;
        }
    }
    f.write_char('`')?;
    Ok(true)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parse(bits: &str) -> Option<Vec<u8>> {
        let mut res = Vec::new();
        append_bits(&mut res, bits).ok()?;
        Some(res)
    }

    fn format(content: &[u8]) -> Option<String> {
        let mut res = String::new();
        if fmt_bits(content, &mut res).unwrap() {
            Some(res)
        }
        else {
            None
        }
    }

    #[test]
    fn parse_bits() {
        assert_eq!(parse("").unwrap(), b"\x00");
        assert_eq!(parse("1").unwrap(), b"\x07\x80");
        assert_eq!(parse("11").unwrap(), b"\x06\xc0");
        assert_eq!(parse("1111111").unwrap(), b"\x01\xfe");
        assert_eq!(parse("1010101001010101").unwrap(), b"\x00\xaa\x55");
        assert_eq!(parse("101010100101").unwrap(), b"\x04\xaa\x50");
        assert_eq!(parse("101010100|1010101").unwrap(), b"\x07\xaa\x55");
        assert_eq!(parse("101010100101|010").unwrap(), b"\x04\xaa\x54");
        assert_eq!(parse("|").unwrap(), b"\x00");
        assert!(parse("0000000|01").is_none());
        assert!(parse("0|0|0").is_none());
        assert!(parse("hi there!").is_none());
        assert!(parse("012").is_none());
    }

    #[test]
    fn format_bits() {
        assert_eq!(format(b"\x00").unwrap(), "b``");
        assert_eq!(format(b"\x07\x80").unwrap(), "b`1`");
        assert_eq!(format(b"\x00\xaa\x55").unwrap(), "b`1010101001010101`");
        assert_eq!(format(b"\x04\xaa\x50").unwrap(), "b`101010100101`");
        assert_eq!(format(b"\x07\xaa\x55").unwrap(), "b`101010100|1010101`");
        assert_eq!(format(b"\x04\xaa\x54").unwrap(), "b`101010100101|0100`");
        assert_eq!(format(b"\x07\x00").unwrap(), "b`0`");
        assert!(format(b"").is_none());
        assert!(format(b"\x08\x00").is_none());
        assert!(format(b"\x01").is_none());
    }

    #[test]
    fn round_trip() {
        for content in [
            b"\x00".as_ref(), b"\x07\x80", b"\x03\xff\xff", b"\x05\x12\x34\x56",
            b"\x00\x01\x02\x03\x04", b"\x04\xaa\x54",
        ] {
            let literal = format(content).unwrap();
            let bits = &literal[2..literal.len() - 1];
            assert_eq!(parse(bits).unwrap(), content, "{}", literal);
        }
    }
}
