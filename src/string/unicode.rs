//! Wide character string literals.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use bytes::BufMut;


//------------ Encoding ------------------------------------------------------

/// Appends a code point to `target` in UTF-16BE.
///
/// Values up to `0xFFFF` are written as a single unit as is, so unpaired
/// surrogates can be produced deliberately. Values beyond are written as a
/// surrogate pair. Values that aren’t valid code points are replaced by two
/// U+FFFD units.
pub fn append_utf16<B: BufMut>(target: &mut B, value: u32) {
    if value <= 0xFFFF {
        // Panic: value fits.
        target.put_u16(value as u16);
        return
    }
    match char::from_u32(value) {
        Some(ch) => {
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf) {
                target.put_u16(*unit);
            }
        }
        None => {
            target.put_u16(0xFFFD);
            target.put_u16(0xFFFD);
        }
    }
}

/// Appends a value to `target` in UTF-32BE.
///
/// Any 32 bit value is accepted, valid code point or not.
pub fn append_utf32<B: BufMut>(target: &mut B, value: u32) {
    target.put_u32(value)
}


//------------ Formatting ----------------------------------------------------

/// Writes the content of a BMPString as a `u"…"` literal.
///
/// Surrogate pairs are combined. Characters that aren’t printable are
/// escaped. A trailing odd octet is written as a separate hex literal.
pub fn fmt_utf16(content: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    let units: Vec<u16> = content.chunks_exact(2).map(|chunk| {
        u16::from_be_bytes([chunk[0], chunk[1]])
    }).collect();

    f.write_str("u\"")?;
    let mut idx = 0;
    while let Some(&unit) = units.get(idx) {
        idx += 1;
        if let Some(&next) = units.get(idx) {
            if is_lead_surrogate(unit) && is_trail_surrogate(next) {
                let value = 0x10000
                    + ((u32::from(unit) - 0xD800) << 10)
                    + (u32::from(next) - 0xDC00);
                idx += 1;
                match char::from_u32(value) {
                    Some(ch) if is_print(ch) => f.write_char(ch)?,
                    _ => write!(f, "\\U{:08x}", value)?,
                }
                continue
            }
        }
        fmt_unit(u32::from(unit), f)?;
    }
    f.write_char('"')?;

    if let Some(last) = content.chunks_exact(2).remainder().first() {
        write!(f, " `{:02x}`", last)?;
    }
    Ok(())
}

/// Writes the content of a UniversalString as a `U"…"` literal.
///
/// Trailing octets that don’t make up a full value are written as a
/// separate hex literal.
pub fn fmt_utf32(content: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    let chunks = content.chunks_exact(4);
    let tail = chunks.remainder();

    f.write_str("U\"")?;
    for chunk in chunks {
        fmt_unit(
            u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]), f
        )?;
    }
    f.write_char('"')?;

    if !tail.is_empty() {
        f.write_str(" `")?;
        for octet in tail {
            write!(f, "{:02x}", octet)?;
        }
        f.write_char('`')?;
    }
    Ok(())
}

/// Writes a single value inside a wide string literal.
fn fmt_unit(value: u32, f: &mut impl fmt::Write) -> fmt::Result {
    match char::from_u32(value) {
        Some('\n') => f.write_str("\\n"),
        Some('"') => f.write_str("\\\""),
        Some('\\') => f.write_str("\\\\"),
        Some(ch) if is_print(ch) => f.write_char(ch),
        _ if value <= 0xFF => write!(f, "\\x{:02x}", value),
        _ if value <= 0xFFFF => write!(f, "\\u{:04x}", value),
        _ => write!(f, "\\U{:08x}", value),
    }
}

fn is_lead_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

fn is_trail_surrogate(unit: u16) -> bool {
    (0xDC00..0xE000).contains(&unit)
}


//------------ is_print ------------------------------------------------------

/// Returns whether a character can be written into a literal as is.
///
/// This is true for graphic characters and the space. Control and format
/// characters, whitespace other than the space, private use characters and
/// noncharacters are not printable.
pub fn is_print(ch: char) -> bool {
    if ch == ' ' {
        return true
    }
    if ch.is_control() || ch.is_whitespace() {
        return false
    }
    let value = u32::from(ch);
    !(is_private_use(value) || is_noncharacter(value) || is_format(value))
}

fn is_private_use(value: u32) -> bool {
    (0xE000..=0xF8FF).contains(&value)
        || (0xF_0000..=0xF_FFFD).contains(&value)
        || (0x10_0000..=0x10_FFFD).contains(&value)
}

fn is_noncharacter(value: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&value) || value & 0xFFFE == 0xFFFE
}

fn is_format(value: u32) -> bool {
    matches!(
        value,
        0x00AD | 0x0600..=0x0605 | 0x061C | 0x06DD | 0x070F | 0x0890..=0x0891
        | 0x08E2 | 0x180E | 0x200B..=0x200F | 0x202A..=0x202E
        | 0x2060..=0x2064 | 0x2066..=0x206F | 0xFEFF | 0xFFF9..=0xFFFB
        | 0x110BD | 0x110CD | 0x13430..=0x1343F | 0x1BCA0..=0x1BCA3
        | 0x1D173..=0x1D17A | 0xE0001 | 0xE0020..=0xE007F
    )
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn utf16(values: &[u32]) -> Vec<u8> {
        let mut res = Vec::new();
        for &value in values {
            append_utf16(&mut res, value);
        }
        res
    }

    fn fmt16(content: &[u8]) -> String {
        let mut res = String::new();
        fmt_utf16(content, &mut res).unwrap();
        res
    }

    fn fmt32(content: &[u8]) -> String {
        let mut res = String::new();
        fmt_utf32(content, &mut res).unwrap();
        res
    }

    #[test]
    fn encode() {
        assert_eq!(
            utf16(&[0x61, 0x2603, 0x1D11E]),
            b"\x00\x61\x26\x03\xd8\x34\xdd\x1e"
        );
        assert_eq!(utf16(&[0xD834, 0xDD1E]), b"\xd8\x34\xdd\x1e");
        assert_eq!(utf16(&[0x11_0000]), b"\xff\xfd\xff\xfd");

        let mut res = Vec::new();
        append_utf32(&mut res, 0x1D11E);
        append_utf32(&mut res, 0x8000_0041);
        assert_eq!(res, b"\x00\x01\xd1\x1e\x80\x00\x00\x41");
    }

    #[test]
    fn format() {
        assert_eq!(fmt16(b"\x00h\x00i"), "u\"hi\"");
        assert_eq!(fmt16(b"\x00h\x00i\x20"), "u\"hi\" `20`");
        assert_eq!(
            fmt16(b"\x00\x00\xe0\x00\xdb\x80\xdc\x00"),
            "u\"\\x00\\ue000\\U000f0000\""
        );
        assert_eq!(fmt16(b"\xd8\x34"), "u\"\\ud834\"");
        assert_eq!(fmt16(b"\xd8\x34\xdd\x1e"), "u\"\u{1D11E}\"");
        assert_eq!(fmt16(b"\x00\n\x00\"\x00\\"), "u\"\\n\\\"\\\\\"");
        assert_eq!(fmt16(b""), "u\"\"");

        assert_eq!(fmt32(b"\x00\x00\x00h"), "U\"h\"");
        assert_eq!(fmt32(b"\x80\x00\x00\x41"), "U\"\\U80000041\"");
        assert_eq!(fmt32(b"\x00\x00\xd8\x34"), "U\"\\ud834\"");
        assert_eq!(fmt32(b"\x00\x00\x00h\x01\x02"), "U\"h\" `0102`");
    }

    #[test]
    fn printable() {
        assert!(is_print('a'));
        assert!(is_print(' '));
        assert!(is_print('\u{2603}'));
        assert!(is_print('\u{FFFD}'));
        assert!(!is_print('\n'));
        assert!(!is_print('\u{7f}'));
        assert!(!is_print('\u{a0}'));
        assert!(!is_print('\u{200B}'));
        assert!(!is_print('\u{E000}'));
        assert!(!is_print('\u{F0000}'));
        assert!(!is_print('\u{FFFF}'));
    }
}
