//! Hex literals.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use bytes::BufMut;
use crate::error::ContentError;


/// Appends the octets described by the hex digits in `digits` to `target`.
///
/// Both upper and lower case digits are accepted. The number of digits must
/// be even. Nothing is written if the digits are invalid.
pub fn append_hex<B: BufMut>(
    target: &mut B, digits: &[u8]
) -> Result<(), ContentError> {
    if digits.len() % 2 != 0 {
        xerr!(return Err("odd number of hex digits".into()))
    }
    let mut res = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(high), Some(low)) => res.push(high << 4 | low),
            _ => {
                xerr!(return Err(format!(
                    "invalid hex digits {:?}",
                    String::from_utf8_lossy(pair)
                ).into()))
            }
        }
    }
    target.put_slice(&res);
    Ok(())
}

/// Parses the hex digits in `digits` into a value.
///
/// The digits are expected to be the argument of an escape sequence, so
/// there must be no more than eight of them.
pub fn parse_hex_value(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || digits.len() > 8 {
        return None
    }
    digits.iter().try_fold(0u32, |res, &ch| {
        hex_value(ch).map(|value| res << 4 | u32::from(value))
    })
}

/// Writes `content` as a hex literal.
///
/// Lower case digits are used and the literal is enclosed in backticks.
pub fn fmt_hex(content: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    f.write_char('`')?;
    for octet in content {
        write!(f, "{:02x}", octet)?;
    }
    f.write_char('`')
}

fn hex_value(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None
    }
}


//============ Tests =========================================================
