//! The content octets of INTEGER values.
//!
//! Integers are encoded in two’s complement using the smallest possible
//! number of octets. The text form only deals with values that fit into an
//! `i64`. Anything else is shown as raw octets.

use bytes::BufMut;
use crate::error::ContentError;


//------------ Encoding ------------------------------------------------------

/// Returns the number of content octets needed to encode `value`.
pub fn encoded_len(value: i64) -> usize {
    let mut len = 1;
    let mut value = value;
    while !(-0x80..=0x7f).contains(&value) {
        len += 1;
        value >>= 8;
    }
    len
}

/// Appends the content octets of `value` to `target`.
pub fn append_i64<B: BufMut>(target: &mut B, value: i64) {
    let len = encoded_len(value);
    // Panic: len <= 8, so this can’t be out of range.
    target.put_slice(&value.to_be_bytes()[8 - len..]);
}


//------------ Decoding ------------------------------------------------------

/// Decodes the content octets of an INTEGER into an `i64`.
///
/// Fails if the content is empty, not minimally encoded, or the value
/// doesn’t fit.
pub fn decode_i64(content: &[u8]) -> Result<i64, ContentError> {
    check_head(content)?;
    let Some((&first, octets)) = content.split_first() else {
        xerr!(return Err("empty integer".into()))
    };
    // Sign-extend the first octet.
    let mut res = i64::from(first as i8);
    for &octet in octets {
        if (res << 8) >> 8 != res {
            xerr!(return Err("integer too large".into()))
        }
        res = (res << 8) | i64::from(octet);
    }
    Ok(res)
}

/// Checks that an integer is started correctly.
///
/// Specifically, checks that there is at least one octet and that the
/// first nine bits of a multi-octet integer are not all the same.
fn check_head(content: &[u8]) -> Result<(), ContentError> {
    match (content.first(), content.get(1).map(|x| x & 0x80 != 0)) {
        (None, _) => {
            xerr!(Err("empty integer".into()))
        }
        (Some(0), Some(false)) | (Some(0xFF), Some(true)) => {
            xerr!(Err("non-minimal integer".into()))
        }
        _ => Ok(())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        fn step(value: i64, res: &[u8]) {
            let mut target = Vec::new();
            append_i64(&mut target, value);
            assert_eq!(target, res, "{}", value);
            assert_eq!(encoded_len(value), res.len());
        }

        step(0, b"\x00");
        step(1, b"\x01");
        step(127, b"\x7f");
        step(128, b"\x00\x80");
        step(-1, b"\xff");
        step(-127, b"\x81");
        step(-128, b"\x80");
        step(-129, b"\xff\x7f");
        step(0x1234_5678, b"\x12\x34\x56\x78");
        step(i64::MAX, b"\x7f\xff\xff\xff\xff\xff\xff\xff");
        step(i64::MIN, b"\x80\x00\x00\x00\x00\x00\x00\x00");
    }

    #[test]
    fn decode() {
        for value in [
            0, 1, 127, 128, -1, -127, -128, -129, 255, 256, 0x1234_5678,
            -100_000, 100_000, i64::MAX, i64::MIN,
        ] {
            let mut content = Vec::new();
            append_i64(&mut content, value);
            assert_eq!(decode_i64(&content).unwrap(), value);
        }
    }

    #[test]
    fn decode_failures() {
        assert!(decode_i64(b"").is_err());
        assert!(decode_i64(b"\x00\x00").is_err());
        assert!(decode_i64(b"\x00\x7f").is_err());
        assert!(decode_i64(b"\xff\x80").is_err());
        assert!(decode_i64(b"\xff\xff").is_err());
        assert!(decode_i64(b"\x01\x00\x00\x00\x00\x00\x00\x00\x00").is_err());
        assert!(decode_i64(b"\xfe\x00\x00\x00\x00\x00\x00\x00\x00").is_err());

        assert_eq!(decode_i64(b"\x00\x80").unwrap(), 128);
        assert_eq!(decode_i64(b"\xff\x7f").unwrap(), -129);
    }
}
