//! Base-128 encoded integers.
//!
//! Both the high tag number form of the identifier octets and the
//! sub-identifiers of object identifiers encode an unsigned integer as a
//! sequence of octets carrying seven bits each, most significant group
//! first. All octets but the last have their most significant bit set.

use bytes::BufMut;
use crate::decode::{DecodeError, SliceSource};
use crate::error::ContentError;


//------------ Constants -----------------------------------------------------

/// The bit marking that more octets are to follow.
const MORE_MASK: u8 = 0x80;

/// The mask for the data bits of an octet.
const DATA_MASK: u8 = 0x7f;


//------------ encoded_len ---------------------------------------------------

/// Returns the minimal number of octets needed to encode `value`.
///
/// Zero is encoded as a single octet, not as an empty sequence.
pub fn encoded_len(value: u32) -> usize {
    let mut len = 1;
    let mut value = value >> 7;
    while value != 0 {
        len += 1;
        value >>= 7;
    }
    len
}


//------------ append_encoded ------------------------------------------------

/// Appends the base-128 encoding of `value` to `target`.
///
/// If `long_form` is given, the encoding is padded with leading `0x80`
/// octets so that it is exactly that many octets long. This is not a valid
/// DER encoding but can be used to produce deliberately broken data. If the
/// override is smaller than the minimal encoding, an error is returned and
/// nothing is written.
pub fn append_encoded<B: BufMut>(
    target: &mut B, value: u32, long_form: Option<usize>
) -> Result<(), ContentError> {
    let len = encoded_len(value);
    let total = match long_form {
        Some(total) if total < len => {
            xerr!(return Err(ContentError::from_static(
                "long-form override is too small"
            )))
        }
        Some(total) => total,
        None => len,
    };
    for _ in len..total {
        target.put_u8(MORE_MASK);
    }
    for i in (0..len).rev() {
        // Panic: i < 5, so the shift is at most 28 bits.
        let octet = (value >> (7 * i)) as u8 & DATA_MASK;
        if i > 0 {
            target.put_u8(octet | MORE_MASK)
        }
        else {
            target.put_u8(octet)
        }
    }
    Ok(())
}


//------------ take_from -----------------------------------------------------

/// Takes a base-128 encoded integer from the beginning of a source.
///
/// Returns the value and, if the encoding was not minimal, the number of
/// octets it actually used. The latter allows re-creating the exact same
/// encoding later. Fails if the source ends before the last octet or if the
/// value doesn’t fit into a `u32`. On failure, the source is left
/// unchanged.
pub fn take_from(
    source: &mut SliceSource
) -> Result<(u32, Option<usize>), DecodeError> {
    let mut work = *source;
    let minimal = work.peek_u8() != Some(MORE_MASK);
    let mut res = 0u32;
    loop {
        if res.leading_zeros() < 7 {
            xerr!(return Err(work.content_err("base-128 value overflows")))
        }
        let octet = work.take_u8()?;
        res = (res << 7) | u32::from(octet & DATA_MASK);
        if octet & MORE_MASK == 0 {
            break
        }
    }
    let long_form = if minimal {
        None
    }
    else {
        Some(source.remaining().len() - work.remaining().len())
    };
    *source = work;
    Ok((res, long_form))
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn encode(value: u32, long_form: Option<usize>) -> Option<Vec<u8>> {
        let mut res = Vec::new();
        append_encoded(&mut res, value, long_form).ok()?;
        Some(res)
    }

    fn decode(data: &[u8]) -> Option<(u32, Option<usize>, usize)> {
        let mut source = SliceSource::new(data);
        let (value, long_form) = take_from(&mut source).ok()?;
        Some((value, long_form, source.remaining().len()))
    }

    #[test]
    fn encode_minimal() {
        assert_eq!(encode(0, None).unwrap(), b"\x00");
        assert_eq!(encode(0x7f, None).unwrap(), b"\x7f");
        assert_eq!(encode(0x80, None).unwrap(), b"\x81\x00");
        assert_eq!(encode(1234, None).unwrap(), b"\x89\x52");
        assert_eq!(
            encode(u32::MAX, None).unwrap(), b"\x8f\xff\xff\xff\x7f"
        );
    }

    #[test]
    fn encode_long_form() {
        assert_eq!(encode(0, Some(1)).unwrap(), b"\x00");
        assert_eq!(encode(0, Some(3)).unwrap(), b"\x80\x80\x00");
        assert_eq!(encode(1234, Some(3)).unwrap(), b"\x80\x89\x52");
        assert!(encode(1234, Some(1)).is_none());
        assert!(encode(0, Some(0)).is_none());
    }

    #[test]
    fn decode_values() {
        assert_eq!(decode(b"\x00"), Some((0, None, 0)));
        assert_eq!(decode(b"\x7f\x01"), Some((0x7f, None, 1)));
        assert_eq!(decode(b"\x89\x52"), Some((1234, None, 0)));
        assert_eq!(
            decode(b"\x8f\xff\xff\xff\x7f"), Some((u32::MAX, None, 0))
        );
    }

    #[test]
    fn decode_non_minimal() {
        assert_eq!(decode(b"\x80\x00"), Some((0, Some(2), 0)));
        assert_eq!(decode(b"\x80\x89\x52"), Some((1234, Some(3), 0)));
    }

    #[test]
    fn decode_failures() {
        assert_eq!(decode(b""), None);
        assert_eq!(decode(b"\x81"), None);
        assert_eq!(decode(b"\x90\x80\x80\x80\x00"), None);
        assert_eq!(decode(b"\x8f\xff\xff\xff\xff\x7f"), None);

        // Failure leaves the source alone.
        let mut source = SliceSource::new(b"\x81\x81");
        assert!(take_from(&mut source).is_err());
        assert_eq!(source.remaining(), b"\x81\x81");
    }
}
