//! The length octets.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::BufMut;
use crate::decode::{DecodeError, SliceSource};
use crate::error::ContentError;


//------------ Length --------------------------------------------------------

/// The length octets of an encoded value.
///
/// A length value can either be definite, meaning it provides the actual
/// number of content octets in the value, or indefinite, in which case the
/// content is delimited by a special end-of-contents marker.
///
/// # BER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the definite length. Thus, if the first octet is
/// less than 128, it provides the definite length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. If they specify that there are zero more octets, i.e., the
/// value of the first octet is 128, the length is indefinite. Otherwise,
/// those following octets give the big-endian encoding of the definite
/// length of the content octets.
///
/// DER requires the minimal encoding. Since we need to reproduce broken
/// encodings faithfully, a definite length can carry a long form override:
/// the number of octets following the first octet. This is set when
/// decoding a non-minimal length and forces the long form when encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Length {
    /// The length.
    ///
    /// If this is `None`, the length is indefinite. Otherwise it is definite
    /// with the given value.
    length: Option<Definite>,

    /// The number of length octets after the first one, if forced.
    long_form: Option<usize>,
}

impl Length {
    /// The maximum number of octets following the first octet.
    pub const MAX_LONG_FORM: usize = 0x7f;

    /// The indefinite length.
    pub const INDEFINITE: Self = Length { length: None, long_form: None };

    /// Creates a definite length using the minimal encoding.
    pub const fn definite(len: usize) -> Self {
        Length { length: Some(Definite(len)), long_form: None }
    }

    /// Returns the length with a long form override.
    pub const fn with_long_form(self, long_form: Option<usize>) -> Self {
        Length { long_form, ..self }
    }

    /// Returns the length if it is definite.
    pub fn definite_len(self) -> Option<usize> {
        self.length.map(|x| x.0)
    }

    /// Returns whether the length is indefinite.
    pub fn is_indefinite(self) -> bool {
        self.length.is_none()
    }

    /// Returns the long form override.
    pub fn long_form(self) -> Option<usize> {
        self.long_form
    }

    /// Takes the length octets from the beginning of a source.
    ///
    /// An indefinite length is only accepted if `constructed` is `true`.
    /// Definite lengths larger than `limit` are rejected, whether in the
    /// short or the long form. Non-minimal long forms are accepted and
    /// result in a long form override. On error, the source is left
    /// unchanged.
    pub fn take_from(
        source: &mut SliceSource, constructed: bool, limit: usize,
    ) -> Result<Self, DecodeError> {
        let mut work = *source;
        let len = match FirstOctet::take_from(&mut work)? {
            FirstOctet::Single(res) => {
                if res.is_indefinite() && !constructed {
                    xerr!(return Err(source.content_err(
                        "indefinite length in primitive value"
                    )))
                }
                if res.definite_len().is_some_and(|len| len > limit) {
                    xerr!(return Err(source.content_err("excessive length")))
                }
                *source = work;
                return Ok(res)
            }
            FirstOctet::Multi(len) => len,
        };

        let octets = match work.take_slice(len) {
            Ok(octets) => octets,
            Err(_) => {
                xerr!(return Err(source.content_err(
                    "length octets exceed available data"
                )))
            }
        };
        let mut res = 0usize;
        for &octet in octets {
            if res.leading_zeros() < 8 {
                xerr!(return Err(source.content_err("excessive length")))
            }
            res = (res << 8) | usize::from(octet);
        }
        if res > limit {
            xerr!(return Err(source.content_err("excessive length")))
        }

        // Panic: len is at least one, so there is a first octet.
        let long_form = if octets[0] == 0 || res < 0x80 {
            Some(len)
        }
        else {
            None
        };
        *source = work;
        Ok(Length::definite(res).with_long_form(long_form))
    }

    /// Appends the encoded length to the end of `target`.
    ///
    /// Fails if the long form override is zero, larger than 127, or too
    /// small for the length. Nothing is written in this case.
    pub fn append_encoded<B: BufMut>(
        self, target: &mut B
    ) -> Result<(), ContentError> {
        let definite = match self.length {
            Some(definite) => definite,
            None => {
                target.put_u8(FirstOctet::INDEFINITE);
                return Ok(())
            }
        };
        let octets = match self.long_form {
            None if definite.0 < 0x80 => {
                // Panic: definite.0 < 0x80
                target.put_u8(definite.0 as u8);
                return Ok(())
            }
            None => definite.octets(),
            Some(0) => {
                xerr!(return Err(ContentError::from_static(
                    "long-form override must be positive"
                )))
            }
            Some(long_form) if long_form > Self::MAX_LONG_FORM => {
                xerr!(return Err(ContentError::from_static(
                    "long-form override is too large"
                )))
            }
            Some(long_form) if long_form < definite.octets() => {
                xerr!(return Err(ContentError::from_static(
                    "long-form override is too small for length"
                )))
            }
            Some(long_form) => long_form
        };
        // Panic: octets <= 127.
        target.put_u8(0x80 | octets as u8);
        for i in (0..octets).rev() {
            target.put_u8(definite.octet(i));
        }
        Ok(())
    }
}


//------------ FirstOctet ----------------------------------------------------

/// The first octet of the encoded length.
enum FirstOctet {
    /// The first octet is a length in and of itself.
    Single(Length),

    /// The first octet indicates the number of octets to follow.
    Multi(usize),
}

impl FirstOctet {
    /// The first octet of an indefinite length.
    const INDEFINITE: u8 = 0x80;

    /// Takes the first octet and checks what it means.
    fn take_from(source: &mut SliceSource) -> Result<Self, DecodeError> {
        match source.take_u8()? {
            // Bit 7 clear: single.
            n if (n & 0x80) == 0 => {
                Ok(Self::Single(Length::definite(usize::from(n))))
            }

            // 0x80: indefinite.
            Self::INDEFINITE => Ok(Self::Single(Length::INDEFINITE)),

            // anything else: clear left bit, number of octets.
            n => Ok(Self::Multi(usize::from(n & 0x7F)))
        }
    }
}


//------------ Definite ------------------------------------------------------

/// A definite length.
///
/// This is a newtype of `usize` which allows us to do all the encoding
/// things on it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
struct Definite(usize);

impl Definite {
    /// Returns the minimal number of octets for the long form.
    ///
    /// This is zero for a length of zero.
    fn octets(self) -> usize {
        usize::BITS.saturating_sub(self.0.leading_zeros()).div_ceil(8) as usize
    }

    /// Returns the `idx`th octet counting from the least significant one.
    ///
    /// Octets beyond the size of a `usize` are zero.
    fn octet(self, idx: usize) -> u8 {
        self.0.to_le_bytes().get(idx).copied().unwrap_or(0)
    }
}


//------------ Text Modifiers ------------------------------------------------

/// The prefix of a long form override in the text form.
const LONG_FORM_PREFIX: &str = "long-form:";

/// The prefix of a length adjustment in the text form.
const ADJUST_LENGTH_PREFIX: &str = "adjust-length:";

/// Parses a `long-form:N` modifier.
///
/// Returns `Ok(None)` if `s` doesn’t start with the prefix. Otherwise, `N`
/// must be a positive integer.
pub(crate) fn parse_long_form(
    s: &str
) -> Result<Option<usize>, ContentError> {
    let Some(value) = s.strip_prefix(LONG_FORM_PREFIX) else {
        return Ok(None)
    };
    match value.parse::<usize>() {
        Ok(0) | Err(_) => {
            xerr!(Err(format!("invalid long-form override {:?}", value).into()))
        }
        Ok(value) => Ok(Some(value)),
    }
}

/// Parses an `adjust-length:N` modifier.
///
/// Returns `Ok(None)` if `s` doesn’t start with the prefix. Otherwise, `N`
/// must be an integer, possibly negative.
pub(crate) fn parse_adjust_length(
    s: &str
) -> Result<Option<i64>, ContentError> {
    let Some(value) = s.strip_prefix(ADJUST_LENGTH_PREFIX) else {
        return Ok(None)
    };
    match value.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            xerr!(Err(format!("invalid length adjustment {:?}", value).into()))
        }
    }
}


//============ Tests =========================================================
