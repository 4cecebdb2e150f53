//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that implements object identifiers,
//! a construct used by ANS.1 to uniquely identify all sorts of things, as
//! well as the functions to encode and decode the content octets of both
//! OBJECT IDENTIFIER and RELATIVE-OID values. The type is also re-exported
//! at the top-level.

use std::{fmt, hash, str};
use bytes::{BufMut, Bytes};
use smallvec::SmallVec;
use crate::base128;
use crate::decode::SliceSource;
use crate::error::ContentError;


//------------ Arcs ----------------------------------------------------------

/// The decoded components of an object identifier.
///
/// Almost all identifiers in use have less than sixteen components, so they
/// are kept inline.
pub type Arcs = SmallVec<[u32; 16]>;


//------------ Oid -----------------------------------------------------------

/// An object identifer.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’.
///
/// Values of this type keep a single object identifer in its BER encoding,
/// i.e., in some form of byte sequence. Because different representations
/// may be useful, the type is actually generic over something that can
/// become a reference to a bytes slice.
///
/// The main use for values of this type is comparing content octets found
/// in encoded data against known identifiers. For this purpose, known
/// identifiers are defined as constants of `Oid<&'static [u8]>`, or its
/// type alias `ConstOid`.
#[derive(Clone, Debug)]
pub struct Oid<T: AsRef<[u8]>=Bytes>(pub T);

/// A type alias for `Oid<&'static [u8]>.
///
/// This is useful when defining object identifier constants.
pub type ConstOid = Oid<&'static [u8]>;

impl<T: AsRef<[u8]>> Oid<T> {
    /// Returns the components of the identifier.
    ///
    /// Fails if the wrapped octets aren’t a valid encoding.
    pub fn arcs(&self) -> Result<Arcs, ContentError> {
        decode_oid(self.0.as_ref())
    }
}


//--- FromStr

impl str::FromStr for Oid<Bytes> {
    type Err = ContentError;

    /// Parses an identifier in dotted-decimal notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arcs = match parse_arcs(s, 2) {
            Some(arcs) => arcs?,
            None => {
                xerr!(return Err(format!(
                    "invalid object identifier {:?}", s
                ).into()))
            }
        };
        let mut res = Vec::new();
        append_oid(&mut res, &arcs)?;
        Ok(Oid(res.into()))
    }
}


//--- AsRef

impl<T: AsRef<[u8]>> AsRef<[u8]> for Oid<T> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}


//--- PartialEq and Eq

impl<T: AsRef<[u8]>, U: AsRef<[u8]>> PartialEq<Oid<U>> for Oid<T> {
    fn eq(&self, other: &Oid<U>) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl<T: AsRef<[u8]>> Eq for Oid<T> { }


//--- Hash

impl<T: AsRef<[u8]>> hash::Hash for Oid<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state)
    }
}


//--- Display

impl<T: AsRef<[u8]>> fmt::Display for Oid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.arcs() {
            Ok(arcs) => fmt_arcs(&arcs, false, f),
            Err(_) => f.write_str("(invalid)"),
        }
    }
}


//------------ Encoding ------------------------------------------------------

/// Appends the content octets of an OBJECT IDENTIFIER to `target`.
///
/// The identifier needs at least two components. The first one must be 0,
/// 1, or 2 and the second one must be less than 40 unless the first one is
/// 2. Nothing is written if these checks fail.
pub fn append_oid<B: BufMut>(
    target: &mut B, arcs: &[u32]
) -> Result<(), ContentError> {
    let (first, second, tail) = match arcs {
        [first, second, tail @ ..] => (*first, *second, tail),
        _ => {
            xerr!(return Err(ContentError::from_static(
                "object identifier needs at least two components"
            )))
        }
    };
    if first > 2 || (first < 2 && second > 39) {
        xerr!(return Err(ContentError::from_static(
            "invalid first components of object identifier"
        )))
    }
    let Some(head) = (first * 40).checked_add(second) else {
        xerr!(return Err(ContentError::from_static(
            "object identifier component too large"
        )))
    };
    // Neither call can fail without a long form override.
    base128::append_encoded(target, head, None)?;
    append_relative_oid(target, tail)
}

/// Appends the content octets of a RELATIVE-OID to `target`.
pub fn append_relative_oid<B: BufMut>(
    target: &mut B, arcs: &[u32]
) -> Result<(), ContentError> {
    for &arc in arcs {
        base128::append_encoded(target, arc, None)?;
    }
    Ok(())
}


//------------ Decoding ------------------------------------------------------

/// Decodes the content octets of an OBJECT IDENTIFIER.
///
/// The first encoded component is split into the first two components of
/// the identifier.
pub fn decode_oid(content: &[u8]) -> Result<Arcs, ContentError> {
    let mut arcs = decode_relative_oid(content)?;
    let head = arcs[0];
    let (first, second) = if head >= 80 {
        (2, head - 80)
    }
    else {
        (head / 40, head % 40)
    };
    arcs[0] = second;
    arcs.insert(0, first);
    Ok(arcs)
}

/// Decodes the content octets of a RELATIVE-OID.
///
/// Each component must be minimally encoded and fit into a `u32`. There
/// has to be at least one component.
pub fn decode_relative_oid(content: &[u8]) -> Result<Arcs, ContentError> {
    if content.is_empty() {
        xerr!(return Err(ContentError::from_static(
            "empty object identifier"
        )))
    }
    let mut source = SliceSource::new(content);
    let mut res = Arcs::new();
    while !source.is_empty() {
        match base128::take_from(&mut source) {
            Ok((arc, None)) => res.push(arc),
            Ok((_, Some(_))) => {
                xerr!(return Err(ContentError::from_static(
                    "non-minimal object identifier component"
                )))
            }
            Err(err) => return Err(err.into_content_error()),
        }
    }
    Ok(res)
}


//------------ Text Form -----------------------------------------------------

/// Parses dotted-decimal components.
///
/// Returns `None` if `s` isn’t a dot-separated list of at least `min`
/// decimal numbers. Returns an error if it is but a component overflows.
pub(crate) fn parse_arcs(
    s: &str, min: usize
) -> Option<Result<Arcs, ContentError>> {
    let mut count = 0;
    for item in s.split('.') {
        if item.is_empty() || !item.bytes().all(|ch| ch.is_ascii_digit()) {
            return None
        }
        count += 1;
    }
    if count < min {
        return None
    }
    Some(s.split('.').map(|item| {
        item.parse::<u32>().map_err(|_| {
            xerr!(ContentError::from(format!(
                "object identifier component {} too large", item
            )))
        })
    }).collect())
}

/// Writes components in dotted-decimal notation.
///
/// Relative identifiers are written with a leading dot.
pub(crate) fn fmt_arcs(
    arcs: &[u32], relative: bool, f: &mut impl fmt::Write
) -> fmt::Result {
    for (idx, arc) in arcs.iter().enumerate() {
        if relative || idx > 0 {
            f.write_char('.')?;
        }
        write!(f, "{}", arc)?;
    }
    Ok(())
}


//============ Tests =========================================================
