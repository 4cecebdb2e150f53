//! The cursor over encoded data.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::error::ContentError;
use super::error::DecodeError;


//------------ SliceSource ---------------------------------------------------

/// A cursor over a slice of encoded octets.
///
/// The source keeps track of how far it has advanced into the slice it was
/// created with so that errors can point to the offending octet. Since it is
/// `Copy`, a parser can work on a copy and only write it back once it has
/// succeeded, leaving the original untouched on error.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'s> {
    data: &'s [u8],
    pos: usize,
}

impl<'s> SliceSource<'s> {
    /// Creates a new source starting at position zero.
    pub fn new(data: &'s [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the octets not yet consumed.
    pub fn remaining(&self) -> &'s [u8] {
        self.data
    }

    /// Returns whether all octets have been consumed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the current position.
    pub fn pos(&self) -> Pos {
        self.pos.into()
    }

    /// Returns the next octet without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Takes a single octet from the source.
    ///
    /// If there aren’t any more octets available, returns a content error.
    pub fn take_u8(&mut self) -> Result<u8, DecodeError> {
        match self.data.split_first() {
            Some((&first, tail)) => {
                self.data = tail;
                self.pos += 1;
                Ok(first)
            }
            None => {
                xerr!(Err(self.content_err("unexpected end of data")))
            }
        }
    }

    /// Takes exactly `len` octets from the source.
    pub fn take_slice(&mut self, len: usize) -> Result<&'s [u8], DecodeError> {
        match self.data.split_at_checked(len) {
            Some((head, tail)) => {
                self.data = tail;
                self.pos += len;
                Ok(head)
            }
            None => {
                xerr!(Err(self.content_err("unexpected end of data")))
            }
        }
    }

    /// Returns a content error at the current position of the source.
    pub fn content_err(&self, err: impl Into<ContentError>) -> DecodeError {
        DecodeError::content(err, self.pos())
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within a source.
///
/// Values of this type can only be used for diagnostics. They can not be used
/// to determine how far a source has been advanced since it was created. This
/// is why we used a newtype.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pos(usize);

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn take() {
        let mut source = SliceSource::new(b"\x01\x02\x03\x04");
        assert_eq!(source.peek_u8(), Some(1));
        assert_eq!(source.take_u8().unwrap(), 1);
        assert_eq!(source.take_slice(2).unwrap(), b"\x02\x03");
        assert_eq!(source.pos(), Pos::from(3));
        assert!(source.take_slice(2).is_err());
        assert_eq!(source.pos(), Pos::from(3));
        assert_eq!(source.take_slice(1).unwrap(), b"\x04");
        assert!(source.is_empty());
        assert!(source.take_u8().is_err());
        assert_eq!(source.pos(), Pos::from(4));
    }

    #[test]
    fn error_position() {
        let mut source = SliceSource::new(b"\x01\x02");
        source.take_u8().unwrap();
        let err = source.take_slice(2).unwrap_err();
        assert_eq!(err.pos(), Pos::from(1));
        assert_eq!(err.to_string(), "unexpected end of data (at 1)");
        assert_eq!(source.remaining(), b"\x02");
    }
}
