//! The tokens of the text form.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use bytes::Bytes;
use super::error::Position;


//------------ Token ---------------------------------------------------------

/// A token of the text form together with its position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,

    /// The position of the first octet of the token.
    pub pos: Position,
}


//------------ TokenKind -----------------------------------------------------

/// The kinds of tokens.
///
/// All literals, tag names and tag descriptors are translated into their
/// encoded octets right away and become a `Bytes` token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// Octets to be copied to the output.
    Bytes(Bytes),

    /// `{`, opening a length-prefixed scope.
    LeftCurly,

    /// `}`
    RightCurly,

    /// `(`, opening the argument list of a function call.
    LeftParen,

    /// `)`
    RightParen,

    /// `,`, separating function arguments.
    Comma,

    /// The `indefinite` length modifier.
    Indefinite,

    /// The `long-form:N` length modifier.
    LongForm(usize),

    /// The `adjust-length:N` length modifier.
    AdjustLength(i64),

    /// Any other word, which has to be the name of a function.
    Word(String),

    /// The end of input.
    Eof,
}

impl TokenKind {
    /// Returns whether the token is a length modifier.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Indefinite | TokenKind::LongForm(_)
                | TokenKind::AdjustLength(_)
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TokenKind::Bytes(_) => f.write_str("bytes"),
            TokenKind::LeftCurly => f.write_str("'{'"),
            TokenKind::RightCurly => f.write_str("'}'"),
            TokenKind::LeftParen => f.write_str("'('"),
            TokenKind::RightParen => f.write_str("')'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Indefinite => f.write_str("indefinite"),
            TokenKind::LongForm(_) => f.write_str("long-form"),
            TokenKind::AdjustLength(_) => f.write_str("adjust-length"),
            TokenKind::Word(ref word) => write!(f, "{:?}", word),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}
