//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{error, fmt};
use std::sync::Arc;
use crate::error::ContentError;


//------------ Position ------------------------------------------------------

/// A location in the text input.
///
/// Lines and columns are counted from zero, columns in octets rather than
/// characters. When displayed, both are counted from one and prefixed with
/// the file name, or `<input>` if there is none.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// The octet offset from the start of the input.
    pub offset: usize,

    /// The zero-based line number.
    pub line: usize,

    /// The zero-based column within the line.
    pub column: usize,

    /// The name of the file the input was read from.
    pub file: Option<Arc<str>>,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "{}:{}:{}",
            self.file.as_deref().unwrap_or("<input>"),
            self.line + 1, self.column + 1
        )
    }
}


//------------ ErrorKind -----------------------------------------------------

/// The kind of problem encountered while translating text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A token is malformed.
    ///
    /// This covers bad literals, unterminated quotes, backticks or
    /// brackets, bad escapes, invalid UTF-8 in wide string literals, and
    /// bad modifier arguments.
    Lex,

    /// The tokens don’t form a valid structure.
    ///
    /// This covers unbalanced braces and parentheses, modifiers that don’t
    /// modify a `{`, duplicate or conflicting modifiers, and words that
    /// aren’t function calls.
    Structure,

    /// Content can’t be encoded as requested.
    ///
    /// This happens if a long form override is too small or too large, or
    /// if a length adjustment over- or underflows.
    Encoding,

    /// A builtin function doesn’t exist or failed.
    Builtin,
}


//------------ ParseError ----------------------------------------------------

/// An error happened while translating text into encoded data.
#[derive(Debug)]
pub struct ParseError {
    kind: ErrorKind,
    pos: Position,
    error: ContentError,
}

impl ParseError {
    /// Creates a new error.
    pub fn new(
        kind: ErrorKind, pos: Position, error: impl Into<ContentError>
    ) -> Self {
        ParseError { kind, pos, error: error.into() }
    }

    /// Creates a new lexer error.
    pub fn lex(pos: Position, error: impl Into<ContentError>) -> Self {
        Self::new(ErrorKind::Lex, pos, error)
    }

    /// Creates a new structural error.
    pub fn structure(pos: Position, error: impl Into<ContentError>) -> Self {
        Self::new(ErrorKind::Structure, pos, error)
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the position of the error.
    pub fn pos(&self) -> &Position {
        &self.pos
    }

    /// Returns the underlying content error.
    pub fn content_error(&self) -> &ContentError {
        &self.error
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.error)
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let pos = Position { offset: 12, line: 1, column: 4, file: None };
        assert_eq!(pos.to_string(), "<input>:2:5");
        assert_eq!(
            ParseError::lex(pos, "unmatched \"").to_string(),
            "<input>:2:5: unmatched \""
        );

        let pos = Position {
            file: Some("cert.txt".into()), ..Default::default()
        };
        assert_eq!(pos.to_string(), "cert.txt:1:1");
    }
}
