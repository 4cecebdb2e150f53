//! Splitting text into tokens.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::str;
use std::sync::Arc;
use bytes::{BufMut, Bytes, BytesMut};
use crate::{int, oid, string};
use crate::error::ContentError;
use crate::length::{parse_adjust_length, parse_long_form};
use crate::tag::Tag;
use super::error::{ParseError, Position};
use super::token::{Token, TokenKind};


//------------ Scanner -------------------------------------------------------

/// The default limit for the nesting of braces and parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A lexer for the text form.
///
/// The scanner walks over the input octet by octet, keeping track of lines
/// and columns for error reporting. Tokens are produced one at a time via
/// [`next_token`][Self::next_token]. Once the end of input has been
/// reached, every further call returns another [`TokenKind::Eof`] token.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    /// The complete input.
    input: &'a [u8],

    /// The position of the next octet to look at.
    pos: Position,

    /// The maximum nesting depth allowed when executing the input.
    max_depth: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given input.
    pub fn new(input: &'a [u8]) -> Self {
        Scanner {
            input,
            pos: Position::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the file name used in error positions.
    pub fn with_file(mut self, file: impl Into<Arc<str>>) -> Self {
        self.pos.file = Some(file.into());
        self
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// # Low-level Access
///
impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos.offset).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos.offset + ahead).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos.offset += 1;
            if ch == b'\n' {
                self.pos.line += 1;
                self.pos.column = 0;
            }
            else {
                self.pos.column += 1;
            }
        }
    }

    fn advance_by(&mut self, len: usize) {
        for _ in 0..len {
            self.advance()
        }
    }

    /// Consumes everything up to and including `end`.
    ///
    /// Returns the octets before `end` or `None` if there is no `end` in
    /// the remaining input. In this case, nothing is consumed.
    fn consume_until(&mut self, end: u8) -> Option<&'a [u8]> {
        let input = self.input;
        let rest = input.get(self.pos.offset..)?;
        let len = rest.iter().position(|&ch| ch == end)?;
        let res = &rest[..len];
        self.advance_by(len + 1);
        Some(res)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                b' ' | b'\t' | b'\n' | b'\r' => self.advance(),
                b'#' => {
                    while let Some(ch) = self.peek() {
                        self.advance();
                        if ch == b'\n' {
                            break
                        }
                    }
                }
                _ => return
            }
        }
    }
}

/// # Tokens
///
impl<'a> Scanner<'a> {
    /// Returns the next token.
    ///
    /// Literals are translated into their encoded octets right away. An
    /// error is returned if a literal is malformed. The position of the
    /// scanner is unspecified after an error and scanning should not be
    /// continued.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();
        let start = self.pos.clone();
        let Some(ch) = self.peek() else {
            return Ok(Token { kind: TokenKind::Eof, pos: start })
        };
        let kind = match (ch, self.peek_at(1)) {
            (b'{', _) => self.single(TokenKind::LeftCurly),
            (b'}', _) => self.single(TokenKind::RightCurly),
            (b'(', _) => self.single(TokenKind::LeftParen),
            (b')', _) => self.single(TokenKind::RightParen),
            (b',', _) => self.single(TokenKind::Comma),
            (b'"', _) => {
                self.advance();
                TokenKind::Bytes(self.take_quoted(&start)?)
            }
            (b'u', Some(b'"')) => {
                self.advance_by(2);
                TokenKind::Bytes(self.take_wide(&start, false)?)
            }
            (b'U', Some(b'"')) => {
                self.advance_by(2);
                TokenKind::Bytes(self.take_wide(&start, true)?)
            }
            (b'b', Some(b'`')) => {
                self.advance_by(2);
                TokenKind::Bytes(self.take_bits(&start)?)
            }
            (b'`', _) => {
                self.advance();
                TokenKind::Bytes(self.take_hex(&start)?)
            }
            (b'[', _) => {
                self.advance();
                TokenKind::Bytes(self.take_tag(&start)?)
            }
            _ => self.take_word(&start)?
        };
        Ok(Token { kind, pos: start })
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Takes the rest of a quoted byte string.
    fn take_quoted(&mut self, start: &Position) -> Result<Bytes, ParseError> {
        let mut res = BytesMut::new();
        loop {
            match self.peek() {
                None => {
                    xerr!(return Err(ParseError::lex(
                        start.clone(), "unmatched '\"'"
                    )))
                }
                Some(b'"') => {
                    self.advance();
                    return Ok(res.freeze())
                }
                Some(b'\\') => {
                    let escape = self.pos.clone();
                    match u8::try_from(self.take_escape()?) {
                        Ok(value) => res.put_u8(value),
                        Err(_) => {
                            xerr!(return Err(ParseError::lex(
                                escape, "illegal escape for quoted string"
                            )))
                        }
                    }
                }
                Some(ch) => {
                    self.advance();
                    res.put_u8(ch);
                }
            }
        }
    }

    /// Takes the rest of a `u"…"` or `U"…"` literal.
    fn take_wide(
        &mut self, start: &Position, utf32: bool
    ) -> Result<Bytes, ParseError> {
        let mut res = BytesMut::new();
        loop {
            let value = match self.peek() {
                None => {
                    xerr!(return Err(ParseError::lex(
                        start.clone(), "unmatched '\"'"
                    )))
                }
                Some(b'"') => {
                    self.advance();
                    return Ok(res.freeze())
                }
                Some(b'\\') => self.take_escape()?,
                Some(_) => u32::from(self.take_char()?),
            };
            if utf32 {
                string::append_utf32(&mut res, value)
            }
            else {
                string::append_utf16(&mut res, value)
            }
        }
    }

    /// Takes a single UTF-8 encoded character.
    fn take_char(&mut self) -> Result<char, ParseError> {
        let rest = self.input.get(self.pos.offset..).unwrap_or_default();
        let head = &rest[..rest.len().min(4)];
        let valid = match str::from_utf8(head) {
            Ok(s) => s,
            Err(err) => {
                str::from_utf8(&head[..err.valid_up_to()]).unwrap_or_default()
            }
        };
        match valid.chars().next() {
            Some(ch) => {
                self.advance_by(ch.len_utf8());
                Ok(ch)
            }
            None => {
                xerr!(Err(ParseError::lex(self.pos.clone(), "invalid UTF-8")))
            }
        }
    }

    /// Takes an escape sequence starting with the backslash.
    ///
    /// Returns the value of the escaped character. The value isn’t
    /// checked, so it can be larger than a valid character.
    fn take_escape(&mut self) -> Result<u32, ParseError> {
        self.advance();
        let Some(ch) = self.peek() else {
            xerr!(return Err(ParseError::lex(
                self.pos.clone(), "expected escape character"
            )))
        };
        let digits = match ch {
            b'n' => {
                self.advance();
                return Ok(u32::from(b'\n'))
            }
            b'"' | b'\\' => {
                self.advance();
                return Ok(u32::from(ch))
            }
            b'x' => 2,
            b'u' => 4,
            b'U' => 8,
            _ => {
                xerr!(return Err(ParseError::lex(
                    self.pos.clone(),
                    format!(
                        "unknown escape sequence \\{}", char::from(ch)
                    )
                )))
            }
        };
        self.advance();
        let Some(hex) = self.input.get(
            self.pos.offset..self.pos.offset + digits
        ) else {
            xerr!(return Err(ParseError::lex(
                self.pos.clone(), "unfinished escape sequence"
            )))
        };
        let Some(value) = string::parse_hex_value(hex) else {
            xerr!(return Err(ParseError::lex(
                self.pos.clone(),
                format!(
                    "invalid hex escape {:?}", String::from_utf8_lossy(hex)
                )
            )))
        };
        self.advance_by(digits);
        Ok(value)
    }

    /// Takes the rest of a bit string literal.
    fn take_bits(&mut self, start: &Position) -> Result<Bytes, ParseError> {
        let bits = self.take_delimited(start, b'`')?;
        let mut res = BytesMut::new();
        str::from_utf8(bits).map_err(|_| {
            ContentError::from_static("unexpected character in bit string")
        }).and_then(|bits| {
            string::append_bits(&mut res, bits)
        }).map_err(|err| ParseError::lex(start.clone(), err))?;
        Ok(res.freeze())
    }

    /// Takes the rest of a hex literal.
    fn take_hex(&mut self, start: &Position) -> Result<Bytes, ParseError> {
        let digits = self.take_delimited(start, b'`')?;
        let mut res = BytesMut::with_capacity(digits.len() / 2);
        string::append_hex(&mut res, digits).map_err(|err| {
            ParseError::lex(start.clone(), err)
        })?;
        Ok(res.freeze())
    }

    /// Takes the rest of a tag descriptor and returns the encoded tag.
    fn take_tag(&mut self, start: &Position) -> Result<Bytes, ParseError> {
        let descriptor = self.take_delimited(start, b']')?;
        let mut res = BytesMut::new();
        str::from_utf8(descriptor).map_err(|_| {
            ContentError::from_static("invalid tag descriptor")
        }).and_then(|descriptor| {
            descriptor.parse::<Tag>()
        }).and_then(|tag| {
            tag.append_encoded(&mut res)
        }).map_err(|err| ParseError::lex(start.clone(), err))?;
        Ok(res.freeze())
    }

    fn take_delimited(
        &mut self, start: &Position, end: u8
    ) -> Result<&'a [u8], ParseError> {
        match self.consume_until(end) {
            Some(res) => Ok(res),
            None => {
                xerr!(Err(ParseError::lex(
                    start.clone(),
                    format!("unmatched '{}'", char::from(end))
                )))
            }
        }
    }

    /// Takes a bare word and classifies it.
    fn take_word(
        &mut self, start: &Position
    ) -> Result<TokenKind, ParseError> {
        self.advance();
        while let Some(ch) = self.peek() {
            if is_word_end(ch) {
                break
            }
            self.advance()
        }
        let word = String::from_utf8_lossy(
            &self.input[start.offset..self.pos.offset]
        );
        classify_word(&word).map_err(|err| {
            ParseError::lex(start.clone(), err)
        })
    }
}

fn is_word_end(ch: u8) -> bool {
    matches!(
        ch,
        b' ' | b'\t' | b'\n' | b'\r' | b',' | b'(' | b')' | b'{' | b'}'
        | b'[' | b']' | b'`' | b'"' | b'#'
    )
}

/// Determines what a bare word means.
fn classify_word(word: &str) -> Result<TokenKind, ContentError> {
    let mut res = BytesMut::new();

    if let Some(tag) = Tag::by_name(word) {
        tag.append_encoded(&mut res)?;
        return Ok(TokenKind::Bytes(res.freeze()))
    }

    if is_integer(word) {
        let value = word.parse::<i64>().map_err(|_| {
            ContentError::from(format!("integer {} out of range", word))
        })?;
        int::append_i64(&mut res, value);
        return Ok(TokenKind::Bytes(res.freeze()))
    }

    if let Some(arcs) = oid::parse_arcs(word, 2) {
        oid::append_oid(&mut res, &arcs?)?;
        return Ok(TokenKind::Bytes(res.freeze()))
    }

    if let Some(arcs) = word.strip_prefix('.').and_then(|rest| {
        oid::parse_arcs(rest, 1)
    }) {
        oid::append_relative_oid(&mut res, &arcs?)?;
        return Ok(TokenKind::Bytes(res.freeze()))
    }

    match word {
        "TRUE" => return Ok(TokenKind::Bytes(Bytes::from_static(b"\xff"))),
        "FALSE" => return Ok(TokenKind::Bytes(Bytes::from_static(b"\x00"))),
        "indefinite" => return Ok(TokenKind::Indefinite),
        _ => { }
    }

    if let Some(adjust) = parse_adjust_length(word)? {
        return Ok(TokenKind::AdjustLength(adjust))
    }
    if let Some(long_form) = parse_long_form(word)? {
        return Ok(TokenKind::LongForm(long_form))
    }

    Ok(TokenKind::Word(word.into()))
}

fn is_integer(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|ch| ch.is_ascii_digit())
}


//============ Tests =========================================================
