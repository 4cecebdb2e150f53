//! Turning tokens into encoded data.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::{BufMut, Bytes, BytesMut};
use log::debug;
use crate::error::ContentError;
use crate::length::Length;
use super::builtins::{Builtins, Vars};
use super::error::{ErrorKind, ParseError};
use super::scanner::Scanner;
use super::token::{Token, TokenKind};


//------------ Context -------------------------------------------------------

/// The environment a translation runs in.
///
/// The context provides the functions that can be called from the text and
/// the variables they operate on. Since variables persist in the context,
/// a context can be used for several translations that share definitions.
#[derive(Debug, Default)]
pub struct Context {
    /// The callable functions.
    pub builtins: Builtins,

    /// The variables.
    pub vars: Vars,
}

impl Context {
    /// Creates a context from its parts.
    pub fn new(builtins: Builtins, vars: Vars) -> Self {
        Context { builtins, vars }
    }

    /// Calls the function `name` with the given arguments.
    pub fn call(
        &mut self, name: &str, args: Vec<Bytes>
    ) -> Result<Bytes, ContentError> {
        let Some(function) = self.builtins.get(name) else {
            xerr!(return Err(
                format!("unrecognized builtin {:?}", name).into()
            ))
        };
        debug!("calling builtin {} with {} arguments", name, args.len());
        function(&mut self.vars, args)
    }
}


//------------ exec and ascii_to_der -----------------------------------------

/// Translates the text provided by a scanner into encoded data.
///
/// The first error aborts the translation. There is no partial output.
pub fn exec(
    scanner: Scanner, context: &mut Context
) -> Result<Bytes, ParseError> {
    let mut exec = Executor { scanner, context };
    let scope = exec.scope(None, 0)?;
    Ok(scope.content.freeze())
}

/// Translates text into encoded data using a default context.
pub fn ascii_to_der(input: &[u8]) -> Result<Bytes, ParseError> {
    exec(Scanner::new(input), &mut Context::default())
}


//------------ Executor ------------------------------------------------------

/// The recursive descent over the token stream.
struct Executor<'a, 'c> {
    scanner: Scanner<'a>,
    context: &'c mut Context,
}

/// The result of executing a nested scope.
struct Scope {
    /// The encoded content of the scope.
    content: BytesMut,

    /// The token that ended the scope.
    end: Token,

    /// Whether the scope consisted of nothing but the closing token.
    is_empty: bool,
}

impl Scope {
    fn new(content: BytesMut, end: Token, count: usize) -> Self {
        Scope { content, end, is_empty: count == 1 }
    }
}

impl<'a, 'c> Executor<'a, 'c> {
    /// Executes tokens until the end of the scope opened by `left`.
    ///
    /// At the top level, `left` is `None` and the scope ends with the end
    /// of input. A `{` scope ends at the matching `}`. An argument scope
    /// opened by `(` ends at `,` or the matching `)`.
    fn scope(
        &mut self, left: Option<&Token>, depth: usize
    ) -> Result<Scope, ParseError> {
        let mut content = BytesMut::new();
        let mut modifiers = Modifiers::default();
        let mut word: Option<Token> = None;
        let mut count = 0usize;

        loop {
            let token = self.scanner.next_token()?;
            count += 1;

            let function = match word.take() {
                Some(name) if token.kind == TokenKind::LeftParen => {
                    Some(name)
                }
                Some(name) => {
                    xerr!(return Err(ParseError::structure(
                        name.pos,
                        format!("unrecognized symbol {}", name.kind)
                    )))
                }
                None => None
            };
            let modifies = token.kind == TokenKind::LeftCurly
                || token.kind.is_modifier();
            if !modifies {
                if let Some(modifier) = modifiers.first() {
                    xerr!(return Err(ParseError::structure(
                        modifier.pos.clone(),
                        format!("{} must modify '{{'", modifier.kind)
                    )))
                }
            }

            match token.kind {
                TokenKind::Bytes(ref data) => content.extend_from_slice(data),
                TokenKind::LeftCurly => {
                    let child = self.nested(&token, depth)?;
                    modifiers.append_scope(
                        &token, &child.content, &mut content
                    )?;
                    modifiers = Modifiers::default();
                }
                TokenKind::LeftParen => {
                    let Some(function) = function else {
                        xerr!(return Err(ParseError::structure(
                            token.pos, "missing function name"
                        )))
                    };
                    let args = self.args(&token, depth)?;
                    content.extend_from_slice(&self.call(&function, args)?);
                }
                TokenKind::RightCurly => {
                    if is_kind(left, &TokenKind::LeftCurly) {
                        return Ok(Scope::new(content, token, count))
                    }
                    xerr!(return Err(ParseError::structure(
                        token.pos, "unmatched '}'"
                    )))
                }
                TokenKind::RightParen | TokenKind::Comma => {
                    if is_kind(left, &TokenKind::LeftParen) {
                        return Ok(Scope::new(content, token, count))
                    }
                    xerr!(return Err(ParseError::structure(
                        token.pos.clone(),
                        format!(
                            "unexpected {} outside of function call",
                            token.kind
                        )
                    )))
                }
                TokenKind::Indefinite
                | TokenKind::LongForm(_)
                | TokenKind::AdjustLength(_) => {
                    modifiers.add(token.clone())?;
                }
                TokenKind::Word(_) => {
                    word = Some(token.clone());
                }
                TokenKind::Eof => {
                    match left {
                        None => {
                            return Ok(Scope::new(content, token, count))
                        }
                        Some(left) => {
                            xerr!(return Err(ParseError::structure(
                                left.pos.clone(),
                                format!("unmatched {}", left.kind)
                            )))
                        }
                    }
                }
            }
        }
    }

    /// Executes the scope opened by `left` one level deeper.
    fn nested(
        &mut self, left: &Token, depth: usize
    ) -> Result<Scope, ParseError> {
        if depth >= self.scanner.max_depth() {
            debug!("nesting depth limit of {} reached", depth);
            xerr!(return Err(ParseError::structure(
                left.pos.clone(), "maximum nesting depth exceeded"
            )))
        }
        self.scope(Some(left), depth + 1)
    }

    /// Collects the arguments of a function call.
    ///
    /// `paren` is the opening parenthesis which has already been consumed.
    fn args(
        &mut self, paren: &Token, depth: usize
    ) -> Result<Vec<Bytes>, ParseError> {
        let mut args = Vec::new();
        loop {
            let arg = self.nested(paren, depth)?;
            let last = arg.end.kind == TokenKind::RightParen;
            if arg.is_empty {
                if last && args.is_empty() {
                    return Ok(args)
                }
                xerr!(return Err(ParseError::structure(
                    arg.end.pos, "function arguments cannot be empty"
                )))
            }
            args.push(arg.content.freeze());
            if last {
                return Ok(args)
            }
        }
    }

    fn call(
        &mut self, function: &Token, args: Vec<Bytes>
    ) -> Result<Bytes, ParseError> {
        let TokenKind::Word(ref name) = function.kind else {
            xerr!(return Err(ParseError::structure(
                function.pos.clone(), "missing function name"
            )))
        };
        self.context.call(name, args).map_err(|err| {
            ParseError::new(ErrorKind::Builtin, function.pos.clone(), err)
        })
    }
}

fn is_kind(token: Option<&Token>, kind: &TokenKind) -> bool {
    token.map(|token| &token.kind == kind).unwrap_or(false)
}


//------------ Modifiers -----------------------------------------------------

/// The length modifiers waiting for the next `{`.
#[derive(Default)]
struct Modifiers {
    /// The `indefinite` or `long-form:N` modifier.
    length: Option<Token>,

    /// The `adjust-length:N` modifier.
    adjust: Option<Token>,
}

impl Modifiers {
    /// Adds a modifier token.
    ///
    /// There can only be one modifier of each kind and `indefinite` can’t
    /// be combined with `adjust-length`.
    fn add(&mut self, token: Token) -> Result<(), ParseError> {
        let slot = match token.kind {
            TokenKind::AdjustLength(_) => &mut self.adjust,
            _ => &mut self.length,
        };
        if let Some(prev) = slot.as_ref() {
            xerr!(return Err(ParseError::structure(
                token.pos.clone(),
                format!("found {} but already saw {}", token.kind, prev.kind)
            )))
        }
        *slot = Some(token);
        if self.is_indefinite() {
            if let Some(adjust) = self.adjust.as_ref() {
                xerr!(return Err(ParseError::structure(
                    adjust.pos.clone(),
                    "indefinite can’t be combined with adjust-length"
                )))
            }
        }
        Ok(())
    }

    /// Returns the earliest pending modifier.
    fn first(&self) -> Option<&Token> {
        match (self.length.as_ref(), self.adjust.as_ref()) {
            (Some(length), Some(adjust)) => {
                if adjust.pos.offset < length.pos.offset {
                    Some(adjust)
                }
                else {
                    Some(length)
                }
            }
            (length, adjust) => length.or(adjust)
        }
    }

    fn is_indefinite(&self) -> bool {
        matches!(
            self.length, Some(Token { kind: TokenKind::Indefinite, .. })
        )
    }

    fn long_form(&self) -> Option<usize> {
        match self.length {
            Some(Token { kind: TokenKind::LongForm(len), .. }) => Some(len),
            _ => None
        }
    }

    fn adjust(&self) -> Option<i64> {
        match self.adjust {
            Some(Token { kind: TokenKind::AdjustLength(delta), .. }) => {
                Some(delta)
            }
            _ => None
        }
    }

    /// Appends length and content of a `{` scope to `target`.
    ///
    /// `curly` is the opening brace. Encoding errors are reported at its
    /// position.
    fn append_scope(
        &self, curly: &Token, child: &[u8], target: &mut BytesMut
    ) -> Result<(), ParseError> {
        if self.is_indefinite() {
            target.put_u8(0x80);
            target.extend_from_slice(child);
            target.put_slice(b"\0\0");
            return Ok(())
        }

        let len = match self.adjust() {
            Some(delta) => self.adjusted_len(curly, child.len(), delta)?,
            None => child.len()
        };
        Length::definite(len).with_long_form(self.long_form())
            .append_encoded(target)
            .map_err(|err| {
                ParseError::new(ErrorKind::Encoding, curly.pos.clone(), err)
            })?;
        target.extend_from_slice(child);
        Ok(())
    }

    /// Applies a length adjustment.
    ///
    /// The result must fit into a signed 32 bit integer.
    fn adjusted_len(
        &self, curly: &Token, len: usize, delta: i64
    ) -> Result<usize, ParseError> {
        let adjusted = i64::try_from(len).ok().and_then(|len| {
            len.checked_add(delta)
        });
        let err = match adjusted {
            Some(adjusted) if adjusted < 0 => "length adjustment underflows",
            Some(adjusted) if adjusted <= i64::from(i32::MAX) => {
                if let Ok(adjusted) = usize::try_from(adjusted) {
                    return Ok(adjusted)
                }
                "length adjustment overflows"
            }
            _ => "length adjustment overflows",
        };
        xerr!(Err(ParseError::new(
            ErrorKind::Encoding, curly.pos.clone(), err
        )))
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn encode(input: &str) -> Result<Bytes, ParseError> {
        ascii_to_der(input.as_bytes())
    }

    fn encode_ok(input: &str, expected: &[u8]) {
        match encode(input) {
            Ok(res) => assert_eq!(res.as_ref(), expected, "{}", input),
            Err(err) => panic!("{}: {}", input, err),
        }
    }

    fn encode_err(input: &str, kind: ErrorKind) {
        match encode(input) {
            Ok(res) => panic!("{} unexpectedly produced {:?}", input, res),
            Err(err) => assert_eq!(err.kind(), kind, "{}: {}", input, err),
        }
    }

    #[test]
    fn structure() {
        encode_ok(
            "SEQUENCE { INTEGER { 42 } INTEGER { 1 } }",
            b"\x30\x06\x02\x01\x2a\x02\x01\x01"
        );
        encode_ok("", b"");
        encode_ok("# nothing but a comment", b"");
        encode_ok("SEQUENCE {}", b"\x30\x00");
        encode_ok("{ { } }", b"\x01\x00");
        encode_ok(
            &format!("OCTET_STRING {{ `{}` }}", "00".repeat(128)),
            &[b"\x04\x81\x80".as_ref(), &[0u8; 128]].concat()
        );

        encode_err("{", ErrorKind::Structure);
        encode_err("}", ErrorKind::Structure);
        encode_err("SEQUENCE { { }", ErrorKind::Structure);
        encode_err("BOGUS", ErrorKind::Structure);
        encode_err("SEQUENCE BOGUS", ErrorKind::Structure);
        encode_err("1...2", ErrorKind::Structure);
        encode_err("`abc`", ErrorKind::Lex);
    }

    #[test]
    fn modifiers() {
        encode_ok("SEQUENCE indefinite { INTEGER { 42 } }",
                  b"\x30\x80\x02\x01\x2a\x00\x00");
        encode_ok("SEQUENCE long-form:1 {}", b"\x30\x81\x00");
        encode_ok("SEQUENCE long-form:3 { 1 }", b"\x30\x83\x00\x00\x01\x01");
        encode_ok("SEQUENCE adjust-length:2 { 1 }", b"\x30\x03\x01");
        encode_ok("SEQUENCE adjust-length:-1 { 1 }", b"\x30\x00\x01");
        encode_ok(
            "SEQUENCE long-form:2 adjust-length:1 {}",
            b"\x30\x82\x00\x01"
        );
        encode_ok(
            "SEQUENCE adjust-length:1 long-form:2 {}",
            b"\x30\x82\x00\x01"
        );
        encode_ok(
            "SEQUENCE adjust-length:2147483647 {}",
            b"\x30\x84\x7f\xff\xff\xff"
        );

        encode_err("indefinite", ErrorKind::Structure);
        encode_err("indefinite 1", ErrorKind::Structure);
        encode_err("SEQUENCE { long-form:1 }", ErrorKind::Structure);
        encode_err("indefinite indefinite {}", ErrorKind::Structure);
        encode_err("long-form:1 long-form:1 {}", ErrorKind::Structure);
        encode_err("indefinite long-form:1 {}", ErrorKind::Structure);
        encode_err("adjust-length:1 adjust-length:1 {}", ErrorKind::Structure);
        encode_err("indefinite adjust-length:1 {}", ErrorKind::Structure);
        encode_err("adjust-length:1 indefinite {}", ErrorKind::Structure);
        encode_err("long-form:1 foo()", ErrorKind::Structure);

        encode_err("SEQUENCE adjust-length:-1 {}", ErrorKind::Encoding);
        encode_err(
            "SEQUENCE adjust-length:2147483648 {}", ErrorKind::Encoding
        );
        encode_err(
            "SEQUENCE adjust-length:9223372036854775807 { 1 }",
            ErrorKind::Encoding
        );
        encode_err("SEQUENCE long-form:128 {}", ErrorKind::Encoding);
        encode_err(
            "SEQUENCE long-form:1 adjust-length:256 {}", ErrorKind::Encoding
        );
    }

    #[test]
    fn functions() {
        encode_ok(r#"define("a", `0102`) var("a")"#, b"\x01\x02");
        encode_ok(r#"SEQUENCE { var("a", 1) }"#, b"\x30\x01\x01");
        encode_ok(
            r#"define("a", SEQUENCE { 1 }) OCTET_STRING { var("a") var("a") }"#,
            b"\x04\x06\x30\x01\x01\x30\x01\x01"
        );
        encode_ok(r#"define(  "x" "y", { } ) var("xy")"#, b"\x00");

        encode_err(r#"var("a")"#, ErrorKind::Builtin);
        encode_err("var()", ErrorKind::Builtin);
        encode_err("foo()", ErrorKind::Builtin);
        encode_err(r#"define("a",)"#, ErrorKind::Structure);
        encode_err(r#"define(,"a")"#, ErrorKind::Structure);
        encode_err(r#"var("a""#, ErrorKind::Structure);
        encode_err("()", ErrorKind::Structure);
        encode_err("1 )", ErrorKind::Structure);
        encode_err("1 , 2", ErrorKind::Structure);
        encode_err("var (}", ErrorKind::Structure);
    }

    #[test]
    fn context() {
        let mut context = Context::default();
        context.vars.insert("name", &b"\x05\x00"[..]);
        context.builtins.insert("null", |_: &mut Vars, _| {
            Ok(Bytes::from_static(b"\x05\x00"))
        });
        let res = exec(
            Scanner::new(b"var(\"name\") null()"), &mut context
        ).unwrap();
        assert_eq!(res.as_ref(), b"\x05\x00\x05\x00");

        exec(Scanner::new(b"define(\"k\", 1)"), &mut context).unwrap();
        assert_eq!(context.vars.get("k").unwrap().as_ref(), b"\x01");

        assert_eq!(
            Context::default().call("nope", Vec::new())
                .unwrap_err().to_string(),
            "unrecognized builtin \"nope\""
        );
    }

    #[test]
    fn errors() {
        let err = ascii_to_der(b"SEQUENCE {\n  1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.to_string(), "<input>:1:10: unmatched '{'");

        let err = exec(
            Scanner::new(b"1 }").with_file("in.txt"), &mut Context::default()
        ).unwrap_err();
        assert_eq!(err.to_string(), "in.txt:1:3: unmatched '}'");

        let err = ascii_to_der(b"SEQUENCE\nlong-form:1 1").unwrap_err();
        assert_eq!(
            err.to_string(), "<input>:2:1: long-form must modify '{'"
        );
    }

    #[test]
    fn depth_limit() {
        let deep = "{".repeat(300) + &"}".repeat(300);
        encode_err(&deep, ErrorKind::Structure);

        let input = "{".repeat(3) + &"}".repeat(3);
        let res = exec(
            Scanner::new(input.as_bytes()).with_max_depth(3),
            &mut Context::default()
        ).unwrap();
        assert_eq!(res.as_ref(), b"\x02\x01\x00");
        assert!(
            exec(
                Scanner::new(input.as_bytes()).with_max_depth(2),
                &mut Context::default()
            ).is_err()
        );
    }
}
