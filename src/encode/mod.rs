//! Translating text into encoded data.
//!
//! This module provides the text side of the translation. The
//! [`Scanner`] splits the text into [`Token`]s, translating all literals
//! into their encoded octets on the way. The function [`exec`] then
//! consumes these tokens, assembling the final data. It calculates the
//! length octets for every `{ … }` scope and applies the length modifiers
//! `indefinite`, `long-form:N`, and `adjust-length:N`.
//!
//! Words that aren’t literals have to be the name of a function followed
//! by a parenthesized list of arguments. Functions are looked up in the
//! [`Builtins`] of the [`Context`] passed to [`exec`]. The default table
//! contains `define(name, value)` and `var(name [, default])` which
//! operate on the context’s [`Vars`].
//!
//! For the common case of translating a string without any prepared
//! context, there is [`ascii_to_der`].
//!
//! All errors are [`ParseError`]s which carry the [`Position`] in the text
//! where the problem was found.

pub use self::builtins::{Builtin, Builtins, Vars};
pub use self::error::{ErrorKind, ParseError, Position};
pub use self::exec::{Context, ascii_to_der, exec};
pub use self::scanner::{DEFAULT_MAX_DEPTH, Scanner};
pub use self::token::{Token, TokenKind};

mod builtins;
mod error;
mod exec;
mod scanner;
mod token;
