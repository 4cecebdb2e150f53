//! Translating encoded data into text.
//!
//! This module provides the binary side of the translation: the
//! [`Printer`] walks over encoded data and writes it out in the text form.
//! The printer never fails. Whenever it comes across something it can’t
//! parse as an element, it writes the remaining octets of the current
//! level as a plain literal. The text produced translates back into the
//! exact same octets.
//!
//! The content of primitive elements is written using a literal that fits
//! its type. Integers, object identifiers, booleans, bit strings and the
//! wide character string types get dedicated literals. The content of all
//! other primitive types is parsed as a sequence of elements if possible
//! and written as a quoted string or hex literal otherwise.
//!
//! The function [`render`] uses a printer with default settings.

pub use self::literal::{fmt_literal, fmt_quoted};
pub use self::names::{OID_NAMES, oid_name};

use std::fmt;
use log::debug;
use crate::decode::{self, Element, starts_with_eoc};
use crate::{int, oid, string};
use crate::tag::Tag;

mod literal;
mod names;


//------------ Printer -------------------------------------------------------

/// The default recursion limit of the printer.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Integers with a larger magnitude are written in hex.
const MAX_DECIMAL: i64 = 100_000;

/// Translates encoded data into the text form.
#[derive(Clone, Debug)]
pub struct Printer {
    /// The ceiling for definite lengths.
    max_length: usize,

    /// The maximum nesting depth.
    max_depth: usize,

    /// The string used for one level of indentation.
    indent: String,
}

impl Default for Printer {
    fn default() -> Self {
        Printer {
            max_length: decode::MAX_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
            indent: String::from("  "),
        }
    }
}

impl Printer {
    /// Creates a printer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest definite length to accept.
    ///
    /// Elements with longer content are treated as unparseable.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the maximum nesting depth.
    ///
    /// Anything nested deeper is written as a plain literal.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the string used for one level of indentation.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Translates `data` into text.
    pub fn render(&self, data: &[u8]) -> String {
        let mut res = String::new();
        // Writing to a string never fails.
        let _ = self.render_to(data, &mut res);
        res
    }

    /// Translates `data` into text written to `target`.
    pub fn render_to(
        &self, data: &[u8], target: &mut impl fmt::Write
    ) -> fmt::Result {
        self.level(data, 0, false, target).map(|_| ())
    }

    /// Returns whether `data` consists of complete elements only.
    ///
    /// Indefinite length elements must be closed by an end-of-contents
    /// marker. An end-of-contents marker outside of an indefinite length
    /// element is not accepted.
    pub fn is_made_of_elements(&self, mut data: &[u8]) -> bool {
        let mut open = 0usize;
        while !data.is_empty() {
            if starts_with_eoc(data) {
                if open == 0 {
                    return false
                }
                data = &data[2..];
                open -= 1;
                continue
            }
            match decode::parse_element_with_limit(data, self.max_length) {
                Ok((element, rest)) => {
                    if element.is_indefinite() {
                        open += 1;
                    }
                    data = rest;
                }
                Err(_) => return false
            }
        }
        open == 0
    }
}

/// # Rendering
///
impl Printer {
    /// Renders one level of elements.
    ///
    /// If `stop_at_eoc` is set, stops at an end-of-contents marker and
    /// returns the data starting with it. Otherwise returns empty data.
    fn level<'a>(
        &self,
        mut data: &'a [u8],
        depth: usize,
        stop_at_eoc: bool,
        target: &mut impl fmt::Write,
    ) -> Result<&'a [u8], fmt::Error> {
        while !data.is_empty() {
            if stop_at_eoc && starts_with_eoc(data) {
                return Ok(data)
            }
            if depth >= self.max_depth {
                debug!("nesting depth limit of {} reached", depth);
                self.literal_line(data, depth, target)?;
                return Ok(&[])
            }
            let (element, rest) = match decode::parse_element_with_limit(
                data, self.max_length
            ) {
                Ok(res) => res,
                Err(err) => {
                    debug!(
                        "{} at octet {} of level, writing it as literal",
                        err.content_error(), err.pos()
                    );
                    self.literal_line(data, depth, target)?;
                    return Ok(&[])
                }
            };
            data = rest;
            match element.content {
                Some(content) => {
                    self.definite(element, content, depth, target)?;
                }
                None => {
                    data = self.indefinite(element, data, depth, target)?;
                }
            }
        }
        Ok(data)
    }

    /// Renders an indefinite length element.
    ///
    /// Returns the data following the element.
    fn indefinite<'a>(
        &self,
        element: Element,
        data: &'a [u8],
        depth: usize,
        target: &mut impl fmt::Write,
    ) -> Result<&'a [u8], fmt::Error> {
        let mut child = String::new();
        let rest = self.level(data, depth + 1, true, &mut child)?;
        match rest.strip_prefix(b"\0\0") {
            Some(rest) => {
                self.indent(depth, target)?;
                writeln!(target, "{} indefinite {{", element.tag)?;
                target.write_str(&child)?;
                self.indent(depth, target)?;
                target.write_str("}\n")?;
                Ok(rest)
            }
            None => {
                debug!(
                    "indefinite length element {} not closed", element.tag
                );
                self.indent(depth, target)?;
                writeln!(target, "{} `80`", element.tag)?;
                target.write_str(&child)?;
                Ok(rest)
            }
        }
    }

    /// Renders a definite length element.
    fn definite(
        &self,
        element: Element,
        content: &[u8],
        depth: usize,
        target: &mut impl fmt::Write,
    ) -> fmt::Result {
        let tag = element.tag;
        if !tag.constructed && tag.is_type(Tag::OID) {
            if let Some(name) = oid_name(content) {
                self.indent(depth, target)?;
                writeln!(target, "# {}", name)?;
            }
        }

        self.indent(depth, target)?;
        write!(target, "{}", tag)?;
        if let Some(long_form) = element.length.long_form() {
            write!(target, " long-form:{}", long_form)?;
        }

        if content.is_empty() {
            return target.write_str(" {}\n")
        }
        if tag.constructed {
            return self.nested(content, depth, target)
        }
        if tag.is_type(Tag::BIT_STRING) {
            if let Some((0, rest)) = content.split_first() {
                if !rest.is_empty() && self.is_made_of_elements(rest) {
                    target.write_str(" {\n")?;
                    self.indent(depth + 1, target)?;
                    target.write_str("`00`\n")?;
                    self.level(rest, depth + 1, false, target)?;
                    self.indent(depth, target)?;
                    return target.write_str("}\n")
                }
            }
        }
        else if !has_literal(tag) && self.is_made_of_elements(content) {
            return self.nested(content, depth, target)
        }

        target.write_str(" { ")?;
        fmt_primitive(tag, content, target)?;
        target.write_str(" }\n")
    }

    /// Renders the content of an element as nested elements.
    ///
    /// The header of the element must already have been written.
    fn nested(
        &self, content: &[u8], depth: usize, target: &mut impl fmt::Write
    ) -> fmt::Result {
        target.write_str(" {\n")?;
        self.level(content, depth + 1, false, target)?;
        self.indent(depth, target)?;
        target.write_str("}\n")
    }

    fn literal_line(
        &self, data: &[u8], depth: usize, target: &mut impl fmt::Write
    ) -> fmt::Result {
        self.indent(depth, target)?;
        fmt_literal(data, target)?;
        target.write_char('\n')
    }

    fn indent(
        &self, depth: usize, target: &mut impl fmt::Write
    ) -> fmt::Result {
        for _ in 0..depth {
            target.write_str(&self.indent)?;
        }
        Ok(())
    }
}


//------------ render and is_made_of_elements --------------------------------

/// Translates `data` into text using a printer with default settings.
pub fn render(data: &[u8]) -> String {
    Printer::default().render(data)
}

/// Returns whether `data` consists of complete elements only.
///
/// This uses the default length ceiling. See
/// [`Printer::is_made_of_elements`] for details.
pub fn is_made_of_elements(data: &[u8]) -> bool {
    Printer::default().is_made_of_elements(data)
}


//------------ Primitive Content ---------------------------------------------

/// Returns whether the universal type has a dedicated literal.
///
/// The content of these types is never parsed as nested elements except
/// for the special case of BIT STRING handled by the printer directly.
fn has_literal(tag: Tag) -> bool {
    [
        Tag::INTEGER, Tag::OID, Tag::RELATIVE_OID, Tag::BOOLEAN,
        Tag::BIT_STRING, Tag::BMP_STRING, Tag::UNIVERSAL_STRING,
    ].iter().any(|other| tag.is_type(*other))
}

/// Writes the content of a primitive element using the best literal.
fn fmt_primitive(
    tag: Tag, content: &[u8], f: &mut impl fmt::Write
) -> fmt::Result {
    if tag.is_type(Tag::INTEGER) {
        match int::decode_i64(content) {
            Ok(value) if (-MAX_DECIMAL..=MAX_DECIMAL).contains(&value) => {
                write!(f, "{}", value)
            }
            _ => string::fmt_hex(content, f)
        }
    }
    else if tag.is_type(Tag::OID) {
        match oid::decode_oid(content) {
            Ok(arcs) => oid::fmt_arcs(&arcs, false, f),
            Err(_) => string::fmt_hex(content, f)
        }
    }
    else if tag.is_type(Tag::RELATIVE_OID) {
        match oid::decode_relative_oid(content) {
            Ok(arcs) => oid::fmt_arcs(&arcs, true, f),
            Err(_) => string::fmt_hex(content, f)
        }
    }
    else if tag.is_type(Tag::BOOLEAN) {
        match content {
            [0x00] => f.write_str("FALSE"),
            [0xff] => f.write_str("TRUE"),
            _ => string::fmt_hex(content, f)
        }
    }
    else if tag.is_type(Tag::BIT_STRING) {
        fmt_bit_string(content, f)
    }
    else if tag.is_type(Tag::BMP_STRING) {
        string::fmt_utf16(content, f)
    }
    else if tag.is_type(Tag::UNIVERSAL_STRING) {
        string::fmt_utf32(content, f)
    }
    else {
        fmt_literal(content, f)
    }
}

/// Writes the content of a BIT STRING.
///
/// Up to four octets of bits are written as a bit string literal. Longer
/// content is split into the octet with the number of unused bits and the
/// rest if that octet is valid.
fn fmt_bit_string(content: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    if content.len() <= 5 && string::fmt_bits(content, f)? {
        return Ok(())
    }
    match content.split_first() {
        Some((&unused, rest)) if unused < 8 && !rest.is_empty() => {
            fmt_literal(&content[..1], f)?;
            f.write_char(' ')?;
            fmt_literal(rest, f)
        }
        _ => fmt_literal(content, f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn check(data: &[u8], expected: &str) {
        assert_eq!(render(data), expected, "{:02x?}", data);
    }

    #[test]
    fn made_of_elements() {
        assert!(is_made_of_elements(b""));
        assert!(!is_made_of_elements(b"\x00\x00"));
        assert!(is_made_of_elements(b"\x30\x00\x02\x01\x01"));
        assert!(is_made_of_elements(
            b"\x30\x80\x02\x01\x01\x02\x01\x01\x00\x00"
        ));
        assert!(!is_made_of_elements(b"\x30\x80\x02\x01\x01\x02\x01\x01"));
        assert!(!is_made_of_elements(b"\x02\x02\x01"));
    }

    #[test]
    fn integers() {
        check(b"\x02\x01\x2a", "INTEGER { 42 }\n");
        check(b"\x02\x01\xff", "INTEGER { -1 }\n");
        check(b"\x02\x03\x01\x86\xa0", "INTEGER { 100000 }\n");
        check(b"\x02\x03\x01\x86\xa1", "INTEGER { `0186a1` }\n");
        check(b"\x02\x04\xff\xff\xff\xff", "INTEGER { `ffffffff` }\n");
        check(b"\x02\x05\x00\xff\xff\xff\xff", "INTEGER { `00ffffffff` }\n");
        check(b"\x02\x02\x00\x00", "INTEGER { `0000` }\n");
    }

    #[test]
    fn bit_strings() {
        check(
            b"\x03\x03\x00\x30\x00",
            "BIT_STRING {\n  `00`\n  SEQUENCE {}\n}\n"
        );
        check(
            b"\x03\x03\x00\x00\x00",
            "BIT_STRING { b`0000000000000000` }\n"
        );
        check(b"\x03\x01\x00", "BIT_STRING { b`` }\n");
        check(b"\x03\x02\x07\x80", "BIT_STRING { b`1` }\n");
        check(b"\x03\x02\x04\xf0", "BIT_STRING { b`1111` }\n");
        check(b"\x03\x02\x00\xff", "BIT_STRING { b`11111111` }\n");
        check(b"\x03\x03\x07\xff\x80", "BIT_STRING { b`111111111` }\n");
        check(b"\x03\x02\x07\xc0", "BIT_STRING { b`1|1000000` }\n");
        check(
            b"\x03\x05\x01\x30\x80\x00\x00",
            "BIT_STRING { b`0011000010000000000000000000000` }\n"
        );
        check(
            b"\x03\x05\x01\x30\x80\x00\xff",
            "BIT_STRING { b`0011000010000000000000001111111|1` }\n"
        );
        check(
            b"\x03\x06\x01\x30\x80\xaa\x55\xaa",
            "BIT_STRING { `01` `3080aa55aa` }\n"
        );
        check(
            b"\x03\x05\xff\x30\x80\x00\x00",
            "BIT_STRING { `ff30800000` }\n"
        );
        check(b"\x03\x01\x07", "BIT_STRING { `07` }\n");
        check(b"\x03\x01\x08", "BIT_STRING { `08` }\n");
    }

    #[test]
    fn identifiers_and_booleans() {
        check(b"\x06\x03\x2a\x03\x04", "OBJECT_IDENTIFIER { 1.2.3.4 }\n");
        check(
            b"\x06\x09\x60\x86\x48\x01\x65\x03\x04\x02\x01",
            "# sha256\nOBJECT_IDENTIFIER { 2.16.840.1.101.3.4.2.1 }\n"
        );
        check(
            b"\x30\x05\x06\x03\x55\x1d\x13",
            "SEQUENCE {\n  # basicConstraints\n  \
             OBJECT_IDENTIFIER { 2.5.29.19 }\n}\n"
        );
        check(b"\x06\x02\x80\x00", "OBJECT_IDENTIFIER { `8000` }\n");
        check(b"\x0d\x03\x01\x02\x03", "RELATIVE_OID { .1.2.3 }\n");
        check(b"\x0d\x01\x01", "RELATIVE_OID { .1 }\n");
        check(b"\x0d\x02\x80\x00", "RELATIVE_OID { `8000` }\n");
        check(b"\x01\x01\x00", "BOOLEAN { FALSE }\n");
        check(b"\x01\x01\xff", "BOOLEAN { TRUE }\n");
        check(b"\x01\x02\x00\x00", "BOOLEAN { `0000` }\n");
        check(b"\x01\x01\x42", "BOOLEAN { `42` }\n");
    }

    #[test]
    fn wide_strings() {
        check(
            b"\x1e\x14\x00h\x00e\x00l\x00l\x00o\x00 \
              \x26\x03\x00 \xd8\x34\xdd\x1e",
            "BMPString { u\"hello \u{2603} \u{1D11E}\" }\n"
        );
        check(
            b"\x1e\x08\x00\x00\xe0\x00\xdb\x80\xdc\x00",
            "BMPString { u\"\\x00\\ue000\\U000f0000\" }\n"
        );
        check(
            b"\x1e\x0b\x00h\x00e\x00l\x00l\x00o ",
            "BMPString { u\"hello\" `20` }\n"
        );
        check(
            b"\x1c\x05\x00\x00\x00z\x01",
            "UniversalString { U\"z\" `01` }\n"
        );
        check(
            b"\x1c\x04\x80\x00\x00\x41",
            "UniversalString { U\"\\U80000041\" }\n"
        );
    }

    #[test]
    fn literals_and_overrides() {
        check(b"\x04\x0bhello world", "OCTET_STRING { \"hello world\" }\n");
        check(b"\x04\x03\x01\x02\x03", "OCTET_STRING { `010203` }\n");
        check(b"garbage", "\"garbage\"\n");
        check(b"\x01\x02\x03", "`010203`\n");
        check(
            b"\x1f\x04\x0bhello world",
            "[long-form:1 OCTET_STRING] { \"hello world\" }\n"
        );
        check(
            b"\x1f\x80\x04\x0bhello world",
            "[long-form:2 OCTET_STRING] { \"hello world\" }\n"
        );
        check(
            b"\x04\x81\x0bhello world",
            "OCTET_STRING long-form:1 { \"hello world\" }\n"
        );
        check(b"\x30\x81\x00", "SEQUENCE long-form:1 {}\n");
        check(
            b"\x04\x05\x30\x03\x02\x01\x01",
            "OCTET_STRING {\n  SEQUENCE {\n    INTEGER { 1 }\n  }\n}\n"
        );
    }

    #[test]
    fn indefinite() {
        check(
            b"\x30\x80\x02\x01\x2a\x00\x00",
            "SEQUENCE indefinite {\n  INTEGER { 42 }\n}\n"
        );
        check(
            b"\x30\x07garbage\x04\x0a\xa0\x80\x02\x01\x01\x02\x01\xff\
              \x00\x00\x04\x0bhello world\x30\x16\xa0\x80\x02\x01\x01\
              \x02\x02\x00\x00\x30\x80\x05\x00\x06\x03\x2a\x03\x04\x06\
              \x02\x80\x00\xff\xff\xff",
            "SEQUENCE {\n  \"garbage\"\n}\n\
             OCTET_STRING {\n  [0] indefinite {\n    INTEGER { 1 }\n    \
             INTEGER { -1 }\n  }\n}\n\
             OCTET_STRING { \"hello world\" }\n\
             SEQUENCE {\n  [0] `80`\n    INTEGER { 1 }\n    \
             INTEGER { `0000` }\n    SEQUENCE `80`\n      NULL {}\n      \
             OBJECT_IDENTIFIER { 1.2.3.4 }\n      \
             OBJECT_IDENTIFIER { `8000` }\n}\n\
             `ffffff`\n"
        );
        check(
            b"\x20\x80\x00\x02\x00\x00\x20\x02\x00\x00\x00\x00\x00\x00\x00",
            "[UNIVERSAL 0] indefinite {\n  \
             [UNIVERSAL 0 PRIMITIVE] { `0000` }\n  \
             [UNIVERSAL 0] {\n    [UNIVERSAL 0 PRIMITIVE] {}\n  }\n}\n\
             [UNIVERSAL 0 PRIMITIVE] {}\n\
             `00`\n"
        );
    }

    #[test]
    fn settings() {
        let data = b"\x30\x03\x30\x01\x05";
        assert_eq!(
            Printer::new().with_indent("\t").render(b"\x30\x02\x05\x00"),
            "SEQUENCE {\n\tNULL {}\n}\n"
        );
        assert_eq!(
            Printer::new().with_max_depth(1).render(data),
            "SEQUENCE {\n  `300105`\n}\n"
        );
        assert_eq!(
            Printer::new().with_max_length(1).render(b"\x04\x02ab"),
            "`04026162`\n"
        );
        assert_eq!(
            Printer::new().with_max_length(2).render(b"\x04\x02ab"),
            "OCTET_STRING { \"ab\" }\n"
        );
        assert_eq!(
            Printer::new().with_max_length(2).render(b"\x04\x81\x03abc"),
            "`048103616263`\n"
        );

        let mut res = String::new();
        Printer::new().render_to(b"\x05\x00", &mut res).unwrap();
        assert_eq!(res, "NULL {}\n");
    }
}
