//! The identifier octets of a BER encoded value.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{fmt, str};
use bytes::BufMut;
use crate::base128;
use crate::decode::{DecodeError, SliceSource};
use crate::error::ContentError;
use crate::length::parse_long_form;


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl Class {
    /// The mask for checking the class.
    const MASK: u8 = 0xc0;

    /// Returns the class bits of the first identifier octet.
    pub const fn to_bits(self) -> u8 {
        match self {
            Class::Universal => 0x00,
            Class::Application => 0x40,
            Class::ContextSpecific => 0x80,
            Class::Private => 0xc0,
        }
    }

    /// Returns the class encoded in the first identifier octet.
    pub const fn from_bits(octet: u8) -> Self {
        match octet & Self::MASK {
            0x00 => Class::Universal,
            0x40 => Class::Application,
            0x80 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }

    /// Returns the keyword used for the class in tag descriptors.
    ///
    /// Context-specific is the default class and has no keyword.
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Class::Universal => Some("UNIVERSAL"),
            Class::Application => Some("APPLICATION"),
            Class::ContextSpecific => None,
            Class::Private => Some("PRIVATE"),
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "UNIVERSAL" => Some(Class::Universal),
            "APPLICATION" => Some(Class::Application),
            "PRIVATE" => Some(Class::Private),
            _ => None
        }
    }
}


//------------ Tag -----------------------------------------------------------

/// The identifier of an encoded element.
///
/// Each BER encoded value starts with a sequence of one or more octets called
/// the _identifier octets._ They encode the class and number of the tag as
/// well as whether the value uses primitive or constructed encoding. Unlike
/// a strict BER decoder, all of this is kept in the tag, since the exact
/// identifier octets must survive a trip through the text form.
///
/// For the same reason, the tag remembers whether it was encoded using more
/// octets than necessary. If `long_form` is `Some(n)`, the tag number is
/// encoded in the high tag number form using exactly `n` octets after the
/// first one, padded with leading `0x80` octets.
///
/// Tags are displayed and parsed in the tag descriptor syntax used inside
/// square brackets in the text form, e.g., `[APPLICATION 1 PRIMITIVE]`,
/// though without the brackets. If a tag has a well-known name and uses its
/// usual encoding, the name alone is used.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tag {
    /// The class of the tag.
    pub class: Class,

    /// The tag number.
    pub number: u32,

    /// Whether the value uses constructed encoding.
    pub constructed: bool,

    /// The number of octets after the first to encode the number with.
    pub long_form: Option<usize>,
}

/// # Constants for Often Used Tag Values
///
impl Tag {
    /// The mask for checking whether the value is constructed.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number in the first octet.
    ///
    /// If all bits are set, the number follows in base-128.
    const SINGLEBYTE_DATA_MASK: u8 = 0x1f;

    /// The tag marking the end of an indefinite length value, UNIVERSAL 0.
    pub const END_OF_VALUE: Self = Self::universal(0, false);

    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::universal(1, false);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::universal(2, false);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::universal(3, false);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::universal(4, false);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::universal(5, false);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::universal(6, false);

    /// The tag for the RELATIVE-OID type, UNIVERSAL 13.
    pub const RELATIVE_OID: Self = Self::universal(13, false);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::universal(16, true);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::universal(17, true);

    /// The tag for the UniversalString type, UNIVERSAL 28.
    pub const UNIVERSAL_STRING: Self = Self::universal(28, false);

    /// The tag for the BMPString type, UNIVERSAL 30.
    pub const BMP_STRING: Self = Self::universal(30, false);
}

impl Tag {
    /// Creates a new tag using the minimal encoding.
    pub const fn new(class: Class, number: u32, constructed: bool) -> Self {
        Tag { class, number, constructed, long_form: None }
    }

    /// Creates a new tag in the universal class.
    pub const fn universal(number: u32, constructed: bool) -> Self {
        Self::new(Class::Universal, number, constructed)
    }

    /// Returns the tag with a long form override.
    pub const fn with_long_form(self, long_form: Option<usize>) -> Self {
        Tag { long_form, ..self }
    }

    /// Returns whether `self` and `other` refer to the same type.
    ///
    /// This compares class and number only, ignoring both the constructed
    /// flag and any long form override.
    pub fn is_type(self, other: Tag) -> bool {
        self.class == other.class && self.number == other.number
    }

    /// Looks up a universal tag by its well-known name.
    ///
    /// The tag returned uses the usual encoding for the type.
    pub fn by_name(name: &str) -> Option<Self> {
        UNIVERSAL_TAGS.iter().find(|item| item.1 == name).map(|item| {
            Tag::universal(item.0, item.2)
        })
    }

    /// Returns the well-known name of the tag if it has one.
    ///
    /// Only universal tags have names. The second element of the returned
    /// pair is `true` if the constructed flag of the tag differs from the
    /// usual encoding of the type.
    pub fn alias(self) -> Option<(&'static str, bool)> {
        if self.class != Class::Universal {
            return None
        }
        UNIVERSAL_TAGS.iter().find(|item| item.0 == self.number).map(|item| {
            (item.1, item.2 != self.constructed)
        })
    }
}

/// # Decoding and Encoding
///
impl Tag {
    /// Takes a tag from the beginning of a source.
    ///
    /// A high tag number form encoding of a number below 31 is accepted and
    /// remembered as a long form override, as are leading `0x80` octets.
    /// On error, the source is left unchanged.
    pub fn take_from(source: &mut SliceSource) -> Result<Self, DecodeError> {
        let mut work = *source;
        let first = work.take_u8()?;
        let class = Class::from_bits(first);
        let constructed = first & Self::CONSTRUCTED_MASK != 0;
        let number = first & Self::SINGLEBYTE_DATA_MASK;
        if number != Self::SINGLEBYTE_DATA_MASK {
            *source = work;
            return Ok(Tag::new(class, u32::from(number), constructed))
        }
        let start = work.remaining().len();
        let (number, mut long_form) = base128::take_from(&mut work)?;
        if number < u32::from(Self::SINGLEBYTE_DATA_MASK) {
            long_form = Some(start - work.remaining().len());
        }
        *source = work;
        Ok(Tag { class, number, constructed, long_form })
    }

    /// Appends the encoded identifier octets to `target`.
    ///
    /// Fails if the long form override is too small for the tag number.
    /// Nothing is written in this case.
    pub fn append_encoded<B: BufMut>(
        self, target: &mut B
    ) -> Result<(), ContentError> {
        let mut first = self.class.to_bits();
        if self.constructed {
            first |= Self::CONSTRUCTED_MASK
        }
        match self.long_form {
            None if self.number < u32::from(Self::SINGLEBYTE_DATA_MASK) => {
                // Panic: number < 0x1f, so it fits into the low bits.
                target.put_u8(first | self.number as u8);
                return Ok(())
            }
            Some(long_form) if long_form < base128::encoded_len(self.number) => {
                xerr!(return Err(ContentError::from_static(
                    "long-form override is too small for tag number"
                )))
            }
            _ => { }
        }
        target.put_u8(first | Self::SINGLEBYTE_DATA_MASK);
        base128::append_encoded(target, self.number, self.long_form)
    }
}


//--- FromStr

impl str::FromStr for Tag {
    type Err = ContentError;

    /// Parses a tag descriptor.
    ///
    /// The descriptor consists of components separated by single spaces.
    /// It starts with an optional `long-form:N` override followed by either
    /// the name of a universal tag or an optional class keyword and the tag
    /// number. Numbered tags default to context-specific and constructed.
    /// A final `CONSTRUCTED` or `PRIMITIVE` overrides the constructed flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split(' ').peekable();

        let long_form = match components.peek() {
            Some(first) => match parse_long_form(first)? {
                Some(long_form) => {
                    components.next();
                    Some(long_form)
                }
                None => None
            }
            None => None
        };

        let Some(first) = components.next() else {
            xerr!(return Err("expected tag component".into()))
        };
        let mut tag = match Tag::by_name(first) {
            Some(tag) => tag,
            None => {
                let (class, number) = match Class::from_keyword(first) {
                    Some(class) => match components.next() {
                        Some(number) => (class, number),
                        None => {
                            xerr!(return Err("expected tag number".into()))
                        }
                    }
                    None => (Class::ContextSpecific, first)
                };
                Tag::new(class, parse_tag_number(number)?, true)
            }
        };
        tag.long_form = long_form;

        if let Some(flag) = components.next() {
            tag.constructed = match flag {
                "CONSTRUCTED" => true,
                "PRIMITIVE" => false,
                _ => {
                    xerr!(return Err(format!(
                        "unexpected tag component {:?}", flag
                    ).into()))
                }
            }
        }
        if let Some(excess) = components.next() {
            xerr!(return Err(format!(
                "excess tag component {:?}", excess
            ).into()))
        }
        Ok(tag)
    }
}

fn parse_tag_number(s: &str) -> Result<u32, ContentError> {
    if s.is_empty() || !s.bytes().all(|ch| ch.is_ascii_digit()) {
        xerr!(return Err(format!("invalid tag number {:?}", s).into()))
    }
    s.parse().map_err(|_| {
        xerr!(ContentError::from(format!("tag number {} is too large", s)))
    })
}


//--- Display

impl fmt::Display for Tag {
    /// Formats the tag as a tag descriptor.
    ///
    /// If the tag has a name and uses the usual encoding for it, only the
    /// name is written. Otherwise the full descriptor is written in square
    /// brackets.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let alias = self.alias();
        if let Some((name, false)) = alias {
            if self.long_form.is_none() {
                return f.write_str(name)
            }
        }
        f.write_str("[")?;
        if let Some(long_form) = self.long_form {
            write!(f, "long-form:{} ", long_form)?;
        }
        let show_constructed = match alias {
            Some((name, toggle)) => {
                f.write_str(name)?;
                toggle
            }
            None => {
                match self.class.keyword() {
                    Some(keyword) => write!(f, "{} {}", keyword, self.number)?,
                    None => write!(f, "{}", self.number)?,
                }
                !self.constructed
            }
        };
        if show_constructed {
            if self.constructed {
                f.write_str(" CONSTRUCTED")?;
            }
            else {
                f.write_str(" PRIMITIVE")?;
            }
        }
        f.write_str("]")
    }
}


//------------ UNIVERSAL_TAGS ------------------------------------------------

/// The names of the universal tags.
///
/// Each entry has the tag number, the name, and whether the type is
/// normally constructed. Number 0 is the end-of-contents marker, 15 is
/// reserved.
const UNIVERSAL_TAGS: &[(u32, &str, bool)] = &[
    (1, "BOOLEAN", false),
    (2, "INTEGER", false),
    (3, "BIT_STRING", false),
    (4, "OCTET_STRING", false),
    (5, "NULL", false),
    (6, "OBJECT_IDENTIFIER", false),
    (7, "OBJECT_DESCRIPTOR", false),
    (8, "EXTERNAL", false),
    (9, "REAL", false),
    (10, "ENUMERATED", false),
    (11, "EMBEDDED_PDV", false),
    (12, "UTF8String", false),
    (13, "RELATIVE_OID", false),
    (14, "TIME", false),
    (16, "SEQUENCE", true),
    (17, "SET", true),
    (18, "NumericString", false),
    (19, "PrintableString", false),
    (20, "T61String", false),
    (21, "VideotexString", false),
    (22, "IA5String", false),
    (23, "UTCTime", false),
    (24, "GeneralizedTime", false),
    (25, "GraphicString", false),
    (26, "VisibleString", false),
    (27, "GeneralString", false),
    (28, "UniversalString", false),
    (30, "BMPString", false),
    (31, "DATE", false),
    (32, "TIME-OF-DAY", false),
    (33, "DATE-TIME", false),
    (34, "DURATION", false),
    (35, "OID-IRI", false),
    (36, "RELATIVE-OID-IRI", false),
];


//============ Tests =========================================================
