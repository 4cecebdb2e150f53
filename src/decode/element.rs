//! Parsing of individual elements.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::length::Length;
use crate::tag::Tag;
use super::error::DecodeError;
use super::source::SliceSource;


//------------ Constants -----------------------------------------------------

/// The default ceiling for definite lengths.
///
/// This isn’t required by any encoding rules. It only keeps the parser from
/// chasing absurd lengths in garbage input.
pub const MAX_LENGTH: usize = 1 << 23;


//------------ Element -------------------------------------------------------

/// A single element parsed from encoded data.
///
/// The element borrows its content octets from the data it was parsed from.
/// Elements with an indefinite length don’t have their content determined
/// by the parser since that requires finding the matching end-of-contents
/// marker. Their `content` is `None` and the data following the element’s
/// header is returned as the remainder instead.
///
/// Note that the parser doesn’t treat the end-of-contents marker itself in
/// any special way: two zero octets are an element with tag UNIVERSAL 0 and
/// empty content. Detecting the end of indefinite-length content is left to
/// the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Element<'a> {
    /// The tag of the element, including any long form override.
    pub tag: Tag,

    /// The length of the element, including any long form override.
    pub length: Length,

    /// The content octets if the length is definite.
    pub content: Option<&'a [u8]>,
}

impl<'a> Element<'a> {
    /// Takes the identifier and length octets from a source.
    ///
    /// Fails if the source ends early, if the tag number overflows, if a
    /// primitive element has indefinite length, or if a definite length
    /// exceeds `limit`. On failure the source is left unchanged.
    pub fn take_header_from(
        source: &mut SliceSource<'a>, limit: usize,
    ) -> Result<(Tag, Length), DecodeError> {
        let mut work = *source;
        let tag = Tag::take_from(&mut work)?;
        let length = Length::take_from(&mut work, tag.constructed, limit)?;
        *source = work;
        Ok((tag, length))
    }

    /// Takes a complete element from a source.
    ///
    /// On top of the checks of [`take_header_from`][Self::take_header_from]
    /// this fails if a definite length exceeds the remaining data.
    pub fn take_from(
        source: &mut SliceSource<'a>, limit: usize,
    ) -> Result<Self, DecodeError> {
        let mut work = *source;
        let (tag, length) = Self::take_header_from(&mut work, limit)?;
        let content = match length.definite_len() {
            Some(len) => match work.take_slice(len) {
                Ok(content) => Some(content),
                Err(_) => {
                    xerr!(return Err(work.content_err(
                        "length exceeds available data"
                    )))
                }
            }
            None => None
        };
        *source = work;
        Ok(Element { tag, length, content })
    }

    /// Returns whether the element has indefinite length.
    pub fn is_indefinite(&self) -> bool {
        self.length.is_indefinite()
    }
}


//------------ Parsing Functions ---------------------------------------------

/// Parses a tag from the beginning of `data`.
///
/// Returns the tag and the remaining data.
pub fn parse_tag(data: &[u8]) -> Result<(Tag, &[u8]), DecodeError> {
    let mut source = SliceSource::new(data);
    let tag = Tag::take_from(&mut source)?;
    Ok((tag, source.remaining()))
}

/// Parses identifier and length octets from the beginning of `data`.
///
/// Returns the tag, the length, and the remaining data.
pub fn parse_tag_and_length(
    data: &[u8]
) -> Result<(Tag, Length, &[u8]), DecodeError> {
    parse_tag_and_length_with_limit(data, MAX_LENGTH)
}

/// Parses identifier and length octets with an explicit length ceiling.
pub fn parse_tag_and_length_with_limit(
    data: &[u8], limit: usize,
) -> Result<(Tag, Length, &[u8]), DecodeError> {
    let mut source = SliceSource::new(data);
    let (tag, length) = Element::take_header_from(&mut source, limit)?;
    Ok((tag, length, source.remaining()))
}

/// Parses an element from the beginning of `data`.
///
/// Returns the element and the data following it. For an element of
/// indefinite length, that is the data following the length octets.
pub fn parse_element(
    data: &[u8]
) -> Result<(Element, &[u8]), DecodeError> {
    parse_element_with_limit(data, MAX_LENGTH)
}

/// Parses an element with an explicit length ceiling.
pub fn parse_element_with_limit(
    data: &[u8], limit: usize,
) -> Result<(Element, &[u8]), DecodeError> {
    let mut source = SliceSource::new(data);
    let element = Element::take_from(&mut source, limit)?;
    Ok((element, source.remaining()))
}

/// Returns whether `data` starts with an end-of-contents marker.
pub fn starts_with_eoc(data: &[u8]) -> bool {
    data.starts_with(b"\0\0")
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::tag::Class;

    #[test]
    fn tag() {
        let (tag, rest) = parse_tag(b"\x30\x00").unwrap();
        assert_eq!(tag, Tag::SEQUENCE);
        assert_eq!(rest, b"\x00");

        let (tag, rest) = parse_tag(b"\xff\x80\x01").unwrap();
        assert_eq!(tag.class, Class::Private);
        assert_eq!(tag.number, 1);
        assert_eq!(tag.long_form, Some(2));
        assert!(rest.is_empty());

        assert!(parse_tag(b"").is_err());
        assert!(parse_tag(b"\x1f\xff").is_err());
    }

    #[test]
    fn tag_and_length() {
        fn step(data: &[u8], res: Option<(Option<usize>, Option<usize>)>) {
            match res {
                Some((len, long_form)) => {
                    let (_, length, _) = parse_tag_and_length(data).unwrap();
                    assert_eq!(length.definite_len(), len, "{:?}", data);
                    assert_eq!(length.long_form(), long_form, "{:?}", data);
                }
                None => {
                    assert!(parse_tag_and_length(data).is_err(), "{:?}", data)
                }
            }
        }

        step(b"\x30\x00", Some((Some(0), None)));
        step(b"\x30\x80", Some((None, None)));
        step(b"\x04\x80", None);
        step(b"\x30\x81\x80", Some((Some(0x80), None)));
        step(b"\x30\x81\x7f", Some((Some(0x7f), Some(1))));
        step(b"\x30\x82\x00\x80", Some((Some(0x80), Some(2))));
        step(b"\x30\x82\x01", None);
        step(b"\x30\x83\x7f\xff\xff", Some((Some(0x7f_ffff), None)));
        step(b"\x30\x83\x80\x00\x00", Some((Some(MAX_LENGTH), None)));
        step(
            b"\x30\x84\x00\x80\x00\x00",
            Some((Some(MAX_LENGTH), Some(4)))
        );
        step(b"\x30\x83\x80\x00\x01", None);
        step(b"\x30\x84\x01\x00\x00\x00", None);
        step(b"\x30\x85\x01\x00\x00\x00\x00", None);
        step(b"\x30", None);
        step(b"", None);

        assert!(
            parse_tag_and_length_with_limit(b"\x30\x82\x01\x00\x00", 1)
                .is_err()
        );
        assert!(parse_tag_and_length_with_limit(b"\x04\x02ab", 1).is_err());
        assert!(parse_tag_and_length_with_limit(b"\x04\x01a", 1).is_ok());
    }

    #[test]
    fn element() {
        let (elem, rest) = parse_element(b"\x02\x01\x2a\x05\x00").unwrap();
        assert_eq!(elem.tag, Tag::INTEGER);
        assert_eq!(elem.content, Some(b"\x2a".as_ref()));
        assert!(!elem.is_indefinite());
        assert_eq!(rest, b"\x05\x00");

        let (elem, rest) = parse_element(b"\x30\x80\x00\x00").unwrap();
        assert!(elem.is_indefinite());
        assert_eq!(elem.content, None);
        assert_eq!(rest, b"\x00\x00");

        let (elem, rest) = parse_element(b"\x00\x00").unwrap();
        assert_eq!(elem.tag, Tag::END_OF_VALUE);
        assert_eq!(elem.content, Some(b"".as_ref()));
        assert!(rest.is_empty());

        assert!(parse_element(b"\x01\x02\x03").is_err());
        assert!(parse_element(b"\x04\x05abc").is_err());

        assert!(starts_with_eoc(b"\x00\x00\x01"));
        assert!(!starts_with_eoc(b"\x00"));
        assert!(!starts_with_eoc(b"\x00\x01"));
    }
}
