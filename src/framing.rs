//! Input and output framing for the command line tools.
//!
//! Encoded data is frequently handed around in some wrapping rather than
//! as raw octets. This module unwraps the common ones: PEM blocks, hex
//! dumps and source code style arrays of integers. It also produces PEM
//! output.

use std::str;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use crate::error::ContentError;


//------------ PemBlock ------------------------------------------------------

/// The decoded content of a single PEM block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PemBlock {
    /// The type label from the `BEGIN` line, e.g., `CERTIFICATE`.
    pub label: String,

    /// The decoded octets.
    pub data: Vec<u8>,
}

impl PemBlock {
    /// Finds and decodes the first valid PEM block in `input`.
    ///
    /// Returns the block and the input following its `END` line. Malformed
    /// blocks are skipped. Header lines are ignored.
    pub fn decode_first(input: &[u8]) -> Option<(Self, &[u8])> {
        let mut rest = input;
        loop {
            let start = find(rest, BEGIN)?;
            rest = &rest[start + BEGIN.len()..];
            if let Some(res) = Self::decode_body(rest) {
                return Some(res)
            }
            debug!("skipping malformed PEM block");
        }
    }

    /// Decodes all valid PEM blocks in `input`.
    pub fn decode_all(mut input: &[u8]) -> Vec<Self> {
        let mut res = Vec::new();
        while let Some((block, rest)) = Self::decode_first(input) {
            res.push(block);
            input = rest;
        }
        res
    }

    /// Decodes a block starting right after `-----BEGIN `.
    fn decode_body(data: &[u8]) -> Option<(Self, &[u8])> {
        let (first, mut rest) = split_line(data);
        let label = str::from_utf8(first.strip_suffix(DASHES)?).ok()?;
        if label.contains("-----") {
            return None
        }
        let end = format!("-----END {}-----", label);

        let mut body = String::new();
        loop {
            if rest.is_empty() {
                return None
            }
            let (line, tail) = split_line(rest);
            rest = tail;
            let line = str::from_utf8(line).ok()?.trim();
            if line == end {
                break
            }
            if line.contains(':') {
                continue
            }
            body.push_str(line);
        }
        let data = STANDARD.decode(body).ok()?;
        Some((PemBlock { label: label.into(), data }, rest))
    }

    /// Encodes the block in PEM format.
    ///
    /// The base64 text is broken into lines of 64 characters.
    pub fn encode(&self) -> String {
        encode_pem(&self.label, &self.data)
    }
}


//------------ encode_pem ----------------------------------------------------

/// Encodes `data` as a PEM block with the given type label.
pub fn encode_pem(label: &str, data: &[u8]) -> String {
    let text = STANDARD.encode(data);
    let mut res = format!("-----BEGIN {}-----\n", label);
    let mut text = text.as_str();
    while !text.is_empty() {
        let (line, rest) = text.split_at(text.len().min(PEM_LINE));
        res.push_str(line);
        res.push('\n');
        text = rest;
    }
    res.push_str(&format!("-----END {}-----\n", label));
    res
}

const BEGIN: &[u8] = b"-----BEGIN ";
const DASHES: &[u8] = b"-----";
const PEM_LINE: usize = 64;

fn find(data: &[u8], needle: &[u8]) -> Option<usize> {
    data.windows(needle.len()).position(|window| window == needle)
}

/// Splits off the first line, dropping the line break.
fn split_line(data: &[u8]) -> (&[u8], &[u8]) {
    match data.iter().position(|&ch| ch == b'\n') {
        Some(pos) => {
            let line = &data[..pos];
            (line.strip_suffix(b"\r").unwrap_or(line), &data[pos + 1..])
        }
        None => (data.strip_suffix(b"\r").unwrap_or(data), &[][..])
    }
}


//------------ decode_hex ----------------------------------------------------

/// Decodes a hex dump.
///
/// Whitespace and punctuation characters are ignored, so the usual
/// notations like `30:0a:02` or `30 0A 02` are accepted.
pub fn decode_hex(input: &[u8]) -> Result<Vec<u8>, ContentError> {
    let digits: Vec<u8> = input.iter().copied().filter(|&ch| {
        !ch.is_ascii_whitespace() && !is_punctuation(ch)
    }).collect();
    let mut res = Vec::with_capacity(digits.len() / 2);
    crate::string::append_hex(&mut res, &digits)?;
    Ok(res)
}

/// Returns whether the character is punctuation.
///
/// Symbols such as `+` or `|` aren’t punctuation and are kept.
fn is_punctuation(ch: u8) -> bool {
    ch.is_ascii_punctuation() && !b"$+<=>^`|~".contains(&ch)
}


//------------ decode_array --------------------------------------------------

/// Decodes a comma-separated list of octet values.
///
/// Surrounding brackets, braces, commas and whitespace are ignored. Each
/// value may be given in decimal, in hex with a `0x` prefix, in octal with
/// a `0o` or plain `0` prefix, or in binary with a `0b` prefix.
pub fn decode_array(input: &[u8]) -> Result<Vec<u8>, ContentError> {
    let Ok(input) = str::from_utf8(input) else {
        xerr!(return Err("array is not valid UTF-8".into()))
    };
    let trimmed = input.trim_matches(|ch: char| {
        matches!(ch, '[' | ']' | '{' | '}' | ',') || ch.is_whitespace()
    });
    trimmed.split(',').map(|item| parse_octet(item.trim())).collect()
}

fn parse_octet(item: &str) -> Result<u8, ContentError> {
    let lower = item.to_ascii_lowercase();
    let (digits, radix) = if let Some(digits) = lower.strip_prefix("0x") {
        (digits, 16)
    }
    else if let Some(digits) = lower.strip_prefix("0o") {
        (digits, 8)
    }
    else if let Some(digits) = lower.strip_prefix("0b") {
        (digits, 2)
    }
    else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    }
    else {
        (lower.as_str(), 10)
    };
    // from_str_radix accepts a leading sign which we don’t.
    if !digits.starts_with(|ch: char| ch.is_digit(radix)) {
        xerr!(return Err(format!("invalid array item {:?}", item).into()))
    }
    u8::from_str_radix(digits, radix).map_err(|err| {
        xerr!(format!("invalid array item {:?}: {}", item, err).into())
    })
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    const CERT_PEM: &str = "\
        garbage before\n\
        -----BEGIN TEST-----\n\
        Proc-Type: 4,ENCRYPTED\n\
        \n\
        MAMCAQE=\n\
        -----END TEST-----\n\
        -----BEGIN BROKEN-----\n\
        !!!\n\
        -----END BROKEN-----\n\
        -----BEGIN OTHER-----\r\n\
        BQA=\r\n\
        -----END OTHER-----\r\n\
        trailing\n";

    #[test]
    fn pem_first() {
        let (block, rest) = PemBlock::decode_first(
            CERT_PEM.as_bytes()
        ).unwrap();
        assert_eq!(block.label, "TEST");
        assert_eq!(block.data, b"\x30\x03\x02\x01\x01");
        assert!(rest.starts_with(b"-----BEGIN BROKEN"));

        assert!(PemBlock::decode_first(b"no pem here").is_none());
        assert!(PemBlock::decode_first(
            b"-----BEGIN X-----\nBQA=\n"
        ).is_none());
        assert!(PemBlock::decode_first(
            b"-----BEGIN X-----\nBQA=\n-----END Y-----\n"
        ).is_none());
    }

    #[test]
    fn pem_all() {
        let blocks = PemBlock::decode_all(CERT_PEM.as_bytes());
        assert_eq!(
            blocks,
            [
                PemBlock {
                    label: "TEST".into(),
                    data: b"\x30\x03\x02\x01\x01".to_vec()
                },
                PemBlock {
                    label: "OTHER".into(),
                    data: b"\x05\x00".to_vec()
                },
            ]
        );
        assert!(PemBlock::decode_all(b"").is_empty());
    }

    #[test]
    fn pem_encode() {
        assert_eq!(
            encode_pem("TEST", b"\x30\x03\x02\x01\x01"),
            "-----BEGIN TEST-----\nMAMCAQE=\n-----END TEST-----\n"
        );
        assert_eq!(
            encode_pem("EMPTY", b""),
            "-----BEGIN EMPTY-----\n-----END EMPTY-----\n"
        );

        let block = PemBlock { label: "LONG".into(), data: vec![0; 60] };
        let text = block.encode();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].len(), 64);
        assert_eq!(lines[2].len(), 16);
        let (decoded, rest) = PemBlock::decode_first(
            text.as_bytes()
        ).unwrap();
        assert_eq!(decoded, block);
        assert!(rest.is_empty());
    }

    #[test]
    fn hex() {
        assert_eq!(
            decode_hex(b"30 0a:02\n01-FF").unwrap(), b"\x30\x0a\x02\x01\xff"
        );
        assert_eq!(decode_hex(b"").unwrap(), b"");
        assert!(decode_hex(b"300").is_err());
        assert!(decode_hex(b"30+0a").is_err());
        assert!(decode_hex(b"3g").is_err());
    }

    #[test]
    fn array() {
        assert_eq!(
            decode_array(
                b"{0x30, 0X0a, 2, 0o1, 0b11111111, 010}\n"
            ).unwrap(),
            b"\x30\x0a\x02\x01\xff\x08"
        );
        assert_eq!(decode_array(b"[ 0, 255, ]").unwrap(), b"\x00\xff");
        assert!(decode_array(b"256").is_err());
        assert!(decode_array(b"-1").is_err());
        assert!(decode_array(b"+1").is_err());
        assert!(decode_array(b"1,,2").is_err());
        assert!(decode_array(b"0x").is_err());
        assert!(decode_array(b"").is_err());
    }
}
