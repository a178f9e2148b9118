//! Raw path parsing: separators, segments, matrix parameters, and strict
//! percent-decoding.
//!
//! All functions here are **pure**: the element sequence is a deterministic
//! function of the raw string and the encoding, with no external state.

use std::fmt;

use crate::element::{Element, PathParameter, PathSegment, SEPARATOR};
use crate::error::ParseError;

/// Character encoding used to interpret percent-decoded bytes.
///
/// Request paths arrive percent-encoded over the wire; the bytes they
/// encode are interpreted in the encoding the transport layer declares.
/// UTF-8 is the default and by far the common case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8 (the default). Decoded byte sequences that are not valid
    /// UTF-8 fail the parse.
    #[default]
    Utf8,
    /// ISO-8859-1. Every byte maps to the Unicode code point of the same
    /// value, so decoding cannot fail.
    Latin1,
}

impl Encoding {
    fn decode(self, bytes: Vec<u8>, raw: &str) -> Result<String, ParseError> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes).map_err(|_| ParseError::InvalidEncodedData {
                    segment: raw.to_string(),
                    encoding: self,
                })
            }
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("UTF-8"),
            Encoding::Latin1 => f.write_str("ISO-8859-1"),
        }
    }
}

/// Scans a raw path left to right into its element sequence.
///
/// Every `/` becomes its own [`Element::Separator`] — leading, trailing,
/// and consecutive separators are never collapsed, which is what keeps the
/// concatenation of raw spans equal to the input.
pub(crate) fn parse_elements(raw: &str, encoding: Encoding) -> Result<Vec<Element>, ParseError> {
    let mut elements = Vec::new();
    let mut begin = 0;

    while begin < raw.len() {
        if raw.as_bytes()[begin] == SEPARATOR as u8 {
            elements.push(Element::Separator);
            begin += 1;
        } else {
            let end = raw[begin..]
                .find(SEPARATOR)
                .map(|i| begin + i)
                .unwrap_or(raw.len());
            let segment = parse_segment(&raw[begin..end], encoding)?;
            elements.push(Element::Segment(segment));
            begin = end;
        }
    }

    Ok(elements)
}

/// Parses one raw segment span (the text between two separators).
///
/// The first `;` marks the start of matrix-parameter content, which is
/// stripped from the decoded value and kept verbatim as the segment's
/// semicolon content.
fn parse_segment(raw: &str, encoding: Encoding) -> Result<PathSegment, ParseError> {
    match raw.find(';') {
        None => {
            let value = percent_decode(raw, encoding)?;
            Ok(PathSegment::new(
                raw.to_string(),
                value,
                String::new(),
                Vec::new(),
            ))
        }
        Some(index) => {
            let (value_part, semicolon_content) = raw.split_at(index);
            let value = percent_decode(value_part, encoding)?;
            let parameters = parse_parameters(semicolon_content);
            Ok(PathSegment::new(
                value_part.to_string(),
                value,
                semicolon_content.to_string(),
                parameters,
            ))
        }
    }
}

/// Parses raw `;name=value;...` content into ordered parameters.
///
/// Rules:
/// - `;name` without `=` yields the single empty value `""`
/// - `;name=a,b` expands to the values `["a", "b"]`
/// - repeated names accumulate values in encounter order
/// - entries with an empty name are skipped
///
/// Names and values stay raw; no percent-decoding is applied here.
fn parse_parameters(content: &str) -> Vec<PathParameter> {
    let mut parameters: Vec<PathParameter> = Vec::new();

    for entry in content.split(';').filter(|entry| !entry.is_empty()) {
        let (name, value) = match entry.split_once('=') {
            Some((name, value)) => (name, value),
            None => (entry, ""),
        };
        if name.is_empty() {
            continue;
        }

        let values: Vec<String> = if value.contains(',') {
            value.split(',').map(str::to_string).collect()
        } else {
            vec![value.to_string()]
        };

        match parameters.iter_mut().find(|p| p.name() == name) {
            Some(existing) => existing.push_values(values),
            None => parameters.push(PathParameter::new(name.to_string(), values)),
        }
    }

    parameters
}

/// Strict percent-decoder.
///
/// Unlike the lenient decoders common on the encoding side of the
/// ecosystem, a `%` that is not followed by two hex digits is an error
/// here, not literal text — a client that sent it produced a malformed
/// path and gets a parse failure, never a silently different segment.
pub(crate) fn percent_decode(raw: &str, encoding: Encoding) -> Result<String, ParseError> {
    if !raw.contains('%') {
        return Ok(raw.to_string());
    }

    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) => hex_value(hi).zip(hex_value(lo)),
                _ => None,
            };
            match escape {
                Some((hi, lo)) => {
                    decoded.push(hi << 4 | lo);
                    i += 3;
                }
                None => {
                    return Err(ParseError::MalformedEscape {
                        segment: raw.to_string(),
                        offset: i,
                    });
                }
            }
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    encoding.decode(decoded, raw)
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}
