//! The path container: an immutable raw string plus its element sequence.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::element::Element;
use crate::error::ParseError;
use crate::parse::{self, Encoding};

/// An ordered, immutable representation of a parsed path.
///
/// A container owns the original raw string and the typed elements parsed
/// from it. Concatenating the raw spans of all elements, in order,
/// reproduces the raw string character-for-character — including repeated
/// separators and semicolon content. That invariant is what makes
/// offset-based sub-path extraction correct.
///
/// Containers are immutable once constructed and safe to share read-only
/// across request-handling tasks. Equality and hashing are defined over
/// the ordered element sequence.
///
/// # Examples
///
/// ```
/// use urlpath::PathContainer;
///
/// let path = PathContainer::parse("/api/v1/items").unwrap();
/// assert_eq!(path.value(), "/api/v1/items");
/// assert_eq!(path.elements().len(), 6);
///
/// let tail = path.sub_path(2, 6);
/// assert_eq!(tail.value(), "/v1/items");
/// ```
#[derive(Debug, Clone)]
pub struct PathContainer {
    value: String,
    elements: Vec<Element>,
}

impl PathContainer {
    /// Parses a raw, percent-encoded path using UTF-8.
    ///
    /// An empty input yields the empty container — a valid, terminal
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when a segment carries a malformed percent
    /// escape or decodes to bytes that are not valid UTF-8.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_with(raw, Encoding::Utf8)
    }

    /// Parses a raw path, interpreting percent-decoded bytes in the given
    /// encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlpath::{Encoding, PathContainer};
    ///
    /// let path = PathContainer::parse_with("/caf%E9", Encoding::Latin1).unwrap();
    /// assert_eq!(path.elements()[1].value(), "café");
    /// ```
    pub fn parse_with(raw: &str, encoding: Encoding) -> Result<Self, ParseError> {
        let elements = parse::parse_elements(raw, encoding)?;
        trace!(path = raw, elements = elements.len(), "parsed path container");
        Ok(Self {
            value: raw.to_string(),
            elements,
        })
    }

    /// The container with no elements and an empty raw value.
    ///
    /// An absent path is represented as the empty container, never as a
    /// missing one.
    pub fn empty() -> Self {
        Self {
            value: String::new(),
            elements: Vec::new(),
        }
    }

    /// The original raw path string this container was parsed from.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The ordered element sequence.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns `true` when the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Extracts the contiguous element range `[from, to)` as a new
    /// container.
    ///
    /// The new container's raw value is the exact concatenation of the raw
    /// spans of the sliced elements; no re-parsing, re-decoding, or
    /// re-validation occurs. O(k) in the number of sliced elements.
    ///
    /// # Panics
    ///
    /// Panics when `from > to` or `to` exceeds the element count. Callers
    /// inside this crate derive indices from element walks and never pass
    /// invalid ranges; an invalid range from outside is a programming
    /// error, not a routing condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlpath::PathContainer;
    ///
    /// let path = PathContainer::parse("/a/b;p=1/c").unwrap();
    /// let middle = path.sub_path(2, 4);
    /// assert_eq!(middle.value(), "/b;p=1");
    /// ```
    pub fn sub_path(&self, from: usize, to: usize) -> PathContainer {
        assert!(
            from <= to && to <= self.elements.len(),
            "sub-path range {from}..{to} out of bounds for {} elements",
            self.elements.len()
        );

        let elements = self.elements[from..to].to_vec();
        let mut value = String::with_capacity(elements.iter().map(Element::raw_len).sum());
        for element in &elements {
            element.write_raw(&mut value);
        }

        PathContainer { value, elements }
    }
}

impl PartialEq for PathContainer {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for PathContainer {}

impl Hash for PathContainer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl fmt::Display for PathContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_container() {
        let path = PathContainer::parse("").unwrap();
        assert_eq!(path.value(), "");
        assert!(path.is_empty());
    }

    #[test]
    fn sub_path_concatenates_raw_spans() {
        let path = PathContainer::parse("/a;x=1/b/c").unwrap();
        let head = path.sub_path(0, 2);
        assert_eq!(head.value(), "/a;x=1");
        assert_eq!(head.elements().len(), 2);
    }

    #[test]
    fn sub_path_of_sub_path_is_idempotent() {
        let path = PathContainer::parse("/a/b/c").unwrap();
        for n in 0..=path.elements().len() {
            let once = path.sub_path(0, n);
            let twice = once.sub_path(0, n);
            assert_eq!(once, twice);
            assert_eq!(once.value(), twice.value());
        }
    }

    #[test]
    fn full_range_sub_path_equals_original() {
        let path = PathContainer::parse("//x;a=1//y/").unwrap();
        let copy = path.sub_path(0, path.elements().len());
        assert_eq!(copy, path);
        assert_eq!(copy.value(), path.value());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn sub_path_rejects_reversed_range() {
        let path = PathContainer::parse("/a/b").unwrap();
        path.sub_path(3, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn sub_path_rejects_overlong_range() {
        let path = PathContainer::parse("/a").unwrap();
        path.sub_path(0, 5);
    }

    #[test]
    fn equality_is_over_element_sequences() {
        let a = PathContainer::parse("/a/b").unwrap();
        let b = PathContainer::parse("/a/b").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, PathContainer::parse("/a/c").unwrap());
    }

    #[test]
    fn display_renders_raw_value() {
        let path = PathContainer::parse("/a%20b;x=1").unwrap();
        assert_eq!(path.to_string(), "/a%20b;x=1");
    }
}
