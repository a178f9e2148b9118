//! Typed path elements: separators and decoded segments.
//!
//! An element is the atomic unit of a parsed path. The two kinds are fixed
//! and exhaustively known, so they are modeled as a closed sum type rather
//! than an open trait — the parser and splitter match on them exhaustively.

/// The path delimiter character.
pub const SEPARATOR: char = '/';

/// A single element of a parsed path: either a separator or a segment.
///
/// # Examples
///
/// ```
/// use urlpath::{Element, PathContainer};
///
/// let path = PathContainer::parse("/users/42").unwrap();
/// let elements = path.elements();
///
/// assert_eq!(elements.len(), 4);
/// assert!(elements[0].is_separator());
/// assert_eq!(elements[1].value(), "users");
/// assert_eq!(elements[3].value(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    /// A single `/` delimiter.
    Separator,
    /// A decoded path token with optional matrix parameters.
    Segment(PathSegment),
}

impl Element {
    /// Returns the semantic value of this element: `"/"` for a separator,
    /// the percent-decoded text for a segment (semicolon content excluded).
    pub fn value(&self) -> &str {
        match self {
            Element::Separator => "/",
            Element::Segment(segment) => segment.value(),
        }
    }

    /// Returns `true` if this element is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, Element::Separator)
    }

    /// Returns `true` if this element is a segment.
    pub fn is_segment(&self) -> bool {
        matches!(self, Element::Segment(_))
    }

    /// Length in bytes of this element's raw source span, including any
    /// semicolon content. Summing raw spans over a container reproduces the
    /// raw path length exactly, which is what mount-prefix alignment relies
    /// on.
    pub fn raw_len(&self) -> usize {
        match self {
            Element::Separator => 1,
            Element::Segment(segment) => segment.raw().len() + segment.semicolon_content().len(),
        }
    }

    /// Appends this element's raw source span to `out`.
    pub(crate) fn write_raw(&self, out: &mut String) {
        match self {
            Element::Separator => out.push(SEPARATOR),
            Element::Segment(segment) => {
                out.push_str(segment.raw());
                out.push_str(segment.semicolon_content());
            }
        }
    }
}

/// A decoded path segment plus its raw source text and matrix parameters.
///
/// The raw text and the semicolon content are kept verbatim so that any
/// sub-range of a path can be reconstructed character-for-character without
/// re-parsing.
///
/// # Examples
///
/// ```
/// use urlpath::{Element, PathContainer};
///
/// let path = PathContainer::parse("/cars;color=red,blue").unwrap();
/// let Element::Segment(segment) = &path.elements()[1] else {
///     unreachable!()
/// };
///
/// assert_eq!(segment.value(), "cars");
/// assert_eq!(segment.raw(), "cars");
/// assert_eq!(segment.semicolon_content(), ";color=red,blue");
/// assert_eq!(segment.parameters()[0].name(), "color");
/// assert_eq!(segment.parameters()[0].values(), ["red", "blue"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    raw: String,
    value: String,
    semicolon_content: String,
    parameters: Vec<PathParameter>,
}

impl PathSegment {
    pub(crate) fn new(
        raw: String,
        value: String,
        semicolon_content: String,
        parameters: Vec<PathParameter>,
    ) -> Self {
        Self {
            raw,
            value,
            semicolon_content,
            parameters,
        }
    }

    /// The raw (possibly percent-encoded) source text, excluding semicolon
    /// content.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The percent-decoded value visible to routing logic.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The raw `;name=value;...` suffix attached to this segment, or the
    /// empty string when the segment carries no parameters.
    pub fn semicolon_content(&self) -> &str {
        &self.semicolon_content
    }

    /// Matrix parameters in encounter order.
    pub fn parameters(&self) -> &[PathParameter] {
        &self.parameters
    }

    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&PathParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }
}

/// A named matrix parameter with one or more raw values.
///
/// Repeated parameter names within one segment accumulate values in
/// encounter order, so `;y=2;y=3` yields a single parameter `y` with the
/// values `["2", "3"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathParameter {
    name: String,
    values: Vec<String>,
}

impl PathParameter {
    pub(crate) fn new(name: String, values: Vec<String>) -> Self {
        Self { name, values }
    }

    pub(crate) fn push_values(&mut self, values: Vec<String>) {
        self.values.extend(values);
    }

    /// The parameter name, as it appeared in the raw path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw values for this name, in encounter order. A parameter
    /// written without `=value` holds the single empty value `""`.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
