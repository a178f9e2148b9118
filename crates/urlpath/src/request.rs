//! The request path: a full path split into its mount prefix and the
//! application-relative remainder.

use std::fmt;

use tracing::trace;

use crate::container::PathContainer;
use crate::element::{Element, SEPARATOR};
use crate::error::{PathError, SplitError};
use crate::parse::Encoding;

/// A full request path together with its mount-prefix and remainder views.
///
/// Routers match patterns against [`remainder`](Self::remainder);
/// application code may inspect [`prefix`](Self::prefix) to recover the
/// deployment's mount point. Both views are computed once at construction
/// by walking the full path's elements and never re-derived; a request
/// path is built fresh per inbound request (or per internal forward) and
/// is read-only afterwards.
///
/// The remainder's elements are exactly the full path's trailing elements
/// not consumed by the prefix, so
/// `prefix.value() + remainder.value() == full.value()` always holds.
///
/// # Examples
///
/// ```
/// use urlpath::RequestPath;
///
/// let path = RequestPath::parse("/shop/items/42", Some("/shop")).unwrap();
/// assert_eq!(path.prefix().value(), "/shop");
/// assert_eq!(path.remainder().value(), "/items/42");
///
/// // Without a configured mount prefix the remainder is the whole path.
/// let path = RequestPath::parse("/items/42", None).unwrap();
/// assert!(path.prefix().is_empty());
/// assert_eq!(path.remainder().value(), "/items/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath {
    full: PathContainer,
    prefix: PathContainer,
    remainder: PathContainer,
}

impl RequestPath {
    /// Parses a raw path (UTF-8) and splits it against the configured
    /// mount prefix.
    ///
    /// # Errors
    ///
    /// [`PathError::Parse`] when the raw path is malformed (a client
    /// fault), [`PathError::Split`] when the mount prefix does not
    /// correspond to the path (a configuration fault).
    pub fn parse(raw: &str, mount_prefix: Option<&str>) -> Result<Self, PathError> {
        Self::parse_with(raw, Encoding::Utf8, mount_prefix)
    }

    /// Parses with an explicit segment encoding, then splits.
    pub fn parse_with(
        raw: &str,
        encoding: Encoding,
        mount_prefix: Option<&str>,
    ) -> Result<Self, PathError> {
        let full = PathContainer::parse_with(raw, encoding)?;
        Ok(Self::from_container(full, mount_prefix)?)
    }

    /// Splits an already-parsed full path against a mount prefix.
    ///
    /// A prefix of `None`, `""`, or `"/"` is the common case: the prefix
    /// view is empty and the remainder is the full path, with no element
    /// scan at all.
    pub fn from_container(
        full: PathContainer,
        mount_prefix: Option<&str>,
    ) -> Result<Self, SplitError> {
        let prefix = init_mount_prefix(&full, mount_prefix)?;
        let remainder = full.sub_path(prefix.elements().len(), full.elements().len());

        trace!(
            full = full.value(),
            prefix = prefix.value(),
            remainder = remainder.value(),
            "split request path"
        );

        Ok(Self {
            full,
            prefix,
            remainder,
        })
    }

    /// Re-splits the same full path against a different mount prefix.
    ///
    /// Used by internal forwarding/dispatch, where the target application's
    /// mount point differs from the one the request originally hit.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlpath::RequestPath;
    ///
    /// let path = RequestPath::parse("/a/b/c", Some("/a")).unwrap();
    /// let forwarded = path.with_mount_prefix(Some("/a/b")).unwrap();
    ///
    /// assert_eq!(forwarded.prefix().value(), "/a/b");
    /// assert_eq!(forwarded.remainder().value(), "/c");
    /// ```
    pub fn with_mount_prefix(&self, mount_prefix: Option<&str>) -> Result<Self, SplitError> {
        Self::from_container(self.full.clone(), mount_prefix)
    }

    /// The raw value of the full path.
    pub fn value(&self) -> &str {
        self.full.value()
    }

    /// The element sequence of the full path.
    pub fn elements(&self) -> &[Element] {
        self.full.elements()
    }

    /// The full path container.
    pub fn full(&self) -> &PathContainer {
        &self.full
    }

    /// The mount-prefix portion; empty when no prefix is configured.
    pub fn prefix(&self) -> &PathContainer {
        &self.prefix
    }

    /// The application-relative portion the router matches against.
    pub fn remainder(&self) -> &PathContainer {
        &self.remainder
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RequestPath[full='{}', prefix='{}', remainder='{}']",
            self.full.value(),
            self.prefix.value(),
            self.remainder.value()
        )
    }
}

/// Computes the prefix sub-container for a configured mount prefix.
///
/// The prefix string is matched against *raw* characters, so the walk
/// accumulates each element's raw span length — a segment counts its
/// percent-encoded text plus its semicolon content, never its decoded
/// length. The first element boundary where the running count equals the
/// prefix length is the split point; a prefix that never lands on a
/// boundary cannot be split and is rejected outright.
fn init_mount_prefix(
    full: &PathContainer,
    mount_prefix: Option<&str>,
) -> Result<PathContainer, SplitError> {
    let prefix = match mount_prefix {
        None | Some("") | Some("/") => return Ok(PathContainer::empty()),
        Some(prefix) => prefix,
    };

    if !prefix.starts_with(SEPARATOR)
        || prefix.ends_with(SEPARATOR)
        || !full.value().starts_with(prefix)
    {
        return Err(SplitError::InvalidMountPrefix {
            prefix: prefix.to_string(),
            path: full.value().to_string(),
        });
    }

    let mut counter = 0;
    for (index, element) in full.elements().iter().enumerate() {
        counter += element.raw_len();
        if counter == prefix.len() {
            return Ok(full.sub_path(0, index + 1));
        }
        if counter > prefix.len() {
            // The prefix ends strictly inside this element's span.
            break;
        }
    }

    Err(SplitError::MisalignedMountPrefix {
        prefix: prefix.to_string(),
        path: full.value().to_string(),
    })
}
