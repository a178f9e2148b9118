//! # urlpath
//!
//! Hierarchical URL-path decomposition for server-side request routing.
//!
//! Turns a raw, percent-encoded HTTP request path into a structured,
//! queryable representation so that routing, filtering, and
//! template-matching logic can ask "which part of this path is the
//! deployment's mount prefix?" and "which part is application-relative?"
//! without re-parsing the raw string each time.
//!
//! ## Features
//!
//! - **Typed elements** - every `/` and every segment of the raw path is
//!   its own [`Element`], with raw-length fidelity (no collapsing of
//!   repeated separators)
//! - **Matrix parameters** - semicolon content like `;x=1;y=2;y=3` is
//!   parsed per segment, with repeated names accumulating in order
//! - **Strict percent-decoding** - malformed escapes fail the parse
//!   instead of silently producing a different segment
//! - **Mount-prefix splitting** - a full path splits into its prefix and
//!   remainder views by exact raw-offset alignment across elements,
//!   without rebuilding or re-decoding strings
//! - **Immutable containers** - parse once per request, share read-only
//!   across tasks, no locks
//!
//! ## Quick Start
//!
//! ```
//! use urlpath::RequestPath;
//!
//! let path = RequestPath::parse("/shop/items;color=red/42", Some("/shop")).unwrap();
//!
//! // The router matches patterns against the remainder.
//! assert_eq!(path.remainder().value(), "/items;color=red/42");
//!
//! // Application code can recover the mount point.
//! assert_eq!(path.prefix().value(), "/shop");
//!
//! // Segments expose decoded values and their matrix parameters.
//! let items = &path.remainder().elements()[1];
//! assert_eq!(items.value(), "items");
//! ```
//!
//! ## Error Handling
//!
//! Parsing and splitting either fully succeed or fail as a whole:
//! [`ParseError`] for malformed client input (map to a bad request) and
//! [`SplitError`] for a mount prefix that does not correspond to the path
//! (a deployment/config fault, map to a server-side failure). See
//! [`ParseError`], [`SplitError`], and [`PathError`] for the full
//! taxonomy.

mod container;
mod element;
mod error;
mod parse;
mod request;

pub use container::PathContainer;
pub use element::{Element, PathParameter, PathSegment, SEPARATOR};
pub use error::{ParseError, PathError, SplitError};
pub use parse::Encoding;
pub use request::RequestPath;
