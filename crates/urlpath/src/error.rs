//! Error taxonomy for parsing and splitting.
//!
//! Two classes of fault exist, and they surface at different layers of a
//! server:
//!
//! - [`ParseError`]: the raw path itself is malformed. The client sent it,
//!   so HTTP layers should map this to a bad-request response.
//! - [`SplitError`]: the configured mount prefix does not correspond to the
//!   request path. This is a deployment/config mismatch the client cannot
//!   fix, so it should surface as a server-side failure.
//!
//! All faults are returned synchronously at the call that triggered them;
//! none are swallowed or retried. Out-of-range sub-path indices are a
//! programming error internal to the core and panic instead of appearing
//! here.

use thiserror::Error;

use crate::parse::Encoding;

/// A raw path failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `%` was not followed by two hexadecimal digits.
    #[error("malformed percent-encoding in segment {segment:?} at offset {offset}")]
    MalformedEscape {
        /// The raw segment text containing the bad escape.
        segment: String,
        /// Byte offset of the `%` within the segment.
        offset: usize,
    },

    /// The percent-decoded bytes are not valid in the declared encoding.
    #[error("percent-decoded segment {segment:?} is not valid {encoding}")]
    InvalidEncodedData {
        /// The raw segment text that decoded to invalid bytes.
        segment: String,
        /// The encoding the bytes were decoded with.
        encoding: Encoding,
    },
}

/// A full path could not be split against a configured mount prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The mount prefix is structurally invalid for this path: it must
    /// start with `/`, must not end with `/`, and must be a literal prefix
    /// of the raw path value.
    #[error("invalid mount prefix {prefix:?} for path {path:?}")]
    InvalidMountPrefix { prefix: String, path: String },

    /// The mount prefix is a literal prefix of the raw path but its end
    /// falls strictly inside an element's span, so no element-aligned split
    /// exists. No best-effort split is attempted.
    #[error("mount prefix {prefix:?} does not end on an element boundary of path {path:?}")]
    MisalignedMountPrefix { prefix: String, path: String },
}

/// Umbrella error for operations that both parse and split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Split(#[from] SplitError),
}
