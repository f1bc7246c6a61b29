//! Error types for the localtime library.

use thiserror::Error;

/// Errors reported by the formatting layer.
///
/// Both kinds are recoverable: the total operations ([`FormatterHandle::format`]
/// and friends) absorb them and fall back to echoing the input string, so
/// neither ever surfaces to a caller as a panic. The fallible sibling
/// [`FormatterHandle::try_format`] exposes them so the surface driver can tell
/// *why* an element fell back.
///
/// [`FormatterHandle::format`]: crate::formatter::FormatterHandle::format
/// [`FormatterHandle::try_format`]: crate::formatter::FormatterHandle::try_format
#[derive(Error, Debug)]
pub enum FormatError {
    /// Locale-aware formatting capability is absent on this host
    #[error("no time zone could be resolved for locale-aware formatting")]
    Unavailable,
    /// Input string does not parse to an absolute instant
    #[error("not a parseable instant: {input:?}")]
    InvalidInstant { input: String },
}

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
