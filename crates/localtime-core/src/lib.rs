//! Core library for localtime, the timestamp localization tool.
//!
//! Static-site builds render post timestamps as UTC. This crate converts
//! those UTC instants into human-readable text in the observer's own time
//! zone and language, with a contract of total, never-failing operations:
//! whatever the input and whatever the host can or cannot do, the caller
//! always gets a displayable string back, worst case the original UTC text.
//!
//! # Architecture
//!
//! - **Locale context** ([`locale`]): the observer's language and zone,
//!   injected explicitly rather than read from process globals
//! - **Formatter** ([`formatter`]): an immutable handle built once per
//!   context and shared by all rendering calls
//! - **Surface driver** ([`surface`]): rewrites marked `<time>` elements in
//!   built HTML, falling back to the producer's pre-rendered text
//! - **Errors** ([`error`]): recoverable kinds reported by the fallible
//!   layer and absorbed by the total one
//!
//! # Quick Start
//!
//! ```rust
//! use localtime_core::{FormatterHandle, LocaleContext};
//!
//! let context = LocaleContext::new()
//!     .with_locale("en-US")
//!     .with_time_zone("America/New_York");
//! let handle = FormatterHandle::new(&context);
//!
//! assert_eq!(
//!     handle.format("2024-02-11T15:30:45+00:00"),
//!     "Feb 11, 2024, 10:30 AM EST",
//! );
//!
//! // Unparseable input is echoed back rather than failing.
//! assert_eq!(handle.format("not-a-date"), "not-a-date");
//! ```

pub mod error;
pub mod formatter;
pub mod locale;
pub mod surface;

// Re-export commonly used types
pub use error::{FormatError, Result};
pub use formatter::{format_local_date, Formatter, FormatterHandle};
pub use locale::LocaleContext;
pub use surface::{localize_html, DocumentStats, LocalizedDocument};
