//! Observer locale context.
//!
//! The formatting layer never reads language or time zone preferences from
//! process globals. Everything ambient is gathered into a [`LocaleContext`]
//! up front and injected into formatter construction, which keeps the
//! formatter pure and testable without a real host environment.

use log::warn;
use unic_langid::LanguageIdentifier;

/// The observer's language preference and time zone.
///
/// Both fields are optional. An absent language selects the default layout;
/// an absent zone defers to the ambient system zone at formatter
/// construction. The context is never mutated after it is handed to
/// [`FormatterHandle::new`].
///
/// [`FormatterHandle::new`]: crate::formatter::FormatterHandle::new
#[derive(Debug, Clone, Default)]
pub struct LocaleContext {
    language: Option<LanguageIdentifier>,
    time_zone: Option<String>,
}

impl LocaleContext {
    /// Create an empty context: ambient zone, default language.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred language from a BCP-47 tag (e.g. `en-US`).
    ///
    /// An unparseable tag is logged and ignored; absence of a preference is
    /// valid and selects the default layout.
    #[must_use]
    pub fn with_locale(mut self, tag: &str) -> Self {
        match tag.parse::<LanguageIdentifier>() {
            Ok(language) => self.language = Some(language),
            Err(err) => warn!("Ignoring unparseable locale tag {tag:?}: {err}"),
        }
        self
    }

    /// Set the time zone by IANA name (e.g. `America/New_York`).
    #[must_use]
    pub fn with_time_zone(mut self, name: &str) -> Self {
        self.time_zone = Some(name.to_string());
        self
    }

    /// Build a context from the runtime environment.
    ///
    /// The language tag comes from the host locale settings; the zone is
    /// left ambient. A host without a readable locale is valid.
    pub fn system() -> Self {
        match sys_locale::get_locale() {
            Some(tag) => Self::new().with_locale(&tag),
            None => Self::new(),
        }
    }

    pub(crate) fn language(&self) -> Option<&LanguageIdentifier> {
        self.language.as_ref()
    }

    pub(crate) fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}
