//! Locale-aware rendering of UTC instants.
//!
//! This module provides the [`FormatterHandle`] type: a reusable, immutable
//! formatting capability built once from a [`LocaleContext`] and shared by
//! every rendering call. Construction resolves the observer's time zone and
//! selects a layout from the language preference; rendering parses an
//! ISO-8601 string into an absolute instant and writes it out in the
//! observer's zone.
//!
//! # Degrade-to-source-of-truth
//!
//! The total operations never fail: any unparseable input, absent formatting
//! capability, or host formatting error degrades to echoing the input string.
//! The UTC string produced by the site build is always correct, so falling
//! back to it is always safe.

use std::sync::OnceLock;

use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use log::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::error::{FormatError, Result};
use crate::locale::LocaleContext;

/// `Feb 11, 2024, 10:30 AM EST`
const MONTH_FIRST_12H: &str = "%b %-d, %Y, %-I:%M %p %Z";
/// `11 Feb 2024 15:30 GMT`
const DAY_FIRST_24H: &str = "%d %b %Y %R %Z";
/// `2024/02/12 00:30 JST`
const YMD_24H: &str = "%Y/%m/%d %H:%M %Z";
/// `2024-02-11 15:30 UTC`
const ISO_24H: &str = "%Y-%m-%d %H:%M %Z";

/// English-speaking regions that write dates day-first on a 24-hour clock.
const DAY_FIRST_EN_REGIONS: &[&str] = &["GB", "IE", "AU", "NZ", "IN", "ZA"];

/// An immutable, reusable formatter: a resolved time zone plus a
/// language-selected layout.
///
/// Constructed only through [`FormatterHandle::new`]. Month and meridiem
/// tokens render with jiff's built-in names; the language preference decides
/// field order and clock convention.
#[derive(Debug, Clone)]
pub struct Formatter {
    time_zone: TimeZone,
    layout: &'static str,
}

impl Formatter {
    fn render(&self, instant: Timestamp) -> Result<String> {
        let zoned = instant.to_zoned(self.time_zone.clone());
        strtime::format(self.layout, &zoned).map_err(|err| {
            warn!("Formatting {instant} failed: {err}");
            FormatError::Unavailable
        })
    }
}

/// A constructed formatting capability, or the signal that none is available
/// on this host.
///
/// `Unavailable` is a public variant so capability absence can be simulated
/// by callers and tests; it arises naturally only when no time zone at all
/// can be resolved. The handle is immutable after construction and safe to
/// share across concurrent callers.
#[derive(Debug, Clone)]
pub enum FormatterHandle {
    Ready(Formatter),
    Unavailable,
}

impl FormatterHandle {
    /// Build a formatter for the given observer context. Never fails.
    ///
    /// An explicit zone name that does not resolve falls back to the ambient
    /// system zone; if no zone can be resolved at all the handle is
    /// [`Unavailable`](Self::Unavailable) and every rendering call degrades
    /// to echoing its input.
    pub fn new(context: &LocaleContext) -> Self {
        let time_zone = match resolve_time_zone(context) {
            Ok(tz) => tz,
            Err(_) => return Self::Unavailable,
        };
        let layout = select_layout(context.language());
        debug!(
            "Formatter ready: zone {}, layout {layout:?}",
            time_zone.iana_name().unwrap_or("fixed-offset"),
        );
        Self::Ready(Formatter { time_zone, layout })
    }

    /// Render an ISO-8601 UTC string, reporting why rendering fell through.
    ///
    /// Used by the surface driver to distinguish a localized element from a
    /// fallback one. The error is diagnostic only; both kinds are absorbed
    /// by [`format`](Self::format).
    pub fn try_format(&self, iso: &str) -> Result<String> {
        let Self::Ready(formatter) = self else {
            return Err(FormatError::Unavailable);
        };
        let instant: Timestamp = iso.parse().map_err(|err| {
            warn!("Skipping unparseable timestamp {iso:?}: {err}");
            FormatError::InvalidInstant {
                input: iso.to_string(),
            }
        })?;
        formatter.render(instant)
    }

    /// Render an ISO-8601 UTC string, degrading to the input on any failure.
    ///
    /// Total: for every input string and every handle state this returns a
    /// displayable string and never panics. The result is empty only when
    /// the input was empty.
    pub fn format(&self, iso: &str) -> String {
        match self.try_format(iso) {
            Ok(formatted) => formatted,
            Err(_) => iso.to_string(),
        }
    }
}

/// Format one ISO-8601 UTC string against the ambient environment.
///
/// Manual entry point for ad-hoc invocation. The handle is built once per
/// process from [`LocaleContext::system`] and reused across calls; the cache
/// is an optimization only, a fresh handle yields identical output for a
/// fixed context.
pub fn format_local_date(iso: &str) -> String {
    static SYSTEM_HANDLE: OnceLock<FormatterHandle> = OnceLock::new();
    SYSTEM_HANDLE
        .get_or_init(|| FormatterHandle::new(&LocaleContext::system()))
        .format(iso)
}

fn resolve_time_zone(context: &LocaleContext) -> Result<TimeZone> {
    if let Some(name) = context.time_zone() {
        match TimeZone::get(name) {
            Ok(tz) => return Ok(tz),
            Err(err) => {
                warn!("Unknown time zone {name:?}, falling back to the system zone: {err}");
            }
        }
    }
    TimeZone::try_system().map_err(|err| {
        warn!("Locale-aware formatting is unavailable, no time zone could be resolved: {err}");
        FormatError::Unavailable
    })
}

fn select_layout(language: Option<&LanguageIdentifier>) -> &'static str {
    let Some(language) = language else {
        return MONTH_FIRST_12H;
    };
    let region = language.region.as_ref().map(|r| r.as_str());
    match language.language.as_str() {
        "en" => {
            if region.is_some_and(|r| DAY_FIRST_EN_REGIONS.contains(&r)) {
                DAY_FIRST_24H
            } else {
                MONTH_FIRST_12H
            }
        }
        "de" | "fr" | "es" | "it" | "pt" | "nl" => DAY_FIRST_24H,
        "ja" | "zh" | "ko" => YMD_24H,
        _ => ISO_24H,
    }
}
