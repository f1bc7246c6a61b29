//! Display-surface driver: rewrites marked `<time>` elements in built HTML.
//!
//! The wire contract with the build step is a pair of attributes: an element
//! is eligible iff it is a `<time>` element carrying `data-local="true"` and
//! a non-empty `datetime` attribute holding an ISO-8601 UTC string. Anything
//! else is left byte-identical.
//!
//! For every eligible element the visible text is replaced with the localized
//! rendering; when rendering falls through the producer's pre-rendered UTC
//! text stays in place. Either way the element's `title` attribute is set to
//! the original UTC string suffixed with ` (UTC)`, so the source of truth
//! stays one hover away.
//!
//! Scanning is regex-based over the generator's own template output, not
//! arbitrary web HTML. Elements are independent and order-insensitive; the
//! handle is shared read-only state.

use std::sync::OnceLock;

use log::debug;
use regex::{Captures, NoExpand, Regex};
use serde::Serialize;

use crate::formatter::FormatterHandle;

/// Counters for one rewritten document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Elements carrying the marker and a non-empty timestamp attribute
    pub marked: usize,
    /// Marked elements whose visible text was replaced
    pub localized: usize,
    /// Marked elements left with their pre-rendered text
    pub fallback: usize,
}

/// A rewritten document plus its counters.
#[derive(Debug, Clone)]
pub struct LocalizedDocument {
    pub html: String,
    pub stats: DocumentStats,
}

/// Rewrite every eligible `<time>` element in `html`.
pub fn localize_html(html: &str, handle: &FormatterHandle) -> LocalizedDocument {
    let mut stats = DocumentStats::default();
    let rewritten = time_element_re()
        .replace_all(html, |caps: &Captures| rewrite_element(caps, handle, &mut stats));
    debug!(
        "Localized {} of {} marked elements",
        stats.localized, stats.marked
    );
    LocalizedDocument {
        html: rewritten.into_owned(),
        stats,
    }
}

fn rewrite_element(caps: &Captures, handle: &FormatterHandle, stats: &mut DocumentStats) -> String {
    let attrs = &caps[1];
    let text = &caps[2];
    if !marker_re().is_match(attrs) {
        return caps[0].to_string();
    }
    let datetime = datetime_re()
        .captures(attrs)
        .map(|c| c[1].to_string())
        .unwrap_or_default();
    if datetime.is_empty() {
        // No timestamp to convert; the marker alone does not qualify.
        return caps[0].to_string();
    }
    stats.marked += 1;
    let attrs = set_title(attrs, &format!("{datetime} (UTC)"));
    match handle.try_format(&datetime) {
        Ok(localized) => {
            stats.localized += 1;
            format!("<time{attrs}>{}</time>", escape_text(&localized))
        }
        Err(_) => {
            stats.fallback += 1;
            format!("<time{attrs}>{text}</time>")
        }
    }
}

/// Set or replace the `title` attribute in an attribute list.
fn set_title(attrs: &str, title: &str) -> String {
    let replacement = format!(r#"title="{}""#, escape_attr(title));
    if title_re().is_match(attrs) {
        title_re()
            .replace(attrs, NoExpand(&replacement))
            .into_owned()
    } else {
        format!("{} {replacement}", attrs.trim_end())
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

fn time_element_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<time\b([^>]*)>(.*?)</time>").expect("static pattern compiles")
    })
}

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"data-local\s*=\s*"true""#).expect("static pattern compiles"))
}

fn datetime_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"datetime\s*=\s*"([^"]*)""#).expect("static pattern compiles"))
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"title\s*=\s*"[^"]*""#).expect("static pattern compiles"))
}
