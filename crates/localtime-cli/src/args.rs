use clap::{Parser, Subcommand};

use crate::cli::{ApplyArgs, FormatArgs};

/// Main command-line interface for the localtime tool
///
/// Localtime rewrites the UTC timestamps a static-site build leaves in its
/// pages into the observer's local time zone and language. It exposes the
/// conversion both as a one-shot formatter for ad-hoc invocation and as a
/// driver that rewrites marked `<time>` elements across built HTML files.
#[derive(Parser)]
#[command(version, about, name = "lt")]
pub struct Args {
    /// BCP-47 locale tag overriding the ambient language preference
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// IANA time zone name overriding the ambient zone
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the localtime CLI
///
/// The CLI is organized into two commands:
/// - `format`: render a single UTC timestamp, for ad-hoc invocation
/// - `apply`: rewrite marked elements across built HTML files
#[derive(Subcommand)]
pub enum Commands {
    /// Format a single UTC timestamp
    #[command(alias = "f")]
    Format(FormatArgs),
    /// Localize marked timestamps in built HTML files
    #[command(alias = "a")]
    Apply(ApplyArgs),
}
