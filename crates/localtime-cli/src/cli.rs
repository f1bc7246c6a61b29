//! Command argument structures and handlers.
//!
//! Argument structs carry the clap derives; the [`Cli`] handler consumes core
//! types only, so the formatting contract stays independent of the CLI
//! framework. One [`FormatterHandle`] is constructed per invocation and
//! shared read-only by all work.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use localtime_core::{localize_html, DocumentStats, FormatterHandle};
use log::info;
use serde::Serialize;

/// Format a single UTC timestamp
///
/// The never-fail contract of the formatter is observable from the shell:
/// unparseable input prints the input back and exits zero.
#[derive(Args)]
pub struct FormatArgs {
    /// ISO-8601 timestamp with an explicit UTC offset, e.g.
    /// 2024-02-11T15:30:45+00:00
    pub timestamp: String,
}

/// Localize marked timestamps in built HTML files
///
/// Each path is an HTML file or a directory searched recursively for
/// .html/.htm files. Eligible `<time>` elements are rewritten in place.
#[derive(Args)]
pub struct ApplyArgs {
    /// HTML files or directories to rewrite
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Emit a machine-readable JSON report instead of the human summary
    #[arg(long)]
    pub json: bool,
}

/// Per-file entry of the apply report.
#[derive(Serialize)]
struct FileReport {
    path: PathBuf,
    #[serde(flatten)]
    stats: DocumentStats,
    written: bool,
}

/// Command handlers sharing one formatter handle per invocation.
pub struct Cli {
    handle: FormatterHandle,
}

impl Cli {
    pub fn new(handle: FormatterHandle) -> Self {
        Self { handle }
    }

    /// Print the rendering of one timestamp.
    pub fn format(&self, args: &FormatArgs) {
        println!("{}", self.handle.format(&args.timestamp));
    }

    /// Rewrite marked elements in every HTML file under the given paths.
    ///
    /// I/O failures are real errors with a non-zero exit; they are outside
    /// the formatting totality contract.
    pub fn apply(&self, args: &ApplyArgs) -> Result<()> {
        let mut reports = Vec::new();
        for path in &args.paths {
            for file in collect_html_files(path)? {
                reports.push(self.apply_file(&file, args.dry_run)?);
            }
        }
        if args.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                println!(
                    "{}: {} marked, {} localized, {} fallback{}",
                    report.path.display(),
                    report.stats.marked,
                    report.stats.localized,
                    report.stats.fallback,
                    if report.written { "" } else { " (not written)" },
                );
            }
            println!("{} file(s) processed", reports.len());
        }
        Ok(())
    }

    fn apply_file(&self, path: &Path, dry_run: bool) -> Result<FileReport> {
        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document = localize_html(&html, &self.handle);
        let written = !dry_run && document.stats.marked > 0;
        if written {
            fs::write(path, &document.html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        info!(
            "{}: localized {} of {} marked elements",
            path.display(),
            document.stats.localized,
            document.stats.marked,
        );
        Ok(FileReport {
            path: path.to_path_buf(),
            stats: document.stats,
            written,
        })
    }
}

/// Resolve one CLI path argument to the HTML files it covers.
fn collect_html_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        walk_dir(path)
    } else if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        bail!("No such file or directory: {}", path.display());
    }
}

fn walk_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory {}", dir.display()))?
            .path();
        if path.is_dir() {
            files.extend(walk_dir(&path)?);
        } else if is_html(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("html" | "htm")
    )
}
