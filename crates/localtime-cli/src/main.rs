//! Localtime CLI application.
//!
//! Command-line driver for the localtime timestamp localization library.
//! The observer context is assembled here, from the ambient environment
//! overridden by the global flags, and injected into the core.

mod args;
mod cli;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use localtime_core::{FormatterHandle, LocaleContext};
use log::info;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        locale,
        time_zone,
        command,
    } = Args::parse();

    let mut context = LocaleContext::system();
    if let Some(tag) = locale.as_deref() {
        context = context.with_locale(tag);
    }
    if let Some(zone) = time_zone.as_deref() {
        context = context.with_time_zone(zone);
    }
    let cli = Cli::new(FormatterHandle::new(&context));

    info!("Localtime started");

    match command {
        Format(format_args) => {
            cli.format(&format_args);
            Ok(())
        }
        Apply(apply_args) => cli.apply(&apply_args),
    }
}
