//! CLI for gfget: `gfget <family-name>`.

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::Parser;
use gfget_core::config;
use gfget_core::http::Fetcher;
use gfget_core::FontDownload;
use std::ffi::OsString;
use std::process::ExitCode;

/// Exit code for a wrong argument count.
pub const EXIT_USAGE: u8 = 1;

/// Download a font family from Google Fonts into a directory named after it.
#[derive(Debug, Parser)]
#[command(name = "gfget", version)]
#[command(about = "Download a Google Fonts family package", long_about = None)]
pub struct Cli {
    /// Font family name, e.g. "Open Sans". Output goes to ./<family>/.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub family: String,
}

impl Cli {
    /// Parses `std::env::args`. On failure the message is already printed and the
    /// returned code is what the process should exit with.
    pub fn parse_args() -> Result<Self, ExitCode> {
        Self::parse_args_from(std::env::args_os()).map_err(ExitCode::from)
    }

    /// Like [`Cli::parse_args`] over an explicit argument list, returning the
    /// raw exit code.
    pub fn parse_args_from<I, T>(args: I) -> Result<Self, u8>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| {
            let _ = err.print();
            let code = parse_exit_code(&err);
            if code == EXIT_USAGE {
                eprintln!("Please specify font family name as a single argument.");
            }
            code
        })
    }

    pub fn run(&self) -> Result<()> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut dl = FontDownload::new(self.family.as_str(), cfg.skip)
            .with_catalog_url(cfg.catalog_url)
            .with_fetcher(Fetcher::new(cfg.http.to_options()));
        dl.download()?;
        Ok(())
    }
}

/// 0 when clap only printed help or version, [`EXIT_USAGE`] otherwise.
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_USAGE,
    }
}

/// 2 for an upstream HTTP status, 1 for everything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<gfget_core::Error>() {
        Some(e) => e.exit_code() as u8,
        None => 1,
    }
}

#[cfg(test)]
mod tests;
