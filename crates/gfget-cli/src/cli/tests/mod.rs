//! CLI parse and exit-code tests.

use super::{exit_code, Cli};
use clap::Parser;

mod exit;

pub(super) fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}
