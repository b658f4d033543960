//! Command-line arguments.
//!
//! Zorki is interactive: the arguments only say where things live.

use std::path::PathBuf;

use clap::Parser;

/// Zorki — a self-observation journal.
#[derive(Debug, Parser)]
#[command(name = "zorki", version)]
pub struct Cli {
    /// Directory holding the journal. Overrides `data-dir` from the config.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Config file to read instead of `~/.zorki/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
