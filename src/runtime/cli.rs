use std::path::PathBuf;

use clap::Parser;

use crate::app::Page;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "souvenir", version, about)]
pub struct Cli {
    /// Page shown on start.
    #[arg(long, value_enum, default_value_t = Page::Album)]
    pub page: Page,

    /// Config file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,
}
