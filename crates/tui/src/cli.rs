//! Command-line argument parsing for chameleon-demo.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Reading the attribute file (see `chameleon_config::AttributeSet::from_path`).
//! - Terminal state management (see `runtime::terminal`).

use chameleon_config::ColorTheme;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for chameleon-demo.
#[derive(Debug, Parser)]
#[command(
    name = "chameleon-demo",
    about = "Sample screen for the Chameleon state container",
    version,
    after_help = "Keys:\n  c content  l loading  e empty  r error  n none  t theme  q quit\n\nExamples:\n  chameleon-demo\n  chameleon-demo --attrs attrs.json --items 0\n  chameleon-demo --theme dark --no-mouse\n"
)]
pub struct Cli {
    /// JSON file with chameleon attributes (e.g. {"emptyText": "Nothing here"})
    #[arg(long, env = "CHAMELEON_ATTRS")]
    pub attrs: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Number of sample items in the list
    #[arg(long, default_value_t = 30)]
    pub items: usize,

    /// Color theme (default, light, dark, high-contrast, monochrome)
    #[arg(long, default_value = "default")]
    pub theme: ColorTheme,
}
