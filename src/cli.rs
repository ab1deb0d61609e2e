//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "update-codes",
    version,
    about = "Regenerate the ISO 3166-1 country code table from the clipboard.",
    after_help = "Copy the body of the \"Officially assigned code elements\" table from \
https://en.wikipedia.org/wiki/ISO_3166-1 (no header row), then run without arguments.\n\
Each row must hold name, alpha-2, alpha-3 and numeric cells separated by two or more spaces.\n\
The lines between '// Begin' and '// End' in the target file are replaced."
)]
pub struct Cli {
    /// The source file holding the '// Begin' / '// End' markers. [default: src/codes.rs]
    #[arg(short, long, value_name = "TARGET_PATH")]
    pub file: Option<PathBuf>,

    /// Read the table from a file instead of the clipboard. Use '-' to read from stdin.
    #[arg(short, long, value_name = "TABLE_PATH")]
    pub input: Option<PathBuf>,

    /// Write the output to a new file instead of modifying the target.
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Print the regenerated file without writing anything.
    #[arg(long, conflicts_with_all = ["diff", "output"])]
    pub dry_run: bool,

    /// Show a diff of the pending changes instead of writing files.
    #[arg(long, conflicts_with = "output")]
    pub diff: bool,

    /// Reject rows whose codes are not well-formed ISO 3166-1 values.
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Accept cells verbatim, even when the config file enables strict mode.
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "CONFIG_PATH")]
    pub config: Option<PathBuf>,
}
