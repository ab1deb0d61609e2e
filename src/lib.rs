//! Regenerates the ISO 3166-1 country code table of a Rust source file.
//!
//! The table text (normally pasted from Wikipedia into the clipboard) is split
//! into rows, each row is rendered as a `codes.push(CountryCode { .. });`
//! literal, and the result replaces the region between the `// Begin` and
//! `// End` markers of the target file.

pub mod cli;
pub mod config;
pub mod error;
pub mod record;
pub mod source;
pub mod splicer;
pub mod table;

use crate::cli::Cli;
use crate::config::Config;
use crate::record::render_block;
use crate::source::{FileSource, TableSource};
use crate::splicer::splice;
use crate::table::parse_table;
use anyhow::Context;
use clap::Parser;
use similar::TextDiff;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder as TempFileBuilder;

/// Message printed once the target file has been rewritten.
pub const SUCCESS_MESSAGE: &str = "Updated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Write,
    DryRun,
    Diff,
}

/// The result of regenerating a target file in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regenerated {
    pub content: String,
    pub records: usize,
}

/// Reads the table from `source` and splices the rendered records into
/// `original`. Nothing is written; every failure happens here, before output.
pub fn regenerate(
    source: &mut dyn TableSource,
    original: &str,
    strict: bool,
) -> anyhow::Result<Regenerated> {
    let table = source.read_table()?;

    let records = parse_table(&table, strict)
        .with_context(|| format!("Failed to parse the table read from {}", source.describe()))?;
    log::info!(
        "Parsed {} country code(s) from {}",
        records.len(),
        source.describe()
    );

    let block = render_block(&records);
    let content = splice(original, &block)?;

    Ok(Regenerated {
        content,
        records: records.len(),
    })
}

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let Cli {
        file,
        input,
        output,
        dry_run,
        diff,
        strict,
        no_strict,
        config,
    } = Cli::parse();

    let config = match config {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            Config::load(&path)?
        }
        None => Config::default(),
    };

    let target = file.unwrap_or_else(|| config.target());
    let strict = if no_strict {
        false
    } else {
        strict || config.strict.unwrap_or(false)
    };
    let mode = if dry_run {
        OutputMode::DryRun
    } else if diff {
        OutputMode::Diff
    } else {
        OutputMode::Write
    };

    let mut source: Box<dyn TableSource> = match input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(config.clipboard_source()),
    };

    let original = fs::read_to_string(&target)
        .with_context(|| format!("Failed to read target file: {}", target.display()))?;

    let regenerated = regenerate(source.as_mut(), &original, strict)
        .with_context(|| format!("Failed to regenerate {}", target.display()))?;

    if regenerated.content == original {
        log::warn!(
            "Generated table is identical to the current contents of {}",
            target.display()
        );
    }

    finalize_output(mode, output.as_ref(), &target, &original, &regenerated.content)?;

    if mode == OutputMode::Write {
        log::info!(
            "Wrote {} country code(s) to {}",
            regenerated.records,
            output.as_ref().unwrap_or(&target).display()
        );
        println!("{SUCCESS_MESSAGE}");
    }

    Ok(())
}

fn finalize_output(
    mode: OutputMode,
    output_path: Option<&PathBuf>,
    target_path: &Path,
    original_content: &str,
    rendered_content: &str,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::DryRun => {
            io::stdout().write_all(rendered_content.as_bytes())?;
        }
        OutputMode::Diff => {
            let diff_output = TextDiff::from_lines(original_content, rendered_content)
                .unified_diff()
                .header("original", "modified")
                .to_string();

            io::stdout().write_all(diff_output.as_bytes())?;
        }
        OutputMode::Write => {
            write_atomically(output_path.map_or(target_path, PathBuf::as_path), rendered_content)?;
        }
    }

    Ok(())
}

/// Writes `content` to a temporary file next to `path`, then moves it into
/// place so a failed run never leaves a half-written file behind.
///
/// A path that does not exist yet is written directly. An existing path is
/// resolved first, so a symlinked target keeps its link and the file it
/// points to is replaced.
fn write_atomically(path: &Path, content: &str) -> anyhow::Result<()> {
    if !path.exists() {
        fs::write(path, content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        return Ok(());
    }

    let path = fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path {}", path.display()))?;
    let path = path.as_path();

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = TempFileBuilder::new()
        .prefix(".update-codes-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .with_context(|| {
            format!(
                "Failed to create temporary file in {}",
                parent_dir.display()
            )
        })?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write to temporary file")?;

    // Keep the permissions of the file being replaced.
    let permissions = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?
        .permissions();
    temp_file
        .as_file()
        .set_permissions(permissions)
        .with_context(|| format!("Failed to copy permissions of {}", path.display()))?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to replace file {}", path.display()))?;

    Ok(())
}
