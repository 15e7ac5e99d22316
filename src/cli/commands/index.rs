//! Index command - scan index pages and render the lookup index.

use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::config::{OutputFormat, Settings};
use crate::output;
use crate::pipeline::{IndexReport, build_index};
use crate::resolver::{read_list_file, resolve_entries};

/// Arguments for the index command.
#[derive(Debug, Default)]
pub struct IndexArgs {
    pub files: Vec<PathBuf>,
    pub list: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Determine the input files.
///
/// Files named on the command line are taken as they are. Otherwise the list
/// file is read and its entries resolved; missing entries are only warned about.
pub fn input_files(args: &IndexArgs, settings: &Settings) -> anyhow::Result<Vec<PathBuf>> {
    if !args.files.is_empty() {
        return Ok(args.files.clone());
    }

    let list_file = args.list.as_ref().unwrap_or(&settings.list_file);
    let entries = read_list_file(list_file)?;
    let resolved = resolve_entries(&entries)?;
    if !resolved.skipped.is_empty() {
        info!(
            "Skipped {} missing entr(ies) from {}",
            resolved.skipped.len(),
            list_file.display()
        );
    }
    Ok(resolved.files)
}

/// Run the index command.
///
/// Output is produced only after every input was indexed, so a failure never
/// leaves a truncated index behind.
pub fn run(args: IndexArgs, settings: &mut Settings) -> anyhow::Result<IndexReport> {
    if let Some(format) = args.format {
        settings.output.format = format;
    }

    let files = input_files(&args, settings)?;
    let report = build_index(&files, settings)?;
    let rendered = output::render_to_string(&report, &settings.output)
        .context("Failed to render index")?;

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write index to stdout")?;
        }
    }

    Ok(report)
}
