//! Rendering of the finished index.
//!
//! The Emacs Lisp form is what `javadoc-lookup` loads; JSON carries the same
//! data for other tools.

use serde::Serialize;
use std::io::{self, Write};
use std::path::MAIN_SEPARATOR;

use crate::config::{OutputConfig, OutputFormat};
use crate::pipeline::IndexReport;

/// Render `report` in the configured format.
pub fn render<W: Write>(report: &IndexReport, config: &OutputConfig, out: &mut W) -> io::Result<()> {
    match config.format {
        OutputFormat::Elisp => render_elisp(report, config, out),
        OutputFormat::Json => render_json(report, out),
    }
}

/// Render into a string.
pub fn render_to_string(report: &IndexReport, config: &OutputConfig) -> io::Result<String> {
    let mut buffer = Vec::new();
    render(report, config, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}

pub fn render_elisp<W: Write>(
    report: &IndexReport,
    config: &OutputConfig,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, ";; For use by Emacs function javadoc-lookup.")?;
    writeln!(out, ";; Created by javadoc-index.")?;
    writeln!(out, ";; arguments: {}", report.inputs.join(" "))?;
    writeln!(out, "(setq {} '(", config.refs_variable)?;
    for (symbol, references) in report.symbols.descending() {
        write!(out, " ({}", quote(symbol))?;
        for reference in references {
            write!(out, " \"{reference}\"")?;
        }
        writeln!(out, ")")?;
    }
    writeln!(out, "))")?;

    writeln!(out)?;
    writeln!(out, "(setq {} (list", config.prefixes_variable)?;
    for prefix in &report.ignored_prefixes {
        writeln!(
            out,
            "  (concat \"^\" (regexp-quote \"{prefix}{MAIN_SEPARATOR}\"))"
        )?;
    }
    writeln!(out, "))")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonIndex<'a> {
    inputs: &'a [String],
    symbols: Vec<JsonSymbol<'a>>,
    ignored_prefixes: &'a [String],
}

#[derive(Serialize)]
struct JsonSymbol<'a> {
    symbol: &'a str,
    references: Vec<&'a str>,
}

pub fn render_json<W: Write>(report: &IndexReport, out: &mut W) -> io::Result<()> {
    let index = JsonIndex {
        inputs: &report.inputs,
        symbols: report
            .symbols
            .descending()
            .map(|(symbol, references)| JsonSymbol {
                symbol,
                references: references.collect(),
            })
            .collect(),
        ignored_prefixes: &report.ignored_prefixes,
    };
    serde_json::to_writer_pretty(&mut *out, &index)?;
    writeln!(out)
}
