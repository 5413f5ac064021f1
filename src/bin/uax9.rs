//! `uax9` CLI: reorder logical text into visual display order, one line at
//! a time (spec §6).

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use uax9::error::{Error, Result};
use uax9::{get_display_bytes, ParagraphDirection};

/// Reorder bidirectional text into visual display order.
#[derive(Parser, Debug)]
#[command(name = "uax9", version, about)]
struct Cli {
    /// Text encoding of the input bytes.
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,

    /// Force the paragraph base direction instead of auto-detecting it
    /// (P2/P3).
    #[arg(short = 'b', long = "base-dir", value_parser = parse_base_dir)]
    base_dir: Option<ParagraphDirection>,

    /// Print per-character bidi types and levels to stderr.
    #[arg(short, long)]
    debug: bool,

    /// Lines to reorder. When omitted, lines are read from stdin.
    lines: Vec<String>,
}

fn parse_base_dir(raw: &str) -> std::result::Result<ParagraphDirection, String> {
    match raw {
        "L" | "l" => Ok(ParagraphDirection::Ltr),
        "R" | "r" => Ok(ParagraphDirection::Rtl),
        other => Err(format!("--base-dir must be L or R, got {other:?}")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("uax9: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.lines.is_empty() {
        let mut raw = Vec::new();
        io::stdin().lock().read_to_end(&mut raw)?;
        for line in split_lines(&raw) {
            emit(&mut out, line, &cli.encoding, cli.base_dir, cli.debug)?;
        }
    } else {
        for line in &cli.lines {
            emit(&mut out, line.as_bytes(), &cli.encoding, cli.base_dir, cli.debug)?;
        }
    }

    Ok(())
}

/// Split raw bytes on `\n`, preserving a trailing `\r` with its line (so
/// CRLF input round-trips) and dropping the final empty segment after a
/// trailing newline.
fn split_lines(raw: &[u8]) -> Vec<&[u8]> {
    if raw.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&[u8]> = raw.split(|&b| b == b'\n').collect();
    if lines.last() == Some(&&[][..]) {
        lines.pop();
    }
    lines
}

fn emit(
    out: &mut impl Write,
    line: &[u8],
    encoding: &str,
    base_dir: Option<ParagraphDirection>,
    debug: bool,
) -> Result<()> {
    let reordered = get_display_bytes(line, encoding, base_dir, debug)?;
    out.write_all(&reordered).map_err(Error::from)?;
    out.write_all(b"\n").map_err(Error::from)
}
