//! Print the OpenAPI document as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use roster::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Write the roster OpenAPI document as JSON",
    version
)]
struct CliArgs {
    /// Destination file. Writes to stdout when omitted.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
    /// Emit compact rather than indented JSON.
    #[arg(long)]
    compact: bool,
}

fn write_document(mut sink: impl Write, compact: bool) -> io::Result<()> {
    let document = ApiDoc::openapi();
    if compact {
        serde_json::to_writer(&mut sink, &document)?;
    } else {
        serde_json::to_writer_pretty(&mut sink, &document)?;
    }
    sink.write_all(b"\n")?;
    sink.flush()
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    match args.output {
        Some(path) => write_document(BufWriter::new(File::create(path)?), args.compact),
        None => write_document(io::stdout().lock(), args.compact),
    }
}
