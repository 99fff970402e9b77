//! `json-pointer`: look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer '<pointer>'
//!
//! The document is read from stdin. The addressed value is printed as JSON.

use std::io::{self, Read, Write};

use clap::Parser;
use docpatch::json_cli::lookup_pointer;

#[derive(Parser, Debug)]
#[command(name = "json-pointer")]
#[command(about = "Print the value a JSON Pointer addresses in the document read from stdin", long_about = None)]
struct Args {
    /// Pointer such as `/foo/0`; the empty string addresses the whole document
    pointer: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;

    let result = lookup_pointer(buf.trim(), &args.pointer)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(result.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
