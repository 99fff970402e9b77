//! `json-patch`: apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   json-patch [--atomic] [--unordered] [--strict-bounds] [--remove-falsy] [--compact] '<patch-array-json>'
//!
//! The document is read from stdin and the patched document is written to
//! stdout. Set `RUST_LOG=docpatch=trace` to log every applied operation.

use std::io::{self, Read, Write};

use clap::Parser;
use docpatch::json_cli::apply_json_patch;
use docpatch::json_patch::{ApplyPatchOptions, ArrayBounds, Equality, MemberRemoval};

#[derive(Parser, Debug)]
#[command(name = "json-patch")]
#[command(about = "Apply a JSON Patch to the document read from stdin", long_about = None)]
struct Args {
    /// Patch operations as a JSON array
    patch: String,

    /// Leave the document untouched unless every operation succeeds
    #[arg(long)]
    atomic: bool,

    /// Compare objects in `test` without regard to key order
    #[arg(long)]
    unordered: bool,

    /// Reject removal at an index equal to the array length
    #[arg(long)]
    strict_bounds: bool,

    /// Allow removing members that hold `null`, `false`, `0` or `""`
    #[arg(long)]
    remove_falsy: bool,

    /// Print the result on a single line
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn options(&self) -> ApplyPatchOptions {
        ApplyPatchOptions {
            atomic: self.atomic,
            equality: if self.unordered {
                Equality::Unordered
            } else {
                Equality::Positional
            },
            array_bounds: if self.strict_bounds {
                ArrayBounds::Strict
            } else {
                ArrayBounds::Lenient
            },
            member_removal: if self.remove_falsy {
                MemberRemoval::Present
            } else {
                MemberRemoval::Truthy
            },
        }
    }
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

    let result = apply_json_patch(buf.trim(), &args.patch, &args.options(), !args.compact)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(result.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
