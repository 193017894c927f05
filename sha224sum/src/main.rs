use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use rusty_sha224::Sha224Digest;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// files to hash, `-` or no files at all reads stdin
    files: Vec<PathBuf>,

    /// hex encoded digest the single input is expected to have
    ///
    /// exits with an error if the computed digest differs
    #[arg(short, long)]
    check: Option<String>,

    /// log more, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// No files on the command line means stdin
fn inputs(files: Vec<PathBuf>) -> Vec<PathBuf> {
    if files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        files
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Read a whole input into memory, `-` is stdin
fn read_input(path: &Path) -> Result<Vec<u8>> {
    if is_stdin(path) {
        let mut data = vec![];
        io::stdin()
            .read_to_end(&mut data)
            .context("Reading input data from stdin.")?;
        Ok(data)
    } else {
        fs::read(path).with_context(|| format!("Reading from {path:?} to get input data."))
    }
}

/// Parse the `--check` argument, which only makes sense for a single input
fn expected_digest(check: Option<&str>, input_count: usize) -> Result<Option<Sha224Digest>> {
    let Some(hex) = check else {
        return Ok(None);
    };
    ensure!(
        input_count == 1,
        "--check needs exactly one input, got {input_count}."
    );
    let digest = hex
        .trim()
        .parse()
        .with_context(|| format!("Parsing {hex:?} as a SHA-224 digest."))?;
    Ok(Some(digest))
}

/// A lone input prints the bare digest, several get `digest  path` lines
fn output_line(digest: &Sha224Digest, path: &Path, input_count: usize) -> String {
    if input_count == 1 {
        format!("{digest}")
    } else {
        format!("{digest}  {}", path.display())
    }
}

fn verify(path: &Path, digest: Sha224Digest, expected: Option<Sha224Digest>) -> Result<()> {
    if let Some(expected) = expected {
        if digest != expected {
            bail!("Digest mismatch for {path:?}: expected {expected}, got {digest}.");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let files = inputs(args.files);
    let expected = expected_digest(args.check.as_deref(), files.len())?;

    let mut out = io::stdout().lock();
    for path in &files {
        let data = read_input(path)?;
        info!(path = %path.display(), len = data.len(), "hashing");

        let digest = rusty_sha224::hash(&data);
        debug!(path = %path.display(), %digest, "hashed");

        writeln!(out, "{}", output_line(&digest, path, files.len()))?;
        verify(path, digest, expected)?;
    }

    Ok(())
}
