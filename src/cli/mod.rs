//! CLI module for docwriter

mod args;

pub use args::Args;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::generator::DocGenerator;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn execute(args: Args) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new("docwriter.toml")),
    };
    cfg.merge_cli(args.format.clone());

    validate_paths(&cfg, &args.input, &args.output)?;

    debug!(
        input = %args.input.display(),
        output = %args.output.display(),
        format = ?cfg.output.format,
        "generating docstrings"
    );

    let mut generator = DocGenerator::new(&cfg)?;
    let text = generator.generate_file(&args.input)?;
    std::fs::write(&args.output, text)?;

    info!(output = %args.output.display(), "docstrings written");
    Ok(())
}

/// Check extensions and input presence before any work is done
fn validate_paths(cfg: &Config, input: &Path, output: &Path) -> Result<()> {
    if !cfg.accepts_input(input) {
        let expected = cfg
            .input
            .extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(Error::invalid_extension(input, expected));
    }

    if !cfg.accepts_output(output) {
        return Err(Error::invalid_extension(
            output,
            format!(".{}", cfg.output.format.extension()),
        ));
    }

    if !input.exists() {
        return Err(Error::PathNotFound(input.to_path_buf()));
    }

    Ok(())
}
