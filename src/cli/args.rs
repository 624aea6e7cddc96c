//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Generate skeletal docstrings for a Python script
#[derive(Parser, Debug)]
#[command(name = "docwriter")]
#[command(about = "Generate skeletal docstrings for a Python script")]
#[command(version)]
pub struct Args {
    /// The Python script to generate docstrings for
    pub input: PathBuf,

    /// The file to write the docstrings to
    pub output: PathBuf,

    /// Config file path (defaults to ./docwriter.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_defaults() {
        let args = Args::try_parse_from(["docwriter", "script.py", "docs.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("script.py"));
        assert_eq!(args.output, PathBuf::from("docs.txt"));
        assert_eq!(args.config, None);
        assert_eq!(args.format, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_with_options() {
        let args = Args::try_parse_from([
            "docwriter", "app.py", "app.json",
            "--config", "custom.toml",
            "--format", "json",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(args.input, PathBuf::from("app.py"));
        assert_eq!(args.output, PathBuf::from("app.json"));
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.format.as_deref(), Some("json"));
        assert!(args.verbose);
    }

    #[test]
    fn test_output_is_required() {
        let result = Args::try_parse_from(["docwriter", "script.py"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Args::try_parse_from(["docwriter", "a.py", "a.txt", "--format", "html"]);
        assert!(result.is_err());
    }
}
