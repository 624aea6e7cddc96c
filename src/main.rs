use std::process::ExitCode;

fn main() -> ExitCode {
    docwriter::cli::run()
}
