use std::process::ExitCode;

use clap::Parser;

use theater_cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    theater_observability::init(args.log_format.into());

    match theater_cli::run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "statement failed");
            ExitCode::FAILURE
        }
    }
}
