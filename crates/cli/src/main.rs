use clap::Parser;
use lexstat_cli::args::Args;
use lexstat_cli::config::AppConfig;
use lexstat_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let config = match AppConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Input Error: failed to read stdin: {e}");
            return ExitCode::FAILURE;
        }
    };

    match lexstat_engine::run(&config.engine) {
        Ok(result) => {
            for (source, err) in &result.errors {
                eprintln!("Error processing {source}: {err}");
            }

            if let Err(e) = presentation::write_results(&result.reports, &config.output) {
                eprintln!("Output Error: {e}");
                return ExitCode::FAILURE;
            }

            if result.errors.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
