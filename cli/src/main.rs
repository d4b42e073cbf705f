mod args;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use args::Cli;
use commands::CommandError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logging: {}", e);
    }

    let config = match commands::build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match commands::execute(&cli.command, &config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let CommandError::GroupsFailed { report, .. } = &e {
                println!("{}", report);
            }
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
