//! pagekit CLI.

use std::process::ExitCode;

use clap::Parser;
use pagekit_cli::cli::{Cli, Command};
use pagekit_cli::commands::{Severity, run_lint, run_plan};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Plan(args) => match run_plan(&args).await {
            Ok(output) => {
                println!("{}", output.trim_end());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Lint(args) => match run_lint(&args.config) {
            Ok(issues) => {
                for issue in &issues {
                    println!("{}", issue);
                }
                let errors = issues
                    .iter()
                    .filter(|i| i.severity == Severity::Error)
                    .count();
                println!("{} issue(s), {} error(s)", issues.len(), errors);
                if errors > 0 {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
