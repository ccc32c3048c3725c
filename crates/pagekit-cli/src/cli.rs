//! Command-line argument definitions.

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pagekit_core::DeviceClass;

#[derive(Parser)]
#[command(
    name = "pagekit-cli",
    version,
    about = "Preview and lint pagekit site configurations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the composition plan of one page for one device
    Plan(PlanArgs),
    /// Check a site configuration for common mistakes
    Lint(LintArgs),
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Site configuration file (JSON)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Page key (defaults to the home page)
    #[arg(long, default_value = "")]
    pub page: String,

    /// Device class to compose for
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(["mobile", "desktop"])
            .try_map(|s| s.parse::<DeviceClass>()),
    )]
    pub device: DeviceClass,

    /// Tab to select before printing panel states
    #[arg(long)]
    pub select: Option<usize>,

    /// Simulated eligibility outcome for protected pages
    #[arg(long, value_enum, default_value = "satisfied")]
    pub gate: GateOutcome,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct LintArgs {
    /// Site configuration file (JSON)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Canned evaluator answer used when previewing protected pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GateOutcome {
    Satisfied,
    Unsatisfied,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_args(device: &str) -> Result<PlanArgs, clap::Error> {
        let cli = Cli::try_parse_from(["pagekit-cli", "plan", "site.json", "--device", device])?;
        match cli.command {
            Command::Plan(args) => Ok(args),
            Command::Lint(_) => panic!("expected plan"),
        }
    }

    #[test]
    fn test_device_parses_into_device_class() {
        assert_eq!(plan_args("mobile").unwrap().device, DeviceClass::Mobile);
        assert_eq!(plan_args("desktop").unwrap().device, DeviceClass::Desktop);
        assert!(plan_args("tablet").is_err());
    }
}
