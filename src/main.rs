mod cli;
mod config;
mod error;
mod intake;
mod report;
mod scoring;
mod types;

use crate::error::RiskError;
use crate::types::input::RangePolicy;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32, RiskError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "diabetes-risk starting");

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(&cwd)?;

            let policy = if cmd.clamp {
                RangePolicy::Clamp
            } else {
                loaded.range_policy()
            };
            let raw = intake::collect(&cmd)?;
            let input = raw.validate(policy)?;
            let result = scoring::compute_risk(&input);

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                None => loaded.output_format(),
            };
            let breakdown = cmd.breakdown || loaded.breakdown();
            let rendered = report::render(&input, &result, output_format, breakdown)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rules => {
            println!("scoring rules:");
            for rule in scoring::rule_table() {
                println!(
                    "- {:<18} {:<40} +{}",
                    rule.factor.name(),
                    rule.condition,
                    rule.points
                );
            }
            println!("bands:");
            for (band, low, high) in scoring::band_table() {
                println!("- {:<14} {low}-{high}", band.label());
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
