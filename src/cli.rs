use crate::types::input::{ActivityLevel, Diet, Gender};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "diabetes-risk",
    version,
    about = "Heuristic diabetes risk screening from basic health metrics"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one person's answers
    Assess(AssessCommand),
    /// Print the scoring table and band thresholds
    Rules,
}

#[derive(Args)]
pub struct AssessCommand {
    /// Read answers from a TOML or JSON document instead of flags
    #[arg(
        long,
        conflicts_with_all = [
            "age", "gender", "bmi", "waist",
            "family_history", "activity", "hypertension", "diet",
        ]
    )]
    pub input: Option<PathBuf>,

    /// Age in years (10-100)
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub age: Option<i64>,

    /// male or female
    #[arg(long, required_unless_present = "input")]
    pub gender: Option<Gender>,

    /// Body mass index (10.0-60.0)
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub bmi: Option<f64>,

    /// Waist circumference in cm (40-150)
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub waist: Option<i64>,

    /// Family history of diabetes
    #[arg(long)]
    pub family_history: bool,

    /// active, moderate or sedentary [default: active]
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Diagnosed high blood pressure
    #[arg(long)]
    pub hypertension: bool,

    /// balanced, high-sugar or high-carb-fat [default: balanced]
    #[arg(long)]
    pub diet: Option<Diet>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Show how many points each factor contributed
    #[arg(long)]
    pub breakdown: bool,

    /// Clamp out-of-range numbers instead of rejecting them
    #[arg(long)]
    pub clamp: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}
