use anyhow::Result;
use bmad_patterns::logging::init_tracing;
use bmad_patterns::{BirthData, EngineConfig, PatternCategory, PatternEngine};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bmad-patterns")]
#[command(about = "Numerological pattern detection for birth dates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON engine configuration file
    #[arg(short, long, env = "BMAD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect all patterns for a birth date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    Detect { date: BirthData },

    /// Full analysis: patterns, total score, dominant categories, summary
    Analyze { date: BirthData },

    /// Patterns of a single category (e.g. MASTER_NUMBER, harmonic)
    Category {
        date: BirthData,
        category: PatternCategory,
    },

    /// Patterns at or above a confidence threshold
    HighConfidence {
        date: BirthData,

        /// Defaults to the configured min_confidence (0.9)
        #[arg(short, long)]
        min_confidence: Option<f64>,
    },

    /// Compare the patterns of two birth dates
    Compare { first: BirthData, second: BirthData },

    /// List the rule catalog
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fallback = match cli.verbose {
        0 => None,
        1 => Some("bmad_patterns=debug"),
        _ => Some("bmad_patterns=trace"),
    };
    init_tracing(fallback);

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let engine = PatternEngine::new().with_config(config);

    match cli.command {
        Commands::Detect { date } => print_json(&engine.detect_patterns(&date)?),
        Commands::Analyze { date } => print_json(&engine.analyze(&date)?),
        Commands::Category { date, category } => {
            print_json(&engine.get_patterns_by_category(&date, category)?)
        }
        Commands::HighConfidence {
            date,
            min_confidence,
        } => print_json(&engine.get_high_confidence_patterns(&date, min_confidence)?),
        Commands::Compare { first, second } => {
            print_json(&engine.compare_patterns(&first, &second)?)
        }
        Commands::Rules => print_json(&engine.rules()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
