pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use drobe_core::{AppConfig, LoadOptions, LogFormat, Season};

#[derive(Debug, Parser)]
#[command(
    name = "drobe",
    about = "Drobe wardrobe styling CLI",
    long_about = "Generate outfits, inspect wardrobe health, and classify wear patterns from a wardrobe snapshot.",
    after_help = "Examples:\n  drobe seed --out wardrobe.json\n  drobe generate --wardrobe wardrobe.json --temperature 12 --condition 'light rain'\n  drobe insights --wardrobe wardrobe.json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Synthesize a batch of outfits from a wardrobe snapshot")]
    Generate {
        #[arg(long, help = "Path to the wardrobe snapshot JSON")]
        wardrobe: PathBuf,
        #[arg(long, help = "Target season; derived from today's date when omitted")]
        season: Option<Season>,
        #[arg(long, help = "Current temperature in °C; omit when weather is unknown")]
        temperature: Option<f64>,
        #[arg(long, help = "Weather condition text, e.g. 'light rain'")]
        condition: Option<String>,
        #[arg(long, help = "Outfits to generate; defaults to the configured batch size")]
        count: Option<usize>,
        #[arg(long, help = "Seed the random source for reproducible batches")]
        rng_seed: Option<u64>,
    },
    #[command(about = "Compute wardrobe health metrics from a snapshot")]
    Insights {
        #[arg(long, help = "Path to the wardrobe snapshot JSON")]
        wardrobe: PathBuf,
    },
    #[command(about = "Classify outfits as rarely or frequently worn from the wear log")]
    Wear {
        #[arg(long, help = "Path to the wardrobe snapshot JSON")]
        wardrobe: PathBuf,
    },
    #[command(about = "Suggest season-appropriate, rarely worn outfits")]
    Suggest {
        #[arg(long, help = "Path to the wardrobe snapshot JSON")]
        wardrobe: PathBuf,
        #[arg(long, help = "Suggestion date (YYYY-MM-DD); defaults to today")]
        date: Option<NaiveDate>,
    },
    #[command(about = "Write a demo wardrobe snapshot for trying the other commands")]
    Seed {
        #[arg(long, default_value = "wardrobe.json", help = "Where to write the snapshot")]
        out: PathBuf,
    },
    #[command(about = "Inspect the effective configuration after file and env overrides")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Generate { wardrobe, season, temperature, condition, count, rng_seed } => {
            commands::generate::run(
                &wardrobe,
                season,
                temperature,
                condition.as_deref(),
                count,
                rng_seed,
            )
        }
        Command::Insights { wardrobe } => commands::insights::run(&wardrobe),
        Command::Wear { wardrobe } => commands::wear::run(&wardrobe),
        Command::Suggest { wardrobe, date } => commands::suggest::run(&wardrobe, date),
        Command::Seed { out } => commands::seed::run(&out),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Command payloads go to stdout; diagnostics go to stderr so piped output
/// stays machine-readable.
fn init_logging() {
    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    let level = config.logging.level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
