use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workout_core::*;

#[derive(Parser)]
#[command(name = "wstat")]
#[command(about = "Workout statistics from raw sensor readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report on a list of packages (default)
    Report {
        /// Package file (.jsonl or .csv); defaults to the configured packages
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Report on a single package given on the command line
    Calc {
        /// Workout type code (SWM, RUN, WLK)
        code: String,

        /// Readings in constructor order
        #[arg(required = true, allow_negative_numbers = true)]
        readings: Vec<f64>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        workout_core::logging::init_with_level("debug");
    } else {
        workout_core::logging::init();
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Report { input, format }) => cmd_report(input, format, &config),
        Some(Commands::Calc {
            code,
            readings,
            format,
        }) => cmd_calc(&code, &readings, format, &config),
        None => {
            // Default to "report" command
            cmd_report(None, None, &config)
        }
    }
}

fn cmd_report(input: Option<PathBuf>, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let packages = match input {
        Some(path) => load_packages(&path)?,
        None => config.packages.clone(),
    };

    let format = format.unwrap_or(config.output.format);
    tracing::debug!("Reporting {} packages as {:?}", packages.len(), format);

    // Build everything first so a bad package aborts before any output
    let trainings = read_packages(&packages)?;
    for training in &trainings {
        print_info(&training.show_training_info(), format)?;
    }

    Ok(())
}

fn cmd_calc(
    code: &str,
    readings: &[f64],
    format: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    let training = read_package(code, readings)?;
    let format = format.unwrap_or(config.output.format);
    print_info(&training.show_training_info(), format)
}

fn print_info(info: &InfoMessage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", info),
        OutputFormat::Json => println!("{}", info.to_json()?),
    }
    Ok(())
}
