use clap::{Args, Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, Level};

use longitudinal::components::{AircraftParameters, AircraftSource, AircraftType};
use longitudinal::report::{ModesSummary, TrimSummary};
use longitudinal::resources::AnalysisConfig;
use longitudinal::Pipeline;

#[derive(Parser)]
#[command(name = "longitudinal")]
#[command(version)]
#[command(about = "Trim, linearise and design a longitudinal autopilot for a fixed-wing aircraft", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct Inputs {
    /// Aircraft parameter file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Solver settings and autopilot gains (YAML)
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and print the report
    Analyse {
        #[command(flatten)]
        inputs: Inputs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve the trim point only
    Trim {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Phugoid and short-period reductions
    Modes {
        #[command(flatten)]
        inputs: Inputs,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Explicit path, then `$CONFIG_DIR/longitudinal/aircraft.yaml`, then the
/// built-in Mirage III.
fn aircraft_source(path: Option<PathBuf>) -> AircraftSource {
    if let Some(path) = path {
        return AircraftSource::File(path);
    }
    match dirs::config_dir().map(|dir| dir.join("longitudinal").join("aircraft.yaml")) {
        Some(path) if path.exists() => AircraftSource::File(path),
        _ => AircraftSource::Programmed(AircraftType::MirageIII),
    }
}

fn load(inputs: Inputs) -> Result<(AircraftParameters, AnalysisConfig), Box<dyn Error>> {
    let source = aircraft_source(inputs.config);
    info!("Loading aircraft from {:?}", source);
    let params = AircraftParameters::new(source)?;
    let config = match inputs.settings {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    Ok((params, config))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyse {
            inputs,
            format,
            output,
        } => {
            let (params, config) = load(inputs)?;
            let report = Pipeline::run(&params, &config)?;
            let rendered = match format {
                OutputFormat::Text => report.to_string(),
                OutputFormat::Json => report.to_json()?,
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!("Report written to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Commands::Trim { inputs } => {
            let (params, config) = load(inputs)?;
            let mut pipeline = Pipeline::new(&params, &config);
            let trim = pipeline.equilibrium()?;
            print!("{}", TrimSummary(&trim));
        }
        Commands::Modes { inputs } => {
            let (params, config) = load(inputs)?;
            let mut pipeline = Pipeline::new(&params, &config);
            let modes = pipeline.modes()?;
            print!("{}", ModesSummary(modes));
        }
    }

    Ok(())
}
