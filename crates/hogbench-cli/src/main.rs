//! CLI for the hogbench toolchain.
//!
//! Reads the per-frame CSV files written by the HOG benchmark runs, prints a
//! summary table and writes comparison charts.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hogbench_core::ImageFormat;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "hogbench")]
#[command(about = "HOG benchmark result analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary table and write all charts
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Directory charts are written to (default: chosen from where the inputs live)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Chart image format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Font file used for chart text
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Print the summary table only
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write the default configuration file
    Init {
        /// Output file path
        #[arg(long, short, default_value = "hogbench.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Options shared by every command that reads results.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory searched first for result files
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Directory searched second, relative to --dir
    #[arg(long)]
    pub results_dir: Option<PathBuf>,
}

/// Chart formats selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Raster image (default)
    Png,
    /// Vector image
    Svg,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Svg => ImageFormat::Svg,
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Analyze {
            input,
            output_dir,
            format,
            font,
        } => {
            let mut config = commands::load_config(&input)?;
            if output_dir.is_some() {
                config.output_dir = output_dir;
            }
            if let Some(format) = format {
                config.format = format.into();
            }
            if font.is_some() {
                config.font_path = font;
            }
            commands::analyze(config)
        }
        Commands::Summary { input } => commands::summary(commands::load_config(&input)?),
        Commands::Init { output, force } => commands::init(&output, force),
    }
}
