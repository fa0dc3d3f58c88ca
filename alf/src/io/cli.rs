use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Command line interface of the ALF optimizer.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ALF: alternating-layer fill optimizer for single-carton pallet stacking"
)]
pub struct Cli {
    /// JSON file with the carton and pallet dimensions of the instance to stack
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder where the solution JSON and per-layer SVG files are written
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Custom AlfConfig as JSON, defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
