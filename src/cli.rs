use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::ctx::{DEFAULT_DATA_PATH, DEFAULT_MODEL_PATH};
use crate::features::Weekday;

#[derive(Debug, Parser)]
#[command(
    name = "ttc-delay-risk",
    version,
    about = "Subway delay-risk prediction with per-feature explanations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Predict(PredictArgs),
    Lines(LinesArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, help = "Line to score (defaults to the first line in the dataset)")]
    pub line: Option<String>,

    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(0..=23))]
    pub hour: u8,

    #[arg(long, value_enum, ignore_case = true, default_value_t = DayArg::Monday)]
    pub day: DayArg,

    #[arg(long, default_value = DEFAULT_MODEL_PATH, help = "XGBoost JSON model (.json or .json.gz)")]
    pub model: PathBuf,

    #[arg(long, default_value = DEFAULT_DATA_PATH, help = "Dataset CSV (.csv or .csv.gz)")]
    pub data: PathBuf,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Write the map marker as GeoJSON")]
    pub geojson: bool,

    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Attribution bars to show before folding the rest"
    )]
    pub max_display: u64,
}

#[derive(Debug, Args)]
pub struct LinesArgs {
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayArg {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<DayArg> for Weekday {
    fn from(day: DayArg) -> Self {
        match day {
            DayArg::Monday => Weekday::Monday,
            DayArg::Tuesday => Weekday::Tuesday,
            DayArg::Wednesday => Weekday::Wednesday,
            DayArg::Thursday => Weekday::Thursday,
            DayArg::Friday => Weekday::Friday,
            DayArg::Saturday => Weekday::Saturday,
            DayArg::Sunday => Weekday::Sunday,
        }
    }
}
