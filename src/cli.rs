use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Plan evaluation CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "beatline", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a district assignment against a unit dataset
    Score(ScoreArgs),

    /// Render a district assignment to SVG
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Input unit dataset (GeoJSON FeatureCollection)
    #[arg(value_hint = ValueHint::FilePath)]
    pub units: PathBuf,

    /// Input district assignment file (JSON object of unit id -> label)
    #[arg(value_hint = ValueHint::FilePath)]
    pub assignments: PathBuf,

    /// Emit the scores as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input unit dataset (GeoJSON FeatureCollection)
    #[arg(value_hint = ValueHint::FilePath)]
    pub units: PathBuf,

    /// Input district assignment file (JSON object of unit id -> label)
    #[arg(value_hint = ValueHint::FilePath)]
    pub assignments: PathBuf,

    /// Output SVG file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: i32,

    /// Viewport margin in pixels
    #[arg(long, default_value_t = 10)]
    pub margin: i32,
}
