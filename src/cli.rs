// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-interp")]
#[command(about = "Replay a scripted session through the camera interpolator", long_about = None)]
pub struct Cli {
    /// Scenario file (JSON) describing the host state at every tick
    pub scenario: PathBuf,

    /// Threshold overrides (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the scenario's simulation rate
    #[arg(long = "tick-hz")]
    pub tick_hz: Option<f32>,

    /// Override the scenario's render rate
    #[arg(long = "frame-hz")]
    pub frame_hz: Option<f32>,

    /// Print the full report as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Only print the summary line
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
