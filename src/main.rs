use anyhow::{Context, Result};
use clap::Parser;

use camera_interp::cli::Cli;
use camera_interp::config::InterpolationConfig;
use camera_interp::replay::{replay, ReplayReport, Scenario};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => InterpolationConfig::from_file(path)?,
        None => InterpolationConfig::default(),
    };

    let mut scenario = Scenario::from_file(&cli.scenario)?;
    if let Some(hz) = cli.tick_hz {
        scenario.tick_hz = hz;
    }
    if let Some(hz) = cli.frame_hz {
        scenario.frame_hz = hz;
    }

    let report = replay(&scenario, config)
        .with_context(|| format!("Replay failed: {:?}", cli.scenario))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, cli.no_ui);
    }
    Ok(())
}

fn print_report(report: &ReplayReport, summary_only: bool) {
    if !summary_only {
        println!("{:>6} {:>5} {:>6}  {:<28} {}", "frame", "tick", "t", "position", "status");
        for record in &report.frames {
            let p = record.pose.position;
            let status = match record.reason {
                Some(reason) if record.skipped => format!("skip ({})", reason),
                _ if record.skipped => "skip (paused)".to_string(),
                _ => "interpolated".to_string(),
            };
            println!(
                "{:>6} {:>5} {:>6.3}  ({:>7.3}, {:>7.3}, {:>7.3})  {}",
                record.frame, record.tick, record.progress, p.x, p.y, p.z, status
            );
        }
    }

    println!(
        "{} ticks, {} frames: {} interpolated, {} skipped",
        report.ticks,
        report.frames.len(),
        report.interpolated_frames,
        report.skipped_frames
    );
}
