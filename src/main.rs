mod config;
mod time_accumulator;

use config::DemoConfig;
use std::{error::Error, time::Duration};
use time_accumulator::TimeAccumulator;
use tracing::{debug, info};
use vecmath::{apply_exponential_damp, Vector3};

struct RunResult {
    frame_rate: u32,
    /// Damped once per rendered frame with the variable frame time.
    per_frame: Vector3<f32>,
    /// Damped in fixed steps handed out by the time accumulator.
    fixed_step: Vector3<f32>,
}

fn simulate(config: &DemoConfig, frame_rate: u32) -> RunResult {
    let frame_delta = Duration::from_secs(1) / frame_rate;
    let num_frames = (config.duration_secs * frame_rate as f32).round() as u32;

    let mut accum = TimeAccumulator::new(config.update_hz, config.max_steps);
    let mut per_frame = config.start;
    let mut fixed_step = config.start;

    for frame in 0..num_frames {
        apply_exponential_damp(
            &mut per_frame,
            config.target,
            config.rate,
            frame_delta.as_secs_f32(),
        );

        accum.update(frame_delta);
        let step_secs = accum.step_secs();
        for _ in 0..accum.num_steps() {
            apply_exponential_damp(&mut fixed_step, config.target, config.rate, step_secs);
        }

        debug!(
            frame,
            steps = accum.num_steps(),
            per_frame = %per_frame,
            fixed_step = %fixed_step,
            "frame"
        );
    }

    debug!(frame_rate, frames = accum.frame_number(), "finished");

    RunResult {
        frame_rate,
        per_frame,
        fixed_step,
    }
}

/// Largest distance between any two results.
fn spread(points: impl Iterator<Item = Vector3<f32>> + Clone) -> f32 {
    points
        .clone()
        .flat_map(|a| points.clone().map(move |b| (a - b).length()))
        .fold(0.0, f32::max)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => config::load_config(&path)?,
        None => DemoConfig::default(),
    };
    config.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(config.max_level()?)
        .init();

    info!(
        start = %config.start,
        target = %config.target,
        rate = config.rate,
        duration = config.duration_secs,
        "damping"
    );

    let results: Vec<RunResult> = config
        .frame_rates
        .iter()
        .map(|&frame_rate| simulate(&config, frame_rate))
        .collect();

    for result in &results {
        info!(
            fps = result.frame_rate,
            per_frame = %result.per_frame,
            fixed_step = %result.fixed_step,
            remaining = (config.target - result.per_frame).length(),
            "result"
        );
    }

    info!(
        per_frame = spread(results.iter().map(|r| r.per_frame)),
        fixed_step = spread(results.iter().map(|r| r.fixed_step)),
        "spread across frame rates"
    );

    Ok(())
}
