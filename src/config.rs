use crate::time_accumulator::MAX_UPDATE_HZ;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fs::File,
    io::{BufReader, BufWriter},
    str::FromStr,
};
use tracing::Level;
use vecmath::{vec3, Vector3};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub start: Vector3<f32>,
    pub target: Vector3<f32>,
    /// Fraction of the remaining distance left after one second.
    pub rate: f32,
    pub duration_secs: f32,
    /// Simulated render frame rates to compare.
    pub frame_rates: Vec<u32>,
    pub update_hz: u32,
    pub max_steps: u32,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start: vec3(0.0, 0.0, 0.0),
            target: vec3(10.0, 5.0, -20.0),
            rate: 0.1,
            duration_secs: 2.0,
            frame_rates: vec![30, 60, 144],
            update_hz: 60,
            max_steps: 4,
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !(self.rate > 0.0 && self.rate <= 1.0) {
            return Err(format!("damping rate {} is outside (0, 1]", self.rate).into());
        }
        if !(self.duration_secs >= 0.0) {
            return Err(format!("invalid duration {}", self.duration_secs).into());
        }
        if self.frame_rates.is_empty() || self.frame_rates.contains(&0) {
            return Err("frame rates must be non-empty and non-zero".into());
        }
        if self.update_hz == 0 || self.update_hz > MAX_UPDATE_HZ {
            return Err(format!(
                "update rate {} Hz is outside 1..={} Hz",
                self.update_hz, MAX_UPDATE_HZ
            )
            .into());
        }
        self.max_level()?;
        Ok(())
    }

    pub fn max_level(&self) -> Result<Level, Box<dyn Error>> {
        Ok(Level::from_str(&self.log_level)?)
    }
}

pub fn load_config(path: &str) -> Result<DemoConfig, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let config: DemoConfig = serde_json::from_reader(reader)?;
    config.validate()?;

    Ok(config)
}

pub fn save_config(path: &str, config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, config)?;

    Ok(())
}
