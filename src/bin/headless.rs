use bevy::prelude::*;
use std::{env, path::PathBuf};

use horizon_flyer::{
    plugins::{FlightPlugin, HeadlessPlugin},
    resources::{FlyerConfig, TickSettings},
};

const DEFAULT_FRAMES: u32 = 600;

/// Runs a windowless flight and writes the final frame as a PNG.
///
/// Usage: horizon_flyer_headless [config.yaml] [--frames N] [--out frame.png]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config_path: Option<PathBuf> = None;
    let mut frames = DEFAULT_FRAMES;
    let mut output = PathBuf::from("frame.png");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args.next().ok_or("--frames needs a value")?;
                frames = value.parse()?;
            }
            "--out" => {
                output = PathBuf::from(args.next().ok_or("--out needs a value")?);
            }
            _ => config_path = Some(PathBuf::from(arg)),
        }
    }

    let mut config = match &config_path {
        Some(path) => FlyerConfig::load(path)?,
        None => FlyerConfig::default(),
    };
    if config.tick.fixed_dt.is_none() {
        config.tick = TickSettings::fixed(1.0 / 60.0);
    }
    config.capture.frame_limit = Some(frames);
    config.capture.output = Some(output);

    App::new()
        .add_plugins(HeadlessPlugin::new(config.clone()))
        .add_plugins(FlightPlugin::with_config(config))
        .run();

    Ok(())
}
