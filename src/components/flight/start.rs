use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::FlightState;
use crate::utils::{START_ALTITUDE, START_FORWARD_SPEED};

/// How the player aircraft is initialised at the start of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StartConfig {
    Fixed(FixedStartConfig),
    Random(RandomStartConfig),
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Fixed(FixedStartConfig::default())
    }
}

impl StartConfig {
    pub fn initial_state(&self) -> FlightState {
        match self {
            StartConfig::Fixed(fixed) => fixed.initial_state(),
            StartConfig::Random(random) => random.generate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStartConfig {
    pub altitude: f64,
    pub forward_speed: f64,
    pub distance: f64,
}

impl Default for FixedStartConfig {
    fn default() -> Self {
        Self {
            altitude: START_ALTITUDE,
            forward_speed: START_FORWARD_SPEED,
            distance: 0.0,
        }
    }
}

impl FixedStartConfig {
    pub fn initial_state(&self) -> FlightState {
        FlightState::new(self.altitude, self.forward_speed, self.distance)
    }
}

/// Configuration for drawing a random starting state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomStartConfig {
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Stores the seed for the random number generator.
    pub seed: Option<u64>,
}

impl Default for RandomStartConfig {
    fn default() -> Self {
        Self {
            min_altitude: 50.0,
            max_altitude: 300.0,
            min_speed: 50.0,
            max_speed: 150.0,
            seed: None,
        }
    }
}

impl RandomStartConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn generate(&self) -> FlightState {
        let mut rng = if let Some(seed) = self.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            warn!("No seed provided, using entropy");
            ChaCha8Rng::from_entropy()
        };

        let (min_altitude, max_altitude) = ordered(self.min_altitude, self.max_altitude);
        let (min_speed, max_speed) = ordered(self.min_speed, self.max_speed);

        let altitude = sample(&mut rng, min_altitude, max_altitude);
        let forward_speed = sample(&mut rng, min_speed, max_speed);
        info!(
            "Generated start state: altitude={:.1}, forward_speed={:.1}",
            altitude, forward_speed
        );

        FlightState::new(altitude, forward_speed, 0.0)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b {
        warn!("Invalid range: min ({}) > max ({}). Swapping values.", a, b);
        (b, a)
    } else {
        (a, b)
    }
}

fn sample(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    if min == max {
        min
    } else {
        rng.gen_range(min..max)
    }
}
