use horizon_flyer::components::{ControlInput, FixedStartConfig, StartConfig};

/// Start configuration at a given altitude and speed
#[allow(dead_code)]
pub fn fixed_start(altitude: f64, forward_speed: f64) -> StartConfig {
    StartConfig::Fixed(FixedStartConfig {
        altitude,
        forward_speed,
        distance: 0.0,
    })
}

/// Level flight at the given throttle
#[allow(dead_code)]
pub fn throttle_input(throttle: f64) -> ControlInput {
    ControlInput::new(throttle, 0.0, 0.0)
}

/// A repeating pseudo-random control sequence covering the full input ranges
#[allow(dead_code)]
pub fn input_sweep(len: usize) -> Vec<ControlInput> {
    (0..len)
        .map(|i| {
            let phase = i as f64 * 0.37;
            ControlInput::new(
                50.0 + 50.0 * phase.sin(),
                30.0 * (phase * 1.3).cos(),
                30.0 * (phase * 0.7).sin(),
            )
        })
        .collect()
}

/// Non-negative time steps of varying size
#[allow(dead_code)]
pub fn time_steps(len: usize) -> Vec<f64> {
    (0..len).map(|i| [0.0, 0.016, 0.1, 0.5, 1.0, 3.0][i % 6]).collect()
}
