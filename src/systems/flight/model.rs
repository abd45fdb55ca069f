use bevy::prelude::*;

use crate::{
    components::{ControlInput, FlightModelConfig, FlightState},
    resources::TickSettings,
    utils::lerp,
};

/// System advancing every aircraft's flight state by one tick.
///
/// The step comes from [`TickSettings`]: a fixed step when configured,
/// otherwise the frame time.
pub fn flight_model_system(
    mut query: Query<(&mut FlightState, &FlightModelConfig)>,
    input: Res<ControlInput>,
    tick: Res<TickSettings>,
    time: Res<Time>,
) {
    let dt = tick.step(&time);

    for (mut state, config) in query.iter_mut() {
        let updated = advance(&mut state, config, dt, &input);
        debug!(
            "dt={:.4} speed={:.2} distance={:.1} altitude={:.1}",
            dt, updated.forward_speed, updated.distance, updated.altitude
        );
    }
}

/// Advances a flight state by `dt` seconds under `input` and returns the new state.
///
/// * Forward speed closes on `base_speed + throttle` at `speed_response` per
///   second. The blend factor is capped at one, so the target is never passed.
/// * Distance integrates the new forward speed.
/// * Altitude changes in proportion to pitch and is floored at zero.
///
/// `dt` must be non-negative; it is not validated.
pub fn advance(
    state: &mut FlightState,
    config: &FlightModelConfig,
    dt: f64,
    input: &ControlInput,
) -> FlightState {
    let target_speed = config.base_speed + input.throttle;
    state.forward_speed = lerp(
        state.forward_speed,
        target_speed,
        config.speed_response * dt,
    );

    state.distance += state.forward_speed * dt;

    state.altitude += (input.pitch / config.max_pitch) * config.climb_rate * dt;
    state.altitude = state.altitude.max(0.0);

    *state
}
