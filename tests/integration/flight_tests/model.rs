use approx::assert_relative_eq;
use horizon_flyer::{
    components::{ControlInput, FlightModelConfig, FlightState},
    systems::advance,
};

use crate::common::{assert_flight_state_valid, input_sweep, throttle_input, time_steps};

#[test]
fn test_speed_converges_without_overshoot() {
    let config = FlightModelConfig::default();
    for throttle in [0.0, 25.0, 50.0, 100.0] {
        for start_speed in [0.0, 50.0, 200.0] {
            let target = 50.0 + throttle;
            let mut state = FlightState::new(100.0, start_speed, 0.0);
            let mut gap = (target - state.forward_speed).abs();

            for dt in time_steps(60) {
                advance(&mut state, &config, dt, &throttle_input(throttle));
                let new_gap = (target - state.forward_speed).abs();
                assert!(new_gap <= gap + 1e-12, "gap grew from {} to {}", gap, new_gap);

                // Always on the same side of the target as the start
                if start_speed <= target {
                    assert!(state.forward_speed <= target + 1e-9);
                } else {
                    assert!(state.forward_speed >= target - 1e-9);
                }
                gap = new_gap;
            }
        }
    }
}

#[test]
fn test_ten_second_spool_up() {
    let config = FlightModelConfig::default();
    let mut state = FlightState::default();
    for _ in 0..10 {
        advance(&mut state, &config, 1.0, &throttle_input(50.0));
    }
    assert!((state.forward_speed - 100.0).abs() < 0.1);
    assert_relative_eq!(state.forward_speed, 100.0 - 50.0 * 0.5f64.powi(10), epsilon = 1e-9);
}

#[test]
fn test_distance_is_non_decreasing() {
    let config = FlightModelConfig::default();
    let mut state = FlightState::default();
    let inputs = input_sweep(120);
    let steps = time_steps(120);

    let mut last = state.distance;
    for (input, dt) in inputs.iter().zip(steps) {
        advance(&mut state, &config, dt, input);
        assert!(state.distance >= last);
        assert_flight_state_valid(&state);
        last = state.distance;
    }
}

#[test]
fn test_full_climb_scenario() {
    let config = FlightModelConfig::default();
    let mut state = FlightState::default();
    let input = ControlInput::new(50.0, 30.0, 0.0);
    for _ in 0..5 {
        advance(&mut state, &config, 1.0, &input);
    }
    assert_relative_eq!(state.altitude, 200.0);
}

#[test]
fn test_dive_clamps_at_ground() {
    let config = FlightModelConfig::default();
    let mut state = FlightState::new(50.0, 50.0, 0.0);
    let returned = advance(&mut state, &config, 10.0, &ControlInput::new(50.0, -30.0, 0.0));
    assert_eq!(returned.altitude, 0.0);
    assert_eq!(state.altitude, 0.0);
}

#[test]
fn test_sustained_dive_never_goes_negative() {
    let config = FlightModelConfig::default();
    let mut state = FlightState::new(5.0, 50.0, 0.0);
    let input = ControlInput::new(0.0, -30.0, -30.0);
    for dt in time_steps(200) {
        advance(&mut state, &config, dt, &input);
        assert!(state.altitude >= 0.0);
    }

    // Climbing out starts from the ground, not from a negative altitude
    advance(&mut state, &config, 1.0, &ControlInput::new(0.0, 15.0, 0.0));
    assert_relative_eq!(state.altitude, 10.0);
}

#[test]
fn test_custom_model_constants() {
    let config = FlightModelConfig {
        base_speed: 30.0,
        speed_response: 0.25,
        climb_rate: 10.0,
        max_pitch: 20.0,
    };
    let mut state = FlightState::new(0.0, 30.0, 0.0);
    advance(&mut state, &config, 2.0, &ControlInput::new(40.0, 20.0, 0.0));

    assert_relative_eq!(state.forward_speed, 30.0 + 40.0 * 0.5);
    assert_relative_eq!(state.distance, 50.0 * 2.0);
    assert_relative_eq!(state.altitude, 20.0);
}
