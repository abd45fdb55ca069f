use approx::assert_relative_eq;
use bevy::{prelude::*, time::TimeUpdateStrategy};
use horizon_flyer::{
    components::FlightState,
    plugins::{FlightPlugin, HeadlessPlugin},
    resources::{CaptureConfig, FlyerConfig, TickSettings},
    systems::advance,
};
use std::time::Duration;
use tempfile::tempdir;
use tiny_skia::Pixmap;

use crate::common::{assert_flight_state_valid, throttle_input, TestAppBuilder};

#[test]
fn test_frame_time_drives_physics_without_fixed_step() {
    let mut config = FlyerConfig::default();
    config.tick = TickSettings { fixed_dt: None };
    config.input = throttle_input(80.0);

    let mut app = TestAppBuilder::new().with_config(config.clone()).build();
    app.app
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));

    // The first update only primes the clock.
    app.run_steps(1);
    let mut expected: FlightState = app.player_state().expect("Aircraft state not found");
    assert_eq!(expected, config.start.initial_state());

    for _ in 0..5 {
        app.run_steps(1);
        let dt = app.resource::<Time>().delta_secs_f64();
        assert_relative_eq!(dt, 0.1, epsilon = 1e-9);

        advance(&mut expected, &config.flight, dt, &config.input);
        let state = app.player_state().unwrap();
        assert_flight_state_valid(&state);
        assert_relative_eq!(state.forward_speed, expected.forward_speed, epsilon = 1e-9);
        assert_relative_eq!(state.distance, expected.distance, epsilon = 1e-9);
        assert_relative_eq!(state.altitude, expected.altitude, epsilon = 1e-9);
    }

    assert!(expected.distance > 0.0);
    assert!(expected.forward_speed > config.start.initial_state().forward_speed);
}

#[test]
fn test_headless_run_exits_and_writes_frame() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("headless.png");

    let mut config = FlyerConfig::default();
    config.tick = TickSettings::fixed(1.0 / 60.0);
    config.capture = CaptureConfig {
        capture_every: 1,
        frame_limit: Some(3),
        output: Some(output.clone()),
    };

    let exit = App::new()
        .add_plugins(HeadlessPlugin::new(config.clone()))
        .add_plugins(FlightPlugin::with_config(config.clone()))
        .run();

    assert_eq!(exit, AppExit::Success);
    assert!(output.exists());

    let pixmap = Pixmap::load_png(&output).expect("Saved frame is not a PNG");
    assert_eq!(pixmap.width(), config.render.screen_width);
    assert_eq!(pixmap.height(), config.render.screen_height);
}
