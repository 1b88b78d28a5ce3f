// Host-side tests for configuration defaults, validation and overrides.

use waves_core::*;

#[test]
fn defaults_are_valid() {
    assert_eq!(WaveConfig::default().validate(), Ok(()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(EMIT_INTERVAL_MIN < EMIT_INTERVAL_MAX);
    assert!(MIN_RING_RADIUS < MAX_RING_RADIUS);
    assert!(MIN_REFLECTED_INTENSITY > ACTIVE_INTENSITY_FLOOR);
    assert!(REFLECTION_DAMPING > 0.0 && REFLECTION_DAMPING <= 1.0);
    assert!(ROOM_FLOOR < ROOM_CEILING);
    assert!(ROOM_BACK_WALL < ROOM_FRONT_WALL);
    assert!(ROOM_LEFT_WALL < ROOM_RIGHT_WALL);
    assert!(MAX_WAVES > 0 && MAX_WAVES <= SCENE_WAVE_BUDGET);
}

#[test]
fn inverted_intervals_are_rejected() {
    let c = WaveConfig {
        emit_interval_min: 0.3,
        emit_interval_max: 0.2,
        ..WaveConfig::default()
    };
    assert!(matches!(c.validate(), Err(ConfigError::EmitInterval { .. })));
}

#[test]
fn bad_damping_and_speed_are_rejected() {
    let c = WaveConfig {
        reflection_damping: 1.5,
        ..WaveConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::Damping(1.5)));

    let c = WaveConfig {
        sound_speed: f32::NAN,
        ..WaveConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NonPositive { name: "sound_speed", .. })
    ));
}

#[test]
fn inverted_room_is_rejected() {
    let mut c = WaveConfig::default();
    c.room.floor = 30.0;
    let err = c.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::RoomBounds {
            axis: 'y',
            low: 30.0,
            high: 20.0
        }
    );
    assert!(err.to_string().contains("y axis"));
}

#[test]
fn partial_json_overrides_keep_defaults() {
    let c: WaveConfig =
        serde_json::from_str(r#"{"max_waves": 20, "room": {"ceiling": 8.0}}"#).unwrap();
    assert_eq!(c.max_waves, 20);
    assert_eq!(c.room.ceiling, 8.0);
    assert_eq!(c.room.floor, ROOM_FLOOR);
    assert_eq!(c.sound_speed, SOUND_SPEED);
    assert_eq!(c.validate(), Ok(()));
}
