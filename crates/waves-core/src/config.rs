use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Axis-aligned room surfaces waves collide with (world units).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomBounds {
    pub floor: f32,
    pub ceiling: f32,
    pub back_wall: f32,
    pub front_wall: f32,
    pub left_wall: f32,
    pub right_wall: f32,
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self {
            floor: ROOM_FLOOR,
            ceiling: ROOM_CEILING,
            back_wall: ROOM_BACK_WALL,
            front_wall: ROOM_FRONT_WALL,
            left_wall: ROOM_LEFT_WALL,
            right_wall: ROOM_RIGHT_WALL,
        }
    }
}

impl RoomBounds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let axes = [
            ('x', self.left_wall, self.right_wall),
            ('y', self.floor, self.ceiling),
            ('z', self.back_wall, self.front_wall),
        ];
        for (axis, low, high) in axes {
            // NaN fails this comparison too
            if !(low < high) {
                return Err(ConfigError::RoomBounds { axis, low, high });
            }
        }
        Ok(())
    }
}

/// Every tunable of the emitter and the wave physics.
///
/// Missing fields fall back to the defaults when deserialized, so a front-end
/// can override a single value (e.g. `{"max_waves": 20}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Shortest gap between emissions (seconds), used at full intensity.
    pub emit_interval_min: f32,
    /// Longest gap between emissions (seconds), used at zero intensity.
    pub emit_interval_max: f32,
    /// Overall intensity required before any wave is spawned.
    pub min_emit_intensity: f32,
    /// Propagation speed (world units per second).
    pub sound_speed: f32,
    /// Starting radius before the driver-size multiplier.
    pub min_ring_radius: f32,
    /// Death radius before the driver-size multiplier; also the growth cap
    /// of directional rings.
    pub max_ring_radius: f32,
    /// Intensity share kept by a wave hitting a surface.
    pub reflection_damping: f32,
    /// Reflected waves weaker than this are not spawned.
    pub min_reflected_intensity: f32,
    /// Distortion added per impact.
    pub distortion_step: f32,
    /// Linear distortion decay (per second) when nothing is hit.
    pub distortion_decay_per_sec: f32,
    /// Maximum origin distance for two waves to interfere.
    pub interference_threshold: f32,
    /// Per-emitter cap on live waves; the oldest are dropped first.
    pub max_waves: usize,
    /// Free-list capacity of an emitter's wave pool.
    pub pool_capacity: usize,
    /// Minimum gap between observer notifications (seconds).
    pub observer_min_interval: f32,
    pub room: RoomBounds,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            emit_interval_min: EMIT_INTERVAL_MIN,
            emit_interval_max: EMIT_INTERVAL_MAX,
            min_emit_intensity: MIN_EMIT_INTENSITY,
            sound_speed: SOUND_SPEED,
            min_ring_radius: MIN_RING_RADIUS,
            max_ring_radius: MAX_RING_RADIUS,
            reflection_damping: REFLECTION_DAMPING,
            min_reflected_intensity: MIN_REFLECTED_INTENSITY,
            distortion_step: DISTORTION_STEP,
            distortion_decay_per_sec: DISTORTION_DECAY_PER_SEC,
            interference_threshold: INTERFERENCE_THRESHOLD,
            max_waves: MAX_WAVES,
            pool_capacity: POOL_CAPACITY,
            observer_min_interval: OBSERVER_MIN_INTERVAL,
            room: RoomBounds::default(),
        }
    }
}

impl WaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.emit_interval_min > 0.0 && self.emit_interval_min <= self.emit_interval_max) {
            return Err(ConfigError::EmitInterval {
                min: self.emit_interval_min,
                max: self.emit_interval_max,
            });
        }
        if !(self.reflection_damping > 0.0 && self.reflection_damping <= 1.0) {
            return Err(ConfigError::Damping(self.reflection_damping));
        }
        let positive = [
            ("sound_speed", self.sound_speed),
            ("min_ring_radius", self.min_ring_radius),
            ("max_ring_radius", self.max_ring_radius),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.max_waves == 0 {
            return Err(ConfigError::ZeroWaveBudget);
        }
        self.room.validate()
    }
}
