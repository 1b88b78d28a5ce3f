//! A single propagating wave and its pure update rules.
//!
//! Updates never mutate in place: every step takes `&Wave` and returns the
//! next value, so a renderer holding last frame's snapshot never observes a
//! half-updated wave.

use crate::color::{color_for_frequency, Rgb};
use crate::config::WaveConfig;
use crate::constants::{
    ACTIVE_INTENSITY_FLOOR, AGE_DECAY_RATE, DECAY_MIN_RADIUS, DIRECTIONAL_GROWTH, LOW_BAND_END,
    MID_BAND_END,
};
use crate::driver::{DriverKind, EmissionPoint};
use crate::spectrum::{clamp_unit, dominant_frequency_index};
use glam::Vec3;
use std::fmt;

/// Identity of a live wave: the emitting source plus a per-source sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaveId {
    pub source: u32,
    pub seq: u64,
}

impl fmt::Display for WaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wave-{}-{}", self.source, self.seq)
    }
}

/// Monotonic id allocator owned by one emitter.
#[derive(Clone, Debug)]
pub struct WaveIds {
    source: u32,
    next: u64,
}

impl WaveIds {
    pub fn new(source: u32) -> Self {
        Self { source, next: 0 }
    }

    pub fn next_id(&mut self) -> WaveId {
        let id = WaveId {
            source: self.source,
            seq: self.next,
        };
        self.next += 1;
        id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub id: WaveId,
    /// Emission point; moves along `direction` when one is set.
    pub origin: Vec3,
    pub radius: f32,
    /// The wave dies once `radius` reaches this.
    pub max_radius: f32,
    pub intensity: f32,
    /// Normalized pitch, 0 = bass, 1 = treble.
    pub frequency: f32,
    pub color: Rgb,
    /// Seconds since creation.
    pub age: f32,
    /// World units per second.
    pub speed: f32,
    /// Unit vector the wave rides along instead of expanding in place.
    pub direction: Option<Vec3>,
    /// Transient collision perturbation in [0, 1].
    pub distortion: f32,
    /// Legacy aim point; only used to derive `direction` at creation.
    pub target_position: Option<Vec3>,
}

/// Optional inputs of [`create_wave`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveOptions {
    pub direction: Option<Vec3>,
    pub target: Option<Vec3>,
    pub kind: Option<DriverKind>,
    pub frequency_index: Option<usize>,
}

impl WaveOptions {
    pub fn from_point(point: &EmissionPoint) -> Self {
        Self {
            direction: Some(point.direction),
            target: None,
            kind: Some(point.kind),
            frequency_index: Some(point.frequency_index),
        }
    }
}

impl Wave {
    /// Zeroed record, used as the starting point for fresh and pooled waves.
    pub fn blank(id: WaveId) -> Self {
        Self {
            id,
            origin: Vec3::ZERO,
            radius: 0.0,
            max_radius: 0.0,
            intensity: 0.0,
            frequency: 0.0,
            color: Rgb::WHITE,
            age: 0.0,
            speed: 0.0,
            direction: None,
            distortion: 0.0,
            target_position: None,
        }
    }

    /// Overwrite every field as [`create_wave`] would.
    pub fn reinit(
        &mut self,
        id: WaveId,
        origin: Vec3,
        samples: &[u8],
        intensity: f32,
        options: &WaveOptions,
        config: &WaveConfig,
    ) {
        let frequency = match options.frequency_index {
            Some(index) if !samples.is_empty() => {
                driver_frequency(index, samples.len(), options.kind)
            }
            _ => dominant_frequency_index(samples),
        };
        let direction = options
            .direction
            .and_then(Vec3::try_normalize)
            .or_else(|| options.target.and_then(|t| (t - origin).try_normalize()));
        let scale = match options.kind {
            Some(kind) => kind.size_multiplier(),
            None => 0.5 + frequency * 0.5,
        };

        self.id = id;
        self.origin = origin;
        self.radius = config.min_ring_radius * scale;
        self.max_radius = config.max_ring_radius * scale;
        self.intensity = clamp_unit(intensity);
        self.frequency = frequency;
        self.color = safe_color(frequency, options.kind);
        self.age = 0.0;
        self.speed = config.sound_speed;
        self.direction = direction;
        self.distortion = 0.0;
        self.target_position = options.target;
    }
}

/// Map a driver's analyser bin to a normalized frequency inside the band
/// the driver covers (woofer 0..0.33, mid 0.33..0.66, tweeter 0.66..1).
fn driver_frequency(index: usize, len: usize, kind: Option<DriverKind>) -> f32 {
    let index = index.min(len.saturating_sub(1)) as f32;
    let low_end = LOW_BAND_END as f32;
    let mid_end = MID_BAND_END as f32;
    let f = match kind {
        Some(DriverKind::Woofer) => index / low_end * 0.33,
        Some(DriverKind::Mid) => 0.33 + (index - low_end) / (mid_end - low_end) * 0.33,
        _ => 0.66 + (index - mid_end) / (len as f32 - mid_end).max(1.0) * 0.34,
    };
    clamp_unit(f)
}

fn safe_color(frequency: f32, kind: Option<DriverKind>) -> Rgb {
    let color = color_for_frequency(frequency, kind);
    if color.is_finite() {
        color
    } else {
        log::warn!("non-finite wave color for frequency {frequency}; using white");
        Rgb::WHITE
    }
}

#[inline]
pub(crate) fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Build a new wave at `origin`.
///
/// With a `frequency_index` the wave's pitch comes from that driver's bin;
/// otherwise from the loudest bin. Sizes scale by driver kind when known
/// and by pitch when not. Never panics on malformed input.
pub fn create_wave(
    id: WaveId,
    origin: Vec3,
    samples: &[u8],
    intensity: f32,
    options: &WaveOptions,
    config: &WaveConfig,
) -> Wave {
    let mut wave = Wave::blank(id);
    wave.reinit(id, origin, samples, intensity, options, config);
    wave
}

/// Advance one tick: propagate, decay by inverse-square distance and
/// exponential age, and age by `dt`.
pub fn update_wave(wave: &Wave, dt: f32, config: &WaveConfig) -> Wave {
    let dt = sanitize_dt(dt);
    let travel = wave.speed * dt;
    let (origin, radius) = match wave.direction {
        Some(dir) => {
            let grown = (wave.radius + travel * DIRECTIONAL_GROWTH).min(config.max_ring_radius);
            (wave.origin + dir * travel, grown.max(wave.radius))
        }
        None => (wave.origin, wave.radius + travel),
    };

    let effective = radius.max(DECAY_MIN_RADIUS);
    let distance_factor = (DECAY_MIN_RADIUS * DECAY_MIN_RADIUS) / (effective * effective);
    let age_factor = (-wave.age * AGE_DECAY_RATE).exp();

    Wave {
        origin,
        radius,
        intensity: wave.intensity * distance_factor * age_factor,
        age: wave.age + dt,
        ..wave.clone()
    }
}

/// The sole pruning predicate.
pub fn is_wave_active(wave: &Wave) -> bool {
    wave.intensity > ACTIVE_INTENSITY_FLOOR && wave.radius < wave.max_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_frequency_stays_in_driver_band() {
        let woofer = driver_frequency(5, 128, Some(DriverKind::Woofer));
        assert!(woofer <= 0.33);
        let mid = driver_frequency(40, 128, Some(DriverKind::Mid));
        assert!((0.33..=0.66).contains(&mid));
        // index past the end is clamped to the last bin
        let tweeter = driver_frequency(500, 128, Some(DriverKind::Tweeter));
        assert!((tweeter - 0.66 - 67.0 / 68.0 * 0.34).abs() < 1e-5);
    }

    #[test]
    fn zero_direction_leaves_wave_undirected() {
        let options = WaveOptions {
            direction: Some(Vec3::ZERO),
            ..Default::default()
        };
        let w = create_wave(
            WaveIds::new(0).next_id(),
            Vec3::ZERO,
            &[10; 8],
            0.5,
            &options,
            &WaveConfig::default(),
        );
        assert!(w.direction.is_none());
    }
}
