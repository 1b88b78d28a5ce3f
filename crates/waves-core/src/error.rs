//! Error types for the wave engine.
//!
//! The per-frame path never fails: malformed input is normalized instead.
//! The only fallible surface is configuration, checked once when an
//! [`Emitter`](crate::Emitter) is built.

use thiserror::Error;

/// Rejected [`WaveConfig`](crate::WaveConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Emission interval bounds must satisfy `0 < min <= max`.
    #[error("emit interval bounds must satisfy 0 < min <= max (min={min}, max={max})")]
    EmitInterval { min: f32, max: f32 },

    /// A pair of opposing room surfaces is inverted or coincident.
    #[error("room bounds are inverted on the {axis} axis ({low} >= {high})")]
    RoomBounds { axis: char, low: f32, high: f32 },

    /// Reflection damping outside `(0, 1]`.
    #[error("reflection damping must be in (0, 1], got {0}")]
    Damping(f32),

    /// A quantity that must be strictly positive (and finite) was not.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// `max_waves` of zero would discard every wave.
    #[error("wave budget must allow at least one wave")]
    ZeroWaveBudget,
}
