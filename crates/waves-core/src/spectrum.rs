//! Loudness and pitch estimates over analyser magnitude bins.
//!
//! Input is the byte spectrum a Web Audio `AnalyserNode` produces
//! (`getByteFrequencyData`), typically 128 bins of 0..=255.

use crate::constants::{EMIT_INTERVAL_MAX, EMIT_INTERVAL_MIN, LOW_BAND_END, MID_BAND_END};
use std::ops::Range;

/// Per-band loudness, each in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandIntensities {
    pub low: f32,
    pub mid: f32,
    pub high: f32,
    /// Unweighted mean of the three bands.
    pub total: f32,
}

#[inline]
pub(crate) fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

fn band_mean(samples: &[u8], range: Range<usize>) -> f32 {
    let end = range.end.min(samples.len());
    if range.start >= end {
        return 0.0;
    }
    let band = &samples[range.start..end];
    let sum: u64 = band.iter().map(|&v| v as u64).sum();
    clamp_unit(sum as f32 / band.len() as f32 / 255.0)
}

/// Split the spectrum into low `[0,20)`, mid `[20,60)` and high `[60,len)`
/// bins. A band with no bins counts as silent.
pub fn band_intensities(samples: &[u8]) -> BandIntensities {
    let low = band_mean(samples, 0..LOW_BAND_END);
    let mid = band_mean(samples, LOW_BAND_END..MID_BAND_END);
    let high = band_mean(samples, MID_BAND_END..usize::MAX);
    BandIntensities {
        low,
        mid,
        high,
        total: clamp_unit((low + mid + high) / 3.0),
    }
}

/// Overall loudness in [0, 1]; 0 for an empty spectrum.
pub fn intensity(samples: &[u8]) -> f32 {
    band_intensities(samples).total
}

/// Position of the loudest bin normalized by the bin count (0 = bass,
/// 1 = treble). The first maximum wins; an empty spectrum gives 0.5.
pub fn dominant_frequency_index(samples: &[u8]) -> f32 {
    if samples.is_empty() {
        return 0.5;
    }
    let mut max_value = 0u8;
    let mut max_index = 0usize;
    for (i, &v) in samples.iter().enumerate() {
        if v > max_value {
            max_value = v;
            max_index = i;
        }
    }
    max_index as f32 / samples.len() as f32
}

/// Seconds between emissions for a given loudness: louder audio emits
/// faster. Uses the default 0.1..0.2 s bounds.
pub fn emit_interval_for(intensity: f32) -> f32 {
    emit_interval_between(intensity, EMIT_INTERVAL_MIN, EMIT_INTERVAL_MAX)
}

pub fn emit_interval_between(intensity: f32, min: f32, max: f32) -> f32 {
    max - clamp_unit(intensity) * (max - min)
}
