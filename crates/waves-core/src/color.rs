//! Frequency to color mapping.
//!
//! Audio frequency follows light frequency: bass is red/orange, mids run
//! orange through yellow to green, treble is blue/violet. Everything here is
//! pure, so identical inputs give bit-identical colors.

use crate::driver::DriverKind;
use crate::spectrum::clamp_unit;

// Without a driver kind the normalized frequency is split into thirds.
const BASS_SPLIT: f32 = 0.33;
const MID_SPLIT: f32 = 0.66;

/// Linear RGB triple, components nominally in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Hue in degrees, saturation and lightness in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    /// Neutral fallback used when a color cannot be computed.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Weighted mix of two colors. Weights are normalized; when both are
    /// zero (or not finite) the colors are averaged evenly.
    pub fn blend(a: Rgb, weight_a: f32, b: Rgb, weight_b: f32) -> Rgb {
        let total = weight_a + weight_b;
        let (wa, wb) = if total > 0.0 && total.is_finite() {
            (weight_a / total, weight_b / total)
        } else {
            (0.5, 0.5)
        };
        Rgb::new(
            a.r * wa + b.r * wb,
            a.g * wa + b.g * wb,
            a.b * wa + b.b * wb,
        )
    }

    pub fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let d = max - min;
        let s = if l <= 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
        let h = if max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };
        Hsl { h: h * 60.0, s, l }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h / 360.0).rem_euclid(1.0);
        let s = clamp_unit(self.s);
        let l = clamp_unit(self.l);
        if s == 0.0 {
            return Rgb::new(l, l, l);
        }
        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;
        Rgb::new(
            hue_to_channel(q, p, h + 1.0 / 3.0),
            hue_to_channel(q, p, h),
            hue_to_channel(q, p, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Hue/saturation/lightness ranges for one frequency band.
struct HueBand {
    hue: (f32, f32),
    saturation: (f32, f32),
    lightness: (f32, f32),
}

impl HueBand {
    fn at(&self, t: f32) -> Hsl {
        let lerp = |(a, b): (f32, f32)| a + (b - a) * t;
        Hsl {
            h: lerp(self.hue),
            s: lerp(self.saturation),
            l: lerp(self.lightness),
        }
    }
}

const LOW_BAND: HueBand = HueBand {
    hue: (0.0, 30.0),
    saturation: (0.9, 1.0),
    lightness: (0.4, 0.5),
};
const MID_BAND: HueBand = HueBand {
    hue: (30.0, 150.0),
    saturation: (0.85, 1.0),
    lightness: (0.45, 0.5),
};
const HIGH_BAND: HueBand = HueBand {
    hue: (200.0, 280.0),
    saturation: (0.9, 1.0),
    lightness: (0.45, 0.5),
};

/// HSL for a normalized frequency. With a driver kind the band is fixed by
/// the driver and `freq` is the position inside it.
pub fn hsl_for_frequency(freq: f32, kind: Option<DriverKind>) -> Hsl {
    let f = clamp_unit(freq);
    match kind {
        Some(DriverKind::Woofer) => LOW_BAND.at(f),
        Some(DriverKind::Mid) => MID_BAND.at(f),
        Some(DriverKind::Tweeter) => HIGH_BAND.at(f),
        None if f < BASS_SPLIT => LOW_BAND.at(f / BASS_SPLIT),
        None if f < MID_SPLIT => MID_BAND.at((f - BASS_SPLIT) / (MID_SPLIT - BASS_SPLIT)),
        None => HIGH_BAND.at((f - MID_SPLIT) / (1.0 - MID_SPLIT)),
    }
}

pub fn color_for_frequency(freq: f32, kind: Option<DriverKind>) -> Rgb {
    hsl_for_frequency(freq, kind).to_rgb()
}
