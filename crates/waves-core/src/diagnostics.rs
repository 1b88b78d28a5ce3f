//! Read-only summaries for performance overlays.

use crate::emitter::Emitter;
use crate::wave::Wave;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveStats {
    pub count: usize,
    /// Mean intensity rounded to two decimals; 0 with no waves.
    pub average_intensity: f32,
}

impl WaveStats {
    pub fn from_waves(waves: &[Wave]) -> Self {
        Self::summarize(waves.iter())
    }

    fn summarize<'a>(waves: impl Iterator<Item = &'a Wave>) -> Self {
        let (count, sum) = waves.fold((0usize, 0.0f32), |(n, s), w| (n + 1, s + w.intensity));
        if count == 0 {
            return Self::default();
        }
        Self {
            count,
            average_intensity: (sum / count as f32 * 100.0).round() / 100.0,
        }
    }
}

/// Combined stats over several emitters (e.g. both speakers). Never
/// touches the emitters' collections.
pub fn aggregate(emitters: &[&Emitter]) -> WaveStats {
    WaveStats::summarize(emitters.iter().flat_map(|e| e.waves().iter()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRating {
    Excellent,
    Good,
    Poor,
}

impl FrameRating {
    pub fn from_fps(fps: u32) -> Self {
        match fps {
            55.. => FrameRating::Excellent,
            30..=54 => FrameRating::Good,
            _ => FrameRating::Poor,
        }
    }
}

/// Frames per second, refreshed once per accumulated second.
#[derive(Clone, Debug)]
pub struct FrameRateCounter {
    frames: u32,
    elapsed: f32,
    fps: u32,
}

impl Default for FrameRateCounter {
    fn default() -> Self {
        Self {
            frames: 0,
            elapsed: 0.0,
            fps: 60,
        }
    }
}

impl FrameRateCounter {
    /// Count one frame lasting `dt` seconds. Returns the new rate when a
    /// full second has accumulated.
    pub fn tick(&mut self, dt: f32) -> Option<u32> {
        self.frames += 1;
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed < 1.0 {
            return None;
        }
        self.fps = (self.frames as f32 / self.elapsed).round() as u32;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn rating(&self) -> FrameRating {
        FrameRating::from_fps(self.fps)
    }
}
