use rand::prelude::*;

// Analyser output shape: fftSize 256 -> 128 byte bins.
pub const BIN_COUNT: usize = 128;

// Per-second exponential fall of every bin after a hit.
const BIN_DECAY_PER_SEC: f32 = 6.0;

/// Stand-in for a Web Audio analyser: a seeded eighth-note pattern of kick,
/// snare/mid and hat hits rendered into byte magnitudes.
pub struct SyntheticSpectrum {
    rng: StdRng,
    bpm: f32,
    beat_accum: f64,
    levels: [f32; BIN_COUNT],
    bins: [u8; BIN_COUNT],
}

impl SyntheticSpectrum {
    pub fn new(bpm: f32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bpm,
            beat_accum: 0.0,
            levels: [0.0; BIN_COUNT],
            bins: [0; BIN_COUNT],
        }
    }

    pub fn tick(&mut self, dt: f32) -> &[u8] {
        let seconds_per_beat = 60.0 / self.bpm as f64;
        self.beat_accum += dt as f64;
        let decay = (-BIN_DECAY_PER_SEC * dt).exp();
        for level in &mut self.levels {
            *level *= decay;
        }
        while self.beat_accum >= seconds_per_beat / 2.0 {
            // eighth notes grid
            self.beat_accum -= seconds_per_beat / 2.0;
            self.hit();
        }
        for (bin, level) in self.bins.iter_mut().zip(self.levels.iter()) {
            *bin = (level.clamp(0.0, 1.0) * 255.0) as u8;
        }
        &self.bins
    }

    fn hit(&mut self) {
        // (bin range, trigger probability, peak)
        let parts: [(std::ops::Range<usize>, f32, f32); 3] =
            [(0..20, 0.5, 1.0), (20..60, 0.4, 0.8), (60..BIN_COUNT, 0.6, 0.6)];
        for (range, prob, peak) in parts {
            if self.rng.gen::<f32>() >= prob {
                continue;
            }
            let velocity = 0.5 + self.rng.gen::<f32>() * 0.5;
            let center = self.rng.gen_range(range.clone());
            for i in range {
                let spread = 1.0 / (1.0 + (i as f32 - center as f32).abs() * 0.15);
                let target = peak * velocity * spread;
                if target > self.levels[i] {
                    self.levels[i] = target;
                }
            }
        }
    }
}
