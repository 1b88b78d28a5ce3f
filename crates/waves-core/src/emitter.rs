//! Per-speaker emission scheduler.
//!
//! An [`Emitter`] owns everything that survives between frames: the live
//! wave collection, its clock, the last emission time, its id allocator and
//! an optional pool. The host calls [`Emitter::tick`] once per rendered
//! frame and hands the returned slice to the renderer.

use crate::collision::update_wave_with_collisions;
use crate::config::WaveConfig;
use crate::driver::{driver_layout, EmissionPoint};
use crate::error::ConfigError;
use crate::interference::merge_interfering_with;
use crate::pool::{PoolStats, WavePool};
use crate::spectrum::{emit_interval_between, intensity};
use crate::wave::{create_wave, is_wave_active, sanitize_dt, Wave, WaveIds, WaveOptions};
use fnv::FnvHasher;
use glam::Vec3;
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// One frame of analyser output.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyzerFrame<'a> {
    /// Byte magnitudes, one per frequency bin.
    pub samples: &'a [u8],
    pub playing: bool,
    /// Playback position in seconds (informational).
    pub elapsed: f64,
}

impl<'a> AnalyzerFrame<'a> {
    pub fn playing(samples: &'a [u8]) -> Self {
        Self {
            samples,
            playing: true,
            elapsed: 0.0,
        }
    }

    pub fn paused() -> Self {
        Self::default()
    }
}

/// Receives the wave collection when it changes. Must not keep references
/// past the call.
pub trait WaveObserver {
    fn waves_changed(&mut self, waves: &[Wave]);
}

impl<F: FnMut(&[Wave])> WaveObserver for F {
    fn waves_changed(&mut self, waves: &[Wave]) {
        self(waves)
    }
}

fn fingerprint(waves: &[Wave]) -> u64 {
    let mut h = FnvHasher::default();
    for w in waves {
        w.id.hash(&mut h);
    }
    h.finish()
}

struct ObserverSlot {
    observer: Box<dyn WaveObserver>,
    last_count: usize,
    last_fingerprint: u64,
    last_notified: Option<f64>,
}

impl ObserverSlot {
    fn offer(&mut self, waves: &[Wave], now: f64, min_interval: f32) {
        let print = fingerprint(waves);
        let changed = waves.len() != self.last_count || print != self.last_fingerprint;
        let due = self
            .last_notified
            .map_or(true, |t| now - t >= min_interval as f64);
        if changed && due {
            self.last_count = waves.len();
            self.last_fingerprint = print;
            self.last_notified = Some(now);
            self.observer.waves_changed(waves);
        }
    }
}

pub struct Emitter {
    config: WaveConfig,
    points: SmallVec<[EmissionPoint; 4]>,
    waves: Vec<Wave>,
    ids: WaveIds,
    clock: f64,
    last_emission: f64,
    pool: Option<WavePool>,
    observer: Option<ObserverSlot>,
}

impl Emitter {
    /// `source` tags the ids of every wave this emitter creates.
    pub fn new(
        source: u32,
        points: impl IntoIterator<Item = EmissionPoint>,
        config: WaveConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            points: points.into_iter().collect(),
            waves: Vec::with_capacity(config.max_waves),
            ids: WaveIds::new(source),
            clock: 0.0,
            last_emission: 0.0,
            pool: None,
            observer: None,
            config,
        })
    }

    /// Emitter for a speaker's four drivers.
    pub fn for_speaker(
        source: u32,
        position: Vec3,
        rotation: Vec3,
        config: WaveConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(source, driver_layout(position, rotation), config)
    }

    /// Spawn through a pool sized by `config.pool_capacity` and recycle
    /// expired waves into it.
    pub fn with_pool(mut self) -> Self {
        self.pool = Some(WavePool::new(self.config.pool_capacity));
        self
    }

    pub fn set_observer(&mut self, observer: impl WaveObserver + 'static) {
        // an empty collection counts as already reported
        self.observer = Some(ObserverSlot {
            observer: Box::new(observer),
            last_count: 0,
            last_fingerprint: fingerprint(&[]),
            last_notified: None,
        });
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn points(&self) -> &[EmissionPoint] {
        &self.points
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Seconds of `dt` received so far.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn pool_stats(&self) -> Option<PoolStats> {
        self.pool.as_ref().map(WavePool::stats)
    }

    /// Drop every wave and restart the emission schedule.
    pub fn reset(&mut self) {
        self.clear_waves();
        self.clock = 0.0;
        self.last_emission = 0.0;
    }

    /// Advance one frame and return the collection to render.
    pub fn tick(&mut self, dt: f32, frame: &AnalyzerFrame<'_>) -> &[Wave] {
        let dt = sanitize_dt(dt);
        self.clock += dt as f64;

        if !frame.playing || frame.samples.is_empty() {
            if !self.waves.is_empty() {
                log::debug!("emitter idle; clearing {} waves", self.waves.len());
                self.clear_waves();
            }
            // a throttled clear is still reported on a later idle frame
            self.notify();
            return &self.waves;
        }

        let level = intensity(frame.samples);
        let interval = emit_interval_between(
            level,
            self.config.emit_interval_min,
            self.config.emit_interval_max,
        );
        let spawned = if self.clock - self.last_emission >= interval as f64
            && level >= self.config.min_emit_intensity
        {
            self.last_emission = self.clock;
            self.spawn(frame.samples, level)
        } else {
            Vec::new()
        };

        let previous = std::mem::take(&mut self.waves);
        let mut updated = Vec::with_capacity(previous.len());
        let mut reflected = Vec::new();
        for wave in &previous {
            let outcome = update_wave_with_collisions(wave, dt, &self.config, &mut self.ids);
            if is_wave_active(&outcome.wave) {
                updated.push(outcome.wave);
            } else {
                self.recycle(outcome.wave);
            }
            if let Some(r) = outcome.reflected.filter(is_wave_active) {
                reflected.push(r);
            }
        }

        let pool = &mut self.pool;
        let mut next =
            merge_interfering_with(updated, self.config.interference_threshold, |partner| {
                if let Some(pool) = pool.as_mut() {
                    pool.release(partner);
                }
            });
        next.extend(reflected);
        next.extend(spawned);
        if next.len() > self.config.max_waves {
            let excess = next.len() - self.config.max_waves;
            for old in next.drain(..excess) {
                self.recycle(old);
            }
        }
        self.waves = next;
        self.notify();
        &self.waves
    }

    fn spawn(&mut self, samples: &[u8], level: f32) -> Vec<Wave> {
        let mut out = Vec::with_capacity(self.points.len());
        for point in &self.points {
            let id = self.ids.next_id();
            let options = WaveOptions::from_point(point);
            let wave = match self.pool.as_mut() {
                Some(pool) => {
                    pool.create_wave(id, point.position, samples, level, &options, &self.config)
                }
                None => create_wave(id, point.position, samples, level, &options, &self.config),
            };
            out.push(wave);
        }
        log::trace!(
            "spawned {} waves at t={:.3} (intensity {:.3})",
            out.len(),
            self.clock,
            level
        );
        out
    }

    fn recycle(&mut self, wave: Wave) {
        if let Some(pool) = self.pool.as_mut() {
            pool.release(wave);
        }
    }

    fn clear_waves(&mut self) {
        for wave in std::mem::take(&mut self.waves) {
            self.recycle(wave);
        }
    }

    fn notify(&mut self) {
        if let Some(slot) = self.observer.as_mut() {
            slot.offer(&self.waves, self.clock, self.config.observer_min_interval);
        }
    }
}
