//! Bounded free list of wave records.
//!
//! Purely an allocation aid: an emitter behaves identically with or without
//! one. Released records are reset to a baseline and handed back out LIFO
//! with a fresh id.

use crate::config::WaveConfig;
use crate::constants::{POOL_BASELINE_RADIUS, POOL_CAPACITY};
use crate::wave::{Wave, WaveId, WaveOptions};
use fnv::FnvHashSet;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Records waiting on the free list.
    pub pooled: usize,
    /// Records handed out and not yet released.
    pub in_use: usize,
    pub capacity: usize,
}

#[derive(Clone, Debug)]
pub struct WavePool {
    free: Vec<Wave>,
    capacity: usize,
    // ids of records handed out and not yet returned
    lent: FnvHashSet<WaveId>,
}

impl Default for WavePool {
    fn default() -> Self {
        Self::new(POOL_CAPACITY)
    }
}

impl WavePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
            lent: FnvHashSet::default(),
        }
    }

    /// Most recently released record, or `None` when the caller must build
    /// a fresh one.
    pub fn acquire(&mut self) -> Option<Wave> {
        let wave = self.free.pop()?;
        self.lent.insert(wave.id);
        Some(wave)
    }

    /// Reset `wave` and keep it for reuse; discarded when the pool is full.
    /// Waves that were never acquired are accepted too but leave `in_use`
    /// untouched.
    pub fn release(&mut self, mut wave: Wave) {
        self.lent.remove(&wave.id);
        if self.free.len() >= self.capacity {
            log::trace!("wave pool full ({}); dropping {}", self.capacity, wave.id);
            return;
        }
        wave.radius = POOL_BASELINE_RADIUS;
        wave.intensity = 0.0;
        wave.age = 0.0;
        wave.distortion = 0.0;
        self.free.push(wave);
    }

    pub fn clear(&mut self) {
        self.free.clear();
        self.lent.clear();
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            pooled: self.free.len(),
            in_use: self.lent.len(),
            capacity: self.capacity,
        }
    }

    /// [`create_wave`](crate::create_wave) backed by this pool.
    pub fn create_wave(
        &mut self,
        id: WaveId,
        origin: Vec3,
        samples: &[u8],
        intensity: f32,
        options: &WaveOptions,
        config: &WaveConfig,
    ) -> Wave {
        match self.acquire() {
            Some(mut wave) => {
                self.lent.remove(&wave.id);
                self.lent.insert(id);
                wave.reinit(id, origin, samples, intensity, options, config);
                wave
            }
            None => crate::wave::create_wave(id, origin, samples, intensity, options, config),
        }
    }
}
