// Host-side tests for the wave free list.

use glam::Vec3;
use waves_core::*;

fn wave(ids: &mut WaveIds) -> Wave {
    let mut w = create_wave(
        ids.next_id(),
        Vec3::ONE,
        &[90; 64],
        0.7,
        &WaveOptions::default(),
        &WaveConfig::default(),
    );
    w.age = 3.0;
    w.distortion = 0.4;
    w
}

#[test]
fn empty_pool_acquires_nothing() {
    let mut pool = WavePool::default();
    assert!(pool.acquire().is_none());
    assert_eq!(pool.capacity(), POOL_CAPACITY);
}

#[test]
fn release_resets_baseline_fields() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(4);
    pool.release(wave(&mut ids));
    let w = pool.acquire().expect("released wave is reusable");
    assert_eq!(w.radius, 0.5);
    assert_eq!(w.intensity, 0.0);
    assert_eq!(w.age, 0.0);
    assert_eq!(w.distortion, 0.0);
}

#[test]
fn reuse_is_lifo() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(4);
    let a = wave(&mut ids);
    let b = wave(&mut ids);
    let (a_id, b_id) = (a.id, b.id);
    pool.release(a);
    pool.release(b);
    assert_eq!(pool.acquire().map(|w| w.id), Some(b_id));
    assert_eq!(pool.acquire().map(|w| w.id), Some(a_id));
    assert!(pool.acquire().is_none());
}

#[test]
fn overflow_is_discarded() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(2);
    for _ in 0..5 {
        pool.release(wave(&mut ids));
    }
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.stats().pooled, 2);
}

#[test]
fn stats_track_outstanding_records() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(8);
    pool.release(wave(&mut ids));
    pool.release(wave(&mut ids));
    let a = pool.acquire().unwrap();
    let stats = pool.stats();
    assert_eq!(stats.in_use, 1);
    assert_eq!(stats.pooled, 1);
    pool.release(a);
    assert_eq!(pool.stats().in_use, 0);
    pool.clear();
    assert!(pool.is_empty());
    assert_eq!(pool.stats(), PoolStats { pooled: 0, in_use: 0, capacity: 8 });
}

#[test]
fn pooled_create_matches_fresh_create() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(8);
    pool.release(wave(&mut ids));
    let id = ids.next_id();
    let options = WaveOptions {
        direction: Some(Vec3::X),
        kind: Some(DriverKind::Mid),
        frequency_index: Some(20),
        ..Default::default()
    };
    let config = WaveConfig::default();
    let samples = [40u8; 128];
    let recycled = pool.create_wave(id, Vec3::Y, &samples, 0.6, &options, &config);
    let fresh = create_wave(id, Vec3::Y, &samples, 0.6, &options, &config);
    assert_eq!(recycled, fresh);
    assert!(pool.is_empty());
}

#[test]
fn releasing_a_fresh_wave_leaves_outstanding_count() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(8);
    pool.release(wave(&mut ids));
    let lent = pool.acquire().unwrap();
    pool.release(wave(&mut ids));
    assert_eq!(pool.stats().in_use, 1);
    pool.release(lent);
    assert_eq!(pool.stats().in_use, 0);
}

#[test]
fn pooled_create_tracks_the_new_id() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(8);
    pool.release(wave(&mut ids));
    let config = WaveConfig::default();
    let options = WaveOptions::default();
    let w = pool.create_wave(ids.next_id(), Vec3::ZERO, &[50; 64], 0.5, &options, &config);
    assert_eq!(pool.stats().in_use, 1);
    pool.release(w);
    assert_eq!(pool.stats(), PoolStats { pooled: 1, in_use: 0, capacity: 8 });
}

#[test]
fn released_record_resets_to_baseline_radius() {
    let mut ids = WaveIds::new(0);
    let mut pool = WavePool::new(8);
    pool.release(wave(&mut ids));
    assert_eq!(pool.acquire().map(|w| w.radius), Some(POOL_BASELINE_RADIUS));
}
