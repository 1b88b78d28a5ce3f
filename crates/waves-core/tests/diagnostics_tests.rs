// Host-side tests for layout, diagnostics and renderer packing.

use glam::Vec3;
use waves_core::*;

#[test]
fn speaker_layout_has_four_drivers_top_to_bottom() {
    let layout = driver_layout(Vec3::new(2.0, 0.0, -4.0), Vec3::ZERO);
    let kinds: Vec<DriverKind> = layout.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![DriverKind::Tweeter, DriverKind::Mid, DriverKind::Woofer, DriverKind::Woofer]
    );
    let bins: Vec<usize> = layout.iter().map(|p| p.frequency_index).collect();
    assert_eq!(bins, vec![40, 20, 5, 2]);
    assert!((layout[0].position - Vec3::new(2.0, 4.15, -3.18)).length() < 1e-5);
    assert!((layout[3].position - Vec3::new(2.0, 0.82, -3.18)).length() < 1e-5);
    for p in &layout {
        assert!((p.direction - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn rotated_speaker_faces_rotated_forward() {
    let layout = driver_layout(Vec3::ZERO, Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
    for p in &layout {
        assert!((p.direction - Vec3::X).length() < 1e-5, "dir {:?}", p.direction);
    }
    // the baffle offset turns with the speaker
    assert!((layout[1].position.x - 0.82).abs() < 1e-5);
    assert!(layout[1].position.z.abs() < 1e-5);
}

#[test]
fn stats_average_and_round() {
    let mut ids = WaveIds::new(0);
    let config = WaveConfig::default();
    let waves: Vec<Wave> = [0.2f32, 0.333, 0.5]
        .iter()
        .map(|&i| {
            let options = WaveOptions::default();
            create_wave(ids.next_id(), Vec3::ZERO, &[1], i, &options, &config)
        })
        .collect();
    let stats = WaveStats::from_waves(&waves);
    assert_eq!(stats.count, 3);
    assert!((stats.average_intensity - 0.34).abs() < 1e-6);
    assert_eq!(WaveStats::from_waves(&[]), WaveStats::default());
}

#[test]
fn frame_rate_reports_once_per_second() {
    let mut counter = FrameRateCounter::default();
    let mut reports = Vec::new();
    for _ in 0..120 {
        if let Some(fps) = counter.tick(1.0 / 32.0) {
            reports.push(fps);
        }
    }
    assert_eq!(reports, vec![32, 32, 32]);
    assert_eq!(counter.rating(), FrameRating::Good);
    assert_eq!(FrameRating::from_fps(60), FrameRating::Excellent);
    assert_eq!(FrameRating::from_fps(12), FrameRating::Poor);
}

#[test]
fn instances_expose_the_render_contract() {
    let mut ids = WaveIds::new(0);
    let mut w = create_wave(
        ids.next_id(),
        Vec3::new(1.0, 2.0, 3.0),
        &[100; 128],
        0.5,
        &WaveOptions {
            direction: Some(Vec3::Y),
            ..Default::default()
        },
        &WaveConfig::default(),
    );
    w.distortion = 0.25;
    w.age = 1.5;
    let mut out = Vec::new();
    pack_instances(std::slice::from_ref(&w), &mut out);
    assert_eq!(out.len(), 1);
    let floats = as_floats(&out);
    assert_eq!(floats.len(), FLOATS_PER_INSTANCE);
    assert_eq!(&floats[0..4], &[1.0, 2.0, 3.0, w.radius]);
    assert_eq!(floats[7], 0.5);
    assert_eq!(&floats[8..12], &[0.0, 1.0, 0.0, 0.25]);
    assert_eq!(floats[12], 1.5);
}
