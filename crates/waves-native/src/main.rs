mod synth;

use anyhow::Context;
use glam::Vec3;
use std::time::Duration;
use waves_core::{aggregate, AnalyzerFrame, Emitter, FrameRateCounter, WaveConfig, WaveStats};

use synth::SyntheticSpectrum;

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 10.0;

// Showroom speaker placement: (position, rotation) facing the listener
const SPEAKERS: [([f32; 3], [f32; 3]); 2] = [
    ([-4.0, -0.5, -6.0], [0.0, 0.3, 0.0]),
    ([4.0, -0.5, -6.0], [0.0, -0.3, 0.0]),
];

fn load_config(path: Option<&str>) -> anyhow::Result<WaveConfig> {
    let Some(path) = path else {
        return Ok(WaveConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config: WaveConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    config.validate().with_context(|| format!("validating {path}"))?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let seconds: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid duration {s:?}"))?,
        None => DEFAULT_SECONDS,
    };
    let config = load_config(args.next().as_deref())?;

    let mut emitters = SPEAKERS
        .iter()
        .enumerate()
        .map(|(i, (pos, rot))| {
            Emitter::for_speaker(i as u32, Vec3::from(*pos), Vec3::from(*rot), config.clone())
                .map(Emitter::with_pool)
        })
        .collect::<Result<Vec<_>, _>>()?;
    for (i, e) in emitters.iter().enumerate() {
        log::info!(
            "[speaker {i}] {} drivers, top at ({:.2},{:.2},{:.2})",
            e.points().len(),
            e.points()[0].position.x,
            e.points()[0].position.y,
            e.points()[0].position.z
        );
    }

    let mut spectrum = SyntheticSpectrum::new(110.0, 42);
    let mut fps = FrameRateCounter::default();
    let mut peak = 0usize;
    let frames = (seconds / FRAME_DT).ceil() as u64;
    let elapsed_step = Duration::from_secs_f32(FRAME_DT);
    let mut elapsed = Duration::ZERO;

    for _ in 0..frames {
        elapsed += elapsed_step;
        let samples = spectrum.tick(FRAME_DT);
        let frame = AnalyzerFrame {
            samples,
            playing: true,
            elapsed: elapsed.as_secs_f64(),
        };
        for e in &mut emitters {
            e.tick(FRAME_DT, &frame);
        }

        let refs: Vec<&Emitter> = emitters.iter().collect();
        let stats = aggregate(&refs);
        peak = peak.max(stats.count);
        if let Some(rate) = fps.tick(FRAME_DT) {
            let pool = emitters[0].pool_stats().unwrap_or_default();
            log::info!(
                "[t={:5.1}s] waves={:2} avg_intensity={:.2} fps={} ({:?}) pool={}/{}",
                elapsed.as_secs_f32(),
                stats.count,
                stats.average_intensity,
                rate,
                fps.rating(),
                pool.pooled,
                pool.capacity
            );
        }
    }

    // final pause frame: every emitter must go idle
    for e in &mut emitters {
        e.tick(FRAME_DT, &AnalyzerFrame::paused());
    }
    let remaining: Vec<WaveStats> = emitters
        .iter()
        .map(|e| WaveStats::from_waves(e.waves()))
        .collect();
    log::info!(
        "done: {frames} frames, peak {peak} live waves, {} left after pause",
        remaining.iter().map(|s| s.count).sum::<usize>()
    );
    Ok(())
}
