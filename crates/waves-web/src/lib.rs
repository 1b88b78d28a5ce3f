#![cfg(target_arch = "wasm32")]
use glam::Vec3;
use instant::Instant;
use std::rc::Rc;
use std::time::Duration;
use waves_core::{
    aggregate, as_floats, pack_instances, AnalyzerFrame, Emitter, FrameRateCounter, Wave,
    WaveConfig, WaveInstance,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

// position xyz + rotation xyz
const FLOATS_PER_SPEAKER: usize = 6;

// Longest frame step fed into the simulation after a stalled tab.
const MAX_FRAME_DT: Duration = Duration::from_millis(100);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("waves-web starting");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn parse_config(json: Option<String>) -> anyhow::Result<WaveConfig> {
    let config = match json {
        Some(text) => serde_json::from_str::<WaveConfig>(&text)?,
        None => WaveConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Wave ids of one emitter as a JS array, e.g. `["wave-0-3", "wave-0-4"]`.
fn id_array(waves: &[Wave]) -> js_sys::Array {
    waves
        .iter()
        .map(|w| JsValue::from_str(&w.id.to_string()))
        .collect()
}

/// Every speaker in the room, driven from one shared analyser.
#[wasm_bindgen]
pub struct SoundWaveSystem {
    emitters: Vec<Emitter>,
    analyser: Option<web::AnalyserNode>,
    bins: Vec<u8>,
    instances: Vec<WaveInstance>,
    last_frame: Option<Instant>,
    started: Instant,
    fps: FrameRateCounter,
}

#[wasm_bindgen]
impl SoundWaveSystem {
    /// `speakers` holds 6 floats per speaker: position xyz, rotation xyz.
    /// `config` is an optional JSON object overriding any tuning field.
    #[wasm_bindgen(constructor)]
    pub fn new(
        speakers: &js_sys::Float32Array,
        config: Option<String>,
    ) -> Result<SoundWaveSystem, JsValue> {
        let config = parse_config(config).map_err(to_js)?;
        let raw = speakers.to_vec();
        if raw.len() % FLOATS_PER_SPEAKER != 0 {
            return Err(JsValue::from_str(&format!(
                "speaker array length {} is not a multiple of {FLOATS_PER_SPEAKER}",
                raw.len()
            )));
        }
        let emitters = raw
            .chunks_exact(FLOATS_PER_SPEAKER)
            .enumerate()
            .map(|(i, s)| {
                Emitter::for_speaker(
                    i as u32,
                    Vec3::new(s[0], s[1], s[2]),
                    Vec3::new(s[3], s[4], s[5]),
                    config.clone(),
                )
                .map(Emitter::with_pool)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| to_js(e.into()))?;
        log::info!("[waves] {} speakers", emitters.len());
        Ok(Self {
            emitters,
            analyser: None,
            bins: Vec::new(),
            instances: Vec::new(),
            last_frame: None,
            started: Instant::now(),
            fps: FrameRateCounter::default(),
        })
    }

    pub fn set_analyser(&mut self, analyser: web::AnalyserNode) {
        self.bins = vec![0; analyser.frequency_bin_count() as usize];
        self.analyser = Some(analyser);
    }

    /// `callback(speakerIndex, ids)` runs whenever a speaker's wave set
    /// changes, at most every 100 ms per speaker.
    pub fn set_observer(&mut self, callback: js_sys::Function) {
        let callback = Rc::new(callback);
        for (i, emitter) in self.emitters.iter_mut().enumerate() {
            let callback = Rc::clone(&callback);
            let index = JsValue::from(i as u32);
            emitter.set_observer(move |waves: &[Wave]| {
                if let Err(e) = callback.call2(&JsValue::NULL, &index, &id_array(waves)) {
                    log::error!("wave observer error: {:?}", e);
                }
            });
        }
    }

    /// Advance every emitter by the wall-clock time since the last call and
    /// return the packed instance buffer (16 floats per wave).
    pub fn frame(&mut self, playing: bool) -> js_sys::Float32Array {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|t| now.duration_since(t).min(MAX_FRAME_DT))
            .unwrap_or_default()
            .as_secs_f32();
        self.last_frame = Some(now);

        // without an analyser nothing can be heard, so nothing is emitted
        let frame = match (&self.analyser, playing) {
            (Some(analyser), true) => {
                analyser.get_byte_frequency_data(&mut self.bins);
                AnalyzerFrame {
                    samples: &self.bins,
                    playing: true,
                    elapsed: now.duration_since(self.started).as_secs_f64(),
                }
            }
            _ => AnalyzerFrame::paused(),
        };

        self.instances.clear();
        for emitter in &mut self.emitters {
            pack_instances(emitter.tick(dt, &frame), &mut self.instances);
        }

        if self.fps.tick(dt).is_some() {
            let refs: Vec<&Emitter> = self.emitters.iter().collect();
            let stats = aggregate(&refs);
            log::debug!(
                "[waves] fps={} ({:?}) waves={} avg={:.2}",
                self.fps.fps(),
                self.fps.rating(),
                stats.count,
                stats.average_intensity
            );
        }

        js_sys::Float32Array::from(as_floats(&self.instances))
    }

    pub fn wave_count(&self) -> usize {
        self.emitters.iter().map(|e| e.waves().len()).sum()
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Drop every live wave, e.g. when the showroom scene unloads.
    pub fn reset(&mut self) {
        for emitter in &mut self.emitters {
            emitter.reset();
        }
        self.last_frame = None;
    }
}
