// Shared tuning constants for wave emission and propagation.
// Distances are world units, times are seconds, intensities are 0..1.

// Emission cadence
pub const EMIT_INTERVAL_MIN: f32 = 0.1; // loud audio emits this often
pub const EMIT_INTERVAL_MAX: f32 = 0.2; // quiet audio emits this often
pub const MIN_EMIT_INTENSITY: f32 = 0.05; // below this nothing is spawned

// Propagation
pub const SOUND_SPEED: f32 = 15.0; // slowed down so rings stay readable
pub const DIRECTIONAL_GROWTH: f32 = 0.1; // ring growth relative to travel when riding a ray
pub const MIN_RING_RADIUS: f32 = 0.05; // starting radius before driver scaling
pub const MAX_RING_RADIUS: f32 = 2.0; // visual cap for directional rings
pub const DECAY_MIN_RADIUS: f32 = 0.5; // inverse-square guard against r -> 0
pub const AGE_DECAY_RATE: f32 = 0.5; // exp(-age * rate) per tick

// Liveness
pub const ACTIVE_INTENSITY_FLOOR: f32 = 0.01;

// Collisions
pub const REFLECTION_DAMPING: f32 = 0.3; // share of intensity kept on impact
pub const MIN_REFLECTED_INTENSITY: f32 = 0.05;
pub const REFLECTED_START_RADIUS: f32 = 0.5;
pub const DISTORTION_STEP: f32 = 0.05; // added per impact, saturates at 1
pub const DISTORTION_DECAY_PER_SEC: f32 = 0.5;

// Interference
pub const INTERFERENCE_THRESHOLD: f32 = 2.0; // max origin distance for merging
pub const INTERFERENCE_MAX_BONUS: f32 = 0.3; // +30% at full overlap
pub const INTERFERENCE_SHARE: f32 = 0.6; // each partner keeps this share of the sum

// Budgets
pub const SCENE_WAVE_BUDGET: usize = 25;
pub const MAX_WAVES: usize = SCENE_WAVE_BUDGET / 2; // per emitter
pub const POOL_CAPACITY: usize = 50;
pub const POOL_BASELINE_RADIUS: f32 = 0.5; // radius a released record is reset to
pub const OBSERVER_MIN_INTERVAL: f32 = 0.1; // at most ~10 notifications per second

// Spectrum bands (bin indices into the analyser output)
pub const LOW_BAND_END: usize = 20;
pub const MID_BAND_END: usize = 60;

// Room surfaces (showroom environment)
pub const ROOM_FLOOR: f32 = -0.5; // y
pub const ROOM_CEILING: f32 = 20.0; // y
pub const ROOM_BACK_WALL: f32 = -10.0; // z
pub const ROOM_FRONT_WALL: f32 = 10.0; // z
pub const ROOM_LEFT_WALL: f32 = -15.0; // x
pub const ROOM_RIGHT_WALL: f32 = 15.0; // x
