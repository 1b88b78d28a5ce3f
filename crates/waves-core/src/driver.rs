//! Emission points on a speaker model.
//!
//! Each speaker carries four drivers stacked on its front baffle. Every
//! driver samples its own analyser bin and scales its rings by size, so
//! tweeters emit small blue rings and woofers large red ones.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriverKind {
    Tweeter,
    Mid,
    Woofer,
}

impl DriverKind {
    /// Ring size relative to the configured min/max ring radius.
    pub fn size_multiplier(self) -> f32 {
        match self {
            DriverKind::Tweeter => 0.5,
            DriverKind::Mid => 0.75,
            DriverKind::Woofer => 1.0,
        }
    }

    // drops the emission point slightly below the cone center
    fn height_adjustment(self) -> f32 {
        match self {
            DriverKind::Tweeter => -0.05,
            DriverKind::Mid => -0.12,
            DriverKind::Woofer => -0.18,
        }
    }
}

/// A fixed world-space point waves are emitted from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissionPoint {
    pub position: Vec3,
    /// Unit forward vector of the owning speaker.
    pub direction: Vec3,
    pub kind: DriverKind,
    /// Analyser bin this driver samples.
    pub frequency_index: usize,
}

pub type DriverLayout = SmallVec<[EmissionPoint; 4]>;

// (local offset, kind, analyser bin), top to bottom
const SPEAKER_DRIVERS: [([f32; 3], DriverKind, usize); 4] = [
    ([0.0, 4.2, 0.82], DriverKind::Tweeter, 40),
    ([0.0, 3.4, 0.82], DriverKind::Mid, 20),
    ([0.0, 2.2, 0.82], DriverKind::Woofer, 5),
    ([0.0, 1.0, 0.82], DriverKind::Woofer, 2), // sub
];

/// Speaker rotation from XYZ Euler angles (radians), applied X then Y then Z
/// in the intrinsic frame.
pub fn speaker_rotation(euler: Vec3) -> Quat {
    Quat::from_rotation_x(euler.x) * Quat::from_rotation_y(euler.y) * Quat::from_rotation_z(euler.z)
}

/// World-space emission points for a speaker at `position` rotated by
/// `rotation` (XYZ Euler, radians). All drivers share the speaker's forward
/// (+Z local) direction.
pub fn driver_layout(position: Vec3, rotation: Vec3) -> DriverLayout {
    let rot = speaker_rotation(rotation);
    let forward = (rot * Vec3::Z).normalize_or_zero();
    SPEAKER_DRIVERS
        .iter()
        .map(|&(offset, kind, frequency_index)| {
            let mut local = Vec3::from(offset);
            local.y += kind.height_adjustment();
            EmissionPoint {
                position: position + rot * local,
                direction: forward,
                kind,
                frequency_index,
            }
        })
        .collect()
}
