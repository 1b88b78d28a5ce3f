//! Wall, floor and ceiling hits.
//!
//! Surfaces are tested in a fixed order and the first hit wins, so a wave
//! touching a corner only reflects off one surface per tick.

use crate::config::{RoomBounds, WaveConfig};
use crate::constants::REFLECTED_START_RADIUS;
use crate::wave::{sanitize_dt, update_wave, Wave, WaveIds};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    BackWall,
    FrontWall,
    LeftWall,
    RightWall,
    Floor,
    Ceiling,
}

impl Surface {
    pub const CHECK_ORDER: [Surface; 6] = [
        Surface::BackWall,
        Surface::FrontWall,
        Surface::LeftWall,
        Surface::RightWall,
        Surface::Floor,
        Surface::Ceiling,
    ];

    /// Unit normal pointing back into the room.
    pub fn normal(self) -> Vec3 {
        match self {
            Surface::BackWall => Vec3::Z,
            Surface::FrontWall => Vec3::NEG_Z,
            Surface::LeftWall => Vec3::X,
            Surface::RightWall => Vec3::NEG_X,
            Surface::Floor => Vec3::Y,
            Surface::Ceiling => Vec3::NEG_Y,
        }
    }

    fn touched_by(self, origin: Vec3, radius: f32, room: &RoomBounds) -> bool {
        match self {
            Surface::BackWall => origin.z - radius <= room.back_wall,
            Surface::FrontWall => origin.z + radius >= room.front_wall,
            Surface::LeftWall => origin.x - radius <= room.left_wall,
            Surface::RightWall => origin.x + radius >= room.right_wall,
            Surface::Floor => origin.y - radius <= room.floor,
            Surface::Ceiling => origin.y + radius >= room.ceiling,
        }
    }
}

/// First surface the wave's sphere touches, in [`Surface::CHECK_ORDER`].
pub fn detect_surface(wave: &Wave, room: &RoomBounds) -> Option<Surface> {
    Surface::CHECK_ORDER
        .into_iter()
        .find(|s| s.touched_by(wave.origin, wave.radius, room))
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollisionOutcome {
    /// The input wave, damped if it hit something.
    pub wave: Wave,
    /// New wave bouncing off the surface, if strong enough.
    pub reflected: Option<Wave>,
    pub surface: Option<Surface>,
}

/// Damp a wave that touches a room surface and spawn its reflection.
///
/// Without a hit, distortion relaxes linearly toward zero.
pub fn check_wall_collisions(
    wave: &Wave,
    dt: f32,
    config: &WaveConfig,
    ids: &mut WaveIds,
) -> CollisionOutcome {
    let surface = detect_surface(wave, &config.room);
    let mut hit = wave.clone();

    let Some(surface) = surface else {
        let decay = config.distortion_decay_per_sec * sanitize_dt(dt);
        hit.distortion = (wave.distortion - decay).max(0.0);
        return CollisionOutcome {
            wave: hit,
            reflected: None,
            surface: None,
        };
    };

    hit.intensity = wave.intensity * config.reflection_damping;
    hit.distortion = (wave.distortion + config.distortion_step).min(1.0);
    let reflected = reflect(&hit, surface, config, ids);
    if let Some(r) = &reflected {
        log::trace!("{} reflected off {:?} as {}", hit.id, surface, r.id);
    }
    CollisionOutcome {
        wave: hit,
        reflected,
        surface: Some(surface),
    }
}

fn reflect(
    wave: &Wave,
    surface: Surface,
    config: &WaveConfig,
    ids: &mut WaveIds,
) -> Option<Wave> {
    let intensity = wave.intensity * config.reflection_damping;
    if intensity <= config.min_reflected_intensity {
        return None;
    }
    let normal = surface.normal();
    Some(Wave {
        id: ids.next_id(),
        origin: wave.origin + normal * wave.radius,
        radius: REFLECTED_START_RADIUS,
        intensity,
        age: 0.0,
        distortion: config.distortion_step,
        direction: wave.direction.map(|d| mirror_into_room(d, normal)),
        ..wave.clone()
    })
}

// Reflections do not inherit the parent's direction as-is: the component
// pointing out through the wall is flipped so the echo travels back into
// the room. Directions already heading into the room are kept.
fn mirror_into_room(direction: Vec3, normal: Vec3) -> Vec3 {
    let along = direction.dot(normal);
    if along < 0.0 {
        direction - 2.0 * along * normal
    } else {
        direction
    }
}

/// One full physics step: [`update_wave`] followed by
/// [`check_wall_collisions`] on the updated wave.
pub fn update_wave_with_collisions(
    wave: &Wave,
    dt: f32,
    config: &WaveConfig,
    ids: &mut WaveIds,
) -> CollisionOutcome {
    let updated = update_wave(wave, dt, config);
    check_wall_collisions(&updated, dt, config, ids)
}
