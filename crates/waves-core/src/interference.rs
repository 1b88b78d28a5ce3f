use crate::color::Rgb;
use crate::constants::{INTERFERENCE_MAX_BONUS, INTERFERENCE_SHARE};
use crate::wave::Wave;

/// Pairwise constructive interference.
///
/// Two waves interfere when their origins are closer than both the sum of
/// their radii and `threshold`. The summed intensity gets a bonus of up to
/// 30% proportional to the overlap, is capped at 1, and each partner keeps
/// 60% of it. Both partners take the intensity-weighted average color.
pub fn calculate_wave_interference(a: &Wave, b: &Wave, threshold: f32) -> Option<(Wave, Wave)> {
    let distance = a.origin.distance(b.origin);
    let combined_radius = a.radius + b.radius;
    if !(distance < combined_radius && distance < threshold) {
        return None;
    }

    let overlap = 1.0 - distance / combined_radius;
    let bonus = 1.0 + INTERFERENCE_MAX_BONUS * overlap;
    let combined = ((a.intensity + b.intensity) * bonus).min(1.0);
    let intensity = combined * INTERFERENCE_SHARE;
    let color = Rgb::blend(a.color, a.intensity, b.color, b.intensity);

    Some((
        Wave {
            intensity,
            color,
            ..a.clone()
        },
        Wave {
            intensity,
            color,
            ..b.clone()
        },
    ))
}

/// Single linear interference pass over a frame's waves.
///
/// Each wave not yet consumed is checked against every later unconsumed
/// wave (always using its own pre-merge values). A partner that interferes
/// is consumed: its contribution lives on in the surviving wave and it is
/// dropped from the output. When several partners match, the last match
/// determines the survivor's values.
pub fn merge_interfering(waves: Vec<Wave>, threshold: f32) -> Vec<Wave> {
    merge_interfering_with(waves, threshold, |_| {})
}

/// [`merge_interfering`], handing every consumed partner to `on_consumed`
/// (e.g. to return it to a pool).
pub fn merge_interfering_with(
    waves: Vec<Wave>,
    threshold: f32,
    mut on_consumed: impl FnMut(Wave),
) -> Vec<Wave> {
    let mut slots: Vec<Option<Wave>> = waves.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(slots.len());
    for i in 0..slots.len() {
        let Some(wave) = slots[i].take() else {
            continue;
        };
        let mut survivor = None;
        for slot in &mut slots[i + 1..] {
            let merged = match slot.as_ref() {
                Some(partner) => calculate_wave_interference(&wave, partner, threshold),
                None => None,
            };
            if let Some((merged, _)) = merged {
                if let Some(partner) = slot.take() {
                    on_consumed(partner);
                }
                survivor = Some(merged);
            }
        }
        out.push(survivor.unwrap_or(wave));
    }
    out
}
