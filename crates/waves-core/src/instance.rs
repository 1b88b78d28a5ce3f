use crate::wave::Wave;

/// GPU/JS friendly view of a wave: four `vec4<f32>` per instance.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaveInstance {
    pub origin_radius: [f32; 4],
    pub color_intensity: [f32; 4],
    /// Zero direction for waves expanding in place.
    pub direction_distortion: [f32; 4],
    /// `[age, frequency, max_radius, 0]`
    pub age_frequency: [f32; 4],
}

pub const FLOATS_PER_INSTANCE: usize = std::mem::size_of::<WaveInstance>() / 4;

impl From<&Wave> for WaveInstance {
    fn from(w: &Wave) -> Self {
        let d = w.direction.unwrap_or_default();
        Self {
            origin_radius: [w.origin.x, w.origin.y, w.origin.z, w.radius],
            color_intensity: [w.color.r, w.color.g, w.color.b, w.intensity],
            direction_distortion: [d.x, d.y, d.z, w.distortion],
            age_frequency: [w.age, w.frequency, w.max_radius, 0.0],
        }
    }
}

/// Append one instance per wave to `out`.
pub fn pack_instances(waves: &[Wave], out: &mut Vec<WaveInstance>) {
    out.extend(waves.iter().map(WaveInstance::from));
}

pub fn as_floats(instances: &[WaveInstance]) -> &[f32] {
    bytemuck::cast_slice(instances)
}
