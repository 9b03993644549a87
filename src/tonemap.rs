use crate::algebra::Vec3;

/// floor(255·v), with v clamped into [0, 1] first.
#[inline]
pub fn to_byte(v: f64) -> u8 {
    (255.0 * v.clamp(0.0, 1.0)).floor() as u8
}

pub fn to_rgb8(c: Vec3) -> [u8; 3] {
    [to_byte(c.0), to_byte(c.1), to_byte(c.2)]
}
