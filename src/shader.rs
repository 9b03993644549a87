use crate::{
    algebra::Vec3,
    camera::Ray,
    sphere::{Hit, Sphere},
    tonemap,
};

const WHITE: Vec3 = Vec3(1.0, 1.0, 1.0);
const SKY_BLUE: Vec3 = Vec3(0.5, 0.7, 1.0);

/// White at the bottom of the sky, light blue at the top.
pub fn sky(direction: Vec3) -> Vec3 {
    let a = 0.5 * (direction.1 + 1.0);
    WHITE * (1.0 - a) + SKY_BLUE * a
}

/// Normal components mapped from [-1, 1] to [0, 1], xyz -> rgb.
pub fn normal_color(normal: Vec3) -> Vec3 {
    normal.map(|c| 0.5 * (c + 1.0))
}

pub fn shade(ray: &Ray, hit: Hit, sphere: &Sphere) -> [u8; 3] {
    let color = match hit {
        Hit::Surface { t } if t > 0.0 => normal_color(sphere.normal_at(ray.at(t))),
        // misses and hits behind the camera both show sky
        Hit::Surface { .. } | Hit::Miss => sky(ray.direction),
    };
    tonemap::to_rgb8(color)
}
