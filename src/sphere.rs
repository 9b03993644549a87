//! src/sphere.rs
//! -------------
//! Single analytic sphere and its ray intersection.

use crate::{algebra::Vec3, camera::Ray};

/// Outcome of a ray/sphere test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    Miss,
    /// Nearer root of the quadratic. May be zero or negative when the
    /// sphere is behind the ray origin.
    Surface { t: f64 },
}

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Sphere { center, radius }
    }

    /// Solves |o + t·d - c|² = r² and keeps the smaller root.
    pub fn hit(&self, ray: &Ray) -> Hit {
        let oc   = ray.origin - self.center;
        let a    = ray.direction.dot(ray.direction);
        let b    = 2.0 * oc.dot(ray.direction);
        let c    = oc.dot(oc) - self.radius * self.radius;
        let disc = b*b - 4.0*a*c;
        if disc < 0.0 { return Hit::Miss; }

        Hit::Surface { t: (-b - disc.sqrt()) / (2.0 * a) }
    }

    /// Unit outward normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Viewport;

    fn unit_scene_sphere() -> Sphere {
        Sphere::new(Vec3(0.0, 0.0, -1.0), 0.5)
    }

    #[test]
    fn center_pixel_hits_front_face() {
        let sphere = unit_scene_sphere();
        let vp = Viewport::new(101, 1.0, Vec3::ZERO);
        let ray = vp.ray_for_pixel(50, 50);
        match sphere.hit(&ray) {
            Hit::Surface { t } => {
                assert!(t > 0.0);
                let p = ray.at(t);
                assert!(((p - sphere.center).norm() - sphere.radius).abs() < 1e-9, "{:?}", p);
                assert!((t - 0.5).abs() < 1e-9, "{}", t);
            }
            Hit::Miss => panic!("center ray missed"),
        }
    }

    #[test]
    fn upward_ray_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, 1.0, 0.0));
        assert_eq!(unit_scene_sphere().hit(&ray), Hit::Miss);
    }

    #[test]
    fn sphere_behind_camera_gives_negative_t() {
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, 0.0, 1.0));
        match unit_scene_sphere().hit(&ray) {
            Hit::Surface { t } => assert!(t < 0.0, "{}", t),
            Hit::Miss => panic!("line through the center must intersect"),
        }
    }

    #[test]
    fn normal_points_outwards() {
        let sphere = unit_scene_sphere();
        let n = sphere.normal_at(Vec3(0.0, 0.0, -0.5));
        assert!((n - Vec3(0.0, 0.0, 1.0)).norm() < 1e-12);
    }
}
