//! src/camera.rs
//! -------------
//! Pinhole camera looking down -z through a fixed viewport plane.

use crate::algebra::Vec3;

pub const FOCAL_LENGTH: f64 = 1.0;
pub const VIEWPORT_HEIGHT: f64 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// The direction is normalized here, so every ray leaving this
    /// constructor has unit length.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction: direction.normalize() }
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub image_width: u32,
    pub image_height: u32,
    pub aspect_ratio: f64,
    pub focal_length: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub pixel_delta_u: Vec3,
    pub pixel_delta_v: Vec3,
    pub pixel00: Vec3,
    pub camera_pos: Vec3,
}

/// floor(W / A), never below one row.
pub fn image_height(width: u32, aspect_ratio: f64) -> u32 {
    ((width as f64 / aspect_ratio) as u32).max(1)
}

impl Viewport {
    pub fn new(image_width: u32, aspect_ratio: f64, camera_pos: Vec3) -> Self {
        let image_height = image_height(image_width, aspect_ratio);

        // uses the real pixel ratio, not the requested one
        let viewport_height = VIEWPORT_HEIGHT;
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);

        let pixel_delta_u = Vec3(viewport_width / image_width as f64, 0.0, 0.0);
        // rows grow downwards, world y grows upwards
        let pixel_delta_v = Vec3(0.0, -viewport_height / image_height as f64, 0.0);

        let upper_left = Vec3(-viewport_width / 2.0, viewport_height / 2.0, -FOCAL_LENGTH);
        let pixel00 = upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Viewport {
            image_width,
            image_height,
            aspect_ratio,
            focal_length: FOCAL_LENGTH,
            viewport_width,
            viewport_height,
            pixel_delta_u,
            pixel_delta_v,
            pixel00,
            camera_pos,
        }
    }

    /// World position of the center of pixel (i, j).
    pub fn sample_point(&self, i: u32, j: u32) -> Vec3 {
        self.pixel00 + i as f64 * self.pixel_delta_u + j as f64 * self.pixel_delta_v
    }

    pub fn ray_for_pixel(&self, i: u32, j: u32) -> Ray {
        let direction = self.sample_point(i, j) - self.camera_pos;
        Ray::new(self.camera_pos, direction)
    }
}
