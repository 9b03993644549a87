use crate::{
    algebra::Vec3,
    camera::{self, Viewport},
    sphere::Sphere,
};
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 1600;
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;
/// Largest accepted image side, in pixels.
pub const MAX_DIMENSION: u32 = 16384;

#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct RenderJson {
    pub width: u32,
    pub aspect_ratio: f64,
}

impl Default for RenderJson {
    fn default() -> Self {
        RenderJson { width: DEFAULT_WIDTH, aspect_ratio: DEFAULT_ASPECT_RATIO }
    }
}

#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct CameraJson {
    pub pos: Vec3,
}

impl Default for CameraJson {
    fn default() -> Self {
        CameraJson { pos: Vec3::ZERO }
    }
}

#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f64,
}

impl Default for SphereDesc {
    fn default() -> Self {
        SphereDesc { center: Vec3(0.0, 0.0, -1.0), radius: 0.5 }
    }
}

/// Everything one frame needs: image size, camera and the sphere.
#[derive(Deserialize, Clone, Copy, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub render: RenderJson,
    pub camera: CameraJson,
    pub sphere: SphereDesc,
}

impl Scene {
    pub fn new(width: u32, aspect_ratio: f64, sphere: Sphere) -> Self {
        Scene {
            render: RenderJson { width, aspect_ratio },
            camera: CameraJson::default(),
            sphere: SphereDesc { center: sphere.center, radius: sphere.radius },
        }
    }

    pub fn sphere(&self) -> Sphere {
        Sphere::new(self.sphere.center, self.sphere.radius)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.render.width, self.render.aspect_ratio, self.camera.pos)
    }

    pub fn validate(&self) -> Result<()> {
        let r = &self.render;
        ensure!(r.width > 0, "image width must be positive, got {}", r.width);
        ensure!(
            r.aspect_ratio.is_finite() && r.aspect_ratio > 0.0,
            "aspect ratio must be a positive number, got {}",
            r.aspect_ratio
        );
        let height = r.width as f64 / r.aspect_ratio;
        ensure!(
            r.width <= MAX_DIMENSION && height < MAX_DIMENSION as f64 + 1.0,
            "{}x{} image exceeds the {}px limit per side",
            r.width,
            height.floor(),
            MAX_DIMENSION
        );
        ensure!(
            self.sphere.radius.is_finite() && self.sphere.radius > 0.0,
            "sphere radius must be positive, got {}",
            self.sphere.radius
        );
        // every sample point lies on z = -FOCAL_LENGTH; a camera on that
        // plane can sit on one of them and produce a zero-length ray
        ensure!(
            (self.camera.pos.2 + camera::FOCAL_LENGTH).abs() > 1e-9,
            "camera position {:?} lies on the viewport plane",
            self.camera.pos
        );
        Ok(())
    }
}

pub fn from_json(data: &str) -> Result<Scene> {
    let scene: Scene = serde_json::from_str(data).context("invalid scene json")?;
    Ok(scene)
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("could not read scene file {}", path.display()))?;
    from_json(&data).with_context(|| format!("while parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let scene = from_json("{}").unwrap();
        assert_eq!(scene.render.width, 1600);
        assert_eq!(scene.render.aspect_ratio, 16.0 / 9.0);
        assert_eq!(scene.camera.pos, Vec3::ZERO);
        assert_eq!(scene.sphere.center, Vec3(0.0, 0.0, -1.0));
        assert_eq!(scene.sphere.radius, 0.5);
        scene.validate().unwrap();
    }

    #[test]
    fn parses_full_file() {
        let scene = from_json(
            r#"{
                "render": { "width": 320, "aspect_ratio": 2.0 },
                "camera": { "pos": [0.0, 0.5, 1.0] },
                "sphere": { "center": [1.0, 0.0, -3.0], "radius": 1.25 }
            }"#,
        )
        .unwrap();
        assert_eq!(scene.render.width, 320);
        assert_eq!(scene.viewport().image_height, 160);
        assert_eq!(scene.camera.pos, Vec3(0.0, 0.5, 1.0));
        assert_eq!(scene.sphere().center, Vec3(1.0, 0.0, -3.0));
        assert_eq!(scene.sphere().radius, 1.25);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let scene = from_json(r#"{ "sphere": { "radius": 2.0 } }"#).unwrap();
        assert_eq!(scene.sphere.radius, 2.0);
        assert_eq!(scene.sphere.center, Vec3(0.0, 0.0, -1.0));
        assert_eq!(scene.render.width, DEFAULT_WIDTH);
    }

    #[test]
    fn malformed_vectors_are_rejected() {
        assert!(from_json(r#"{ "camera": { "pos": [0.0, 1.0] } }"#).is_err());
        assert!(from_json(r#"{ "spheres": [] }"#).is_err());
    }

    #[test]
    fn validation_catches_bad_input() {
        let sphere = Sphere::new(Vec3(0.0, 0.0, -1.0), 0.5);
        assert!(Scene::new(0, 1.0, sphere).validate().is_err());
        assert!(Scene::new(10, 0.0, sphere).validate().is_err());
        assert!(Scene::new(10, -1.0, sphere).validate().is_err());
        assert!(Scene::new(10, f64::NAN, sphere).validate().is_err());
        assert!(Scene::new(10, 1.0, Sphere::new(Vec3::ZERO, 0.0)).validate().is_err());
        assert!(Scene::new(10, 1.0, sphere).validate().is_ok());
    }

    #[test]
    fn camera_on_a_sample_point_is_rejected() {
        let sphere = Sphere::new(Vec3(0.0, 0.0, -1.0), 0.5);
        let mut scene = Scene::new(3, 1.0, sphere);
        for (i, j) in [(0, 0), (1, 1), (2, 0)] {
            scene.camera.pos = scene.viewport().sample_point(i, j);
            let err = scene.validate().unwrap_err();
            assert!(format!("{:#}", err).contains("viewport plane"), "{:#}", err);
        }
        // anywhere else on the plane is rejected too
        scene.camera.pos = Vec3(5.0, 5.0, -1.0);
        assert!(scene.validate().is_err());
        scene.camera.pos = Vec3(0.0, 0.0, -1.0 + 1e-12);
        assert!(scene.validate().is_err());
        // just in front of the plane every ray is well defined
        scene.camera.pos = Vec3(0.0, 0.0, -0.5);
        scene.validate().unwrap();
        let fb = crate::renderer::render(&scene);
        assert_eq!(fb.as_bytes().len(), 27);
    }

    #[test]
    fn oversized_images_are_rejected() {
        let sphere = Sphere::new(Vec3(0.0, 0.0, -1.0), 0.5);
        assert!(Scene::new(4, 1e-9, sphere).validate().is_err());
        assert!(Scene::new(MAX_DIMENSION + 1, 1.0, sphere).validate().is_err());
        assert!(Scene::new(MAX_DIMENSION, 1.0, sphere).validate().is_ok());
        assert!(Scene::new(1, 1.0 / MAX_DIMENSION as f64, sphere).validate().is_ok());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load("does/not/exist.json").unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.json"));
    }
}
