use crate::{
    camera::Viewport,
    framebuffer::Framebuffer,
    scene::Scene,
    shader,
    sphere::Sphere,
};
use indicatif::ProgressBar;
use rayon::prelude::*;

pub fn pixel_color(vp: &Viewport, sphere: &Sphere, x: u32, y: u32) -> [u8; 3] {
    let ray = vp.ray_for_pixel(x, y);
    shader::shade(&ray, sphere.hit(&ray), sphere)
}

pub fn render(scene: &Scene) -> Framebuffer {
    render_with_progress(scene, None)
}

/// Rows are shaded in parallel; the frame is assembled once every row
/// is done.
pub fn render_with_progress(scene: &Scene, bar: Option<&ProgressBar>) -> Framebuffer {
    let vp = scene.viewport();
    let sphere = scene.sphere();
    let (width, height) = (vp.image_width, vp.image_height);
    log::debug!(
        "viewport {:.4}x{:.4}, du {:?}, dv {:?}, pixel00 {:?}",
        vp.viewport_width, vp.viewport_height, vp.pixel_delta_u, vp.pixel_delta_v, vp.pixel00
    );

    let rows: Vec<_> = (0..height).into_par_iter().flat_map(|y| {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            row.push(((x, y), pixel_color(&vp, &sphere, x, y)));
        }
        if let Some(b) = bar {
            b.inc(1);
        }
        row
    }).collect();

    let mut fb = Framebuffer::new(width, height);
    for ((x, y), rgb) in rows { fb.set_pixel(x as i64, y as i64, rgb); }
    fb
}

/// Single-threaded pass over the same pixels, top row first.
pub fn render_sequential(scene: &Scene) -> Framebuffer {
    let vp = scene.viewport();
    let sphere = scene.sphere();
    let mut fb = Framebuffer::new(vp.image_width, vp.image_height);
    for y in 0..vp.image_height {
        for x in 0..vp.image_width {
            fb.set_pixel(x as i64, y as i64, pixel_color(&vp, &sphere, x, y));
        }
    }
    fb
}

pub fn render_image_name(w: u32, h: u32) -> String {
    use rand::Rng;
    let suf: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6).map(char::from).collect();
    format!("renders/sphere_{w}x{h}_{suf}.png")
}
