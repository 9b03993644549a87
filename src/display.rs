//! Where a finished frame goes once rendering is done.

use crate::framebuffer::Framebuffer;
use anyhow::{Context, Result};
use image::RgbImage;
use std::{fs, path::{Path, PathBuf}};

pub trait Display {
    fn present(&mut self, frame: &Framebuffer) -> Result<()>;
}

pub fn to_rgb_image(frame: &Framebuffer) -> Result<RgbImage> {
    RgbImage::from_raw(frame.width(), frame.height(), frame.as_bytes().to_vec())
        .context("framebuffer size does not match its dimensions")
}

/// Writes the frame to disk; the format follows the file extension.
pub struct ImageFile {
    path: Option<PathBuf>,
    written: Option<PathBuf>,
}

impl ImageFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        ImageFile { path, written: None }
    }

    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl Display for ImageFile {
    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        let name = self.path.clone().unwrap_or_else(|| {
            PathBuf::from(crate::renderer::render_image_name(frame.width(), frame.height()))
        });
        if let Some(dir) = name.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        to_rgb_image(frame)?
            .save(&name)
            .with_context(|| format!("failed to save {}", name.display()))?;
        log::info!("Saved → {}", name.display());
        self.written = Some(name);
        Ok(())
    }
}

#[cfg(feature = "preview")]
pub use window::Window;

#[cfg(feature = "preview")]
mod window {
    use super::Display;
    use crate::framebuffer::Framebuffer;
    use anyhow::{anyhow, Result};
    use minifb::{Key, WindowOptions};

    pub struct Window {
        title: String,
    }

    impl Window {
        pub fn new(title: impl Into<String>) -> Self {
            Window { title: title.into() }
        }
    }

    /// RGB24 to minifb's 0RGB words.
    pub(crate) fn pack(frame: &Framebuffer) -> Vec<u32> {
        frame
            .as_bytes()
            .chunks_exact(3)
            .map(|p| (p[0] as u32) << 16 | (p[1] as u32) << 8 | p[2] as u32)
            .collect()
    }

    impl Display for Window {
        /// Shows the static frame and blocks until the window is closed or
        /// Escape is pressed.
        fn present(&mut self, frame: &Framebuffer) -> Result<()> {
            let (w, h) = (frame.width() as usize, frame.height() as usize);
            let buffer = pack(frame);
            let mut window = minifb::Window::new(&self.title, w, h, WindowOptions::default())
                .map_err(|e| anyhow!("could not create window: {}", e))?;
            window.set_target_fps(60);

            while window.is_open() && !window.is_key_down(Key::Escape) {
                window
                    .update_with_buffer(&buffer, w, h)
                    .map_err(|e| anyhow!("texture update failed: {}", e))?;
            }
            log::info!("window closed");
            Ok(())
        }
    }

}
