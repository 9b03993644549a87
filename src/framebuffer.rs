/// Packed RGB24 image, row-major, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Framebuffer {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn as_bytes(&self) -> &[u8] { &self.pixels }
    pub fn into_bytes(self) -> Vec<u8> { self.pixels }

    /// Stores one pixel. Coordinates outside the image are ignored and
    /// reported as `false`.
    pub fn set_pixel(&mut self, x: i64, y: i64, rgb: [u8; 3]) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        match self.pixels.get_mut(idx..idx + 3) {
            Some(px) => {
                px.copy_from_slice(&rgb);
                true
            }
            None => false,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels.get(idx..idx + 3).map(|p| [p[0], p[1], p[2]])
    }
}
