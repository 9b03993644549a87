pub mod algebra;
pub mod camera;
pub mod display;
pub mod framebuffer;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod sphere;
pub mod tonemap;

pub use camera::{Ray, Viewport};
pub use framebuffer::Framebuffer;
pub use renderer::render;
pub use scene::Scene;
pub use sphere::{Hit, Sphere};
