use sphere_tracer::{
    display::{Display, ImageFile},
    renderer,
    scene::{self, Scene},
};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::{path::PathBuf, time::Instant};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case", about = "Renders one sphere against a sky gradient")]
struct Opt {
    /// JSON scene file; built-in defaults are used when omitted
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,
    #[structopt(long)]
    width: Option<u32>,
    #[structopt(long)]
    aspect_ratio: Option<f64>,
    /// Output image; defaults to a generated name under renders/
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    #[structopt(short, long)]
    quiet: bool,
    /// Show the frame in a window instead of writing a file
    #[structopt(long)]
    window: bool,
    #[structopt(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let opts = Opt::from_args();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&opts.log_level)).init();

    if let Err(e) = run(opts) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opt) -> Result<()> {
    // ── scene ─────────────────────────────────────────────────────────────
    let mut scene = match &opts.scene {
        Some(path) => scene::load(path)?,
        None => Scene::default(),
    };
    if let Some(w) = opts.width { scene.render.width = w; }
    if let Some(a) = opts.aspect_ratio { scene.render.aspect_ratio = a; }
    scene.validate()?;

    let vp = scene.viewport();
    log::info!(
        "{}x{} image (aspect {:.4}), camera {:?}, sphere {:?} r={:.4}",
        vp.image_width, vp.image_height, vp.aspect_ratio,
        scene.camera.pos, scene.sphere.center, scene.sphere.radius
    );

    // ── render ────────────────────────────────────────────────────────────
    let bar = if !opts.quiet {
        let pb = ProgressBar::new(vp.image_height as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")?);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let frame = renderer::render_with_progress(&scene, bar.as_ref());
    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }
    log::info!("rendered in {:.2?}", start.elapsed());

    // ── present ───────────────────────────────────────────────────────────
    if opts.window {
        return show_window(&frame);
    }
    ImageFile::new(opts.output).present(&frame)
}

#[cfg(feature = "preview")]
fn show_window(frame: &sphere_tracer::Framebuffer) -> Result<()> {
    sphere_tracer::display::Window::new("Gradient").present(frame)
}

#[cfg(not(feature = "preview"))]
fn show_window(_frame: &sphere_tracer::Framebuffer) -> Result<()> {
    anyhow::bail!("built without the `preview` feature; rebuild with --features preview")
}
