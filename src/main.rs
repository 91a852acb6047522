use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use embertrace::{
    driver::{self, Config},
    error::RenderError,
    scene,
};

/// The default master seed, fixed so a bare `embertrace render` is
/// reproducible across runs and across tile/thread counts.
const DEFAULT_SEED: u64 = 0xE3B0_C442_98FC_1C14;

#[derive(Parser, Debug)]
#[command(name = "embertrace", about = "Offline Monte-Carlo path tracer")]
struct Cli {
    #[arg(long, default_value_t = 1.5)]
    aspect_ratio: f32,

    #[arg(long, default_value_t = 225)]
    height: u32,

    #[arg(long = "samples-per-pixel", default_value_t = 50)]
    samples_per_pixel: u32,

    #[arg(long, default_value_t = 12)]
    max_depth: u32,

    #[arg(long, default_value_t = 8)]
    tile_count: u32,

    #[arg(long, default_value_t = false)]
    bilinear_filter: bool,

    #[arg(long, default_value_t = 0)]
    scene: u32,

    #[arg(long, default_value_t = default_threads())]
    threads: usize,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(long, default_value = "result.png")]
    out: PathBuf,
}

fn default_threads() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RenderError> {
    let config = Config {
        aspect_ratio: cli.aspect_ratio,
        height_pixels: cli.height,
        samples_per_pixel: cli.samples_per_pixel,
        max_depth: cli.max_depth,
        tile_count: cli.tile_count,
        bilinear_filter: cli.bilinear_filter,
        scene_index: cli.scene,
        threads: cli.threads,
        seed: cli.seed,
        out: cli.out,
    };
    config.validate()?;

    let mut scene_rng = StdRng::seed_from_u64(config.seed);
    let built = scene::builders::build(config.scene_index, config.aspect_ratio, &mut scene_rng)?;

    let framebuffer = driver::render(&built.camera, &built.world, built.background, &config)?;

    embertrace::asset_loader::img_loader::write_framebuffer(
        &config.out,
        framebuffer.width() as u32,
        framebuffer.height() as u32,
        framebuffer.as_linear_slice(),
    )?;

    log::info!("wrote {}", config.out.display());
    Ok(())
}
