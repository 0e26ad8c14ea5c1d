use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::info;

use lumen::{Raster, SceneConfig};

/// Renders a JSON scene description into an image file.
#[derive(Debug, Parser)]
#[command(name = "lumen", version)]
struct Args {
    /// Scene description.
    scene: PathBuf,
    /// Output image, format chosen by extension (png, bmp).
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1920)]
    width: usize,
    #[arg(long, default_value_t = 1080)]
    height: usize,
    /// Bake the scene into camera space before rendering.
    #[arg(long)]
    bake: bool,
    /// Worker threads, defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
    }

    let now = Instant::now();

    let (mut scene, mut camera) = SceneConfig::load(&args.scene)?.build()?;
    info!(
        "loaded {}: camera at {:?} looking at {:?}",
        args.scene.display(),
        camera.position(),
        camera.look_at()
    );

    if args.bake {
        scene.bake(&camera.view_matrix());
        camera = camera.in_view_space();
        info!("scene baked into camera space");
    }

    let mut raster = Raster::new(args.width, args.height);
    camera.render(&scene, &mut raster);

    raster.save(&args.output)?;
    info!("wrote {} in {} ms", args.output.display(), now.elapsed().as_millis());

    Ok(())
}
