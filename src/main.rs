use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Headless progressive raytracer. Renders the scene described by a scene
/// script and writes the result to a PPM file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the scene script
    #[arg(default_value = "scene.json")]
    scene: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = raytrace_preview::load_render_settings(&args.scene)?;
    info!(
        "rendering {} scene at {}x{} from {}",
        settings.scene,
        settings.resolution.width(),
        settings.resolution.height(),
        args.scene.display()
    );

    let scene = raytrace_preview::scene_factory(settings.scene);
    let viewer = raytrace_preview::HeadlessViewer::new();
    let presenter = raytrace_preview::PpmFilePresenter::new();
    let mut controller = raytrace_preview::ProgressiveController::new(viewer, presenter);

    let outcome = controller.run(
        &scene,
        settings.resolution,
        settings.cadence,
        &settings.output_path,
        &raytrace_preview::NeverCancel,
    )?;

    match outcome {
        raytrace_preview::RenderOutcome::Completed => {
            info!("saved render to {}", settings.output_path.display());
        }
        raytrace_preview::RenderOutcome::Cancelled => info!("render cancelled"),
    }

    Ok(())
}
