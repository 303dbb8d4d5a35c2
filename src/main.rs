use clap::Parser;
use frame_annotator::config::{self, AppConfig};
use frame_annotator::export::DirectoryPackager;
use frame_annotator::frames::ImageFileSource;
use frame_annotator::panel::Workspace;
use frame_annotator::session::{SessionScript, replay};
use frame_annotator::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Replay a recorded labeling session and export it as a COCO dataset
#[derive(Parser, Debug)]
#[command(name = "frame_annotator", version)]
struct Args {
    /// Session script (JSON) listing still images and pointer events
    session: PathBuf,
    /// Directory the annotations file and image archive are written to
    output: PathBuf,
    /// Config file to use instead of the per-user one
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(args: &Args, config: AppConfig) -> Result<()> {
    let script = SessionScript::load(&args.session)?;
    let mut workspace = Workspace::new(config);
    let exporter = workspace.exporter();
    let config = workspace.config().clone();

    let panel = workspace.panel_mut(1)?;
    if let Some(category) = &script.category {
        panel.rename(category.clone());
    }

    let mut source = ImageFileSource::new(script.images.clone());
    while source.remaining() > 0 {
        panel.capture(&mut source)?;
    }

    replay(panel, &script.events)?;
    // A script may end mid-drag; drop that gesture rather than refuse export.
    panel.cancel_edit();

    let mut packager = DirectoryPackager::new(&args.output);
    let result = panel.export_to(&exporter, &config, &mut packager)?;
    info!(
        output = %args.output.display(),
        images = result.images_exported,
        annotations = result.annotations_exported,
        "export complete"
    );
    Ok(())
}

fn load_app_config(path: Option<&Path>) -> AppConfig {
    match path {
        Some(path) => config::load_or_default(path),
        None => config::load_config(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_app_config(args.config.as_deref());
    run(&args, config).inspect_err(|e| error!(error = %e, "session failed"))
}
