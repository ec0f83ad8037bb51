//! Vectile CLI - render a GeoJSON feature collection to a PNG map tile.
//!
//! This binary is a thin wrapper over the `vectile` library: it parses
//! arguments, initializes logging, loads the input features, and wires the
//! tessellate/rasterize pipeline to the filesystem.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vectile::canvas::PixmapCanvas;
use vectile::geojson::load_features;
use vectile::geometry::BoundingBox;
use vectile::queue::DrawQueue;
use vectile::render::{rasterize_onto, RenderError};
use vectile::telemetry::RenderMetrics;
use vectile::tessellate::tessellate;

#[derive(Debug, Parser)]
#[command(
    name = "vectile",
    version,
    about = "Rasterize tagged vector map features into a PNG map tile"
)]
struct Cli {
    /// GeoJSON FeatureCollection to render.
    input: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "tile.png")]
    output: PathBuf,

    /// Tile width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Tile height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// TrueType/OpenType font for place labels (labels are skipped
    /// without one).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = RenderMetrics::new();

    let input = std::fs::read_to_string(&cli.input)?;
    let features = load_features(&input)?;
    metrics.features_loaded(features.len() as u64);
    info!(features = features.len(), input = %cli.input.display(), "loaded features");

    let mut bounding_box = BoundingBox::empty();
    let mut queue = DrawQueue::new();
    let mut shapes = 0u64;
    for feature in &features {
        shapes += tessellate(feature, &mut bounding_box, &mut queue) as u64;
    }
    metrics.shapes_enqueued(shapes);

    let mut canvas =
        PixmapCanvas::new(cli.width, cli.height).ok_or(RenderError::InvalidDimensions {
            width: cli.width,
            height: cli.height,
        })?;
    if let Some(font_path) = &cli.font {
        let bytes = std::fs::read(font_path)?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|err| format!("failed to load font {}: {err}", font_path.display()))?;
        canvas = canvas.with_font(font);
    }

    rasterize_onto(queue, &bounding_box, &mut canvas);
    metrics.tile_rendered();

    canvas.to_rgba_image().save(&cli.output)?;
    info!(output = %cli.output.display(), "wrote tile ({})", metrics.snapshot());
    Ok(())
}
