//! alphamesh CLI
//!
//! Generates a contour mesh from the alpha channel of an image and writes it
//! as a Wavefront OBJ file.

use alphamesh_contour::{ContourConfig, QuadtreeContour};
use alphamesh_io::{write_obj_file, ObjWriteOptions, TextureAsset};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "alphamesh")]
#[command(version)]
#[command(about = "Build a quadtree contour mesh from an image's alpha channel", long_about = None)]
struct Cli {
    /// Input image (PNG, TGA, ...)
    input: PathBuf,

    /// Output OBJ file; defaults to the input path with an .obj extension
    #[arg(long)]
    output: Option<PathBuf>,

    /// Quadtree depth; values below 1 are treated as 1
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    subdivision: i32,

    /// Minimum alpha for a pixel to be kept, in [0, 1]
    #[arg(short, long, default_value_t = 0.5, allow_negative_numbers = true)]
    alpha_threshold: f32,

    /// Merge rectangles that share a full edge
    #[arg(short, long)]
    optimize: bool,

    /// Treat the bottom image row as row 0
    #[arg(long)]
    flip_y: bool,

    /// Do not write vertex normals
    #[arg(long)]
    no_normals: bool,

    /// Write faces clockwise instead of the OBJ counter-clockwise convention
    #[arg(long)]
    clockwise: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ContourConfig {
        ContourConfig::with_params(self.subdivision, self.alpha_threshold, self.optimize)
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("obj"))
    }

    fn write_options(&self, config: &ContourConfig) -> ObjWriteOptions {
        ObjWriteOptions::new()
            .with_normals(!self.no_normals)
            .with_clockwise(self.clockwise)
            .with_comment(format!(
                "alphamesh {}\nsource: {}\nsubdivision: {}, alpha threshold: {}, optimize: {}",
                env!("CARGO_PKG_VERSION"),
                self.input.display(),
                config.effective_subdivision_level(),
                config.effective_alpha_threshold(),
                config.optimize
            ))
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let output_path = cli.output_path();

    let mut asset = TextureAsset::open(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let output = {
        let texture = asset
            .readable()
            .with_context(|| format!("Failed to decode {}", cli.input.display()))?;
        QuadtreeContour::new(config)
            .build_detailed(&texture.alpha(cli.flip_y))
            .context("Contour generation failed")?
    };

    write_obj_file(&output.mesh, &output_path, &cli.write_options(&config))
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    let stats = &output.stats;
    info!(
        tiles = stats.tile_count,
        divided = stats.divided_rects,
        kept = stats.final_rects,
        joints = stats.joints_merged,
        "contour built"
    );
    println!(
        "{} -> {}: {} rects, {} vertices, {} triangles",
        cli.input.display(),
        output_path.display(),
        stats.final_rects,
        stats.vertex_count,
        stats.triangle_count
    );

    Ok(())
}
