//! # geoboundary CLI
//!
//! Outlines a raster, or a region of it, in geographic coordinates and writes
//! the result as GeoJSON. Outlines crossing the antimeridian are split into
//! pieces that each stay inside `[-180, 180]`.

use anyhow::{Context, Result};
use clap::Parser;
use geoboundary_geometry::{
    compute_geo_boundary_paths, compute_normalized_geo_boundary, AffineGeoCoding,
    BoundaryOptions, PixelRect, SubPath,
};
use log::{debug, error};

mod cli;

use cli::{OutputDestination, OutputFormat};

/// Command-line interface for geoboundary
#[derive(Parser)]
#[command(name = "geoboundary")]
#[command(about = "Outline raster regions as antimeridian-safe geographic polygons")]
#[command(long_about = "Traces the border of a raster region, maps it to lon/lat and
splits it at the antimeridian:
  geoboundary --width 100 --height 100 --affine 175,0.1,0,10,0,-0.1
  geoboundary --width 100 --height 100 --affine 175,0.1,0,10,0,-0.1 --region 10,10,50,50
  geoboundary --width 100 --height 100 --affine 175,0.1,0,10,0,-0.1 --format boundary

The affine transform maps pixel (x, y) to
  lon = c0 + x*c1 + y*c2
  lat = c3 + x*c4 + y*c5")]
#[command(version)]
struct Cli {
    /// Raster width in pixels
    #[arg(long)]
    width: i32,

    /// Raster height in pixels
    #[arg(long)]
    height: i32,

    /// Region to outline as "x,y,width,height" (default: whole raster)
    #[arg(long, value_parser = cli::parse_region, allow_hyphen_values = true)]
    region: Option<PixelRect>,

    /// Sampling step in pixels; 0 or less emits corners only (default: an eighth of the shorter side)
    #[arg(long, allow_negative_numbers = true)]
    step: Option<i32>,

    /// Sample pixel centres instead of pixel corners
    #[arg(long)]
    pixel_center: bool,

    /// Affine pixel to lon/lat coefficients "c0,c1,c2,c3,c4,c5"
    #[arg(long, value_parser = cli::parse_affine, allow_hyphen_values = true)]
    affine: Option<[f64; 6]>,

    /// Keep longitudes as computed instead of folding them into [-180, 180)
    #[arg(long)]
    no_wrap: bool,

    /// Output document
    #[arg(long, value_enum, default_value_t = OutputFormat::Geojson)]
    format: OutputFormat,

    /// Output file path, or "-" for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if cli.verbose {
        eprintln!("🦋 geoboundary v{} starting...", env!("CARGO_PKG_VERSION"));
    }

    let geo_coding = cli
        .affine
        .map(|c| AffineGeoCoding::new(c, !cli.no_wrap))
        .transpose()
        .context("Invalid --affine transform")?;

    let rect = match cli.region {
        Some(rect) => rect,
        None => PixelRect::of_raster(cli.width, cli.height)?,
    };
    let options = BoundaryOptions {
        step: cli.step,
        use_pixel_center: cli.pixel_center,
    };
    let step = options.resolve_step(&rect);
    debug!(
        "outlining {}x{} pixels at ({}, {}) with step {step}",
        rect.width(),
        rect.height(),
        rect.x(),
        rect.y()
    );

    let output = cli::resolve_output(&cli.output);
    match cli.format {
        OutputFormat::Geojson => {
            let paths =
                compute_geo_boundary_paths(&rect, step, options.use_pixel_center, &geo_coding)?;
            write_geojson(&paths, &output)?;
        }
        OutputFormat::Boundary => {
            let boundary = compute_normalized_geo_boundary(
                &rect,
                step,
                options.use_pixel_center,
                &geo_coding,
            )?;
            let report = cli::boundary_report(boundary.outcome, &boundary.positions);
            cli::write_json(&report, &output)?;
        }
    }

    if let OutputDestination::File(path) = &output {
        if cli.verbose {
            eprintln!("📁 Saved to: {path}");
        }
    }

    Ok(())
}

fn write_geojson(paths: &[SubPath], output: &OutputDestination) -> Result<()> {
    debug!("writing {} polygon(s)", paths.len());
    cli::write_json(&cli::feature_collection(paths), output)
}
