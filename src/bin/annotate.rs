//! annotate - run detection post-processing on one image plus a JSON
//! detection set, producing the annotated image and a summary line.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use sitewatch_kernel::{summarize, Annotator, ClassCatalog, Detection};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image (jpeg or png).
    image: PathBuf,
    /// JSON file holding the frame's detections.
    detections: PathBuf,
    /// Output path for the annotated image (defaults next to the input).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Box outline thickness in pixels.
    #[arg(long, default_value_t = 2)]
    box_thickness: u32,
    /// Label text height in pixels.
    #[arg(long, default_value_t = 16.0)]
    label_scale: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.detections)
        .with_context(|| format!("reading detections from {}", args.detections.display()))?;
    let detections: Vec<Detection> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing detections from {}", args.detections.display()))?;

    let image = image::open(&args.image)
        .with_context(|| format!("opening image {}", args.image.display()))?
        .to_rgb8();

    let catalog = ClassCatalog::ppe();
    for det in &detections {
        let label = catalog.resolve(det.class_index);
        if label.is_fallback() {
            log::warn!(
                "class index {} outside catalog; labelling as {}",
                det.class_index,
                label.name()
            );
        }
    }

    let annotator = Annotator::with_style(args.box_thickness, args.label_scale)?;
    let annotated = annotator.annotate(&image, &detections, &catalog);
    let summary = summarize(&detections, &catalog);

    let out_path = args.out.unwrap_or_else(|| {
        let mut path = args.image.clone();
        path.set_extension("annotated.png");
        path
    });
    annotated
        .save(&out_path)
        .with_context(|| format!("writing annotated image to {}", out_path.display()))?;

    println!("{}", summary);
    println!("annotated image: {}", out_path.display());
    Ok(())
}
