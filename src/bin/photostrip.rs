use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use photostrip::{FilterId, LayoutKind, RenderRequest, Rgb};

#[derive(Parser, Debug)]
#[command(name = "photostrip", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite captured photos into a collage image.
    Render(RenderArgs),
    /// List the filter catalog.
    Filters,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input photos, in capture order.
    #[arg(required = true)]
    photos: Vec<PathBuf>,

    /// Layout tag (classic-strip, grid-2x2, grid-2x3, grid-2x4, grid-3x1).
    #[arg(long, default_value = "classic-strip")]
    layout: String,

    /// Filter id from the catalog (see `photostrip filters`).
    #[arg(long, default_value = "none")]
    filter: String,

    /// Frame color: "#rgb", "#rrggbb", or a named color.
    #[arg(long, default_value = "#1a1a2e")]
    frame_color: Rgb,

    /// Output path; ".jpg"/".jpeg" selects JPEG, anything else PNG.
    #[arg(long, short)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Filters => cmd_filters(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut images = Vec::with_capacity(args.photos.len());
    for path in &args.photos {
        let bytes =
            fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
        let img = photostrip::decode_image(&bytes)
            .with_context(|| format!("decode photo '{}'", path.display()))?;
        images.push(img);
    }

    let request = RenderRequest {
        images: &images,
        layout: LayoutKind::resolve(&args.layout),
        frame_color: args.frame_color,
        filter: FilterId::resolve(&args.filter),
    };
    let surface = photostrip::render(&request)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => {
            let (w, h) = (surface.width(), surface.height());
            let rgba = image::RgbaImage::from_raw(w, h, surface.into_raw())
                .context("surface buffer shape")?;
            image::DynamicImage::ImageRgba8(rgba)
                .to_rgb8()
                .save_with_format(&args.out, image::ImageFormat::Jpeg)
                .with_context(|| format!("write jpeg '{}'", args.out.display()))?;
        }
        _ => {
            image::save_buffer_with_format(
                &args.out,
                surface.data(),
                surface.width(),
                surface.height(),
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", args.out.display()))?;
        }
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_filters() -> anyhow::Result<()> {
    for id in FilterId::ALL {
        let d = id.descriptor();
        println!(
            "{:<24} {:<24} grain {:.2}  vignette {:+.2}  {}",
            d.id.as_str(),
            d.name,
            d.grain_intensity,
            d.vignette_strength,
            d.description
        );
    }
    Ok(())
}
