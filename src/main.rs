use std::path::PathBuf;

use anyhow::{Context, bail};
use image_source_rs::image_pipeline::{FramePipeline, JpegConfig, PackedFormat, PipelineConfig};
use image_source_rs::logger;

use tracing::{error, info};

struct Args {
    input: PathBuf,
    output: PathBuf,
    width: usize,
    height: usize,
    format: PackedFormat,
    rotation: u32,
}

fn parse_format(name: &str) -> anyhow::Result<PackedFormat> {
    let format = match name.to_ascii_lowercase().as_str() {
        "mono12packed" => PackedFormat::Mono12Packed,
        "mono10p" => PackedFormat::Mono10p,
        "mono12p" => PackedFormat::Mono12p,
        other => {
            let bits = other
                .strip_prefix("mono")
                .and_then(|rest| rest.strip_suffix('p'))
                .and_then(|bits| bits.parse::<u16>().ok());
            match bits {
                Some(bpp) => PackedFormat::MonoXXp(bpp),
                None => bail!("unknown packed format '{}'", name),
            }
        }
    };
    Ok(format)
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        bail!("usage: image_source_rs <input.raw> <width> <height> <format> [rotation] [output.jpg]");
    }

    Ok(Args {
        input: PathBuf::from(&args[0]),
        width: args[1].parse().context("width must be an integer")?,
        height: args[2].parse().context("height must be an integer")?,
        format: parse_format(&args[3])?,
        rotation: match args.get(4) {
            Some(angle) => angle.parse().context("rotation must be an integer")?,
            None => 0,
        },
        output: args
            .get(5)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output.jpg")),
    })
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = parse_args()?;
    info!("Starting image_source...");

    let config = PipelineConfig::builder()
        .packed_format(Some(args.format))
        .rotation(args.rotation)
        .jpeg(Some(
            JpegConfig::builder()
                .comment(args.input.display().to_string())
                .build(),
        ))
        .build();
    let pipeline = FramePipeline::new(config);

    info!("Packed format: {:?}", args.format);
    info!("Rotation: {} degrees", pipeline.config().rotation);

    let packed = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    match pipeline.run(&packed, args.width, args.height) {
        Ok((frame, timings)) => {
            timings.log_summary();
            std::fs::write(&args.output, frame.buffer.as_bytes())
                .with_context(|| format!("writing {}", args.output.display()))?;
            info!("Wrote {}", args.output.display());
        }
        Err(e) => {
            error!("Processing failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
