use {
    anyhow::{Context, Result, bail},
    camframe_base::{LogConfig, init_logger, log},
    camframe_camera::{FrameConverter, MemoryFrame},
    camframe_image::save_png,
};

fn parse_dimension(arg: &str, what: &str) -> Result<u32> {
    arg.parse()
        .with_context(|| format!("invalid {what}: {arg}"))
}

fn run(args: &[String]) -> Result<()> {
    let [_, width, height, input, out_dir, name] = args else {
        bail!(
            "Usage: {} <width> <height> <input.yuv> <out_dir> <name>",
            args.first().map(String::as_str).unwrap_or("nv21_to_png")
        );
    };

    let width = parse_dimension(width, "width")?;
    let height = parse_dimension(height, "height")?;
    let data = std::fs::read(input).with_context(|| format!("failed to read {input}"))?;
    log::info!("read {} bytes from {}", data.len(), input);

    let frame = MemoryFrame::from_planar_dump(width, height, data)
        .with_context(|| format!("{input} is not a {width}x{height} 4:2:0 frame"))?
        .with_on_close(|| log::debug!("frame released"));

    let rgb = FrameConverter::new()
        .try_convert(Some(frame))
        .context("frame conversion failed")?;

    let path = save_png(&rgb, out_dir, name).context("failed to write png")?;
    log::info!("wrote {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn main() {
    if let Err(e) = init_logger(&LogConfig::default()) {
        eprintln!("failed to initialize logging: {e}");
    }

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
