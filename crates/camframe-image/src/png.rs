use crate::*;
use camframe_base::Tensor;
use crates_image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

fn color_type(channels: usize) -> Result<ExtendedColorType, ImageError> {
    match channels {
        1 => Ok(ExtendedColorType::L8),
        3 => Ok(ExtendedColorType::Rgb8),
        4 => Ok(ExtendedColorType::Rgba8),
        _ => Err(ImageError::Encode(format!(
            "unsupported channel count for PNG: {channels}"
        ))),
    }
}

/// Write `image` to `<dir>/<name>.png`, creating `dir` and its parents.
///
/// Accepts gray (1), RGB (3) or RGBA (4) channel matrices. An existing file
/// of the same name is overwritten. Returns the path written.
///
/// # Errors
///
/// Returns `ImageError::Encode` for unsupported channel counts or encoder
/// failures and `ImageError::Io` if the directory or file cannot be created.
pub fn save_png(
    image: &Tensor<u8>,
    dir: impl AsRef<Path>,
    name: &str,
) -> Result<PathBuf, ImageError> {
    let (height, width, channels) = image.hwc()?;
    let color = color_type(channels)?;
    let (width, height) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(ImageError::Encode(format!(
                "image too large for PNG: {width}x{height}"
            )));
        }
    };

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}.png"));

    let mut writer = BufWriter::new(File::create(&path)?);
    PngEncoder::new(&mut writer).write_image(&image.data, width, height, color)?;
    writer.flush()?;

    log::debug!("saved {}x{} png to {}", width, height, path.display());
    Ok(path)
}

/// [`save_png`] on tokio's blocking thread pool.
pub async fn save_png_async(
    image: Tensor<u8>,
    dir: PathBuf,
    name: String,
) -> Result<PathBuf, ImageError> {
    tokio::task::spawn_blocking(move || save_png(&image, dir, &name))
        .await
        .map_err(|e| ImageError::Encode(e.to_string()))?
}
