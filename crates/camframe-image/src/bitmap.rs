use crate::*;
use camframe_base::Tensor;

/// Expand an RGB matrix to an opaque RGBA bitmap (`[h, w, 4]`, alpha 255).
pub fn rgb_to_rgba(rgb: &Tensor<u8>) -> Result<Tensor<u8>, ImageError> {
    let (height, width, channels) = rgb.hwc()?;
    if channels != 3 {
        return Err(ImageError::Layout(format!(
            "expected 3 channels for RGB, got {channels}"
        )));
    }

    let mut rgba = Vec::with_capacity(height * width * 4);
    for px in rgb.data.chunks_exact(3) {
        rgba.extend_from_slice(&[px[0], px[1], px[2], 0xFF]);
    }

    Ok(Tensor::from_hwc(height, width, 4, rgba)?)
}
