use crate::ConvertError;
use camframe_base::{Tensor, element_count};
use camframe_image::ImageError;

/// Concatenate the planes into one buffer: luma, then chroma B, then chroma A.
///
/// The two chroma planes are deliberately swapped relative to capture order:
/// the planar converter reads the plane after luma as U, so chroma B lands in
/// the U slot and chroma A in the V slot.
pub fn pack_planes(luma: &[u8], chroma_a: &[u8], chroma_b: &[u8]) -> Vec<u8> {
    let y_size = luma.len();
    let u_size = chroma_a.len();
    let v_size = chroma_b.len();

    let mut packed = vec![0u8; y_size + u_size + v_size];
    packed[..y_size].copy_from_slice(luma);
    packed[y_size..y_size + v_size].copy_from_slice(chroma_b);
    packed[y_size + v_size..].copy_from_slice(chroma_a);
    packed
}

/// Shape of the single-channel 4:2:0 view of a `width` x `height` frame:
/// `[height + height / 2, width, 1]`.
pub fn yuv_view_shape(width: u32, height: u32) -> Vec<usize> {
    let height = height as usize;
    vec![height + height / 2, width as usize, 1]
}

/// Wrap a packed buffer as the single-channel 4:2:0 view matrix.
///
/// The view holds exactly `width * (height + height / 2)` bytes. Bytes past
/// that are dropped, so buffers from cameras with interleaved chroma planes
/// (which run longer than the planar layout) still fit.
///
/// # Errors
///
/// Returns `ConvertError::Conversion` if the packed buffer is shorter than
/// the view.
pub fn yuv_view(mut packed: Vec<u8>, width: u32, height: u32) -> Result<Tensor<u8>, ConvertError> {
    let shape = yuv_view_shape(width, height);
    let needed = element_count(&shape)?;
    if packed.len() < needed {
        return Err(ImageError::Layout(format!(
            "{width}x{height} frame needs {needed} packed bytes, got {}",
            packed.len()
        ))
        .into());
    }
    packed.truncate(needed);
    Ok(Tensor::new(shape, packed)?)
}
