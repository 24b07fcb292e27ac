use crate::*;
use camframe_base::Tensor;

/// Frame height encoded by a planar 4:2:0 view with `rows` rows
/// (`rows = height + height / 2`).
///
/// Returns `None` unless `rows` is a non-zero multiple of 3, the only row
/// counts an even-height 4:2:0 frame can produce.
pub fn frame_height_from_view_rows(rows: usize) -> Option<usize> {
    if rows == 0 || rows % 3 != 0 {
        return None;
    }
    Some(rows / 3 * 2)
}

/// Converts a planar YUV 4:2:0 view to an RGB matrix.
///
/// `view` is single-channel with shape `[height + height / 2, width, 1]`.
/// Its bytes are the full-resolution Y plane, then the U plane, then the V
/// plane (I420 order), each chroma plane `(width / 2) * (height / 2)` bytes. Every 2x2
/// block of luma shares one chroma pair. Pixels are converted with
/// [`yuv_to_rgb`].
///
/// Returns an HWC tensor `[height, width, 3]`.
///
/// # Errors
///
/// Returns `ImageError::Layout` if the view is not single-channel, is empty,
/// or has an odd width or a row count that no even frame height produces.
pub fn planar420_to_rgb(view: &Tensor<u8>) -> Result<Tensor<u8>, ImageError> {
    let (rows, width, channels) = view.hwc()?;
    if channels != 1 {
        return Err(ImageError::Layout(format!(
            "planar 4:2:0 view must have 1 channel, got {channels}"
        )));
    }
    if width == 0 || width % 2 != 0 {
        return Err(ImageError::Layout(format!(
            "planar 4:2:0 width must be even and non-zero, got {width}"
        )));
    }
    let height = frame_height_from_view_rows(rows).ok_or_else(|| {
        ImageError::Layout(format!(
            "planar 4:2:0 view rows must be a non-zero multiple of 3, got {rows}"
        ))
    })?;

    let y_len = width * height;
    let chroma_w = width / 2;
    let chroma_len = chroma_w * (height / 2);

    let y_plane = &view.data[..y_len];
    let u_plane = &view.data[y_len..y_len + chroma_len];
    let v_plane = &view.data[y_len + chroma_len..y_len + 2 * chroma_len];

    let mut rgb = Vec::with_capacity(y_len * 3);
    for row in 0..height {
        let luma_row = &y_plane[row * width..(row + 1) * width];
        let chroma_row = (row / 2) * chroma_w;
        for (col, &y) in luma_row.iter().enumerate() {
            let c = chroma_row + col / 2;
            let (r, g, b) = yuv_to_rgb(y, u_plane[c], v_plane[c]);
            rgb.extend_from_slice(&[r, g, b]);
        }
    }

    Ok(Tensor::from_hwc(height, width, 3, rgb)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_height_from_view_rows() {
        assert_eq!(frame_height_from_view_rows(3), Some(2));
        assert_eq!(frame_height_from_view_rows(720), Some(480));
        assert_eq!(frame_height_from_view_rows(0), None);
        assert_eq!(frame_height_from_view_rows(4), None);
    }
}
