use crate::*;
use camframe_base::Tensor;
use camframe_image::planar420_to_rgb;
use std::ops::Deref;

// closes the frame when dropped, on every exit path including unwinding
struct CloseOnDrop<F: PlanarFrame>(F);

impl<F: PlanarFrame> Deref for CloseOnDrop<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.0
    }
}

impl<F: PlanarFrame> Drop for CloseOnDrop<F> {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Converts planar camera frames to RGB matrices.
///
/// Stateless; one instance can serve any number of frames, each call is
/// independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameConverter;

impl FrameConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert one frame, keeping the reason for failure.
    ///
    /// The frame is consumed and closed exactly once before this returns,
    /// whatever the outcome. Pass `&mut frame` to keep the frame value
    /// around after it has been closed.
    ///
    /// Returns an HWC tensor `[height, width, 3]`.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::MissingFrame` if `frame` is `None` (nothing is
    /// allocated in that case) and `ConvertError::Conversion` if the packed
    /// planes do not form a valid 4:2:0 view.
    pub fn try_convert<F: PlanarFrame>(&self, frame: Option<F>) -> Result<Tensor<u8>, ConvertError> {
        let frame = CloseOnDrop(frame.ok_or(ConvertError::MissingFrame)?);

        let packed = pack_planes(frame.luma(), frame.chroma_a(), frame.chroma_b());
        let view = yuv_view(packed, frame.width(), frame.height())?;
        Ok(planar420_to_rgb(&view)?)
    }

    /// Convert one frame, or `None` if there was no frame or it could not
    /// be converted.
    ///
    /// Failures are logged and never propagated; callers skip the cycle.
    pub fn convert<F: PlanarFrame>(&self, frame: Option<F>) -> Option<Tensor<u8>> {
        match self.try_convert(frame) {
            Ok(rgb) => Some(rgb),
            Err(ConvertError::MissingFrame) => {
                log::debug!("no camera frame, skipping");
                None
            }
            Err(e) => {
                log::warn!("dropping camera frame: {}", e);
                None
            }
        }
    }
}
