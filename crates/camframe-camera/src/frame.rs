use crate::ConvertError;
use camframe_image::ImageError;

/// A camera frame delivered as three separate planes.
///
/// Plane order is capture order: luma, then chroma A (plane index 1), then
/// chroma B (plane index 2). Packing swaps the chroma planes, so chroma B is
/// converted as U and chroma A as V. Each slice is the plane's remaining
/// bytes and is copied as-is; sizes are not checked against the dimensions.
///
/// `close` releases the underlying frame resource (a camera buffer returned
/// to its pool, for example). The converter calls it exactly once per frame.
pub trait PlanarFrame {
    /// Width of the luma plane in pixels.
    fn width(&self) -> u32;

    /// Height of the luma plane in pixels.
    fn height(&self) -> u32;

    fn luma(&self) -> &[u8];

    fn chroma_a(&self) -> &[u8];

    fn chroma_b(&self) -> &[u8];

    fn close(&mut self);
}

impl<F: PlanarFrame + ?Sized> PlanarFrame for &mut F {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn luma(&self) -> &[u8] {
        (**self).luma()
    }

    fn chroma_a(&self) -> &[u8] {
        (**self).chroma_a()
    }

    fn chroma_b(&self) -> &[u8] {
        (**self).chroma_b()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<F: PlanarFrame + ?Sized> PlanarFrame for Box<F> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn luma(&self) -> &[u8] {
        (**self).luma()
    }

    fn chroma_a(&self) -> &[u8] {
        (**self).chroma_a()
    }

    fn chroma_b(&self) -> &[u8] {
        (**self).chroma_b()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

type CloseHook = Box<dyn FnOnce() + Send>;

/// Frame whose planes live in owned buffers.
pub struct MemoryFrame {
    width: u32,
    height: u32,
    luma: Vec<u8>,
    chroma_a: Vec<u8>,
    chroma_b: Vec<u8>,
    on_close: Option<CloseHook>,
    closed: bool,
}

impl std::fmt::Debug for MemoryFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("luma", &self.luma.len())
            .field("chroma_a", &self.chroma_a.len())
            .field("chroma_b", &self.chroma_b.len())
            .field("closed", &self.closed)
            .finish()
    }
}

impl MemoryFrame {
    pub fn new(
        width: u32,
        height: u32,
        luma: Vec<u8>,
        chroma_a: Vec<u8>,
        chroma_b: Vec<u8>,
    ) -> Self {
        Self {
            width,
            height,
            luma,
            chroma_a,
            chroma_b,
            on_close: None,
            closed: false,
        }
    }

    /// Split a contiguous dump in plane-index order (luma, then plane 1, then
    /// plane 2, each chroma plane a quarter of the luma size) into a frame.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Conversion` if the dimensions are not even or
    /// `data` is not exactly `width * height * 3 / 2` bytes.
    pub fn from_planar_dump(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ConvertError> {
        if width % 2 != 0 || height % 2 != 0 {
            return Err(ImageError::Layout(format!(
                "4:2:0 dump needs even dimensions, got {width}x{height}"
            ))
            .into());
        }
        let y_len = width as usize * height as usize;
        let chroma_len = y_len / 4;
        if data.len() != y_len + 2 * chroma_len {
            return Err(ImageError::Layout(format!(
                "{width}x{height} 4:2:0 dump needs {} bytes, got {}",
                y_len + 2 * chroma_len,
                data.len()
            ))
            .into());
        }

        let mut luma = data;
        let mut chroma_a = luma.split_off(y_len);
        let chroma_b = chroma_a.split_off(chroma_len);
        Ok(Self::new(width, height, luma, chroma_a, chroma_b))
    }

    /// Run `hook` when the frame is closed.
    pub fn with_on_close(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl PlanarFrame for MemoryFrame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn luma(&self) -> &[u8] {
        &self.luma
    }

    fn chroma_a(&self) -> &[u8] {
        &self.chroma_a
    }

    fn chroma_b(&self) -> &[u8] {
        &self.chroma_b
    }

    fn close(&mut self) {
        self.closed = true;
        if let Some(hook) = self.on_close.take() {
            hook();
        }
    }
}
