use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
    NotHwc { ndim: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
            TensorError::NotHwc { ndim } => {
                write!(f, "expected HWC layout with 3 dimensions, got {ndim}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// Number of elements a shape describes, or `ShapeOverflow` if the product
/// does not fit in `usize`.
pub fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    shape.iter().try_fold(1usize, |product, &dim| {
        product.checked_mul(dim).ok_or(TensorError::ShapeOverflow)
    })
}

/// Dense row-major tensor.
///
/// Pixel matrices use HWC layout: `[height, width, channels]`.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pixel buffers are large, only show the head
        let shown = self.data.len().min(16);
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &&self.data[..shown])
            .field("len", &self.data.len())
            .finish()
    }
}

impl<T> Tensor<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let expected = element_count(&shape)?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build an HWC tensor `[height, width, channels]`.
    pub fn from_hwc(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<T>,
    ) -> Result<Self, TensorError> {
        Self::new(vec![height, width, channels], data)
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `(height, width, channels)` for an HWC tensor.
    pub fn hwc(&self) -> Result<(usize, usize, usize), TensorError> {
        match self.shape.as_slice() {
            &[height, width, channels] => Ok((height, width, channels)),
            _ => Err(TensorError::NotHwc { ndim: self.ndim() }),
        }
    }
}

impl<T: Default + Clone> Tensor<T> {
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        let count = element_count(&shape)?;
        Ok(Self {
            shape,
            data: vec![T::default(); count],
        })
    }
}
