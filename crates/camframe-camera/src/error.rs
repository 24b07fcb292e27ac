use camframe_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum ConvertError {
    /// No frame was delivered for this cycle.
    MissingFrame,
    /// The packed buffer could not be viewed or converted.
    Conversion(ImageError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingFrame => write!(f, "no frame available"),
            ConvertError::Conversion(err) => write!(f, "conversion failed: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::MissingFrame => None,
            ConvertError::Conversion(err) => Some(err),
        }
    }
}

impl From<ImageError> for ConvertError {
    fn from(err: ImageError) -> Self {
        ConvertError::Conversion(err)
    }
}

impl From<camframe_base::TensorError> for ConvertError {
    fn from(err: camframe_base::TensorError) -> Self {
        ConvertError::Conversion(ImageError::Tensor(err))
    }
}
