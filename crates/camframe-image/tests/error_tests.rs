use camframe_base::TensorError;
use camframe_image::ImageError;
use std::error::Error;
use std::io;

#[test]
fn test_image_error_from_tensor_error() {
    let err: ImageError = TensorError::ShapeOverflow.into();
    assert!(err.to_string().starts_with("tensor error"));
    assert!(err.source().is_some());
}

#[test]
fn test_image_error_from_io_error() {
    let err: ImageError = io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into();
    assert!(matches!(err, ImageError::Io(_)));
    assert!(err.to_string().contains("read-only"));
}

#[test]
fn test_image_error_from_crate_io_error_keeps_io() {
    let inner = io::Error::new(io::ErrorKind::NotFound, "gone");
    let err: ImageError = crates_image::ImageError::IoError(inner).into();
    assert!(matches!(err, ImageError::Io(_)));
}

#[test]
fn test_image_error_display() {
    assert_eq!(
        ImageError::Layout("odd width".to_string()).to_string(),
        "layout error: odd width"
    );
    assert_eq!(
        ImageError::Encode("bad".to_string()).to_string(),
        "encode error: bad"
    );
}
