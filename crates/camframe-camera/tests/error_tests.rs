use camframe_base::TensorError;
use camframe_camera::ConvertError;
use camframe_image::ImageError;
use std::error::Error;

#[test]
fn test_from_image_error() {
    let err: ConvertError = ImageError::Layout("odd width".to_string()).into();

    match &err {
        ConvertError::Conversion(ImageError::Layout(msg)) => assert_eq!(msg, "odd width"),
        other => panic!("Expected Conversion(Layout), got {:?}", other),
    }
    assert!(err.source().is_some());
}

#[test]
fn test_from_tensor_error() {
    let err: ConvertError = TensorError::ShapeOverflow.into();
    assert!(matches!(err, ConvertError::Conversion(ImageError::Tensor(_))));
}

#[test]
fn test_error_display() {
    assert_eq!(ConvertError::MissingFrame.to_string(), "no frame available");
    let err = ConvertError::Conversion(ImageError::Layout("short".to_string()));
    assert_eq!(err.to_string(), "conversion failed: layout error: short");
}
