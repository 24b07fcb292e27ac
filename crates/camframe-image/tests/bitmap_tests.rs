use camframe_base::Tensor;
use camframe_image::{ImageError, rgb_to_rgba};

#[test]
fn test_rgb_to_rgba_appends_opaque_alpha() {
    let rgb = Tensor::from_hwc(1, 2, 3, vec![255, 0, 0, 0, 255, 0]).unwrap();

    let rgba = rgb_to_rgba(&rgb).unwrap();

    assert_eq!(rgba.shape, vec![1, 2, 4]);
    assert_eq!(rgba.data, vec![255, 0, 0, 0xFF, 0, 255, 0, 0xFF]);
}

#[test]
fn test_rgb_to_rgba_rejects_gray() {
    let gray = Tensor::from_hwc(2, 2, 1, vec![0u8; 4]).unwrap();
    assert!(matches!(rgb_to_rgba(&gray), Err(ImageError::Layout(_))));
}
