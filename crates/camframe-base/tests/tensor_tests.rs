use camframe_base::{element_count, Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 3], vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3]);
    assert_eq!(tensor.data, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1u8, 2, 3]);
    assert_eq!(
        result.unwrap_err(),
        TensorError::ShapeMismatch {
            expected: 6,
            got: 3
        }
    );
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<u8>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_element_count() {
    assert_eq!(element_count(&[3, 2, 1]), Ok(6));
    assert_eq!(element_count(&[]), Ok(1));
    assert_eq!(element_count(&[4, 0, 3]), Ok(0));
}

#[test]
fn test_tensor_from_hwc_helpers() {
    let tensor = Tensor::from_hwc(2, 3, 4, vec![0u8; 24]).unwrap();
    assert_eq!(tensor.hwc(), Ok((2, 3, 4)));
    assert_eq!(tensor.ndim(), 3);
    assert_eq!(tensor.len(), 24);
}

#[test]
fn test_tensor_hwc_rejects_other_ranks() {
    let flat = Tensor::new(vec![6], vec![0u8; 6]).unwrap();
    assert_eq!(flat.hwc(), Err(TensorError::NotHwc { ndim: 1 }));

    let planar = Tensor::new(vec![3, 2], vec![0u8; 6]).unwrap();
    assert_eq!(planar.hwc(), Err(TensorError::NotHwc { ndim: 2 }));

    let batched = Tensor::new(vec![1, 1, 2, 3], vec![0u8; 6]).unwrap();
    assert_eq!(batched.hwc(), Err(TensorError::NotHwc { ndim: 4 }));
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<u8>::zeros(vec![2, 2, 3]).unwrap();
    assert_eq!(tensor.data, vec![0; 12]);
    assert!(!tensor.is_empty());
}

#[test]
fn test_tensor_debug_truncates_data() {
    let tensor = Tensor::from_hwc(10, 10, 3, vec![7u8; 300]).unwrap();
    let debug_str = format!("{:?}", tensor);
    assert!(debug_str.contains("Tensor"));
    assert!(debug_str.contains("len: 300"));
    assert!(debug_str.len() < 200);
}

#[test]
fn test_tensor_error_display() {
    assert_eq!(
        TensorError::ShapeMismatch { expected: 6, got: 3 }.to_string(),
        "shape mismatch: expected 6 elements, got 3"
    );
    assert!(TensorError::NotHwc { ndim: 2 }.to_string().contains("got 2"));
}
