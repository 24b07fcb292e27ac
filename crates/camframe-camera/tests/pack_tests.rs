use camframe_camera::{ConvertError, pack_planes, yuv_view, yuv_view_shape};

#[test]
fn test_pack_planes_layout() {
    let luma: Vec<u8> = (0..8).collect();
    let chroma_a = vec![100, 101];
    let chroma_b = vec![200, 201, 202];

    let packed = pack_planes(&luma, &chroma_a, &chroma_b);

    assert_eq!(packed.len(), 8 + 2 + 3);
    assert_eq!(&packed[..8], &luma[..]);
    assert_eq!(&packed[8..11], &chroma_b[..]);
    assert_eq!(&packed[11..], &chroma_a[..]);
}

#[test]
fn test_pack_planes_empty_chroma() {
    let packed = pack_planes(&[1, 2, 3, 4], &[], &[]);
    assert_eq!(packed, vec![1, 2, 3, 4]);
}

#[test]
fn test_yuv_view_minimal_frame() {
    let packed = pack_planes(&[16, 16, 16, 16], &[128], &[128]);

    let view = yuv_view(packed, 2, 2).unwrap();

    assert_eq!(view.shape, vec![3, 2, 1]);
    assert_eq!(view.hwc(), Ok((3, 2, 1)));
}

#[test]
fn test_yuv_view_shape() {
    assert_eq!(yuv_view_shape(640, 480), vec![720, 640, 1]);
    assert_eq!(yuv_view_shape(2, 2), vec![3, 2, 1]);
}

#[test]
fn test_yuv_view_drops_surplus_bytes() {
    // interleaved chroma buffers run longer than the planar layout
    let luma = vec![50u8; 4];
    let packed = pack_planes(&luma, &[1, 2, 3], &[4, 5, 6]);

    let view = yuv_view(packed, 2, 2).unwrap();

    assert_eq!(view.data, vec![50, 50, 50, 50, 4, 5]);
}

#[test]
fn test_yuv_view_rejects_short_buffer() {
    let packed = pack_planes(&[0; 4], &[], &[]);
    assert!(matches!(
        yuv_view(packed, 2, 2),
        Err(ConvertError::Conversion(_))
    ));
}
