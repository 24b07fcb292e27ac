// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
#[inline]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_chroma_is_gray() {
        for y in [0u8, 1, 64, 128, 200, 255] {
            assert_eq!(yuv_to_rgb(y, 128, 128), (y, y, y));
        }
    }

    #[test]
    fn test_saturated_red_clamps() {
        let (r, g, b) = yuv_to_rgb(255, 128, 255);
        assert_eq!(r, 255);
        assert!(g < 255);
        assert_eq!(b, 255);
    }

    #[test]
    fn test_blue_chroma_raises_blue() {
        let (r, _, b) = yuv_to_rgb(100, 200, 128);
        assert_eq!(r, 100);
        assert_eq!(b, (100 + ((454 * 72) >> 8)).min(255) as u8);
    }
}
