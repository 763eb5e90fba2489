//! Pixel format conversion helpers for presentation adapters.

/// Drops the alpha channel from packed RGBA data.
///
/// Trailing bytes that do not make up a whole pixel are ignored.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len() / 4 * 3);

    for pixel in src.chunks_exact(4) {
        dst.extend_from_slice(&pixel[..3]);
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_rgb_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 128, // blue, half transparent
            255, 255, 255, 0, // white, transparent
        ];

        assert_eq!(
            rgba_to_rgb(&src),
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_rgba_to_rgb_empty_buffer() {
        assert!(rgba_to_rgb(&[]).is_empty());
    }

    #[test]
    fn test_rgba_to_rgb_ignores_partial_pixel() {
        assert_eq!(rgba_to_rgb(&[10, 20, 30, 255, 40, 50]), vec![10, 20, 30]);
    }
}
