use crate::domain::color::BackgroundColor;
use crate::utils::error::{RecolorError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, Rgb, RgbImage};
use std::path::Path;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Decodes an in-memory image, guessing the format from its content.
pub fn decode_image(path: &Path, bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|source| RecolorError::ImageLoadError {
        path: path.display().to_string(),
        source,
    })
}

/// Flattens `image` onto a solid `color`, dropping the alpha channel.
pub fn flatten_onto(image: &DynamicImage, color: BackgroundColor) -> RgbImage {
    let rgba = image.to_rgba8();
    let bg = [color.r, color.g, color.b];

    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let px = rgba.get_pixel(x, y).0;
        let alpha = px[3] as u32;
        Rgb([
            blend_channel(px[0], bg[0], alpha),
            blend_channel(px[1], bg[1], alpha),
            blend_channel(px[2], bg[2], alpha),
        ])
    })
}

fn blend_channel(src: u8, bg: u8, alpha: u32) -> u8 {
    let inv_alpha = 255 - alpha;
    ((src as u32 * alpha + bg as u32 * inv_alpha + 127) / 255) as u8
}

/// Encodes an RGB buffer as baseline JPEG. `identifier` is only used for errors.
pub fn encode_jpeg(rgb: &RgbImage, quality: u8, identifier: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut enc = JpegEncoder::new_with_quality(&mut out, quality);
        enc.encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|source| RecolorError::EncodeError {
            identifier: identifier.to_string(),
            source,
        })?;
    }
    Ok(out)
}

pub fn recolor_image(
    image: &DynamicImage,
    color: BackgroundColor,
    quality: u8,
    identifier: &str,
) -> Result<Vec<u8>> {
    let flattened = flatten_onto(image, color);
    encode_jpeg(&flattened, quality, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn half_transparent() -> DynamicImage {
        let mut img = RgbaImage::new(4, 1);
        img.put_pixel(0, 0, Rgba([200, 10, 30, 255]));
        img.put_pixel(1, 0, Rgba([200, 10, 30, 0]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 128]));
        img.put_pixel(3, 0, Rgba([255, 255, 255, 128]));
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_flatten_keeps_opaque_and_replaces_transparent() {
        let flat = flatten_onto(&half_transparent(), BackgroundColor::new(0, 0, 255));
        assert_eq!(flat.get_pixel(0, 0), &Rgb([200, 10, 30]));
        assert_eq!(flat.get_pixel(1, 0), &Rgb([0, 0, 255]));
    }

    #[test]
    fn test_flatten_blends_partial_alpha() {
        let flat = flatten_onto(&half_transparent(), BackgroundColor::WHITE);
        // 0*128 + 255*127 over 255 -> 127
        assert_eq!(flat.get_pixel(2, 0), &Rgb([127, 127, 127]));
        assert_eq!(flat.get_pixel(3, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_encode_is_deterministic_and_decodable() {
        let flat = flatten_onto(&half_transparent(), BackgroundColor::WHITE);
        let first = encode_jpeg(&flat, DEFAULT_JPEG_QUALITY, "abc").unwrap();
        let second = encode_jpeg(&flat, DEFAULT_JPEG_QUALITY, "abc").unwrap();
        assert_eq!(first, second);
        assert_eq!(&first[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&first).unwrap();
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 1);
    }

    #[test]
    fn test_lower_quality_is_smaller() {
        let img = RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8, 255])
        });
        let flat = flatten_onto(&DynamicImage::ImageRgba8(img), BackgroundColor::WHITE);
        let high = encode_jpeg(&flat, 95, "q").unwrap();
        let low = encode_jpeg(&flat, 10, "q").unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_decode_garbage_is_load_error() {
        let err = decode_image(Path::new("broken.png"), b"not an image").unwrap_err();
        match err {
            RecolorError::ImageLoadError { path, .. } => assert_eq!(path, "broken.png"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
