/// Photo preparation for upload
///
/// Picked and captured photos both pass through here: center-crop to
/// a fixed 4:3 aspect ratio, re-encode as full-quality JPEG, and save
/// under the photo cache directory. Every photo the form holds is
/// therefore a real JPEG, so the upload's declared content type is
/// always accurate.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::fs::{self, File};
use std::path::PathBuf;

/// Fixed crop aspect ratio (width : height)
const ASPECT: (u32, u32) = (4, 3);

/// JPEG quality for prepared photos (full quality)
const JPEG_QUALITY: u8 = 100;

/// Get the photo cache directory
/// Returns ~/.cache/student-form/photos on Linux
pub fn get_photo_cache_dir() -> PathBuf {
    let mut path = dirs::cache_dir()
        .or_else(|| dirs::home_dir())
        .expect("Could not determine cache directory");

    path.push("student-form");
    path.push("photos");

    // Ensure the directory exists
    fs::create_dir_all(&path).expect("Failed to create photo cache directory");

    path
}

/// Crop a photo to 4:3 and save it as `<stem>.jpg` in `cache_dir`
/// Returns the path of the prepared photo
pub fn prepare_photo(
    img: DynamicImage,
    stem: &str,
    cache_dir: PathBuf,
) -> Result<PathBuf, String> {
    let cropped = crop_to_aspect(img, ASPECT.0, ASPECT.1);

    let photo_path = cache_dir.join(format!("{}.jpg", stem));
    let file = File::create(&photo_path)
        .map_err(|e| format!("Failed to create photo file: {}", e))?;

    // JPEG has no alpha channel, so flatten to RGB before encoding
    let rgb = cropped.to_rgb8();
    let mut encoder = JpegEncoder::new_with_quality(file, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| format!("Failed to encode photo: {}", e))?;

    println!("📸 Prepared photo: {}", photo_path.display());
    Ok(photo_path)
}

/// Center-crop an image to the given aspect ratio
///
/// The shorter dimension is kept in full; the longer one is trimmed
/// symmetrically. An image already at the target ratio comes back
/// unchanged.
fn crop_to_aspect(img: DynamicImage, aspect_w: u32, aspect_h: u32) -> DynamicImage {
    let (width, height) = (img.width(), img.height());

    let crop_width = width.min(height * aspect_w / aspect_h);
    let crop_height = height.min(width * aspect_h / aspect_w);

    if crop_width == width && crop_height == height {
        return img;
    }

    let x = (width - crop_width) / 2;
    let y = (height - crop_height) / 2;

    img.crop_imm(x, y, crop_width, crop_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::new_rgb8(width, height)
    }

    fn test_cache_dir() -> PathBuf {
        let dir = std::env::temp_dir().join("student-form-photo-tests");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_crop_landscape_to_4_3() {
        let cropped = crop_to_aspect(blank_image(1000, 600), 4, 3);
        assert_eq!((cropped.width(), cropped.height()), (800, 600));
    }

    #[test]
    fn test_crop_portrait_to_4_3() {
        let cropped = crop_to_aspect(blank_image(600, 1000), 4, 3);
        assert_eq!((cropped.width(), cropped.height()), (600, 450));
    }

    #[test]
    fn test_crop_keeps_exact_4_3_untouched() {
        let cropped = crop_to_aspect(blank_image(800, 600), 4, 3);
        assert_eq!((cropped.width(), cropped.height()), (800, 600));
    }

    #[test]
    fn test_prepare_photo_writes_4_3_jpeg() {
        let path = prepare_photo(blank_image(640, 640), "prepared", test_cache_dir()).unwrap();

        assert_eq!(path.extension().unwrap(), "jpg");

        let saved = image::open(&path).unwrap();
        assert_eq!((saved.width(), saved.height()), (640, 480));
    }
}
