/// Live camera capture
///
/// Grabs a single frame from the default camera device and runs it
/// through the same 4:3 preparation step as picked photos.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use super::photo;

/// Take a photo with the default camera
///
/// Returns `Ok(None)` when no camera can be opened — an unavailable
/// device yields no photo rather than an error, so a denied camera
/// never blocks the form.
pub async fn capture_from_camera() -> Result<Option<PathBuf>, String> {
    // Spawn blocking because device access and frame decode block
    tokio::task::spawn_blocking(capture_blocking)
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of the capture
fn capture_blocking() -> Result<Option<PathBuf>, String> {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

    let mut camera = match Camera::new(CameraIndex::Index(0), requested) {
        Ok(camera) => camera,
        Err(e) => {
            eprintln!("⚠️  No usable camera: {}", e);
            return Ok(None);
        }
    };

    camera
        .open_stream()
        .map_err(|e| format!("Failed to open camera stream: {}", e))?;
    let frame = camera
        .frame()
        .map_err(|e| format!("Failed to grab camera frame: {}", e))?;
    let _ = camera.stop_stream();

    let decoded = frame
        .decode_image::<RgbFormat>()
        .map_err(|e| format!("Failed to decode camera frame: {}", e))?;

    let (width, height) = (decoded.width(), decoded.height());
    println!("📷 Captured frame: {}x{}", width, height);

    // Rebuild the frame as our own image buffer before cropping
    let rgb = image::RgbImage::from_raw(width, height, decoded.into_raw())
        .ok_or_else(|| String::from("Camera frame has an unexpected buffer size"))?;
    let img = image::DynamicImage::ImageRgb8(rgb);

    let stem = format!("capture_{}", now_secs());
    photo::prepare_photo(img, &stem, photo::get_photo_cache_dir()).map(Some)
}

/// Seconds since the epoch, for unique capture filenames
fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
