/// Gallery picker
///
/// Opens the native file dialog restricted to image files. The picked
/// photo is decoded and run through the shared 4:3 preparation step
/// off the UI thread.

use rfd::AsyncFileDialog;
use std::path::PathBuf;

use super::photo;

/// Let the user pick a photo from disk
///
/// Returns `Ok(None)` if the dialog is cancelled, otherwise the path
/// of the prepared (cropped, re-encoded) photo.
pub async fn pick_from_library() -> Result<Option<PathBuf>, String> {
    let picked = AsyncFileDialog::new()
        .set_title("Select a Photo")
        .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "webp"])
        .pick_file()
        .await;

    let Some(handle) = picked else {
        return Ok(None);
    };
    let source = handle.path().to_path_buf();

    // Spawn blocking because image decode is CPU-intensive
    tokio::task::spawn_blocking(move || prepare_picked(&source))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking half of the pick: decode, crop, and cache the photo
fn prepare_picked(source: &PathBuf) -> Result<Option<PathBuf>, String> {
    let img = image::open(source)
        .map_err(|e| format!("Failed to open image {}: {}", source.display(), e))?;

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("photo"));

    photo::prepare_photo(img, &stem, photo::get_photo_cache_dir()).map(Some)
}
