/// Access checks for the camera and the photo library
///
/// Desktop builds have no runtime permission dialog, so this probes
/// whether a camera device can be enumerated and whether the user's
/// pictures directory is readable. A denial warns once at startup and
/// never blocks a later pick or capture attempt.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

/// Outcome of the startup permission probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionStatus {
    pub camera_granted: bool,
    pub library_granted: bool,
}

impl PermissionStatus {
    /// Whether both capabilities are available
    pub fn all_granted(&self) -> bool {
        self.camera_granted && self.library_granted
    }
}

/// Probe camera and photo library access
///
/// Runs once at startup; the result only drives a one-time warning.
pub async fn request_permissions() -> PermissionStatus {
    tokio::task::spawn_blocking(check_blocking)
        .await
        .unwrap_or(PermissionStatus {
            camera_granted: false,
            library_granted: false,
        })
}

/// Blocking implementation of the probe
fn check_blocking() -> PermissionStatus {
    let camera_granted = match query(ApiBackend::Auto) {
        Ok(devices) => {
            println!("📷 Found {} camera device(s)", devices.len());
            !devices.is_empty()
        }
        Err(e) => {
            eprintln!("⚠️  Camera query failed: {}", e);
            false
        }
    };

    let library_granted = dirs::picture_dir()
        .or_else(|| dirs::home_dir())
        .map(|path| path.is_dir())
        .unwrap_or(false);

    PermissionStatus {
        camera_granted,
        library_granted,
    }
}
