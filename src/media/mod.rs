/// Photo acquisition module
///
/// This module obtains the photo attached to a record, either from:
/// - The system file picker (picker.rs)
/// - A live camera capture (camera.rs)
///
/// Both paths feed the shared 4:3 crop and JPEG re-encode (photo.rs).
/// Startup access checks live in permissions.rs.

pub mod camera;
pub mod permissions;
pub mod photo;
pub mod picker;
