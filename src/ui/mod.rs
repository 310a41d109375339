/// View helper widgets
///
/// - Field inputs for the record form (form.rs)
/// - Live preview card of the record (preview.rs)

pub mod form;
pub mod preview;
