/// State management module
/// 
/// This module handles all application state, including:
/// - Form fields, validation, and submission snapshots (form.rs)

pub mod form;
