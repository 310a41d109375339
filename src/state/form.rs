/// Form state for the student record screen
///
/// This struct holds everything the screen edits: the five text
/// fields and the prepared photo path. All mutation goes through the
/// setters, and submission takes an immutable snapshot so in-flight
/// uploads never see later edits.

use std::path::PathBuf;
use thiserror::Error;

/// The five text fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    IdNumber,
    LastName,
    FirstName,
    Course,
    Level,
}

impl FormField {
    /// Every field, in screen order
    pub const ALL: [FormField; 5] = [
        FormField::IdNumber,
        FormField::LastName,
        FormField::FirstName,
        FormField::Course,
        FormField::Level,
    ];

    /// Label shown as the input placeholder and in the preview card
    pub fn label(&self) -> &'static str {
        match self {
            FormField::IdNumber => "ID Number",
            FormField::LastName => "Last Name",
            FormField::FirstName => "First Name",
            FormField::Course => "Course",
            FormField::Level => "Level",
        }
    }
}

/// Validation failure at submit time
///
/// The screen surfaces one generic message rather than per-field
/// detail, matching the single emptiness gate on the record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all fields and select an image")]
    MissingFields,
}

/// Whether an upload is currently in flight
///
/// A submit trigger while `Submitting` is ignored, so two uploads can
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
}

/// Mutable state behind the form screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub id_number: String,
    pub last_name: String,
    pub first_name: String,
    pub course: String,
    pub level: String,
    /// Path of the prepared photo (set by the picker or the camera)
    pub photo: Option<PathBuf>,
    /// Busy flag for the upload in flight
    pub status: SubmitStatus,
}

/// Immutable copy of the record taken at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub id_number: String,
    pub last_name: String,
    pub first_name: String,
    pub course: String,
    pub level: String,
    pub photo: PathBuf,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field; no validation happens at edit time
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::IdNumber => self.id_number = value,
            FormField::LastName => self.last_name = value,
            FormField::FirstName => self.first_name = value,
            FormField::Course => self.course = value,
            FormField::Level => self.level = value,
        }
    }

    /// Current value of one field
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::IdNumber => &self.id_number,
            FormField::LastName => &self.last_name,
            FormField::FirstName => &self.first_name,
            FormField::Course => &self.course,
            FormField::Level => &self.level,
        }
    }

    /// Replace the photo reference; each new pick or capture wins
    pub fn set_photo(&mut self, photo: PathBuf) {
        self.photo = Some(photo);
    }

    /// Whether an upload is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Gate submission and take a snapshot of the record
    ///
    /// Every text field must be non-empty and a photo must be
    /// present. Emptiness is the whole check — no trimming, no format
    /// rules.
    pub fn snapshot(&self) -> Result<FormSnapshot, ValidationError> {
        let photo = match &self.photo {
            Some(photo) => photo.clone(),
            None => return Err(ValidationError::MissingFields),
        };

        let any_field_empty = FormField::ALL
            .iter()
            .any(|&field| self.field(field).is_empty());
        if any_field_empty {
            return Err(ValidationError::MissingFields);
        }

        Ok(FormSnapshot {
            id_number: self.id_number.clone(),
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            course: self.course.clone(),
            level: self.level.clone(),
            photo,
        })
    }
}
