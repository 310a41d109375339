use iced::widget::{button, column, container, image, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::{MessageDialog, MessageLevel};
use std::path::PathBuf;
use std::time::Duration;

// Declare the application modules
mod config;
mod media;
mod state;
mod ui;
mod upload;

use media::permissions::PermissionStatus;
use state::form::{FormField, FormState, SubmitStatus};
use upload::{UploadClient, UploadError};

/// Main application state
struct StudentForm {
    /// All record fields plus the prepared photo
    form: FormState,
    /// Multipart upload client bound to the configured endpoint
    uploader: UploadClient,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Startup permission probe finished
    PermissionsChecked(PermissionStatus),
    /// User edited one of the text fields
    FieldEdited(FormField, String),
    /// User clicked the "Pick an image from Gallery" button
    PickImage,
    /// User clicked the "Take a photo" button
    TakePhoto,
    /// Picker or camera finished
    PhotoReady(Result<Option<PathBuf>, String>),
    /// User clicked the "Save" button
    Submit,
    /// Background upload completed
    UploadFinished(Result<(), UploadError>),
}

impl StudentForm {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = config::Settings::load();
        println!("🎓 Student form initialized, endpoint: {}", settings.endpoint);

        let uploader = UploadClient::new(
            settings.endpoint,
            Duration::from_secs(settings.timeout_secs),
        );

        (
            StudentForm {
                form: FormState::new(),
                uploader,
                status: String::from("Ready."),
            },
            // Probe camera/library access once at startup
            Task::perform(
                media::permissions::request_permissions(),
                Message::PermissionsChecked,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PermissionsChecked(permissions) => {
                if !permissions.all_granted() {
                    // One-time warning; picking and capturing stay available
                    eprintln!("⚠️  Limited access: {:?}", permissions);
                    alert(
                        MessageLevel::Warning,
                        "Permission Required",
                        "Sorry, we need camera and photo library access to make this work!",
                    );
                }
                Task::none()
            }

            Message::FieldEdited(field, value) => {
                self.form.set_field(field, value);
                Task::none()
            }

            Message::PickImage => {
                self.status = String::from("Waiting for the photo picker...");
                Task::perform(media::picker::pick_from_library(), Message::PhotoReady)
            }

            Message::TakePhoto => {
                self.status = String::from("Capturing from the camera...");
                Task::perform(media::camera::capture_from_camera(), Message::PhotoReady)
            }

            Message::PhotoReady(result) => {
                match result {
                    Ok(Some(photo)) => {
                        self.status = format!("Selected {}", photo.display());
                        self.form.set_photo(photo);
                    }
                    Ok(None) => {
                        self.status = String::from("No photo selected.");
                    }
                    Err(e) => {
                        eprintln!("❌ Photo preparation failed: {}", e);
                        self.status = String::from("Could not prepare the photo.");
                    }
                }
                Task::none()
            }

            Message::Submit => {
                // One upload at a time
                if self.form.is_submitting() {
                    return Task::none();
                }

                match self.form.snapshot() {
                    Ok(snapshot) => {
                        self.form.status = SubmitStatus::Submitting;
                        self.status = format!("Uploading record {}...", snapshot.id_number);

                        let uploader = self.uploader.clone();
                        Task::perform(
                            async move { uploader.upload(snapshot).await },
                            Message::UploadFinished,
                        )
                    }
                    Err(e) => {
                        alert(MessageLevel::Error, "Error", &e.to_string());
                        Task::none()
                    }
                }
            }

            Message::UploadFinished(result) => {
                self.form.status = SubmitStatus::Idle;
                match result {
                    Ok(()) => {
                        self.status = String::from("Record saved.");
                        alert(MessageLevel::Info, "Success", "Data saved successfully");
                    }
                    Err(e) => {
                        eprintln!("❌ Upload failed: {}", e);
                        // Fields are kept as-is so the user can retry
                        self.status = String::from("Upload failed.");
                        alert(MessageLevel::Error, "Error", user_message(&e));
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![
            text("Student Information Form").size(24),
            row![
                button("Pick an image from Gallery")
                    .on_press(Message::PickImage)
                    .padding(10),
                button("Take a photo").on_press(Message::TakePhoto).padding(10),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(20);

        if let Some(photo) = &self.form.photo {
            content = content.push(
                column![
                    text("Selected Image").size(18),
                    image(image::Handle::from_path(photo)).width(Length::Fixed(200.0)),
                ]
                .spacing(10)
                .align_x(Alignment::Center),
            );
        }

        let save_label = if self.form.is_submitting() {
            "Saving..."
        } else {
            "Save"
        };

        content = content
            .push(ui::form::field_inputs(&self.form))
            .push(button(save_label).on_press(Message::Submit).padding(10))
            .push(ui::preview::preview_card(&self.form))
            .push(text(&self.status).size(14));

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Map an upload error to the user-facing alert text
fn user_message(error: &UploadError) -> &'static str {
    match error {
        UploadError::ServerRejected { .. } => "Failed to save data",
        UploadError::NetworkFailure(_) | UploadError::PhotoUnreadable(_) => {
            "An error occurred while saving data"
        }
    }
}

/// Show a blocking modal message box
fn alert(level: MessageLevel, title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .show();
}

fn main() -> iced::Result {
    iced::application(
        "Student Information Form",
        StudentForm::update,
        StudentForm::view,
    )
    .theme(StudentForm::theme)
    .centered()
    .run_with(StudentForm::new)
}
