/// Record preview card
///
/// Mirrors what will be uploaded: the prepared photo plus one
/// "Label: value" line per field, updating live as the user types.

use iced::widget::{column, image, text, Column};
use iced::Length;

use crate::state::form::{FormField, FormState};
use crate::Message;

/// Pixel width of the preview thumbnail
const PREVIEW_PHOTO_WIDTH: f32 = 100.0;

/// Build the preview card for the current form state
pub fn preview_card(form: &FormState) -> Column<'_, Message> {
    let mut card = column![text("Preview").size(18)].spacing(8).padding(10);

    if let Some(photo) = &form.photo {
        card = card.push(
            image(image::Handle::from_path(photo)).width(Length::Fixed(PREVIEW_PHOTO_WIDTH)),
        );
    }

    for field in FormField::ALL {
        card = card.push(text(format!("{}: {}", field.label(), form.field(field))).size(14));
    }

    card
}
