/// Form field widgets
///
/// Builds the stack of text inputs for the five record fields. Edits
/// are routed back to the controller as `Message::FieldEdited`.

use iced::widget::{column, text_input, Column};

use crate::state::form::{FormField, FormState};
use crate::Message;

/// One text input per record field, in screen order
pub fn field_inputs(form: &FormState) -> Column<'_, Message> {
    let mut fields = column![].spacing(12);

    for field in FormField::ALL {
        let input = text_input(field.label(), form.field(field))
            .on_input(move |value| Message::FieldEdited(field, value))
            .padding(10);
        fields = fields.push(input);
    }

    fields
}
