use egui::{Key, RichText, TextEdit, Ui};

use crate::state::SearchState;

/// Renders the cottage search form and the last result message.
///
/// Returns `true` when the user submitted a query this frame, either with
/// the button or by pressing Enter in the input field.
pub fn search_header(ui: &mut Ui, search: &mut SearchState) -> bool {
    let mut submitted = false;

    ui.horizontal(|ui| {
        let input = ui.add(
            TextEdit::singleline(&mut search.input)
                .hint_text("Cottage name or number")
                .desired_width(220.0),
        );

        if input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submitted = true;
        }

        if ui.button("Find").clicked() {
            submitted = true;
        }
    });

    if !search.message.is_empty() {
        ui.label(RichText::new(&search.message).size(14.0));
    }

    submitted
}
