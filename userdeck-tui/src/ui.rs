pub mod components;
pub mod confirm;
pub mod layout;
pub mod user_form;
pub mod user_table;

use ratatui::Frame;

use crate::app::{App, AppState};
use confirm::ConfirmationPrompt;

pub fn render(app: &App, frame: &mut Frame) {
    let form_open = app.controller.form().is_open();
    let areas = layout::create_layout(frame.area(), form_open);

    components::render_header(
        app.controller.search_term(),
        app.state == AppState::Searching,
        &app.api_url,
        frame,
        areas.header,
    );

    if let Some(form_area) = areas.form {
        user_form::render(app, frame, form_area);
    }

    user_table::render(app, frame, areas.table);
    components::render_status(app, frame, areas.status);
    components::render_footer(footer_text(app.state), frame, areas.footer);

    frame.render_widget(
        ConfirmationPrompt::new(app.controller.deletion().is_visible()),
        frame.area(),
    );
}

fn footer_text(state: AppState) -> &'static str {
    match state {
        AppState::Browse => {
            "j/k: Select | n/p: Page | /: Search | a: Add | e: Edit | d: Delete | r: Reload | q: Quit"
        }
        AppState::Searching => "Type to filter | Enter: Done | Esc: Clear",
        AppState::Editing => "Tab/Shift-Tab: Field | Enter: Save | Esc: Cancel",
        AppState::ConfirmDelete => "y/Enter: Delete | n/Esc: Cancel",
    }
}
