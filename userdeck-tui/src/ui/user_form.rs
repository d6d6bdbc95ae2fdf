use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use user_service::{FormMode, UserField};

use crate::app::{App, AppState};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form = app.controller.form();
    let draft = app.controller.draft();
    let editing = app.state == AppState::Editing;

    let (title, action) = match form.mode() {
        Some(FormMode::Edit) => ("Edit User", "Update User"),
        _ => ("Add New User", "Add User"),
    };

    let mut lines: Vec<Line> = UserField::ALL
        .iter()
        .map(|&field| {
            let focused = editing && field == app.focused_field;
            let indicator = if focused { "> " } else { "  " };
            let marker = if field.is_required() { "*" } else { " " };
            let value = field.get(draft);
            let value_display = if focused {
                format!("{}_", value)
            } else {
                value.to_string()
            };

            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            Line::from(vec![
                Span::styled(indicator, label_style),
                Span::styled(format!("{:<11}{}", field.label(), marker), label_style),
                Span::styled(" : ", Style::default().fg(Color::DarkGray)),
                Span::styled(value_display, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    lines.push(match &app.validation_error {
        Some(err) => Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            format!("Enter: {}", action),
            Style::default().fg(Color::Green),
        )),
    });

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, area);
}
