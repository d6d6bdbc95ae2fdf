use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use user_service::User;

use crate::app::App;

const HEADERS: [&str; 6] = ["ID", "Full Name", "Username", "Email", "Phone", "Website"];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let users = app.controller.visible_users();
    let block = Block::default().borders(Borders::ALL).title("Users");

    if users.is_empty() {
        let empty_msg = Paragraph::new(vec![Line::from(""), Line::from("No users found")])
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty_msg, area);
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let style = if i == app.selected_row {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(row_cells(user)).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Percentage(22),
        Constraint::Percentage(14),
        Constraint::Percentage(24),
        Constraint::Percentage(18),
        Constraint::Percentage(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

fn row_cells(user: &User) -> Vec<Cell<'static>> {
    vec![
        Cell::from(user.id.to_string()),
        Cell::from(user.full_name()),
        Cell::from(user.username.clone().unwrap_or_default()),
        Cell::from(user.email.clone()),
        Cell::from(user.phone.clone().unwrap_or_default()),
        Cell::from(user.website.clone().unwrap_or_default()),
    ]
}
