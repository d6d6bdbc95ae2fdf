use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use user_service::NoticeKind;

use crate::app::App;

pub fn render_header(search: &str, searching: bool, api_url: &str, frame: &mut Frame, area: Rect) {
    let [title_area, search_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(40)]).areas(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "User Management",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", api_url), Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, title_area);

    let (text, style) = if search.is_empty() && !searching {
        ("Search users...".to_string(), Style::default().fg(Color::DarkGray))
    } else if searching {
        (format!("{}_", search), Style::default().fg(Color::White))
    } else {
        (search.to_string(), Style::default().fg(Color::White))
    };
    let border = if searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let search_box = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border),
    );
    frame.render_widget(search_box, search_area);
}

/// Pagination on the left, latest notice on the right
pub fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let controller = &app.controller;
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(
            "< Previous",
            if controller.has_previous_page() { enabled } else { disabled },
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "Page {} of {}",
                controller.current_page(),
                controller.total_pages()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Next >",
            if controller.has_next_page() { enabled } else { disabled },
        ),
        Span::styled(
            format!("   {} users", controller.filtered_count()),
            Style::default().fg(Color::Gray),
        ),
    ];

    if let Some(notice) = controller.notice() {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        spans.push(Span::raw("   "));
        spans.push(Span::styled(&notice.message, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

pub fn render_footer(text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}
