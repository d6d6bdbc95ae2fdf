use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use user_service::controller::confirm::{CANCEL_LABEL, CONFIRM_LABEL, DELETE_PROMPT};
use user_service::ConfirmChoice;

use crate::ui::layout;

/// Yes/no modal. Renders nothing while hidden; visibility belongs to the caller.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationPrompt {
    visible: bool,
}

impl ConfirmationPrompt {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }
}

impl Widget for ConfirmationPrompt {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible {
            return;
        }
        let popup = layout::centered_rect(50, 7, area);
        Clear.render(popup, buf);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                DELETE_PROMPT,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("[y] {}", CONFIRM_LABEL),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled(format!("[n] {}", CANCEL_LABEL), Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Confirm")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(popup, buf);
    }
}

/// Map a key to a prompt answer
pub fn choice_for_key(code: KeyCode) -> Option<ConfirmChoice> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(ConfirmChoice::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(ConfirmChoice::Cancel),
        _ => None,
    }
}
