use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Option<Rect>,
    pub table: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Form panel height: six fields, an error line, borders
const FORM_HEIGHT: u16 = 9;

/// Header, optional form, table, status, footer
pub fn create_layout(area: Rect, with_form: bool) -> ScreenAreas {
    if with_form {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // Header
                Constraint::Length(FORM_HEIGHT), // Form
                Constraint::Min(3),              // Table
                Constraint::Length(3),           // Pagination + notice
                Constraint::Length(3),           // Footer
            ])
            .split(area);
        ScreenAreas {
            header: chunks[0],
            form: Some(chunks[1]),
            table: chunks[2],
            status: chunks[3],
            footer: chunks[4],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);
        ScreenAreas {
            header: chunks[0],
            form: None,
            table: chunks[1],
            status: chunks[2],
            footer: chunks[3],
        }
    }
}

/// A box of fixed height and `percent_x` width centered in `area`
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
