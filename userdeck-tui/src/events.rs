use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, AppState};
use crate::ui::confirm;

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.quit();
            return Ok(());
        }

        match self.state {
            AppState::Browse => {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                    KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                    KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                    KeyCode::Right | KeyCode::Char('n') => self.next_page(),
                    KeyCode::Left | KeyCode::Char('p') => self.previous_page(),
                    KeyCode::Char('/') => self.start_search(),
                    KeyCode::Char('a') => self.toggle_form(),
                    KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(),
                    KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
                    KeyCode::Char('r') => self.request_reload(),
                    _ => {}
                }
            }
            AppState::Searching => {
                match key_event.code {
                    KeyCode::Esc => self.cancel_search(),
                    KeyCode::Enter => self.confirm_search(),
                    KeyCode::Backspace => self.search_pop_char(),
                    KeyCode::Char(c) => self.search_push_char(c),
                    _ => {}
                }
            }
            AppState::Editing => {
                match key_event.code {
                    KeyCode::Esc => self.cancel_form(),
                    KeyCode::Enter => self.request_submit(),
                    KeyCode::Tab | KeyCode::Down => self.next_field(),
                    KeyCode::BackTab | KeyCode::Up => self.previous_field(),
                    KeyCode::Backspace => self.field_pop_char(),
                    KeyCode::Char(c) => self.field_push_char(c),
                    _ => {}
                }
            }
            AppState::ConfirmDelete => {
                if let Some(choice) = confirm::choice_for_key(key_event.code) {
                    self.resolve_confirmation(choice);
                }
            }
        }
        Ok(())
    }
}
