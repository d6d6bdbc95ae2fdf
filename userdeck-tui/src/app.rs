use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use std::sync::Arc;

use tracing::debug;
use user_service::{ConfirmChoice, User, UserField, UserListController, UserRepository};

// =============================================================================
// Application States
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Moving around the table
    Browse,
    /// Typing into the search box
    Searching,
    /// Add/Edit form has focus
    Editing,
    /// Delete confirmation is showing
    ConfirmDelete,
}

/// Remote work queued by a key press, awaited by the run loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRequest {
    Reload,
    Submit,
    Delete,
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub state: AppState,
    pub controller: UserListController,
    pub selected_row: usize,
    pub focused_field: UserField,
    pub validation_error: Option<String>,
    pub pending: Option<PendingRequest>,
    pub api_url: String,
    pub should_quit: bool,
    repo: Arc<dyn UserRepository>,
}

impl App {
    pub fn new(repo: Arc<dyn UserRepository>, api_url: impl Into<String>) -> Self {
        Self {
            state: AppState::Browse,
            controller: UserListController::new(),
            selected_row: 0,
            focused_field: UserField::Name,
            validation_error: None,
            pending: None,
            api_url: api_url.into(),
            should_quit: false,
            repo,
        }
    }

    /// Initial fetch, done once before the first frame
    pub async fn mount(&mut self) {
        self.controller.load(self.repo.as_ref()).await;
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
            self.process_pending().await;
        }
        Ok(())
    }

    /// Await whatever remote request the last key press queued
    pub async fn process_pending(&mut self) {
        let Some(request) = self.pending.take() else {
            return;
        };
        debug!(?request, "Processing request");

        match request {
            PendingRequest::Reload => {
                self.controller.load(self.repo.as_ref()).await;
                self.selected_row = 0;
                self.state = AppState::Browse;
            }
            PendingRequest::Submit => {
                match self.controller.submit(self.repo.as_ref()).await {
                    Ok(_) => {
                        self.validation_error = None;
                        self.state = AppState::Browse;
                    }
                    Err(e) => self.validation_error = Some(e.to_string()),
                }
            }
            PendingRequest::Delete => {
                self.controller
                    .resolve_delete(ConfirmChoice::Confirm, self.repo.as_ref())
                    .await;
                self.state = AppState::Browse;
            }
        }
        self.clamp_selection();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Table Navigation
    // =========================================================================

    pub fn visible_len(&self) -> usize {
        self.controller.visible_users().len()
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.controller
            .visible_users()
            .get(self.selected_row)
            .copied()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_row < self.visible_len().saturating_sub(1) {
            self.selected_row += 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.controller.next_page() {
            self.selected_row = 0;
        }
    }

    pub fn previous_page(&mut self) {
        if self.controller.previous_page() {
            self.selected_row = 0;
        }
    }

    pub fn request_reload(&mut self) {
        self.pending = Some(PendingRequest::Reload);
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn start_search(&mut self) {
        self.state = AppState::Searching;
    }

    pub fn search_push_char(&mut self, c: char) {
        let mut term = self.controller.search_term().to_string();
        term.push(c);
        self.controller.set_search_term(term);
        self.selected_row = 0;
    }

    pub fn search_pop_char(&mut self) {
        let mut term = self.controller.search_term().to_string();
        if term.pop().is_some() {
            self.controller.set_search_term(term);
            self.selected_row = 0;
        }
    }

    pub fn confirm_search(&mut self) {
        self.state = AppState::Browse;
    }

    pub fn cancel_search(&mut self) {
        self.controller.set_search_term("");
        self.selected_row = 0;
        self.state = AppState::Browse;
    }

    // =========================================================================
    // Form
    // =========================================================================

    pub fn toggle_form(&mut self) {
        self.controller.toggle_form();
        self.focused_field = UserField::Name;
        self.validation_error = None;
        self.state = if self.controller.form().is_open() {
            AppState::Editing
        } else {
            AppState::Browse
        };
    }

    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_user().map(|u| u.id) else {
            return;
        };
        if self.controller.open_edit(id) {
            self.focused_field = UserField::Name;
            self.validation_error = None;
            self.state = AppState::Editing;
        }
    }

    pub fn cancel_form(&mut self) {
        self.controller.close_form();
        self.validation_error = None;
        self.state = AppState::Browse;
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn previous_field(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    pub fn field_push_char(&mut self, c: char) {
        let mut value = self.focused_field.get(self.controller.draft()).to_string();
        value.push(c);
        self.controller.set_field(self.focused_field, value);
    }

    pub fn field_pop_char(&mut self) {
        let mut value = self.focused_field.get(self.controller.draft()).to_string();
        if value.pop().is_some() {
            self.controller.set_field(self.focused_field, value);
        }
    }

    /// Validate now, send on the next loop turn
    pub fn request_submit(&mut self) {
        match self.controller.prepare_submission() {
            Ok(_) => {
                self.validation_error = None;
                self.pending = Some(PendingRequest::Submit);
            }
            Err(e) => self.validation_error = Some(e.to_string()),
        }
    }

    // =========================================================================
    // Delete
    // =========================================================================

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_user().map(|u| u.id) else {
            return;
        };
        if self.controller.request_delete(id) {
            self.state = AppState::ConfirmDelete;
        }
    }

    pub fn resolve_confirmation(&mut self, choice: ConfirmChoice) {
        match choice {
            ConfirmChoice::Confirm => self.pending = Some(PendingRequest::Delete),
            ConfirmChoice::Cancel => {
                self.controller.cancel_delete();
                self.state = AppState::Browse;
            }
        }
    }
}
