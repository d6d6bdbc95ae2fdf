// User List Controller
// Owns the user list, the derived search/page view, the form draft and the
// pending deletion. Remote calls go through a `UserRepository`; local state
// is reconciled from the draft, never from the server response.

pub mod confirm;
pub mod form;
pub mod view;

pub use confirm::{ConfirmChoice, DeleteConfirmation};
pub use form::{FormMode, FormState, UserField};
pub use view::PAGE_SIZE;

use crate::client::UserRepository;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewUser, User};

use tracing::{debug, info, warn};

// =============================================================================
// Notices
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line status message shown under the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

// =============================================================================
// Submission
// =============================================================================

/// What a form submit asks of the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewUser),
    Update(User),
}

// =============================================================================
// Controller
// =============================================================================

#[derive(Debug)]
pub struct UserListController {
    users: Vec<User>,
    search_term: String,
    current_page: usize,
    filtered: Vec<usize>,
    form: FormState,
    draft: User,
    deletion: DeleteConfirmation,
    notice: Option<Notice>,
}

impl Default for UserListController {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            filtered: Vec::new(),
            form: FormState::Closed,
            draft: User::default(),
            deletion: DeleteConfirmation::Idle,
            notice: None,
        }
    }
}

impl UserListController {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let mut controller = Self {
            users,
            ..Default::default()
        };
        controller.refilter();
        controller
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the list with the server's. A failed fetch leaves an empty list.
    pub async fn load(&mut self, repo: &dyn UserRepository) {
        match repo.list().await {
            Ok(users) => {
                info!(count = users.len(), "Loaded users");
                self.users = users;
                self.notice = None;
            }
            Err(e) => {
                self.users = Vec::new();
                self.notice = Some(Notice::error(format!("Failed to load users: {}", e)));
            }
        }
        self.current_page = 1;
        self.deletion = DeleteConfirmation::Idle;
        self.refilter();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_users(&self) -> Vec<&User> {
        self.filtered.iter().map(|&i| &self.users[i]).collect()
    }

    /// Users on the current page
    pub fn visible_users(&self) -> Vec<&User> {
        view::page_slice(&self.filtered, self.current_page, PAGE_SIZE)
            .iter()
            .map(|&i| &self.users[i])
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        view::total_pages(self.filtered.len(), PAGE_SIZE)
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    pub fn draft(&self) -> &User {
        &self.draft
    }

    pub fn deletion(&self) -> DeleteConfirmation {
        self.deletion
    }

    pub fn pending_deletion(&self) -> Option<u64> {
        self.deletion.pending_id()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn find_user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    // =========================================================================
    // Search & Pagination
    // =========================================================================

    fn refilter(&mut self) {
        self.filtered = view::filter_indices(&self.users, &self.search_term);
    }

    /// Update the search term. The current page is left as is even if the
    /// narrower result no longer reaches it.
    ///
    /// Full name, username, email and phone are matched one at a time, so a
    /// term spanning two of them (say a last name followed by a username)
    /// finds nothing. Website is never searched.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Header button: close the form if open, otherwise open it empty
    pub fn toggle_form(&mut self) {
        if self.form.is_open() {
            self.close_form();
        } else {
            self.open_create();
        }
    }

    pub fn open_create(&mut self) {
        self.clear_notice();
        self.draft = User::default();
        self.form = FormState::Open(FormMode::Create);
    }

    /// Seed the draft with a copy of user `id`. Returns false for unknown ids.
    pub fn open_edit(&mut self, id: u64) -> bool {
        let Some(user) = self.find_user(id) else {
            return false;
        };
        self.draft = user.clone();
        self.form = FormState::Open(FormMode::Edit);
        self.clear_notice();
        true
    }

    pub fn close_form(&mut self) {
        self.draft = User::default();
        self.form = FormState::Closed;
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        if self.form.is_open() {
            field.set(&mut self.draft, value.into());
        }
    }

    /// Validate the draft and describe the remote request it needs
    pub fn prepare_submission(&self) -> ServiceResult<Submission> {
        form::validate_draft(&self.draft)?;
        match self.form.mode() {
            Some(FormMode::Edit) => Ok(Submission::Update(self.draft.clone())),
            Some(FormMode::Create) => {
                self.next_id()?;
                Ok(Submission::Create(self.draft.to_new_user()))
            }
            None => Err(ServiceError::InvalidInput("No form is open".to_string())),
        }
    }

    fn next_id(&self) -> ServiceResult<u64> {
        view::next_user_id(&self.users)
            .ok_or_else(|| ServiceError::InvalidInput("No user ids left".to_string()))
    }

    /// Apply a submission to the local list, close the form and return the
    /// affected id. Creates get `max id + 1` regardless of what the server
    /// assigned; updates copy the draft over the entry with the same id.
    /// Fails without touching the list when no id is left for a create.
    pub fn reconcile(&mut self, submission: Submission) -> ServiceResult<u64> {
        let id = match submission {
            Submission::Update(user) => {
                let id = user.id;
                if let Some(existing) = self.users.iter_mut().find(|u| u.id == id) {
                    *existing = user;
                }
                id
            }
            Submission::Create(new_user) => {
                let id = self.next_id()?;
                self.users.push(new_user.into_user(id));
                id
            }
        };
        self.close_form();
        self.refilter();
        Ok(id)
    }

    /// Submit the open form.
    ///
    /// Validation failures are returned and leave the form open. Remote
    /// failures are logged and turned into a notice; the local update
    /// happens either way.
    pub async fn submit(&mut self, repo: &dyn UserRepository) -> ServiceResult<u64> {
        let submission = self.prepare_submission()?;

        let remote = match &submission {
            Submission::Update(user) => repo.update(user.id, user).await.map(|_| ()),
            Submission::Create(new_user) => repo.create(new_user).await.map(|_| ()),
        };
        let verb = match submission {
            Submission::Update(_) => "update",
            Submission::Create(_) => "create",
        };

        let id = self.reconcile(submission)?;
        match remote {
            Ok(()) => {
                debug!(id, verb, "Submitted user");
                self.notice = Some(Notice::info(format!("Saved user {}", id)));
            }
            Err(e) => {
                warn!(id, verb, error = %e, "Remote save failed, keeping local change");
                self.notice = Some(Notice::error(format!("Failed to {} user {}: {}", verb, id, e)));
            }
        }
        Ok(id)
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Ask for confirmation before deleting `id`. Unknown ids are ignored.
    pub fn request_delete(&mut self, id: u64) -> bool {
        if self.find_user(id).is_none() {
            return false;
        }
        self.clear_notice();
        self.deletion = DeleteConfirmation::Pending(id);
        true
    }

    pub fn cancel_delete(&mut self) {
        self.deletion = DeleteConfirmation::Idle;
    }

    /// Drop `id` from the local list
    pub fn remove_user(&mut self, id: u64) {
        self.users.retain(|u| u.id != id);
        self.refilter();
    }

    /// Delete the pending user remotely, then locally. Returns the deleted
    /// id, or `None` when nothing was pending.
    pub async fn confirm_delete(&mut self, repo: &dyn UserRepository) -> Option<u64> {
        let id = self.deletion.pending_id()?;
        self.deletion = DeleteConfirmation::Idle;

        let remote = repo.delete(id).await;
        self.remove_user(id);
        match remote {
            Ok(()) => self.notice = Some(Notice::info(format!("Deleted user {}", id))),
            Err(e) => {
                warn!(id, error = %e, "Remote delete failed, removing locally anyway");
                self.notice = Some(Notice::error(format!("Failed to delete user {}: {}", id, e)));
            }
        }
        Some(id)
    }

    pub async fn resolve_delete(
        &mut self,
        choice: ConfirmChoice,
        repo: &dyn UserRepository,
    ) -> Option<u64> {
        match choice {
            ConfirmChoice::Confirm => self.confirm_delete(repo).await,
            ConfirmChoice::Cancel => {
                self.cancel_delete();
                None
            }
        }
    }
}
