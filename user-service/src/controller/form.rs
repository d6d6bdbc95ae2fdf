// Add/Edit form state

use crate::error::{ServiceError, ServiceResult};
use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open(FormMode),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open(_))
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            FormState::Open(mode) => Some(*mode),
            FormState::Closed => None,
        }
    }
}

/// Editable fields of a user draft, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    LastName,
    Email,
    Username,
    Phone,
    Website,
}

impl UserField {
    pub const ALL: [UserField; 6] = [
        UserField::Name,
        UserField::LastName,
        UserField::Email,
        UserField::Username,
        UserField::Phone,
        UserField::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserField::Name => "First Name",
            UserField::LastName => "Last Name",
            UserField::Email => "Email",
            UserField::Username => "Username",
            UserField::Phone => "Phone",
            UserField::Website => "Website",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, UserField::Name | UserField::LastName | UserField::Email)
    }

    pub fn get(self, user: &User) -> &str {
        match self {
            UserField::Name => &user.name,
            UserField::LastName => &user.last_name,
            UserField::Email => &user.email,
            UserField::Username => user.username.as_deref().unwrap_or(""),
            UserField::Phone => user.phone.as_deref().unwrap_or(""),
            UserField::Website => user.website.as_deref().unwrap_or(""),
        }
    }

    /// Store `value`; optional fields become `None` when emptied
    pub fn set(self, user: &mut User, value: String) {
        let optional = |value: String| (!value.is_empty()).then_some(value);
        match self {
            UserField::Name => user.name = value,
            UserField::LastName => user.last_name = value,
            UserField::Email => user.email = value,
            UserField::Username => user.username = optional(value),
            UserField::Phone => user.phone = optional(value),
            UserField::Website => user.website = optional(value),
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Required fields that are blank in `draft`
pub fn missing_fields(draft: &User) -> Vec<UserField> {
    UserField::ALL
        .into_iter()
        .filter(|f| f.is_required() && f.get(draft).trim().is_empty())
        .collect()
}

pub fn validate_draft(draft: &User) -> ServiceResult<()> {
    let missing = missing_fields(draft);
    if missing.is_empty() {
        return Ok(());
    }
    let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    Err(ServiceError::InvalidInput(format!(
        "{} required",
        labels.join(", ")
    )))
}
