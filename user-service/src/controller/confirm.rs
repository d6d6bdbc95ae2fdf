// Delete confirmation
// The remote delete is only reachable by resolving a pending confirmation

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    Pending(u64),
}

impl DeleteConfirmation {
    pub fn pending_id(&self) -> Option<u64> {
        match self {
            DeleteConfirmation::Pending(id) => Some(*id),
            DeleteConfirmation::Idle => None,
        }
    }

    /// Whether a confirmation prompt should be shown
    pub fn is_visible(&self) -> bool {
        self.pending_id().is_some()
    }
}

/// Answer given to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Confirm,
    Cancel,
}

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";
pub const CONFIRM_LABEL: &str = "Yes, Delete";
pub const CANCEL_LABEL: &str = "Cancel";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_follows_pending_id() {
        assert!(!DeleteConfirmation::Idle.is_visible());
        assert_eq!(DeleteConfirmation::Pending(4).pending_id(), Some(4));
        assert!(DeleteConfirmation::Pending(4).is_visible());
    }
}
