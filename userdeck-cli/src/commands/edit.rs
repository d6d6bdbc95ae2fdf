use crate::output;

use clap::Args;
use color_eyre::Result;

use user_service::controller::form;
use user_service::{ServiceError, UserField, UserRepository};

/// Change fields of an existing user
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the user to edit
    pub id: u64,

    /// First name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Pass an empty string to clear
    #[arg(long)]
    pub username: Option<String>,

    /// Pass an empty string to clear
    #[arg(long)]
    pub phone: Option<String>,

    /// Pass an empty string to clear
    #[arg(long)]
    pub website: Option<String>,
}

impl EditArgs {
    fn changes(self) -> Vec<(UserField, String)> {
        [
            (UserField::Name, self.name),
            (UserField::LastName, self.last_name),
            (UserField::Email, self.email),
            (UserField::Username, self.username),
            (UserField::Phone, self.phone),
            (UserField::Website, self.website),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

pub async fn execute(args: EditArgs, repo: &dyn UserRepository) -> Result<()> {
    let id = args.id;
    let changes = args.changes();
    if changes.is_empty() {
        output::warning("Nothing to change");
        return Ok(());
    }

    // The API has no single-user GET, so start from the listed record
    let users = repo.list().await?;
    let mut user = users
        .into_iter()
        .find(|u| u.id == id)
        .ok_or_else(|| ServiceError::NotFound(format!("User with id {} not found", id)))?;

    for (field, value) in changes {
        field.set(&mut user, value);
    }
    form::validate_draft(&user)?;

    output::status("Updating", &format!("user {}", id));
    repo.update(id, &user).await?;
    output::success(&format!("User {} updated", id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::{RecordedCall, StubUserRepository, User};

    fn edit(id: u64) -> EditArgs {
        EditArgs {
            id,
            name: None,
            last_name: None,
            email: None,
            username: None,
            phone: None,
            website: None,
        }
    }

    #[tokio::test]
    async fn test_edit_applies_only_given_fields() {
        let ann = User::new(1, "Ann", "Lee", "ann@example.com").with_phone("555");
        let stub = StubUserRepository::with_users(vec![ann.clone()]);
        let args = EditArgs {
            email: Some("ann@new.example".into()),
            phone: Some(String::new()),
            ..edit(1)
        };
        execute(args, &stub).await.unwrap();

        let expected = User {
            email: "ann@new.example".into(),
            phone: None,
            ..ann
        };
        assert_eq!(stub.stored_users(), vec![expected.clone()]);
        assert_eq!(stub.calls().last(), Some(&RecordedCall::Update(1, expected)));
    }

    #[tokio::test]
    async fn test_edit_unknown_user() {
        let stub = StubUserRepository::new();
        let args = EditArgs {
            name: Some("X".into()),
            ..edit(5)
        };
        assert!(execute(args, &stub).await.is_err());
        assert_eq!(stub.calls(), vec![RecordedCall::List]);
    }

    #[tokio::test]
    async fn test_edit_without_changes_makes_no_calls() {
        let stub = StubUserRepository::new();
        execute(edit(1), &stub).await.unwrap();
        assert!(stub.calls().is_empty());
    }
}
