use crate::output;

use clap::Args;
use color_eyre::Result;

use user_service::controller::form;
use user_service::{User, UserRepository};

/// Create a user
#[derive(Args, Debug)]
pub struct AddArgs {
    /// First name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub website: Option<String>,
}

impl AddArgs {
    fn into_draft(self) -> User {
        User {
            id: 0,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            username: self.username,
            phone: self.phone,
            website: self.website,
        }
    }
}

pub async fn execute(args: AddArgs, repo: &dyn UserRepository) -> Result<()> {
    let draft = args.into_draft();
    form::validate_draft(&draft)?;

    output::status("Creating", &draft.full_name());
    let created = repo.create(&draft.to_new_user()).await?;
    if created.id == 0 {
        output::success("User created");
    } else {
        output::success(&format!("User created with id {}", created.id));
    }
    Ok(())
}
