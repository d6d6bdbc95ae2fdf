use crate::output;

use std::io::{self, BufRead, Write};

use clap::Args;
use color_eyre::Result;

use user_service::controller::confirm::DELETE_PROMPT;
use user_service::{ConfirmChoice, UserRepository};

/// Delete a user after confirmation
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the user to delete
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Anything but an explicit yes cancels
pub fn parse_answer(answer: &str) -> ConfirmChoice {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => ConfirmChoice::Confirm,
        _ => ConfirmChoice::Cancel,
    }
}

fn ask(input: &mut impl BufRead) -> Result<ConfirmChoice> {
    eprint!("{} [y/N] ", DELETE_PROMPT);
    io::stderr().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}

pub async fn execute(args: DeleteArgs, repo: &dyn UserRepository) -> Result<()> {
    let choice = if args.yes {
        ConfirmChoice::Confirm
    } else {
        ask(&mut io::stdin().lock())?
    };
    run(args.id, choice, repo).await
}

async fn run(id: u64, choice: ConfirmChoice, repo: &dyn UserRepository) -> Result<()> {
    match choice {
        ConfirmChoice::Cancel => {
            output::dim("  Cancelled");
            Ok(())
        }
        ConfirmChoice::Confirm => {
            output::status("Deleting", &format!("user {}", id));
            repo.delete(id).await?;
            output::success(&format!("User {} deleted", id));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::{RecordedCall, StubUserRepository, User};

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), ConfirmChoice::Confirm);
        assert_eq!(parse_answer(" YES "), ConfirmChoice::Confirm);
        assert_eq!(parse_answer("\n"), ConfirmChoice::Cancel);
        assert_eq!(parse_answer("nope"), ConfirmChoice::Cancel);
    }

    #[test]
    fn test_ask_reads_one_line() {
        let mut input = io::Cursor::new(b"y\nextra\n".to_vec());
        assert_eq!(ask(&mut input).unwrap(), ConfirmChoice::Confirm);
    }

    #[tokio::test]
    async fn test_cancel_makes_no_remote_call() {
        let stub =
            StubUserRepository::with_users(vec![User::new(1, "Ann", "Lee", "a@example.com")]);
        run(1, ConfirmChoice::Cancel, &stub).await.unwrap();
        assert!(stub.calls().is_empty());
        assert_eq!(stub.stored_users().len(), 1);
    }

    #[tokio::test]
    async fn test_confirmed_delete() {
        let stub =
            StubUserRepository::with_users(vec![User::new(1, "Ann", "Lee", "a@example.com")]);
        execute(DeleteArgs { id: 1, yes: true }, &stub).await.unwrap();
        assert_eq!(stub.calls(), vec![RecordedCall::Delete(1)]);
        assert!(stub.stored_users().is_empty());
    }
}
