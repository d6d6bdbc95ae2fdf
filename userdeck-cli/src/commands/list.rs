use crate::output;

use clap::Args;
use color_eyre::Result;

use user_service::controller::view;
use user_service::{User, UserRepository, PAGE_SIZE};

/// Fetch users and print one page of them
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show users whose name, username, email or phone contains TERM
    #[arg(long, short = 's', value_name = "TERM")]
    pub search: Option<String>,

    /// Page to show (1-based)
    #[arg(
        long,
        short = 'p',
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page: u64,
}

/// One page of a filtered listing
struct Listing<'a> {
    rows: Vec<&'a User>,
    page: usize,
    total_pages: usize,
    matched: usize,
}

impl Listing<'_> {
    fn past_end(&self) -> bool {
        self.page > self.total_pages
    }
}

fn select<'a>(users: &'a [User], term: &str, page: usize) -> Listing<'a> {
    let filtered = view::filter_users(users, term);
    Listing {
        rows: view::page_slice(&filtered, page, PAGE_SIZE).to_vec(),
        page,
        total_pages: view::total_pages(filtered.len(), PAGE_SIZE),
        matched: filtered.len(),
    }
}

pub async fn execute(args: ListArgs, repo: &dyn UserRepository) -> Result<()> {
    output::status("Fetching", "users");
    let users = repo.list().await?;

    let term = args.search.unwrap_or_default();
    let listing = select(&users, &term, args.page as usize);

    if listing.rows.is_empty() {
        output::dim("  No users found");
    } else {
        for line in output::user_table(&listing.rows) {
            println!("{}", line);
        }
    }
    println!();
    output::dim(&format!(
        "  Page {} of {} ({} of {} users)",
        listing.page,
        listing.total_pages,
        listing.matched,
        users.len()
    ));
    if listing.past_end() {
        output::warning(&format!("Page {} is past the last page", listing.page));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::{RecordedCall, StubUserRepository};

    fn users(count: u64) -> Vec<User> {
        (1..=count)
            .map(|id| {
                User::new(id, format!("Name{}", id), "Lister", format!("n{}@example.com", id))
            })
            .collect()
    }

    #[test]
    fn test_select_second_page() {
        let all = users(9);
        let listing = select(&all, "", 2);
        let ids: Vec<u64> = listing.rows.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![9]);
        assert_eq!(listing.total_pages, 2);
        assert_eq!(listing.matched, 9);
        assert!(!listing.past_end());
    }

    #[test]
    fn test_select_past_end_is_empty() {
        let all = users(3);
        let listing = select(&all, "name2", 2);
        assert!(listing.rows.is_empty());
        assert_eq!(listing.matched, 1);
        assert_eq!(listing.total_pages, 1);
        assert!(listing.past_end());
    }

    #[test]
    fn test_select_without_matches() {
        let all = users(3);
        let listing = select(&all, "zzz", 1);
        assert!(listing.rows.is_empty());
        assert_eq!(listing.total_pages, 1);
        assert!(!listing.past_end());
    }

    #[tokio::test]
    async fn test_list_fetches_once() {
        let stub = StubUserRepository::with_users(users(2));
        let args = ListArgs {
            search: Some("name1".into()),
            page: 5,
        };
        execute(args, &stub).await.unwrap();
        assert_eq!(stub.calls(), vec![RecordedCall::List]);
    }

    #[tokio::test]
    async fn test_list_propagates_remote_failure() {
        let stub = StubUserRepository::with_users(users(2));
        stub.fail_with_status(500);
        let args = ListArgs {
            search: None,
            page: 1,
        };
        assert!(execute(args, &stub).await.is_err());
    }
}
