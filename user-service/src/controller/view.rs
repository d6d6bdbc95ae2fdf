// View derivation
// Pure filtering and pagination over the in-memory user list

use crate::models::User;

/// Rows per page
pub const PAGE_SIZE: usize = 8;

/// Indices of users matching `term`, in list order.
///
/// Matches full name, username, email and phone case-insensitively. An
/// empty term keeps every user.
pub fn filter_indices(users: &[User], term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    users
        .iter()
        .enumerate()
        .filter(|(_, user)| user.matches(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Convenience wrapper over [`filter_indices`] returning references
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    filter_indices(users, term)
        .into_iter()
        .map(|i| &users[i])
        .collect()
}

/// `max(1, ceil(count / page_size))`
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// The 1-based `page` of `items`. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Local id for a newly created user: one past the largest id, or 1.
/// `None` once the largest id is `u64::MAX`.
pub fn next_user_id(users: &[User]) -> Option<u64> {
    match users.iter().map(|u| u.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
