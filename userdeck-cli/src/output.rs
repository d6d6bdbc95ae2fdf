// Output formatting helpers for CLI commands

use user_service::User;

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("\x1b[33m  !\x1b[0m {}", message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("\x1b[1;31merror:\x1b[0m {}", message);
}

/// Print a dim/muted message
pub fn dim(message: &str) {
    eprintln!("\x1b[2m{}\x1b[0m", message);
}

const COLUMNS: [(&str, usize); 6] = [
    ("ID", 5),
    ("FULL NAME", 24),
    ("USERNAME", 16),
    ("EMAIL", 28),
    ("PHONE", 22),
    ("WEBSITE", 20),
];

fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        format!("{:<width$}", value, width = width)
    } else {
        let cut: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}\u{2026}", cut)
    }
}

/// Render users as fixed-width table lines, header first
pub fn user_table(users: &[&User]) -> Vec<String> {
    let header = COLUMNS
        .iter()
        .map(|(name, width)| fit(name, *width))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![header.trim_end().to_string()];
    for user in users {
        let values = [
            user.id.to_string(),
            user.full_name(),
            user.username.clone().unwrap_or_default(),
            user.email.clone(),
            user.phone.clone().unwrap_or_default(),
            user.website.clone().unwrap_or_default(),
        ];
        let line = values
            .iter()
            .zip(COLUMNS.iter())
            .map(|(value, (_, width))| fit(value, *width))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line.trim_end().to_string());
    }
    lines
}
