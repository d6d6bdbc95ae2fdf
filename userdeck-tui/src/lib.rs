mod app;
mod events;
mod ui;

pub use app::{App, AppState, PendingRequest};

use color_eyre::Result;
use std::sync::Arc;
use tracing::info;
use user_service::{AppConfig, HttpUserRepository};

pub async fn run(config: &AppConfig) -> Result<()> {
    let repo = HttpUserRepository::new(config)?;
    info!(api_url = %config.api_url, "Starting user manager");

    let mut app = App::new(Arc::new(repo), config.api_url.clone());
    app.mount().await;

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
