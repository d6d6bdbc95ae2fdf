use color_eyre::Result;
use user_service::{logging, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = AppConfig::load(None)?;
    let _guard = logging::init_file_logging(&config)?;
    userdeck_tui::run(&config).await
}
