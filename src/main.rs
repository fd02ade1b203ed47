use color_eyre::eyre::Result;
use dotenv::dotenv;
use trainbook_api::config::ApiConfig;
use trainbook_store::open_calendar;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Seed the in-memory calendar from the appointments file
    let calendar = open_calendar(&config.appointments_file)?;

    // Start API server
    trainbook_api::start_server(config, calendar).await?;

    Ok(())
}
