use clap::Parser;

use activity_selection::cli::Cli;
use activity_selection::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Check if we should run in web mode
    if let Some(config) = cli.server_config() {
        web::start_server(config).await?;
        return Ok(());
    }

    cli.run_selection()?;
    Ok(())
}
