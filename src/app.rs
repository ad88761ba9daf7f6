use actix_web::web;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::AppConfig;
use crate::interfaces::http::start_server;

pub async fn run() -> Result<()> {
    // Missing .env is fine; the variables may come from the shell.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = AppConfig::load()?;
    let state = web::Data::new(bootstrap::setup(&config)?);
    let server = start_server(state, &config.host, config.port)?;

    info!(
        "QA test case generator running on http://{}:{}",
        config.host, config.port
    );

    server.await?;
    Ok(())
}
