mod app;
mod config;
mod controller;
mod form;
mod http;
mod logger;
mod lookup;
mod panel;

use anyhow::{Context, Result};
use app::Session;
use config::Config;
use std::io;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await.context("Cannot load config file")?;
    logger::init(config.log_level)?;

    log::info!("Starting lookup against {}", config.api.base_url);
    let session = Session::new(&config.api).context("Cannot start the lookup session")?;

    session
        .run(BufReader::new(tokio::io::stdin()), &mut io::stdout())
        .await?;

    Ok(())
}
