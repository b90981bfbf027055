mod api;
mod card;
mod config;
mod error;
mod logging;
mod lotr;
mod markdown;
mod normalize;
mod sets_controller;
#[cfg(test)]
mod test_server;

use std::error::Error;
use std::process;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    };

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    sets_controller::scrape_sets(&client, &config.base_url, &config.output_dir, &config::SETS)
        .await;

    Ok(())
}
