//! src/main.rs
//!
//! The entrypoint for the bloglist binary: sets up logging, loads the
//! configuration and hands over to `App`.

use anyhow::Context;
use bloglist::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `RUST_LOG` overrides the default filter. axum logs extractor
    // rejections at TRACE under `axum::rejection`.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    App::new(config)?.run().await?;
    Ok(())
}
