use crate::catalog::Catalog;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use anyhow::Context;
use astra::Server;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fixflip=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Seed data is compiled in; a bad seed should stop us before we bind.
    let catalog = Catalog::seed().context("Failed to load property catalog")?;
    tracing::info!(
        properties = catalog.properties().len(),
        "Property catalog loaded"
    );

    tracing::info!(
        "Starting server at http://{} with {} workers",
        config.addr,
        config.max_workers
    );

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    server
        .serve(move |req: astra::Request, _info| {
            let started = Instant::now();
            let method = req.method().clone();
            let path = req.uri().path().to_string();

            let resp = match handle(req, &catalog) {
                Ok(resp) => resp,
                Err(err) => error_to_response(err),
            };

            tracing::debug!(
                %method,
                %path,
                status = resp.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "handled request"
            );
            resp
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
