/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Casdoor sign-in gateway entry point.
//!
//! Loads `app.yaml`, builds the Casdoor client and serves the sign-in and
//! user-info endpoints on port 8080.

use std::sync::Arc;

use anyhow::Context;
use casdoor_gateway::config::{Config, LISTEN_ADDR};
use casdoor_gateway::provider::CasdoorClient;
use casdoor_gateway::routes;
use casdoor_gateway::state::AppState;
use casdoor_gateway::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::load().context("fatal error config file")?;
    let client = CasdoorClient::new(&config);

    tracing::info!(
        "Casdoor client ready for {} (organization: {}, application: {})",
        config.server.endpoint,
        client.organization(),
        client.application()
    );

    let state = AppState::new(Arc::new(client));
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR)
        .await
        .with_context(|| format!("failed to bind {LISTEN_ADDR}"))?;

    tracing::info!("Casdoor gateway listening on {LISTEN_ADDR}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
