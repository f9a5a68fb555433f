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

//! Casdoor sign-in gateway library.
//!
//! This crate provides the Axum router, application state, configuration and
//! identity provider client for the gateway. The binary entry point
//! (`main.rs`) is a thin wrapper that calls into this library.

pub mod auth;
pub mod config;
pub mod error;
pub mod provider;
pub mod routes;
pub mod state;
pub mod telemetry;
