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

//! Shared application state passed to every Axum handler via `State`.

use std::sync::Arc;

use crate::provider::IdentityProvider;

/// Application state shared across all request handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Identity provider client (Casdoor in production, a fake in tests).
    pub provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }
}
