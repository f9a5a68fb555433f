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

//! Axum router configuration for the sign-in gateway.

pub mod signin;
pub mod userinfo;

use std::any::Any;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::AppError;
use crate::state::AppState;

/// Browser origins allowed to call the API with credentials.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Build the bare route table.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/signin", post(signin::signin))
        .route("/api/userinfo", get(userinfo::userinfo))
}

/// Build the full application: routes, state and middleware.
pub fn app(state: AppState) -> Router {
    // CORS sits outermost so panic responses still carry the allow headers.
    router()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer())
        .with_state(state)
}

/// CORS policy for the two local frontend origins.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(ALLOWED_ORIGINS.map(HeaderValue::from_static)))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {detail}");
    AppError::internal().into_response()
}
