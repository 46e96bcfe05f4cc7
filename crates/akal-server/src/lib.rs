//! Abfallkalender HTTP Server
//!
//! Exposes the collection pipeline of `akal-core` as a small JSON API:
//!
//! ```text
//! GET /?street=Kaiserstraße&nr=12
//! {"CollectionDates":[{"name":"Restmüll","period":"14-täglich","dates":["2024-01-03"]}]}
//! ```
//!
//! Invalid parameters yield `400`, upstream failures `502`. Responses allow
//! any origin.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use akal_core::{CollectionPipeline, Fetcher};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Config;

/// Shared, immutable request state.
pub struct AppState<F> {
    pub pipeline: Arc<CollectionPipeline<F>>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// Build the application router around a pipeline.
pub fn router<F: Fetcher + 'static>(pipeline: CollectionPipeline<F>) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    Router::new()
        .route("/", get(handlers::collection_dates::<F>))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
}

/// Install the global tracing subscriber.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = if config.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_span_list(false)
            .with_filter(filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_filter(filter)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).init();
}
