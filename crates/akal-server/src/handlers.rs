//! HTTP handlers for the collection calendar.

use akal_core::{Address, Fetcher, ScheduleEntry};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

/// Raw query parameters, validated into an [`Address`] before any upstream call.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    pub street: Option<String>,
    pub nr: Option<String>,
}

/// Response envelope
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    #[serde(rename = "CollectionDates")]
    pub collection_dates: Vec<ScheduleEntry>,
}

/// `GET /?street=<street>&nr=<house number>`
pub async fn collection_dates<F: Fetcher + 'static>(
    State(state): State<AppState<F>>,
    Query(query): Query<CollectionQuery>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let address = Address::from_query(query.street.as_deref(), query.nr.as_deref())?;
    let collection_dates = state.pipeline.run(&address).await?;

    Ok(Json(CollectionResponse { collection_dates }))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
