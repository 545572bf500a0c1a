//! `/feedback` collection routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::feedback::{FeedbackDraft, FeedbackId, FeedbackPatch, FeedbackRecord, Rating};
use crate::remote::{MemoryCollection, SortKey, SortOrder};

use super::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub collection: Arc<MemoryCollection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "_sort")]
    pub sort: Option<SortKey>,
    #[serde(rename = "_order")]
    pub order: Option<SortOrder>,
}

/// `PUT` body. Unknown fields such as `id` are ignored.
#[derive(Debug, Deserialize)]
pub struct PatchBody {
    pub text: Option<String>,
    pub rating: Option<u8>,
}

impl PatchBody {
    fn into_patch(self) -> Result<FeedbackPatch, ServerError> {
        let patch = FeedbackPatch {
            text: self.text,
            rating: self.rating.map(Rating::new).transpose()?,
        };
        patch.validate()?;
        Ok(patch)
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub fn build_router(collection: Arc<MemoryCollection>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/feedback", get(list_feedback).post(create_feedback))
        .route(
            "/feedback/{id}",
            get(get_feedback).put(update_feedback).delete(delete_feedback),
        )
        .with_state(AppState { collection })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "feedback-board",
    })
}

async fn list_feedback(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<FeedbackRecord>> {
    let records = match (params.sort, params.order) {
        (None, None) => state.collection.records(),
        (sort, order) => state
            .collection
            .sorted(sort.unwrap_or_default(), order.unwrap_or(SortOrder::Asc)),
    };
    tracing::debug!(count = records.len(), "GET /feedback");
    Json(records)
}

async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FeedbackRecord>, ServerError> {
    let id = parse_id(&id);
    state
        .collection
        .get(&id)
        .map(Json)
        .ok_or(ServerError::NotFound { id })
}

async fn create_feedback(
    State(state): State<AppState>,
    body: Result<Json<FeedbackDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<FeedbackRecord>), ServerError> {
    let Json(draft) = body.map_err(|e| ServerError::InvalidBody(e.body_text()))?;
    let record = state.collection.insert(draft.validate()?);
    tracing::info!(id = %record.id, rating = record.rating.get(), "Feedback created");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatchBody>, JsonRejection>,
) -> Result<Json<FeedbackRecord>, ServerError> {
    let id = parse_id(&id);
    let Json(body) = body.map_err(|e| ServerError::InvalidBody(e.body_text()))?;
    let patch = body.into_patch()?;
    let record = state
        .collection
        .patch(&id, &patch)
        .ok_or_else(|| ServerError::NotFound { id: id.clone() })?;
    tracing::info!(id = %record.id, "Feedback updated");
    Ok(Json(record))
}

async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id);
    if !state.collection.remove(&id) {
        return Err(ServerError::NotFound { id });
    }
    tracing::info!(id = %id, "Feedback deleted");
    Ok(StatusCode::OK)
}

fn parse_id(raw: &str) -> FeedbackId {
    match raw.parse::<FeedbackId>() {
        Ok(id) => id,
        Err(never) => match never {},
    }
}
