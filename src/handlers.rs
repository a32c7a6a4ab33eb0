use crate::errors::AppError;
use crate::models::{ClientBillingRecord, ClientForm, DashboardResponse};
use crate::registry::Action;
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let registry = state.registry.lock().await;
    let dashboard = build_dashboard(registry.records());
    Html(render_index(&dashboard))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let registry = state.registry.lock().await;
    Json(build_dashboard(registry.records()))
}

pub async fn list_clients(State(state): State<AppState>) -> Json<Vec<ClientBillingRecord>> {
    let registry = state.registry.lock().await;
    debug!(count = registry.len(), "listing clients");
    Json(registry.records().to_vec())
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ClientBillingRecord>, AppError> {
    let registry = state.registry.lock().await;
    registry.get(id).cloned().map(Json).ok_or_else(|| missing(id))
}

pub async fn add_client(
    State(state): State<AppState>,
    Json(form): Json<ClientForm>,
) -> Result<(StatusCode, Json<ClientBillingRecord>), AppError> {
    match apply(&state, Action::Add(form)).await? {
        Some(record) => Ok((StatusCode::CREATED, Json(record))),
        None => Err(AppError::bad_request("client was not added")),
    }
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(form): Json<ClientForm>,
) -> Result<Json<ClientBillingRecord>, AppError> {
    let record = apply(&state, Action::Update { id, form }).await?;
    record.map(Json).ok_or_else(|| missing(id))
}

/// Removing an unknown id succeeds without changing anything.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if apply(&state, Action::Remove(id)).await?.is_none() {
        debug!(id, "delete ignored, no such client");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn mark_paid(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ClientBillingRecord>, AppError> {
    let record = apply(&state, Action::MarkPaid(id)).await?;
    record.map(Json).ok_or_else(|| missing(id))
}

async fn apply(state: &AppState, action: Action) -> Result<Option<ClientBillingRecord>, AppError> {
    let mut registry = state.registry.lock().await;
    Ok(registry.apply(action, today())?)
}

fn missing(id: u64) -> AppError {
    AppError::not_found(format!("client {id} not found"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
