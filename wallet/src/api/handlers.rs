use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use zwallet_nav::NavigationState;

use super::types::{
    ClipboardResponse, CopyRequest, DeeplinkRequest, EventsResponse, InitializationRequest,
    NavigationResponse, ShowListRequest,
};
use crate::{error::HostError, manager::AppManager};

// ============================================================================
// Navigation
// ============================================================================

pub async fn deeplink_handler(
    State(manager): State<Arc<AppManager>>,
    Json(req): Json<DeeplinkRequest>,
) -> Result<Json<NavigationResponse>, HostError> {
    let response = manager.handle_deeplink(&req.uri).await?;
    Ok(Json(response))
}

pub async fn app_initialization_handler(
    State(manager): State<Arc<AppManager>>,
    Json(req): Json<InitializationRequest>,
) -> Result<Json<NavigationResponse>, HostError> {
    let response = manager.set_initialization(req.state).await?;
    Ok(Json(response))
}

pub async fn debug_menu_handler(
    State(manager): State<Arc<AppManager>>,
) -> Result<Json<NavigationResponse>, HostError> {
    let response = manager.show_debug_menu().await?;
    Ok(Json(response))
}

pub async fn back_to_tabs_handler(
    State(manager): State<Arc<AppManager>>,
) -> Result<Json<NavigationResponse>, HostError> {
    let response = manager.back_to_tabs().await?;
    Ok(Json(response))
}

pub async fn get_navigation_handler(
    State(manager): State<Arc<AppManager>>,
) -> Json<NavigationState> {
    Json(manager.navigation_state())
}

// ============================================================================
// Wallet events
// ============================================================================

pub async fn get_events_handler(State(manager): State<Arc<AppManager>>) -> Json<EventsResponse> {
    Json(manager.events())
}

pub async fn start_events_handler(
    State(manager): State<Arc<AppManager>>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.start_events().await?;
    Ok(Json(response))
}

pub async fn stop_events_handler(
    State(manager): State<Arc<AppManager>>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.stop_events().await?;
    Ok(Json(response))
}

pub async fn show_list_handler(
    State(manager): State<Arc<AppManager>>,
    Json(req): Json<ShowListRequest>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.show_list(req.mode).await?;
    Ok(Json(response))
}

pub async fn select_event_handler(
    State(manager): State<Arc<AppManager>>,
    Path(id): Path<String>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.select_event(&id).await?;
    Ok(Json(response))
}

pub async fn clear_selection_handler(
    State(manager): State<Arc<AppManager>>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.clear_selection().await?;
    Ok(Json(response))
}

pub async fn copy_event_handler(
    State(manager): State<Arc<AppManager>>,
    Path(id): Path<String>,
    req: Option<Json<CopyRequest>>,
) -> Result<Json<EventsResponse>, HostError> {
    // Body is optional; copying the transaction id is the default
    let field = req.map(|Json(req)| req.field).unwrap_or_default();
    let response = manager.copy_event_detail(&id, field).await?;
    Ok(Json(response))
}

pub async fn open_event_handler(
    State(manager): State<Arc<AppManager>>,
    Path(id): Path<String>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.open_in_explorer(&id).await?;
    Ok(Json(response))
}

pub async fn confirm_prompt_handler(
    State(manager): State<Arc<AppManager>>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.confirm_open().await?;
    Ok(Json(response))
}

pub async fn dismiss_prompt_handler(
    State(manager): State<Arc<AppManager>>,
) -> Result<Json<EventsResponse>, HostError> {
    let response = manager.dismiss_prompt().await?;
    Ok(Json(response))
}

pub async fn clipboard_handler(State(manager): State<Arc<AppManager>>) -> Json<ClipboardResponse> {
    Json(manager.clipboard())
}
