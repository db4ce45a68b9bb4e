//! Handlers for link management endpoints (create, read, list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "targetUrl": "https://example.com/some/long/path",
///   "customCode": "promo24"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or custom code is malformed.
/// Returns 409 Conflict if the code is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.target_url, payload.custom_code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links ordered by creation time, oldest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link with its click counters.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// The row is removed permanently. The response carries a confirmation
/// message, not the deleted record.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(MessageResponse {
        message: "Link deleted successfully".to_string(),
    }))
}
