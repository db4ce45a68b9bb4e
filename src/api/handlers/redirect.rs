//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically increment `clicks` and stamp `last_clicked` in the store
/// 2. Return 302 Found with the pre-click target URL in `Location`
///
/// An unknown code mutates nothing and returns 404.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.link_service.resolve_click(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
