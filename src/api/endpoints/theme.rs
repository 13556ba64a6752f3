//! Theme preference endpoints — read and persist the single light/dark key.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::theme::Theme;

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// `GET /api/theme` — current preference (default when never saved).
pub async fn get(State(ctx): State<ApiContext>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: ctx.theme.load(),
    })
}

/// `PUT /api/theme` — persist a new preference.
pub async fn put(
    State(ctx): State<ApiContext>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, ApiError> {
    ctx.theme
        .save(body.theme)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(body))
}
