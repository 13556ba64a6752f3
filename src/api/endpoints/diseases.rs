//! Disease catalog endpoints — serve the definitions a form-rendering
//! client needs (labels, bounds, placeholders, help text).

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::catalog::{CatalogError, DiseaseDefinition};

/// `GET /api/diseases` — all definitions in catalog order.
pub async fn list(State(ctx): State<ApiContext>) -> Json<Vec<DiseaseDefinition>> {
    Json(ctx.catalog.list().to_vec())
}

/// `GET /api/diseases/:id` — one definition, 404 for unknown ids.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<DiseaseDefinition>, ApiError> {
    let definition = ctx.catalog.get_by_str(&id).map_err(|err| match err {
        CatalogError::UnknownDisease(id) => ApiError::NotFound(format!("Unknown disease: {id}")),
    })?;
    Ok(Json(definition.clone()))
}
