//! Prediction endpoint — the one route that exercises the whole core:
//! catalog lookup, whole-form validation, then scoring.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::engine::RiskResult;
use crate::validator::RawFields;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    /// Captured so they stay out of the parameter field map; the engine
    /// never sees patient metadata.
    #[serde(default)]
    pub patient_age: Option<Value>,
    #[serde(default)]
    pub patient_gender: Option<Value>,
    /// Everything else is treated as a clinical parameter field.
    #[serde(flatten)]
    pub fields: RawFields,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: RiskResult,
    pub timestamp: String,
}

/// `POST /api/predict` — run an assessment.
///
/// Validation failures return synchronously; only a clean submission pays
/// the simulated processing delay. Each submission is an independent
/// task, so the delay never blocks concurrent requests.
pub async fn predict(
    State(ctx): State<ApiContext>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let disease = request
        .disease
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let patient_name = request
        .patient_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let (Some(disease), Some(_patient_name)) = (disease, patient_name) else {
        return Err(ApiError::MissingRequiredFields);
    };

    let definition = ctx.catalog.get_by_str(disease)?;
    let vector = ctx.validator.validate(definition.id, &request.fields)?;

    if !ctx.simulated_latency.is_zero() {
        tokio::time::sleep(ctx.simulated_latency).await;
    }

    let assessment_id = Uuid::new_v4();
    let prediction = ctx
        .engine
        .score(definition.id, &vector)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(
        %assessment_id,
        disease = %definition.id,
        risk = prediction.risk.as_str(),
        score = prediction.score,
        confidence = prediction.confidence,
        "Assessment complete"
    );

    Ok(Json(PredictResponse {
        success: true,
        prediction,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
