//! API router.
//!
//! Returns a composable `Router`: JSON endpoints nested under `/api`,
//! the built frontend served from the static directory for everything
//! else, CORS and security headers applied across the board.

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::config;

/// Build the application router.
///
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`);
/// the rate-limit middleware reads the same context from request
/// extensions, so `Extension` must be the outermost API layer.
pub fn app_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/predict", post(endpoints::predict::predict))
        .route("/health", get(endpoints::health::check))
        .route("/diseases", get(endpoints::diseases::list))
        .route("/diseases/:id", get(endpoints::diseases::detail))
        .route(
            "/theme",
            get(endpoints::theme::get).put(endpoints::theme::put),
        )
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::rate::limit))
        .layer(axum::Extension(ctx));

    // Single-page frontend: unknown paths fall back to index.html
    let static_dir = config::static_dir();
    let frontend = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api)
        .fallback_service(frontend)
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::types::RateLimiter;
    use crate::catalog::DiseaseCatalog;
    use crate::theme::ThemeStore;

    fn test_ctx() -> ApiContext {
        ApiContext::new(Arc::new(DiseaseCatalog::builtin())).with_latency(Duration::ZERO)
    }

    fn router() -> Router {
        app_router(test_ctx())
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn diabetes_body() -> Value {
        json!({
            "disease": "diabetes",
            "patientName": "Marie Curie",
            "patientAge": "58",
            "patientGender": "female",
            "pregnancies": 0,
            "glucose": 150,
            "bloodpressure": 85,
            "skinthickness": 20,
            "insulin": 80,
            "bmi": 32,
            "pedigree": 0.6,
            "age": 50,
        })
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = router().oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn predict_scores_a_full_submission() {
        let response = router()
            .oneshot(post_json("/api/predict", diabetes_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["prediction"]["risk"], "high");
        assert!((json["prediction"]["score"].as_f64().unwrap() - 0.75).abs() < 1e-9);
        let confidence = json["prediction"]["confidence"].as_u64().unwrap();
        assert!((80..=100).contains(&confidence));
        assert_eq!(
            json["prediction"]["recommendations"].as_array().unwrap().len(),
            7
        );
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn predict_without_identity_is_400() {
        let mut body = diabetes_body();
        body.as_object_mut().unwrap().remove("patientName");
        let response = router()
            .oneshot(post_json("/api/predict", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Missing required fields: disease and patientName"
        );
    }

    #[tokio::test]
    async fn predict_blank_disease_is_400() {
        let mut body = diabetes_body();
        body["disease"] = json!("   ");
        let response = router()
            .oneshot(post_json("/api/predict", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn predict_unknown_disease_is_400() {
        let mut body = diabetes_body();
        body["disease"] = json!("gout");
        let response = router()
            .oneshot(post_json("/api/predict", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Unknown disease: gout");
    }

    #[tokio::test]
    async fn predict_reports_every_invalid_field() {
        let mut body = diabetes_body();
        {
            let map = body.as_object_mut().unwrap();
            map.remove("glucose");
            map.insert("bmi".into(), json!("heavy"));
        }
        let response = router()
            .oneshot(post_json("/api/predict", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation failed for 2 field(s)");
        let fields = json["fields"].as_array().unwrap();
        // Catalog order: glucose before bmi
        assert_eq!(fields[0]["param"], "glucose");
        assert_eq!(fields[0]["message"], "Glucose Level (mg/dL) is required");
        assert_eq!(fields[1]["param"], "bmi");
    }

    #[tokio::test]
    async fn diseases_lists_catalog_in_order() {
        let response = router().oneshot(get_request("/api/diseases")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["diabetes", "heart", "parkinsons"]);
    }

    #[tokio::test]
    async fn disease_detail_includes_parameter_specs() {
        let response = router()
            .oneshot(get_request("/api/diseases/parkinsons"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Parkinson's Disease");
        assert_eq!(json["parameters"].as_array().unwrap().len(), 12);
        assert_eq!(json["parameters"][3]["id"], "jitter");
        assert_eq!(json["parameters"][3]["required"], true);
    }

    #[tokio::test]
    async fn unknown_disease_detail_is_404() {
        let response = router()
            .oneshot(get_request("/api/diseases/gout"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Unknown disease: gout");
    }

    #[tokio::test]
    async fn wrong_method_on_predict_is_405() {
        let response = router().oneshot(get_request("/api/predict")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn theme_round_trips_through_the_api() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx().with_theme_store(ThemeStore::new(dir.path().join("theme.json")));
        let router = app_router(ctx);

        let put = Request::builder()
            .method("PUT")
            .uri("/api/theme")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"theme": "dark"}).to_string()))
            .unwrap();
        let response = router.clone().oneshot(put).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router.oneshot(get_request("/api/theme")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["theme"], "dark");
    }

    #[tokio::test]
    async fn burst_beyond_limit_is_rate_limited() {
        let ctx = test_ctx()
            .with_rate_limiter(RateLimiter::with_limits(2, Duration::from_secs(60)));
        let router = app_router(ctx);

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(get_request("/api/health"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        let response = router.oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(response.headers().get("Retry-After").is_some());
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let response = router().oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
    }

    #[tokio::test]
    async fn concurrent_submissions_do_not_serialize_on_the_delay() {
        // Two delayed submissions through the same router should finish in
        // roughly one delay, not two: each is an independent suspension.
        let ctx = test_ctx().with_latency(Duration::from_millis(200));
        let router = app_router(ctx);

        let started = std::time::Instant::now();
        let (a, b) = tokio::join!(
            router.clone().oneshot(post_json("/api/predict", diabetes_body())),
            router.clone().oneshot(post_json("/api/predict", diabetes_body())),
        );
        assert_eq!(a.unwrap().status(), StatusCode::OK);
        assert_eq!(b.unwrap().status(), StatusCode::OK);
        assert!(
            started.elapsed() < Duration::from_millis(390),
            "submissions serialized on the simulated delay"
        );
    }
}
