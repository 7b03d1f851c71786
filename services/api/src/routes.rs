use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use zengen::workflows::blueprint::{blueprint_router, BlueprintService, ScoreStore};

pub(crate) fn with_blueprint_routes<S>(service: Arc<BlueprintService<S>>) -> axum::Router
where
    S: ScoreStore + 'static,
{
    blueprint_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryScoreStore;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;
    use zengen::workflows::blueprint::Catalog;

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(BlueprintService::new(
            Arc::new(InMemoryScoreStore::default()),
            Catalog::standard(),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_blueprint_routes(service).layer(Extension(state))
    }

    async fn get(router: axum::Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        assert_eq!(get(app(false), "/ready").await.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(get(app(true), "/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_are_plain_text() {
        let response = get(app(true), "/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn report_falls_back_to_last_scored_value() {
        let store = Arc::new(InMemoryScoreStore::default());
        let service = Arc::new(BlueprintService::new(store.clone(), Catalog::standard()));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let router = with_blueprint_routes(service).layer(Extension(state));

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/calculate_score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "rice": 1,
                            "miso_soup": 1,
                            "seaweed": 1,
                            "pickles": 1,
                            "green_yellow_veg": 1,
                            "fish": 1,
                            "green_tea": 1,
                        })
                        .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.latest().value(), 8);

        let report = get(router, "/download-report").await;
        assert_eq!(report.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(report.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let pdf = lopdf::Document::load_mem(&bytes).expect("valid pdf");
        let pages = pdf.get_pages();
        let raw = pdf.get_page_content(pages[&1]).expect("page content");
        let content = lopdf::content::Content::decode(&raw).expect("content decodes");
        assert!(content.operations.iter().any(|operation| {
            operation.operator == "Tj"
                && operation
                    .operands
                    .first()
                    .and_then(|operand| operand.as_str().ok())
                    == Some(&b"8/8"[..])
        }));
    }
}
