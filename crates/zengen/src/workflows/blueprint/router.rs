use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::domain::IntakeAnswers;
use super::service::{BlueprintService, ReportRequest, ScoreResponse};
use super::store::ScoreStore;
use crate::error::AppError;

/// Router builder exposing scoring and report download.
pub fn blueprint_router<S>(service: Arc<BlueprintService<S>>) -> Router
where
    S: ScoreStore + 'static,
{
    Router::new()
        .route("/api/calculate_score", post(score_handler::<S>))
        .route("/download-report", get(report_handler::<S>))
        .with_state(service)
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<BlueprintService<S>>>,
    Json(payload): Json<Value>,
) -> Json<ScoreResponse>
where
    S: ScoreStore + 'static,
{
    let answers = IntakeAnswers::from_value(&payload);
    Json(service.score(&answers))
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<BlueprintService<S>>>,
    Query(request): Query<ReportRequest>,
) -> Result<Response, AppError>
where
    S: ScoreStore + 'static,
{
    let report = tokio::task::spawn_blocking(move || service.report(request))
        .await
        .map_err(|err| AppError::Server(axum::Error::new(err)))??;
    let disposition = format!("attachment; filename=\"{}\"", report.filename);
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_str(report.media_type.as_ref())
                    .unwrap_or_else(|_| HeaderValue::from_static("application/pdf")),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::blueprint::catalog::Catalog;
    use crate::workflows::blueprint::domain::Jdi8Score;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct MemoryScores(Mutex<Jdi8Score>);

    impl ScoreStore for MemoryScores {
        fn record(&self, score: Jdi8Score) {
            *self.0.lock().expect("score mutex poisoned") = score;
        }

        fn latest(&self) -> Jdi8Score {
            *self.0.lock().expect("score mutex poisoned")
        }
    }

    fn router() -> (Router, Arc<BlueprintService<MemoryScores>>) {
        let service = Arc::new(BlueprintService::new(
            Arc::new(MemoryScores::default()),
            Catalog::standard(),
        ));
        (blueprint_router(service.clone()), service)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn calculate_score_returns_breakdown() {
        let (router, service) = router();
        let response = router
            .oneshot(
                Request::post("/api/calculate_score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"rice": true, "miso_soup": 1, "beef_pork": true}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["score"], 2);
        assert_eq!(body["max_score"], 8);
        assert_eq!(body["tier"], "low");
        assert_eq!(body["tier_label"], "Low");
        assert_eq!(body["components"].as_array().map(Vec::len), Some(8));
        assert_eq!(body["risk_reduction"], "Low");
        assert_eq!(
            body["details"],
            serde_json::json!([
                "rice: +1 (High Intake)",
                "miso_soup: +1 (High Intake)",
                "seaweed: 0 (Low Intake)",
                "pickles: 0 (Low Intake)",
                "green_yellow_veg: 0 (Low Intake)",
                "fish: 0 (Low Intake)",
                "green_tea: 0 (Low Intake)",
                "beef_pork: 0 (High Intake)",
            ])
        );
        assert_eq!(body["components"][7]["detail"], "beef_pork: 0 (High Intake)");
        assert_eq!(service.latest_score().value(), 2);
    }

    #[tokio::test]
    async fn non_object_body_scores_default_answers() {
        let (router, _) = router();
        let response = router
            .oneshot(
                Request::post("/api/calculate_score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("[1, 2, 3]"))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["score"], 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn download_report_serves_pdf_attachment() {
        let (router, _) = router();
        let response = router
            .oneshot(
                Request::get("/download-report?score=6")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/pdf")
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            HeaderValue::from_static(
                "attachment; filename=\"ZenGen_Longevity_Premium_Report.pdf\""
            )
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn download_report_falls_back_to_latest_score() {
        let (router, service) = router();
        service.score(&IntakeAnswers::new().with(
            crate::workflows::blueprint::domain::Indicator::Rice,
            true,
        ));
        let response = router
            .oneshot(
                Request::get("/download-report")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(service.latest_score().value(), 2);
    }

    #[tokio::test]
    async fn download_report_rejects_non_numeric_score() {
        let (router, _) = router();
        let response = router
            .oneshot(
                Request::get("/download-report?score=high")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
