use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use classify::{AnalysisError, AnalysisReport, Analyzer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::metrics::{Metrics, MetricsSnapshot, TimedOperation};
use crate::render;

pub struct AppState {
    pub analyzer: Analyzer,
    pub metrics: Arc<Metrics>,
}

#[derive(Deserialize)]
pub struct AnalyzeInput {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    classifier: String,
    group_size: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_status: Option<u16>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze_form))
        .route("/api/analyze", post(analyze_json))
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render::form_page(""))
}

async fn analyze_form(
    State(state): State<Arc<AppState>>,
    Form(input): Form<AnalyzeInput>,
) -> (StatusCode, Html<String>) {
    match run_analysis(&state, &input.text).await {
        Ok(report) => (StatusCode::OK, Html(render::report_page(&input.text, &report))),
        Err(AnalysisError::EmptyInput) => (
            StatusCode::OK,
            Html(render::warning_page(&input.text, &AnalysisError::EmptyInput.to_string())),
        ),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Html(render::error_page(&input.text, &e)),
        ),
    }
}

async fn analyze_json(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AnalyzeInput>,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<ErrorResponse>)> {
    run_analysis(&state, &input.text).await.map(Json).map_err(|e| {
        let status = if e.is_user_warning() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::BAD_GATEWAY
        };
        let upstream_status = match &e {
            AnalysisError::Status { status, .. } => Some(*status),
            _ => None,
        };
        (
            status,
            Json(ErrorResponse {
                error: e.to_string(),
                upstream_status,
            }),
        )
    })
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        classifier: state.analyzer.endpoint().to_string(),
        group_size: state.analyzer.group_size(),
    })
}

async fn get_stats(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

/// Run one analysis and record its outcome
async fn run_analysis(state: &AppState, text: &str) -> Result<AnalysisReport, AnalysisError> {
    let run_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("analysis", %run_id);

    async {
        let timer = TimedOperation::start();
        let outcome = state.analyzer.analyze(text).await;

        match &outcome {
            Ok(report) => {
                state.metrics.record_success(
                    timer.elapsed(),
                    report.sentence_count,
                    report.groups.len(),
                );
                tracing::info!(
                    groups = report.groups.len(),
                    elapsed_ms = timer.elapsed().as_millis() as u64,
                    "Analysis complete"
                );
            }
            Err(AnalysisError::EmptyInput) => {
                state.metrics.record_rejected();
                tracing::info!("Rejected blank input");
            }
            Err(e) => {
                state.metrics.record_failure();
                tracing::error!(error = %e, "Analysis failed");
            }
        }

        outcome
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use classify::testing::MockClassifier;
    use classify::{AnalysisClient, DEFAULT_TIMEOUT};
    use ingest::GrouperConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use verdict::ClassificationResult;

    fn app(url: String) -> (Router, Arc<AppState>) {
        let client = AnalysisClient::new(url, DEFAULT_TIMEOUT).unwrap();
        let state = Arc::new(AppState {
            analyzer: Analyzer::new(client, GrouperConfig::default()).unwrap(),
            metrics: Metrics::new(),
        });
        (router(state.clone()), state)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(text: &str) -> Request<Body> {
        let body = format!("text={}", text.replace(' ', "+"));
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "text": text }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let (app, _) = app(MockClassifier::closed_url().await);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<h1>Fake News Detector</h1>"));
        assert!(html.contains("<button type=\"submit\">Analyze</button>"));
    }

    #[tokio::test]
    async fn test_form_analysis_renders_results() {
        let mock = MockClassifier::uniform(ClassificationResult::new("REAL", 92.0)).await;
        let (app, state) = app(mock.url());

        let response = app.oneshot(form_request("Water is wet. Fire is hot.")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Analysis Results:"));
        assert!(html.contains("color:green;font-weight:bold\">Likely True</span>"));
        assert!(html.contains("(Confidence: 92.0%)"));
        assert_eq!(state.metrics.snapshot().successful_runs, 1);
    }

    #[tokio::test]
    async fn test_form_blank_input_warns() {
        let mock = MockClassifier::uniform(ClassificationResult::new("REAL", 92.0)).await;
        let (app, state) = app(mock.url());

        let response = app.oneshot(form_request("   ")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Please enter some text to analyze."));
        assert!(mock.requests().is_empty());
        assert_eq!(state.metrics.snapshot().rejected_inputs, 1);
    }

    #[tokio::test]
    async fn test_form_service_error_shown() {
        let mock = MockClassifier::fail(500, "model crashed").await;
        let (app, state) = app(mock.url());

        let response = app.oneshot(form_request("Something.")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_string(response).await;
        assert!(html.contains("API Error: 500 - model crashed"));
        assert_eq!(state.metrics.snapshot().failed_runs, 1);
    }

    #[tokio::test]
    async fn test_json_analysis() {
        let mock = MockClassifier::uniform(ClassificationResult::new("FAKE", 40.0)).await;
        let (app, _) = app(mock.url());

        let response = app.oneshot(json_request("A. B. C. D.")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let report: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(report["sentence_count"], 4);
        assert_eq!(report["groups"].as_array().unwrap().len(), 2);
        assert_eq!(report["groups"][0]["text"], "A. B. C.");
        assert_eq!(report["groups"][0]["verdict"]["display_label"], "Likely Fake");
        assert_eq!(report["groups"][0]["verdict"]["color"], "gray");
        assert_eq!(report["groups"][0]["verdict"]["bar_position"], 20.0);
    }

    #[tokio::test]
    async fn test_json_blank_input_is_unprocessable() {
        let (app, _) = app(MockClassifier::closed_url().await);
        let response = app.oneshot(json_request("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_json_unreachable_is_bad_gateway() {
        let (app, _) = app(MockClassifier::closed_url().await);

        let response = app.oneshot(json_request("Hello there.")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("could not contact analysis service"));
        assert!(body.get("upstream_status").is_none());
    }

    #[tokio::test]
    async fn test_health_and_stats() {
        let url = MockClassifier::closed_url().await;
        let (app, _) = app(url.clone());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let health: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["classifier"], url);
        assert_eq!(health["group_size"], 3);

        let response = app
            .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let stats: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(stats["total_runs"], 0);
    }
}
