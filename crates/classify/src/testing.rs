//! A stand-in classifier served by axum on an ephemeral local port.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use verdict::ClassificationResult;

use crate::schema::{AnalyzeRequest, AnalyzeResponse};

#[derive(Clone)]
enum Reply {
    Json(Value),
    Raw(String),
    Status(u16, String),
    PerParagraph(ClassificationResult),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    requests: Arc<Mutex<Vec<AnalyzeRequest>>>,
}

pub struct MockClassifier {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<AnalyzeRequest>>>,
}

impl MockClassifier {
    /// Answer every request with this JSON document
    pub async fn respond(body: Value) -> Self {
        Self::start(Reply::Json(body)).await
    }

    /// Answer every request with this body, untouched
    pub async fn respond_raw(body: &str) -> Self {
        Self::start(Reply::Raw(body.to_string())).await
    }

    /// Answer every request with a non-success status
    pub async fn fail(status: u16, body: &str) -> Self {
        Self::start(Reply::Status(status, body.to_string())).await
    }

    /// Answer with one copy of `result` per requested paragraph
    pub async fn uniform(result: ClassificationResult) -> Self {
        Self::start(Reply::PerParagraph(result)).await
    }

    /// A URL nothing is listening on
    pub async fn closed_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{}/analyze", addr)
    }

    pub fn url(&self) -> String {
        format!("http://{}/analyze", self.addr)
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<AnalyzeRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    async fn start(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/analyze", post(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, requests }
    }
}

async fn handle(State(state): State<MockState>, body: String) -> impl IntoResponse {
    let request: Option<AnalyzeRequest> = serde_json::from_str(&body).ok();
    let paragraphs = request.as_ref().map_or(0, |r| r.paragraphs.len());
    if let Some(request) = request {
        state.requests.lock().expect("requests lock").push(request);
    }

    let (status, body) = match state.reply {
        Reply::Json(value) => (StatusCode::OK, value.to_string()),
        Reply::Raw(raw) => (StatusCode::OK, raw),
        Reply::Status(code, raw) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            raw,
        ),
        Reply::PerParagraph(result) => {
            let response = AnalyzeResponse {
                paragraphs: vec![result; paragraphs],
            };
            (
                StatusCode::OK,
                serde_json::to_string(&response).unwrap_or_default(),
            )
        }
    };

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
