use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::runner::{run_script, ScriptConfig, ScriptOutput};

#[derive(Debug, Serialize)]
pub struct RunSuccess {
    pub stdout: String,
    pub stderr: String,
    pub status: &'static str,
}

impl From<ScriptOutput> for RunSuccess {
    fn from(out: ScriptOutput) -> Self {
        // The exit code is deliberately dropped: a child that ran and failed
        // still counts as a successful run, and callers detect script-level
        // failure from the stderr text.
        Self {
            stdout: out.stdout,
            stderr: out.stderr,
            status: "success",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunFailure {
    pub error: String,
    pub status: &'static str,
}

pub fn app(config: ScriptConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/run-model", post(run_model))
        .layer(cors)
        .with_state(Arc::new(config))
}

async fn run_model(State(config): State<Arc<ScriptConfig>>) -> Response {
    match run_script(&config).await {
        Ok(output) => (StatusCode::OK, Json(RunSuccess::from(output))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "script launch failed");
            let body = RunFailure {
                error: err.to_string(),
                status: "error",
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

pub async fn serve(addr: SocketAddr, config: ScriptConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, script = %config.script_path.display(), "listening");
    axum::serve(listener, app(config)).await
}

pub async fn spawn_test_server(config: ScriptConfig) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app(config)).await;
    });
    (addr, handle)
}
