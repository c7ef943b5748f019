//! VAPI webhook service - bridges voice-assistant tool calls to Google Calendar.
//!
//! Exposes a liveness probe and a single tool-calls endpoint. Each webhook
//! request is authenticated against an optional shared secret, then its tool
//! calls are executed sequentially against the configured calendar.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use shared::auth::{verify_shared_secret, SECRET_HEADER};
use shared::models::{ToolCallPayload, ToolCallResponse};
use shared::tools::run_tool_calls;
use shared::{CalendarClient, Config, Error};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
struct AppState {
    config: Config,
}

/// Wrapper mapping service errors onto HTTP responses.
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Liveness probe; no auth.
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Handle a tool-calls webhook from the voice platform.
async fn vapi_tools(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<ToolCallResponse>, ApiError> {
    // Secret check comes first, before looking at the body shape.
    let provided = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok());
    verify_shared_secret(state.config.vapi_shared_secret.as_deref(), provided)?;

    let payload: ToolCallPayload = serde_json::from_value(body).unwrap_or_default();
    let message = match payload.message {
        Some(message) if message.is_tool_calls() => message,
        _ => return Err(Error::InvalidPayload.into()),
    };

    info!("Handling {} tool call(s)", message.tool_call_list.len());

    // One calendar client per batch; calls share its authorized session.
    let client = CalendarClient::new(&state.config);
    let results = run_tool_calls(
        &client,
        &state.config.google_calendar_id,
        message.tool_call_list,
    )
    .await?;

    Ok(Json(ToolCallResponse { results }))
}

/// Build the service router.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/vapi/tools", post(vapi_tools))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let port = config.port;
    let state = Arc::new(AppState { config });

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {}", port);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
