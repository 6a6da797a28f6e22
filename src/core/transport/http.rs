//! HTTP transport implementation.
//!
//! Exposes the tool server over plain HTTP + JSON:
//!
//! - `GET /tools` - list tools in registration order
//! - `POST /call` - invoke a tool with `{name, arguments}`
//! - `GET /health` - liveness check
//! - `GET /` - server info

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

use super::api_error::ApiError;
use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ToolServer;
use crate::protocol::{CALL_PATH, CallRequest, CallResponse, ErrorKind, TOOLS_PATH, ToolInfo};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The tool server instance.
    server: ToolServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the router serving `server`.
    pub fn router(&self, server: ToolServer) -> Router {
        let mut app = Router::new()
            .route(TOOLS_PATH, get(list_tools))
            .route(CALL_PATH, post(call_tool))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .fallback(route_not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .with_state(AppState { server });

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(CorsAny)
                .allow_methods(CorsAny)
                .allow_headers(CorsAny);
            app = app.layer(cors);
        }

        app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self, server: ToolServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        self.serve(listener, server, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        server: ToolServer,
        shutdown: F,
    ) -> TransportResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        let app = self.router(server);

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", local_addr, cors_status);
        info!("  → List:   GET {}", TOOLS_PATH);
        info!("  → Call:   POST {}", CALL_PATH);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "tools": TOOLS_PATH,
            "call": CALL_PATH,
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "tools": state.server.registry().len()
    }))
}

/// Handle `GET /tools`.
#[instrument(skip_all)]
async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolInfo>> {
    info!("Processing tools list request");
    Json(state.server.list_tools())
}

/// Handle `POST /call`.
#[instrument(skip_all, fields(tool))]
async fn call_tool(
    State(state): State<AppState>,
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> Result<Json<CallResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Malformed call request: {}", rejection.body_text());
        ApiError::invalid_request(rejection.body_text())
    })?;

    tracing::Span::current().record("tool", request.name.as_str());
    info!("Received call for tool: {}", request.name);

    let result = state
        .server
        .call_tool(&request.name, request.arguments)
        .await?;

    Ok(Json(CallResponse { result }))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::with_status(
        StatusCode::NOT_FOUND,
        ErrorKind::InvalidRequest,
        format!("No route for {}", uri.path()),
    )
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::with_status(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::InvalidRequest,
        format!("Method {} not allowed on {}", method, uri.path()),
    )
}

/// Turn a panic that escaped a handler into a well-formed 500 body.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Request handler panicked: {}", detail);

    ApiError::internal(format!("Internal server error: {}", detail)).into_response()
}
