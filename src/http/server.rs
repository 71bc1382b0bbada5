//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with every handler
//! - Wire up middleware (request ID, tracing, timeout, body limit, CORS, metrics)
//! - Enforce the body limit inside extraction so oversized bodies get the envelope
//! - Serve the static front-end
//! - Run until shutdown is requested

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Uri},
    middleware,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{CorsConfig, ServiceConfig};
use crate::health;
use crate::http::handlers;
use crate::http::request::RequestUuid;
use crate::http::response::ApiError;
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;

/// HTTP server for the vector API and its front-end.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig) -> Router {
        let statics = &config.static_files;

        Router::new()
            .route("/health", get(health::health))
            .nest("/api", handlers::router())
            .route_service("/", ServeFile::new(statics.index_path()))
            .nest_service("/static", ServeDir::new(&statics.dir))
            .fallback(not_found)
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(cors_layer(&config.cors))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestUuid))
    }

    /// Run the server on the given listener until `shutdown` fires or the
    /// process receives a termination signal.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_dir = %self.config.static_files.dir.display(),
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => tracing::info!("Shutdown requested"),
                    _ = shutdown_signal() => {},
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// An empty origin list means unrestricted cross-origin access.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    // Entries were checked by config validation.
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(origins))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        HttpServer::new(ServiceConfig::default()).router()
    }

    async fn post_json(path: &str, body: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_sum_endpoint() {
        let (status, body) =
            post_json("/api/suma_vectores", r#"{"Ax":3,"Ay":4.5,"Bx":1.5,"By":2.5}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": {"Rx": 4.5, "Ry": 7.0}}));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let (status, body) = post_json("/api/producto_punto", r#"{"Ax":1,"Ay":2,"By":4}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["result"], Value::Null);
        assert!(body["detail"].as_str().unwrap().contains("Bx"));
    }

    #[tokio::test]
    async fn test_zero_vector_angle_envelope() {
        let (status, body) =
            post_json("/api/angulo_vectores", r#"{"Ax":0,"Ay":0,"Bx":1,"By":0}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["result"], Value::Null);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_overflow_is_bad_request() {
        let (status, body) = post_json(
            "/api/suma_vectores",
            r#"{"Ax":1.7e308,"Ay":0,"Bx":1.7e308,"By":0}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let response = router()
            .oneshot(
                Request::post("/api/suma_vectores")
                    .body(Body::from(r#"{"Ax":1,"Ay":1,"Bx":1,"By":1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_on_operation_not_allowed() {
        let response = router()
            .oneshot(Request::get("/api/suma_vectores").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = router()
            .oneshot(Request::get("/api/cross_product").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], json!("no route for /api/cross_product"));
    }

    #[tokio::test]
    async fn test_request_id_is_set() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert_eq!(id.len(), 36);
    }

    #[tokio::test]
    async fn test_body_limit() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_bytes = 16;
        let router = HttpServer::new(config).router();
        let payload = r#"{"Ax":1,"Ay":1,"Bx":1,"By":1}"#;

        for declare_length in [true, false] {
            let mut request = Request::post("/api/suma_vectores")
                .header(header::CONTENT_TYPE, "application/json");
            if declare_length {
                request = request.header(header::CONTENT_LENGTH, payload.len().to_string());
            }
            let response = router
                .clone()
                .oneshot(request.body(Body::from(payload)).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["success"], json!(false));
            assert_eq!(body["result"], Value::Null);
            assert!(body["detail"].is_string());
        }
    }

    #[tokio::test]
    async fn test_body_limit_above_axum_default() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_bytes = 4 * 1024 * 1024;
        let padding = " ".repeat(3 * 1024 * 1024);
        let body = format!(r#"{{"Ax":1,{padding}"Ay":1,"Bx":1,"By":1}}"#);
        let response = HttpServer::new(config)
            .router()
            .oneshot(
                Request::post("/api/suma_vectores")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::CONTENT_LENGTH, body.len().to_string())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    fn request_metrics(request: Request<Body>) -> String {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        ::metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async { router().oneshot(request).await.unwrap() })
        });
        handle.render()
    }

    #[test]
    fn test_metrics_label_route_template() {
        let rendered = request_metrics(
            Request::post("/api/suma_vectores")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"Ax":1,"Ay":1,"Bx":1,"By":1}"#))
                .unwrap(),
        );
        assert!(rendered.contains("vector_requests_total"));
        assert!(rendered.contains(r#"path="/api/suma_vectores""#));
        assert!(rendered.contains(r#"status="200""#));
        assert!(!rendered.contains(r#"path="unmatched""#));
    }

    #[test]
    fn test_metrics_label_unmatched_route() {
        let rendered = request_metrics(
            Request::get("/api/cross_product").body(Body::empty()).unwrap(),
        );
        assert!(rendered.contains(r#"path="unmatched""#));
        assert!(rendered.contains(r#"status="404""#));
    }

    #[tokio::test]
    async fn test_cors_preflight_any_origin() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/suma_vectores")
                    .header(header::ORIGIN, "http://elsewhere.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN].to_str().unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_restricted_origin() {
        let mut config = ServiceConfig::default();
        config.cors.allowed_origins = vec!["http://app.example".into()];
        let response = HttpServer::new(config)
            .router()
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://app.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN].to_str().unwrap(),
            "http://app.example"
        );
    }
}
