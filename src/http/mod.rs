//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, JSON extraction + validation)
//!     → handlers.rs (one handler per vector operation)
//!     → response.rs (envelope, error → status mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestUuid, VectorJson, X_REQUEST_ID};
pub use response::{ApiError, ApiResponse};
pub use server::HttpServer;
