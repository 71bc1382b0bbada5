//! 2-D vector arithmetic over HTTP.
//!
//! The service computes sums, dot products, magnitudes and angles of plane
//! vectors and serves a small browser front-end for them.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod vector;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::{start, Shutdown};
