//! Rust client for the vector service HTTP API.

pub mod client;

pub use client::VectorClient;
