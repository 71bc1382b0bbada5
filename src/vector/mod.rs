//! Vector arithmetic domain.
//!
//! # Data Flow
//! ```text
//! JSON body
//!     → types.rs (VectorPair / VectorList, serde + Validate)
//!     → ops.rs (pure computation, Result<T, VectorError>)
//!     → *Result value objects
//!     → http layer wraps them in the response envelope
//! ```
//!
//! # Design Decisions
//! - Every operation is a pure function of its input
//! - Non-finite inputs and results are errors, never silently returned
//! - A zero vector has no direction, so its angle is an error variant
//!   the HTTP layer reports inside a normal envelope

pub mod error;
pub mod ops;
pub mod types;

pub use error::{VectorError, VectorResult};
pub use types::{
    AngleResult, DotResult, MagnitudeResult, SumResult, Validate, Vector2D, VectorList,
    VectorPair,
};
