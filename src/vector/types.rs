//! Request and result value objects.
//!
//! Field names on the wire follow the public API contract (`Ax`, `Rx`,
//! `magnitud_A`, ...); Rust-side names are snake_case.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::vector::error::{VectorError, VectorResult};

/// Boundary validation run after deserialization and before any handler logic.
pub trait Validate {
    fn validate(&self) -> VectorResult<()>;
}

fn ensure_finite(value: f64, field: impl Into<String>) -> VectorResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(VectorError::NonFiniteInput { field: field.into() })
    }
}

/// A vector in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm. Uses `hypot` so large components do not overflow
    /// in the intermediate squares.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Divide both components by `magnitude`. Caller guarantees it is non-zero.
    pub(crate) fn scaled_down(&self, magnitude: f64) -> Vector2D {
        Vector2D::new(self.x / magnitude, self.y / magnitude)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Vector2D {
        iter.fold(Vector2D::ZERO, |acc, v| acc + v)
    }
}

/// Two vectors with inlined components, the body of most endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorPair {
    #[serde(rename = "Ax")]
    pub ax: f64,
    #[serde(rename = "Ay")]
    pub ay: f64,
    #[serde(rename = "Bx")]
    pub bx: f64,
    #[serde(rename = "By")]
    pub by: f64,
}

impl VectorPair {
    pub fn new(a: Vector2D, b: Vector2D) -> Self {
        Self {
            ax: a.x,
            ay: a.y,
            bx: b.x,
            by: b.y,
        }
    }

    pub fn a(&self) -> Vector2D {
        Vector2D::new(self.ax, self.ay)
    }

    pub fn b(&self) -> Vector2D {
        Vector2D::new(self.bx, self.by)
    }
}

impl Validate for VectorPair {
    fn validate(&self) -> VectorResult<()> {
        ensure_finite(self.ax, "Ax")?;
        ensure_finite(self.ay, "Ay")?;
        ensure_finite(self.bx, "Bx")?;
        ensure_finite(self.by, "By")
    }
}

/// Ordered list of vectors for the list-sum endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorList {
    pub vectors: Vec<Vector2D>,
}

impl Validate for VectorList {
    fn validate(&self) -> VectorResult<()> {
        for (i, v) in self.vectors.iter().enumerate() {
            ensure_finite(v.x, format!("vectors[{i}].x"))?;
            ensure_finite(v.y, format!("vectors[{i}].y"))?;
        }
        Ok(())
    }
}

/// Component-wise sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumResult {
    #[serde(rename = "Rx")]
    pub rx: f64,
    #[serde(rename = "Ry")]
    pub ry: f64,
}

impl From<Vector2D> for SumResult {
    fn from(v: Vector2D) -> Self {
        Self { rx: v.x, ry: v.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotResult {
    pub producto_punto: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeResult {
    #[serde(rename = "magnitud_A")]
    pub magnitude_a: f64,
    #[serde(rename = "magnitud_B")]
    pub magnitude_b: f64,
}

/// Angle between two vectors, in degrees within `[0, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleResult {
    pub angulo_grados: f64,
}
