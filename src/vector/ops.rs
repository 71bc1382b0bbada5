//! Vector operations.

use crate::vector::error::{VectorError, VectorResult};
use crate::vector::types::{
    AngleResult, DotResult, MagnitudeResult, SumResult, Vector2D, VectorList, VectorPair,
};

fn finite(value: f64, operation: &'static str) -> VectorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VectorError::NonFiniteResult { operation })
    }
}

fn finite_vector(v: Vector2D, operation: &'static str) -> VectorResult<Vector2D> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VectorError::NonFiniteResult { operation })
    }
}

/// `A + B`, component-wise.
pub fn sum(pair: &VectorPair) -> VectorResult<SumResult> {
    finite_vector(pair.a() + pair.b(), "sum").map(SumResult::from)
}

/// Sum of every vector in order. An empty list sums to the zero vector.
pub fn sum_list(list: &VectorList) -> VectorResult<SumResult> {
    let total: Vector2D = list.vectors.iter().copied().sum();
    finite_vector(total, "list sum").map(SumResult::from)
}

/// `Ax*Bx + Ay*By`.
pub fn dot_product(pair: &VectorPair) -> VectorResult<DotResult> {
    let producto_punto = finite(pair.a().dot(&pair.b()), "dot product")?;
    Ok(DotResult { producto_punto })
}

/// Euclidean norms of both operands.
pub fn magnitudes(pair: &VectorPair) -> VectorResult<MagnitudeResult> {
    Ok(MagnitudeResult {
        magnitude_a: finite(pair.a().magnitude(), "magnitude")?,
        magnitude_b: finite(pair.b().magnitude(), "magnitude")?,
    })
}

/// Angle between A and B in degrees.
///
/// Returns [`VectorError::UndefinedAngle`] when either operand is the zero
/// vector. The cosine is clamped to `[-1, 1]` before `acos` so rounding past
/// the domain edge can never yield NaN.
pub fn angle(pair: &VectorPair) -> VectorResult<AngleResult> {
    let (a, b) = (pair.a(), pair.b());
    let magnitude_a = finite(a.magnitude(), "angle")?;
    let magnitude_b = finite(b.magnitude(), "angle")?;
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Err(VectorError::UndefinedAngle);
    }

    // dot/(|A||B|), computed on the unit vectors so the product of the
    // magnitudes cannot overflow.
    let cos_theta = a
        .scaled_down(magnitude_a)
        .dot(&b.scaled_down(magnitude_b))
        .clamp(-1.0, 1.0);
    let angulo_grados = finite(cos_theta.acos().to_degrees(), "angle")?;

    Ok(AngleResult { angulo_grados })
}
