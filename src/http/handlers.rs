//! Vector operation endpoints, mounted under `/api`.

use axum::{routing::post, Router};

use crate::http::request::VectorJson;
use crate::http::response::{ApiError, ApiResponse};
use crate::vector::{
    ops, AngleResult, DotResult, MagnitudeResult, SumResult, VectorError, VectorList, VectorPair,
};

type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Routes for the operation endpoints, relative to the `/api` prefix.
pub fn router() -> Router {
    Router::new()
        .route("/suma_vectores", post(suma_vectores))
        .route("/suma_lista", post(suma_lista))
        .route("/producto_punto", post(producto_punto))
        .route("/magnitud_vectores", post(magnitud_vectores))
        .route("/angulo_vectores", post(angulo_vectores))
}

pub async fn suma_vectores(VectorJson(pair): VectorJson<VectorPair>) -> ApiResult<SumResult> {
    Ok(ApiResponse::ok(ops::sum(&pair)?))
}

pub async fn suma_lista(VectorJson(list): VectorJson<VectorList>) -> ApiResult<SumResult> {
    tracing::trace!(count = list.vectors.len(), "Summing vector list");
    Ok(ApiResponse::ok(ops::sum_list(&list)?))
}

pub async fn producto_punto(VectorJson(pair): VectorJson<VectorPair>) -> ApiResult<DotResult> {
    Ok(ApiResponse::ok(ops::dot_product(&pair)?))
}

pub async fn magnitud_vectores(
    VectorJson(pair): VectorJson<VectorPair>,
) -> ApiResult<MagnitudeResult> {
    Ok(ApiResponse::ok(ops::magnitudes(&pair)?))
}

pub async fn angulo_vectores(VectorJson(pair): VectorJson<VectorPair>) -> ApiResult<AngleResult> {
    match ops::angle(&pair) {
        Ok(angle) => Ok(ApiResponse::ok(angle)),
        Err(err @ VectorError::UndefinedAngle) => Ok(ApiResponse::failure(err.to_string())),
        Err(err) => Err(err.into()),
    }
}
