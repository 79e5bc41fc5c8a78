use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{error::AppError, response::JsonApiResponse};

type PanicPayload = Box<dyn Any + Send + 'static>;

/// Turns a handler panic into a 500 envelope instead of dropping the connection.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(PanicPayload) -> Response> {
    CatchPanicLayer::custom(panic_response)
}

fn panic_response(payload: PanicPayload) -> Response {
    let details = panic_details(payload.as_ref());
    tracing::error!(panic = %details, "handler panicked");

    // Release builds never leak panic text to clients.
    let err = if cfg!(debug_assertions) {
        AppError::internal(format!("internal server error: {details}"))
    } else {
        AppError::internal("internal server error")
    };
    JsonApiResponse::from_error(&err).into_response()
}

fn panic_details(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic")
}
