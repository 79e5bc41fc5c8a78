use axum::{
    body::to_bytes,
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{error::AppError, response::JsonApiResponse, routes::API_PREFIX};

const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Rewrites bare error responses (extractor rejections, missing files) into
/// the JSON envelope. API paths are always rewritten; other paths only when
/// the client did not ask for HTML.
pub async fn json_error_middleware(req: Request, next: Next) -> Response {
    let api_call = req.uri().path().starts_with(API_PREFIX);
    let wants_html = header_contains(req.headers(), header::ACCEPT, "text/html");
    let response = next.run(req).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    if has_body_type(response.headers()) || (wants_html && !api_call) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let text = to_bytes(body, MAX_ERROR_BODY_BYTES)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .unwrap_or_default();
    let err = error_for_status(status, text);
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %err, "request failed");
    }

    let mut rewritten = JsonApiResponse::from_error(&err).into_response();
    *rewritten.status_mut() = status;
    for (name, value) in &parts.headers {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rewritten
}

/// Responses that already carry JSON or HTML are left alone.
fn has_body_type(headers: &HeaderMap) -> bool {
    ["application/json", "+json", "text/html"]
        .iter()
        .any(|needle| header_contains(headers, header::CONTENT_TYPE, needle))
}

fn header_contains(headers: &HeaderMap, name: header::HeaderName, needle: &str) -> bool {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains(needle))
}

fn error_for_status(status: StatusCode, text: String) -> AppError {
    let message = if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        text
    };
    match status {
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::CONFLICT => AppError::conflict(message),
        StatusCode::UNPROCESSABLE_ENTITY => AppError::unprocessable(message),
        StatusCode::SERVICE_UNAVAILABLE => AppError::service_unavailable(message),
        _ if status.is_client_error() => AppError::bad_request(message),
        _ => AppError::internal(message),
    }
}
