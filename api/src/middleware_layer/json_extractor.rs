//! Rewraps extractor rejections (400/422) into the standard error envelope
//! and stamps an `X-Request-Id` header on the way out.

use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::core::http::response_envelope::{ApiErrorDetail, ApiResponse};

async fn take_body(res: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

fn guess_path_from_serde_msg(msg: &str) -> Option<String> {
    for key in ["question", "top_k"] {
        if msg.contains(key) {
            return Some(key.to_string());
        }
    }
    None
}

fn ensure_request_id(parts: &mut axum::http::response::Parts) -> String {
    if let Some(h) = parts.headers.get("X-Request-Id") {
        if let Ok(v) = h.to_str() {
            if !v.trim().is_empty() {
                return v.to_string();
            }
        }
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    let id = format!("req-{nanos}");
    if let Ok(value) = HeaderValue::from_str(&id) {
        parts.headers.insert("X-Request-Id", value);
    }
    id
}

/// Maps only 400/422 responses; everything else passes through untouched.
pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;
    let status = res.status();

    if !(status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY) {
        return res;
    }

    let (mut parts, bytes) = take_body(res).await;
    let original = String::from_utf8_lossy(&bytes);
    let req_id = ensure_request_id(&mut parts);

    // Already enveloped bodies (our own AppError output) pass through.
    if original.contains("\"error\"") {
        return Response::from_parts(parts, Body::from(bytes));
    }

    let detail = ApiErrorDetail {
        path: guess_path_from_serde_msg(&original),
        hint: Some("check the request body against the route contract".to_string()),
    };

    let envelope = ApiResponse::<()>::error("BAD_REQUEST", original.into_owned(), vec![detail]);
    let mut mapped = envelope.into_response_with_status(status);
    if let Ok(value) = HeaderValue::from_str(&req_id) {
        mapped.headers_mut().insert("X-Request-Id", value);
    }
    mapped
}
