//! Error body completion.
//!
//! Handlers and extractors fail with [`AppError`](crate::errors::AppError),
//! which renders an [`ErrorMessage`] without request details. This layer
//! fills in the request method and path.

use axum::{extract::Request, middleware::Next, response::IntoResponse, response::Response, Json};

use crate::errors::ErrorMessage;

/// Attach method and path to error bodies produced downstream.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorMessage>() {
        Some(body) => {
            let status = response.status();
            (status, Json(body.at(method, path))).into_response()
        }
        None => response,
    }
}
