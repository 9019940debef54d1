//! Response helpers. Bodies are written as indented JSON.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body serialized with two-space indentation.
#[derive(Debug, Clone)]
pub struct Indented<T>(pub T);

impl<T: Serialize> IntoResponse for Indented<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Indented<Vec<T>>) {
    (StatusCode::OK, Indented(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Indented<T>) {
    (StatusCode::CREATED, Indented(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn body_is_indented_json() {
        let response = success_many(vec![serde_json::json!({"color": "red"})]).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        let bytes = match to_bytes(response.into_body(), usize::MAX).await {
            Ok(bytes) => bytes,
            Err(err) => panic!("failed to read body: {err}"),
        };
        assert_eq!(
            String::from_utf8_lossy(&bytes),
            "[\n  {\n    \"color\": \"red\"\n  }\n]"
        );
    }

    #[test]
    fn created_uses_201() {
        let (status, Indented(id)) = created(7_i64);
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(id, 7);
    }
}
