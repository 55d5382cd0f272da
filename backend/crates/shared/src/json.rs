//! JSON request body extractor
//!
//! `axum::Json` と同じように使えますが、拒否時は常に
//! `400 {"error": "..."}` を返します。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// エラーエンベロープ付きの JSON ボディ
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::MissingJsonContentType(_) => {
                "request body must be sent with Content-Type: application/json".to_owned()
            }
            JsonRejection::JsonSyntaxError(_) => "body contains badly-formed JSON".to_owned(),
            JsonRejection::JsonDataError(_) => {
                format!("body contains incorrect JSON: {}", rejection.body_text())
            }
            _ => rejection.body_text(),
        };
        AppError::bad_request(message)
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let req = request(Some("application/json"), r#"{"name":"alice"}"#);
        let JsonBody(payload) = JsonBody::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.name, "alice");
    }

    #[tokio::test]
    async fn test_rejections_are_bad_request() {
        let cases = [
            request(Some("application/json"), "{not json"),
            request(Some("application/json"), r#"{"name": 5}"#),
            request(None, r#"{"name":"alice"}"#),
        ];
        for req in cases {
            let err = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }
}
