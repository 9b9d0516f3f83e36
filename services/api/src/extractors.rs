use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

/// The authenticated principal. Token verification happens upstream; the
/// gateway forwards the verified user id in `X-User-Id`.
pub struct AuthUser(pub Uuid);

#[derive(Debug)]
pub struct AuthUserRejection(String);

impl IntoResponse for AuthUserRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0 });
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AuthUserRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("X-User-Id")
            .ok_or_else(|| AuthUserRejection("missing X-User-Id header".to_string()))?;

        let value = header
            .to_str()
            .map_err(|_| AuthUserRejection("invalid X-User-Id header value".to_string()))?;

        let uuid = Uuid::parse_str(value)
            .map_err(|_| AuthUserRejection(format!("invalid UUID in X-User-Id: {value}")))?;

        Ok(AuthUser(uuid))
    }
}
