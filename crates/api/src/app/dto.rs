use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use userstore_core::UserProfile;

use crate::app::errors::ApiError;

/// Sent in place of any body that fails to serialize.
const FALLBACK_BODY: &str = r#"{"message":"something went wrong"}"#;

// -------------------------
// Request DTOs
// -------------------------

/// Create/update payload. All three fields are required; unknown fields
/// (including a client-supplied `id`) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl UserBody {
    /// Decode a raw request body. The content type is not consulted; any
    /// bytes that parse as the payload are accepted.
    pub fn decode(bytes: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(bytes).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

impl From<UserBody> for UserProfile {
    fn from(body: UserBody) -> Self {
        UserProfile::new(body.first_name, body.last_name, body.bio)
    }
}

// -------------------------
// Response envelope
// -------------------------

/// `{ "message"?: string, "data"?: T }` with empty fields omitted.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Serialize `body` as the response payload.
///
/// If serialization fails the error is logged and a 500 with a fixed message
/// goes out instead.
pub fn json_response<T: Serialize>(status: StatusCode, body: &ApiResponse<T>) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_json_content_type(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            ApiError::Internal(e.to_string()).into_response()
        }
    }
}

/// The fixed 500 body; built without serialization so it cannot fail.
pub fn fallback_response() -> Response {
    with_json_content_type(StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_BODY.as_bytes().to_vec())
}

fn with_json_content_type(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn message_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::message("nope")).unwrap();
        assert_eq!(value, json!({ "message": "nope" }));
    }

    #[test]
    fn data_envelope_omits_message() {
        let value = serde_json::to_value(ApiResponse::data(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "data": [1, 2] }));
    }

    #[test]
    fn empty_list_is_still_emitted() {
        let value = serde_json::to_value(ApiResponse::data(Vec::<u8>::new())).unwrap();
        assert_eq!(value, json!({ "data": [] }));
    }

    #[test]
    fn decode_rejects_non_json_bytes() {
        let err = UserBody::decode(b"definitely not json").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(_)));
    }

    #[test]
    fn decode_accepts_raw_json_bytes() {
        let body = UserBody::decode(br#"{"firstName":"a","lastName":"b","bio":"c"}"#).unwrap();
        assert_eq!(UserProfile::from(body), UserProfile::new("a", "b", "c"));
    }

    #[test]
    fn body_requires_every_field() {
        let missing = serde_json::from_value::<UserBody>(json!({ "firstName": "Ada", "lastName": "Lovelace" }));
        assert!(missing.is_err());

        let with_id = serde_json::from_value::<UserBody>(json!({
            "id": "ignored",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "bio": "",
        }))
        .unwrap();
        assert_eq!(UserProfile::from(with_id), UserProfile::new("Ada", "Lovelace", ""));
    }

    #[tokio::test]
    async fn json_response_sets_status_and_content_type() {
        let res = json_response(StatusCode::CREATED, &ApiResponse::data("ok"));
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_json(res).await, json!({ "data": "ok" }));
    }

    #[tokio::test]
    async fn serialization_failure_falls_back_to_500() {
        let res = json_response(StatusCode::OK, &ApiResponse::data(Unserializable));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(res).await, json!({ "message": "something went wrong" }));
    }
}
