//! Request bodies.
//!
//! Every call site states the shape of its payload up front by picking a
//! [`Body`] variant; the request builder never has to guess.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Content type set for JSON payloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Payload of an outbound request.
#[derive(Debug, Default)]
pub enum Body {
    /// No payload and no `Content-Type`.
    #[default]
    Absent,
    /// Text sent verbatim, no `Content-Type`.
    Text(String),
    /// Bytes sent verbatim, no `Content-Type`.
    ///
    /// Wrap a stream with [`reqwest::Body::wrap_stream`] to send it without
    /// buffering.
    Raw(reqwest::Body),
    /// A JSON document sent as `application/json`.
    ///
    /// `Value::Null` is treated as [`Body::Absent`].
    Json(Value),
}

impl Body {
    /// Serialize a structured value into a JSON body.
    ///
    /// A value that serializes to `null` (for example `Option::None`) yields
    /// a body that sends nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the value cannot be represented as JSON.
    pub fn json<T>(value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|err| Error::Encode(err.to_string()))
    }

    /// Raw text body.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Raw bytes body.
    #[must_use]
    pub fn raw(bytes: impl Into<reqwest::Body>) -> Self {
        Self::Raw(bytes.into())
    }

    /// Returns true if the body will send no payload.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent | Self::Json(Value::Null))
    }

    /// Resolve the body into a payload and the content type to announce.
    pub(crate) fn into_payload(self) -> Result<Option<(reqwest::Body, Option<&'static str>)>> {
        match self {
            Self::Absent | Self::Json(Value::Null) => Ok(None),
            Self::Text(text) => Ok(Some((text.into(), None))),
            Self::Raw(body) => Ok(Some((body, None))),
            Self::Json(value) => {
                let encoded =
                    serde_json::to_vec(&value).map_err(|err| Error::Encode(err.to_string()))?;
                Ok(Some((encoded.into(), Some(JSON_CONTENT_TYPE))))
            }
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(bytes.into())
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Update {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        maintenance: Option<bool>,
    }

    fn payload_bytes(body: Body) -> Option<(Vec<u8>, Option<&'static str>)> {
        body.into_payload().unwrap().map(|(payload, content_type)| {
            let bytes = payload
                .as_bytes()
                .expect("buffered body")
                .to_vec();
            (bytes, content_type)
        })
    }

    #[test]
    fn absent_has_no_payload() {
        assert!(Body::Absent.is_absent());
        assert!(payload_bytes(Body::Absent).is_none());
    }

    #[test]
    fn null_json_behaves_like_absent() {
        let none: Option<Update> = None;
        let body = Body::json(&none).unwrap();
        assert!(body.is_absent());
        assert!(payload_bytes(body).is_none());
    }

    #[test]
    fn text_is_verbatim_without_content_type() {
        let (bytes, content_type) = payload_bytes(Body::text("{\"raw\":true}")).unwrap();
        assert_eq!(bytes, b"{\"raw\":true}");
        assert_eq!(content_type, None);
    }

    #[test]
    fn raw_bytes_are_verbatim_without_content_type() {
        let (bytes, content_type) = payload_bytes(Body::from(vec![0u8, 159, 146, 150])).unwrap();
        assert_eq!(bytes, vec![0u8, 159, 146, 150]);
        assert_eq!(content_type, None);
    }

    #[test]
    fn json_sets_content_type() {
        let (bytes, content_type) = payload_bytes(Body::from(json!({"name": "x"}))).unwrap();
        assert_eq!(bytes, br#"{"name":"x"}"#);
        assert_eq!(content_type, Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let body = Body::json(&Update {
            name: None,
            maintenance: Some(true),
        })
        .unwrap();
        let (bytes, _) = payload_bytes(body).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, r#"{"maintenance":true}"#);
        assert!(!text.contains("name"));
    }

    #[test]
    fn unserializable_value_is_encode_error() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8, 2], "tuple keys are not JSON");
        let err = Body::json(&map).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }
}
