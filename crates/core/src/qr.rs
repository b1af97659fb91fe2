//! QR payload codec.
//!
//! The contract between registration and scanning: a participant's QR pass
//! encodes the compact JSON object `{"regId":"<code>"}`. Scanners post the
//! decoded text verbatim to the scan endpoint, so this type is both the QR
//! payload and the scan request body.

use serde::{Deserialize, Serialize};

/// Error produced when a scanned payload cannot be understood.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QrError {
    #[error("Invalid QR code")]
    Malformed,
}

/// The payload encoded into a participant's QR pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    #[serde(rename = "regId")]
    pub reg_id: String,
}

impl QrPayload {
    pub fn new(reg_id: impl Into<String>) -> Self {
        Self {
            reg_id: reg_id.into(),
        }
    }

    /// Render the compact JSON form, exactly `{"regId":"<code>"}`.
    pub fn encode(&self) -> String {
        serde_json::json!({ "regId": self.reg_id }).to_string()
    }

    /// Parse a scanned payload. Anything that is not the expected shape,
    /// including an empty code, is rejected as [`QrError::Malformed`].
    pub fn parse(input: &str) -> Result<Self, QrError> {
        let payload: Self = serde_json::from_str(input).map_err(|_| QrError::Malformed)?;
        if payload.reg_id.trim().is_empty() {
            return Err(QrError::Malformed);
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_exact_shape() {
        let payload = QrPayload::new("EVT-DEADBEEF");
        assert_eq!(payload.encode(), r#"{"regId":"EVT-DEADBEEF"}"#);
    }

    #[test]
    fn parse_roundtrips_encode() {
        let payload = QrPayload::new("EVT-00000001");
        let parsed = QrPayload::parse(&payload.encode()).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(QrPayload::parse("not json"), Err(QrError::Malformed));
        assert_eq!(QrPayload::parse(""), Err(QrError::Malformed));
        assert_eq!(QrPayload::parse("{}"), Err(QrError::Malformed));
        assert_eq!(
            QrPayload::parse(r#"{"code":"EVT-DEADBEEF"}"#),
            Err(QrError::Malformed)
        );
    }

    #[test]
    fn parse_rejects_empty_code() {
        assert_eq!(QrPayload::parse(r#"{"regId":""}"#), Err(QrError::Malformed));
        assert_eq!(
            QrPayload::parse(r#"{"regId":"   "}"#),
            Err(QrError::Malformed)
        );
    }
}
