//! Codec error types.
//!
//! Decode failures split into two kinds, mirroring the two decode stages
//! where input can be wrong:
//!
//! - [`CorruptPayloadError`] — the token's bytes are broken (bad base64,
//!   truncated/tampered/foreign compression stream, non-UTF-8 plaintext).
//!   Terminal for that token; never retryable.
//! - [`SchemaError`](conductor_core::SchemaError) — the bytes decode to text
//!   that does not conform to the Event/Action schema.
//!
//! The codec never recovers, retries, or partially returns an event.

use std::fmt;

use conductor_core::SchemaError;
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// CorruptPayloadError
// ─────────────────────────────────────────────────────────────────────────────

/// Stage of the decode pipeline that rejected the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStage {
    /// URL-safe base64 decoding.
    Base64,
    /// Gzip decompression.
    Decompress,
    /// UTF-8 validation of the decompressed bytes.
    Utf8,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64 => write!(f, "base64"),
            Self::Decompress => write!(f, "decompress"),
            Self::Utf8 => write!(f, "utf8"),
        }
    }
}

/// The token is truncated, tampered with, or in a foreign format.
#[derive(Debug, Error)]
#[error("corrupt payload ({stage}): {message}")]
pub struct CorruptPayloadError {
    /// Stage that rejected the payload.
    pub stage: DecodeStage,
    /// Underlying failure description.
    pub message: String,
}

impl CorruptPayloadError {
    /// Wrap a stage failure.
    #[must_use]
    pub fn new(stage: DecodeStage, cause: impl fmt::Display) -> Self {
        Self {
            stage,
            message: cause.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EncodeError / DecodeError
// ─────────────────────────────────────────────────────────────────────────────

/// Encode-side failure.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Event could not be serialized to JSON.
    #[error("event serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Compression stream failed.
    #[error("compression failed: {0}")]
    Compress(#[from] std::io::Error),
}

/// Decode-side failure.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token's bytes are broken.
    #[error(transparent)]
    CorruptPayload(#[from] CorruptPayloadError),

    /// The decoded text does not conform to the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_payload_display_names_stage() {
        let err = CorruptPayloadError::new(DecodeStage::Decompress, "unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "corrupt payload (decompress): unexpected end of stream"
        );
    }

    #[test]
    fn decode_error_is_transparent_over_schema() {
        let err = DecodeError::from(SchemaError::missing("title"));
        assert!(err.to_string().contains("`title`"));
    }

    #[test]
    fn errors_are_std_errors() {
        let _: &dyn std::error::Error = &CorruptPayloadError::new(DecodeStage::Base64, "bad");
        let _: &dyn std::error::Error = &DecodeError::from(SchemaError::missing("title"));
    }
}
