//! Encode/decode pipeline for the event transport token.
//!
//! Encode: compact JSON (no whitespace between structural tokens) → gzip →
//! unpadded URL-safe base64. The URL-safe alphabet with stripped padding is
//! exactly the `+`→`-`, `/`→`_`, trailing-`=` removal the deep-link format
//! requires, so the token needs no further escaping anywhere it travels.
//!
//! Decode runs the stages in reverse and classifies failures by stage:
//! broken bytes are a [`CorruptPayloadError`], schema-nonconforming text is
//! a [`SchemaError`](conductor_core::SchemaError). Field order inside the
//! JSON is irrelevant; timeline order is preserved exactly.

use std::io::{Read, Write};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use conductor_core::{Event, SchemaError};

use crate::errors::{CorruptPayloadError, DecodeError, DecodeStage, EncodeError};
use crate::schema;

/// Encode an event into a URL-safe token.
///
/// The output matches `^[A-Za-z0-9_-]+$` and is always compressed — for any
/// event with more than a trivial amount of repeated structure the token is
/// strictly shorter than base64 over the raw JSON.
pub fn encode(event: &Event) -> Result<String, EncodeError> {
    let json = serde_json::to_vec(event)?;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;
    let token = URL_SAFE_NO_PAD.encode(compressed);
    tracing::debug!(
        json_bytes = json.len(),
        token_chars = token.len(),
        "encoded event token"
    );
    Ok(token)
}

/// Decode a token back into an event — the exact inverse of [`encode`].
///
/// Never returns a partial event: the first failing stage aborts the whole
/// decode.
pub fn decode(token: &str) -> Result<Event, DecodeError> {
    let compressed = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|err| CorruptPayloadError::new(DecodeStage::Base64, err))?;

    let mut bytes = Vec::new();
    let _ = GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut bytes)
        .map_err(|err| CorruptPayloadError::new(DecodeStage::Decompress, err))?;
    let text = String::from_utf8(bytes)
        .map_err(|err| CorruptPayloadError::new(DecodeStage::Utf8, err))?;

    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|err| SchemaError::malformed(format!("malformed JSON: {err}")))?;
    schema::check_event(&value)?;

    // shape already vetted by check_event
    let event: Event = serde_json::from_value(value)
        .map_err(|err| SchemaError::malformed(format!("event reconstruction failed: {err}")))?;
    Ok(event)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
