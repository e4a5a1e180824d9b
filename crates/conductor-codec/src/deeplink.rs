//! Deep-link URI carrying an encoded event token.
//!
//! The scheme and path prefix are fixed literals; everything after the final
//! `/` is the opaque token. The same URI string is the payload handed to the
//! external code renderer — no additional framing.

use thiserror::Error;

use conductor_core::Event;

use crate::codec;
use crate::errors::DecodeError;

/// Fixed scheme-and-path prefix for event deep links.
pub const EVENT_URI_PREFIX: &str = "conductor://event/";

/// Compose the deep-link URI for an encoded token.
#[must_use]
pub fn event_uri(token: &str) -> String {
    format!("{EVENT_URI_PREFIX}{token}")
}

/// A URI that is not a conductor event link.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    /// The URI does not start with `conductor://event/`.
    #[error("URI does not start with `{EVENT_URI_PREFIX}`")]
    WrongPrefix,
    /// The URI has the right prefix but carries no token.
    #[error("URI carries no token after the prefix")]
    EmptyToken,
}

/// Extract the opaque token from a deep-link URI.
pub fn token_from_uri(uri: &str) -> Result<&str, DeepLinkError> {
    let token = uri
        .strip_prefix(EVENT_URI_PREFIX)
        .ok_or(DeepLinkError::WrongPrefix)?;
    if token.is_empty() {
        return Err(DeepLinkError::EmptyToken);
    }
    Ok(token)
}

/// Extract the token from a deep-link URI and decode it.
pub fn decode_uri(uri: &str) -> Result<Event, DecodeUriError> {
    let token = token_from_uri(uri)?;
    Ok(codec::decode(token)?)
}

/// Failure while decoding a full deep-link URI.
#[derive(Debug, Error)]
pub enum DecodeUriError {
    /// The URI itself is not a conductor event link.
    #[error(transparent)]
    DeepLink(#[from] DeepLinkError),
    /// The embedded token failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Error-correction preference handed to the external code renderer.
///
/// The renderer accepts an arbitrary-length ASCII payload and a requested
/// correction level; the codec imposes no capacity assumption but suggests
/// more correction headroom as payloads grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EcLevel {
    /// ~7% recovery.
    Low,
    /// ~15% recovery.
    Medium,
    /// ~25% recovery.
    Quartile,
    /// ~30% recovery.
    High,
}

impl EcLevel {
    /// Suggest a correction level for a payload of `payload_len` characters.
    #[must_use]
    pub fn suggested_for(payload_len: usize) -> Self {
        match payload_len {
            0..=160 => Self::Low,
            161..=400 => Self::Medium,
            401..=800 => Self::Quartile,
            _ => Self::High,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
