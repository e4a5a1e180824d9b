//! # conductor-codec
//!
//! Transport codec for Conductor events.
//!
//! [`encode`] turns an [`Event`](conductor_core::Event) into a compact,
//! URL-safe token: compact JSON → gzip → unpadded URL-safe base64. The token
//! contains only `[A-Za-z0-9_-]`, so it embeds directly in a URI path
//! segment and a scannable code payload. [`decode`] is the exact inverse and
//! never returns a partial event: a bad token fails with
//! [`CorruptPayloadError`] (truncated/tampered/foreign bytes) or
//! [`SchemaError`](conductor_core::SchemaError) (well-formed bytes, wrong
//! shape).
//!
//! The [`deeplink`] module composes and parses the `conductor://event/…` URI
//! that carries a token to the mobile client.

#![deny(unsafe_code)]

pub mod codec;
pub mod deeplink;
pub mod errors;
pub mod schema;

pub use codec::{decode, encode};
pub use deeplink::{
    DecodeUriError, DeepLinkError, EVENT_URI_PREFIX, EcLevel, decode_uri, event_uri,
    token_from_uri,
};
pub use errors::{CorruptPayloadError, DecodeError, DecodeStage, EncodeError};
