//! Error types for building and decoding Conductor events.
//!
//! Two families, matching the two boundaries where malformed data can enter:
//!
//! - [`ValidationError`]: a template (or hand-assembled event) violates a
//!   builder-level invariant. Raised at build time, before any encoding is
//!   attempted; never silently corrected.
//! - [`SchemaError`]: decoded text does not conform to the Event/Action
//!   schema. Carries the dotted field path and the offending value so a
//!   caller can produce a precise diagnostic.
//!
//! Neither layer recovers or retries — malformed input is a caller contract
//! violation and always surfaces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// ValidationError
// ─────────────────────────────────────────────────────────────────────────────

/// Build-time rejection of a template or assembled event.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The event title is empty or whitespace.
    #[error("event title must not be empty")]
    EmptyTitle,

    /// An action's instruction text is empty or whitespace.
    #[error("action {index} has empty instruction text")]
    EmptyActionText {
        /// Zero-based position in the timeline.
        index: usize,
    },

    /// A template action declared a negative offset from the event start.
    #[error("action {index} has negative relativeTime ({seconds}s)")]
    NegativeRelativeTime {
        /// Zero-based position in the template.
        index: usize,
        /// The declared offset.
        seconds: i64,
    },

    /// A template action's offset does not fit in the supported time range.
    #[error("action {index} relativeTime ({seconds}s) is out of range")]
    RelativeTimeOutOfRange {
        /// Zero-based position in the template.
        index: usize,
        /// The declared offset.
        seconds: i64,
    },

    /// Two actions share an id.
    #[error("duplicate action id `{id}`")]
    DuplicateActionId {
        /// The id that appeared twice.
        id: String,
    },

    /// Countdown second-marks are not strictly decreasing.
    #[error("action {index} countdownSeconds must be strictly decreasing")]
    NonMonotonicCountdown {
        /// Zero-based position in the timeline.
        index: usize,
    },

    /// A color is not a `#RRGGBB` hex string.
    #[error("action {index} color `{value}` is not a #RRGGBB hex string")]
    InvalidColor {
        /// Zero-based position in the timeline.
        index: usize,
        /// The rejected value.
        value: String,
    },

    /// The timezone is not a known IANA name.
    #[error("unknown IANA timezone `{name}`")]
    UnknownTimezone {
        /// The rejected name.
        name: String,
    },

    /// An action's absolute time precedes the event start.
    #[error("action `{id}` is scheduled before the event start")]
    ActionBeforeStart {
        /// Id of the offending action.
        id: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// SchemaError
// ─────────────────────────────────────────────────────────────────────────────

/// Decode-time schema violation.
///
/// `field` is a dotted path into the payload (`title`,
/// `timeline[1].style`, or `$` for the document root). The decoder never
/// returns a partial event alongside one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("schema violation at `{field}`: {message}")]
pub struct SchemaError {
    /// Dotted path of the offending field.
    pub field: String,
    /// The offending value, when one was present.
    pub value: Option<String>,
    /// What the schema required.
    pub message: String,
}

impl SchemaError {
    /// A required field is absent.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: None,
            message: "required field is missing".to_owned(),
        }
    }

    /// A present field holds a value outside its declared type, enumeration,
    /// or range.
    #[must_use]
    pub fn invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value: Some(value.into()),
            message: message.into(),
        }
    }

    /// The payload is not parseable as JSON at all.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            field: "$".to_owned(),
            value: None,
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
