//! Pre-build event templates.
//!
//! A template is the authoring form of an event: action timing is expressed
//! as `relativeTime` seconds from the (not yet known) event start, and the
//! `id`/`time` fields do not exist yet — the builder assigns both.
//!
//! Templates derive serde with the same `camelCase` naming as the wire
//! schema so they can be authored as JSON files and loaded by the CLI.
//! `relativeTime` is builder-internal: it never appears in the transport
//! schema the codec emits.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::model::{ActionStyle, HapticPattern, is_strictly_decreasing, is_valid_color};

/// Authoring form of an [`Event`](crate::model::Event).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    /// Event title.
    pub title: String,
    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,
    /// IANA timezone name for client-side display.
    pub timezone: String,
    /// Ordered action templates. Well-formed templates list them in
    /// non-decreasing `relativeTime` order; the builder never re-sorts.
    pub actions: Vec<ActionTemplate>,
}

impl EventTemplate {
    /// Check the template against the builder's invariants.
    ///
    /// The builder calls this before resolving any times; it is public so
    /// authoring tools can validate without building.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(ValidationError::UnknownTimezone {
                name: self.timezone.clone(),
            });
        }
        for (index, action) in self.actions.iter().enumerate() {
            if action.relative_time < 0 {
                return Err(ValidationError::NegativeRelativeTime {
                    index,
                    seconds: action.relative_time,
                });
            }
            if action.action.trim().is_empty() {
                return Err(ValidationError::EmptyActionText { index });
            }
            if let Some(ref color) = action.color {
                if !is_valid_color(color) {
                    return Err(ValidationError::InvalidColor {
                        index,
                        value: color.clone(),
                    });
                }
            }
            if let Some(ref marks) = action.countdown_seconds {
                if !is_strictly_decreasing(marks) {
                    return Err(ValidationError::NonMonotonicCountdown { index });
                }
            }
        }
        Ok(())
    }
}

/// Authoring form of an [`Action`](crate::model::Action): every field except
/// `id` and `time`, plus the relative offset the builder resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionTemplate {
    /// Offset in seconds from the event start. Must be non-negative.
    pub relative_time: i64,
    /// Human-readable instruction text.
    pub action: String,
    /// Whether the client speaks the instruction aloud.
    #[serde(default = "default_true")]
    pub audio_announce: bool,
    /// Whether the spoken/displayed form includes the short label.
    #[serde(default = "default_true")]
    pub announce_action_name: bool,
    /// Presentation weight.
    #[serde(default)]
    pub style: ActionStyle,
    /// Vibration feedback pattern, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptic_pattern: Option<HapticPattern>,
    /// Display color as `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Short glyph or label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Advance-warning lead time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_seconds: Option<u32>,
    /// Strictly decreasing countdown second-marks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_seconds: Option<Vec<u32>>,
}

fn default_true() -> bool {
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
