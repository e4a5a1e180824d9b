//! Wire schema for Conductor events.
//!
//! [`Event`] and [`Action`] are the exact JSON shape a scanning client
//! decodes, with `camelCase` field naming for wire compatibility. Optional
//! presentation fields are omitted from JSON when `None`, so "absent" stays
//! distinguishable from "present but empty" across a round trip.
//!
//! An [`Event`] is immutable once built: the builder creates it whole, the
//! codec encodes it once, and the decoded copy on the consumer side is a
//! fresh, independent value.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::timestamp;

// ─────────────────────────────────────────────────────────────────────────────
// Event
// ─────────────────────────────────────────────────────────────────────────────

/// A titled, timed collection of ordered actions plus display metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Short display title.
    pub title: String,
    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Absolute event start, UTC, second precision.
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    /// IANA timezone name, used only for client-side display of `startTime`.
    /// Carried through unchanged; never affects the stored UTC values.
    pub timezone: String,
    /// Ordered actions. Insertion order is playback order and is preserved
    /// through encode/decode. May be empty.
    pub timeline: Vec<Action>,
}

impl Event {
    /// Re-check the construction invariants on an assembled event.
    ///
    /// The builder enforces these as it assembles the value; callers that
    /// construct an [`Event`] by hand can use this to get the same
    /// guarantees before encoding:
    ///
    /// - non-empty title and per-action instruction text
    /// - unique action ids
    /// - valid `#RRGGBB` colors
    /// - strictly decreasing countdown marks
    /// - no action scheduled before `start_time`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let mut seen_ids = HashSet::new();
        for (index, action) in self.timeline.iter().enumerate() {
            if action.action.trim().is_empty() {
                return Err(ValidationError::EmptyActionText { index });
            }
            if !seen_ids.insert(action.id.as_str()) {
                return Err(ValidationError::DuplicateActionId {
                    id: action.id.clone(),
                });
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
            if action.time < self.start_time {
                return Err(ValidationError::ActionBeforeStart {
                    id: action.id.clone(),
                });
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Action
// ─────────────────────────────────────────────────────────────────────────────

/// A single instruction with an absolute trigger time and presentation hints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Unique id within the event. The codec treats this as an opaque
    /// string; uniqueness is the only enforced invariant.
    pub id: String,
    /// Absolute trigger time, UTC, second precision.
    #[serde(with = "timestamp")]
    pub time: DateTime<Utc>,
    /// Human-readable instruction text.
    pub action: String,
    /// Whether the client speaks the instruction aloud.
    pub audio_announce: bool,
    /// Whether the spoken/displayed form includes the action's short label.
    pub announce_action_name: bool,
    /// Presentation weight.
    pub style: ActionStyle,
    /// Vibration feedback pattern, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub haptic_pattern: Option<HapticPattern>,
    /// Display color as `#RRGGBB`; absent means client default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Short glyph or label shown next to the instruction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Seconds before `time` at which to surface an advance warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_seconds: Option<u32>,
    /// Second-marks before `time` at which to emit countdown ticks.
    /// Strictly decreasing; an empty list means no countdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_seconds: Option<Vec<u32>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Closed enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Presentation weight for an action.
///
/// Closed enumeration: unrecognized wire values are rejected at decode time,
/// never coerced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    /// Regular presentation.
    #[default]
    Normal,
    /// Highlighted presentation.
    Emphasis,
    /// Maximum-urgency presentation.
    Alert,
}

impl ActionStyle {
    /// Wire name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Emphasis => "emphasis",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for ActionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vibration feedback pattern for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticPattern {
    /// One pulse.
    Single,
    /// Two pulses.
    Double,
    /// Three pulses.
    Triple,
}

impl HapticPattern {
    /// Wire name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
        }
    }
}

impl fmt::Display for HapticPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Field-level checks
// ─────────────────────────────────────────────────────────────────────────────

/// Whether `value` is a `#RRGGBB` hex color string.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Whether countdown second-marks are strictly decreasing.
///
/// Empty and single-element lists pass.
#[must_use]
pub fn is_strictly_decreasing(values: &[u32]) -> bool {
    values.windows(2).all(|pair| pair[0] > pair[1])
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()
    }

    fn action(id: &str, offset_seconds: i64) -> Action {
        Action {
            id: id.to_owned(),
            time: start() + chrono::TimeDelta::seconds(offset_seconds),
            action: "Wave slowly".to_owned(),
            audio_announce: true,
            announce_action_name: true,
            style: ActionStyle::Normal,
            haptic_pattern: None,
            color: None,
            icon: None,
            notice_seconds: None,
            countdown_seconds: None,
        }
    }

    fn event(timeline: Vec<Action>) -> Event {
        Event {
            title: "Test Flash Mob".to_owned(),
            description: String::new(),
            start_time: start(),
            timezone: "America/New_York".to_owned(),
            timeline,
        }
    }

    // -- wire shape --

    #[test]
    fn event_serializes_camel_case() {
        let value = serde_json::to_value(event(vec![action("action-1", 0)])).unwrap();
        assert_eq!(value["startTime"], "2025-06-01T18:00:00Z");
        assert_eq!(value["timeline"][0]["audioAnnounce"], true);
        assert_eq!(value["timeline"][0]["announceActionName"], true);
        assert_eq!(value["timeline"][0]["style"], "normal");
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let value = serde_json::to_value(action("action-1", 0)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("hapticPattern"));
        assert!(!object.contains_key("color"));
        assert!(!object.contains_key("icon"));
        assert!(!object.contains_key("noticeSeconds"));
        assert!(!object.contains_key("countdownSeconds"));
    }

    #[test]
    fn present_optionals_round_trip() {
        let mut subject = action("action-1", 20);
        subject.haptic_pattern = Some(HapticPattern::Triple);
        subject.color = Some("#9C27B0".to_owned());
        subject.icon = Some("🔥".to_owned());
        subject.notice_seconds = Some(10);
        subject.countdown_seconds = Some(vec![5, 3, 2, 1]);

        let value = serde_json::to_value(&subject).unwrap();
        assert_eq!(value["hapticPattern"], "triple");
        assert_eq!(value["countdownSeconds"], json!([5, 3, 2, 1]));
        let back: Action = serde_json::from_value(value).unwrap();
        assert_eq!(subject, back);
    }

    #[test]
    fn empty_timeline_serializes_as_empty_array() {
        let value = serde_json::to_value(event(vec![])).unwrap();
        assert_eq!(value["timeline"], json!([]));
    }

    #[test]
    fn unknown_style_is_rejected() {
        let result: Result<ActionStyle, _> = serde_json::from_value(json!("blinking"));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_haptic_pattern_is_rejected() {
        let result: Result<HapticPattern, _> = serde_json::from_value(json!("quadruple"));
        assert!(result.is_err());
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let value = json!({
            "title": "T",
            "startTime": "2025-06-01T18:00:00Z",
            "timezone": "UTC",
            "timeline": []
        });
        let decoded: Event = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.description, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let value = json!({
            "title": "T",
            "startTime": "2025-06-01T18:00:00Z",
            "timezone": "UTC",
            "timeline": [],
            "relativeTime": 20
        });
        let decoded: Event = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.title, "T");
    }

    // -- validate --

    #[test]
    fn validate_accepts_well_formed_event() {
        let subject = event(vec![action("action-1", 0), action("action-2", 20)]);
        assert!(subject.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut subject = event(vec![]);
        subject.title = "   ".to_owned();
        assert_eq!(subject.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let subject = event(vec![action("action-1", 0), action("action-1", 20)]);
        assert_eq!(
            subject.validate(),
            Err(ValidationError::DuplicateActionId {
                id: "action-1".to_owned()
            })
        );
    }

    #[test]
    fn validate_rejects_bad_color() {
        let mut first = action("action-1", 0);
        first.color = Some("purple".to_owned());
        let subject = event(vec![first]);
        assert_eq!(
            subject.validate(),
            Err(ValidationError::InvalidColor {
                index: 0,
                value: "purple".to_owned()
            })
        );
    }

    #[test]
    fn validate_rejects_non_decreasing_countdown() {
        let mut first = action("action-1", 0);
        first.countdown_seconds = Some(vec![3, 3, 1]);
        let subject = event(vec![first]);
        assert_eq!(
            subject.validate(),
            Err(ValidationError::NonMonotonicCountdown { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_action_before_start() {
        let subject = event(vec![action("action-1", -5)]);
        assert_eq!(
            subject.validate(),
            Err(ValidationError::ActionBeforeStart {
                id: "action-1".to_owned()
            })
        );
    }

    // -- field checks --

    #[test]
    fn color_check() {
        assert!(is_valid_color("#9C27B0"));
        assert!(is_valid_color("#ffffff"));
        assert!(!is_valid_color("9C27B0"));
        assert!(!is_valid_color("#9C27B"));
        assert!(!is_valid_color("#9C27B0FF"));
        assert!(!is_valid_color("#GGGGGG"));
    }

    #[test]
    fn countdown_check() {
        assert!(is_strictly_decreasing(&[]));
        assert!(is_strictly_decreasing(&[5]));
        assert!(is_strictly_decreasing(&[10, 5, 3, 2, 1]));
        assert!(!is_strictly_decreasing(&[5, 5]));
        assert!(!is_strictly_decreasing(&[1, 2, 3]));
    }
}
