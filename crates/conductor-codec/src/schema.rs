//! Decode-time schema checks over raw JSON.
//!
//! [`check_event`] walks the parsed payload before the typed
//! deserialization, so every rejection carries the exact dotted field path
//! and offending value instead of a generic serde message. JSON `null` is
//! treated the same as an absent field, and unknown keys are ignored — older
//! generators shipped extra fields (notably `relativeTime`) that decoders
//! must tolerate.

use std::collections::HashSet;

use serde_json::{Map, Value};

use conductor_core::SchemaError;
use conductor_core::model::{is_strictly_decreasing, is_valid_color};
use conductor_core::timestamp;

const STYLES: [&str; 3] = ["normal", "emphasis", "alert"];
const HAPTIC_PATTERNS: [&str; 3] = ["single", "double", "triple"];

/// Check a parsed payload against the Event/Action schema.
///
/// Returns the first violation found, in document order.
pub fn check_event(value: &Value) -> Result<(), SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaError::invalid("$", preview(value), "payload must be a JSON object"))?;

    let title = required_str(object, "title", "title")?;
    if title.trim().is_empty() {
        return Err(SchemaError::invalid("title", title, "must not be empty"));
    }
    if let Some(description) = optional(object, "description") {
        if description.as_str().is_none() {
            return Err(SchemaError::invalid(
                "description",
                preview(description),
                "must be a string",
            ));
        }
    }
    required_timestamp(object, "startTime", "startTime")?;
    let _ = required_str(object, "timezone", "timezone")?;

    let timeline = required(object, "timeline", "timeline")?;
    let entries = timeline
        .as_array()
        .ok_or_else(|| SchemaError::invalid("timeline", preview(timeline), "must be an array"))?;

    let mut seen_ids = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        check_action(entry, index, &mut seen_ids)?;
    }
    Ok(())
}

fn check_action(
    entry: &Value,
    index: usize,
    seen_ids: &mut HashSet<String>,
) -> Result<(), SchemaError> {
    let at = |field: &str| format!("timeline[{index}].{field}");

    let object = entry.as_object().ok_or_else(|| {
        SchemaError::invalid(
            format!("timeline[{index}]"),
            preview(entry),
            "must be a JSON object",
        )
    })?;

    let id = required_str(object, "id", &at("id"))?;
    if id.is_empty() {
        return Err(SchemaError::invalid(at("id"), id, "must not be empty"));
    }
    if !seen_ids.insert(id.to_owned()) {
        return Err(SchemaError::invalid(at("id"), id, "duplicate action id"));
    }

    required_timestamp(object, "time", &at("time"))?;

    let text = required_str(object, "action", &at("action"))?;
    if text.trim().is_empty() {
        return Err(SchemaError::invalid(at("action"), text, "must not be empty"));
    }

    let _ = required_bool(object, "audioAnnounce", &at("audioAnnounce"))?;
    let _ = required_bool(object, "announceActionName", &at("announceActionName"))?;

    let style = required_str(object, "style", &at("style"))?;
    if !STYLES.contains(&style) {
        return Err(SchemaError::invalid(
            at("style"),
            style,
            "not one of normal|emphasis|alert",
        ));
    }

    if let Some(value) = optional(object, "hapticPattern") {
        let pattern = value.as_str().ok_or_else(|| {
            SchemaError::invalid(at("hapticPattern"), preview(value), "must be a string")
        })?;
        if !HAPTIC_PATTERNS.contains(&pattern) {
            return Err(SchemaError::invalid(
                at("hapticPattern"),
                pattern,
                "not one of single|double|triple",
            ));
        }
    }

    if let Some(value) = optional(object, "color") {
        let color = value
            .as_str()
            .ok_or_else(|| SchemaError::invalid(at("color"), preview(value), "must be a string"))?;
        if !is_valid_color(color) {
            return Err(SchemaError::invalid(
                at("color"),
                color,
                "must be a #RRGGBB hex string",
            ));
        }
    }

    if let Some(value) = optional(object, "icon") {
        if value.as_str().is_none() {
            return Err(SchemaError::invalid(
                at("icon"),
                preview(value),
                "must be a string",
            ));
        }
    }

    if let Some(value) = optional(object, "noticeSeconds") {
        let _ = seconds_value(value, &at("noticeSeconds"))?;
    }

    if let Some(value) = optional(object, "countdownSeconds") {
        let entries = value.as_array().ok_or_else(|| {
            SchemaError::invalid(at("countdownSeconds"), preview(value), "must be an array")
        })?;
        let mut marks = Vec::with_capacity(entries.len());
        for mark in entries {
            marks.push(seconds_value(mark, &at("countdownSeconds"))?);
        }
        if !is_strictly_decreasing(&marks) {
            return Err(SchemaError::invalid(
                at("countdownSeconds"),
                preview(value),
                "must be strictly decreasing",
            ));
        }
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Field helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Present, non-null field lookup. JSON `null` counts as absent.
fn optional<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match object.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

fn required<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Value, SchemaError> {
    optional(object, key).ok_or_else(|| SchemaError::missing(path))
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a str, SchemaError> {
    let value = required(object, key, path)?;
    value
        .as_str()
        .ok_or_else(|| SchemaError::invalid(path, preview(value), "must be a string"))
}

fn required_bool(object: &Map<String, Value>, key: &str, path: &str) -> Result<bool, SchemaError> {
    let value = required(object, key, path)?;
    value
        .as_bool()
        .ok_or_else(|| SchemaError::invalid(path, preview(value), "must be a boolean"))
}

fn required_timestamp(object: &Map<String, Value>, key: &str, path: &str) -> Result<(), SchemaError> {
    let raw = required_str(object, key, path)?;
    match timestamp::parse(raw) {
        Ok(_) => Ok(()),
        Err(err) => Err(SchemaError::invalid(
            path,
            raw,
            format!("not a YYYY-MM-DDTHH:MM:SSZ timestamp ({err})"),
        )),
    }
}

fn seconds_value(value: &Value, path: &str) -> Result<u32, SchemaError> {
    let seconds = value.as_u64().ok_or_else(|| {
        SchemaError::invalid(path, preview(value), "must be a non-negative integer")
    })?;
    u32::try_from(seconds)
        .map_err(|_| SchemaError::invalid(path, preview(value), "exceeds the supported range"))
}

/// Short JSON rendering of a value for diagnostics.
fn preview(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() > 80 {
        let mut shortened: String = rendered.chars().take(77).collect();
        shortened.push('…');
        shortened
    } else {
        rendered
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_action() -> Value {
        json!({
            "id": "action-1",
            "time": "2025-06-01T18:00:00Z",
            "action": "Raise hand",
            "audioAnnounce": true,
            "announceActionName": true,
            "style": "normal"
        })
    }

    fn minimal_event() -> Value {
        json!({
            "title": "T",
            "startTime": "2025-06-01T18:00:00Z",
            "timezone": "UTC",
            "timeline": [minimal_action()]
        })
    }

    // -- acceptance --

    #[test]
    fn minimal_event_passes() {
        assert!(check_event(&minimal_event()).is_ok());
    }

    #[test]
    fn empty_timeline_passes() {
        let mut event = minimal_event();
        event["timeline"] = json!([]);
        assert!(check_event(&event).is_ok());
    }

    #[test]
    fn full_optionals_pass() {
        let mut event = minimal_event();
        event["timeline"][0]["hapticPattern"] = json!("double");
        event["timeline"][0]["color"] = json!("#FF9800");
        event["timeline"][0]["icon"] = json!("🔥");
        event["timeline"][0]["noticeSeconds"] = json!(15);
        event["timeline"][0]["countdownSeconds"] = json!([10, 5, 3, 2, 1]);
        assert!(check_event(&event).is_ok());
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let mut event = minimal_event();
        event["timeline"][0]["relativeTime"] = json!(20);
        event["futureField"] = json!({"nested": true});
        assert!(check_event(&event).is_ok());
    }

    #[test]
    fn null_optional_counts_as_absent() {
        let mut event = minimal_event();
        event["timeline"][0]["color"] = Value::Null;
        assert!(check_event(&event).is_ok());
    }

    // -- required fields --

    #[test]
    fn missing_title_names_the_field() {
        let mut event = minimal_event();
        let _ = event.as_object_mut().unwrap().remove("title");
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.value, None);
    }

    #[test]
    fn null_required_field_counts_as_missing() {
        let mut event = minimal_event();
        event["timeline"] = Value::Null;
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline");
    }

    #[test]
    fn missing_action_bool_is_reported_with_path() {
        let mut event = minimal_event();
        let _ = event["timeline"][0]
            .as_object_mut()
            .unwrap()
            .remove("audioAnnounce");
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline[0].audioAnnounce");
    }

    // -- value checks --

    #[test]
    fn non_numeric_timestamp_is_rejected() {
        let mut event = minimal_event();
        event["startTime"] = json!("tomorrow at noon");
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "startTime");
        assert_eq!(err.value.as_deref(), Some("tomorrow at noon"));
    }

    #[test]
    fn out_of_enum_style_is_rejected() {
        let mut event = minimal_event();
        event["timeline"][0]["style"] = json!("shouting");
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline[0].style");
    }

    #[test]
    fn out_of_enum_haptic_is_rejected() {
        let mut event = minimal_event();
        event["timeline"][0]["hapticPattern"] = json!("quadruple");
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline[0].hapticPattern");
    }

    #[test]
    fn bad_color_is_rejected() {
        let mut event = minimal_event();
        event["timeline"][0]["color"] = json!("red");
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline[0].color");
    }

    #[test]
    fn negative_notice_seconds_is_rejected() {
        let mut event = minimal_event();
        event["timeline"][0]["noticeSeconds"] = json!(-5);
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline[0].noticeSeconds");
    }

    #[test]
    fn non_decreasing_countdown_is_rejected() {
        let mut event = minimal_event();
        event["timeline"][0]["countdownSeconds"] = json!([5, 5, 1]);
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline[0].countdownSeconds");
    }

    #[test]
    fn empty_countdown_is_accepted() {
        let mut event = minimal_event();
        event["timeline"][0]["countdownSeconds"] = json!([]);
        assert!(check_event(&event).is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut event = minimal_event();
        event["timeline"] = json!([minimal_action(), minimal_action()]);
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "timeline[1].id");
        assert_eq!(err.value.as_deref(), Some("action-1"));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = check_event(&json!(["not", "an", "event"])).unwrap_err();
        assert_eq!(err.field, "$");
    }

    #[test]
    fn first_violation_wins_in_document_order() {
        let mut event = minimal_event();
        let _ = event.as_object_mut().unwrap().remove("title");
        event["timeline"][0]["style"] = json!("shouting");
        let err = check_event(&event).unwrap_err();
        assert_eq!(err.field, "title");
    }
}
