//! Timeline builder: template + start offset → immutable [`Event`].
//!
//! The builder is the only place absolute action times are produced. Each
//! action's `time` is derived from the event start plus the template's
//! declared `relativeTime`, so the "no action before start" invariant holds
//! by construction whenever every offset is non-negative — and templates
//! with a negative offset are rejected outright.
//!
//! Reading the wall clock is the single side effect in the core; [`build_at`]
//! takes the clock value explicitly for deterministic callers and tests.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};

use crate::errors::ValidationError;
use crate::model::{Action, Event};
use crate::template::EventTemplate;

/// Build an event starting `start_offset` from now.
///
/// Equivalent to `build_at(template, start_offset, Utc::now())`.
pub fn build(template: &EventTemplate, start_offset: TimeDelta) -> Result<Event, ValidationError> {
    build_at(template, start_offset, Utc::now())
}

/// Build an event starting `start_offset` from `now`.
///
/// The start time is truncated to whole seconds to match the wire format's
/// precision, action ids are assigned `action-1`, `action-2`, … in template
/// order, and the timeline keeps exactly the template's declared order —
/// offsets are not re-sorted.
pub fn build_at(
    template: &EventTemplate,
    start_offset: TimeDelta,
    now: DateTime<Utc>,
) -> Result<Event, ValidationError> {
    template.validate()?;
    let start_time = (now + start_offset).trunc_subsecs(0);

    let mut timeline = Vec::with_capacity(template.actions.len());
    for (index, action) in template.actions.iter().enumerate() {
        let offset = TimeDelta::try_seconds(action.relative_time).ok_or(
            ValidationError::RelativeTimeOutOfRange {
                index,
                seconds: action.relative_time,
            },
        )?;
        let time = start_time.checked_add_signed(offset).ok_or(
            ValidationError::RelativeTimeOutOfRange {
                index,
                seconds: action.relative_time,
            },
        )?;
        timeline.push(Action {
            id: format!("action-{}", index + 1),
            time,
            action: action.action.clone(),
            audio_announce: action.audio_announce,
            announce_action_name: action.announce_action_name,
            style: action.style,
            haptic_pattern: action.haptic_pattern,
            color: action.color.clone(),
            icon: action.icon.clone(),
            notice_seconds: action.notice_seconds,
            countdown_seconds: action.countdown_seconds.clone(),
        });
    }

    let event = Event {
        title: template.title.clone(),
        description: template.description.clone(),
        start_time,
        timezone: template.timezone.clone(),
        timeline,
    };
    event.validate()?;
    tracing::debug!(
        title = %event.title,
        actions = event.timeline.len(),
        start = %crate::timestamp::format(&event.start_time),
        "built event timeline"
    );
    Ok(event)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
