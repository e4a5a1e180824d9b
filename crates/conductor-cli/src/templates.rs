//! Built-in event templates.
//!
//! These are the stock test events: `inaugural` and `diagnostic` are the
//! showcase sequences (colors, icons, notices, countdowns on every action),
//! `smoke` is a minimal six-action run with every optional field absent —
//! useful for exercising the lean end of the schema.

use conductor_core::{ActionStyle, ActionTemplate, EventTemplate, HapticPattern};

/// Names of the built-in templates, in recommended run order.
pub const NAMES: [&str; 3] = ["diagnostic", "inaugural", "smoke"];

/// Look up a built-in template by name.
#[must_use]
pub fn builtin(name: &str) -> Option<EventTemplate> {
    match name {
        "inaugural" => Some(inaugural()),
        "diagnostic" => Some(diagnostic()),
        "smoke" => Some(smoke()),
        _ => None,
    }
}

struct ActionSpec {
    relative_time: i64,
    action: &'static str,
    style: ActionStyle,
    haptic: HapticPattern,
    color: &'static str,
    icon: &'static str,
    notice_seconds: u32,
    countdown: &'static [u32],
}

impl ActionSpec {
    fn into_template(self) -> ActionTemplate {
        ActionTemplate {
            relative_time: self.relative_time,
            action: self.action.to_owned(),
            audio_announce: true,
            announce_action_name: true,
            style: self.style,
            haptic_pattern: Some(self.haptic),
            color: Some(self.color.to_owned()),
            icon: Some(self.icon.to_owned()),
            notice_seconds: Some(self.notice_seconds),
            countdown_seconds: Some(self.countdown.to_vec()),
        }
    }
}

fn inaugural() -> EventTemplate {
    let actions = [
        ActionSpec {
            relative_time: 0,
            action: "Take a deep breath. The Pantheon is online.",
            style: ActionStyle::Emphasis,
            haptic: HapticPattern::Single,
            color: "#9C27B0",
            icon: "🏛️",
            notice_seconds: 15,
            countdown: &[10, 5, 3, 2, 1],
        },
        ActionSpec {
            relative_time: 20,
            action: "Raise your phone like a torch. You are the conductor now.",
            style: ActionStyle::Emphasis,
            haptic: HapticPattern::Double,
            color: "#FF9800",
            icon: "🔥",
            notice_seconds: 10,
            countdown: &[5, 3, 2, 1],
        },
        ActionSpec {
            relative_time: 40,
            action: "Look left, then right. You're part of something bigger.",
            style: ActionStyle::Normal,
            haptic: HapticPattern::Single,
            color: "#2196F3",
            icon: "👀",
            notice_seconds: 10,
            countdown: &[5, 3, 2, 1],
        },
        ActionSpec {
            relative_time: 60,
            action: "Clap once. The signal has been sent.",
            style: ActionStyle::Alert,
            haptic: HapticPattern::Triple,
            color: "#4CAF50",
            icon: "👏",
            notice_seconds: 10,
            countdown: &[5, 3, 2, 1],
        },
        ActionSpec {
            relative_time: 80,
            action: "Final pose: arms crossed, slight nod. Test complete.",
            style: ActionStyle::Emphasis,
            haptic: HapticPattern::Double,
            color: "#E91E63",
            icon: "✨",
            notice_seconds: 10,
            countdown: &[5, 3, 2, 1],
        },
    ];
    EventTemplate {
        title: "Pantheon Inaugural".to_owned(),
        description: "Your AI assistants present: a demonstration of synchronized coordination."
            .to_owned(),
        timezone: "America/Denver".to_owned(),
        actions: actions.into_iter().map(ActionSpec::into_template).collect(),
    }
}

fn diagnostic() -> EventTemplate {
    let actions = [
        ActionSpec {
            relative_time: 0,
            action: "System Link Established",
            style: ActionStyle::Normal,
            haptic: HapticPattern::Single,
            color: "#4CAF50",
            icon: "🔗",
            notice_seconds: 10,
            countdown: &[5, 3, 2, 1],
        },
        ActionSpec {
            relative_time: 30,
            action: "Audio Channel Diagnostic",
            style: ActionStyle::Emphasis,
            haptic: HapticPattern::Double,
            color: "#2196F3",
            icon: "🔊",
            notice_seconds: 5,
            countdown: &[3, 2, 1],
        },
        ActionSpec {
            relative_time: 60,
            action: "Haptic Array Stress Test",
            style: ActionStyle::Alert,
            haptic: HapticPattern::Triple,
            color: "#FF9800",
            icon: "📳",
            notice_seconds: 5,
            countdown: &[3, 2, 1],
        },
        ActionSpec {
            relative_time: 90,
            action: "Visual Synchronization",
            style: ActionStyle::Emphasis,
            haptic: HapticPattern::Triple,
            color: "#F44336",
            icon: "👁️",
            notice_seconds: 5,
            countdown: &[3, 2, 1],
        },
        ActionSpec {
            relative_time: 120,
            action: "Welcome to the Network, Operator.",
            style: ActionStyle::Emphasis,
            haptic: HapticPattern::Double,
            color: "#9C27B0",
            icon: "🏛️",
            notice_seconds: 10,
            countdown: &[5, 4, 3, 2, 1],
        },
        ActionSpec {
            relative_time: 150,
            action: "Entering Standby Mode",
            style: ActionStyle::Normal,
            haptic: HapticPattern::Single,
            color: "#607D8B",
            icon: "💤",
            notice_seconds: 5,
            countdown: &[3, 2, 1],
        },
    ];
    EventTemplate {
        title: "Pantheon Node Initialization".to_owned(),
        description: "System diagnostic and welcome sequence for Conductor mobile node.".to_owned(),
        timezone: "America/Denver".to_owned(),
        actions: actions.into_iter().map(ActionSpec::into_template).collect(),
    }
}

fn smoke() -> EventTemplate {
    let steps: [(&str, ActionStyle, HapticPattern); 6] = [
        ("Raise hand", ActionStyle::Emphasis, HapticPattern::Triple),
        ("Wave slowly", ActionStyle::Normal, HapticPattern::Double),
        ("Clap once", ActionStyle::Alert, HapticPattern::Triple),
        ("Turn around", ActionStyle::Normal, HapticPattern::Double),
        ("Take a step forward", ActionStyle::Normal, HapticPattern::Double),
        ("Final pose", ActionStyle::Emphasis, HapticPattern::Triple),
    ];
    EventTemplate {
        title: "Test Flash Mob".to_owned(),
        description: "A test event for Conductor Mobile development".to_owned(),
        timezone: "America/New_York".to_owned(),
        actions: steps
            .into_iter()
            .enumerate()
            .map(|(index, (text, style, haptic))| ActionTemplate {
                relative_time: index as i64 * 15,
                action: text.to_owned(),
                audio_announce: true,
                announce_action_name: true,
                style,
                haptic_pattern: Some(haptic),
                color: None,
                icon: None,
                notice_seconds: None,
                countdown_seconds: None,
            })
            .collect(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
