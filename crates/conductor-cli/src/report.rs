//! Console report for generated events.
//!
//! Report output is user-facing and goes to stdout; diagnostics go through
//! `tracing` and stay on stderr.

use conductor_codec::{EcLevel, event_uri};
use conductor_core::{Event, timestamp};

const RULE: &str = "============================================================";

/// Print the full generation report: event details, timeline, encoded token,
/// and the deep-link URI for the external code renderer.
pub fn print_generate_report(event: &Event, token: &str, start_minutes: i64) {
    let uri = event_uri(token);

    println!();
    println!("{RULE}");
    println!("  CONDUCTOR EVENT GENERATOR");
    println!("{RULE}");
    println!();
    println!("  EVENT DETAILS:");
    println!("    Title: {}", event.title);
    println!(
        "    Start: {} ({start_minutes} min from now)",
        timestamp::format(&event.start_time)
    );
    println!("    Timezone: {}", event.timezone);
    println!("    Actions: {}", event.timeline.len());
    println!();

    println!("  TIMELINE:");
    for action in &event.timeline {
        let offset = (action.time - event.start_time).num_seconds();
        println!("    +{offset:3}s: {} [{}]", action.action, action.style);
    }
    println!();

    println!("  ENCODED DATA:");
    println!("    Length: {} characters", token.len());
    println!(
        "    Suggested error correction: {:?}",
        EcLevel::suggested_for(uri.len())
    );
    println!();

    println!("  DEEP LINK URL:");
    println!("    {uri}");
    println!();

    println!("  RAW ENCODED DATA (paste into a QR generator):");
    println!();
    println!("{token}");
    println!();

    println!("{RULE}");
    println!("  NEXT STEPS:");
    println!("{RULE}");
    println!();
    println!("  1. Render the deep link URL as a QR code");
    println!("  2. Scan it with the Conductor app");
    println!("  3. Hit 'Go Live' to start the countdown");
    println!();
}

/// Print the serve banner with the URL phones should open.
pub fn print_serve_banner(url: &str, package_name: &str, size_mb: f64) {
    println!();
    println!("{RULE}");
    println!("  CONDUCTOR MOBILE - PACKAGE SERVER");
    println!("{RULE}");
    println!();
    println!("  Package: {package_name} ({size_mb:.1} MB)");
    println!();
    println!("  Open this URL on your Android phone:");
    println!("  {url}");
    println!();
    println!("  Press Ctrl+C to stop the server");
    println!();
}
