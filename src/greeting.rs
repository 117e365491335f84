// src/greeting.rs

/// Greeting for a local hour of day (0..=23).
pub fn for_hour(hour: u32) -> &'static str {
    debug_assert!(hour < 24, "hour out of range: {hour}");
    match hour {
        0..=4 => "Still awake?",
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        18..=21 => "Good evening",
        _ => "Night owl alert",
    }
}

pub fn badge_text(greeting: &str) -> String {
    format!("{greeting}, I’m glad you said hi.")
}
