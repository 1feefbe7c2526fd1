use chrono::NaiveTime;

/// Taskbar clock refresh period.
pub const CLOCK_TICK_MS: u32 = 1_000;

/// Two-digit `HH:MM`, 24-hour.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
