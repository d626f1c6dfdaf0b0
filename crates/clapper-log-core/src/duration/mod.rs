//! `HH:MM:SS` rendering of elapsed time.

const MILLIS_PER_SECOND: u64 = 1000;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Render a millisecond span as zero-padded `HH:MM:SS`.
///
/// Sub-second remainders are truncated. Hours are padded to two digits but
/// never truncated, so 100 hours renders as `100:00:00`.
///
/// The span is unsigned: differences of wall-clock instants must go through
/// [`clamp_elapsed`] first.
pub fn format_duration(millis: u64) -> String {
    let total_seconds = millis / MILLIS_PER_SECOND;
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Clamp a signed instant difference to a non-negative span.
///
/// Clock skew across a restart can make `now - started_at` negative; the
/// displayed timer then reads zero instead of wrapping.
pub fn clamp_elapsed(millis: i64) -> u64 {
    u64::try_from(millis).unwrap_or(0)
}
