//! Time formatting for display

/// Format a duration in seconds as `M:SS`
///
/// Minutes are an unpadded integer (floor division), seconds a two-digit
/// zero-padded integer. There is no hour component regardless of magnitude:
/// `format_time(3600.0)` renders `"60:00"`.
///
/// Negative or non-finite input (duration not yet known) renders `"0:00"`.
///
/// # Example
/// ```rust
/// use tonearm::format_time;
///
/// assert_eq!(format_time(125.0), "2:05");
/// assert_eq!(format_time(59.9), "0:59");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}
