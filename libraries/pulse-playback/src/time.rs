//! Time display helpers

/// Format seconds as `mm:ss`
///
/// Total over all inputs: NaN, negative and infinite values render as
/// `"00:00"`. Fractions are floored. Minutes grow past two digits for
/// sources longer than 99 minutes.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let whole = seconds.floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}
