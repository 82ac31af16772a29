//! Number formatting for the stderr run summary.

/// Formats a number with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use flow_log_tagger::utils::format::format_number;
///
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Formats a duration as milliseconds with two decimals.
pub fn format_millis(elapsed: std::time::Duration) -> String {
    format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0)
}
