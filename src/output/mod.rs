// Output formatting: terminal display of listings and profile detail.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Compact count: `1.2M`, `3.4K`, or the plain number below a thousand.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// The engagement column: one decimal, or `-` when the server has none.
pub fn format_engagement(rate: Option<f64>) -> String {
    match rate {
        Some(r) if r > 0.0 => format!("{r:.1}"),
        _ => "-".to_string(),
    }
}

/// Render a post's Unix timestamp as a calendar date.
pub fn format_post_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_thresholds() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(12_345), "12.3K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn test_format_engagement_missing() {
        assert_eq!(format_engagement(None), "-");
        assert_eq!(format_engagement(Some(0.0)), "-");
        assert_eq!(format_engagement(Some(3.14159)), "3.1");
    }

    #[test]
    fn test_format_post_date() {
        assert_eq!(format_post_date(0), "1970-01-01");
        assert_eq!(format_post_date(1_700_000_000), "2023-11-14");
    }
}
