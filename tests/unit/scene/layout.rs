use super::*;

#[test]
fn thousands_groups_digits() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(999), "999");
    assert_eq!(thousands(4171), "4,171");
    assert_eq!(thousands(12456), "12,456");
    assert_eq!(thousands(1234567), "1,234,567");
}

#[test]
fn centered_row_is_symmetric() {
    let lefts = centered_row(&[100.0, 50.0, 100.0], 20.0, 960.0);
    assert_eq!(lefts, vec![815.0, 935.0, 1005.0]);
    assert!(centered_row(&[], 20.0, 960.0).is_empty());
}

#[test]
fn text_width_counts_chars_not_bytes() {
    assert!((text_width("abc", 10.0) - 18.0).abs() < 1e-9);
    assert!((text_width("🔥", 10.0) - 6.0).abs() < 1e-9);
}

#[test]
fn date_formats() {
    let start: DateTime<Utc> = "2024-03-27T00:00:00Z".parse().unwrap();
    let end: DateTime<Utc> = "2024-03-30T10:15:00Z".parse().unwrap();
    assert_eq!(date_range(start, end), "3/27/2024 - 3/30/2024");
    assert_eq!(clock(end), "10:15");
    assert_eq!(short_timestamp(end), "Mar 30, 10:15 AM");
}

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("pullRequests"), "PullRequests");
    assert_eq!(capitalize(""), "");
}
