/// Cut `s` to at most `max_chars` characters, marking the cut with `...`.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", s[..idx].trim_end()),
        None => s.to_string(),
    }
}

/// `6500` -> `"6,500"`.
#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `value / goal` as a whole percentage, rounded half away from zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn percent_of(value: f64, goal: f64) -> i64 {
    if goal <= 0.0 {
        return 0;
    }
    (value / goal * 100.0).round() as i64
}
