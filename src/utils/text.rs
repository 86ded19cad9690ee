//! Text helpers for table cells

/// Shorten `s` to at most `max` characters, marking the cut with `…`.
///
/// Counts chars rather than bytes so CJK values are never split mid-codepoint.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// `value`, or a dash when absent
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(truncate("10.0.0.1", 15), "10.0.0.1");
    }

    #[test]
    fn cjk_values_are_cut_on_char_boundaries() {
        assert_eq!(truncate("中国 | 北京", 4), "中国 …");
        assert_eq!(truncate("僵尸网络", 2), "僵…");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("x")), "x");
    }
}
