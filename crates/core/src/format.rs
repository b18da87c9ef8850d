//! Display formatting shared by views and the exported document.

/// Group digits in threes: `40000` → `"40,000"`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-decimal percentage with a trailing sign: `38.5` → `"38.5%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(40_000), "40,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(38.5), "38.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
