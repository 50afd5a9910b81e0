//! Argentine number formatting: `.` groups thousands, `,` marks decimals.

/// Whole pesos with grouped thousands, e.g. `$ 1.234.568`.
pub fn format_ars(value: f64) -> String {
    let grouped = group_thousands(value.round().abs() as u64);
    if value.round() < 0.0 {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

/// Up to two decimals, trailing zeros dropped: `4.007,81`, `400`.
pub fn format_ars_cents(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let body = match fraction {
        0 => whole,
        f if f % 10 == 0 => format!("{whole},{}", f / 10),
        f => format!("{whole},{f:02}"),
    };
    format!("{sign}$ {body}")
}

pub fn format_pct(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed.replace('.', ","))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Whole-peso amount as typed with thousands dots (`"1.250.000"`).
/// Anything other than digits and dots is rejected; empty input is zero.
pub fn parse_amount(input: &str) -> Option<f64> {
    let raw: String = input.trim().chars().filter(|ch| *ch != '.').collect();
    if raw.is_empty() {
        return Some(0.0);
    }
    if !raw.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Decimal input accepting either `,` or `.` as the decimal mark. When a
/// `,` is present, dots are thousands separators (`1.200,50`).
/// Returns `None` for anything that is not a finite number.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let trimmed = input.trim().trim_start_matches('$').trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_pesos() {
        assert_eq!(format_ars(0.0), "$ 0");
        assert_eq!(format_ars(999.4), "$ 999");
        assert_eq!(format_ars(1_000.0), "$ 1.000");
        assert_eq!(format_ars(1_234_567.6), "$ 1.234.568");
        assert_eq!(format_ars(-3_500.0), "-$ 3.500");
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format_ars_cents(4_007.8125), "$ 4.007,81");
        assert_eq!(format_ars_cents(400.0), "$ 400");
        assert_eq!(format_ars_cents(12.5), "$ 12,5");
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_pct(3.5), "3,5%");
        assert_eq!(format_pct(14.0), "14%");
        assert_eq!(format_pct(4.75), "4,75%");
    }

    #[test]
    fn parses_grouped_amounts() {
        assert_eq!(parse_amount("1.250.000"), Some(1_250_000.0));
        assert_eq!(parse_amount(""), Some(0.0));
        assert_eq!(parse_amount("12a"), None);
        assert_eq!(parse_amount("-5"), None);
    }

    #[test]
    fn parses_decimals() {
        assert_eq!(parse_decimal("3,5"), Some(3.5));
        assert_eq!(parse_decimal(" 1200.75 "), Some(1_200.75));
        assert_eq!(parse_decimal("$ 300"), Some(300.0));
        assert_eq!(parse_decimal("1.200,50"), Some(1_200.5));
        assert_eq!(parse_decimal("$ 1.250.000,75"), Some(1_250_000.75));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }
}
