//! Amount parsing and formatting
//!
//! Amounts are stored as `f64`. These helpers turn user or file input into
//! amounts and render amounts the Dutch way (`€ 1.234,56`).

/// Parse the longest leading decimal number in `s`
///
/// Mirrors lenient float parsing: leading whitespace is skipped, an optional
/// sign, digits with at most one `.`, and an optional exponent are consumed;
/// everything after that is ignored. Returns `None` when no digit is found.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let bytes = s.trim_start().as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let text = std::str::from_utf8(&bytes[..end]).ok()?;
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Interpret an amount typed by the user during a manual edit
///
/// The first comma is treated as the decimal separator. Input that does not
/// start with a number becomes `0.0` instead of being rejected.
pub fn parse_amount_input(input: &str) -> f64 {
    let normalized = input.trim().replacen(',', ".", 1);
    parse_leading_float(&normalized).unwrap_or(0.0)
}

/// Render an amount as plain text for CSV output (no grouping, `.` decimals)
pub fn format_plain(amount: f64) -> String {
    if amount == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    amount.to_string()
}

/// Format an amount with a currency symbol in Dutch notation
///
/// Thousands are grouped with `.`, two decimals follow a `,` and negative
/// amounts put the minus sign before the symbol: `-€ 1.234,50`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}{} {},{:02}",
        if negative { "-" } else { "" },
        symbol,
        grouped,
        cents % 100
    )
}
