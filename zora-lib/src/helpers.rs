use crate::core::locale::Locale;

pub const MAX_FRACTION_DIGITS: usize = 6;

/// Render a token total the way the viewer's locale writes numbers, with at
/// most six fraction digits and no trailing zeros.
pub fn format_token_amount(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (group_separator, decimal_mark) = locale.separators();

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut amount = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let rounds_to_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !rounds_to_zero {
        amount.push('-');
    }

    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            amount.push(group_separator);
        }
        amount.push(c);
    }

    if !frac_part.is_empty() {
        amount.push(decimal_mark);
        amount.push_str(frac_part);
    }
    amount
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
