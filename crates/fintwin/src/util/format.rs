use fintwin_core::model::round_currency;

/// Group the digits of a whole number with commas
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount in whole currency units, e.g. `$1,234,567` or `-$80,000`
pub fn format_currency(value: f64) -> String {
    let rounded = round_currency(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Format a signed difference with an explicit `+` for gains
pub fn format_signed_currency(value: f64) -> String {
    if round_currency(value) > 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Format a fraction as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Describe a retirement delay in years
pub fn format_delay(delay: i32) -> String {
    match delay {
        0 => "no change".to_string(),
        1 => "1 year later".to_string(),
        -1 => "1 year earlier".to_string(),
        d if d > 0 => format!("{d} years later"),
        d => format!("{} years earlier", -d),
    }
}
