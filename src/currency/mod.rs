//! Display formatting for premium amounts.
//!
//! One fixed convention: `.` decimal point, `,` grouping, and zero fractional
//! digits for the kwacha. Formatting is purely presentational: callers keep
//! the full-precision `f64` and only render through here.

/// Currency symbol for display, falling back to the code itself.
pub fn symbol_for(code: &str) -> &str {
    match code {
        "ZMK" | "ZMW" => "K",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        _ => code,
    }
}

/// Fractional digits rendered for a currency.
pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "ZMK" | "ZMW" | "JPY" => 0,
        _ => 2,
    }
}

/// Formats an amount with grouped thousands and the currency's precision,
/// e.g. `format_currency(18150.0, "ZMK")` → `"K18,150"`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let precision = minor_units_for(code);
    let body = format_number(amount, precision);
    format!("{}{}", symbol_for(code), body)
}

/// Groups the integer part of a fixed-precision rendering with commas.
pub fn format_number(value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    match body.find('.') {
        Some(pos) => {
            let (int_part, frac_part) = body.split_at(pos);
            format!("{}{}", group_digits(int_part), frac_part)
        }
        None => group_digits(&body),
    }
}

fn group_digits(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{}{}", sign, grouped)
}
