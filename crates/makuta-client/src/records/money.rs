use crate::records::{Currency, Movement};

/// Render a magnitude in its currency's display convention: USD is
/// `$`-prefixed with two fraction digits, CDF is `FC`-suffixed with none
/// (franc amounts are never shown with cents). A missing amount renders as
/// zero, silently.
pub fn format_amount(amount: Option<f64>, currency: Currency) -> String {
    let magnitude = amount.unwrap_or(0.0).abs();

    match currency {
        Currency::Usd => format!("${}", grouped_decimal(magnitude, 2)),
        Currency::Cdf => format!("{} FC", grouped_decimal(magnitude, 0)),
    }
}

/// Display form with the sign implied by the movement direction. The
/// stored amount is a magnitude; `out` renders with a leading `-` and `in`
/// with `+`, regardless of any sign that slipped into the raw value.
pub fn signed_amount(movement: Movement, amount: Option<f64>, currency: Currency) -> String {
    let sign = match movement {
        Movement::In => '+',
        Movement::Out => '-',
    };
    format!("{sign}{}", format_amount(amount, currency))
}

fn grouped_decimal(value: f64, fraction_digits: usize) -> String {
    let rendered = format!("{value:.fraction_digits$}");
    let (whole, fraction) = match rendered.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let grouped = group_thousands(whole);
    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();
    for (index, character) in digits.chars().enumerate() {
        if index > 0 && (count - index) % 3 == 0 {
            output.push(',');
        }
        output.push(character);
    }
    output
}
