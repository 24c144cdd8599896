//! Ingredient quantity scaling.
//!
//! Only a leading quantity is rescaled: `"2 cups flour"` at ×2 becomes
//! `"4 cups flour"`. Lines without a leading number are returned unchanged.
//! Callers must always scale from the original line, never from a line that
//! was already scaled, or rounding error accumulates.

/// Split a leading quantity off `text`.
///
/// Accepts an integer, a decimal (`1.5`) or a fraction (`3/4`, `1.5/2`),
/// followed by optional whitespace. Returns the parsed value and the
/// remainder. A zero denominator counts as "no quantity".
pub fn parse_leading_quantity(text: &str) -> Option<(f64, &str)> {
    let bytes = text.as_bytes();
    let int_end = skip_digits(bytes, 0);
    if int_end == 0 {
        return None;
    }

    let mut end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        if frac_end > end + 1 {
            end = frac_end;
        }
    }
    let numerator_end = end;

    let mut denominator = None;
    if bytes.get(end) == Some(&b'/') {
        let denom_end = skip_digits(bytes, end + 1);
        if denom_end > end + 1 {
            denominator = Some(&text[end + 1..denom_end]);
            end = denom_end;
        }
    }

    let numerator: f64 = text[..numerator_end].parse().ok()?;
    let value = match denominator {
        Some(d) => {
            let d: f64 = d.parse().ok()?;
            if d == 0.0 {
                return None;
            }
            numerator / d
        }
        None => numerator,
    };
    Some((value, text[end..].trim_start()))
}

fn skip_digits(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Round a scaled quantity for display.
///
/// Below 1: two decimals. From 1 up to 10: one decimal. Otherwise whole units.
pub fn round_quantity(value: f64) -> f64 {
    if value > 0.0 && value < 1.0 {
        (value * 100.0).round() / 100.0
    } else if value < 10.0 {
        (value * 10.0).round() / 10.0
    } else {
        value.round()
    }
}

/// Rescale the leading quantity of `ingredient` by `multiplier`.
pub fn scale(ingredient: &str, multiplier: f64) -> String {
    match parse_leading_quantity(ingredient) {
        Some((amount, rest)) => {
            let scaled = round_quantity(amount * multiplier);
            format!("{scaled} {rest}")
        }
        None => ingredient.to_owned(),
    }
}
