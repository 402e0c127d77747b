//! ECMAScript `Number.prototype.toString` for radix 10
//!
//! Numeric property keys are canonicalized through this, so `1e3` and
//! `1000` name the same property.

/// Format a number the way ECMAScript converts it to a string
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }

    let (digits, n) = shortest_digits(value);
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        digits + &"0".repeat((n - k) as usize)
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exponent = n - 1;
        let sign = if exponent >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

/// Shortest round-trip decimal digits of a positive finite value, and the
/// exponent `n` such that the value is `0.digits * 10^n`
fn shortest_digits(value: f64) -> (String, i32) {
    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format_finite(value);

    let (mantissa, exponent) = match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (formatted, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut point = int_part.len() as i32 + exponent;
    let all: String = int_part.chars().chain(frac_part.chars()).collect();
    let trimmed_leading = all.trim_start_matches('0');
    point -= (all.len() - trimmed_leading.len()) as i32;
    let digits = trimmed_leading.trim_end_matches('0');

    (digits.to_string(), point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(number_to_string(0.0), "0");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(10.0), "10");
        assert_eq!(number_to_string(1000.0), "1000");
        assert_eq!(number_to_string(123456789.0), "123456789");
        assert_eq!(number_to_string(-42.0), "-42");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(number_to_string(0.5), "0.5");
        assert_eq!(number_to_string(1.25), "1.25");
        assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1.5e300), "1.5e+300");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.23e-10), "1.23e-10");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }
}
