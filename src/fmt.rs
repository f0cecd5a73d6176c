/// Format an amount as a dollar string with thousands separators: $1,234.56.
/// Deterministic and total — this is the display fallback for every amount.
pub fn money(val: f64) -> String {
    let sign = if val < 0.0 { "-" } else { "" };
    let cents = (val.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}${grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(3.5), "$3.50");
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(1000000.99), "$1,000,000.99");
        assert_eq!(money(999.999), "$1,000.00");
    }

    #[test]
    fn test_money_negative() {
        assert_eq!(money(-40.0), "-$40.00");
        assert_eq!(money(-1234.5), "-$1,234.50");
    }
}
