//! Number formatting helpers

/// Abbreviate large numbers with K/M/B suffixes
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return "0".to_string();
    }
    if num >= 1e9 {
        format!("{:.2}B", num / 1e9)
    } else if num >= 1e6 {
        format!("{:.2}M", num / 1e6)
    } else if num >= 1e3 {
        format!("{:.2}K", num / 1e3)
    } else {
        num.to_string()
    }
}

/// Price with thousands separators; decimals only when the price has them
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }
    let rounded = (price * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents:02}")
    }
}

/// Share volume in millions with one decimal
pub fn format_volume_millions(volume: u64) -> String {
    format!("{:.1}M", volume as f64 / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2_500_000_000.0), "2.50B");
        assert_eq!(format_number(1_234_567.0), "1.23M");
        assert_eq!(format_number(12_500.0), "12.50K");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1_234_567.0), "1,234,567");
        assert_eq!(format_price(1_234.5), "1,234.50");
        assert_eq!(format_price(950.0), "950");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(-1_500.0), "-1,500");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume_millions(12_340_000), "12.3M");
        assert_eq!(format_volume_millions(0), "0.0M");
    }
}
