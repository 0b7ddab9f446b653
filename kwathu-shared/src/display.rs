use chrono::{Datelike, NaiveDate};

/// Renders an amount the way the pages show it: `MWK 225,000`.
pub fn format_mwk(amount: u64) -> String {
    format!("MWK {}", group_thousands(amount))
}

/// Groups digits in threes with commas (`1234567` -> `1,234,567`).
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short localized date, `M/D/YYYY`.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mwk() {
        assert_eq!(format_mwk(0), "MWK 0");
        assert_eq!(format_mwk(999), "MWK 999");
        assert_eq!(format_mwk(75000), "MWK 75,000");
        assert_eq!(format_mwk(225000), "MWK 225,000");
        assert_eq!(format_mwk(1234567), "MWK 1,234,567");
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_display_date(date), "3/4/2025");
    }
}
