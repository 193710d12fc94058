//! Formatting helpers for prices, temperatures and percentages.

/// Group digits in threes: `2150` -> `"2,150"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", group_thousands(amount))
}

/// Magnitude of a percentage change; direction is shown by the trend marker.
pub fn format_change(change: f64) -> String {
    format!("{:.1}%", change.abs())
}

pub fn format_signed_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{change:.1}% ↗")
    } else {
        format!("{change:.1}% ↘")
    }
}

pub fn format_celsius(value: i32) -> String {
    format!("{value}°C")
}

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(380), "380");
        assert_eq!(group_thousands(2150), "2,150");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn rupee_prices() {
        assert_eq!(format_rupees(5680), "₹5,680");
        assert_eq!(format_rupees(300), "₹300");
    }

    #[test]
    fn changes_drop_sign_but_signed_variant_keeps_it() {
        assert_eq!(format_change(-1.2), "1.2%");
        assert_eq!(format_change(4.7), "4.7%");
        assert_eq!(format_signed_change(2.3), "+2.3% ↗");
        assert_eq!(format_signed_change(-1.2), "-1.2% ↘");
    }
}
