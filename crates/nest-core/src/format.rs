//! Currency formatting for listing prices

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a missing price
pub const PRICE_ON_REQUEST: &str = "Price on request";

/// `₦25,000`
pub fn format_naira(amount: Decimal) -> String {
    format_currency("₦", amount)
}

/// `$1,250`
pub fn format_usd(amount: Decimal) -> String {
    format_currency("$", amount)
}

pub fn format_optional_naira(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| PRICE_ON_REQUEST.to_string(), format_naira)
}

pub fn format_optional_usd(amount: Option<Decimal>) -> Option<String> {
    amount.map(format_usd)
}

/// Whole units, thousands grouped with commas
fn format_currency(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = rounded.abs().trunc().to_string();

    format!("{sign}{symbol}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_naira() {
        assert_eq!(format_naira(dec!(25000)), "₦25,000");
        assert_eq!(format_naira(dec!(150000000)), "₦150,000,000");
        assert_eq!(format_naira(dec!(999)), "₦999");
        assert_eq!(format_naira(dec!(0)), "₦0");
    }

    #[test]
    fn test_usd_rounds_to_whole_units() {
        assert_eq!(format_usd(dec!(1249.5)), "$1,250");
        assert_eq!(format_usd(dec!(1249.49)), "$1,249");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_naira(dec!(-1500)), "-₦1,500");
    }

    #[test]
    fn test_missing_price() {
        assert_eq!(format_optional_naira(None), PRICE_ON_REQUEST);
        assert_eq!(format_optional_usd(None), None);
    }
}
