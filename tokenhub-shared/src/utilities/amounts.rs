use alloy_primitives::U256;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromStr;
use crate::models::errors::ValidationError;

/// Parses a whole-number token amount that must be at least 1.
pub fn parse_positive_amount(amount: &str) -> Result<U256, ValidationError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAmount);
    }
    let value = U256::from_str_radix(trimmed, 10).map_err(|_| ValidationError::InvalidAmount)?;
    if value < U256::from(1) {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(value)
}

/// Initial supply for an ERC20 deployment: any whole number above zero.
pub fn parse_initial_supply(supply: &str) -> Result<U256, ValidationError> {
    parse_positive_amount(supply).map_err(|_| ValidationError::InvalidSupply)
}

/// True when `amount` is larger than a balance string returned by the backend.
///
/// Balances arrive either as plain integers (which may exceed `Decimal`'s
/// range) or as formatted decimals such as `"1000.5"`. An unparseable
/// balance is treated as zero.
pub fn exceeds_balance(amount: U256, balance: &str) -> bool {
    let balance = balance.trim();
    if let Ok(whole) = U256::from_str_radix(balance, 10) {
        return amount > whole;
    }
    let available = Decimal::from_str(balance).unwrap_or(Decimal::ZERO);
    match Decimal::from_str(&amount.to_string()) {
        Ok(requested) => requested > available,
        Err(_) => true,     // larger than anything Decimal can hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("1").unwrap(), U256::from(1));
        assert_eq!(parse_positive_amount(" 5000 ").unwrap(), U256::from(5000));
        assert_eq!(
            parse_positive_amount("115792089237316195423570985008687907853269984665640564039457584007913129639935").unwrap(),
            U256::MAX
        );
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        for case in ["", "0", "-1", "1.5", "abc", "10abc", "+3"] {
            assert_eq!(parse_positive_amount(case), Err(ValidationError::InvalidAmount), "{:?}", case);
        }
    }

    #[test]
    fn test_initial_supply_error() {
        assert_eq!(parse_initial_supply("0"), Err(ValidationError::InvalidSupply));
        assert_eq!(parse_initial_supply("1000000").unwrap(), U256::from(1_000_000));
    }

    #[test]
    fn test_exceeds_integer_balance() {
        assert!(!exceeds_balance(U256::from(5000), "10000"));
        assert!(!exceeds_balance(U256::from(10000), "10000"));
        assert!(exceeds_balance(U256::from(10001), "10000"));
    }

    #[test]
    fn test_exceeds_decimal_balance() {
        assert!(!exceeds_balance(U256::from(10), "10.5"));
        assert!(exceeds_balance(U256::from(11), "10.5"));
        assert!(exceeds_balance(U256::from(1), "0.999"));
    }

    #[test]
    fn test_huge_integer_balance() {
        let balance = "1000000000000000000000000000000000"; // beyond Decimal's range
        assert!(!exceeds_balance(U256::from(1), balance));
        assert!(exceeds_balance(U256::MAX, balance));
    }

    #[test]
    fn test_unparseable_balance_counts_as_zero() {
        assert!(exceeds_balance(U256::from(1), "n/a"));
    }
}
