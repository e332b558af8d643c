//! Pure card-data checks. Stateless, side-effect free, safe to call
//! concurrently without coordination.

use crate::domain::card::CardData;
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Runs the full rule set against a card. The first failing check wins, in
/// this fixed order: card number, expiry, CVV, amount.
pub fn validate(card: &CardData) -> Result<(), ValidationError> {
    if !luhn_check(&card.card_number) {
        return Err(ValidationError::InvalidCardNumber);
    }
    if !expiry_in_future(&card.expiry_date) {
        return Err(ValidationError::CardExpired);
    }
    if !valid_cvv(&card.cvv) {
        return Err(ValidationError::InvalidCvv);
    }
    if !valid_amount(card.amount) {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(())
}

/// Validates a card number with the Luhn checksum.
///
/// Walking from the least-significant digit, every second digit is doubled
/// (subtracting 9 when the double exceeds 9); the number is valid iff the
/// digit sum is a multiple of ten. Any non-digit character fails the check,
/// as does an empty string.
pub fn luhn_check(card_number: &str) -> bool {
    if card_number.is_empty() {
        return false;
    }
    let mut sum = 0;
    for (i, c) in card_number.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Checks that an `MM/YY` expiry has not passed.
///
/// The card is valid iff the first instant of its expiry month is strictly
/// after the current time, so a card expiring in the current month is
/// already expired. Unparsable input fails.
pub fn expiry_in_future(expiry: &str) -> bool {
    expiry_in_future_at(expiry, Utc::now())
}

fn expiry_in_future_at(expiry: &str, now: DateTime<Utc>) -> bool {
    parse_expiry(expiry).is_some_and(|expires| expires > now)
}

/// Parses `MM/YY` into the first instant of the expiry month, UTC.
fn parse_expiry(expiry: &str) -> Option<DateTime<Utc>> {
    let (month, year) = expiry.split_once('/')?;
    if month.len() != 2
        || year.len() != 2
        || !month.bytes().chain(year.bytes()).all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: i32 = 2000 + year.parse::<i32>().ok()?;
    Some(NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?.and_utc())
}

/// A CVV is exactly 3 or 4 ASCII digits.
pub fn valid_cvv(cvv: &str) -> bool {
    matches!(cvv.len(), 3 | 4) && cvv.bytes().all(|b| b.is_ascii_digit())
}

/// An amount must be positive and expressible with at most two decimal
/// places (currency minor-unit granularity).
pub fn valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount.normalize().scale() <= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Months, TimeZone};
    use rust_decimal_macros::dec;

    fn future_expiry() -> String {
        let date = Utc::now() + Months::new(24);
        format!("{:02}/{:02}", date.month(), date.year() % 100)
    }

    fn valid_card() -> CardData {
        CardData {
            card_number: "4658585018481009".to_string(),
            expiry_date: future_expiry(),
            amount: dec!(100.00),
            currency: "GBP".to_string(),
            cvv: "555".to_string(),
        }
    }

    #[test]
    fn test_luhn_accepts_valid_numbers() {
        assert!(luhn_check("4658585018481009"));
        assert!(luhn_check("4032034130835070"));
        // Odd digit count
        assert!(luhn_check("79927398713"));
    }

    #[test]
    fn test_luhn_rejects_invalid_numbers() {
        assert!(!luhn_check("4658585018481008"));
        assert!(!luhn_check("1234567890123456"));
    }

    #[test]
    fn test_luhn_rejects_non_digits_and_empty() {
        assert!(!luhn_check("4658 5850 1848 1009"));
        assert!(!luhn_check("4658a85018481009"));
        assert!(!luhn_check(""));
    }

    #[test]
    fn test_expiry_comparisons_are_exclusive_of_the_expiry_month() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert!(expiry_in_future_at("11/24", now));
        assert!(expiry_in_future_at("07/24", now));
        // The card's own month has already started, so it is expired.
        assert!(!expiry_in_future_at("06/24", now));
        assert!(!expiry_in_future_at("11/09", now));
    }

    #[test]
    fn test_expiry_rejects_unparsable_input() {
        assert!(!expiry_in_future("garbage"));
        assert!(!expiry_in_future("13/30"));
        assert!(!expiry_in_future("00/30"));
        assert!(!expiry_in_future("1/30"));
        assert!(!expiry_in_future("11-30"));
        assert!(!expiry_in_future(""));
    }

    #[test]
    fn test_cvv_lengths() {
        assert!(valid_cvv("555"));
        assert!(valid_cvv("5555"));
        assert!(!valid_cvv("55"));
        assert!(!valid_cvv("55555"));
        assert!(!valid_cvv("55a"));
        assert!(!valid_cvv(""));
    }

    #[test]
    fn test_amount_must_be_positive_with_minor_unit_granularity() {
        assert!(valid_amount(dec!(100.00)));
        assert!(valid_amount(dec!(0.01)));
        assert!(valid_amount(dec!(5)));
        assert!(!valid_amount(dec!(0)));
        assert!(!valid_amount(dec!(-1.00)));
        assert!(!valid_amount(dec!(1.999)));
    }

    #[test]
    fn test_trailing_zeros_do_not_fail_the_amount_check() {
        assert!(valid_amount(dec!(100.0000)));
    }

    #[test]
    fn test_validate_passes_a_fully_valid_card() {
        assert_eq!(validate(&valid_card()), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_failure_in_order() {
        // Card number and CVV both invalid: the card-number reason wins.
        let mut card = valid_card();
        card.card_number = "1234567890123456".to_string();
        card.cvv = "55555".to_string();
        assert_eq!(validate(&card), Err(ValidationError::InvalidCardNumber));

        let mut card = valid_card();
        card.expiry_date = "11/09".to_string();
        card.amount = dec!(-5);
        assert_eq!(validate(&card), Err(ValidationError::CardExpired));

        let mut card = valid_card();
        card.cvv = "55555".to_string();
        assert_eq!(validate(&card), Err(ValidationError::InvalidCvv));

        let mut card = valid_card();
        card.amount = dec!(0);
        assert_eq!(validate(&card), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_rejection_reasons_read_as_user_facing_text() {
        assert_eq!(
            ValidationError::InvalidCardNumber.to_string(),
            "Invalid card number"
        );
        assert_eq!(ValidationError::CardExpired.to_string(), "Card has expired");
        assert_eq!(ValidationError::InvalidCvv.to_string(), "Invalid CVV");
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Invalid payment amount"
        );
    }
}
