use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The marker prepended to a masked card number.
pub const MASK: &str = "****";

/// The card details submitted with a payment request.
///
/// Immutable once constructed for a given request. Callers must strip any
/// embedded separators from `card_number` before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub card_number: String,
    /// Expiry in `MM/YY` form.
    pub expiry_date: String,
    pub amount: Decimal,
    /// ISO-4217-like currency code, passed through uninterpreted.
    pub currency: String,
    pub cvv: String,
}

/// A display-safe projection of [`CardData`]: the card number keeps only its
/// last four digits and the CVV is dropped entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskedCard {
    pub card_number: String,
    pub expiry_date: String,
    pub amount: Decimal,
    pub currency: String,
}

impl CardData {
    /// Returns the masked projection of this card. Amount, currency and
    /// expiry pass through unchanged.
    pub fn masked(&self) -> MaskedCard {
        MaskedCard {
            card_number: mask_card_number(&self.card_number),
            expiry_date: self.expiry_date.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
        }
    }
}

/// Masks a card number, keeping only the last four digits visible.
///
/// Numbers shorter than four characters are masked entirely rather than
/// echoed back.
pub fn mask_card_number(card_number: &str) -> String {
    match card_number.char_indices().nth_back(3) {
        Some((idx, _)) => format!("{MASK}{}", &card_number[idx..]),
        None => MASK.to_string(),
    }
}
