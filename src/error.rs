use crate::domain::payment::PaymentId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// A card-data rejection. The `Display` strings are the user-facing reasons
/// reported back to the caller; validation never mutates any state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid card number")]
    InvalidCardNumber,
    #[error("Card has expired")]
    CardExpired,
    #[error("Invalid CVV")]
    InvalidCvv,
    #[error("Invalid payment amount")]
    InvalidAmount,
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("payment {0} already recorded")]
    DuplicatePayment(PaymentId),
    #[error("malformed payment id: {0}")]
    MalformedPaymentId(#[from] uuid::Error),
}
