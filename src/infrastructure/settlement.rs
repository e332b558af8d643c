use crate::domain::card::CardData;
use crate::domain::payment::{SettlementOutcome, SettlementStatus};
use crate::domain::ports::SettlementGateway;
use async_trait::async_trait;
use tracing::info;

/// A settlement bank that clears every submission.
///
/// Stateless; reference ids are minted fresh per call, so concurrent
/// submissions need no coordination.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApprovingBank;

#[async_trait]
impl SettlementGateway for ApprovingBank {
    async fn submit(&self, card: &CardData) -> SettlementOutcome {
        let outcome = SettlementOutcome::new(SettlementStatus::Success);
        info!(
            reference = %outcome.reference,
            amount = %card.amount,
            currency = %card.currency,
            "settlement approved"
        );
        outcome
    }
}

/// A settlement bank that declines every submission. Useful as the
/// deterministic failure double.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecliningBank;

#[async_trait]
impl SettlementGateway for DecliningBank {
    async fn submit(&self, card: &CardData) -> SettlementOutcome {
        let outcome = SettlementOutcome::new(SettlementStatus::Failure);
        info!(
            reference = %outcome.reference,
            amount = %card.amount,
            currency = %card.currency,
            "settlement declined"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn card() -> CardData {
        CardData {
            card_number: "4658585018481009".to_string(),
            expiry_date: "11/30".to_string(),
            amount: dec!(100.00),
            currency: "GBP".to_string(),
            cvv: "555".to_string(),
        }
    }

    #[tokio::test]
    async fn test_approving_bank_always_succeeds() {
        let bank = ApprovingBank;
        let outcome = bank.submit(&card()).await;
        assert_eq!(outcome.status, SettlementStatus::Success);
    }

    #[tokio::test]
    async fn test_declining_bank_always_fails() {
        let bank = DecliningBank;
        let outcome = bank.submit(&card()).await;
        assert_eq!(outcome.status, SettlementStatus::Failure);
    }

    #[tokio::test]
    async fn test_each_submission_gets_a_fresh_reference() {
        let bank = ApprovingBank;
        let first = bank.submit(&card()).await;
        let second = bank.submit(&card()).await;
        assert_ne!(first.reference, second.reference);
    }
}
