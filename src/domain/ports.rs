use super::card::CardData;
use super::payment::{PaymentId, PaymentRecord, PaymentView, SettlementOutcome};
use crate::error::Result;
use async_trait::async_trait;

/// The external settlement collaborator: takes card data, returns a final
/// status and a bank-side reference. Implementations must mint a fresh
/// reference per call and never surface a recoverable error into the core.
#[async_trait]
pub trait SettlementGateway: Send + Sync {
    async fn submit(&self, card: &CardData) -> SettlementOutcome;
}

/// The authoritative store of submitted payments.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Records a payment under its freshly generated id. Inserting an id
    /// that already exists is a caller bug and returns
    /// [`crate::error::PaymentError::DuplicatePayment`].
    async fn add(&self, record: PaymentRecord) -> Result<()>;

    /// Looks up a payment, returning its masked view or `None` if the id
    /// was never recorded.
    async fn get(&self, id: PaymentId) -> Result<Option<PaymentView>>;
}

pub type SettlementGatewayBox = Box<dyn SettlementGateway>;
pub type PaymentLedgerBox = Box<dyn PaymentLedger>;
