use crate::domain::card::CardData;
use crate::domain::payment::{PaymentId, PaymentRecord, PaymentView};
use crate::domain::ports::{PaymentLedgerBox, SettlementGatewayBox};
use crate::error::Result;
use tracing::info;

/// The main entry point for processing payments.
///
/// `PaymentService` owns the settlement gateway and the ledger, both chosen
/// at construction time as trait objects. A payment moves through three
/// states: validating (done by the caller before invoking
/// [`Self::make_payment`]), submitting, recorded. Recorded is terminal; there
/// are no retries and no rollback.
pub struct PaymentService {
    gateway: SettlementGatewayBox,
    ledger: PaymentLedgerBox,
}

impl PaymentService {
    pub fn new(gateway: SettlementGatewayBox, ledger: PaymentLedgerBox) -> Self {
        Self { gateway, ledger }
    }

    /// Submits a payment to the settlement collaborator and records the
    /// outcome, returning the freshly generated payment id.
    ///
    /// Validation is not performed here: callers must run
    /// [`crate::domain::validation::validate`] and reject first. Whatever
    /// the gateway returns is written unconditionally and is final for this
    /// payment.
    pub async fn make_payment(&self, card: CardData) -> Result<PaymentId> {
        let id = PaymentId::new();
        let outcome = self.gateway.submit(&card).await;
        info!(payment = %id, status = %outcome.status, "payment recorded");
        self.ledger.add(PaymentRecord::new(id, card, outcome)).await?;
        Ok(id)
    }

    /// Looks up a recorded payment by id, returning its masked view.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Option<PaymentView>> {
        self.ledger.get(id).await
    }
}
