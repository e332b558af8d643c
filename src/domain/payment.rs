use crate::domain::card::{CardData, MaskedCard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Process-unique identifier assigned to a payment at submission time.
///
/// Opaque 128-bit random value; never reused, never mutated. Its canonical
/// text form (hyphenated UUID) is what crosses the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Bank-side reference for a settled payment.
///
/// Lives in its own namespace: a `ReferenceId` is never comparable with a
/// [`PaymentId`], which the type system enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(Uuid);

impl ReferenceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReferenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementStatus {
    Success,
    Failure,
}

impl fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// What the settlement collaborator returned for a submission. Generated once
/// per payment and final for that payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementOutcome {
    pub status: SettlementStatus,
    pub reference: ReferenceId,
}

impl SettlementOutcome {
    /// Builds an outcome with a freshly minted bank reference.
    pub fn new(status: SettlementStatus) -> Self {
        Self {
            status,
            reference: ReferenceId::new(),
        }
    }
}

/// A payment as recorded in the ledger: created exactly once when the payment
/// is accepted for submission, never updated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub card: CardData,
    pub outcome: SettlementOutcome,
}

impl PaymentRecord {
    pub fn new(id: PaymentId, card: CardData, outcome: SettlementOutcome) -> Self {
        Self { id, card, outcome }
    }

    /// The read model handed out on lookup: settlement status plus the masked
    /// card. The full card number never leaves the ledger.
    pub fn masked_view(&self) -> PaymentView {
        PaymentView {
            status: self.outcome.status,
            card: self.card.masked(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentView {
    pub status: SettlementStatus,
    pub card: MaskedCard,
}
