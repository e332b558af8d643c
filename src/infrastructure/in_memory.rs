use crate::domain::payment::{PaymentId, PaymentRecord, PaymentView};
use crate::domain::ports::PaymentLedger;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A thread-safe in-memory payment ledger.
///
/// One coarse lock guards the whole map; every `add`/`get` is a short O(1)
/// critical section, which is all this scale needs. Records live for the
/// lifetime of the process.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    records: Arc<Mutex<HashMap<PaymentId, PaymentRecord>>>,
}

impl InMemoryLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryLedger {
    async fn add(&self, record: PaymentRecord) -> Result<()> {
        let mut records = self.records.lock().await;
        match records.entry(record.id) {
            Entry::Occupied(_) => Err(PaymentError::DuplicatePayment(record.id)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, id: PaymentId) -> Result<Option<PaymentView>> {
        let records = self.records.lock().await;
        Ok(records.get(&id).map(PaymentRecord::masked_view))
    }
}
