//! Application layer orchestrating the payment flow.
//!
//! [`service::PaymentService`] wires the validator's output, the settlement
//! gateway and the ledger together: validate (done by the caller), submit,
//! record, expose.

pub mod service;
