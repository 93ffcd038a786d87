//! Bank-account lifecycle and movement-processing core.
//!
//! The lifecycle manager and transaction processor implement the business
//! rules; the account store, customer directory, and ledger service are
//! consumed through traits, with in-memory implementations for the batch
//! driver and tests.

pub mod catalog;
pub mod clients;
pub mod engine;
pub mod lifecycle;
pub mod models;
pub mod processor;
pub mod storage;
pub mod types;
