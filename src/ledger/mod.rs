//! Ledger module.
//!
//! This module contains the core ledger logic including:
//! - `LedgerEngine` - The only mutation surface over accounts
//! - `AccountStore` - Canonical account storage and id allocation
//! - `TransactionRecorder` - Global transaction ids and history appends
//! - `directory` - Read-only listing and search projections
//! - `Command` types - Create, Deposit, Withdraw, Transfer, Deactivate
//! - `Error` types - Ledger rule and command validation errors

mod account;
mod command;
mod directory;
mod error;
mod ledger_engine;
mod recorder;
mod store;
mod transaction;

pub(crate) use rust_decimal::Decimal;

pub use account::{Account, AccountId, AccountKind};
pub use command::CommandRecord;
pub use directory::SearchFilter;
pub use error::{CommandError, Error, LedgerError};
pub use ledger_engine::{LedgerEngine, TransferReceipt};
pub use transaction::{Transaction, TransactionId, TransactionKind};
