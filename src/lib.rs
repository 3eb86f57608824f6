//! An in-memory bank ledger.
//!
//! Accounts are created once and soft-deleted, balances never go negative,
//! and every balance change is committed together with an immutable history
//! record carrying a globally monotonic transaction id.

mod ledger;

pub use ledger::{
    Account, AccountId, AccountKind, CommandError, CommandRecord, Error, LedgerEngine,
    LedgerError, SearchFilter, Transaction, TransactionId, TransactionKind, TransferReceipt,
};
