use crate::ledger::account::AccountId;
use crate::ledger::command::CommandRecord;
use crate::ledger::Decimal;

/// Top-level error type for the ledger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors during `CommandRecord` -> `Command` conversion (hard errors).
/// A malformed row aborts batch processing.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(CommandRecord),
}

/// Soft errors raised by ledger rules during command application.
/// These don't stop batch processing, we log and continue.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Owner name must not be empty")]
    EmptyOwnerName,

    #[error("Opening balance cannot be negative: {amount}")]
    NegativeOpeningBalance { amount: Decimal },

    #[error("Account {id} not found")]
    AccountNotFound { id: AccountId },

    #[error("Account {id} is inactive")]
    AccountInactive { id: AccountId },

    #[error("Amount must be positive with at most 2 decimal places: {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("Insufficient balance: account {id} has {balance}, requested {requested}")]
    InsufficientBalance {
        id: AccountId,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Cannot transfer from account {id} to itself")]
    SameAccount { id: AccountId },

    #[error("No matching accounts")]
    NoMatch,
}
