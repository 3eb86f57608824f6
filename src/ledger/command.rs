mod create;
mod deactivate;
mod deposit;
mod transfer;
mod withdraw;

pub use create::Create;
pub use deactivate::Deactivate;
pub use deposit::Deposit;
pub use transfer::Transfer;
pub use withdraw::Withdraw;

use super::account::AccountKind;
use super::error::CommandError;
use super::Decimal;
use serde::Deserialize;

/// Raw command row as parsed from CSV input.
/// This is the unvalidated form that needs conversion to a specific Command type.
#[derive(Debug, Deserialize, Clone)]
pub struct CommandRecord {
    pub op: CommandType,
    /// Account id: the target for deposit/withdraw/deactivate, the source for transfer
    pub account: Option<String>,
    /// Destination account id, only for transfer
    pub to: Option<String>,
    /// Owner name, only for create
    pub owner: Option<String>,
    /// Account kind, only for create
    pub kind: Option<AccountKind>,
    /// Amount: required for deposit/withdraw/transfer, optional opening balance for create
    pub amount: Option<Decimal>,
    /// Free-text description, optional for deposit/withdraw
    pub description: Option<String>,
}

impl std::fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.op)?;
        if let Some(account) = &self.account {
            write!(f, " account={account}")?;
        }
        if let Some(to) = &self.to {
            write!(f, " to={to}")?;
        }
        if let Some(owner) = &self.owner {
            write!(f, " owner={owner}")?;
        }
        if let Some(kind) = self.kind {
            write!(f, " kind={kind}")?;
        }
        if let Some(amount) = self.amount {
            write!(f, " amount={amount}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Create,
    Deposit,
    Withdraw,
    Transfer,
    Deactivate,
}

impl std::fmt::Display for CommandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandType::Create => write!(f, "create"),
            CommandType::Deposit => write!(f, "deposit"),
            CommandType::Withdraw => write!(f, "withdraw"),
            CommandType::Transfer => write!(f, "transfer"),
            CommandType::Deactivate => write!(f, "deactivate"),
        }
    }
}

/// A well-formed command ready for application by the ledger engine.
///
/// Conversion only checks shape (required fields present); ledger rules like
/// positive amounts and sufficient balance are enforced by the engine, so
/// that they surface as soft errors rather than aborting a batch.
#[derive(Debug, Clone)]
pub enum Command {
    Create(Create),
    Deposit(Deposit),
    Withdraw(Withdraw),
    Transfer(Transfer),
    Deactivate(Deactivate),
}

impl TryFrom<CommandRecord> for Command {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record.op {
            CommandType::Create => Ok(Command::Create(Create::try_from(record)?)),
            CommandType::Deposit => Ok(Command::Deposit(Deposit::try_from(record)?)),
            CommandType::Withdraw => Ok(Command::Withdraw(Withdraw::try_from(record)?)),
            CommandType::Transfer => Ok(Command::Transfer(Transfer::try_from(record)?)),
            CommandType::Deactivate => Ok(Command::Deactivate(Deactivate::try_from(record)?)),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Create(c) => {
                write!(
                    f,
                    "[create] owner={} kind={} opening={}",
                    c.owner_name(),
                    c.kind(),
                    c.opening_balance()
                )
            }
            Command::Deposit(d) => {
                write!(f, "[deposit] account={} amount={}", d.account_id(), d.amount())
            }
            Command::Withdraw(w) => {
                write!(
                    f,
                    "[withdraw] account={} amount={}",
                    w.account_id(),
                    w.amount()
                )
            }
            Command::Transfer(t) => {
                write!(
                    f,
                    "[transfer] from={} to={} amount={}",
                    t.from(),
                    t.to(),
                    t.amount()
                )
            }
            Command::Deactivate(d) => {
                write!(f, "[deactivate] account={}", d.account_id())
            }
        }
    }
}
