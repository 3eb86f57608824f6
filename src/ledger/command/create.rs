use crate::ledger::{
    account::AccountKind,
    command::{CommandRecord, CommandType},
    error::CommandError,
    Decimal,
};

/// A well-formed account-creation command.
///
/// Opens a new account for the named owner. A missing amount means a zero
/// opening balance; the engine rejects negative ones.
#[derive(Debug, Clone)]
pub struct Create {
    owner_name: String,
    kind: AccountKind,
    opening_balance: Decimal,
}

impl Create {
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }
}

impl TryFrom<CommandRecord> for Create {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record {
            CommandRecord {
                op: CommandType::Create,
                owner: Some(owner),
                kind: Some(kind),
                amount,
                account: None,
                to: None,
                ..
            } => Ok(Create {
                owner_name: owner,
                kind,
                opening_balance: amount.unwrap_or(Decimal::ZERO),
            }),
            _ => Err(CommandError::InvalidCommand(record)),
        }
    }
}
