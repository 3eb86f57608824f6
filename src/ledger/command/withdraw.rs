use crate::ledger::{
    account::AccountId,
    command::{CommandRecord, CommandType},
    error::CommandError,
    Decimal,
};

/// A well-formed withdrawal command.
///
/// Debits the target account. Fails at apply time if the account lacks
/// sufficient balance.
#[derive(Debug, Clone)]
pub struct Withdraw {
    account_id: AccountId,
    amount: Decimal,
    description: Option<String>,
}

impl Withdraw {
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl TryFrom<CommandRecord> for Withdraw {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record {
            CommandRecord {
                op: CommandType::Withdraw,
                account: Some(account),
                amount: Some(amount),
                description,
                ..
            } => Ok(Withdraw {
                account_id: AccountId::from(account),
                amount,
                description,
            }),
            _ => Err(CommandError::InvalidCommand(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_record(account: Option<&str>, amount: Option<Decimal>) -> CommandRecord {
        CommandRecord {
            op: CommandType::Withdraw,
            account: account.map(str::to_owned),
            to: None,
            owner: None,
            kind: None,
            amount,
            description: None,
        }
    }

    #[test]
    fn test_valid_withdraw() {
        let record = make_record(Some("2"), Some(dec!(50.25)));
        let withdraw = Withdraw::try_from(record).unwrap();

        assert_eq!(withdraw.account_id().as_str(), "2");
        assert_eq!(withdraw.amount(), dec!(50.25));
    }

    #[test]
    fn test_rejects_missing_account() {
        let record = make_record(None, Some(dec!(50)));
        assert!(Withdraw::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_missing_amount() {
        let record = make_record(Some("2"), None);
        assert!(Withdraw::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_wrong_command_type() {
        let mut record = make_record(Some("2"), Some(dec!(50)));
        record.op = CommandType::Deposit;
        assert!(Withdraw::try_from(record).is_err());
    }
}
