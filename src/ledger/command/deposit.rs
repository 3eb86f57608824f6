use crate::ledger::{
    account::AccountId,
    command::{CommandRecord, CommandType},
    error::CommandError,
    Decimal,
};

/// A well-formed deposit command.
///
/// Credits the target account. Amount and balance rules are enforced by the
/// engine when the command is applied.
#[derive(Debug, Clone)]
pub struct Deposit {
    account_id: AccountId,
    amount: Decimal,
    description: Option<String>,
}

impl Deposit {
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

impl TryFrom<CommandRecord> for Deposit {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record {
            CommandRecord {
                op: CommandType::Deposit,
                account: Some(account),
                amount: Some(amount),
                description,
                ..
            } => Ok(Deposit {
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
            op: CommandType::Deposit,
            account: account.map(str::to_owned),
            to: None,
            owner: None,
            kind: None,
            amount,
            description: None,
        }
    }

    #[test]
    fn test_valid_deposit() {
        let record = make_record(Some("1"), Some(dec!(100.50)));
        let deposit = Deposit::try_from(record).unwrap();

        assert_eq!(deposit.account_id().as_str(), "1");
        assert_eq!(deposit.amount(), dec!(100.50));
        assert_eq!(deposit.description(), None);
    }

    #[test]
    fn test_keeps_caller_description() {
        let mut record = make_record(Some("1"), Some(dec!(100)));
        record.description = Some("Salary".to_owned());
        let deposit = Deposit::try_from(record).unwrap();
        assert_eq!(deposit.description(), Some("Salary"));
    }

    #[test]
    fn test_rejects_missing_account() {
        let record = make_record(None, Some(dec!(100)));
        assert!(Deposit::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_missing_amount() {
        let record = make_record(Some("1"), None);
        assert!(Deposit::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_wrong_command_type() {
        let mut record = make_record(Some("1"), Some(dec!(100)));
        record.op = CommandType::Withdraw;
        assert!(Deposit::try_from(record).is_err());
    }
}
