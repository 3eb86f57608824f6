use crate::ledger::{
    account::AccountId,
    command::{CommandRecord, CommandType},
    error::CommandError,
};

/// A well-formed deactivation command (soft delete).
///
/// The account stays in the store with its history but rejects further
/// mutations.
#[derive(Debug, Clone)]
pub struct Deactivate {
    account_id: AccountId,
}

impl Deactivate {
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }
}

impl TryFrom<CommandRecord> for Deactivate {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record {
            CommandRecord {
                op: CommandType::Deactivate,
                account: Some(account),
                amount: None,
                ..
            } => Ok(Deactivate {
                account_id: AccountId::from(account),
            }),
            _ => Err(CommandError::InvalidCommand(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_record(account: Option<&str>) -> CommandRecord {
        CommandRecord {
            op: CommandType::Deactivate,
            account: account.map(str::to_owned),
            to: None,
            owner: None,
            kind: None,
            amount: None,
            description: None,
        }
    }

    #[test]
    fn test_valid_deactivate() {
        let record = make_record(Some("3"));
        let deactivate = Deactivate::try_from(record).unwrap();
        assert_eq!(deactivate.account_id().as_str(), "3");
    }

    #[test]
    fn test_rejects_missing_account() {
        let record = make_record(None);
        assert!(Deactivate::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_stray_amount() {
        let mut record = make_record(Some("3"));
        record.amount = Some(dec!(10));
        assert!(Deactivate::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_wrong_command_type() {
        let mut record = make_record(Some("3"));
        record.op = CommandType::Create;
        assert!(Deactivate::try_from(record).is_err());
    }
}
