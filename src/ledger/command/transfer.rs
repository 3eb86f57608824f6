use crate::ledger::{
    account::AccountId,
    command::{CommandRecord, CommandType},
    error::CommandError,
    Decimal,
};

/// A well-formed transfer command.
///
/// Moves money between two accounts. Both legs are validated by the engine
/// before either balance changes.
#[derive(Debug, Clone)]
pub struct Transfer {
    from: AccountId,
    to: AccountId,
    amount: Decimal,
}

impl Transfer {
    pub fn from(&self) -> &AccountId {
        &self.from
    }

    pub fn to(&self) -> &AccountId {
        &self.to
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl TryFrom<CommandRecord> for Transfer {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record {
            CommandRecord {
                op: CommandType::Transfer,
                account: Some(from),
                to: Some(to),
                amount: Some(amount),
                ..
            } => Ok(Transfer {
                from: AccountId::from(from),
                to: AccountId::from(to),
                amount,
            }),
            _ => Err(CommandError::InvalidCommand(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_record(
        from: Option<&str>,
        to: Option<&str>,
        amount: Option<Decimal>,
    ) -> CommandRecord {
        CommandRecord {
            op: CommandType::Transfer,
            account: from.map(str::to_owned),
            to: to.map(str::to_owned),
            owner: None,
            kind: None,
            amount,
            description: None,
        }
    }

    #[test]
    fn test_valid_transfer() {
        let record = make_record(Some("1"), Some("2"), Some(dec!(300)));
        let transfer = Transfer::try_from(record).unwrap();

        assert_eq!(transfer.from().as_str(), "1");
        assert_eq!(transfer.to().as_str(), "2");
        assert_eq!(transfer.amount(), dec!(300));
    }

    #[test]
    fn test_rejects_missing_source() {
        let record = make_record(None, Some("2"), Some(dec!(300)));
        assert!(Transfer::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_missing_destination() {
        let record = make_record(Some("1"), None, Some(dec!(300)));
        assert!(Transfer::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_missing_amount() {
        let record = make_record(Some("1"), Some("2"), None);
        assert!(Transfer::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_wrong_command_type() {
        let mut record = make_record(Some("1"), Some("2"), Some(dec!(300)));
        record.op = CommandType::Deactivate;
        assert!(Transfer::try_from(record).is_err());
    }
}
