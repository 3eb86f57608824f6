use super::account::Account;
use super::transaction::{Transaction, TransactionId, TransactionKind};
use super::Decimal;
use chrono::Utc;

/// Allocates globally unique transaction ids and appends records to account
/// histories.
///
/// The counter only advances inside [`append`](Self::append), so an operation
/// rejected upstream in the engine never consumes an id: the sequence is
/// strictly increasing with no reuse.
#[derive(Debug)]
pub struct TransactionRecorder {
    next_id: u64,
}

impl Default for TransactionRecorder {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl TransactionRecorder {
    fn next_id(&mut self) -> TransactionId {
        let id = TransactionId::from_counter(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a record for a mutation the engine has already applied to the
    /// account's balance. `balance_after` snapshots that updated balance.
    ///
    /// Cannot fail: all validation happens upstream in the engine.
    pub(super) fn append(
        &mut self,
        account: &mut Account,
        kind: TransactionKind,
        amount: Decimal,
        description: &str,
    ) -> Transaction {
        let record = Transaction::new(
            self.next_id(),
            kind,
            amount,
            description.to_owned(),
            Utc::now(),
            account.balance(),
        );
        account.push_record(record.clone());

        log::trace!("[record] account={} {record}", account.id());
        debug_assert_eq!(
            account.replay_balance(),
            account.balance(),
            "history replay diverged from running balance"
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::account::{AccountId, AccountKind};
    use rust_decimal_macros::dec;

    fn make_account() -> Account {
        Account::new(
            AccountId::from_counter(1),
            "John Doe".to_owned(),
            AccountKind::Current,
        )
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut recorder = TransactionRecorder::default();
        let mut account = make_account();

        account.credit(dec!(10));
        let first = recorder.append(&mut account, TransactionKind::Deposit, dec!(10), "Deposit");
        account.credit(dec!(20));
        let second = recorder.append(&mut account, TransactionKind::Deposit, dec!(20), "Deposit");

        assert_eq!(first.id().as_str(), "TXN000001");
        assert_eq!(second.id().as_str(), "TXN000002");
        assert!(first.id() < second.id());
    }

    #[test]
    fn test_append_snapshots_updated_balance() {
        let mut recorder = TransactionRecorder::default();
        let mut account = make_account();

        account.credit(dec!(100));
        let record = recorder.append(&mut account, TransactionKind::Deposit, dec!(100), "Deposit");

        assert_eq!(record.balance_after(), dec!(100));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].id(), record.id());
    }

    #[test]
    fn test_counter_is_shared_across_accounts() {
        let mut recorder = TransactionRecorder::default();
        let mut first = make_account();
        let mut second = Account::new(
            AccountId::from_counter(2),
            "Jane Roe".to_owned(),
            AccountKind::Savings,
        );

        first.credit(dec!(5));
        let a = recorder.append(&mut first, TransactionKind::Deposit, dec!(5), "Deposit");
        second.credit(dec!(5));
        let b = recorder.append(&mut second, TransactionKind::Deposit, dec!(5), "Deposit");

        // Global sequence, not per-account.
        assert_eq!(a.id().as_str(), "TXN000001");
        assert_eq!(b.id().as_str(), "TXN000002");
    }
}
