use super::Decimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Globally unique transaction identifier.
///
/// Allocated from a single ledger-wide counter and formatted fixed-width
/// (`TXN000042`) so that lexical order matches allocation order. The text is
/// never parsed back into a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub(super) fn from_counter(counter: u64) -> Self {
        Self(format!("TXN{counter:06}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The effect a history record had on its account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    TransferOut,
    TransferIn,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "deposit"),
            TransactionKind::Withdraw => write!(f, "withdraw"),
            TransactionKind::TransferOut => write!(f, "transfer-out"),
            TransactionKind::TransferIn => write!(f, "transfer-in"),
        }
    }
}

/// An immutable entry in an account's history.
///
/// `balance_after` snapshots the account balance at commit time, so the
/// history can be audited without recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    amount: Decimal,
    description: String,
    timestamp: DateTime<Utc>,
    balance_after: Decimal,
}

impl Transaction {
    pub(super) fn new(
        id: TransactionId,
        kind: TransactionKind,
        amount: Decimal,
        description: String,
        timestamp: DateTime<Utc>,
        balance_after: Decimal,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            description,
            timestamp,
            balance_after,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }

    /// The amount with the sign it applied to the balance: positive for
    /// credits (deposit, transfer-in), negative for debits.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit | TransactionKind::TransferIn => self.amount,
            TransactionKind::Withdraw | TransactionKind::TransferOut => -self.amount,
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} amount={} balance_after={}",
            self.kind, self.id, self.amount, self.balance_after
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_id_is_fixed_width_and_lexically_ordered() {
        let a = TransactionId::from_counter(1);
        let b = TransactionId::from_counter(999);
        let c = TransactionId::from_counter(1000);

        assert_eq!(a.as_str(), "TXN000001");
        assert_eq!(b.as_str(), "TXN000999");
        assert!(a < b);
        assert!(b < c);
        assert!(b.as_str() < c.as_str()); // lexical order matches allocation
    }

    #[test]
    fn test_signed_amount_by_kind() {
        let record = |kind| {
            Transaction::new(
                TransactionId::from_counter(1),
                kind,
                dec!(25),
                "test".to_owned(),
                chrono::Utc::now(),
                dec!(100),
            )
        };

        assert_eq!(record(TransactionKind::Deposit).signed_amount(), dec!(25));
        assert_eq!(record(TransactionKind::TransferIn).signed_amount(), dec!(25));
        assert_eq!(record(TransactionKind::Withdraw).signed_amount(), dec!(-25));
        assert_eq!(
            record(TransactionKind::TransferOut).signed_amount(),
            dec!(-25)
        );
    }
}
