use super::transaction::Transaction;
use super::Decimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Account identifier.
///
/// Numeric-looking strings allocated sequentially by the store. Treated as
/// opaque text everywhere: compared, displayed, never used for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub(super) fn from_counter(counter: u64) -> Self {
        Self(counter.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The fixed set of account products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Savings,
    Current,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Savings => write!(f, "savings"),
            AccountKind::Current => write!(f, "current"),
        }
    }
}

/// Serialize Decimal with exactly 2 decimal places
fn serialize_decimal_2dp<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// A customer account: current balance plus the append-only history of every
/// mutation that produced it.
///
/// Fields are private; the engine mutates balance and active state through
/// `pub(super)` methods, everyone else gets read-only views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    #[serde(rename = "owner")]
    owner_name: String,
    kind: AccountKind,
    #[serde(serialize_with = "serialize_decimal_2dp")]
    balance: Decimal,
    active: bool,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    history: Vec<Transaction>,
}

impl Account {
    pub(super) fn new(id: AccountId, owner_name: String, kind: AccountKind) -> Self {
        Self {
            id,
            owner_name,
            kind,
            balance: Decimal::ZERO,
            active: true,
            created_at: Utc::now(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns whether the account accepts mutating operations.
    /// Deactivated accounts stay in the store but reject all mutations.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The account's history, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Credit the balance. Caller must have validated the amount.
    ///
    /// # Panics (debug only)
    /// Panics if called on an inactive account.
    pub(super) fn credit(&mut self, amount: Decimal) {
        debug_assert!(self.active, "credit called on inactive account");
        self.balance += amount;
    }

    /// Debit the balance. Caller must have checked sufficient funds.
    ///
    /// # Panics (debug only)
    /// Panics if called on an inactive account or if the balance would go
    /// negative.
    pub(super) fn debit(&mut self, amount: Decimal) {
        debug_assert!(self.active, "debit called on inactive account");
        self.balance -= amount;
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "debit drove balance negative: {}",
            self.balance
        );
    }

    pub(super) fn deactivate(&mut self) {
        self.active = false;
    }

    pub(super) fn push_record(&mut self, record: Transaction) {
        self.history.push(record);
    }

    /// Recompute the balance by replaying the history from zero.
    /// The opening deposit is part of the history, so a full replay must
    /// always land on the current balance.
    pub fn replay_balance(&self) -> Decimal {
        self.history
            .iter()
            .fold(Decimal::ZERO, |balance, record| {
                balance + record.signed_amount()
            })
    }
}
