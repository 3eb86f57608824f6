use std::io::{Read, Write};

use super::account::{Account, AccountId, AccountKind};
use super::command::{Command, CommandRecord};
use super::directory::{self, SearchFilter};
use super::error::{Error, LedgerError};
use super::recorder::TransactionRecorder;
use super::store::AccountStore;
use super::transaction::{Transaction, TransactionKind};
use super::Decimal;

/// Mutating operations work in whole minor units, so at most two fractional
/// digits.
const MAX_AMOUNT_SCALE: u32 = 2;

/// Both history records of a committed two-leg transfer.
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    /// The debit record appended to the source account.
    pub outgoing: Transaction,
    /// The credit record appended to the destination account.
    pub incoming: Transaction,
}

/// The core ledger engine.
///
/// The only mutation surface over accounts: opening, deactivation, deposits,
/// withdrawals and transfers. Every operation validates fully before touching
/// any balance, and a balance change always commits together with its history
/// record. Exclusive access is enforced through `&mut self`, so a threaded
/// host shares the engine behind a single lock and readers can never observe
/// a half-committed transfer.
#[derive(Debug, Default)]
pub struct LedgerEngine {
    /// Canonical account storage and account-id allocation
    store: AccountStore,
    /// Global transaction-id allocation and history appends
    recorder: TransactionRecorder,
}

impl LedgerEngine {
    /// Create a new `LedgerEngine` with no accounts.
    pub fn new() -> Self {
        log::trace!("LedgerEngine initialized");
        Self::default()
    }

    /// Open a new account and return its id.
    ///
    /// A positive opening balance is committed as a regular deposit, so the
    /// opening amount is traceable through the history instead of being an
    /// implicit starting value.
    pub fn open_account(
        &mut self,
        owner_name: &str,
        kind: AccountKind,
        opening_balance: Decimal,
    ) -> Result<AccountId, LedgerError> {
        // Validate the opening amount before the store allocates anything,
        // so a rejected open leaves no account behind.
        if opening_balance > Decimal::ZERO {
            validate_amount(opening_balance)?;
        }

        let id = self.store.create(owner_name, kind, opening_balance)?;

        if opening_balance > Decimal::ZERO {
            let account = self.store.get_mut(&id)?;
            account.credit(opening_balance);
            self.recorder.append(
                account,
                TransactionKind::Deposit,
                opening_balance,
                "Opening deposit",
            );
        }

        log::debug!("[open] account={id} owner={owner_name} kind={kind} opening={opening_balance}");
        Ok(id)
    }

    /// Soft-delete an account. Idempotent; the account keeps its history and
    /// stays visible to searches that include inactive accounts.
    pub fn deactivate_account(&mut self, id: &AccountId) -> Result<(), LedgerError> {
        let account = self.store.deactivate(id)?;
        log::debug!(
            "[deactivate] account={} owner={}",
            account.id(),
            account.owner_name()
        );
        Ok(())
    }

    /// Read-only view of one account.
    pub fn account(&self, id: &AccountId) -> Result<&Account, LedgerError> {
        self.store.get(id)
    }

    /// Returns the number of accounts in the ledger, inactive ones included.
    pub fn account_count(&self) -> usize {
        self.store.len()
    }

    /// All accounts, or just the requested one wrapped in a sequence.
    pub fn list(&self, id: Option<&AccountId>) -> Result<Vec<&Account>, LedgerError> {
        directory::list(&self.store, id)
    }

    /// Filtered account search; see [`SearchFilter`].
    pub fn search(&self, filter: &SearchFilter) -> Result<Vec<&Account>, LedgerError> {
        directory::search(&self.store, filter)
    }
}

// =============================================================================
// Money movement
// =============================================================================

impl LedgerEngine {
    /// Credit an account and append a deposit record.
    pub fn deposit(
        &mut self,
        id: &AccountId,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        let account = self.store.get_mut(id)?;
        ensure_active(account)?;
        validate_amount(amount)?;

        account.credit(amount);
        let record = self.recorder.append(
            account,
            TransactionKind::Deposit,
            amount,
            description.unwrap_or("Deposit"),
        );

        log::trace!(
            "[deposit] account={id} amount={amount} -> balance={}",
            record.balance_after()
        );
        Ok(record)
    }

    /// Debit an account and append a withdrawal record.
    /// Requires sufficient balance; balances never go negative.
    pub fn withdraw(
        &mut self,
        id: &AccountId,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        let account = self.store.get_mut(id)?;
        ensure_active(account)?;
        validate_amount(amount)?;
        if account.balance() < amount {
            return Err(LedgerError::InsufficientBalance {
                id: id.clone(),
                balance: account.balance(),
                requested: amount,
            });
        }

        account.debit(amount);
        let record = self.recorder.append(
            account,
            TransactionKind::Withdraw,
            amount,
            description.unwrap_or("Withdrawal"),
        );

        log::trace!(
            "[withdraw] account={id} amount={amount} -> balance={}",
            record.balance_after()
        );
        Ok(record)
    }

    /// Move money between two accounts.
    ///
    /// Both legs are validated in full before either balance changes: money
    /// must never leave the source without a committed matching credit. Only
    /// then does the source leg commit (debit + transfer-out record) followed
    /// by the destination leg (credit + transfer-in record). Either both legs
    /// commit or neither does.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
    ) -> Result<TransferReceipt, LedgerError> {
        if from == to {
            return Err(LedgerError::SameAccount { id: from.clone() });
        }

        // Source leg checks.
        let source = self.store.get(from)?;
        ensure_active(source)?;
        validate_amount(amount)?;
        if source.balance() < amount {
            return Err(LedgerError::InsufficientBalance {
                id: from.clone(),
                balance: source.balance(),
                requested: amount,
            });
        }

        // Destination leg checks, still before any mutation.
        let destination = self.store.get(to)?;
        ensure_active(destination)?;

        // Commit the source leg.
        let source = self.store.get_mut(from)?;
        source.debit(amount);
        let outgoing = self.recorder.append(
            source,
            TransactionKind::TransferOut,
            amount,
            &format!("Transfer to {to}"),
        );

        // Commit the destination leg.
        let destination = self.store.get_mut(to)?;
        destination.credit(amount);
        let incoming = self.recorder.append(
            destination,
            TransactionKind::TransferIn,
            amount,
            &format!("Transfer from {from}"),
        );

        log::trace!("[transfer] {from} -> {to} amount={amount}");
        Ok(TransferReceipt { outgoing, incoming })
    }
}

// =============================================================================
// Batch command processing
// =============================================================================

impl LedgerEngine {
    /// Primary batch API: process ledger commands from any source (File,
    /// `TcpStream`, etc.)
    /// Note that the CSV reader is buffered automatically, so you should not
    /// wrap rdr in a buffered reader like `io::BufReader`.
    pub fn process_commands<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        log::info!("Starting command processing");

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All) // trim whitespace from fields
            .from_reader(reader);

        let mut processed = 0u64;
        let mut skipped = 0u64;

        for result in csv_reader.deserialize() {
            // Step 1: Parse CSV record into a raw dirty CommandRecord
            let record: CommandRecord = result?;

            let row_num = processed + skipped + 1;
            log::trace!("[row {row_num}] Parsing: {record}");

            // Step 2: Convert the raw CommandRecord into a validated Command
            let command = Command::try_from(record)?;

            // Step 3: Apply the validated Command
            if let Err(e) = self.apply_command(command) {
                log::warn!("[row {row_num}] - Skipped: {e}");
                skipped += 1;
            } else {
                processed += 1;
            }
        }

        log::info!(
            "Processing complete: {} processed, {} skipped, {} accounts",
            processed,
            skipped,
            self.store.len()
        );
        Ok(())
    }

    /// Secondary API: Write final account state to any sink (Stdout, File,
    /// `TcpStream`, etc.)
    /// Note that the CSV writer is buffered automatically, so you should not
    /// wrap wtr in a buffered writer like `io::BufWriter`.
    pub fn export_accounts<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} accounts", self.store.len());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for account in self.store.accounts() {
            csv_writer.serialize(account)?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    fn apply_command(&mut self, command: Command) -> Result<(), LedgerError> {
        log::trace!("Applying command: {command}");
        match command {
            Command::Create(create) => {
                self.open_account(create.owner_name(), create.kind(), create.opening_balance())
                    .map(|_| ())
            }
            Command::Deposit(deposit) => self
                .deposit(deposit.account_id(), deposit.amount(), deposit.description())
                .map(|_| ()),
            Command::Withdraw(withdraw) => self
                .withdraw(
                    withdraw.account_id(),
                    withdraw.amount(),
                    withdraw.description(),
                )
                .map(|_| ()),
            Command::Transfer(transfer) => self
                .transfer(transfer.from(), transfer.to(), transfer.amount())
                .map(|_| ()),
            Command::Deactivate(deactivate) => self.deactivate_account(deactivate.account_id()),
        }
    }
}

/// The account must accept mutations.
fn ensure_active(account: &Account) -> Result<(), LedgerError> {
    if !account.is_active() {
        return Err(LedgerError::AccountInactive {
            id: account.id().clone(),
        });
    }
    Ok(())
}

/// Amounts must be strictly positive and representable in minor units.
fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO || amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(LedgerError::InvalidAmount { amount });
    }
    Ok(())
}
