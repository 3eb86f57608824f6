use std::collections::HashMap;

use super::account::{Account, AccountId, AccountKind};
use super::error::LedgerError;
use super::Decimal;

/// Canonical storage for all accounts, keyed by id.
///
/// Owns the account-id counter. Accounts are never removed; deactivation
/// flips the `active` flag and keeps the history intact.
#[derive(Debug)]
pub struct AccountStore {
    accounts: HashMap<AccountId, Account>,
    next_id: u64,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            next_id: 1,
        }
    }
}

impl AccountStore {
    /// Validate inputs, allocate the next id and store a fresh account with
    /// zero balance. The engine credits the opening balance afterwards so it
    /// shows up in the history like any other deposit.
    pub(super) fn create(
        &mut self,
        owner_name: &str,
        kind: AccountKind,
        opening_balance: Decimal,
    ) -> Result<AccountId, LedgerError> {
        let owner_name = owner_name.trim();
        if owner_name.is_empty() {
            return Err(LedgerError::EmptyOwnerName);
        }
        if opening_balance < Decimal::ZERO {
            return Err(LedgerError::NegativeOpeningBalance {
                amount: opening_balance,
            });
        }

        let id = AccountId::from_counter(self.next_id);
        self.next_id += 1;
        self.accounts
            .insert(id.clone(), Account::new(id.clone(), owner_name.to_owned(), kind));

        log::debug!("[store] created account {id} for {owner_name}");
        Ok(id)
    }

    pub fn get(&self, id: &AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(id)
            .ok_or_else(|| LedgerError::AccountNotFound { id: id.clone() })
    }

    pub(super) fn get_mut(&mut self, id: &AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound { id: id.clone() })
    }

    /// Soft-delete: mark the account inactive. Idempotent, a second call is
    /// a no-op returning the already-inactive account.
    pub(super) fn deactivate(&mut self, id: &AccountId) -> Result<&Account, LedgerError> {
        let account = self.get_mut(id)?;
        if account.is_active() {
            account.deactivate();
        } else {
            log::debug!("[store] account {id} already inactive");
        }
        Ok(&*account)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
