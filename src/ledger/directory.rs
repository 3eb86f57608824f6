//! Read-only projections over the account store.
//!
//! Nothing in here mutates state; callers get borrowed views of accounts.

use super::account::{Account, AccountId};
use super::error::LedgerError;
use super::store::AccountStore;

/// Search criteria for the account directory.
///
/// All fields are optional filters; the default matches every active
/// account. Inactive (soft-deleted) accounts only show up when
/// `include_inactive` is set.
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    /// Exact account id to match.
    pub account_id: Option<AccountId>,
    /// Case-insensitive substring of the owner name.
    pub owner_name: Option<String>,
    pub include_inactive: bool,
}

/// All accounts, or just the requested one wrapped in a sequence.
pub(super) fn list<'a>(
    store: &'a AccountStore,
    id: Option<&AccountId>,
) -> Result<Vec<&'a Account>, LedgerError> {
    match id {
        Some(id) => Ok(vec![store.get(id)?]),
        None => Ok(store.accounts().collect()),
    }
}

/// Filtered account lookup. An empty result is the informational `NoMatch`
/// signal rather than a hard failure.
pub(super) fn search<'a>(
    store: &'a AccountStore,
    filter: &SearchFilter,
) -> Result<Vec<&'a Account>, LedgerError> {
    let needle = filter.owner_name.as_deref().map(str::to_lowercase);

    let matches: Vec<&Account> = store
        .accounts()
        .filter(|account| {
            filter
                .account_id
                .as_ref()
                .map_or(true, |id| account.id() == id)
        })
        .filter(|account| {
            needle
                .as_deref()
                .map_or(true, |needle| account.owner_name().to_lowercase().contains(needle))
        })
        .filter(|account| filter.include_inactive || account.is_active())
        .collect();

    if matches.is_empty() {
        return Err(LedgerError::NoMatch);
    }
    Ok(matches)
}
