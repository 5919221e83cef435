use common_constants::{RAY, RAY_PRECISION, ZERO_DEBT_FLAG};
use common_errors::{ERROR_DEGEN_RESTRICTION, ERROR_NOT_ACCOUNT_OWNER};
use common_structs::{CreditAccount, TokenSet};

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAccountModule: storage::Storage + common_events::EventsModule {
    /// Hands out an account id to `owner`, reusing a released one when available.
    fn acquire_account_id(&self, owner: &ManagedAddress) -> u64 {
        let mut free_ids = self.free_account_ids();
        let next_free = free_ids.iter().next();
        let account_id = match next_free {
            Some(id) => {
                free_ids.swap_remove(&id);
                id
            },
            None => self.last_account_id().update(|last| {
                *last += 1;
                *last
            }),
        };

        self.accounts_of(owner).insert(account_id);
        account_id
    }

    /// Returns the id to the free pool and drops everything attached to it
    /// outside the checkpoint.
    fn release_account_id(&self, account_id: u64, owner: &ManagedAddress) {
        self.accounts_of(owner).swap_remove(&account_id);
        self.bot_permissions(account_id).clear();
        self.free_account_ids().insert(account_id);
    }

    fn new_credit_account(&self, owner: &ManagedAddress) -> CreditAccount<Self::Api> {
        CreditAccount {
            owner: owner.clone(),
            debt: BigUint::zero(),
            cumulative_index_last_update: ManagedDecimal::from_raw_units(
                BigUint::from(RAY),
                RAY_PRECISION,
            ),
            cumulative_quota_interest: BigUint::zero(),
            enabled_tokens: TokenSet::new(),
            flags: ZERO_DEBT_FLAG,
            since: self.blockchain().get_block_nonce(),
        }
    }

    /// In degen mode every opening burns one unit of the owner's allowance,
    /// and accounts can not be opened on behalf of someone else.
    fn consume_degen_allowance(&self, caller: &ManagedAddress, owner: &ManagedAddress) {
        if !self.degen_mode().get() {
            return;
        }

        require!(caller == owner, ERROR_DEGEN_RESTRICTION);
        let allowance = self.degen_allowance(owner);
        let left = allowance.get();
        require!(left > 0, ERROR_DEGEN_RESTRICTION);
        allowance.set(left - 1);
    }

    fn require_account_owner(&self, account: &CreditAccount<Self::Api>, caller: &ManagedAddress) {
        require!(&account.owner == caller, ERROR_NOT_ACCOUNT_OWNER);
    }
}
