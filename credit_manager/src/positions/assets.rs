use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_OPERATION_NOT_PERMITTED, ERROR_TOKEN_NOT_ALLOWED,
};

use crate::{cache::Cache, oracle, storage};

multiversx_sc::imports!();

/// Token ledger of a credit account: collateral in and out, and the enabled set.
#[multiversx_sc::module]
pub trait PositionAssetsModule:
    storage::Storage
    + oracle::OracleModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    fn add_collateral(
        &self,
        cache: &mut Cache<Self>,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        self.require_collateral_token(cache, token);

        cache.add_balance(token, amount);
        self.enable_token(cache, token);

        self.add_collateral_event(cache.account_id, token, amount);
    }

    /// Moves tokens out of the account. The transfer leaves on commit.
    fn withdraw_collateral(
        &self,
        cache: &mut Cache<Self>,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
    ) {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        cache.sub_balance(token, amount);
        cache.queue_transfer(to, token, amount);

        self.withdraw_collateral_event(cache.account_id, token, amount, to);
    }

    /// Credits tokens received by the account from an adapter.
    /// Only collateral tokens join the enabled set.
    fn credit_received(
        &self,
        cache: &mut Cache<Self>,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if amount == &BigUint::zero() {
            return;
        }

        cache.add_balance(token, amount);
        if self.is_collateral_token(cache, token) {
            self.enable_token(cache, token);
        }
    }

    fn enable_token(&self, cache: &mut Cache<Self>, token: &EgldOrEsdtTokenIdentifier) {
        // The underlying is always counted
        if token == &cache.underlying {
            return;
        }

        self.require_collateral_token(cache, token);
        if cache.account.enabled_tokens.insert(token) {
            self.enable_token_event(cache.account_id, token);
        }
    }

    /// Quoted tokens stay enabled until their quota is removed.
    fn disable_token(&self, cache: &mut Cache<Self>, token: &EgldOrEsdtTokenIdentifier) {
        let quoted = cache
            .get_account_quota(token)
            .map(|pair| pair.quota > 0u64)
            .unwrap_or(false);
        require!(!quoted, ERROR_OPERATION_NOT_PERMITTED);

        if cache.account.enabled_tokens.remove(token) {
            self.disable_token_event(cache.account_id, token);
        }
    }

    fn is_collateral_token(&self, cache: &Cache<Self>, token: &EgldOrEsdtTokenIdentifier) -> bool {
        token == &cache.underlying || self.collateral_tokens().contains_key(token)
    }

    fn require_collateral_token(&self, cache: &Cache<Self>, token: &EgldOrEsdtTokenIdentifier) {
        require!(self.is_collateral_token(cache, token), ERROR_TOKEN_NOT_ALLOWED);
    }
}
