multiversx_sc::imports!();

use common_errors::{ERROR_QUOTA_OUT_OF_BOUNDS, ERROR_TOKEN_NOT_QUOTABLE};
use common_structs::{AccountQuota, QuotaUpdate, TokenQuotaParams};

use crate::{cache::Cache, oracle, storage};

/// Per-token interest on top of the base rate.
///
/// A token quota index grows additively with the token rate. Each account
/// quota keeps the index it last accrued at; the difference times the quota is
/// folded into `cumulative_quota_interest` of the account whenever the quota
/// changes, and on every repayment or closure.
#[multiversx_sc::module]
pub trait QuotaModule:
    storage::Storage
    + oracle::OracleModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    fn token_quota_index(
        &self,
        params: &TokenQuotaParams<Self::Api>,
        timestamp: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.grow_quota_index(
            &params.cumulative_index_lu,
            params.rate_bps,
            timestamp.saturating_sub(params.last_update),
        )
    }

    /// Moves the token index to `timestamp` so a rate change only applies from now on.
    fn crystallize_quota_index(&self, params: &mut TokenQuotaParams<Self::Api>, timestamp: u64) {
        params.cumulative_index_lu = self.token_quota_index(params, timestamp);
        params.last_update = timestamp;
    }

    /// Quota interest accrued since the last snapshot of every quoted token,
    /// without touching the checkpoint.
    fn pending_quota_interest(&self, cache: &mut Cache<Self>) -> BigUint {
        let mut pending = BigUint::zero();
        for token in cache.quoted_tokens().iter() {
            let params = cache
                .get_quota_params(&token)
                .unwrap_or_else(|| sc_panic!(ERROR_TOKEN_NOT_QUOTABLE));
            if let Some(quota) = cache.get_account_quota(&token) {
                let index_now = self.token_quota_index(&params, cache.timestamp);
                pending += self.accrued_quota_interest(
                    &quota.quota,
                    &index_now,
                    &quota.cumulative_index_lu,
                );
            }
        }
        pending
    }

    /// Folds the pending interest of one pair into the account and moves the
    /// pair snapshot to now.
    fn accrue_quota(
        &self,
        cache: &mut Cache<Self>,
        token: &EgldOrEsdtTokenIdentifier,
        params: &TokenQuotaParams<Self::Api>,
    ) -> AccountQuota<Self::Api> {
        let index_now = self.token_quota_index(params, cache.timestamp);
        let mut pair = cache.get_account_quota(token).unwrap_or_else(|| AccountQuota {
            quota: BigUint::zero(),
            cumulative_index_lu: index_now.clone(),
        });

        let interest =
            self.accrued_quota_interest(&pair.quota, &index_now, &pair.cumulative_index_lu);
        cache.account.cumulative_quota_interest += &interest;
        pair.cumulative_index_lu = index_now;

        pair
    }

    fn accrue_all_quotas(&self, cache: &mut Cache<Self>) {
        for token in cache.quoted_tokens().iter() {
            let params = cache
                .get_quota_params(&token)
                .unwrap_or_else(|| sc_panic!(ERROR_TOKEN_NOT_QUOTABLE));
            let pair = self.accrue_quota(cache, &token, &params);
            cache.set_account_quota(&token, &pair);
        }
    }

    /// Applies a signed quota change to one account.
    ///
    /// Increases are granted up to the room left under the token limit and
    /// report the rest as `unmet`. Any decrease at or beyond the current quota
    /// removes it entirely.
    fn update_quota(
        &self,
        cache: &mut Cache<Self>,
        token: &EgldOrEsdtTokenIdentifier,
        change: &BigInt,
        min_quota: &BigUint,
    ) -> QuotaUpdate<Self::Api> {
        let mut params = cache
            .get_quota_params(token)
            .unwrap_or_else(|| sc_panic!(ERROR_TOKEN_NOT_QUOTABLE));
        let mut pair = self.accrue_quota(cache, token, &params);
        let old_quota = pair.quota.clone();

        let (realized_change, unmet) = match change.sign() {
            Sign::Plus => {
                require!(!cache.account.has_zero_debt(), ERROR_QUOTA_OUT_OF_BOUNDS);

                let requested = change.magnitude();
                let room = if params.limit > params.total_quoted {
                    &params.limit - &params.total_quoted
                } else {
                    BigUint::zero()
                };
                let granted = self.get_min(requested.clone(), room);
                let unmet = &requested - &granted;

                pair.quota += &granted;
                params.total_quoted += &granted;

                (BigInt::from_biguint(Sign::Plus, granted), unmet)
            },
            Sign::Minus => {
                let removed = self.get_min(change.magnitude(), pair.quota.clone());

                pair.quota -= &removed;
                params.total_quoted = if params.total_quoted > removed {
                    &params.total_quoted - &removed
                } else {
                    BigUint::zero()
                };

                (BigInt::from_biguint(Sign::Minus, removed), BigUint::zero())
            },
            Sign::NoSign => (BigInt::zero(), BigUint::zero()),
        };

        let max_quota = &cache.account.debt * &BigUint::from(self.max_quota_multiplier().get());
        require!(
            &pair.quota >= min_quota && pair.quota <= max_quota,
            ERROR_QUOTA_OUT_OF_BOUNDS
        );

        let becomes_enabled = old_quota == 0u64 && pair.quota > 0u64;
        let becomes_disabled = old_quota > 0u64 && pair.quota == 0u64;

        cache.set_account_quota(token, &pair);
        cache.set_quota_params(token, &params);

        self.update_quota_event(cache.account_id, token, &realized_change, &unmet);

        QuotaUpdate {
            realized_change,
            unmet,
            becomes_enabled,
            becomes_disabled,
        }
    }

    /// Accrues and zeroes every quota of the account. On a loss the limits of
    /// the affected tokens are frozen at zero.
    fn remove_all_quotas(&self, cache: &mut Cache<Self>, freeze_limits: bool) {
        for token in cache.quoted_tokens().iter() {
            let mut params = cache
                .get_quota_params(&token)
                .unwrap_or_else(|| sc_panic!(ERROR_TOKEN_NOT_QUOTABLE));
            let mut pair = self.accrue_quota(cache, &token, &params);

            params.total_quoted = if params.total_quoted > pair.quota {
                &params.total_quoted - &pair.quota
            } else {
                BigUint::zero()
            };
            if freeze_limits {
                params.limit = BigUint::zero();
                self.freeze_quota_limit_event(&token);
            }
            pair.quota = BigUint::zero();

            cache.set_account_quota(&token, &pair);
            cache.set_quota_params(&token, &params);
        }
    }
}
