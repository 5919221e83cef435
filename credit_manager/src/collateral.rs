multiversx_sc::imports!();

use common_constants::BPS;
use common_errors::{ERROR_INSUFFICIENT_COLLATERAL, ERROR_TOO_MANY_ENABLED_TOKENS};
use common_structs::{CollateralCalcTask, CollateralDebtData, TokenSet};

use crate::{cache::Cache, oracle, quotas, storage};

#[multiversx_sc::module]
pub trait CollateralModule:
    storage::Storage
    + oracle::OracleModule
    + quotas::QuotaModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Debt of the account, plus its collateral value unless `task` is `DebtOnly`.
    ///
    /// Quotable tokens count towards the weighted value only up to the quota of
    /// the account, the full value still shows in `total_value_usd`.
    ///
    /// Tokens are valued in this order: `hints`, the underlying, then the rest
    /// of the enabled set. `FullCheckLazy` stops once the weighted value covers
    /// `total_debt_usd * min_health_factor / BPS`; `force_all` disables that.
    /// Scanned tokens with a zero balance and no quota leave the returned
    /// enabled set.
    fn calc_debt_and_collateral(
        &self,
        cache: &mut Cache<Self>,
        task: CollateralCalcTask,
        hints: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        min_health_factor: u64,
        force_all: bool,
    ) -> CollateralDebtData<Self::Api> {
        let account = cache.account.clone();
        let quota_interest = &account.cumulative_quota_interest + &self.pending_quota_interest(cache);
        let accrued_interest = self.accrued_interest(
            &account.debt,
            &account.cumulative_index_last_update,
            &cache.base_index,
        );
        let accrued_fees = self.fee_on(&accrued_interest, cache.fee_interest_bps)
            + self.fee_on(&quota_interest, cache.fee_interest_bps);

        let mut data = CollateralDebtData {
            debt: account.debt.clone(),
            cumulative_index_now: cache.base_index.clone(),
            cumulative_index_last_update: account.cumulative_index_last_update.clone(),
            cumulative_quota_interest: quota_interest,
            accrued_interest,
            accrued_fees,
            total_debt_usd: BigUint::zero(),
            total_value: BigUint::zero(),
            total_value_usd: BigUint::zero(),
            twv_usd: BigUint::zero(),
            enabled_tokens: account.enabled_tokens.clone(),
            quoted_tokens: cache.quoted_tokens(),
            health_factor: u64::MAX,
        };

        if task == CollateralCalcTask::DebtOnly {
            return data;
        }

        let underlying = cache.underlying.clone();
        data.total_debt_usd = self.convert_to_usd(&underlying, &data.total_debt(), cache);
        let target_usd = self.mul_div_floor(
            &data.total_debt_usd,
            &BigUint::from(min_health_factor),
            &BigUint::from(BPS),
        );
        let lazy = task == CollateralCalcTask::FullCheckLazy && !force_all;

        let scan_order = self.collateral_scan_order(&underlying, &account.enabled_tokens, hints);
        for token in scan_order.iter() {
            if lazy && data.twv_usd >= target_usd {
                break;
            }

            let balance = cache.balance(&token);
            if balance == 0u64 {
                let is_quoted = data.quoted_tokens.iter().any(|quoted| *quoted == *token);
                if *token != underlying && !is_quoted {
                    data.enabled_tokens.remove(&token);
                }
                continue;
            }

            let value_usd = self.convert_to_usd(&token, &balance, cache);
            let weighted_usd = self.quota_capped_value(cache, &token, &value_usd);
            let lt_bps = self.liquidation_threshold_of(&token, cache.timestamp);
            data.twv_usd += self.percent_mul(&weighted_usd, lt_bps);
            data.total_value_usd += &value_usd;
        }

        data.total_value = self.convert_from_usd(&underlying, &data.total_value_usd, cache);
        data.health_factor = self.compute_health_factor(&data.twv_usd, &data.total_debt_usd);

        data
    }

    fn collateral_scan_order(
        &self,
        underlying: &EgldOrEsdtTokenIdentifier,
        enabled_tokens: &TokenSet<Self::Api>,
        hints: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> ManagedVec<EgldOrEsdtTokenIdentifier> {
        let mut order = TokenSet::new();
        for hint in hints.iter() {
            if enabled_tokens.contains(&hint) {
                order.insert(&hint);
            }
        }
        order.insert(underlying);
        order.union(enabled_tokens).to_vec()
    }

    /// A quotable token only weighs as much as the account's quota in it.
    fn quota_capped_value(
        &self,
        cache: &mut Cache<Self>,
        token: &EgldOrEsdtTokenIdentifier,
        value_usd: &BigUint,
    ) -> BigUint {
        if cache.get_quota_params(token).is_none() {
            return value_usd.clone();
        }

        let quota = cache
            .get_account_quota(token)
            .map(|pair| pair.quota)
            .unwrap_or_else(BigUint::zero);
        let underlying = cache.underlying.clone();
        let quota_usd = self.convert_to_usd(&underlying, &quota, cache);
        self.get_min(value_usd.clone(), quota_usd)
    }

    /// Zero for tokens that are not configured as collateral.
    fn liquidation_threshold_of(&self, token: &EgldOrEsdtTokenIdentifier, timestamp: u64) -> u64 {
        match self.collateral_tokens().get(token) {
            Some(config) => config.liquidation_threshold(timestamp),
            None => 0,
        }
    }

    /// The single solvency check closing every batch.
    ///
    /// Fails when the health factor is below `min_health_factor` or when the
    /// resulting enabled set is larger than allowed. The cleaned enabled set is
    /// written back to the checkpoint.
    fn full_collateral_check(
        &self,
        cache: &mut Cache<Self>,
        hints: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        min_health_factor: u64,
        force_all: bool,
    ) -> u64 {
        let data = self.calc_debt_and_collateral(
            cache,
            CollateralCalcTask::FullCheckLazy,
            hints,
            min_health_factor,
            force_all,
        );

        require!(
            data.is_healthy(min_health_factor),
            ERROR_INSUFFICIENT_COLLATERAL
        );
        require!(
            !data
                .enabled_tokens
                .exceeds(self.max_enabled_tokens().get()),
            ERROR_TOO_MANY_ENABLED_TOKENS
        );

        cache.account.enabled_tokens = data.enabled_tokens;

        data.health_factor
    }
}
