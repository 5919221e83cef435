use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BORROW_CAP_EXCEEDED, ERROR_DEBT_OUT_OF_BOUNDS,
    ERROR_INCREASE_DEBT_FORBIDDEN,
};
use common_proxies::proxy_pool;
use common_structs::DebtDecrease;

use crate::{cache::Cache, oracle, quotas, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionDebtModule:
    storage::Storage
    + oracle::OracleModule
    + quotas::QuotaModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Initial debt of a new account. Zero is allowed and leaves the
    /// zero-debt flag set.
    fn open_debt(&self, cache: &mut Cache<Self>, amount: &BigUint) {
        cache.account.cumulative_index_last_update = cache.base_index.clone();
        if amount == &BigUint::zero() {
            return;
        }

        require!(cache.debt_limits.is_within(amount), ERROR_DEBT_OUT_OF_BOUNDS);
        self.borrow_into_account(cache, amount);
        cache.account.set_debt(amount.clone());
    }

    /// Borrows `amount` more for the account.
    ///
    /// Interest accrued so far is kept by re-basing the index snapshot, so the
    /// amount owed before the call does not change.
    fn increase_debt(&self, cache: &mut Cache<Self>, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let (new_debt, new_index) = self.calc_increase(
            &cache.account.debt,
            &cache.base_index,
            &cache.account.cumulative_index_last_update,
            amount,
        );
        require!(cache.debt_limits.is_within(&new_debt), ERROR_DEBT_OUT_OF_BOUNDS);

        self.borrow_into_account(cache, amount);
        cache.account.set_debt(new_debt.clone());
        cache.account.cumulative_index_last_update = new_index;

        self.increase_debt_event(cache.account_id, amount, &new_debt);
    }

    /// Repays up to `amount` from the account's underlying balance.
    ///
    /// Any amount at or above the total owed, `REPAY_ALL` included, repays
    /// everything and removes every quota.
    fn decrease_debt(&self, cache: &mut Cache<Self>, amount: &BigUint) -> DebtDecrease<Self::Api> {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.accrue_all_quotas(cache);

        let fee_bps = cache.fee_interest_bps;
        let principal = cache.account.debt.clone();
        let quota_interest = cache.account.cumulative_quota_interest.clone();
        let base_interest = self.accrued_interest(
            &principal,
            &cache.account.cumulative_index_last_update,
            &cache.base_index,
        );
        let fees = self.fee_on(&base_interest, fee_bps) + self.fee_on(&quota_interest, fee_bps);
        let interest = &base_interest + &quota_interest;
        let total_owed = &principal + &interest + &fees;

        let decrease = if amount >= &total_owed {
            DebtDecrease {
                new_debt: BigUint::zero(),
                new_cumulative_index: cache.base_index.clone(),
                new_cumulative_quota_interest: BigUint::zero(),
                principal_repaid: principal,
                interest,
                fee: fees,
            }
        } else {
            let decrease = self.calc_decrease(
                amount,
                &principal,
                &cache.base_index,
                &cache.account.cumulative_index_last_update,
                &quota_interest,
                fee_bps,
            );
            require!(
                decrease.new_debt >= cache.debt_limits.min_debt,
                ERROR_DEBT_OUT_OF_BOUNDS
            );
            decrease
        };

        let paid = decrease.total_paid();
        let underlying = cache.underlying.clone();
        cache.sub_balance(&underlying, &paid);
        cache.queue_pool_repayment(
            &paid,
            &decrease.principal_repaid,
            &decrease.interest,
            &decrease.fee,
        );

        cache.account.set_debt(decrease.new_debt.clone());
        cache.account.cumulative_index_last_update = decrease.new_cumulative_index.clone();
        cache.account.cumulative_quota_interest = decrease.new_cumulative_quota_interest.clone();

        if decrease.new_debt == 0u64 {
            self.remove_all_quotas(cache, false);
        }

        self.decrease_debt_event(
            cache.account_id,
            &decrease.principal_repaid,
            &decrease.interest,
            &decrease.fee,
            &decrease.new_debt,
        );

        decrease
    }

    fn borrow_into_account(&self, cache: &mut Cache<Self>, amount: &BigUint) {
        require!(
            !self.increase_debt_forbidden().get(),
            ERROR_INCREASE_DEBT_FORBIDDEN
        );
        self.require_not_expired(cache.timestamp);
        self.check_borrow_cap(cache, amount);

        self.tx()
            .to(&cache.pool_address)
            .typed(proxy_pool::CreditPoolProxy)
            .borrow(amount)
            .sync_call();

        let underlying = cache.underlying.clone();
        cache.add_balance(&underlying, amount);
    }

    /// Debt created in one block is capped at `max_debt * multiplier`.
    fn check_borrow_cap(&self, cache: &mut Cache<Self>, amount: &BigUint) {
        let borrowed = &cache.borrowed_in_tick + amount;
        require!(
            borrowed <= cache.debt_limits.max_debt_per_block(),
            ERROR_BORROW_CAP_EXCEEDED
        );
        cache.record_borrow(amount);
    }
}
