multiversx_sc::imports!();

use common_errors::{ERROR_ADDRESS_IS_ZERO, ERROR_INVALID_DEBT_LIMITS};
use common_structs::DebtLimits;

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    #[only_owner]
    #[endpoint(setCreditManager)]
    fn set_credit_manager(&self, credit_manager: ManagedAddress) {
        require!(!credit_manager.is_zero(), ERROR_ADDRESS_IS_ZERO);
        self.credit_manager().set(credit_manager);
    }

    /// Sets the `[min_debt, max_debt]` band every credit account must respect.
    #[only_owner]
    #[endpoint(setDebtLimits)]
    fn set_debt_limits(&self, min_debt: BigUint, max_debt: BigUint) {
        let multiplier = self.debt_limits().get().max_debt_per_block_multiplier;
        self.debt_limits()
            .set(self.build_debt_limits(min_debt, max_debt, multiplier));
    }

    /// New debt allowed per block is `multiplier * max_debt`. Zero stops new borrowing.
    #[only_owner]
    #[endpoint(setMaxDebtPerBlockMultiplier)]
    fn set_max_debt_per_block_multiplier(&self, multiplier: u64) {
        self.debt_limits()
            .update(|limits| limits.max_debt_per_block_multiplier = multiplier);
    }

    #[only_owner]
    #[endpoint(setTotalDebtLimit)]
    fn set_total_debt_limit(&self, limit: BigUint) {
        self.total_debt_limit().set(limit);
    }

    /// Replaces the rate curve. The index is synced first so past interest
    /// accrues at the old rate.
    #[only_owner]
    #[endpoint(setPoolParams)]
    fn set_pool_params(
        &self,
        max_borrow_rate: BigUint,
        base_borrow_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
        reserve_factor: BigUint,
    ) {
        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        cache.params.max_borrow_rate = self.to_decimal_ray(max_borrow_rate);
        cache.params.base_borrow_rate = self.to_decimal_ray(base_borrow_rate);
        cache.params.slope1 = self.to_decimal_ray(slope1);
        cache.params.slope2 = self.to_decimal_ray(slope2);
        cache.params.slope3 = self.to_decimal_ray(slope3);
        cache.params.mid_utilization = self.to_decimal_ray(mid_utilization);
        cache.params.optimal_utilization = self.to_decimal_ray(optimal_utilization);
        cache.params.reserve_factor = self.to_decimal_bps(reserve_factor);

        self.params().set(&cache.params);
        self.emit_pool_update(&cache);
    }

    fn build_debt_limits(&self, min_debt: BigUint, max_debt: BigUint, multiplier: u64) -> DebtLimits<Self::Api> {
        require!(min_debt <= max_debt, ERROR_INVALID_DEBT_LIMITS);
        DebtLimits {
            min_debt,
            max_debt,
            max_debt_per_block_multiplier: multiplier,
        }
    }
}
