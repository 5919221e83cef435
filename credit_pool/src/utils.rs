multiversx_sc::imports!();

use crate::{cache::Cache, storage};

use common_errors::{ERROR_INVALID_ASSET, ERROR_ONLY_CREDIT_MANAGER};

/// Helpers shared by the pool endpoints: index sync, events, transfers and
/// payment validation.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Grows the borrow index from `last_timestamp` to the current block.
    ///
    /// The rate is taken from the utilization before the update, so the
    /// credit manager can reproduce the same index from storage alone.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        let delta = cache.timestamp - cache.last_timestamp;

        if delta > 0 {
            let utilization = self.get_utilization(&cache.borrowed, &cache.supplied);
            let borrow_rate = self.calc_borrow_rate(utilization, cache.params.clone());
            cache.borrow_index = self.grow_index(&cache.borrow_index, delta, &borrow_rate);
            cache.last_timestamp = cache.timestamp;
        }
    }

    #[inline(always)]
    fn emit_pool_update(&self, cache: &Cache<Self>) {
        self.update_pool_state_event(
            cache.timestamp,
            &cache.borrow_index,
            &cache.supplied,
            &cache.borrowed,
            &cache.revenue,
            &cache.bad_debt,
        );
    }

    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(cache.pool_asset.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    fn get_payment_amount(&self, cache: &Cache<Self>) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);

        amount
    }

    /// Like `get_payment_amount`, but an empty call value counts as zero.
    fn get_optional_payment_amount(&self, cache: &Cache<Self>) -> BigUint {
        let payments = self.call_value().all_transfers();
        let mut amount = BigUint::zero();
        for payment in payments.iter() {
            require!(cache.is_same_asset(&payment.token_identifier), ERROR_INVALID_ASSET);
            amount += &payment.amount;
        }
        amount
    }

    fn require_credit_manager(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            !self.credit_manager().is_empty() && caller == self.credit_manager().get(),
            ERROR_ONLY_CREDIT_MANAGER
        );
        caller
    }

    /// Writes off `loss`: treasury revenue first, lenders for the rest.
    fn absorb_loss(&self, cache: &mut Cache<Self>, loss: &BigUint) {
        if *loss == 0u64 {
            return;
        }

        let from_revenue = self.get_min(loss.clone(), cache.revenue.clone());
        cache.revenue -= &from_revenue;

        let remaining = loss - &from_revenue;
        let from_lenders = self.get_min(remaining, cache.supplied.clone());
        cache.supplied -= &from_lenders;

        cache.bad_debt += loss;
    }
}
