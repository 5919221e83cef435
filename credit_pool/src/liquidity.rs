multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_BALANCE,
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_TOTAL_DEBT_LIMIT,
};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Supplies the pool asset and mints shares to the caller.
    ///
    /// # Returns
    /// - Shares minted for the deposit.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self) -> BigUint {
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.global_sync(&mut cache);

        let caller = self.blockchain().get_caller();
        let shares = cache.shares_for_deposit(&amount);
        self.shares(&caller).update(|owned| *owned += &shares);

        cache.total_shares += &shares;
        cache.supplied += &amount;

        self.emit_pool_update(&cache);

        shares
    }

    /// Burns `shares` of the caller and pays out their current value.
    #[endpoint(withdraw)]
    fn withdraw(&self, shares: BigUint) -> BigUint {
        let mut cache = Cache::new(self);
        require!(shares > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        let owned = self.shares(&caller).get();
        require!(owned >= shares, ERROR_INSUFFICIENT_BALANCE);

        self.global_sync(&mut cache);

        let amount = cache.amount_for_shares(&shares);
        require!(cache.has_reserves(&amount), ERROR_INSUFFICIENT_LIQUIDITY);

        self.shares(&caller).set(&(owned - &shares));
        cache.total_shares -= &shares;
        cache.supplied -= &amount;

        self.send_asset(&cache, &amount, &caller);
        self.emit_pool_update(&cache);

        amount
    }

    /// Lends `amount` to the credit manager.
    ///
    /// The per-block cap is enforced by the credit manager from the published
    /// debt limits, the pool only guards liquidity and the total debt limit.
    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) {
        let credit_manager = self.require_credit_manager();
        let mut cache = Cache::new(self);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.global_sync(&mut cache);

        require!(cache.has_reserves(&amount), ERROR_INSUFFICIENT_LIQUIDITY);

        let total_debt_limit = self.total_debt_limit().get();
        require!(
            total_debt_limit == 0u64 || &cache.borrowed + &amount <= total_debt_limit,
            ERROR_TOTAL_DEBT_LIMIT
        );

        cache.borrowed += &amount;

        self.send_asset(&cache, &amount, &credit_manager);
        self.pool_borrow_event(&credit_manager, &amount);
        self.emit_pool_update(&cache);
    }

    /// Takes back principal plus interest and fee from the credit manager.
    ///
    /// Whatever arrives above `principal` pays `interest` to lenders and then
    /// `fee` to the treasury. A payment below `principal` is a loss, written
    /// off against revenue and then against lenders.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, principal: BigUint, interest: BigUint, fee: BigUint) {
        let credit_manager = self.require_credit_manager();
        let mut cache = Cache::new(self);
        let amount = self.get_optional_payment_amount(&cache);

        self.global_sync(&mut cache);

        let principal_cut = self.get_min(principal.clone(), cache.borrowed.clone());
        cache.borrowed -= &principal_cut;

        let (to_lenders, to_treasury, loss) = if amount >= principal {
            let profit = &amount - &principal;
            let interest_paid = self.get_min(profit.clone(), interest);
            let fee_paid = self.get_min(&profit - &interest_paid, fee);
            // Anything above interest plus fee is left to lenders
            let to_lenders = &profit - &fee_paid;

            (to_lenders, fee_paid, BigUint::zero())
        } else {
            let loss = &principal - &amount;
            self.absorb_loss(&mut cache, &loss);
            (BigUint::zero(), BigUint::zero(), loss)
        };

        cache.supplied += &to_lenders;
        cache.revenue += &to_treasury;

        self.pool_repay_event(&credit_manager, &principal, &to_lenders, &to_treasury, &loss);
        self.emit_pool_update(&cache);
    }

    /// Sends accumulated protocol revenue to the owner.
    #[only_owner]
    #[endpoint(claimRevenue)]
    fn claim_revenue(&self) -> EgldOrEsdtTokenPayment<Self::Api> {
        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);

        let revenue = cache.revenue.clone();
        cache.revenue = BigUint::zero();

        let payment = self.send_asset(&cache, &revenue, &self.blockchain().get_owner_address());
        self.emit_pool_update(&cache);

        payment
    }
}
