use common_constants::BPS;
use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDATION, ERROR_NON_ZERO_DEBT_ON_CLOSE, ERROR_NOT_LIQUIDATABLE,
};
use common_structs::{ClosureAction, CollateralCalcTask, LiquidationPayments};

use crate::{cache::Cache, collateral, oracle, quotas, storage, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionCloseModule:
    storage::Storage
    + oracle::OracleModule
    + quotas::QuotaModule
    + collateral::CollateralModule
    + account::PositionAccountModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Closes a debt-free account. Swept tokens and the underlying go to
    /// `recipient`, anything else back to the owner.
    fn close_position(
        &self,
        cache: &mut Cache<Self>,
        recipient: &ManagedAddress,
        sweep_tokens: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) {
        let data = self.calc_debt_and_collateral(
            cache,
            CollateralCalcTask::DebtOnly,
            &ManagedVec::new(),
            BPS,
            false,
        );
        require!(
            data.debt == 0u64 && data.cumulative_quota_interest == 0u64,
            ERROR_NON_ZERO_DEBT_ON_CLOSE
        );

        self.remove_all_quotas(cache, false);
        self.sweep_balances(cache, recipient, sweep_tokens);

        let owner = cache.account.owner.clone();
        self.close_credit_account_event(cache.account_id, &owner, recipient);
        self.release_position(cache);
    }

    /// Liquidates an unhealthy account, or any account once the facade expired.
    ///
    /// The liquidator tops up the underlying with `payment` so the account can
    /// pay the pool and the owner's share, then takes the swept balances.
    fn liquidate_position(
        &self,
        cache: &mut Cache<Self>,
        liquidator: &ManagedAddress,
        recipient: &ManagedAddress,
        sweep_tokens: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        payment: &BigUint,
    ) -> LiquidationPayments<Self::Api> {
        let data = self.calc_debt_and_collateral(
            cache,
            CollateralCalcTask::DebtCollateral,
            &ManagedVec::new(),
            BPS,
            true,
        );

        let action = if data.health_factor < BPS {
            ClosureAction::Liquidate
        } else if self.is_expired(cache.timestamp) {
            ClosureAction::LiquidateExpired
        } else {
            sc_panic!(ERROR_NOT_LIQUIDATABLE);
        };

        let config = self.liquidation_config().get();
        let (premium_bps, fee_bps) = match action {
            ClosureAction::LiquidateExpired => (
                config.liquidation_premium_expired_bps,
                config.fee_liquidation_expired_bps,
            ),
            _ => (config.liquidation_premium_bps, config.fee_liquidation_bps),
        };

        let payments = self.calc_liquidation_payments(
            &data.total_value,
            &data.debt,
            &(&data.accrued_interest + &data.cumulative_quota_interest),
            &data.accrued_fees,
            premium_bps,
            fee_bps,
        );

        let underlying = cache.underlying.clone();
        let available = cache.balance(&underlying) + payment;
        let required = &payments.amount_to_pool + &payments.remaining_funds;
        require!(available >= required, ERROR_INSUFFICIENT_LIQUIDATION);
        cache.set_balance(&underlying, &(&available - &required));

        cache.queue_pool_repayment(
            &payments.amount_to_pool,
            &payments.principal,
            &payments.interest,
            &payments.fee,
        );
        let owner = cache.account.owner.clone();
        cache.queue_transfer(&owner, &underlying, &payments.remaining_funds);

        let has_loss = payments.loss > 0u64;
        self.remove_all_quotas(cache, has_loss);
        if has_loss {
            self.increase_debt_forbidden().set(true);
        }

        cache.account.set_debt(BigUint::zero());
        cache.account.cumulative_quota_interest = BigUint::zero();
        cache.account.cumulative_index_last_update = cache.base_index.clone();

        self.sweep_balances(cache, recipient, sweep_tokens);

        self.liquidate_credit_account_event(
            cache.account_id,
            liquidator,
            action,
            &payments.amount_to_pool,
            &payments.remaining_funds,
            &payments.loss,
        );
        self.release_position(cache);

        payments
    }

    fn sweep_balances(
        &self,
        cache: &mut Cache<Self>,
        recipient: &ManagedAddress,
        sweep_tokens: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) {
        let owner = cache.account.owner.clone();
        for token in cache.balance_tokens().iter() {
            let amount = cache.balance(&token);
            if amount == 0u64 {
                continue;
            }

            let swept = *token == cache.underlying || sweep_tokens.iter().any(|t| *t == *token);
            let to = if swept { recipient } else { &owner };
            cache.queue_transfer(to, &token, &amount);
            cache.set_balance(&token, &BigUint::zero());
        }
    }

    fn release_position(&self, cache: &mut Cache<Self>) {
        let owner = cache.account.owner.clone();
        self.release_account_id(cache.account_id, &owner);
        cache.release();
    }
}
