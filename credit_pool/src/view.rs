multiversx_sc::imports!();

use common_structs::DebtLimits;

use crate::storage;

/// Read-only endpoints of the pool.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Borrow index as of the current block, without writing it.
    #[view(getCurrentBorrowIndex)]
    fn get_current_borrow_index(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.simulate_borrow_index(
            &self.borrow_index().get(),
            self.last_timestamp().get(),
            self.blockchain().get_block_timestamp(),
            &self.borrowed().get(),
            &self.supplied().get(),
            self.params().get(),
        )
    }

    #[view(getDebtLimits)]
    fn get_debt_limits(&self) -> DebtLimits<Self::Api> {
        self.debt_limits().get()
    }

    #[view(getMaxDebtPerBlockMultiplier)]
    fn get_max_debt_per_block_multiplier(&self) -> u64 {
        self.debt_limits().get().max_debt_per_block_multiplier
    }

    #[view(getCapitalUtilisation)]
    fn get_capital_utilisation(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_utilization(&self.borrowed().get(), &self.supplied().get())
    }

    #[view(getBorrowRate)]
    fn get_borrow_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_borrow_rate(self.get_capital_utilisation(), self.params().get())
    }

    /// Current value of the shares held by `lender`.
    #[view(getDepositBalance)]
    fn get_deposit_balance(&self, lender: ManagedAddress) -> BigUint {
        let total_shares = self.total_shares().get();
        if total_shares == 0u64 {
            return BigUint::zero();
        }
        self.shares(&lender).get() * self.supplied().get() / total_shares
    }

    #[view(getAvailableLiquidity)]
    fn get_available_liquidity(&self) -> BigUint {
        let balance = self
            .blockchain()
            .get_sc_balance(&self.pool_asset().get(), 0);
        let revenue = self.revenue().get();
        if balance > revenue {
            balance - revenue
        } else {
            BigUint::zero()
        }
    }
}
