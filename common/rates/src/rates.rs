#![no_std]
use common_constants::{BPS, RAY, SECONDS_PER_YEAR};
use common_structs::{DebtDecrease, LiquidationPayments, PoolParams};

multiversx_sc::imports!();

/// The InterestRates module holds the stateless debt math shared by the pool
/// and the credit manager: index growth, interest and fee accrual, the
/// repayment waterfall and liquidation payoffs.
///
/// Indexes are RAY based, percentages are BPS and time is in seconds.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the annual borrow rate of the pool from its utilization.
    ///
    /// **Formula**:
    /// - If `utilization < mid_utilization`: `base_borrow_rate + utilization * slope1 / mid_utilization`.
    /// - If `mid_utilization <= utilization < optimal_utilization`: `base_borrow_rate + slope1 + (utilization - mid_utilization) * slope2 / (optimal_utilization - mid_utilization)`.
    /// - Otherwise: `base_borrow_rate + slope1 + slope2 + (utilization - optimal_utilization) * slope3 / (RAY - optimal_utilization)`.
    /// - The result is capped at `max_borrow_rate`.
    ///
    /// # Arguments
    /// - `utilization`: Current pool utilization ratio, RAY-based.
    /// - `params`: Rate curve of the pool.
    ///
    /// # Returns
    /// - Annual borrow rate, RAY-based.
    fn calc_borrow_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        params: PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let annual_rate = if utilization < params.mid_utilization {
            let utilization_ratio = utilization.mul(params.slope1).div(params.mid_utilization);
            params.base_borrow_rate.add(utilization_ratio)
        } else if utilization < params.optimal_utilization {
            let excess_utilization = utilization.sub(params.mid_utilization.clone());
            let slope_contribution = excess_utilization
                .mul(params.slope2)
                .div(params.optimal_utilization.sub(params.mid_utilization));
            params
                .base_borrow_rate
                .add(params.slope1)
                .add(slope_contribution)
        } else {
            let base_rate = params
                .base_borrow_rate
                .add(params.slope1)
                .add(params.slope2);
            let excess_utilization = utilization.sub(params.optimal_utilization.clone());
            let slope_contribution = excess_utilization
                .mul(params.slope3)
                .div(self.ray().sub(params.optimal_utilization));
            base_rate.add(slope_contribution)
        };

        if annual_rate > params.max_borrow_rate {
            params.max_borrow_rate
        } else {
            annual_rate
        }
    }

    fn get_utilization(&self, borrowed: &BigUint, supplied: &BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        if supplied == &BigUint::zero() {
            return self.ray_zero();
        }
        let utilization = self.mul_div_floor(borrowed, &BigUint::from(RAY), supplied);
        let capped = self.get_min(utilization, BigUint::from(RAY));
        self.to_decimal_ray(capped)
    }

    /// Grows an index linearly over `elapsed` seconds.
    ///
    /// **Formula**: `base_index * (1 + annual_rate * elapsed / SECONDS_PER_YEAR)`
    ///
    /// # Arguments
    /// - `base_index`: Index at the start of the period, RAY-based.
    /// - `elapsed`: Seconds since `base_index` was recorded.
    /// - `annual_rate`: Annual rate, RAY-based.
    fn grow_index(
        &self,
        base_index: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed: u64,
        annual_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if elapsed == 0 {
            return base_index.clone();
        }

        let ray = BigUint::from(RAY);
        let rate_times_elapsed = annual_rate.into_raw_units() * &BigUint::from(elapsed);
        let linear_factor = &ray + &(rate_times_elapsed / BigUint::from(SECONDS_PER_YEAR));
        let grown = self.mul_div_floor(base_index.into_raw_units(), &linear_factor, &ray);

        self.to_decimal_ray(grown)
    }

    /// Grows a token quota index additively.
    ///
    /// **Formula**: `index_lu + RAY * rate_bps * elapsed / (BPS * SECONDS_PER_YEAR)`
    fn grow_quota_index(
        &self,
        index_lu: &ManagedDecimal<Self::Api, NumDecimals>,
        rate_bps: u64,
        elapsed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if elapsed == 0 || rate_bps == 0 {
            return index_lu.clone();
        }

        let growth = self.mul_div_floor(
            &BigUint::from(RAY),
            &(BigUint::from(rate_bps) * BigUint::from(elapsed)),
            &(BigUint::from(BPS) * BigUint::from(SECONDS_PER_YEAR)),
        );
        self.to_decimal_ray(index_lu.into_raw_units() + &growth)
    }

    /// Base interest accrued on `principal` between two index snapshots.
    ///
    /// **Formula**: `principal * index_now / index_at_open - principal`
    fn accrued_interest(
        &self,
        principal: &BigUint,
        index_at_open: &ManagedDecimal<Self::Api, NumDecimals>,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if principal == &BigUint::zero() || index_now <= index_at_open {
            return BigUint::zero();
        }

        let grown = self.mul_div_floor(
            principal,
            index_now.into_raw_units(),
            index_at_open.into_raw_units(),
        );
        grown - principal
    }

    /// Quota interest of `quoted` between the pair snapshot and the token index now.
    fn accrued_quota_interest(
        &self,
        quoted: &BigUint,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
        index_lu: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if index_now <= index_lu {
            return BigUint::zero();
        }

        let delta = index_now.into_raw_units() - index_lu.into_raw_units();
        self.mul_div_floor(quoted, &delta, &BigUint::from(RAY))
    }

    /// Protocol fee charged on top of accrued interest.
    fn fee_on(&self, interest: &BigUint, fee_bps: u64) -> BigUint {
        self.percent_mul(interest, fee_bps)
    }

    /// Splits a payment that covers interest plus its fee.
    ///
    /// The lender share is truncated, so the protocol fee is never
    /// under-collected by rounding.
    ///
    /// # Returns
    /// - `(protocol_fee, net_interest)`
    fn split_fee(&self, amount: &BigUint, fee_bps: u64) -> (BigUint, BigUint) {
        let net_interest = self.mul_div_floor(
            amount,
            &BigUint::from(BPS),
            &BigUint::from(BPS + fee_bps),
        );
        let protocol_fee = amount - &net_interest;

        (protocol_fee, net_interest)
    }

    /// Adds `amount` to the principal while keeping the interest owed so far.
    ///
    /// The accrued base interest is folded in by moving the index snapshot,
    /// so that `new_principal * (index_now / new_index - 1)` equals the interest
    /// accrued on the old principal.
    ///
    /// # Returns
    /// - `(new_principal, new_index_last_update)`
    fn calc_increase(
        &self,
        principal: &BigUint,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
        index_last_update: &ManagedDecimal<Self::Api, NumDecimals>,
        amount: &BigUint,
    ) -> (BigUint, ManagedDecimal<Self::Api, NumDecimals>) {
        let new_principal = principal + amount;
        if principal == &BigUint::zero() {
            return (new_principal, index_now.clone());
        }

        let now_raw = index_now.into_raw_units();
        let lu_raw = index_last_update.into_raw_units();

        // index_now * new_principal / (principal * index_now / index_lu + amount)
        let ray = BigUint::from(RAY);
        let scaled_old = self.mul_div_floor(&(principal * &ray), now_raw, lu_raw);
        let denominator = scaled_old + &(amount * &ray);
        let new_index = self.mul_div_floor(&(now_raw * &new_principal), &ray, &denominator);

        (new_principal, self.to_decimal_ray(new_index))
    }

    /// Repayment waterfall: quota interest with its fee share first, then the
    /// base interest with its fee share, then the principal.
    ///
    /// Partial interest payments split the paid amount between lenders and the
    /// protocol with `split_fee`; the unpaid part stays owed by moving the index
    /// snapshot (base interest) or lowering the stored quota interest.
    ///
    /// # Arguments
    /// - `amount`: Amount paid, already capped to the total owed.
    /// - `quota_interest`: Stored plus pending quota interest.
    fn calc_decrease(
        &self,
        amount: &BigUint,
        principal: &BigUint,
        index_now: &ManagedDecimal<Self::Api, NumDecimals>,
        index_last_update: &ManagedDecimal<Self::Api, NumDecimals>,
        quota_interest: &BigUint,
        fee_bps: u64,
    ) -> DebtDecrease<Self::Api> {
        let mut remaining = amount.clone();
        let mut interest = BigUint::zero();
        let mut fee = BigUint::zero();
        let mut new_quota_interest = quota_interest.clone();
        let mut new_index = index_last_update.clone();

        if quota_interest > &BigUint::zero() {
            let quota_fee = self.fee_on(quota_interest, fee_bps);
            let quota_owed = quota_interest + &quota_fee;
            if remaining >= quota_owed {
                remaining -= &quota_owed;
                interest += quota_interest;
                fee += &quota_fee;
                new_quota_interest = BigUint::zero();
            } else {
                let (paid_fee, paid_interest) = self.split_fee(&remaining, fee_bps);
                new_quota_interest = quota_interest - &paid_interest;
                interest += &paid_interest;
                fee += &paid_fee;
                remaining = BigUint::zero();
            }
        }

        if remaining > 0u64 {
            let base_interest = self.accrued_interest(principal, index_last_update, index_now);
            let base_fee = self.fee_on(&base_interest, fee_bps);
            let base_owed = &base_interest + &base_fee;
            if remaining >= base_owed {
                remaining -= &base_owed;
                interest += &base_interest;
                fee += &base_fee;
                new_index = index_now.clone();
            } else {
                let (paid_fee, paid_interest) = self.split_fee(&remaining, fee_bps);
                // Solve principal * (index_now / new_index - 1) = base_interest - paid_interest
                let unpaid = &base_interest - &paid_interest;
                let now_raw = index_now.into_raw_units();
                let new_raw =
                    self.mul_div_floor(now_raw, principal, &(principal + &unpaid));
                new_index = self.to_decimal_ray(new_raw);
                interest += &paid_interest;
                fee += &paid_fee;
                remaining = BigUint::zero();
            }
        }

        let principal_repaid = self.get_min(remaining, principal.clone());
        let new_debt = principal - &principal_repaid;

        DebtDecrease {
            new_debt,
            new_cumulative_index: new_index,
            new_cumulative_quota_interest: new_quota_interest,
            principal_repaid,
            interest,
            fee,
        }
    }

    /// Computes what a liquidation pays to the pool and to the owner.
    ///
    /// **Formula**:
    /// - `total_funds = total_value * (BPS - premium) / BPS`
    /// - `amount_to_pool = total_debt + total_value * fee_liquidation / BPS`
    /// - If `total_funds > amount_to_pool`: the owner gets the difference.
    /// - Otherwise the pool takes `total_funds`, any shortfall against the
    ///   total debt is a loss.
    ///
    /// # Arguments
    /// - `total_value`: Collateral value in base asset units.
    /// - `principal`, `interest`, `fee`: Outstanding debt split (interest includes quota interest).
    fn calc_liquidation_payments(
        &self,
        total_value: &BigUint,
        principal: &BigUint,
        interest: &BigUint,
        fee: &BigUint,
        liquidation_premium_bps: u64,
        fee_liquidation_bps: u64,
    ) -> LiquidationPayments<Self::Api> {
        let total_debt = principal + interest + fee;
        let total_funds = self.percent_mul(total_value, BPS - liquidation_premium_bps);
        let liquidation_fee = self.percent_mul(total_value, fee_liquidation_bps);
        let full_payment = &total_debt + &liquidation_fee;

        if total_funds >= full_payment {
            return LiquidationPayments {
                remaining_funds: &total_funds - &full_payment,
                amount_to_pool: full_payment,
                principal: principal.clone(),
                interest: interest.clone(),
                fee: fee + &liquidation_fee,
                loss: BigUint::zero(),
            };
        }

        if total_funds >= total_debt {
            let partial_liquidation_fee = &total_funds - &total_debt;
            return LiquidationPayments {
                amount_to_pool: total_funds,
                remaining_funds: BigUint::zero(),
                principal: principal.clone(),
                interest: interest.clone(),
                fee: fee + &partial_liquidation_fee,
                loss: BigUint::zero(),
            };
        }

        LiquidationPayments {
            loss: &total_debt - &total_funds,
            amount_to_pool: total_funds,
            remaining_funds: BigUint::zero(),
            principal: principal.clone(),
            interest: interest.clone(),
            fee: fee.clone(),
        }
    }

    /// Health factor on the percentage scale, `u64::MAX` when there is no debt.
    fn compute_health_factor(&self, twv_usd: &BigUint, total_debt_usd: &BigUint) -> u64 {
        if total_debt_usd == &BigUint::zero() {
            return u64::MAX;
        }

        self.mul_div_floor(twv_usd, &BigUint::from(BPS), total_debt_usd)
            .to_u64()
            .unwrap_or(u64::MAX)
    }

    /// The pool index `elapsed` seconds after the last sync, as the pool itself
    /// would compute it on its next interaction.
    fn simulate_borrow_index(
        &self,
        borrow_index: &ManagedDecimal<Self::Api, NumDecimals>,
        last_timestamp: u64,
        current_timestamp: u64,
        borrowed: &BigUint,
        supplied: &BigUint,
        params: PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if current_timestamp <= last_timestamp {
            return borrow_index.clone();
        }

        let utilization = self.get_utilization(borrowed, supplied);
        let rate = self.calc_borrow_rate(utilization, params);
        self.grow_index(borrow_index, current_timestamp - last_timestamp, &rate)
    }
}
