#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod liquidity;
pub mod storage;
pub mod utils;
pub mod view;

pub use common_events::*;

/// Lending pool backing the credit manager.
///
/// Lenders deposit the pool asset for shares. The credit manager is the only
/// borrower: it draws principal for credit accounts and pays back principal,
/// interest and fees, or a shortfall that the pool writes off as a loss.
#[multiversx_sc::contract]
pub trait CreditPool:
    storage::Storage
    + common_events::EventsModule
    + common_rates::InterestRates
    + liquidity::LiquidityModule
    + config::ConfigModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + view::ViewModule
{
    /// Initializes the pool for `asset`.
    ///
    /// ### Parameters
    /// - `max_borrow_rate`, `base_borrow_rate`, `slope1..3`: annual rates, RAY-scaled.
    /// - `mid_utilization`, `optimal_utilization`: curve break points, RAY-scaled.
    /// - `reserve_factor`: BPS-scaled, kept with the curve for reporting.
    /// - `min_debt`, `max_debt`: debt band of a credit account.
    /// - `max_debt_per_block_multiplier`: per-block borrowing cap as a multiple of `max_debt`.
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        max_borrow_rate: BigUint,
        base_borrow_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
        reserve_factor: BigUint,
        min_debt: BigUint,
        max_debt: BigUint,
        max_debt_per_block_multiplier: u64,
    ) {
        self.pool_asset().set(&asset);
        self.params().set(&PoolParams {
            max_borrow_rate: self.to_decimal_ray(max_borrow_rate),
            base_borrow_rate: self.to_decimal_ray(base_borrow_rate),
            slope1: self.to_decimal_ray(slope1),
            slope2: self.to_decimal_ray(slope2),
            slope3: self.to_decimal_ray(slope3),
            mid_utilization: self.to_decimal_ray(mid_utilization),
            optimal_utilization: self.to_decimal_ray(optimal_utilization),
            reserve_factor: self.to_decimal_bps(reserve_factor),
        });
        self.debt_limits().set(self.build_debt_limits(
            min_debt,
            max_debt,
            max_debt_per_block_multiplier,
        ));

        self.borrow_index().set(self.ray());
        self.supplied().set(BigUint::zero());
        self.borrowed().set(BigUint::zero());
        self.revenue().set(BigUint::zero());
        self.bad_debt().set(BigUint::zero());
        self.total_shares().set(BigUint::zero());
        self.last_timestamp()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
