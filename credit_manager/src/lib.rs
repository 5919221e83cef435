#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod adapters;
pub mod bots;
pub mod cache;
pub mod collateral;
pub mod config;
pub mod multicall;
pub mod oracle;
pub mod positions;
pub mod quotas;
pub mod storage;
pub mod validation;
pub mod views;

use cache::Cache;
use common_constants::{
    DEFAULT_FEE_LIQUIDATION_BPS, DEFAULT_FEE_LIQUIDATION_EXPIRED_BPS,
    DEFAULT_LIQUIDATION_PREMIUM_BPS, DEFAULT_LIQUIDATION_PREMIUM_EXPIRED_BPS,
    DEFAULT_MAX_ENABLED_TOKENS, DEFAULT_MAX_PRICE_STALE_SECONDS, DEFAULT_MAX_QUOTA_MULTIPLIER,
};
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;
use multicall::OWNER_PERMISSIONS;

/// Leveraged credit accounts on top of a single lending pool.
///
/// An account borrows the pool's underlying and holds it, together with any
/// collateral, in a token ledger kept by this contract. Owners (and bots they
/// authorize) mutate accounts through batches of `BatchCall`s that end with a
/// single health check; a batch that fails anywhere leaves no trace.
#[multiversx_sc::contract]
pub trait CreditManager:
    positions::account::PositionAccountModule
    + positions::assets::PositionAssetsModule
    + positions::debt::PositionDebtModule
    + positions::close::PositionCloseModule
    + multicall::MulticallModule
    + adapters::AdaptersModule
    + bots::BotsModule
    + collateral::CollateralModule
    + quotas::QuotaModule
    + config::ConfigModule
    + views::ViewsModule
    + validation::ValidationModule
    + oracle::OracleModule
    + storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Binds the manager to its pool and price oracle.
    ///
    /// # Arguments
    /// - `pool_address`: Pool lending the underlying. Its asset becomes the underlying.
    /// - `price_oracle_address`: Oracle whose storage provides USD prices.
    /// - `fee_interest_bps`: Protocol fee charged on top of interest.
    /// - `underlying_lt_bps`: Liquidation threshold of the underlying.
    #[init]
    fn init(
        &self,
        pool_address: ManagedAddress,
        price_oracle_address: ManagedAddress,
        fee_interest_bps: u64,
        underlying_lt_bps: u64,
    ) {
        require!(!pool_address.is_zero(), ERROR_POOL_NOT_SET);
        require!(
            !price_oracle_address.is_zero(),
            ERROR_PRICE_AGGREGATOR_NOT_SET
        );

        let underlying = self.pool_asset(pool_address.clone()).get();
        self.underlying().set(&underlying);
        self.pool_address().set(&pool_address);
        self.price_oracle_address().set(&price_oracle_address);

        self.set_fee_interest(fee_interest_bps);
        self.set_collateral_token(underlying, underlying_lt_bps);

        let liquidation_config = LiquidationConfig {
            liquidation_premium_bps: DEFAULT_LIQUIDATION_PREMIUM_BPS,
            fee_liquidation_bps: DEFAULT_FEE_LIQUIDATION_BPS,
            liquidation_premium_expired_bps: DEFAULT_LIQUIDATION_PREMIUM_EXPIRED_BPS,
            fee_liquidation_expired_bps: DEFAULT_FEE_LIQUIDATION_EXPIRED_BPS,
        };
        self.liquidation_config().set(liquidation_config);
        self.max_enabled_tokens().set(DEFAULT_MAX_ENABLED_TOKENS);
        self.max_quota_multiplier().set(DEFAULT_MAX_QUOTA_MULTIPLIER);
        self.max_price_stale_seconds()
            .set(DEFAULT_MAX_PRICE_STALE_SECONDS);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Opens an account with `debt` borrowed from the pool and runs `calls` on it.
    ///
    /// # Arguments
    /// - `debt`: Initial principal. Zero opens a debt-free account.
    /// - `on_behalf_of`: Owner of the new account, the caller when omitted.
    /// - `calls`: Opening batch. `DecreaseDebt` is not allowed here.
    ///
    /// # Payment
    /// - Optional collateral, drawn by `AddCollateral` steps.
    ///
    /// # Returns
    /// - The id of the new account.
    #[payable]
    #[endpoint(openCreditAccount)]
    fn open_credit_account(
        &self,
        debt: BigUint,
        on_behalf_of: Option<ManagedAddress>,
        calls: MultiValueEncoded<BatchCall<Self::Api>>,
    ) -> u64 {
        self.require_not_paused();
        self.enter_batch();

        let caller = self.blockchain().get_caller();
        let owner = on_behalf_of.unwrap_or_else(|| caller.clone());
        require!(!owner.is_zero(), ERROR_ADDRESS_IS_ZERO);

        self.require_not_expired(self.blockchain().get_block_timestamp());
        self.consume_degen_allowance(&caller, &owner);

        let account_id = self.acquire_account_id(&owner);
        let mut cache = Cache::new(self, account_id, self.new_credit_account(&owner));
        self.open_debt(&mut cache, &debt);
        self.open_credit_account_event(account_id, &owner, &debt);

        let state = self.process_calls(&mut cache, &caller, calls, OWNER_PERMISSIONS, true);
        self.finish_batch(&mut cache, state);

        cache.commit();
        self.exit_batch();

        account_id
    }

    /// Runs `calls` without a health check, then closes the account.
    ///
    /// The account must be debt-free once the calls ran. The underlying and the
    /// tokens in `sweep_tokens` go to `recipient`, any other balance back to
    /// the owner.
    #[payable]
    #[endpoint(closeCreditAccount)]
    fn close_credit_account(
        &self,
        account_id: u64,
        recipient: ManagedAddress,
        sweep_tokens: ManagedVec<EgldOrEsdtTokenIdentifier>,
        calls: MultiValueEncoded<BatchCall<Self::Api>>,
    ) {
        self.require_not_paused();
        self.enter_batch();

        let caller = self.blockchain().get_caller();
        let mut cache = Cache::load(self, account_id);
        self.require_account_owner(&cache.account, &caller);
        self.require_not_too_young(&cache.account, cache.tick);

        self.process_calls(&mut cache, &caller, calls, OWNER_PERMISSIONS, false);
        self.close_position(&mut cache, &recipient, &sweep_tokens);

        cache.commit();
        self.exit_batch();
    }

    /// Liquidates an account whose health factor fell below 100%, or any
    /// account once the manager expired.
    ///
    /// Stays available while paused.
    ///
    /// # Payment
    /// - Optional underlying covering what the account lacks to pay the pool
    ///   and the owner's share.
    #[payable]
    #[endpoint(liquidateCreditAccount)]
    fn liquidate_credit_account(
        &self,
        account_id: u64,
        recipient: ManagedAddress,
        sweep_tokens: ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) {
        self.enter_batch();

        let mut cache = Cache::load(self, account_id);
        self.require_not_too_young(&cache.account, cache.tick);

        let liquidator = self.blockchain().get_caller();
        let payment = self.collect_payments_of(&cache.underlying);
        self.liquidate_position(&mut cache, &liquidator, &recipient, &sweep_tokens, &payment);

        cache.commit();
        self.exit_batch();
    }
}
