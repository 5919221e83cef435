use common_structs::{
    AccountQuota, CollateralTokenConfig, CreditAccount, DebtLimits, LiquidationConfig, PoolParams,
    PriceFeed, TokenQuotaParams,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Pool lending the underlying to every credit account.
    #[view(getPoolAddress)]
    #[storage_mapper("pool_address")]
    fn pool_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPriceOracleAddress)]
    #[storage_mapper("price_oracle_address")]
    fn price_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Asset borrowed from the pool. Always counted as collateral.
    #[view(getUnderlying)]
    #[storage_mapper("underlying")]
    fn underlying(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Protocol fee charged on top of interest, BPS.
    #[view(getFeeInterest)]
    #[storage_mapper("fee_interest")]
    fn fee_interest(&self) -> SingleValueMapper<u64>;

    #[view(getLiquidationConfig)]
    #[storage_mapper("liquidation_config")]
    fn liquidation_config(&self) -> SingleValueMapper<LiquidationConfig>;

    /// Tokens accepted as collateral, with their liquidation threshold schedule.
    #[view(getCollateralTokens)]
    #[storage_mapper("collateral_tokens")]
    fn collateral_tokens(&self) -> MapMapper<EgldOrEsdtTokenIdentifier, CollateralTokenConfig>;

    #[view(getQuotaParams)]
    #[storage_mapper("quota_params")]
    fn quota_params(&self) -> MapMapper<EgldOrEsdtTokenIdentifier, TokenQuotaParams<Self::Api>>;

    #[storage_mapper("account_quotas")]
    fn account_quotas(&self, account_id: u64) -> MapMapper<EgldOrEsdtTokenIdentifier, AccountQuota<Self::Api>>;

    /// Tokens that may be held but must not grow and block new debt while enabled.
    #[view(getForbiddenTokens)]
    #[storage_mapper("forbidden_tokens")]
    fn forbidden_tokens(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getMaxEnabledTokens)]
    #[storage_mapper("max_enabled_tokens")]
    fn max_enabled_tokens(&self) -> SingleValueMapper<usize>;

    /// `max_quota = debt * multiplier` for every quoted token.
    #[view(getMaxQuotaMultiplier)]
    #[storage_mapper("max_quota_multiplier")]
    fn max_quota_multiplier(&self) -> SingleValueMapper<u64>;

    #[view(isDegenMode)]
    #[storage_mapper("degen_mode")]
    fn degen_mode(&self) -> SingleValueMapper<bool>;

    /// Accounts an address may still open while degen mode is on.
    #[view(getDegenAllowance)]
    #[storage_mapper("degen_allowance")]
    fn degen_allowance(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Zero means the facade never expires.
    #[view(getExpirationTimestamp)]
    #[storage_mapper("expiration_timestamp")]
    fn expiration_timestamp(&self) -> SingleValueMapper<u64>;

    #[view(isIncreaseDebtForbidden)]
    #[storage_mapper("increase_debt_forbidden")]
    fn increase_debt_forbidden(&self) -> SingleValueMapper<bool>;

    #[view(getMaxPriceStaleSeconds)]
    #[storage_mapper("max_price_stale_seconds")]
    fn max_price_stale_seconds(&self) -> SingleValueMapper<u64>;

    #[view(getAllowedAdapters)]
    #[storage_mapper("allowed_adapters")]
    fn allowed_adapters(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("credit_accounts")]
    fn credit_accounts(&self, account_id: u64) -> SingleValueMapper<CreditAccount<Self::Api>>;

    #[view(getLastAccountId)]
    #[storage_mapper("last_account_id")]
    fn last_account_id(&self) -> SingleValueMapper<u64>;

    /// Released ids waiting to be reused.
    #[view(getFreeAccountIds)]
    #[storage_mapper("free_account_ids")]
    fn free_account_ids(&self) -> UnorderedSetMapper<u64>;

    #[storage_mapper("accounts_of")]
    fn accounts_of(&self, owner: &ManagedAddress) -> UnorderedSetMapper<u64>;

    /// Token ledger of an account. Zero balances are not stored.
    #[storage_mapper("balances")]
    fn balances(&self, account_id: u64) -> MapMapper<EgldOrEsdtTokenIdentifier, BigUint>;

    #[storage_mapper("bot_permissions")]
    fn bot_permissions(&self, account_id: u64) -> MapMapper<ManagedAddress, u64>;

    // Reentrancy guard
    #[view(isBatchOngoing)]
    #[storage_mapper("batch_ongoing")]
    fn batch_ongoing(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("last_borrow_tick")]
    fn last_borrow_tick(&self) -> SingleValueMapper<u64>;

    /// Debt taken in `last_borrow_tick`.
    #[storage_mapper("borrowed_in_tick")]
    fn borrowed_in_tick(&self) -> SingleValueMapper<BigUint>;

    /// POOL STORAGE ///
    #[storage_mapper_from_address("pool_asset")]
    fn pool_asset(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<EgldOrEsdtTokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("borrow_index")]
    fn pool_borrow_index(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("last_timestamp")]
    fn pool_last_timestamp(&self, pool_address: ManagedAddress) -> SingleValueMapper<u64, ManagedAddress>;

    #[storage_mapper_from_address("supplied")]
    fn pool_supplied(&self, pool_address: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("borrowed")]
    fn pool_borrowed(&self, pool_address: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("params")]
    fn pool_params(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<PoolParams<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("debt_limits")]
    fn pool_debt_limits(
        &self,
        pool_address: ManagedAddress,
    ) -> SingleValueMapper<DebtLimits<Self::Api>, ManagedAddress>;

    /// ORACLE STORAGE ///
    #[storage_mapper_from_address("prices")]
    fn oracle_prices(
        &self,
        oracle_address: ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("pause_module:paused")]
    fn oracle_paused_state(&self, oracle_address: ManagedAddress) -> SingleValueMapper<bool, ManagedAddress>;
}
