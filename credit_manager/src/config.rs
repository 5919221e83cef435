multiversx_sc::imports!();

use common_constants::{BPS, MAX_ENABLED_TOKENS_LIMIT, MAX_LIQUIDATION_PREMIUM_BPS};
use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_INVALID_FEE, ERROR_INVALID_LIQUIDATION_PARAMS,
    ERROR_INVALID_LIQUIDATION_THRESHOLD, ERROR_INVALID_MAX_ENABLED_TOKENS, ERROR_INVALID_RAMP,
    ERROR_TOKEN_ALREADY_QUOTED, ERROR_TOKEN_NOT_ALLOWED, ERROR_TOKEN_NOT_QUOTABLE,
};
use common_structs::{CollateralTokenConfig, LiquidationConfig, TokenQuotaParams};

use crate::{oracle, quotas, storage};

/// Owner configuration of the credit manager.
///
/// Covers the fee on interest and the liquidation payoff, collateral tokens
/// and their liquidation thresholds, quota tokens with their rates and limits,
/// forbidden tokens, allowed adapters and the global switches (degen mode,
/// expiration, debt increase kill switch).
///
/// Quota rate changes first move the token index to the current timestamp, so
/// interest accrued under the old rate stays owed.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + oracle::OracleModule
    + quotas::QuotaModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    #[only_owner]
    #[endpoint(setFeeInterest)]
    fn set_fee_interest(&self, fee_interest_bps: u64) {
        require!(fee_interest_bps <= BPS, ERROR_INVALID_FEE);
        self.fee_interest().set(fee_interest_bps);
    }

    #[only_owner]
    #[endpoint(setPriceOracleAddress)]
    fn set_price_oracle_address(&self, price_oracle_address: ManagedAddress) {
        require!(!price_oracle_address.is_zero(), ERROR_ADDRESS_IS_ZERO);
        self.price_oracle_address().set(price_oracle_address);
    }

    /// Liquidation payoff, as BPS of the collateral value: the liquidator keeps
    /// the premium and the protocol takes the fee.
    #[only_owner]
    #[endpoint(setLiquidationConfig)]
    fn set_liquidation_config(
        &self,
        liquidation_premium_bps: u64,
        fee_liquidation_bps: u64,
        liquidation_premium_expired_bps: u64,
        fee_liquidation_expired_bps: u64,
    ) {
        let config = LiquidationConfig {
            liquidation_premium_bps,
            fee_liquidation_bps,
            liquidation_premium_expired_bps,
            fee_liquidation_expired_bps,
        };
        self.validate_liquidation_config(&config);
        self.liquidation_config().set(config);
    }

    fn validate_liquidation_config(&self, config: &LiquidationConfig) {
        require!(
            config.liquidation_premium_bps <= MAX_LIQUIDATION_PREMIUM_BPS
                && config.liquidation_premium_expired_bps <= MAX_LIQUIDATION_PREMIUM_BPS,
            ERROR_INVALID_LIQUIDATION_PARAMS
        );
        require!(
            config.liquidation_premium_bps + config.fee_liquidation_bps < BPS
                && config.liquidation_premium_expired_bps + config.fee_liquidation_expired_bps < BPS,
            ERROR_INVALID_LIQUIDATION_PARAMS
        );
    }

    /// Adds or updates a collateral token with a fixed liquidation threshold.
    /// No token can be weighted above the underlying.
    #[only_owner]
    #[endpoint(setCollateralToken)]
    fn set_collateral_token(&self, token: EgldOrEsdtTokenIdentifier, lt_bps: u64) {
        require!(lt_bps > 0 && lt_bps <= BPS, ERROR_INVALID_LIQUIDATION_THRESHOLD);

        let underlying = self.underlying().get();
        if token != underlying {
            let underlying_lt = self.current_liquidation_threshold(&underlying);
            require!(lt_bps <= underlying_lt, ERROR_INVALID_LIQUIDATION_THRESHOLD);
        }

        let config = CollateralTokenConfig::fixed(lt_bps);
        self.collateral_tokens().insert(token.clone(), config.clone());
        self.update_collateral_token_event(&token, &config);
    }

    /// Moves the threshold of `token` linearly from its current value to
    /// `lt_final_bps`, starting at `ramp_start` over `ramp_duration` seconds.
    #[only_owner]
    #[endpoint(rampLiquidationThreshold)]
    fn ramp_liquidation_threshold(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        lt_final_bps: u64,
        ramp_start: u64,
        ramp_duration: u64,
    ) {
        require!(
            lt_final_bps > 0 && lt_final_bps <= BPS,
            ERROR_INVALID_LIQUIDATION_THRESHOLD
        );
        require!(
            ramp_duration > 0 && ramp_start >= self.blockchain().get_block_timestamp(),
            ERROR_INVALID_RAMP
        );

        let config = CollateralTokenConfig {
            lt_initial_bps: self.current_liquidation_threshold(&token),
            lt_final_bps,
            ramp_start,
            ramp_duration,
        };
        self.collateral_tokens().insert(token.clone(), config.clone());
        self.update_collateral_token_event(&token, &config);
    }

    fn current_liquidation_threshold(&self, token: &EgldOrEsdtTokenIdentifier) -> u64 {
        self.collateral_tokens()
            .get(token)
            .unwrap_or_else(|| sc_panic!(ERROR_TOKEN_NOT_ALLOWED))
            .liquidation_threshold(self.blockchain().get_block_timestamp())
    }

    /// Makes a collateral token quotable. Its quota index starts at one.
    #[only_owner]
    #[endpoint(addQuotaToken)]
    fn add_quota_token(&self, token: EgldOrEsdtTokenIdentifier, rate_bps: u64, limit: BigUint) {
        require!(
            self.collateral_tokens().contains_key(&token) && token != self.underlying().get(),
            ERROR_TOKEN_NOT_ALLOWED
        );
        require!(
            !self.quota_params().contains_key(&token),
            ERROR_TOKEN_ALREADY_QUOTED
        );

        let params = TokenQuotaParams {
            rate_bps,
            cumulative_index_lu: self.ray(),
            last_update: self.blockchain().get_block_timestamp(),
            total_quoted: BigUint::zero(),
            limit,
        };
        self.quota_params().insert(token.clone(), params.clone());
        self.update_quota_params_event(&token, &params);
    }

    #[only_owner]
    #[endpoint(setQuotaRate)]
    fn set_quota_rate(&self, token: EgldOrEsdtTokenIdentifier, rate_bps: u64) {
        let mut params = self.require_quota_params(&token);
        self.crystallize_quota_index(&mut params, self.blockchain().get_block_timestamp());
        params.rate_bps = rate_bps;

        self.quota_params().insert(token.clone(), params.clone());
        self.update_quota_params_event(&token, &params);
    }

    /// A limit below the quoted total blocks further increases without
    /// touching existing quotas.
    #[only_owner]
    #[endpoint(setQuotaLimit)]
    fn set_quota_limit(&self, token: EgldOrEsdtTokenIdentifier, limit: BigUint) {
        let mut params = self.require_quota_params(&token);
        params.limit = limit;

        self.quota_params().insert(token.clone(), params.clone());
        self.update_quota_params_event(&token, &params);
    }

    fn require_quota_params(&self, token: &EgldOrEsdtTokenIdentifier) -> TokenQuotaParams<Self::Api> {
        self.quota_params()
            .get(token)
            .unwrap_or_else(|| sc_panic!(ERROR_TOKEN_NOT_QUOTABLE))
    }

    #[only_owner]
    #[endpoint(addForbiddenTokens)]
    fn add_forbidden_tokens(&self, tokens: MultiValueEncoded<EgldOrEsdtTokenIdentifier>) {
        for token in tokens {
            self.forbidden_tokens().insert(token);
        }
    }

    #[only_owner]
    #[endpoint(removeForbiddenTokens)]
    fn remove_forbidden_tokens(&self, tokens: MultiValueEncoded<EgldOrEsdtTokenIdentifier>) {
        for token in tokens {
            self.forbidden_tokens().swap_remove(&token);
        }
    }

    #[only_owner]
    #[endpoint(setMaxEnabledTokens)]
    fn set_max_enabled_tokens(&self, max_enabled_tokens: usize) {
        require!(
            max_enabled_tokens > 0 && max_enabled_tokens <= MAX_ENABLED_TOKENS_LIMIT,
            ERROR_INVALID_MAX_ENABLED_TOKENS
        );
        self.max_enabled_tokens().set(max_enabled_tokens);
    }

    #[only_owner]
    #[endpoint(setMaxQuotaMultiplier)]
    fn set_max_quota_multiplier(&self, multiplier: u64) {
        self.max_quota_multiplier().set(multiplier);
    }

    #[only_owner]
    #[endpoint(setDegenMode)]
    fn set_degen_mode(&self, enabled: bool) {
        self.degen_mode().set(enabled);
    }

    #[only_owner]
    #[endpoint(setDegenAllowance)]
    fn set_degen_allowance(&self, owner: ManagedAddress, allowance: u64) {
        self.degen_allowance(&owner).set(allowance);
    }

    /// Zero disables expiration.
    #[only_owner]
    #[endpoint(setExpirationTimestamp)]
    fn set_expiration_timestamp(&self, timestamp: u64) {
        self.expiration_timestamp().set(timestamp);
    }

    #[only_owner]
    #[endpoint(setIncreaseDebtForbidden)]
    fn set_increase_debt_forbidden(&self, forbidden: bool) {
        self.increase_debt_forbidden().set(forbidden);
    }

    #[only_owner]
    #[endpoint(setMaxPriceStaleSeconds)]
    fn set_max_price_stale_seconds(&self, seconds: u64) {
        self.max_price_stale_seconds().set(seconds);
    }

    #[only_owner]
    #[endpoint(addAdapters)]
    fn add_adapters(&self, adapters: MultiValueEncoded<ManagedAddress>) {
        for adapter in adapters {
            require!(!adapter.is_zero(), ERROR_ADDRESS_IS_ZERO);
            self.allowed_adapters().insert(adapter);
        }
    }

    #[only_owner]
    #[endpoint(removeAdapters)]
    fn remove_adapters(&self, adapters: MultiValueEncoded<ManagedAddress>) {
        for adapter in adapters {
            self.allowed_adapters().swap_remove(&adapter);
        }
    }
}
