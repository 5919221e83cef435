multiversx_sc::imports!();

use common_errors::{
    ERROR_PRICE_AGGREGATOR_NOT_SET, ERROR_PRICE_FEED_STALE, ERROR_PRICE_NOT_FOUND,
    ERROR_PRICE_ORACLE_PAUSED,
};
use common_structs::PriceFeed;

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Price of one whole token unit in USD (WAD), read from the oracle storage.
    /// Cached for the rest of the call.
    fn get_token_price(
        &self,
        token_id: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> PriceFeed<Self::Api> {
        if cache.prices_cache.contains(token_id) {
            return cache.prices_cache.get(token_id);
        }

        let feed = self.get_oracle_price_feed(
            token_id,
            &cache.oracle_address,
            cache.timestamp,
            cache.max_price_stale_seconds,
        );
        cache.prices_cache.put(token_id, &feed);

        feed
    }

    fn get_oracle_price_feed(
        &self,
        token_id: &EgldOrEsdtTokenIdentifier,
        oracle_address: &ManagedAddress,
        timestamp: u64,
        max_seconds_stale: u64,
    ) -> PriceFeed<Self::Api> {
        require!(!oracle_address.is_zero(), ERROR_PRICE_AGGREGATOR_NOT_SET);
        require!(
            !self.oracle_paused_state(oracle_address.clone()).get(),
            ERROR_PRICE_ORACLE_PAUSED
        );

        let mapper = self.oracle_prices(oracle_address.clone(), token_id);
        require!(!mapper.is_empty(), ERROR_PRICE_NOT_FOUND);

        let feed = mapper.get();
        // Zero disables the staleness check
        require!(
            max_seconds_stale == 0 || timestamp.saturating_sub(feed.timestamp) <= max_seconds_stale,
            ERROR_PRICE_FEED_STALE
        );

        feed
    }

    /// `amount * price / 10^decimals`, WAD USD.
    fn convert_to_usd(
        &self,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        if amount == &BigUint::zero() {
            return BigUint::zero();
        }

        let feed = self.get_token_price(token_id, cache);
        let unit = BigUint::from(10u64).pow(feed.decimals as u32);
        self.mul_div_floor(amount, &feed.price, &unit)
    }

    fn convert_from_usd(
        &self,
        token_id: &EgldOrEsdtTokenIdentifier,
        usd: &BigUint,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        if usd == &BigUint::zero() {
            return BigUint::zero();
        }

        let feed = self.get_token_price(token_id, cache);
        let unit = BigUint::from(10u64).pow(feed.decimals as u32);
        self.mul_div_floor(usd, &unit, &feed.price)
    }
}
