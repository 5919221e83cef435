multiversx_sc::imports!();

use common_errors::ERROR_PRICE_NOT_FOUND;
use common_structs::PriceFeed;

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    #[view(getPrice)]
    fn get_price(&self, token: EgldOrEsdtTokenIdentifier) -> PriceFeed<Self::Api> {
        self.require_not_paused();

        let mapper = self.prices(&token);
        require!(!mapper.is_empty(), ERROR_PRICE_NOT_FOUND);

        mapper.get()
    }

    /// USD value (WAD) of a raw token amount.
    #[view(convertToUsd)]
    fn convert_to_usd(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        let feed = self.get_price(token);
        let unit = BigUint::from(10u64).pow(feed.decimals as u32);

        amount * feed.price / unit
    }

    /// Raw token amount worth `usd` (WAD).
    #[view(convertFromUsd)]
    fn convert_from_usd(&self, token: EgldOrEsdtTokenIdentifier, usd: BigUint) -> BigUint {
        let feed = self.get_price(token);
        let unit = BigUint::from(10u64).pow(feed.decimals as u32);

        usd * unit / feed.price
    }

    #[view(getFeeders)]
    fn get_feeders(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for feeder in self.feeders().iter() {
            result.push(feeder);
        }
        result
    }
}
