#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod storage;
pub mod views;

use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ONLY_FEEDER};
use common_structs::PriceFeed;

/// USD price book for the credit manager.
///
/// Feeders push one WAD price per token. Consumers read the `prices` storage
/// directly and apply their own staleness limit.
#[multiversx_sc::contract]
pub trait PriceOracle:
    multiversx_sc_modules::pause::PauseModule
    + common_events::EventsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
    #[init]
    fn init(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        self.add_feeders(feeders);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Stores the USD price of `token`, stamped with the current block timestamp.
    ///
    /// # Arguments
    /// - `price`: USD price of one whole token, WAD-based.
    /// - `decimals`: Decimals of the token, used to scale raw amounts.
    #[endpoint(setPrice)]
    fn set_price(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint, decimals: u8) {
        self.require_not_paused();
        self.require_is_feeder();

        self.set_price_unchecked(token, price, decimals);
    }

    #[endpoint(setPrices)]
    fn set_prices(
        &self,
        prices: MultiValueEncoded<MultiValue3<EgldOrEsdtTokenIdentifier, BigUint, u8>>,
    ) {
        self.require_not_paused();
        self.require_is_feeder();

        for (token, price, decimals) in prices.into_iter().map(|entry| entry.into_tuple()) {
            self.set_price_unchecked(token, price, decimals);
        }
    }

    fn set_price_unchecked(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint, decimals: u8) {
        require!(price > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let feed = PriceFeed {
            price,
            decimals,
            timestamp: self.blockchain().get_block_timestamp(),
        };
        self.prices(&token).set(&feed);
        self.update_price_event(&token, &feed);
    }

    fn require_is_feeder(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address() || self.feeders().contains(&caller),
            ERROR_ONLY_FEEDER
        );
    }
}
