multiversx_sc::imports!();

use common_structs::PriceFeed;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Latest price per token. Read from other contracts by key, keep the name stable.
    #[storage_mapper("prices")]
    fn prices(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<PriceFeed<Self::Api>>;

    #[storage_mapper("feeders")]
    fn feeders(&self) -> UnorderedSetMapper<ManagedAddress>;
}
