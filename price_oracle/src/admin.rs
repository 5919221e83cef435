multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule: crate::storage::StorageModule {
    #[only_owner]
    #[endpoint(addFeeders)]
    fn add_feeders(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.feeders();
        for feeder in feeders {
            let _ = mapper.insert(feeder);
        }
    }

    #[only_owner]
    #[endpoint(removeFeeders)]
    fn remove_feeders(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.feeders();
        for feeder in feeders {
            let _ = mapper.swap_remove(&feeder);
        }
    }
}
