#![no_std]

multiversx_sc::imports!();

use common_proxies::proxy_credit_manager;
use common_structs::BatchCall;

/// Integration adapter used by the credit manager tests.
///
/// Every endpoint takes the credit account id as its first argument, the way
/// the credit manager forwards external calls.
#[multiversx_sc::contract]
pub trait AdapterMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Keeps the incoming tokens and pays `wanted_amount` of `wanted_token` back.
    /// The contract must be pre-funded with the wanted token.
    #[payable("*")]
    #[endpoint(swap)]
    fn swap(&self, account_id: u64, wanted_token: EgldOrEsdtTokenIdentifier, wanted_amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.last_account_id().set(account_id);

        let payment = EgldOrEsdtTokenPayment::new(wanted_token, 0, wanted_amount);
        self.tx().to(&caller).payment(payment).transfer_if_not_empty();
    }

    /// Returns part of the input to the caller and keeps the rest.
    #[payable("*")]
    #[endpoint(refundPart)]
    fn refund_part(&self, account_id: u64, refund_amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.last_account_id().set(account_id);

        let payment = self.call_value().egld_or_single_esdt();
        let refund = EgldOrEsdtTokenPayment::new(payment.token_identifier.clone(), 0, refund_amount);
        self.tx().to(&caller).payment(refund).transfer_if_not_empty();
    }

    /// Calls back into the credit manager while a batch is running.
    #[endpoint(reenter)]
    fn reenter(&self, account_id: u64) {
        let caller = self.blockchain().get_caller();
        let calls: MultiValueEncoded<BatchCall<Self::Api>> = MultiValueEncoded::new();

        self.tx()
            .to(&caller)
            .typed(proxy_credit_manager::CreditManagerProxy)
            .multicall(account_id, calls)
            .sync_call();
    }

    #[view(getLastAccountId)]
    #[storage_mapper("last_account_id")]
    fn last_account_id(&self) -> SingleValueMapper<u64>;
}
