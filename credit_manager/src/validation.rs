multiversx_sc::imports!();

use common_errors::{
    ERROR_FACADE_EXPIRED, ERROR_INVALID_PAYMENT, ERROR_POSITION_TOO_YOUNG, ERROR_REENTRANT_BATCH,
    ERROR_UNSPENT_PAYMENT_MISMATCH,
};
use common_structs::CreditAccount;

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_math::SharedMathModule {
    /// Marks a batch as running.
    ///
    /// # Errors
    /// - `ERROR_REENTRANT_BATCH`: If another batch is already running, which
    ///   only happens when an adapter calls back into this contract.
    fn enter_batch(&self) {
        let ongoing = self.batch_ongoing();
        require!(!ongoing.get(), ERROR_REENTRANT_BATCH);
        ongoing.set(true);
    }

    fn exit_batch(&self) {
        self.batch_ongoing().set(false);
    }

    fn require_not_in_batch(&self) {
        require!(!self.batch_ongoing().get(), ERROR_REENTRANT_BATCH);
    }

    /// Zero expiration means the facade never expires.
    fn is_expired(&self, timestamp: u64) -> bool {
        let expiration = self.expiration_timestamp().get();
        expiration != 0 && timestamp >= expiration
    }

    fn require_not_expired(&self, timestamp: u64) {
        require!(!self.is_expired(timestamp), ERROR_FACADE_EXPIRED);
    }

    /// Closing needs at least one block between opening and closing.
    fn require_not_too_young(&self, account: &CreditAccount<Self::Api>, tick: u64) {
        require!(account.since < tick, ERROR_POSITION_TOO_YOUNG);
    }

    /// Sum of the payments of `token` attached to the call.
    ///
    /// # Errors
    /// - `ERROR_INVALID_PAYMENT`: If any payment is of another token.
    fn collect_payments_of(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let mut total = BigUint::zero();
        for payment in self.call_value().all_transfers().iter() {
            require!(
                &payment.token_identifier == token && payment.token_nonce == 0,
                ERROR_INVALID_PAYMENT
            );
            total += &payment.amount;
        }
        total
    }

    /// Takes `amount` of `token` out of the not yet used payments of the call.
    ///
    /// # Errors
    /// - `ERROR_UNSPENT_PAYMENT_MISMATCH`: If the payments do not cover `amount`.
    fn take_payment(
        &self,
        payments: &mut ManagedVec<EgldOrEsdtTokenPayment>,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        let mut remaining = amount.clone();
        let mut rest = ManagedVec::new();

        for payment in payments.iter() {
            let matches = &payment.token_identifier == token && payment.token_nonce == 0;
            if !matches || remaining == 0u64 {
                rest.push((*payment).clone());
                continue;
            }

            let taken = self.get_min(remaining.clone(), payment.amount.clone());
            remaining -= &taken;
            let left = &payment.amount - &taken;
            if left > 0u64 {
                rest.push(EgldOrEsdtTokenPayment::new(token.clone(), 0, left));
            }
        }

        require!(remaining == 0u64, ERROR_UNSPENT_PAYMENT_MISMATCH);
        *payments = rest;
    }
}
