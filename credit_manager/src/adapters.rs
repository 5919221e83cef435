multiversx_sc::imports!();

use common_errors::ERROR_ADAPTER_NOT_ALLOWED;
use common_structs::ExternalCall;

use crate::{cache::Cache, oracle, positions, storage};

#[multiversx_sc::module]
pub trait AdaptersModule:
    storage::Storage
    + oracle::OracleModule
    + positions::assets::PositionAssetsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Calls an allowed adapter for the checkpointed account.
    ///
    /// The account id goes first in the argument list, followed by the
    /// caller's arguments. `amount_in` of `token_in` leaves the account ledger
    /// with the call; everything the adapter sends back is credited to the
    /// same account.
    fn execute_external_call(&self, cache: &mut Cache<Self>, call: &ExternalCall<Self::Api>) {
        require!(
            self.allowed_adapters().contains(&call.adapter),
            ERROR_ADAPTER_NOT_ALLOWED
        );

        let mut args = ManagedArgBuffer::new();
        args.push_arg(cache.account_id);
        for arg in call.args.iter() {
            args.push_arg_raw((*arg).clone());
        }

        let back_transfers = if call.amount_in > 0u64 {
            cache.sub_balance(&call.token_in, &call.amount_in);
            self.tx()
                .to(&call.adapter)
                .raw_call(call.endpoint.clone())
                .arguments_raw(args)
                .egld_or_single_esdt(&call.token_in, 0, &call.amount_in)
                .returns(ReturnsBackTransfersLegacyReset)
                .sync_call()
        } else {
            self.tx()
                .to(&call.adapter)
                .raw_call(call.endpoint.clone())
                .arguments_raw(args)
                .returns(ReturnsBackTransfersLegacyReset)
                .sync_call()
        };

        if back_transfers.total_egld_amount > 0 {
            self.credit_received(
                cache,
                &EgldOrEsdtTokenIdentifier::egld(),
                &back_transfers.total_egld_amount,
            );
        }

        for esdt in back_transfers.esdt_payments.iter() {
            self.credit_received(
                cache,
                &EgldOrEsdtTokenIdentifier::esdt(esdt.token_identifier.clone()),
                &esdt.amount,
            );
        }

        self.execute_event(cache.account_id, &call.adapter, &call.endpoint);
    }
}
