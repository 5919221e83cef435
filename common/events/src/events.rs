#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("open_credit_account")]
    fn open_credit_account_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] debt: &BigUint,
    );

    #[event("close_credit_account")]
    fn close_credit_account_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
    );

    // `remaining_funds` goes back to the owner, `loss` is written off by the pool
    #[event("liquidate_credit_account")]
    fn liquidate_credit_account_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] action: ClosureAction,
        #[indexed] amount_to_pool: &BigUint,
        #[indexed] remaining_funds: &BigUint,
        #[indexed] loss: &BigUint,
    );

    #[event("increase_debt")]
    fn increase_debt_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] amount: &BigUint,
        #[indexed] new_debt: &BigUint,
    );

    #[event("decrease_debt")]
    fn decrease_debt_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] principal: &BigUint,
        #[indexed] interest: &BigUint,
        #[indexed] fee: &BigUint,
        #[indexed] new_debt: &BigUint,
    );

    #[event("add_collateral")]
    fn add_collateral_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("withdraw_collateral")]
    fn withdraw_collateral_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] to: &ManagedAddress,
    );

    #[event("update_quota")]
    fn update_quota_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] realized_change: &BigInt,
        #[indexed] unmet: &BigUint,
    );

    #[event("enable_token")]
    fn enable_token_event(&self, #[indexed] account_id: u64, #[indexed] token: &EgldOrEsdtTokenIdentifier);

    #[event("disable_token")]
    fn disable_token_event(&self, #[indexed] account_id: u64, #[indexed] token: &EgldOrEsdtTokenIdentifier);

    #[event("execute")]
    fn execute_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] adapter: &ManagedAddress,
        #[indexed] endpoint: &ManagedBuffer,
    );

    #[event("set_bot_permissions")]
    fn set_bot_permissions_event(
        &self,
        #[indexed] account_id: u64,
        #[indexed] bot: &ManagedAddress,
        #[indexed] permissions: u64,
    );

    #[event("start_multicall")]
    fn start_multicall_event(&self, #[indexed] account_id: u64, #[indexed] caller: &ManagedAddress);

    #[event("finish_multicall")]
    fn finish_multicall_event(&self, #[indexed] account_id: u64, #[indexed] health_factor: u64);

    #[event("freeze_quota_limit")]
    fn freeze_quota_limit_event(&self, #[indexed] token: &EgldOrEsdtTokenIdentifier);

    #[event("update_quota_params")]
    fn update_quota_params_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] params: &TokenQuotaParams<Self::Api>,
    );

    #[event("update_collateral_token")]
    fn update_collateral_token_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] config: &CollateralTokenConfig,
    );

    #[event("update_pool_state")]
    fn update_pool_state_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] borrow_index: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] supplied: &BigUint,
        #[indexed] borrowed: &BigUint,
        #[indexed] revenue: &BigUint,
        #[indexed] bad_debt: &BigUint,
    );

    #[event("pool_borrow")]
    fn pool_borrow_event(&self, #[indexed] credit_manager: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("pool_repay")]
    fn pool_repay_event(
        &self,
        #[indexed] credit_manager: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] to_lenders: &BigUint,
        #[indexed] to_treasury: &BigUint,
        #[indexed] loss: &BigUint,
    );

    #[event("update_price")]
    fn update_price_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] feed: &PriceFeed<Self::Api>,
    );
}
