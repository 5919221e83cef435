multiversx_sc::imports!();

use common_constants::{ALL_BOT_PERMISSIONS, BPS, SET_BOT_PERMISSIONS_PERMISSION};
use common_errors::{
    ERROR_FORBIDDEN_TOKEN_BALANCE_INCREASED, ERROR_FORBIDDEN_TOKEN_ENABLED,
    ERROR_INVALID_HEALTH_FACTOR, ERROR_OPERATION_NOT_PERMITTED, ERROR_PERMISSION_DENIED,
};
use common_structs::BatchCall;

use crate::{adapters, bots, cache::Cache, collateral, oracle, positions, quotas, storage, validation};

/// Everything the account owner may do in a batch.
pub const OWNER_PERMISSIONS: u64 = ALL_BOT_PERMISSIONS | SET_BOT_PERMISSIONS_PERMISSION;

/// What the batch accumulated for its closing check.
pub struct BatchState<M: ManagedTypeApi> {
    pub hints: ManagedVec<M, EgldOrEsdtTokenIdentifier<M>>,
    pub min_health_factor: u64,
    pub external_called: bool,
    pub debt_increased: bool,
    pub debt_decreased: bool,
    /// Forbidden token balances when the batch started.
    pub forbidden_balances: ManagedVec<M, EgldOrEsdtTokenPayment<M>>,
}

#[multiversx_sc::module]
pub trait MulticallModule:
    storage::Storage
    + oracle::OracleModule
    + quotas::QuotaModule
    + collateral::CollateralModule
    + positions::account::PositionAccountModule
    + positions::assets::PositionAssetsModule
    + positions::debt::PositionDebtModule
    + adapters::AdaptersModule
    + bots::BotsModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Runs `calls` on an account of the caller, then checks its health once.
    ///
    /// # Payment
    /// - Optional tokens, drawn by `AddCollateral` steps. Anything left is refunded.
    #[payable]
    #[endpoint(multicall)]
    fn multicall(&self, account_id: u64, calls: MultiValueEncoded<BatchCall<Self::Api>>) {
        self.require_not_paused();
        self.enter_batch();

        let caller = self.blockchain().get_caller();
        let mut cache = Cache::load(self, account_id);
        self.require_account_owner(&cache.account, &caller);

        let state = self.process_calls(&mut cache, &caller, calls, OWNER_PERMISSIONS, false);
        self.finish_batch(&mut cache, state);

        cache.commit();
        self.exit_batch();
    }

    /// Same as `multicall`, for a bot acting within its grant on the account.
    #[payable]
    #[endpoint(botMulticall)]
    fn bot_multicall(&self, account_id: u64, calls: MultiValueEncoded<BatchCall<Self::Api>>) {
        self.require_not_paused();
        self.enter_batch();

        let caller = self.blockchain().get_caller();
        let mut cache = Cache::load(self, account_id);
        let permissions = self.require_bot_permissions(&cache, &caller);

        let state = self.process_calls(&mut cache, &caller, calls, permissions, false);
        self.finish_batch(&mut cache, state);

        cache.commit();
        self.exit_batch();
    }

    /// Dispatches every step in order against the checkpoint.
    ///
    /// Each step needs its permission bit in `permissions`. Debt can only move
    /// one way per batch, and never down in the opening batch.
    fn process_calls(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        calls: MultiValueEncoded<BatchCall<Self::Api>>,
        permissions: u64,
        is_opening: bool,
    ) -> BatchState<Self::Api> {
        self.start_multicall_event(cache.account_id, caller);

        let mut payments = (*self.call_value().all_transfers()).clone();
        let mut state = BatchState {
            hints: ManagedVec::new(),
            min_health_factor: BPS,
            external_called: false,
            debt_increased: false,
            debt_decreased: false,
            forbidden_balances: self.forbidden_balances(cache),
        };

        for call in calls.into_iter() {
            let required = call.required_permission();
            require!(permissions & required == required, ERROR_PERMISSION_DENIED);

            match call {
                BatchCall::AddCollateral(token, amount) => {
                    self.take_payment(&mut payments, &token, &amount);
                    self.add_collateral(cache, &token, &amount);
                },
                BatchCall::WithdrawCollateral(token, amount, to) => {
                    self.withdraw_collateral(cache, &token, &amount, &to);
                },
                BatchCall::IncreaseDebt(amount) => {
                    require!(!state.debt_decreased, ERROR_OPERATION_NOT_PERMITTED);
                    self.increase_debt(cache, &amount);
                    state.debt_increased = true;
                },
                BatchCall::DecreaseDebt(amount) => {
                    require!(
                        !is_opening && !state.debt_increased,
                        ERROR_OPERATION_NOT_PERMITTED
                    );
                    self.decrease_debt(cache, &amount);
                    state.debt_decreased = true;
                },
                BatchCall::UpdateQuota(token, change, min_quota) => {
                    let update = self.update_quota(cache, &token, &change, &min_quota);
                    if update.becomes_enabled {
                        self.enable_token(cache, &token);
                    }
                    if update.becomes_disabled {
                        self.disable_token(cache, &token);
                    }
                },
                BatchCall::EnableToken(token) => {
                    self.enable_token(cache, &token);
                },
                BatchCall::DisableToken(token) => {
                    self.disable_token(cache, &token);
                },
                BatchCall::SetBotPermissions(bot, bot_permissions) => {
                    self.apply_bot_permissions(cache, &bot, bot_permissions);
                },
                BatchCall::SetFullCheckParams(hints, min_health_factor) => {
                    require!(min_health_factor >= BPS, ERROR_INVALID_HEALTH_FACTOR);
                    state.hints = hints;
                    state.min_health_factor = min_health_factor;
                },
                BatchCall::ExternalCall(external_call) => {
                    self.execute_external_call(cache, &external_call);
                    state.external_called = true;
                },
            }
        }

        for payment in payments.iter() {
            cache.queue_transfer(caller, &payment.token_identifier, &payment.amount);
        }

        state
    }

    /// The one collateral check of the batch, followed by the forbidden token guard.
    fn finish_batch(&self, cache: &mut Cache<Self>, state: BatchState<Self::Api>) {
        let health_factor = self.full_collateral_check(
            cache,
            &state.hints,
            state.min_health_factor,
            state.external_called,
        );

        if state.debt_increased {
            for token in self.forbidden_tokens().iter() {
                require!(
                    !cache.account.enabled_tokens.contains(&token),
                    ERROR_FORBIDDEN_TOKEN_ENABLED
                );
            }
        }

        for before in state.forbidden_balances.iter() {
            require!(
                cache.balance(&before.token_identifier) <= before.amount,
                ERROR_FORBIDDEN_TOKEN_BALANCE_INCREASED
            );
        }

        self.finish_multicall_event(cache.account_id, health_factor);
    }

    fn forbidden_balances(&self, cache: &Cache<Self>) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let mut balances = ManagedVec::new();
        for token in self.forbidden_tokens().iter() {
            let amount = cache.balance(&token);
            balances.push(EgldOrEsdtTokenPayment::new(token, 0, amount));
        }
        balances
    }
}
