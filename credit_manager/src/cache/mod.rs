use common_errors::{ERROR_INSUFFICIENT_BALANCE, ERROR_POSITION_NOT_FOUND};
use multiversx_sc::contract_base::ErrorHelper;
use common_proxies::proxy_pool;
use common_structs::{AccountQuota, CreditAccount, DebtLimits, PriceFeed, TokenQuotaParams};

multiversx_sc::imports!();

/// Base asset owed to the pool, settled once when the batch commits.
pub struct PoolRepayment<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub principal: BigUint<M>,
    pub interest: BigUint<M>,
    pub fee: BigUint<M>,
}

impl<M: ManagedTypeApi> PoolRepayment<M> {
    fn empty() -> Self {
        PoolRepayment {
            amount: BigUint::zero(),
            principal: BigUint::zero(),
            interest: BigUint::zero(),
            fee: BigUint::zero(),
        }
    }

    fn is_empty(&self) -> bool {
        self.amount == 0u64 && self.principal == 0u64
    }
}

/// Checkpoint of one credit account for the duration of a call.
///
/// Every ledger mutation of the batch lands here first: the account record,
/// its token balances and quotas, the touched token quota totals, the per-block
/// borrow counter, outgoing transfers and the pool repayment. Nothing reaches
/// storage until `commit`, which the orchestrator calls only after the final
/// collateral check passed. Dropping a cache without committing discards it.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    sc_ref: &'a C,

    pub timestamp: u64,
    pub tick: u64,
    pub underlying: EgldOrEsdtTokenIdentifier<C::Api>,
    pub pool_address: ManagedAddress<C::Api>,
    pub oracle_address: ManagedAddress<C::Api>,
    pub fee_interest_bps: u64,
    pub max_price_stale_seconds: u64,
    /// Pool base index as of this block.
    pub base_index: ManagedDecimal<C::Api, NumDecimals>,
    pub debt_limits: DebtLimits<C::Api>,
    pub borrowed_in_tick: BigUint<C::Api>,
    pub prices_cache: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, PriceFeed<C::Api>>,

    pub account_id: u64,
    pub account: CreditAccount<C::Api>,

    quota_params: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, TokenQuotaParams<C::Api>>,
    touched_quota_params: ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>>,
    balances: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, BigUint<C::Api>>,
    balance_tokens: ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>>,
    quotas: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, AccountQuota<C::Api>>,
    quota_tokens: ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>>,
    transfers: ManagedVec<C::Api, EgldOrEsdtTokenPayment<C::Api>>,
    transfer_recipients: ManagedVec<C::Api, ManagedAddress<C::Api>>,
    pool_repayment: PoolRepayment<C::Api>,
    released: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    /// Checkpoint of a fresh account that has no stored state yet.
    pub fn new(sc_ref: &'a C, account_id: u64, account: CreditAccount<C::Api>) -> Self {
        let pool_address = sc_ref.pool_address().get();
        let timestamp = sc_ref.blockchain().get_block_timestamp();
        let tick = sc_ref.blockchain().get_block_nonce();

        let base_index = sc_ref.simulate_borrow_index(
            &sc_ref.pool_borrow_index(pool_address.clone()).get(),
            sc_ref.pool_last_timestamp(pool_address.clone()).get(),
            timestamp,
            &sc_ref.pool_borrowed(pool_address.clone()).get(),
            &sc_ref.pool_supplied(pool_address.clone()).get(),
            sc_ref.pool_params(pool_address.clone()).get(),
        );

        let borrowed_in_tick = if sc_ref.last_borrow_tick().get() == tick {
            sc_ref.borrowed_in_tick().get()
        } else {
            BigUint::zero()
        };

        Cache {
            sc_ref,
            timestamp,
            tick,
            underlying: sc_ref.underlying().get(),
            debt_limits: sc_ref.pool_debt_limits(pool_address.clone()).get(),
            pool_address,
            oracle_address: sc_ref.price_oracle_address().get(),
            fee_interest_bps: sc_ref.fee_interest().get(),
            max_price_stale_seconds: sc_ref.max_price_stale_seconds().get(),
            base_index,
            borrowed_in_tick,
            prices_cache: ManagedMapEncoded::new(),
            account_id,
            account,
            quota_params: ManagedMapEncoded::new(),
            touched_quota_params: ManagedVec::new(),
            balances: ManagedMapEncoded::new(),
            balance_tokens: ManagedVec::new(),
            quotas: ManagedMapEncoded::new(),
            quota_tokens: ManagedVec::new(),
            transfers: ManagedVec::new(),
            transfer_recipients: ManagedVec::new(),
            pool_repayment: PoolRepayment::empty(),
            released: false,
        }
    }

    /// Checkpoint of a stored account, with its balances and quotas loaded.
    pub fn load(sc_ref: &'a C, account_id: u64) -> Self {
        let mapper = sc_ref.credit_accounts(account_id);
        if mapper.is_empty() {
            ErrorHelper::<C::Api>::signal_error_with_message(ERROR_POSITION_NOT_FOUND);
        }

        let mut cache = Self::new(sc_ref, account_id, mapper.get());
        for (token, amount) in sc_ref.balances(account_id).iter() {
            cache.balances.put(&token, &amount);
            cache.balance_tokens.push(token);
        }
        for (token, quota) in sc_ref.account_quotas(account_id).iter() {
            cache.quotas.put(&token, &quota);
            cache.quota_tokens.push(token);
        }

        cache
    }

    pub fn balance(&self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> BigUint<C::Api> {
        if self.balances.contains(token) {
            self.balances.get(token)
        } else {
            BigUint::zero()
        }
    }

    pub fn set_balance(&mut self, token: &EgldOrEsdtTokenIdentifier<C::Api>, amount: &BigUint<C::Api>) {
        if !self.balances.contains(token) {
            self.balance_tokens.push(token.clone());
        }
        self.balances.put(token, amount);
    }

    pub fn add_balance(&mut self, token: &EgldOrEsdtTokenIdentifier<C::Api>, amount: &BigUint<C::Api>) {
        let new_balance = self.balance(token) + amount;
        self.set_balance(token, &new_balance);
    }

    pub fn sub_balance(&mut self, token: &EgldOrEsdtTokenIdentifier<C::Api>, amount: &BigUint<C::Api>) {
        let current = self.balance(token);
        if !(&current >= amount) {
            ErrorHelper::<C::Api>::signal_error_with_message(ERROR_INSUFFICIENT_BALANCE);
        }
        self.set_balance(token, &(current - amount));
    }

    /// Every token the account has held during this call, zero balances included.
    pub fn balance_tokens(&self) -> ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>> {
        self.balance_tokens.clone()
    }

    pub fn get_quota_params(
        &mut self,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> Option<TokenQuotaParams<C::Api>> {
        if self.quota_params.contains(token) {
            return Some(self.quota_params.get(token));
        }

        let params = self.sc_ref.quota_params().get(token)?;
        self.quota_params.put(token, &params);
        Some(params)
    }

    pub fn set_quota_params(
        &mut self,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        params: &TokenQuotaParams<C::Api>,
    ) {
        if !self.touched_quota_params.iter().any(|t| &*t == token) {
            self.touched_quota_params.push(token.clone());
        }
        self.quota_params.put(token, params);
    }

    pub fn get_account_quota(&self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> Option<AccountQuota<C::Api>> {
        if self.quotas.contains(token) {
            Some(self.quotas.get(token))
        } else {
            None
        }
    }

    pub fn set_account_quota(&mut self, token: &EgldOrEsdtTokenIdentifier<C::Api>, quota: &AccountQuota<C::Api>) {
        if !self.quotas.contains(token) {
            self.quota_tokens.push(token.clone());
        }
        self.quotas.put(token, quota);
    }

    /// Tokens with a non-zero quota.
    pub fn quoted_tokens(&self) -> ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>> {
        let mut quoted = ManagedVec::new();
        for token in self.quota_tokens.iter() {
            if self.quotas.get(&token).quota > 0u64 {
                quoted.push((*token).clone());
            }
        }
        quoted
    }

    pub fn queue_transfer(
        &mut self,
        to: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) {
        if amount == &BigUint::zero() {
            return;
        }
        self.transfers
            .push(EgldOrEsdtTokenPayment::new(token.clone(), 0, amount.clone()));
        self.transfer_recipients.push(to.clone());
    }

    /// Adds to the single pool repayment settled on commit.
    pub fn queue_pool_repayment(
        &mut self,
        amount: &BigUint<C::Api>,
        principal: &BigUint<C::Api>,
        interest: &BigUint<C::Api>,
        fee: &BigUint<C::Api>,
    ) {
        self.pool_repayment.amount += amount;
        self.pool_repayment.principal += principal;
        self.pool_repayment.interest += interest;
        self.pool_repayment.fee += fee;
    }

    pub fn record_borrow(&mut self, amount: &BigUint<C::Api>) {
        self.borrowed_in_tick += amount;
    }

    /// The account record, balances and quotas are wiped on commit.
    pub fn release(&mut self) {
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Writes the checkpoint to storage, then settles the pool repayment and
    /// the queued transfers.
    pub fn commit(self) {
        let sc = self.sc_ref;
        let account_id = self.account_id;

        if self.released {
            sc.credit_accounts(account_id).clear();
            sc.balances(account_id).clear();
            sc.account_quotas(account_id).clear();
        } else {
            sc.credit_accounts(account_id).set(&self.account);

            let mut balances = sc.balances(account_id);
            for token in self.balance_tokens.iter() {
                let amount = self.balances.get(&token);
                if amount == 0u64 {
                    balances.remove(&token);
                } else {
                    balances.insert((*token).clone(), amount);
                }
            }

            let mut quotas = sc.account_quotas(account_id);
            for token in self.quota_tokens.iter() {
                let quota = self.quotas.get(&token);
                if quota.quota == 0u64 {
                    quotas.remove(&token);
                } else {
                    quotas.insert((*token).clone(), quota);
                }
            }
        }

        let mut params_mapper = sc.quota_params();
        for token in self.touched_quota_params.iter() {
            params_mapper.insert((*token).clone(), self.quota_params.get(&token));
        }

        if self.borrowed_in_tick > 0u64 {
            sc.last_borrow_tick().set(self.tick);
            sc.borrowed_in_tick().set(&self.borrowed_in_tick);
        }

        if !self.pool_repayment.is_empty() {
            let repayment = &self.pool_repayment;
            let call = sc
                .tx()
                .to(&self.pool_address)
                .typed(proxy_pool::CreditPoolProxy)
                .repay(&repayment.principal, &repayment.interest, &repayment.fee);
            // A total loss arrives without any payment
            if repayment.amount > 0u64 {
                call.egld_or_single_esdt(&self.underlying, 0, &repayment.amount)
                    .sync_call();
            } else {
                call.sync_call();
            }
        }

        for (payment, recipient) in self.transfers.iter().zip(self.transfer_recipients.iter()) {
            sc.tx()
                .to(&*recipient)
                .payment((*payment).clone())
                .transfer_if_not_empty();
        }
    }
}
