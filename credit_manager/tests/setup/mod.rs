#![allow(dead_code)]

use crate::constants::*;

use common_constants::REPAY_ALL;
use common_proxies::{proxy_adapter_mock, proxy_credit_manager, proxy_pool, proxy_price_oracle};
use common_structs::{
    AccountQuota, BatchCall, CollateralCalcTask, CollateralDebtData, CreditAccount, ExternalCall,
    PriceFeed, TokenQuotaParams,
};
use multiversx_sc::{
    imports::MultiValue3,
    types::{
        BigInt, BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress,
        ManagedArgBuffer, ManagedBuffer, ManagedVec, MultiValueEncoded, ReturnsNewManagedAddress,
        ReturnsResult, Sign, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub const ALL_TOKENS: [(TestTokenIdentifier, usize); 4] = [
    (USDC_TOKEN, USDC_DECIMALS),
    (WETH_TOKEN, WETH_DECIMALS),
    (WBTC_TOKEN, WBTC_DECIMALS),
    (MEME_TOKEN, MEME_DECIMALS),
];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CREDIT_MANAGER_PATH, credit_manager::ContractBuilder);
    blockchain.register_contract(CREDIT_POOL_PATH, credit_pool::ContractBuilder);
    blockchain.register_contract(PRICE_ORACLE_PATH, price_oracle::ContractBuilder);
    blockchain.register_contract(ADAPTER_MOCK_PATH, adapter_mock::ContractBuilder);

    blockchain
}

pub struct CreditManagerTestState {
    pub world: ScenarioWorld,
    pub credit_manager: ManagedAddress<StaticApi>,
    pub pool: ManagedAddress<StaticApi>,
    pub oracle: ManagedAddress<StaticApi>,
    pub adapter: ManagedAddress<StaticApi>,
    pub block_nonce: u64,
    pub block_timestamp: u64,
}

impl Default for CreditManagerTestState {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditManagerTestState {
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_nonce(1).block_timestamp(0);

        setup_accounts(&mut world);

        let oracle = setup_price_oracle(&mut world);
        let pool = setup_pool(&mut world);
        let credit_manager = setup_credit_manager(&mut world, &pool, &oracle);
        let adapter = setup_adapter(&mut world, &credit_manager);

        let mut state = Self {
            world,
            credit_manager,
            pool,
            oracle,
            adapter,
            block_nonce: 1,
            block_timestamp: 0,
        };
        state.deposit(&LENDER_ADDRESS, usdc(LENDER_DEPOSIT));

        state
    }

    // Chain time

    /// Moves to the next block, `seconds` later, and refreshes every price.
    pub fn advance(&mut self, seconds: u64) {
        self.advance_without_prices(seconds);
        self.refresh_prices();
    }

    pub fn advance_without_prices(&mut self, seconds: u64) {
        self.block_nonce += 1;
        self.block_timestamp += seconds;
        self.world
            .current_block()
            .block_nonce(self.block_nonce)
            .block_timestamp(self.block_timestamp);
    }

    pub fn refresh_prices(&mut self) {
        let mut prices = MultiValueEncoded::new();
        for (token_id, _) in ALL_TOKENS {
            let feed = self.price_feed(token_id);
            prices.push(MultiValue3::from((token(token_id), feed.price, feed.decimals)));
        }

        self.world
            .tx()
            .from(FEEDER_ADDRESS)
            .to(self.oracle.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_prices(prices)
            .run();
    }

    /// Sets the USD price of one whole token.
    pub fn set_price(&mut self, token_id: TestTokenIdentifier, dollars: u64, decimals: usize) {
        self.set_price_raw(token_id, BigUint::from(dollars) * BigUint::from(WAD), decimals);
    }

    pub fn set_price_raw(
        &mut self,
        token_id: TestTokenIdentifier,
        price: BigUint<StaticApi>,
        decimals: usize,
    ) {
        self.world
            .tx()
            .from(FEEDER_ADDRESS)
            .to(self.oracle.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(token(token_id), price, decimals as u8)
            .run();
    }

    pub fn pause_oracle(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.oracle.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .pause_endpoint()
            .run();
    }

    // Pool

    pub fn deposit(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool.clone())
            .typed(proxy_pool::CreditPoolProxy)
            .deposit()
            .esdt(EsdtTokenPayment::new(USDC_TOKEN.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn set_max_debt_per_block_multiplier(&mut self, multiplier: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool.clone())
            .typed(proxy_pool::CreditPoolProxy)
            .set_max_debt_per_block_multiplier(multiplier)
            .run();
    }

    pub fn pool_borrowed(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.pool.clone())
            .typed(proxy_pool::CreditPoolProxy)
            .borrowed()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_supplied(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.pool.clone())
            .typed(proxy_pool::CreditPoolProxy)
            .supplied()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_revenue(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.pool.clone())
            .typed(proxy_pool::CreditPoolProxy)
            .revenue()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_bad_debt(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.pool.clone())
            .typed(proxy_pool::CreditPoolProxy)
            .bad_debt()
            .returns(ReturnsResult)
            .run()
    }

    // Credit manager administration

    pub fn set_quota_limit(&mut self, token_id: TestTokenIdentifier, limit: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_quota_limit(token(token_id), limit)
            .run();
    }

    pub fn add_forbidden_token(&mut self, token_id: TestTokenIdentifier) {
        let mut tokens = MultiValueEncoded::new();
        tokens.push(token(token_id));

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .add_forbidden_tokens(tokens)
            .run();
    }

    pub fn set_degen_mode(&mut self, enabled: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_degen_mode(enabled)
            .run();
    }

    pub fn set_degen_allowance(&mut self, owner: &TestAddress, allowance: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_degen_allowance(owner.to_managed_address(), allowance)
            .run();
    }

    pub fn set_expiration_timestamp(&mut self, timestamp: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_expiration_timestamp(timestamp)
            .run();
    }

    pub fn set_increase_debt_forbidden(&mut self, forbidden: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_increase_debt_forbidden(forbidden)
            .run();
    }

    pub fn set_max_enabled_tokens(&mut self, max_enabled_tokens: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_max_enabled_tokens(max_enabled_tokens)
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .pause_endpoint()
            .run();
    }

    // Batches

    pub fn open_account(
        &mut self,
        from: &TestAddress,
        debt: BigUint<StaticApi>,
        payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
        calls: Vec<BatchCall<StaticApi>>,
    ) -> u64 {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .open_credit_account(debt, None::<ManagedAddress<StaticApi>>, batch(calls))
            .multi_esdt(esdt_payments(payments))
            .returns(ReturnsResult)
            .run()
    }

    pub fn open_account_on_behalf(
        &mut self,
        from: &TestAddress,
        owner: &TestAddress,
        debt: BigUint<StaticApi>,
        payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
        calls: Vec<BatchCall<StaticApi>>,
    ) -> u64 {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .open_credit_account(debt, Some(owner.to_managed_address()), batch(calls))
            .multi_esdt(esdt_payments(payments))
            .returns(ReturnsResult)
            .run()
    }

    pub fn open_account_on_behalf_error(
        &mut self,
        from: &TestAddress,
        owner: &TestAddress,
        debt: BigUint<StaticApi>,
        payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
        calls: Vec<BatchCall<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .open_credit_account(debt, Some(owner.to_managed_address()), batch(calls))
            .multi_esdt(esdt_payments(payments))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn open_account_error(
        &mut self,
        from: &TestAddress,
        debt: BigUint<StaticApi>,
        payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
        calls: Vec<BatchCall<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .open_credit_account(debt, None::<ManagedAddress<StaticApi>>, batch(calls))
            .multi_esdt(esdt_payments(payments))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn multicall(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
        calls: Vec<BatchCall<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .multicall(account_id, batch(calls))
            .multi_esdt(esdt_payments(payments))
            .run();
    }

    pub fn multicall_error(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
        calls: Vec<BatchCall<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .multicall(account_id, batch(calls))
            .multi_esdt(esdt_payments(payments))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn bot_multicall(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
        calls: Vec<BatchCall<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .bot_multicall(account_id, batch(calls))
            .multi_esdt(esdt_payments(payments))
            .run();
    }

    pub fn bot_multicall_error(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        calls: Vec<BatchCall<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .bot_multicall(account_id, batch(calls))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_bot_permissions(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        bot: &TestAddress,
        permissions: u64,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_bot_permissions(account_id, bot.to_managed_address(), permissions)
            .run();
    }

    pub fn set_bot_permissions_error(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        bot: &TestAddress,
        permissions: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_bot_permissions(account_id, bot.to_managed_address(), permissions)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn close_account(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        recipient: &TestAddress,
        sweep_tokens: Vec<TestTokenIdentifier>,
        calls: Vec<BatchCall<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .close_credit_account(
                account_id,
                recipient.to_managed_address(),
                token_list(sweep_tokens),
                batch(calls),
            )
            .run();
    }

    pub fn close_account_error(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        calls: Vec<BatchCall<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .close_credit_account(
                account_id,
                from.to_managed_address(),
                ManagedVec::<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>>::new(),
                batch(calls),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn liquidate(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        sweep_tokens: Vec<TestTokenIdentifier>,
        payment: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .liquidate_credit_account(
                account_id,
                from.to_managed_address(),
                token_list(sweep_tokens),
            )
            .multi_esdt(liquidation_payment(payment))
            .run();
    }

    pub fn liquidate_error(
        &mut self,
        from: &TestAddress,
        account_id: u64,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .liquidate_credit_account(
                account_id,
                from.to_managed_address(),
                ManagedVec::<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>>::new(),
            )
            .multi_esdt(liquidation_payment(payment))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Views

    pub fn credit_account(&mut self, account_id: u64) -> CreditAccount<StaticApi> {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_credit_account(account_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn debt_data(
        &mut self,
        account_id: u64,
        task: CollateralCalcTask,
    ) -> CollateralDebtData<StaticApi> {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .calc_debt_and_collateral(account_id, task)
            .returns(ReturnsResult)
            .run()
    }

    pub fn health_factor(&mut self, account_id: u64) -> u64 {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_health_factor(account_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_liquidatable(&mut self, account_id: u64) -> bool {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .is_liquidatable(account_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_debt(&mut self, account_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_total_debt(account_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn account_balance(
        &mut self,
        account_id: u64,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let balances = self
            .world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_account_balances(account_id)
            .returns(ReturnsResult)
            .run();

        let wanted = token(token_id);
        for entry in balances.into_iter() {
            let (balance_token, amount) = entry.into_tuple();
            if balance_token == wanted {
                return amount;
            }
        }
        BigUint::zero()
    }

    pub fn account_quota(
        &mut self,
        account_id: u64,
        token_id: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        self.account_quota_entry(account_id, token_id)
            .map(|pair| pair.quota)
            .unwrap_or_else(BigUint::zero)
    }

    pub fn account_quota_entry(
        &mut self,
        account_id: u64,
        token_id: TestTokenIdentifier,
    ) -> Option<AccountQuota<StaticApi>> {
        let quotas = self
            .world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_account_quotas(account_id)
            .returns(ReturnsResult)
            .run();

        let wanted = token(token_id);
        quotas
            .into_iter()
            .map(|entry| entry.into_tuple())
            .find(|(quota_token, _)| *quota_token == wanted)
            .map(|(_, pair)| pair)
    }

    pub fn token_quota_params(&mut self, token_id: TestTokenIdentifier) -> TokenQuotaParams<StaticApi> {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_token_quota_params(token(token_id))
            .returns(ReturnsResult)
            .run()
    }

    pub fn accounts_of(&mut self, owner: &TestAddress) -> Vec<u64> {
        let accounts = self
            .world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_accounts_of(owner.to_managed_address())
            .returns(ReturnsResult)
            .run();

        accounts.into_iter().collect()
    }

    pub fn bot_permissions(&mut self, account_id: u64, bot: &TestAddress) -> u64 {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .get_bot_permissions(account_id, bot.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_increase_debt_forbidden(&mut self) -> bool {
        self.world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .increase_debt_forbidden()
            .returns(ReturnsResult)
            .run()
    }

    pub fn free_account_ids(&mut self) -> Vec<u64> {
        let ids = self
            .world
            .query()
            .to(self.credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .free_account_ids()
            .returns(ReturnsResult)
            .run();

        ids.into_iter().collect()
    }

    pub fn price_feed(&mut self, token_id: TestTokenIdentifier) -> PriceFeed<StaticApi> {
        self.world
            .query()
            .to(self.oracle.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price(token(token_id))
            .returns(ReturnsResult)
            .run()
    }

    /// Sum of the ledger balances of `token_id` across `accounts`.
    pub fn ledger_total(&mut self, accounts: &[u64], token_id: TestTokenIdentifier) -> BigUint<StaticApi> {
        let mut total = BigUint::zero();
        for account_id in accounts {
            total += self.account_balance(*account_id, token_id);
        }
        total
    }

    pub fn check_balance(
        &mut self,
        address: TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world.check_account(address).esdt_balance(token_id, amount);
    }

    pub fn check_credit_manager_balance(
        &mut self,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .check_account(self.credit_manager.clone())
            .esdt_balance(token_id, amount);
    }
}

// Amounts

pub fn units(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn usdc(amount: u64) -> BigUint<StaticApi> {
    units(amount, USDC_DECIMALS)
}

pub fn weth(amount: u64) -> BigUint<StaticApi> {
    units(amount, WETH_DECIMALS)
}

pub fn wbtc(amount: u64) -> BigUint<StaticApi> {
    units(amount, WBTC_DECIMALS)
}

pub fn token(token_id: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier())
}

pub fn token_list(tokens: Vec<TestTokenIdentifier>) -> ManagedVec<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>> {
    let mut list = ManagedVec::new();
    for token_id in tokens {
        list.push(token(token_id));
    }
    list
}

pub fn esdt_payments(
    payments: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
) -> ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> {
    let mut vec = ManagedVec::new();
    for (token_id, amount) in payments {
        vec.push(EsdtTokenPayment::new(token_id.to_token_identifier(), 0, amount));
    }
    vec
}

pub fn liquidation_payment(amount: BigUint<StaticApi>) -> ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> {
    if amount == 0u64 {
        return ManagedVec::new();
    }
    esdt_payments(vec![(USDC_TOKEN, amount)])
}

// Batch steps

pub fn batch(calls: Vec<BatchCall<StaticApi>>) -> MultiValueEncoded<StaticApi, BatchCall<StaticApi>> {
    let mut encoded = MultiValueEncoded::new();
    for call in calls {
        encoded.push(call);
    }
    encoded
}

pub fn add_collateral(token_id: TestTokenIdentifier, amount: BigUint<StaticApi>) -> BatchCall<StaticApi> {
    BatchCall::AddCollateral(token(token_id), amount)
}

pub fn withdraw_collateral(
    token_id: TestTokenIdentifier,
    amount: BigUint<StaticApi>,
    to: &TestAddress,
) -> BatchCall<StaticApi> {
    BatchCall::WithdrawCollateral(token(token_id), amount, to.to_managed_address())
}

pub fn increase_debt(amount: BigUint<StaticApi>) -> BatchCall<StaticApi> {
    BatchCall::IncreaseDebt(amount)
}

pub fn decrease_debt(amount: BigUint<StaticApi>) -> BatchCall<StaticApi> {
    BatchCall::DecreaseDebt(amount)
}

pub fn repay_all() -> BatchCall<StaticApi> {
    BatchCall::DecreaseDebt(BigUint::from(REPAY_ALL))
}

pub fn raise_quota(token_id: TestTokenIdentifier, amount: BigUint<StaticApi>) -> BatchCall<StaticApi> {
    BatchCall::UpdateQuota(
        token(token_id),
        BigInt::from_biguint(Sign::Plus, amount),
        BigUint::zero(),
    )
}

pub fn raise_quota_at_least(
    token_id: TestTokenIdentifier,
    amount: BigUint<StaticApi>,
    min_quota: BigUint<StaticApi>,
) -> BatchCall<StaticApi> {
    BatchCall::UpdateQuota(
        token(token_id),
        BigInt::from_biguint(Sign::Plus, amount),
        min_quota,
    )
}

pub fn lower_quota(token_id: TestTokenIdentifier, amount: BigUint<StaticApi>) -> BatchCall<StaticApi> {
    BatchCall::UpdateQuota(
        token(token_id),
        BigInt::from_biguint(Sign::Minus, amount),
        BigUint::zero(),
    )
}

pub fn touch_quota(token_id: TestTokenIdentifier) -> BatchCall<StaticApi> {
    BatchCall::UpdateQuota(token(token_id), BigInt::zero(), BigUint::zero())
}

pub fn enable_token(token_id: TestTokenIdentifier) -> BatchCall<StaticApi> {
    BatchCall::EnableToken(token(token_id))
}

pub fn disable_token(token_id: TestTokenIdentifier) -> BatchCall<StaticApi> {
    BatchCall::DisableToken(token(token_id))
}

pub fn bot_grant(bot: &TestAddress, permissions: u64) -> BatchCall<StaticApi> {
    BatchCall::SetBotPermissions(bot.to_managed_address(), permissions)
}

pub fn full_check_params(hints: Vec<TestTokenIdentifier>, min_health_factor: u64) -> BatchCall<StaticApi> {
    BatchCall::SetFullCheckParams(token_list(hints), min_health_factor)
}

/// Swaps `amount_in` of `token_in` through the adapter for `amount_out` of `token_out`.
pub fn swap_call(
    adapter: &ManagedAddress<StaticApi>,
    token_in: TestTokenIdentifier,
    amount_in: BigUint<StaticApi>,
    token_out: TestTokenIdentifier,
    amount_out: BigUint<StaticApi>,
) -> BatchCall<StaticApi> {
    let mut args = ManagedArgBuffer::<StaticApi>::new();
    args.push_arg(token(token_out));
    args.push_arg(amount_out);

    BatchCall::ExternalCall(ExternalCall {
        adapter: adapter.clone(),
        endpoint: ManagedBuffer::from("swap"),
        token_in: token(token_in),
        amount_in,
        args: args.into_vec_of_buffers(),
    })
}

pub fn reenter_call(adapter: &ManagedAddress<StaticApi>) -> BatchCall<StaticApi> {
    BatchCall::ExternalCall(ExternalCall {
        adapter: adapter.clone(),
        endpoint: ManagedBuffer::from("reenter"),
        token_in: token(USDC_TOKEN),
        amount_in: BigUint::zero(),
        args: ManagedVec::new(),
    })
}

// Deployment

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(1_000_000))
        .esdt_balance(WETH_TOKEN, weth(1_000));

    world
        .account(LENDER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(LENDER_DEPOSIT));

    world
        .account(BORROWER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(1_000_000))
        .esdt_balance(WETH_TOKEN, weth(1_000))
        .esdt_balance(WBTC_TOKEN, wbtc(100))
        .esdt_balance(MEME_TOKEN, units(1_000, MEME_DECIMALS));

    world
        .account(OTHER_BORROWER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(1_000_000));

    world
        .account(LIQUIDATOR_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(2_000_000));

    world
        .account(BOT_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(100_000));

    world.account(FEEDER_ADDRESS).nonce(1);
}

pub fn setup_price_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let mut feeders = MultiValueEncoded::new();
    feeders.push(FEEDER_ADDRESS.to_managed_address());

    let oracle = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_oracle::PriceOracleProxy)
        .init(feeders)
        .code(PRICE_ORACLE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    let prices = [
        (USDC_TOKEN, USDC_PRICE_IN_DOLLARS, USDC_DECIMALS),
        (WETH_TOKEN, WETH_PRICE_IN_DOLLARS, WETH_DECIMALS),
        (WBTC_TOKEN, WBTC_PRICE_IN_DOLLARS, WBTC_DECIMALS),
        (MEME_TOKEN, MEME_PRICE_IN_DOLLARS, MEME_DECIMALS),
    ];
    for (token_id, dollars, decimals) in prices {
        world
            .tx()
            .from(FEEDER_ADDRESS)
            .to(oracle.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(
                token(token_id),
                BigUint::from(dollars) * BigUint::from(WAD),
                decimals as u8,
            )
            .run();
    }

    oracle
}

pub fn setup_pool(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_pool::CreditPoolProxy)
        .init(
            token(USDC_TOKEN),
            BigUint::from(R_MAX),
            BigUint::from(R_BASE),
            BigUint::from(R_SLOPE1),
            BigUint::from(R_SLOPE2),
            BigUint::from(R_SLOPE3),
            BigUint::from(U_MID),
            BigUint::from(U_OPTIMAL),
            BigUint::from(RESERVE_FACTOR),
            usdc(MIN_DEBT),
            usdc(MAX_DEBT),
            MAX_DEBT_PER_BLOCK_MULTIPLIER,
        )
        .code(CREDIT_POOL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_credit_manager(
    world: &mut ScenarioWorld,
    pool: &ManagedAddress<StaticApi>,
    oracle: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let credit_manager = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_credit_manager::CreditManagerProxy)
        .init(pool.clone(), oracle.clone(), FEE_INTEREST_BPS, USDC_LT_BPS)
        .code(CREDIT_MANAGER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(pool.clone())
        .typed(proxy_pool::CreditPoolProxy)
        .set_credit_manager(credit_manager.clone())
        .run();

    for (token_id, lt_bps) in [(WETH_TOKEN, WETH_LT_BPS), (WBTC_TOKEN, WBTC_LT_BPS)] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(credit_manager.clone())
            .typed(proxy_credit_manager::CreditManagerProxy)
            .set_collateral_token(token(token_id), lt_bps)
            .run();
    }

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(credit_manager.clone())
        .typed(proxy_credit_manager::CreditManagerProxy)
        .add_quota_token(token(WETH_TOKEN), WETH_QUOTA_RATE_BPS, usdc(WETH_QUOTA_LIMIT))
        .run();

    credit_manager
}

pub fn setup_adapter(
    world: &mut ScenarioWorld,
    credit_manager: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let adapter = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_adapter_mock::AdapterMockProxy)
        .init()
        .code(ADAPTER_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    let mut adapters = MultiValueEncoded::new();
    adapters.push(adapter.clone());
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(credit_manager.clone())
        .typed(proxy_credit_manager::CreditManagerProxy)
        .add_adapters(adapters)
        .run();

    world.set_esdt_balance(adapter.clone(), &USDC_TOKEN.as_bytes(), usdc(5_000_000));
    world.set_esdt_balance(adapter.clone(), &WETH_TOKEN.as_bytes(), weth(10_000));
    world.set_esdt_balance(adapter.clone(), &WBTC_TOKEN.as_bytes(), wbtc(1_000));
    world.set_esdt_balance(adapter.clone(), &MEME_TOKEN.as_bytes(), units(1_000_000, MEME_DECIMALS));

    adapter
}
