use common_constants::BPS;
use common_errors::{ERROR_ARITHMETIC_OVERFLOW, ERROR_TOKEN_NOT_QUOTABLE};
use common_structs::{
    AccountQuota, CollateralCalcTask, CollateralDebtData, CreditAccount, TokenQuotaParams,
};

use crate::{cache::Cache, collateral, oracle, quotas, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + quotas::QuotaModule
    + collateral::CollateralModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    #[view(getCreditAccount)]
    fn get_credit_account(&self, account_id: u64) -> CreditAccount<Self::Api> {
        Cache::load(self, account_id).account
    }

    /// Debt and, unless `task` is `DebtOnly`, collateral of an account as of now.
    /// Every enabled token is valued.
    #[view(calcDebtAndCollateral)]
    fn calc_debt_and_collateral_view(
        &self,
        account_id: u64,
        task: CollateralCalcTask,
    ) -> CollateralDebtData<Self::Api> {
        let mut cache = Cache::load(self, account_id);
        self.calc_debt_and_collateral(&mut cache, task, &ManagedVec::new(), BPS, true)
    }

    #[view(getHealthFactor)]
    fn get_health_factor(&self, account_id: u64) -> u64 {
        self.calc_debt_and_collateral_view(account_id, CollateralCalcTask::DebtCollateral)
            .health_factor
    }

    #[view(isLiquidatable)]
    fn is_liquidatable(&self, account_id: u64) -> bool {
        let health_factor = self.get_health_factor(account_id);
        health_factor < BPS || self.is_expired(self.blockchain().get_block_timestamp())
    }

    /// Principal plus base interest, quota interest and fees.
    #[view(getTotalDebt)]
    fn get_total_debt(&self, account_id: u64) -> BigUint {
        let total = self
            .calc_debt_and_collateral_view(account_id, CollateralCalcTask::DebtOnly)
            .total_debt();
        require!(total <= BigUint::from(u128::MAX), ERROR_ARITHMETIC_OVERFLOW);
        total
    }

    #[view(getAccountBalances)]
    fn get_account_balances(
        &self,
        account_id: u64,
    ) -> MultiValueEncoded<MultiValue2<EgldOrEsdtTokenIdentifier, BigUint>> {
        let mut balances = MultiValueEncoded::new();
        for (token, amount) in self.balances(account_id).iter() {
            balances.push((token, amount).into());
        }
        balances
    }

    #[view(getAccountQuotas)]
    fn get_account_quotas(
        &self,
        account_id: u64,
    ) -> MultiValueEncoded<MultiValue2<EgldOrEsdtTokenIdentifier, AccountQuota<Self::Api>>> {
        let mut quotas = MultiValueEncoded::new();
        for (token, quota) in self.account_quotas(account_id).iter() {
            quotas.push((token, quota).into());
        }
        quotas
    }

    #[view(getAccountsOf)]
    fn get_accounts_of(&self, owner: ManagedAddress) -> MultiValueEncoded<u64> {
        self.accounts_of(&owner).iter().collect()
    }

    #[view(getBotPermissions)]
    fn get_bot_permissions(&self, account_id: u64, bot: ManagedAddress) -> u64 {
        self.bot_permissions(account_id).get(&bot).unwrap_or(0)
    }

    /// Token quota state with the index moved to now.
    #[view(getTokenQuotaParams)]
    fn get_token_quota_params(&self, token: EgldOrEsdtTokenIdentifier) -> TokenQuotaParams<Self::Api> {
        let mut params = self
            .quota_params()
            .get(&token)
            .unwrap_or_else(|| sc_panic!(ERROR_TOKEN_NOT_QUOTABLE));
        self.crystallize_quota_index(&mut params, self.blockchain().get_block_timestamp());
        params
    }
}
