#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{
    ADD_COLLATERAL_PERMISSION, BOT_PERMISSIONS_FLAG, DECREASE_DEBT_PERMISSION,
    DISABLE_TOKEN_PERMISSION, ENABLE_TOKEN_PERMISSION, EXTERNAL_CALLS_PERMISSION,
    INCREASE_DEBT_PERMISSION, SET_BOT_PERMISSIONS_PERMISSION, UPDATE_QUOTA_PERMISSION,
    WITHDRAW_COLLATERAL_PERMISSION, ZERO_DEBT_FLAG,
};

/// Interest rate curve of the lending pool.
///
/// Rates and utilization points are RAY based annual values, `reserve_factor` is BPS.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolParams<M: ManagedTypeApi> {
    pub max_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub base_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub slope1: ManagedDecimal<M, NumDecimals>,
    pub slope2: ManagedDecimal<M, NumDecimals>,
    pub slope3: ManagedDecimal<M, NumDecimals>,
    pub mid_utilization: ManagedDecimal<M, NumDecimals>,
    pub optimal_utilization: ManagedDecimal<M, NumDecimals>,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
}

/// Borrowing bounds published by the pool for every credit account.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct DebtLimits<M: ManagedTypeApi> {
    pub min_debt: BigUint<M>,
    pub max_debt: BigUint<M>,
    /// New debt allowed per block, as a multiple of `max_debt`. Zero forbids borrowing.
    pub max_debt_per_block_multiplier: u64,
}

impl<M: ManagedTypeApi> DebtLimits<M> {
    pub fn max_debt_per_block(&self) -> BigUint<M> {
        &self.max_debt * &BigUint::from(self.max_debt_per_block_multiplier)
    }

    pub fn is_within(&self, debt: &BigUint<M>) -> bool {
        *debt >= self.min_debt && *debt <= self.max_debt
    }
}

/// A set of token identifiers with an explicit cardinality bound.
///
/// Replaces a fixed-width bitmask: membership and union work on
/// identifiers, and the bound is checked by whoever grows the set.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct TokenSet<M: ManagedTypeApi> {
    tokens: ManagedVec<M, EgldOrEsdtTokenIdentifier<M>>,
}

impl<M: ManagedTypeApi> Default for TokenSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ManagedTypeApi> TokenSet<M> {
    pub fn new() -> Self {
        TokenSet {
            tokens: ManagedVec::new(),
        }
    }

    fn position(&self, token: &EgldOrEsdtTokenIdentifier<M>) -> Option<usize> {
        self.tokens.iter().position(|t| &*t == token)
    }

    pub fn contains(&self, token: &EgldOrEsdtTokenIdentifier<M>) -> bool {
        self.position(token).is_some()
    }

    /// Returns `true` when the token was not already a member.
    pub fn insert(&mut self, token: &EgldOrEsdtTokenIdentifier<M>) -> bool {
        if self.contains(token) {
            return false;
        }
        self.tokens.push(token.clone());
        true
    }

    /// Returns `true` when the token was a member.
    pub fn remove(&mut self, token: &EgldOrEsdtTokenIdentifier<M>) -> bool {
        match self.position(token) {
            Some(index) => {
                self.tokens.remove(index);
                true
            },
            None => false,
        }
    }

    pub fn union(&self, other: &TokenSet<M>) -> TokenSet<M> {
        let mut result = self.clone();
        for token in other.tokens.iter() {
            result.insert(&token);
        }
        result
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn exceeds(&self, max_cardinality: usize) -> bool {
        self.tokens.len() > max_cardinality
    }

    pub fn to_vec(&self) -> ManagedVec<M, EgldOrEsdtTokenIdentifier<M>> {
        self.tokens.clone()
    }
}

/// The debt record of one credit account.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CreditAccount<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    /// Borrowed principal in base asset units.
    pub debt: BigUint<M>,
    /// Pool base index (RAY) at the last debt mutation.
    pub cumulative_index_last_update: ManagedDecimal<M, NumDecimals>,
    /// Quota interest accrued and not yet repaid.
    pub cumulative_quota_interest: BigUint<M>,
    pub enabled_tokens: TokenSet<M>,
    pub flags: u8,
    /// Block nonce of the opening transaction.
    pub since: u64,
}

impl<M: ManagedTypeApi> CreditAccount<M> {
    pub fn has_flag(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }

    pub fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }

    pub fn has_zero_debt(&self) -> bool {
        self.has_flag(ZERO_DEBT_FLAG)
    }

    pub fn has_bot_permissions(&self) -> bool {
        self.has_flag(BOT_PERMISSIONS_FLAG)
    }

    /// Keeps the zero-debt flag in lock step with the principal.
    pub fn set_debt(&mut self, debt: BigUint<M>) {
        let is_zero = debt == 0u64;
        self.debt = debt;
        self.set_flag(ZERO_DEBT_FLAG, is_zero);
    }
}

/// Global quota state of one quotable token.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct TokenQuotaParams<M: ManagedTypeApi> {
    /// Annual quota rate in BPS.
    pub rate_bps: u64,
    /// Token quota index (RAY) at `last_update`.
    pub cumulative_index_lu: ManagedDecimal<M, NumDecimals>,
    pub last_update: u64,
    pub total_quoted: BigUint<M>,
    pub limit: BigUint<M>,
}

/// Quota held by one account in one token.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountQuota<M: ManagedTypeApi> {
    pub quota: BigUint<M>,
    pub cumulative_index_lu: ManagedDecimal<M, NumDecimals>,
}

/// Liquidation threshold of a collateral token, optionally ramping linearly
/// from `lt_initial_bps` to `lt_final_bps`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CollateralTokenConfig {
    pub lt_initial_bps: u64,
    pub lt_final_bps: u64,
    pub ramp_start: u64,
    pub ramp_duration: u64,
}

impl CollateralTokenConfig {
    pub fn fixed(lt_bps: u64) -> Self {
        CollateralTokenConfig {
            lt_initial_bps: lt_bps,
            lt_final_bps: lt_bps,
            ramp_start: 0,
            ramp_duration: 0,
        }
    }

    pub fn liquidation_threshold(&self, timestamp: u64) -> u64 {
        if self.ramp_duration == 0 {
            return self.lt_final_bps;
        }
        if timestamp <= self.ramp_start {
            return self.lt_initial_bps;
        }

        let elapsed = timestamp - self.ramp_start;
        if elapsed >= self.ramp_duration {
            return self.lt_final_bps;
        }

        let initial = self.lt_initial_bps as u128;
        let fin = self.lt_final_bps as u128;
        let elapsed = elapsed as u128;
        let duration = self.ramp_duration as u128;
        let remaining = duration - elapsed;

        ((initial * remaining + fin * elapsed) / duration) as u64
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LiquidationConfig {
    pub liquidation_premium_bps: u64,
    pub fee_liquidation_bps: u64,
    pub liquidation_premium_expired_bps: u64,
    pub fee_liquidation_expired_bps: u64,
}

/// USD price of one whole token unit, WAD scaled.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub decimals: u8,
    pub timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CollateralCalcTask {
    DebtOnly,
    DebtCollateral,
    FullCheckLazy,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClosureAction {
    Close,
    Liquidate,
    LiquidateExpired,
}

/// Debt and collateral snapshot of an account, recomputed on demand.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CollateralDebtData<M: ManagedTypeApi> {
    pub debt: BigUint<M>,
    pub cumulative_index_now: ManagedDecimal<M, NumDecimals>,
    pub cumulative_index_last_update: ManagedDecimal<M, NumDecimals>,
    /// Stored plus pending quota interest.
    pub cumulative_quota_interest: BigUint<M>,
    /// Base interest since the last debt update.
    pub accrued_interest: BigUint<M>,
    pub accrued_fees: BigUint<M>,
    pub total_debt_usd: BigUint<M>,
    /// Collateral value expressed in base asset units.
    pub total_value: BigUint<M>,
    pub total_value_usd: BigUint<M>,
    pub twv_usd: BigUint<M>,
    pub enabled_tokens: TokenSet<M>,
    pub quoted_tokens: ManagedVec<M, EgldOrEsdtTokenIdentifier<M>>,
    /// Percentage scale, 10_000 = 100%.
    pub health_factor: u64,
}

impl<M: ManagedTypeApi> CollateralDebtData<M> {
    pub fn total_debt(&self) -> BigUint<M> {
        &self.debt + &self.accrued_interest + &self.cumulative_quota_interest + &self.accrued_fees
    }

    pub fn is_healthy(&self, min_health_factor: u64) -> bool {
        self.health_factor >= min_health_factor
    }
}

/// Opaque call into an integration adapter on behalf of one account.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ExternalCall<M: ManagedTypeApi> {
    pub adapter: ManagedAddress<M>,
    pub endpoint: ManagedBuffer<M>,
    pub token_in: EgldOrEsdtTokenIdentifier<M>,
    /// Zero sends no tokens along with the call.
    pub amount_in: BigUint<M>,
    pub args: ManagedVec<M, ManagedBuffer<M>>,
}

/// One step of a batch. Steps run in the order given.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub enum BatchCall<M: ManagedTypeApi> {
    AddCollateral(EgldOrEsdtTokenIdentifier<M>, BigUint<M>),
    WithdrawCollateral(EgldOrEsdtTokenIdentifier<M>, BigUint<M>, ManagedAddress<M>),
    IncreaseDebt(BigUint<M>),
    DecreaseDebt(BigUint<M>),
    /// token, signed quota change, minimum resulting quota
    UpdateQuota(EgldOrEsdtTokenIdentifier<M>, BigInt<M>, BigUint<M>),
    EnableToken(EgldOrEsdtTokenIdentifier<M>),
    DisableToken(EgldOrEsdtTokenIdentifier<M>),
    SetBotPermissions(ManagedAddress<M>, u64),
    /// collateral hints, minimum health factor
    SetFullCheckParams(ManagedVec<M, EgldOrEsdtTokenIdentifier<M>>, u64),
    ExternalCall(ExternalCall<M>),
}

impl<M: ManagedTypeApi> BatchCall<M> {
    pub fn required_permission(&self) -> u64 {
        match self {
            BatchCall::AddCollateral(..) => ADD_COLLATERAL_PERMISSION,
            BatchCall::WithdrawCollateral(..) => WITHDRAW_COLLATERAL_PERMISSION,
            BatchCall::IncreaseDebt(..) => INCREASE_DEBT_PERMISSION,
            BatchCall::DecreaseDebt(..) => DECREASE_DEBT_PERMISSION,
            BatchCall::UpdateQuota(..) => UPDATE_QUOTA_PERMISSION,
            BatchCall::EnableToken(..) => ENABLE_TOKEN_PERMISSION,
            BatchCall::DisableToken(..) => DISABLE_TOKEN_PERMISSION,
            BatchCall::SetBotPermissions(..) => SET_BOT_PERMISSIONS_PERMISSION,
            // Only tightens the final check, never needs a grant
            BatchCall::SetFullCheckParams(..) => 0,
            BatchCall::ExternalCall(..) => EXTERNAL_CALLS_PERMISSION,
        }
    }
}

/// Result of a quota change.
pub struct QuotaUpdate<M: ManagedTypeApi> {
    pub realized_change: BigInt<M>,
    /// Part of a requested increase that the token limit could not absorb.
    pub unmet: BigUint<M>,
    pub becomes_enabled: bool,
    pub becomes_disabled: bool,
}

/// Outcome of a repayment waterfall.
pub struct DebtDecrease<M: ManagedTypeApi> {
    pub new_debt: BigUint<M>,
    pub new_cumulative_index: ManagedDecimal<M, NumDecimals>,
    pub new_cumulative_quota_interest: BigUint<M>,
    pub principal_repaid: BigUint<M>,
    /// Interest forwarded to lenders.
    pub interest: BigUint<M>,
    /// Protocol share.
    pub fee: BigUint<M>,
}

impl<M: ManagedTypeApi> DebtDecrease<M> {
    pub fn total_paid(&self) -> BigUint<M> {
        &self.principal_repaid + &self.interest + &self.fee
    }
}

pub struct LiquidationPayments<M: ManagedTypeApi> {
    /// Base asset the pool receives.
    pub amount_to_pool: BigUint<M>,
    /// Base asset handed back to the account owner.
    pub remaining_funds: BigUint<M>,
    pub principal: BigUint<M>,
    pub interest: BigUint<M>,
    pub fee: BigUint<M>,
    pub loss: BigUint<M>,
}
