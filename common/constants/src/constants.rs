#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

/// Hard ceiling for the number of enabled tokens one account may track
pub const MAX_ENABLED_TOKENS_LIMIT: usize = 32;
pub const DEFAULT_MAX_ENABLED_TOKENS: usize = 12;

/// Passing this as a `DecreaseDebt` amount repays everything that is owed
pub const REPAY_ALL: u128 = u128::MAX;

pub const DEFAULT_MAX_QUOTA_MULTIPLIER: u64 = 2;
pub const DEFAULT_MAX_PRICE_STALE_SECONDS: u64 = 3_600;

// Liquidation defaults
pub const DEFAULT_LIQUIDATION_PREMIUM_BPS: u64 = 400; // 4%
pub const DEFAULT_FEE_LIQUIDATION_BPS: u64 = 150; // 1.5%
pub const DEFAULT_LIQUIDATION_PREMIUM_EXPIRED_BPS: u64 = 200; // 2%
pub const DEFAULT_FEE_LIQUIDATION_EXPIRED_BPS: u64 = 100; // 1%
pub const MAX_LIQUIDATION_PREMIUM_BPS: u64 = 2_000; // 20%

// Account flags
pub const ZERO_DEBT_FLAG: u8 = 1;
pub const BOT_PERMISSIONS_FLAG: u8 = 1 << 1;

// Batch permissions, one bit per operation kind
pub const ADD_COLLATERAL_PERMISSION: u64 = 1;
pub const INCREASE_DEBT_PERMISSION: u64 = 1 << 1;
pub const DECREASE_DEBT_PERMISSION: u64 = 1 << 2;
pub const ENABLE_TOKEN_PERMISSION: u64 = 1 << 3;
pub const DISABLE_TOKEN_PERMISSION: u64 = 1 << 4;
pub const WITHDRAW_COLLATERAL_PERMISSION: u64 = 1 << 5;
pub const UPDATE_QUOTA_PERMISSION: u64 = 1 << 6;
pub const SET_BOT_PERMISSIONS_PERMISSION: u64 = 1 << 7;
pub const EXTERNAL_CALLS_PERMISSION: u64 = 1 << 16;

/// Everything a bot can ever be granted; bot permissions themselves stay owner-only
pub const ALL_BOT_PERMISSIONS: u64 = ADD_COLLATERAL_PERMISSION
    | INCREASE_DEBT_PERMISSION
    | DECREASE_DEBT_PERMISSION
    | ENABLE_TOKEN_PERMISSION
    | DISABLE_TOKEN_PERMISSION
    | WITHDRAW_COLLATERAL_PERMISSION
    | UPDATE_QUOTA_PERMISSION
    | EXTERNAL_CALLS_PERMISSION;
