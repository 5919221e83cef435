#![no_std]

// Validation
pub static ERROR_DEBT_OUT_OF_BOUNDS: &[u8] = b"Debt is out of the allowed bounds.";

pub static ERROR_TOKEN_NOT_QUOTABLE: &[u8] = b"Token is not quotable.";

pub static ERROR_TOKEN_NOT_ALLOWED: &[u8] = b"Token is not an allowed collateral.";

pub static ERROR_TOKEN_ALREADY_QUOTED: &[u8] = b"Token is already quotable.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_INVALID_LIQUIDATION_THRESHOLD: &[u8] = b"Invalid liquidation threshold.";

pub static ERROR_INVALID_LIQUIDATION_PARAMS: &[u8] = b"Invalid liquidation parameters.";

pub static ERROR_INVALID_FEE: &[u8] = b"Invalid fee.";

pub static ERROR_INVALID_RAMP: &[u8] = b"Invalid liquidation threshold ramp.";

pub static ERROR_INVALID_DEBT_LIMITS: &[u8] = b"Invalid debt limits.";

pub static ERROR_INVALID_MAX_ENABLED_TOKENS: &[u8] = b"Invalid max enabled tokens.";

pub static ERROR_INVALID_HEALTH_FACTOR: &[u8] = b"Minimum health factor can not be below 100%.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_ADAPTER_NOT_ALLOWED: &[u8] = b"Adapter is not allowed.";

pub static ERROR_ARITHMETIC_OVERFLOW: &[u8] = b"Arithmetic overflow.";

// State conflicts
pub static ERROR_POSITION_NOT_FOUND: &[u8] = b"Position not found.";

pub static ERROR_POSITION_TOO_YOUNG: &[u8] =
    b"Position can not be closed in the same block it was opened.";

pub static ERROR_REENTRANT_BATCH: &[u8] = b"Another batch is already in progress.";

pub static ERROR_QUOTA_OUT_OF_BOUNDS: &[u8] = b"Quota is out of the allowed bounds.";

pub static ERROR_NON_ZERO_DEBT_ON_CLOSE: &[u8] = b"Position can not be closed with outstanding debt.";

pub static ERROR_OPERATION_NOT_PERMITTED: &[u8] = b"Operation not permitted in this batch.";

pub static ERROR_FACADE_EXPIRED: &[u8] = b"Credit facade expired.";

pub static ERROR_INCREASE_DEBT_FORBIDDEN: &[u8] = b"Debt increase is currently forbidden.";

pub static ERROR_FORBIDDEN_TOKEN_ENABLED: &[u8] =
    b"Debt can not be increased while a forbidden token is enabled.";

pub static ERROR_FORBIDDEN_TOKEN_BALANCE_INCREASED: &[u8] = b"Forbidden token balance increased.";

pub static ERROR_TOO_MANY_ENABLED_TOKENS: &[u8] = b"Too many enabled tokens.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Not enough tokens held by the position.";

pub static ERROR_UNSPENT_PAYMENT_MISMATCH: &[u8] = b"Collateral amount exceeds the payments sent.";

// Solvency
pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_NOT_LIQUIDATABLE: &[u8] = b"Health not low enough for liquidation.";

pub static ERROR_INSUFFICIENT_LIQUIDATION: &[u8] = b"Insufficient funds for liquidation.";

// Capacity
pub static ERROR_BORROW_CAP_EXCEEDED: &[u8] = b"Borrow cap for this block exceeded.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_TOTAL_DEBT_LIMIT: &[u8] = b"Total debt limit reached.";

// Permissions
pub static ERROR_PERMISSION_DENIED: &[u8] = b"Permission denied.";

pub static ERROR_NOT_ACCOUNT_OWNER: &[u8] = b"Caller is not the position owner.";

pub static ERROR_DEGEN_RESTRICTION: &[u8] = b"Caller has no allowance to open a position.";

pub static ERROR_ONLY_CREDIT_MANAGER: &[u8] = b"Only the credit manager can call this.";

pub static ERROR_ONLY_FEEDER: &[u8] = b"Only a price feeder can call this.";

// Oracle
pub static ERROR_PRICE_NOT_FOUND: &[u8] = b"No price found for token.";

pub static ERROR_PRICE_FEED_STALE: &[u8] = b"Price feed is stale.";

pub static ERROR_PRICE_AGGREGATOR_NOT_SET: &[u8] = b"Price oracle not set.";

pub static ERROR_POOL_NOT_SET: &[u8] = b"Pool not set.";

pub static ERROR_PRICE_ORACLE_PAUSED: &[u8] = b"Price oracle is paused.";
