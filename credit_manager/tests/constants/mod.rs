#![allow(dead_code)]

use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const CREDIT_MANAGER_PATH: MxscPath = MxscPath::new("output/credit-manager.mxsc.json");
pub const CREDIT_POOL_PATH: MxscPath = MxscPath::new("../credit_pool/output/credit-pool.mxsc.json");
pub const PRICE_ORACLE_PATH: MxscPath =
    MxscPath::new("../price_oracle/output/price-oracle.mxsc.json");
pub const ADAPTER_MOCK_PATH: MxscPath =
    MxscPath::new("../adapter_mock/output/adapter-mock.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const LENDER_ADDRESS: TestAddress = TestAddress::new("lender");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const OTHER_BORROWER_ADDRESS: TestAddress = TestAddress::new("other-borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const BOT_ADDRESS: TestAddress = TestAddress::new("bot");
pub const FEEDER_ADDRESS: TestAddress = TestAddress::new("feeder");

// Underlying of the pool
pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const USDC_DECIMALS: usize = 6;
pub const USDC_PRICE_IN_DOLLARS: u64 = 1;

pub const WETH_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WETH-123456");
pub const WETH_DECIMALS: usize = 18;
pub const WETH_PRICE_IN_DOLLARS: u64 = 2_000;

pub const WBTC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WBTC-123456");
pub const WBTC_DECIMALS: usize = 8;
pub const WBTC_PRICE_IN_DOLLARS: u64 = 40_000;

// Listed with a price but never configured as collateral
pub const MEME_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("MEME-123456");
pub const MEME_DECIMALS: usize = 18;
pub const MEME_PRICE_IN_DOLLARS: u64 = 1;

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const SECONDS_PER_YEAR: u64 = 31_556_926;

// Pool rate curve, RAY based
pub const R_MAX: u128 = RAY; // 100%
pub const R_BASE: u128 = RAY / 50; // 2%
pub const R_SLOPE1: u128 = RAY / 25; // 4%
pub const R_SLOPE2: u128 = RAY / 10; // 10%
pub const R_SLOPE3: u128 = RAY / 2; // 50%
pub const U_MID: u128 = RAY / 2; // 50%
pub const U_OPTIMAL: u128 = RAY * 8 / 10; // 80%
pub const RESERVE_FACTOR: u64 = 1_000; // 10%

// Debt band, whole USDC
pub const MIN_DEBT: u64 = 1_000;
pub const MAX_DEBT: u64 = 1_000_000;
pub const MAX_DEBT_PER_BLOCK_MULTIPLIER: u64 = 2;

pub const LENDER_DEPOSIT: u64 = 5_000_000;

pub const FEE_INTEREST_BPS: u64 = 1_000; // 10%
pub const USDC_LT_BPS: u64 = 9_000;
pub const WETH_LT_BPS: u64 = 8_500;
pub const WBTC_LT_BPS: u64 = 8_000;

// WETH is quotable, WBTC is plain collateral
pub const WETH_QUOTA_RATE_BPS: u64 = 1_000; // 10%
pub const WETH_QUOTA_LIMIT: u64 = 2_000_000;
