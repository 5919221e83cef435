#![no_std]

pub mod proxy_adapter_mock;
pub mod proxy_credit_manager;
pub mod proxy_pool;
pub mod proxy_price_oracle;
