pub mod account;
pub mod assets;
pub mod close;
pub mod debt;
