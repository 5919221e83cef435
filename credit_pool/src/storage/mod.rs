multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{DebtLimits, PoolParams};

/// On-chain state of the pool.
///
/// The credit manager reads `params`, `borrow_index`, `last_timestamp`,
/// `supplied`, `borrowed`, `debt_limits` and `pool_asset` straight from this
/// contract's storage, so these keys are part of its interface.
#[multiversx_sc::module]
pub trait Storage {
    #[view(getPoolAsset)]
    #[storage_mapper("pool_asset")]
    fn pool_asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<PoolParams<Self::Api>>;

    /// Liquidity owed to lenders: deposits plus realized interest, minus losses.
    #[view(getSupplied)]
    #[storage_mapper("supplied")]
    fn supplied(&self) -> SingleValueMapper<BigUint>;

    /// Principal currently lent to credit accounts.
    #[view(getBorrowed)]
    #[storage_mapper("borrowed")]
    fn borrowed(&self) -> SingleValueMapper<BigUint>;

    /// Protocol fees not yet claimed. Absorbs losses before lenders do.
    #[view(getRevenue)]
    #[storage_mapper("revenue")]
    fn revenue(&self) -> SingleValueMapper<BigUint>;

    /// Losses written off so far.
    #[view(getBadDebt)]
    #[storage_mapper("bad_debt")]
    fn bad_debt(&self) -> SingleValueMapper<BigUint>;

    /// RAY-based base interest index, synced on every state change.
    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLastTimestamp)]
    #[storage_mapper("last_timestamp")]
    fn last_timestamp(&self) -> SingleValueMapper<u64>;

    #[view(getTotalShares)]
    #[storage_mapper("total_shares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getShares)]
    #[storage_mapper("shares")]
    fn shares(&self, lender: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getCreditManager)]
    #[storage_mapper("credit_manager")]
    fn credit_manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("debt_limits")]
    fn debt_limits(&self) -> SingleValueMapper<DebtLimits<Self::Api>>;

    /// Cap on `borrowed`. Zero means no cap.
    #[view(getTotalDebtLimit)]
    #[storage_mapper("total_debt_limit")]
    fn total_debt_limit(&self) -> SingleValueMapper<BigUint>;
}
