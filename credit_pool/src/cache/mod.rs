use common_structs::PoolParams;

multiversx_sc::imports!();

/// In-memory snapshot of the pool, written back to storage on drop.
///
/// Amounts are raw token units. The borrow index is RAY-based and timestamps
/// are seconds.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub supplied: BigUint<C::Api>,
    pub borrowed: BigUint<C::Api>,
    pub revenue: BigUint<C::Api>,
    pub bad_debt: BigUint<C::Api>,
    pub total_shares: BigUint<C::Api>,
    pub borrow_index: ManagedDecimal<C::Api, NumDecimals>,
    pub last_timestamp: u64,
    pub timestamp: u64,
    pub params: PoolParams<C::Api>,
    pub pool_asset: EgldOrEsdtTokenIdentifier<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            supplied: sc_ref.supplied().get(),
            borrowed: sc_ref.borrowed().get(),
            revenue: sc_ref.revenue().get(),
            bad_debt: sc_ref.bad_debt().get(),
            total_shares: sc_ref.total_shares().get(),
            borrow_index: sc_ref.borrow_index().get(),
            last_timestamp: sc_ref.last_timestamp().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            params: sc_ref.params().get(),
            pool_asset: sc_ref.pool_asset().get(),
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.supplied().set(&self.supplied);
        self.sc_ref.borrowed().set(&self.borrowed);
        self.sc_ref.revenue().set(&self.revenue);
        self.sc_ref.bad_debt().set(&self.bad_debt);
        self.sc_ref.total_shares().set(&self.total_shares);
        self.sc_ref.borrow_index().set(&self.borrow_index);
        self.sc_ref.last_timestamp().set(self.last_timestamp);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Tokens held by the pool that are not owed to the protocol treasury.
    pub fn get_reserves(&self) -> BigUint<C::Api> {
        let balance = self
            .sc_ref
            .blockchain()
            .get_sc_balance(&self.pool_asset, 0);
        if balance > self.revenue {
            balance - &self.revenue
        } else {
            BigUint::zero()
        }
    }

    pub fn has_reserves(&self, amount: &BigUint<C::Api>) -> bool {
        self.get_reserves() >= *amount
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.pool_asset == *asset
    }

    /// Shares minted for a deposit of `amount`.
    pub fn shares_for_deposit(&self, amount: &BigUint<C::Api>) -> BigUint<C::Api> {
        if self.total_shares == 0u64 || self.supplied == 0u64 {
            return amount.clone();
        }
        amount * &self.total_shares / &self.supplied
    }

    /// Underlying amount redeemable for `shares`.
    pub fn amount_for_shares(&self, shares: &BigUint<C::Api>) -> BigUint<C::Api> {
        if self.total_shares == 0u64 {
            return BigUint::zero();
        }
        shares * &self.supplied / &self.total_shares
    }
}
