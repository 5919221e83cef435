multiversx_sc::imports!();

use common_constants::{ALL_BOT_PERMISSIONS, BOT_PERMISSIONS_FLAG};
use common_errors::ERROR_PERMISSION_DENIED;

use crate::{cache::Cache, oracle, positions, storage, validation};

#[multiversx_sc::module]
pub trait BotsModule:
    storage::Storage
    + oracle::OracleModule
    + positions::account::PositionAccountModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Grants `bot` the batch operations in `permissions` on an account.
    /// Zero revokes the bot. Owner only.
    #[endpoint(setBotPermissions)]
    fn set_bot_permissions(&self, account_id: u64, bot: ManagedAddress, permissions: u64) {
        self.require_not_paused();
        self.require_not_in_batch();

        let mut cache = Cache::load(self, account_id);
        self.require_account_owner(&cache.account, &self.blockchain().get_caller());

        self.apply_bot_permissions(&mut cache, &bot, permissions);
        cache.commit();
    }

    /// Bot grants are written through, the host reverts them with a failed batch.
    fn apply_bot_permissions(&self, cache: &mut Cache<Self>, bot: &ManagedAddress, permissions: u64) {
        require!(
            permissions & !ALL_BOT_PERMISSIONS == 0,
            ERROR_PERMISSION_DENIED
        );

        let mut grants = self.bot_permissions(cache.account_id);
        if permissions == 0 {
            grants.remove(bot);
        } else {
            grants.insert(bot.clone(), permissions);
        }
        cache
            .account
            .set_flag(BOT_PERMISSIONS_FLAG, !grants.is_empty());

        self.set_bot_permissions_event(cache.account_id, bot, permissions);
    }

    /// Grant of `bot` on the account. Fails when there is none.
    fn require_bot_permissions(&self, cache: &Cache<Self>, bot: &ManagedAddress) -> u64 {
        require!(
            cache.account.has_bot_permissions(),
            ERROR_PERMISSION_DENIED
        );

        let permissions = self
            .bot_permissions(cache.account_id)
            .get(bot)
            .unwrap_or(0);
        require!(permissions != 0, ERROR_PERMISSION_DENIED);

        permissions & ALL_BOT_PERMISSIONS
    }
}
