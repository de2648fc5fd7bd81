use crate::events::BadgeAwarded;
use crate::ownership::require_owner;
use crate::types::{extend_badge_ttl, extend_instance_ttl, BadgeError, DataKey};
use crate::{DonationNftArgs, DonationNftClient};
use soroban_sdk::{contractimpl, log, Address, Env, Symbol};

#[contractimpl]
impl super::DonationNft {
    /// Issues one badge to `recipient` and returns its id.
    ///
    /// Ids are sequential starting at 1, so after an award the token counter
    /// equals the id just issued.
    pub fn award(env: Env, caller: Address, recipient: Address) -> Result<u64, BadgeError> {
        require_owner(&env, &caller)?;

        let token_id = env
            .storage()
            .instance()
            .get::<_, u64>(&DataKey::TokenCounter)
            .unwrap_or(0)
            + 1;
        env.storage()
            .instance()
            .set(&DataKey::TokenCounter, &token_id);

        let balance_key = DataKey::Balance(recipient.clone());
        let balance: u64 = env.storage().persistent().get(&balance_key).unwrap_or(0);
        env.storage().persistent().set(&balance_key, &(balance + 1));
        extend_badge_ttl(&env, &balance_key);

        let owner_key = DataKey::TokenOwner(token_id);
        env.storage().persistent().set(&owner_key, &recipient);
        extend_badge_ttl(&env, &owner_key);
        extend_instance_ttl(&env);

        log!(&env, "badge {} awarded to {}", token_id, recipient);

        env.events().publish(
            (Symbol::new(&env, "badge_awarded"), recipient.clone()),
            BadgeAwarded {
                token_id,
                recipient,
            },
        );

        Ok(token_id)
    }
}
