use crate::events::OwnershipTransferred;
use crate::types::{extend_instance_ttl, BadgeError, DataKey};
use crate::{DonationNftArgs, DonationNftClient};
use soroban_sdk::{contractimpl, Address, Env, Symbol};

#[contractimpl]
impl super::DonationNft {
    pub fn owner(env: Env) -> Result<Address, BadgeError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(BadgeError::NotInitialized)
    }

    /// Hands award authority to `new_owner`. In deployment the new owner is
    /// the donation platform contract.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), BadgeError> {
        let previous_owner = require_owner(&env, &caller)?;

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        extend_instance_ttl(&env);

        env.events().publish(
            (Symbol::new(&env, "ownership_transferred"),),
            OwnershipTransferred {
                previous_owner,
                new_owner,
            },
        );
        Ok(())
    }
}

/// Authenticates `caller` and checks it against the stored owner.
pub(crate) fn require_owner(env: &Env, caller: &Address) -> Result<Address, BadgeError> {
    caller.require_auth();

    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(BadgeError::NotInitialized)?;

    if *caller != owner {
        return Err(BadgeError::Unauthorized);
    }
    Ok(owner)
}
