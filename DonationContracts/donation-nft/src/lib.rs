#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod award;
mod events;
mod ownership;
mod types;

pub use events::*;
pub use types::*;

#[contract]
pub struct DonationNft;

#[contractimpl]
impl DonationNft {
    /// Sets up the registry. `owner` is the only address allowed to award
    /// badges until ownership is transferred.
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
    ) -> Result<(), BadgeError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(BadgeError::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::TokenCounter, &0u64);
        types::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn balance_of(env: Env, holder: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(holder))
            .unwrap_or(0)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, BadgeError> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(BadgeError::TokenNotFound)
    }

    pub fn token_counter(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0)
    }

    pub fn name(env: Env) -> Result<String, BadgeError> {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(BadgeError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, BadgeError> {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .ok_or(BadgeError::NotInitialized)
    }
}

#[cfg(test)]
mod test;
