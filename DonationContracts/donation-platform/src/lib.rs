#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod campaign;
mod checks;
mod distribution;
mod donation;
mod errors;
mod events;
mod external;
mod storage;
mod types;
mod withdrawal;

pub use errors::*;
pub use events::*;
pub use types::*;

#[contract]
pub struct DonationPlatform;

#[contractimpl]
impl DonationPlatform {
    /// Initialize the platform with its administrator, the donation NFT
    /// registry that awards first-donation badges, and the token donations
    /// are made in.
    pub fn initialize(
        env: Env,
        admin: Address,
        badge_contract: Address,
        token: Address,
    ) -> Result<(), PlatformError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(PlatformError::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::BadgeContract, &badge_contract);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::CampaignsCounter, &0u32);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // Campaign functions
    pub fn create_campaign(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        goal_amount: i128,
        duration: u64,
    ) -> Result<u32, PlatformError> {
        campaign::create_campaign(env, caller, name, description, goal_amount, duration)
    }

    pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, PlatformError> {
        campaign::get_campaign(env, campaign_id)
    }

    pub fn campaign_phase(env: Env, campaign_id: u32) -> Result<CampaignPhase, PlatformError> {
        campaign::campaign_phase(env, campaign_id)
    }

    pub fn campaigns_counter(env: Env) -> u32 {
        storage::get_campaigns_counter(&env)
    }

    // Donation functions
    pub fn donate(
        env: Env,
        donor: Address,
        campaign_id: u32,
        amount: i128,
    ) -> Result<i128, PlatformError> {
        donation::donate(env, donor, campaign_id, amount)
    }

    pub fn has_donated(env: Env, donor: Address) -> bool {
        donation::has_donated(env, donor)
    }

    // Withdrawal functions
    pub fn withdraw(env: Env, caller: Address, campaign_id: u32) -> Result<i128, PlatformError> {
        withdrawal::withdraw(env, caller, campaign_id)
    }

    // Configuration
    pub fn admin(env: Env) -> Result<Address, PlatformError> {
        storage::get_admin(&env)
    }

    pub fn badge_contract(env: Env) -> Result<Address, PlatformError> {
        storage::get_badge_contract(&env)
    }

    pub fn token(env: Env) -> Result<Address, PlatformError> {
        storage::get_token(&env)
    }
}
