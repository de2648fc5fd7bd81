use crate::errors::PlatformError;
use crate::types::*;
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
// Campaigns and the donor set are never deleted.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_admin(env: &Env) -> Result<Address, PlatformError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(PlatformError::NotInitialized)
}

pub fn get_badge_contract(env: &Env) -> Result<Address, PlatformError> {
    env.storage()
        .instance()
        .get(&DataKey::BadgeContract)
        .ok_or(PlatformError::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, PlatformError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(PlatformError::NotInitialized)
}

/// Authenticates `caller` and checks it is the administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, PlatformError> {
    caller.require_auth();

    let admin = get_admin(env)?;
    if *caller != admin {
        return Err(PlatformError::Unauthorized);
    }
    Ok(admin)
}

pub fn get_campaigns_counter(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignsCounter)
        .unwrap_or(0)
}

/// Returns the next campaign ID and advances the counter.
pub fn next_campaign_id(env: &Env) -> u32 {
    let campaign_id = get_campaigns_counter(env);
    env.storage()
        .instance()
        .set(&DataKey::CampaignsCounter, &(campaign_id + 1));
    campaign_id
}

/// Loads a campaign and keeps its entry alive.
pub fn get_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, PlatformError> {
    let key = DataKey::Campaign(campaign_id);
    let campaign = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(PlatformError::UnknownCampaign)?;
    extend_persistent_ttl(env, &key);
    Ok(campaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent_ttl(env, &key);
}

pub fn has_donated(env: &Env, donor: &Address) -> bool {
    let key = DataKey::Donor(donor.clone());
    if !env.storage().persistent().has(&key) {
        return false;
    }
    extend_persistent_ttl(env, &key);
    true
}

pub fn register_donor(env: &Env, donor: &Address) {
    let key = DataKey::Donor(donor.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}
