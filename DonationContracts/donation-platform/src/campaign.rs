use crate::errors::PlatformError;
use crate::events::CampaignCreated;
use crate::storage;
use crate::types::*;
use soroban_sdk::{Address, Env, String, Symbol};

pub fn create_campaign(
    env: Env,
    caller: Address,
    name: String,
    description: String,
    goal_amount: i128,
    duration: u64,
) -> Result<u32, PlatformError> {
    storage::require_admin(&env, &caller)?;

    // Validate inputs
    if goal_amount <= 0 {
        return Err(PlatformError::InvalidGoal);
    }
    if duration == 0 {
        return Err(PlatformError::InvalidDuration);
    }
    let expiration_time = env
        .ledger()
        .timestamp()
        .checked_add(duration)
        .ok_or(PlatformError::InvalidDuration)?;

    let campaign_id = storage::next_campaign_id(&env);

    let campaign = Campaign {
        id: campaign_id,
        name: name.clone(),
        description: description.clone(),
        goal_amount,
        received_amount: 0,
        expiration_time,
        status: CampaignStatus::Open,
    };
    storage::save_campaign(&env, &campaign);
    storage::extend_instance_ttl(&env);

    env.events().publish(
        (Symbol::new(&env, "campaign_created"), campaign_id),
        CampaignCreated {
            id: campaign_id,
            name,
            description,
            goal_amount,
            expiration_time,
        },
    );

    Ok(campaign_id)
}

pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, PlatformError> {
    storage::get_campaign(&env, campaign_id)
}

pub fn campaign_phase(env: Env, campaign_id: u32) -> Result<CampaignPhase, PlatformError> {
    let campaign = storage::get_campaign(&env, campaign_id)?;
    Ok(campaign.phase(env.ledger().timestamp()))
}
