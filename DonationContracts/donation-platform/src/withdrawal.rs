use crate::distribution;
use crate::errors::PlatformError;
use crate::events::WithdrawalMade;
use crate::storage;
use crate::types::CampaignStatus;
use soroban_sdk::{log, Address, Env, Symbol};

/// Releases everything a finished campaign collected to the administrator.
/// Succeeds at most once per campaign.
pub fn withdraw(env: Env, caller: Address, campaign_id: u32) -> Result<i128, PlatformError> {
    let admin = storage::require_admin(&env, &caller)?;

    let mut campaign = storage::get_campaign(&env, campaign_id)
        .map_err(|_| PlatformError::WithdrawUnknownCampaign)?;
    campaign.check_can_withdraw(env.ledger().timestamp())?;

    let amount = campaign.received_amount;
    let token = storage::get_token(&env)?;
    distribution::pay_out(&env, &token, &admin, amount);

    campaign.status = CampaignStatus::Withdrawn;
    storage::save_campaign(&env, &campaign);
    storage::extend_instance_ttl(&env);

    log!(&env, "campaign {} withdrawn: {}", campaign_id, amount);

    env.events().publish(
        (Symbol::new(&env, "withdrawal_made"), campaign_id),
        WithdrawalMade {
            id: campaign_id,
            amount,
        },
    );

    Ok(amount)
}
