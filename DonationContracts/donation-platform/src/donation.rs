use crate::distribution;
use crate::errors::PlatformError;
use crate::events::{CampaignGoalReached, CampaignReceivedDonation, DonationRefunded};
use crate::external::BadgeRegistryClient;
use crate::storage;
use soroban_sdk::{log, Address, Env, Symbol};

/// Credits a donation to a campaign and returns the amount actually credited.
///
/// The donor sends `amount`; whatever exceeds the room left under the goal is
/// paid back in the same call. A donor's first donation on the platform also
/// earns them a badge from the NFT registry.
pub fn donate(
    env: Env,
    donor: Address,
    campaign_id: u32,
    amount: i128,
) -> Result<i128, PlatformError> {
    donor.require_auth();

    if amount <= 0 {
        return Err(PlatformError::ZeroDonation);
    }

    let mut campaign = storage::get_campaign(&env, campaign_id)?;
    campaign.check_can_donate(env.ledger().timestamp())?;

    let token = storage::get_token(&env)?;
    let (credited, refund) = campaign.split_donation(amount);

    distribution::collect_donation(&env, &token, &donor, amount);
    if refund > 0 {
        distribution::pay_out(&env, &token, &donor, refund);
        env.events().publish(
            (Symbol::new(&env, "donation_refunded"), campaign_id),
            DonationRefunded {
                campaign_id,
                donor: donor.clone(),
                amount: refund,
            },
        );
    }

    let goal_reached = campaign.credit(credited);
    storage::save_campaign(&env, &campaign);
    storage::extend_instance_ttl(&env);

    env.events().publish(
        (Symbol::new(&env, "donation_received"), campaign_id),
        CampaignReceivedDonation {
            id: campaign_id,
            name: campaign.name.clone(),
            description: campaign.description.clone(),
            goal_amount: campaign.goal_amount,
            expiration_time: campaign.expiration_time,
            donor: donor.clone(),
            donation: credited,
            remaining_amount: campaign.remaining_amount(),
        },
    );

    if goal_reached {
        log!(&env, "campaign {} reached its goal", campaign_id);
        env.events().publish(
            (Symbol::new(&env, "goal_reached"), campaign_id),
            CampaignGoalReached {
                id: campaign_id,
                name: campaign.name,
                description: campaign.description,
                goal_amount: campaign.goal_amount,
                expiration_time: campaign.expiration_time,
            },
        );
    }

    if !storage::has_donated(&env, &donor) {
        storage::register_donor(&env, &donor);
        award_first_donation_badge(&env, &donor)?;
    }

    Ok(credited)
}

fn award_first_donation_badge(env: &Env, donor: &Address) -> Result<u64, PlatformError> {
    let badge_contract = storage::get_badge_contract(env)?;
    let registry = BadgeRegistryClient::new(env, &badge_contract);

    match registry.try_award(&env.current_contract_address(), donor) {
        Ok(Ok(token_id)) => {
            log!(env, "first donation badge {} awarded to {}", token_id, donor.clone());
            Ok(token_id)
        }
        _ => Err(PlatformError::BadgeAwardFailed),
    }
}

pub fn has_donated(env: Env, donor: Address) -> bool {
    storage::has_donated(&env, &donor)
}
