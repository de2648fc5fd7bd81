use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,            // Administrator address
    BadgeContract,    // Donation NFT registry awarding first-donation badges
    Token,            // Token accepted for donations
    CampaignsCounter, // Next campaign ID
    Campaign(u32),    // Campaign ID -> Campaign
    Donor(Address),   // Set once an address has donated anywhere on the platform
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,     // In token units
    pub received_amount: i128, // Never exceeds goal_amount
    pub expiration_time: u64,  // Ledger timestamp
    pub status: CampaignStatus,
}

/// Stored lifecycle tag. Expiry depends on the clock and is not stored; see
/// [`CampaignPhase`].
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    Open,
    GoalReached,
    Withdrawn,
}

/// Lifecycle phase of a campaign at a given timestamp.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CampaignPhase {
    Open,
    GoalReached,
    Expired,
    Withdrawn,
}
