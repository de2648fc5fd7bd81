use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,
    pub expiration_time: u64,
}

// `donation` is the credited amount, which can be less than the amount sent.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignReceivedDonation {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,
    pub expiration_time: u64,
    pub donor: Address,
    pub donation: i128,
    pub remaining_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationRefunded {
    pub campaign_id: u32,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignGoalReached {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,
    pub expiration_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalMade {
    pub id: u32,
    pub amount: i128,
}
