use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PlatformError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidGoal = 4,
    InvalidDuration = 5,
    ZeroDonation = 6,
    UnknownCampaign = 7,
    GoalAlreadyReached = 8,
    CampaignExpired = 9,
    NotYetWithdrawable = 10,
    AlreadyWithdrawn = 11,
    BadgeAwardFailed = 12,
    WithdrawUnknownCampaign = 13,
}

impl PlatformError {
    /// Fixed reason string for the rejection, matched verbatim by clients.
    pub const fn reason(&self) -> &'static str {
        match self {
            PlatformError::AlreadyInitialized => "Contract already initialized.",
            PlatformError::NotInitialized => "Contract not initialized.",
            PlatformError::Unauthorized => "Ownable: caller is not the owner",
            PlatformError::InvalidGoal => "Campaign goal amount cannot be 0.",
            PlatformError::InvalidDuration => "Campaign cannot last 0 seconds.",
            PlatformError::ZeroDonation => "Cannot donate 0 WEI.",
            PlatformError::UnknownCampaign => {
                "Bad campaign ID - cannot donate to the campaigns not yet created."
            }
            PlatformError::GoalAlreadyReached => {
                "Cannot donate - Funds for the campaign have already been gathered."
            }
            PlatformError::CampaignExpired => "Cannot donate - Time for the campaign has expired.",
            PlatformError::NotYetWithdrawable => {
                "Cannot withdraw - Campaign is not yet finished or the goal has not been reached."
            }
            PlatformError::AlreadyWithdrawn => {
                "Cannot withdraw - Funds for this campaign have already been withdrawn."
            }
            PlatformError::BadgeAwardFailed => {
                "Cannot donate - first donation badge could not be awarded."
            }
            PlatformError::WithdrawUnknownCampaign => {
                "Cannot withdraw - Campaign with that ID has not yet been created."
            }
        }
    }
}
