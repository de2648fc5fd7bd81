use soroban_sdk::{contracterror, contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BADGE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BADGE_LIFETIME_THRESHOLD: u32 = BADGE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Badge entries are never removed.
pub(crate) fn extend_badge_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BADGE_LIFETIME_THRESHOLD, BADGE_BUMP_AMOUNT);
}

/// Storage keys for the badge registry.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,             // Address allowed to award badges
    Name,              // Collection name
    Symbol,            // Collection symbol
    TokenCounter,      // Total badges ever issued, id of the latest badge
    Balance(Address),  // Holder -> number of badges
    TokenOwner(u64),   // Badge id -> holder
}

/// Error codes for the badge registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BadgeError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    TokenNotFound = 4,
}

impl BadgeError {
    /// Human-readable reason reported for the rejected call.
    pub const fn reason(&self) -> &'static str {
        match self {
            BadgeError::AlreadyInitialized => "Contract already initialized.",
            BadgeError::NotInitialized => "Contract not initialized.",
            BadgeError::Unauthorized => "Ownable: caller is not the owner",
            BadgeError::TokenNotFound => "Badge with that ID has not been awarded.",
        }
    }
}
