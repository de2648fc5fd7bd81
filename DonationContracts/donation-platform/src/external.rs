use soroban_sdk::{contractclient, Address, Env};

/// Award entry point of the donation NFT registry. The platform must own the
/// registry for the call to succeed.
#[allow(dead_code)]
#[contractclient(name = "BadgeRegistryClient")]
pub trait BadgeRegistry {
    fn award(env: Env, caller: Address, recipient: Address) -> u64;
}
