#![cfg(test)]

use crate::types::{BADGE_BUMP_AMOUNT, INSTANCE_BUMP_AMOUNT};
use crate::{
    BadgeAwarded, BadgeError, DataKey, DonationNft, DonationNftClient, OwnershipTransferred,
};
use soroban_sdk::{
    testutils::{
        storage::{Instance as _, Persistent as _},
        Address as _, Events, Ledger,
    },
    vec, Address, Env, IntoVal, String, Symbol,
};

struct Setup {
    env: Env,
    owner: Address,
    contract_id: Address,
    client: DonationNftClient<'static>,
}

impl Setup {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(DonationNft, ());
        let client = DonationNftClient::new(&env, &contract_id);
        let owner = Address::generate(&env);

        client.initialize(
            &owner,
            &String::from_str(&env, "DonationNFT"),
            &String::from_str(&env, "DNFT"),
        );

        Setup {
            env,
            owner,
            contract_id,
            client,
        }
    }
}

#[test]
fn test_initial_state() {
    let Setup {
        env, owner, client, ..
    } = Setup::new();

    assert_eq!(client.token_counter(), 0);
    assert_eq!(client.owner(), owner);
    assert_eq!(client.name(), String::from_str(&env, "DonationNFT"));
    assert_eq!(client.symbol(), String::from_str(&env, "DNFT"));
    assert_eq!(client.balance_of(&Address::generate(&env)), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let Setup {
        env, owner, client, ..
    } = Setup::new();

    let result = client.try_initialize(
        &owner,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
    );
    assert_eq!(result, Err(Ok(BadgeError::AlreadyInitialized)));
}

#[test]
fn test_reads_before_initialize() {
    let env = Env::default();
    let contract_id = env.register(DonationNft, ());
    let client = DonationNftClient::new(&env, &contract_id);

    assert_eq!(client.try_owner(), Err(Ok(BadgeError::NotInitialized)));
    assert_eq!(client.try_name(), Err(Ok(BadgeError::NotInitialized)));
    assert_eq!(client.token_counter(), 0);
}

#[test]
fn test_award_increments_counter_and_balance() {
    let Setup {
        env, owner, client, ..
    } = Setup::new();
    let donor = Address::generate(&env);

    let token_id = client.award(&owner, &donor);

    assert_eq!(token_id, 1);
    assert_eq!(client.token_counter(), 1);
    assert_eq!(client.balance_of(&donor), 1);
    assert_eq!(client.owner_of(&1), donor);
}

#[test]
fn test_multiple_awards_to_same_recipient() {
    let Setup {
        env, owner, client, ..
    } = Setup::new();
    let donor = Address::generate(&env);

    for i in 1..=23u64 {
        assert_eq!(client.award(&owner, &donor), i);
        assert_eq!(client.token_counter(), i);
        assert_eq!(client.balance_of(&donor), i);
    }
}

#[test]
fn test_awards_are_tracked_per_recipient() {
    let Setup {
        env, owner, client, ..
    } = Setup::new();
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.award(&owner, &first);
    client.award(&owner, &second);
    client.award(&owner, &first);

    assert_eq!(client.balance_of(&first), 2);
    assert_eq!(client.balance_of(&second), 1);
    assert_eq!(client.owner_of(&1), first);
    assert_eq!(client.owner_of(&2), second);
    assert_eq!(client.owner_of(&3), first);
    assert_eq!(client.token_counter(), 3);
}

#[test]
fn test_owner_of_unknown_token() {
    let Setup { client, .. } = Setup::new();

    assert_eq!(client.try_owner_of(&1), Err(Ok(BadgeError::TokenNotFound)));
}

#[test]
fn test_award_by_non_owner_fails() {
    let Setup { env, client, .. } = Setup::new();
    let intruder = Address::generate(&env);

    let result = client.try_award(&intruder, &intruder);

    assert_eq!(result, Err(Ok(BadgeError::Unauthorized)));
    assert_eq!(client.token_counter(), 0);
    assert_eq!(client.balance_of(&intruder), 0);
}

#[test]
fn test_award_emits_event() {
    let Setup {
        env,
        owner,
        contract_id,
        client,
    } = Setup::new();
    let donor = Address::generate(&env);

    client.award(&owner, &donor);

    assert_eq!(
        env.events().all(),
        vec![
            &env,
            (
                contract_id.clone(),
                (Symbol::new(&env, "badge_awarded"), donor.clone()).into_val(&env),
                BadgeAwarded {
                    token_id: 1,
                    recipient: donor,
                }
                .into_val(&env)
            )
        ]
    );
}

#[test]
fn test_transfer_ownership_moves_award_authority() {
    let Setup {
        env,
        owner,
        contract_id,
        client,
    } = Setup::new();
    let platform = Address::generate(&env);
    let donor = Address::generate(&env);

    client.transfer_ownership(&owner, &platform);

    assert_eq!(
        env.events().all(),
        vec![
            &env,
            (
                contract_id.clone(),
                (Symbol::new(&env, "ownership_transferred"),).into_val(&env),
                OwnershipTransferred {
                    previous_owner: owner.clone(),
                    new_owner: platform.clone(),
                }
                .into_val(&env)
            )
        ]
    );
    assert_eq!(client.owner(), platform);

    assert_eq!(
        client.try_award(&owner, &donor),
        Err(Ok(BadgeError::Unauthorized))
    );
    assert_eq!(client.award(&platform, &donor), 1);
}

#[test]
fn test_transfer_ownership_by_non_owner_fails() {
    let Setup {
        env, owner, client, ..
    } = Setup::new();
    let intruder = Address::generate(&env);

    let result = client.try_transfer_ownership(&intruder, &intruder);

    assert_eq!(result, Err(Ok(BadgeError::Unauthorized)));
    assert_eq!(client.owner(), owner);
}

#[test]
fn test_transfer_ownership_to_self() {
    let Setup { owner, client, .. } = Setup::new();

    client.transfer_ownership(&owner, &owner);

    assert_eq!(client.owner(), owner);
}

#[test]
fn test_error_reasons() {
    assert_eq!(
        BadgeError::Unauthorized.reason(),
        "Ownable: caller is not the owner"
    );
    assert_eq!(
        BadgeError::AlreadyInitialized.reason(),
        "Contract already initialized."
    );
    assert_eq!(
        BadgeError::NotInitialized.reason(),
        "Contract not initialized."
    );
    assert_eq!(
        BadgeError::TokenNotFound.reason(),
        "Badge with that ID has not been awarded."
    );
}

#[test]
fn test_award_keeps_badge_entries_alive() {
    let Setup {
        env,
        owner,
        contract_id,
        client,
    } = Setup::new();
    let donor = Address::generate(&env);

    client.award(&owner, &donor);

    env.as_contract(&contract_id, || {
        let persistent = env.storage().persistent();
        assert_eq!(
            persistent.get_ttl(&DataKey::Balance(donor.clone())),
            BADGE_BUMP_AMOUNT
        );
        assert_eq!(persistent.get_ttl(&DataKey::TokenOwner(1)), BADGE_BUMP_AMOUNT);
        assert_eq!(env.storage().instance().get_ttl(), INSTANCE_BUMP_AMOUNT);
    });

    // well past the default lifetime of a fresh entry
    let sequence = env.ledger().sequence();
    env.ledger().set_sequence_number(sequence + 100_000);

    assert_eq!(client.award(&owner, &donor), 2);
    assert_eq!(client.balance_of(&donor), 2);
    assert_eq!(client.owner_of(&1), donor);
}
