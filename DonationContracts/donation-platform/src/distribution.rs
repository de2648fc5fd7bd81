use soroban_sdk::{token, Address, Env};

/// Moves the full amount sent by the donor into the platform.
pub fn collect_donation(env: &Env, token: &Address, donor: &Address, amount: i128) {
    token::Client::new(env, token).transfer(donor, &env.current_contract_address(), &amount);
}

/// Pays `amount` out of the platform. Zero payouts skip the token call.
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
}
