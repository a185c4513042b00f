//! Calls into the claim-token contract. The ledger's own address is the
//! mint/burn authority for every event it creates.
//!
//! State-changing calls go through `try_invoke_contract` so a rejection by
//! the claim token (ledger not an operator, id already bound, authority
//! revoked) surfaces as `Error::ClaimTokenRejected`.

use crate::error::Error;
use soroban_sdk::{vec, Address, BytesN, Env, IntoVal, InvokeError, Symbol, Val, Vec};

fn try_call(env: &Env, claim_token: &Address, func: &str, args: Vec<Val>) -> Result<(), Error> {
    match env.try_invoke_contract::<(), InvokeError>(claim_token, &Symbol::new(env, func), args) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::ClaimTokenRejected),
    }
}

pub fn register_event(env: &Env, claim_token: &Address, event_id: &BytesN<32>) -> Result<(), Error> {
    try_call(
        env,
        claim_token,
        "register_event",
        vec![
            env,
            env.current_contract_address().to_val(),
            event_id.to_val(),
        ],
    )
}

pub fn mint(
    env: &Env,
    claim_token: &Address,
    event_id: &BytesN<32>,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    try_call(
        env,
        claim_token,
        "mint",
        vec![
            env,
            env.current_contract_address().to_val(),
            event_id.to_val(),
            to.to_val(),
            amount.into_val(env),
        ],
    )
}

pub fn burn(
    env: &Env,
    claim_token: &Address,
    event_id: &BytesN<32>,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    try_call(
        env,
        claim_token,
        "burn",
        vec![
            env,
            env.current_contract_address().to_val(),
            event_id.to_val(),
            from.to_val(),
            amount.into_val(env),
        ],
    )
}

pub fn balance_of(env: &Env, claim_token: &Address, event_id: &BytesN<32>, holder: &Address) -> i128 {
    env.invoke_contract(
        claim_token,
        &Symbol::new(env, "balance_of"),
        vec![env, event_id.to_val(), holder.to_val()],
    )
}

pub fn total_supply(env: &Env, claim_token: &Address, event_id: &BytesN<32>) -> i128 {
    env.invoke_contract(
        claim_token,
        &Symbol::new(env, "total_supply"),
        vec![env, event_id.to_val()],
    )
}
