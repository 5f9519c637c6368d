//! Owner identity, fee configuration and the global pause flag.
//!
//! All values live in instance storage and are written once by `initialize`;
//! afterwards only the owner can change them.

use crate::storage::{get_data, store_data};
use common::escrow::types::{
    EscrowError as Error, FEE_BPS, FEE_COLLECTOR, MAX_FEE_BPS, OWNER, PAUSED, PAYMENT_TOKEN,
};
use soroban_sdk::{Address, Env};

pub fn owner(env: &Env) -> Result<Address, Error> {
    get_data(env, &OWNER).ok_or(Error::NotInitialized)
}

/// Loads the owner and demands its signature on the current invocation.
pub fn require_owner(env: &Env) -> Result<Address, Error> {
    let owner: Address = owner(env)?;
    owner.require_auth();
    Ok(owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    store_data(env, &OWNER, owner);
}

pub fn fee_collector(env: &Env) -> Result<Address, Error> {
    get_data(env, &FEE_COLLECTOR).ok_or(Error::NotInitialized)
}

pub fn set_fee_collector(env: &Env, fee_collector: &Address) {
    store_data(env, &FEE_COLLECTOR, fee_collector);
}

pub fn fee_bps(env: &Env) -> Result<u32, Error> {
    get_data(env, &FEE_BPS).ok_or(Error::NotInitialized)
}

pub fn set_fee_bps(env: &Env, fee_bps: u32) -> Result<(), Error> {
    if fee_bps > MAX_FEE_BPS {
        return Err(Error::InvalidFeeRate);
    }
    store_data(env, &FEE_BPS, &fee_bps);
    Ok(())
}

pub fn payment_token(env: &Env) -> Result<Address, Error> {
    get_data(env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    store_data(env, &PAYMENT_TOKEN, token);
}

pub fn is_paused(env: &Env) -> bool {
    get_data(env, &PAUSED).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    store_data(env, &PAUSED, &paused);
}

pub fn ensure_not_paused(env: &Env) -> Result<(), Error> {
    if is_paused(env) {
        return Err(Error::Paused);
    }
    Ok(())
}

pub fn ensure_paused(env: &Env) -> Result<(), Error> {
    if !is_paused(env) {
        return Err(Error::NotPaused);
    }
    Ok(())
}
