use crate::storage::{extend_persistent, has_persistent, remove_persistent, store_persistent};
use common::escrow::types::EscrowDataKey as DataKey;
use soroban_sdk::{Address, Env};

// Membership is only consulted when an escrow is created. Removing an
// arbitrator leaves the escrows already assigned to them untouched.

pub fn contains(env: &Env, arbitrator: &Address) -> bool {
    has_persistent(env, &DataKey::Arbitrator(arbitrator.clone()))
}

/// Returns `true` if the arbitrator was not already registered. Adding an
/// existing member only refreshes its TTL.
pub fn add(env: &Env, arbitrator: &Address) -> bool {
    let key = DataKey::Arbitrator(arbitrator.clone());
    if has_persistent(env, &key) {
        extend_persistent(env, &key);
        return false;
    }
    store_persistent(env, &key, &true);
    true
}

/// Returns `true` if the arbitrator was registered.
pub fn remove(env: &Env, arbitrator: &Address) -> bool {
    let key = DataKey::Arbitrator(arbitrator.clone());
    if !has_persistent(env, &key) {
        return false;
    }
    remove_persistent(env, &key);
    true
}
