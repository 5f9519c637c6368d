use common::escrow::types::{
    Escrow, EscrowDataKey as DataKey, EscrowError as Error, PARTY_PAGE_SIZE,
};
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub fn extend_instance(env: &Env) {
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl::<K>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// PERSISTENT STORAGE
pub fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, val);
    extend_persistent(env, key);
}

pub fn get_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

pub fn remove_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().remove(key)
}

pub fn has_persistent<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().has(key)
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn has_data<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().has(key)
}

// ESCROW RECORDS
pub fn read_escrow(env: &Env, escrow_id: u64) -> Result<Escrow, Error> {
    get_persistent(env, &DataKey::Escrow(escrow_id)).ok_or(Error::NotFound)
}

pub fn write_escrow(env: &Env, escrow: &Escrow) {
    store_persistent(env, &DataKey::Escrow(escrow.id), escrow);
}

pub fn escrow_count(env: &Env) -> u64 {
    get_data(env, &DataKey::EscrowCount).unwrap_or(0)
}

/// Reserves the next escrow id. Ids start at zero and are never reused.
pub fn next_escrow_id(env: &Env) -> Result<u64, Error> {
    let escrow_id: u64 = escrow_count(env);
    let count: u64 = escrow_id.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    store_data(env, &DataKey::EscrowCount, &count);
    Ok(escrow_id)
}

pub fn party_escrow_count(env: &Env, party: &Address) -> u64 {
    get_persistent(env, &DataKey::PartyEscrowCount(party.clone())).unwrap_or(0)
}

pub fn party_escrow_page(env: &Env, party: &Address, page: u32) -> Vec<u64> {
    get_persistent(env, &DataKey::PartyEscrowPage(party.clone(), page))
        .unwrap_or_else(|| Vec::new(env))
}

/// Appends to the party's last page only, so the cost of indexing does not
/// depend on how many escrows the party already has.
pub fn index_party(env: &Env, party: &Address, escrow_id: u64) -> Result<(), Error> {
    let count: u64 = party_escrow_count(env, party);
    let page: u32 = u32::try_from(count / PARTY_PAGE_SIZE as u64)
        .map_err(|_| Error::ArithmeticOverflow)?;

    let mut escrow_ids: Vec<u64> = party_escrow_page(env, party, page);
    escrow_ids.push_back(escrow_id);
    store_persistent(env, &DataKey::PartyEscrowPage(party.clone(), page), &escrow_ids);

    let count: u64 = count.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    store_persistent(env, &DataKey::PartyEscrowCount(party.clone()), &count);
    Ok(())
}
