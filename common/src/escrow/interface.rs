use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};
use super::types::{Escrow, EscrowError as Error, EscrowStatus};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(env: Env, owner: Address, payment_token: Address, fee_bps: u32)
        -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;

    // Registry
    fn add_arbitrator(env: Env, arbitrator: Address) -> Result<(), Error>;
    fn remove_arbitrator(env: Env, arbitrator: Address) -> Result<(), Error>;
    fn is_arbitrator(env: Env, arbitrator: Address) -> bool;

    // Access control
    fn pause(env: Env) -> Result<(), Error>;
    fn unpause(env: Env) -> Result<(), Error>;
    fn is_paused(env: Env) -> bool;
    fn set_fee_collector(env: Env, fee_collector: Address) -> Result<(), Error>;
    fn set_fee_rate(env: Env, fee_bps: u32) -> Result<(), Error>;
    fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error>;
    fn owner(env: Env) -> Result<Address, Error>;
    fn fee_collector(env: Env) -> Result<Address, Error>;
    fn fee_rate(env: Env) -> Result<u32, Error>;
    fn payment_token(env: Env) -> Result<Address, Error>;

    // Lifecycle
    fn create_escrow(
        env: Env,
        payer: Address,
        payee: Address,
        arbitrator: Address,
        amount: i128,
    ) -> Result<u64, Error>;
    fn deposit_funds(env: Env, caller: Address, escrow_id: u64, value: i128) -> Result<(), Error>;
    fn release_funds(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error>;
    fn raise_dispute(
        env: Env,
        caller: Address,
        escrow_id: u64,
        evidence_ref: String,
    ) -> Result<(), Error>;
    fn resolve_dispute(
        env: Env,
        caller: Address,
        escrow_id: u64,
        refund_to_payer: bool,
    ) -> Result<(), Error>;
    fn emergency_withdraw(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error>;

    // Queries
    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error>;
    fn status(env: Env, escrow_id: u64) -> Result<EscrowStatus, Error>;
    fn escrow_count(env: Env) -> u64;
    fn party_escrow_count(env: Env, party: Address) -> u64;
    fn get_party_escrows(env: Env, party: Address, page: u32) -> Vec<u64>;
}
