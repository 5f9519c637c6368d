#![no_std]

mod access;
mod custody;
mod events;
mod ledger;
mod registry;
mod storage;

use common::escrow::{
    interface::EscrowContractTrait,
    types::{Escrow, EscrowError as Error, EscrowStatus, OWNER},
};
use events::EscrowEvent;
use ledger::Operation;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Vec};
use storage::has_data;

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    // The fee collector starts out as the owner
    fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        fee_bps: u32,
    ) -> Result<(), Error> {
        owner.require_auth();
        if has_data(&env, &OWNER) {
            return Err(Error::AlreadyInitialized);
        }

        access::set_fee_bps(&env, fee_bps)?;
        access::set_owner(&env, &owner);
        access::set_fee_collector(&env, &owner);
        access::set_payment_token(&env, &payment_token);
        access::set_paused(&env, false);
        EscrowEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        2
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        access::require_owner(&env)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        EscrowEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn add_arbitrator(env: Env, arbitrator: Address) -> Result<(), Error> {
        access::require_owner(&env)?;
        if registry::add(&env, &arbitrator) {
            log!(&env, "arbitrator added", arbitrator.clone());
            EscrowEvent::ArbitratorAdded(arbitrator).publish(&env);
        }
        Ok(())
    }

    fn remove_arbitrator(env: Env, arbitrator: Address) -> Result<(), Error> {
        access::require_owner(&env)?;
        if registry::remove(&env, &arbitrator) {
            log!(&env, "arbitrator removed", arbitrator.clone());
            EscrowEvent::ArbitratorRemoved(arbitrator).publish(&env);
        }
        Ok(())
    }

    fn is_arbitrator(env: Env, arbitrator: Address) -> bool {
        registry::contains(&env, &arbitrator)
    }

    fn pause(env: Env) -> Result<(), Error> {
        access::require_owner(&env)?;
        access::set_paused(&env, true);
        EscrowEvent::Paused.publish(&env);
        Ok(())
    }

    fn unpause(env: Env) -> Result<(), Error> {
        access::require_owner(&env)?;
        access::set_paused(&env, false);
        EscrowEvent::Unpaused.publish(&env);
        Ok(())
    }

    fn is_paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    fn set_fee_collector(env: Env, fee_collector: Address) -> Result<(), Error> {
        access::require_owner(&env)?;
        access::set_fee_collector(&env, &fee_collector);
        EscrowEvent::FeeCollectorUpdated(fee_collector).publish(&env);
        Ok(())
    }

    fn set_fee_rate(env: Env, fee_bps: u32) -> Result<(), Error> {
        access::require_owner(&env)?;
        access::set_fee_bps(&env, fee_bps)?;
        EscrowEvent::FeeRateUpdated(fee_bps).publish(&env);
        Ok(())
    }

    fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        let previous: Address = access::require_owner(&env)?;
        access::set_owner(&env, &new_owner);
        EscrowEvent::OwnershipTransferred(previous, new_owner).publish(&env);
        Ok(())
    }

    fn owner(env: Env) -> Result<Address, Error> {
        access::owner(&env)
    }

    fn fee_collector(env: Env) -> Result<Address, Error> {
        access::fee_collector(&env)
    }

    fn fee_rate(env: Env) -> Result<u32, Error> {
        access::fee_bps(&env)
    }

    fn payment_token(env: Env) -> Result<Address, Error> {
        access::payment_token(&env)
    }

    // Registers the escrow only. Funds move with `deposit_funds`.
    fn create_escrow(
        env: Env,
        payer: Address,
        payee: Address,
        arbitrator: Address,
        amount: i128,
    ) -> Result<u64, Error> {
        payer.require_auth();
        access::owner(&env)?;
        access::ensure_not_paused(&env)?;

        ledger::validate_parties(&payer, &payee, &arbitrator)?;
        if !registry::contains(&env, &arbitrator) {
            return Err(Error::InvalidArbitrator);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let escrow_id: u64 = storage::next_escrow_id(&env)?;
        let escrow: Escrow = Escrow {
            id: escrow_id,
            payer,
            payee,
            arbitrator,
            amount,
            status: EscrowStatus::Created,
            evidence_ref: None,
            created_at: env.ledger().timestamp(),
        };
        storage::write_escrow(&env, &escrow);
        storage::index_party(&env, &escrow.payer, escrow_id)?;
        storage::index_party(&env, &escrow.payee, escrow_id)?;
        storage::index_party(&env, &escrow.arbitrator, escrow_id)?;

        log!(&env, "escrow created", escrow_id, amount);
        EscrowEvent::EscrowCreated(escrow_id).publish(&env);
        Ok(escrow_id)
    }

    fn deposit_funds(env: Env, caller: Address, escrow_id: u64, value: i128) -> Result<(), Error> {
        caller.require_auth();
        access::ensure_not_paused(&env)?;

        let escrow: Escrow = storage::read_escrow(&env, escrow_id)?;
        let next: Escrow = ledger::advance(&escrow, &caller, Operation::Deposit)?;
        if value != escrow.amount {
            return Err(Error::AmountMismatch);
        }

        custody::lock_deposit(&env, &escrow)?;
        storage::write_escrow(&env, &next);

        log!(&env, "escrow funded", escrow_id);
        EscrowEvent::EscrowFunded(escrow_id).publish(&env);
        Ok(())
    }

    fn release_funds(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error> {
        caller.require_auth();
        access::ensure_not_paused(&env)?;

        let escrow: Escrow = storage::read_escrow(&env, escrow_id)?;
        let next: Escrow = ledger::advance(&escrow, &caller, Operation::Release)?;

        let (payout, fee) = custody::pay_out(&env, &escrow)?;
        storage::write_escrow(&env, &next);

        log!(&env, "escrow released", escrow_id, payout, fee);
        EscrowEvent::Released(escrow_id).publish(&env);
        Ok(())
    }

    fn raise_dispute(
        env: Env,
        caller: Address,
        escrow_id: u64,
        evidence_ref: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::ensure_not_paused(&env)?;

        let escrow: Escrow = storage::read_escrow(&env, escrow_id)?;
        let mut next: Escrow = ledger::advance(&escrow, &caller, Operation::Dispute)?;
        next.evidence_ref = Some(evidence_ref.clone());
        storage::write_escrow(&env, &next);

        log!(&env, "dispute raised", escrow_id, caller);
        EscrowEvent::DisputeRaised(escrow_id, evidence_ref).publish(&env);
        Ok(())
    }

    // The arbitrator's decision is final: exactly one terminal state is reached.
    fn resolve_dispute(
        env: Env,
        caller: Address,
        escrow_id: u64,
        refund_to_payer: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::ensure_not_paused(&env)?;

        let escrow: Escrow = storage::read_escrow(&env, escrow_id)?;
        let next: Escrow = ledger::advance(
            &escrow,
            &caller,
            Operation::Resolve {
                refund: refund_to_payer,
            },
        )?;

        if refund_to_payer {
            custody::refund(&env, &escrow)?;
        } else {
            custody::pay_out(&env, &escrow)?;
        }
        storage::write_escrow(&env, &next);

        log!(&env, "dispute resolved", escrow_id, refund_to_payer);
        EscrowEvent::DisputeResolved(escrow_id, refund_to_payer).publish(&env);
        Ok(())
    }

    // Circuit breaker: only reachable while paused, and only for the payer.
    fn emergency_withdraw(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error> {
        caller.require_auth();
        access::ensure_paused(&env)?;

        let escrow: Escrow = storage::read_escrow(&env, escrow_id)?;
        let next: Escrow = ledger::advance(&escrow, &caller, Operation::EmergencyWithdraw)?;

        custody::refund(&env, &escrow)?;
        storage::write_escrow(&env, &next);

        log!(&env, "emergency withdrawal", escrow_id);
        EscrowEvent::EmergencyWithdrawal(escrow_id).publish(&env);
        Ok(())
    }

    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error> {
        storage::read_escrow(&env, escrow_id)
    }

    fn status(env: Env, escrow_id: u64) -> Result<EscrowStatus, Error> {
        let escrow: Escrow = storage::read_escrow(&env, escrow_id)?;
        Ok(escrow.status)
    }

    fn escrow_count(env: Env) -> u64 {
        storage::escrow_count(&env)
    }

    fn party_escrow_count(env: Env, party: Address) -> u64 {
        storage::party_escrow_count(&env, &party)
    }

    fn get_party_escrows(env: Env, party: Address, page: u32) -> Vec<u64> {
        storage::party_escrow_page(&env, &party, page)
    }
}

mod test;
