use crate::{access, ledger::split_fee};
use common::escrow::types::{Escrow, EscrowError as Error};
use soroban_sdk::{log, token, Address, Env};

/// Moves `amount` of the payment token, surfacing any failure of the token
/// contract as `TransferFailed` instead of trapping.
fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_addr: Address = access::payment_token(env)?;
    let token_client: token::Client<'_> = token::Client::new(env, &token_addr);

    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer failed", to.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

pub fn lock_deposit(env: &Env, escrow: &Escrow) -> Result<(), Error> {
    transfer(env, &escrow.payer, &env.current_contract_address(), escrow.amount)
}

/// Pays the payee its share and the fee collector the protocol fee.
/// Returns `(payee_share, fee)`.
pub fn pay_out(env: &Env, escrow: &Escrow) -> Result<(i128, i128), Error> {
    let (payout, fee) = split_fee(escrow.amount, access::fee_bps(env)?)?;
    let custodian: Address = env.current_contract_address();

    transfer(env, &custodian, &escrow.payee, payout)?;
    if fee > 0 {
        let fee_collector: Address = access::fee_collector(env)?;
        transfer(env, &custodian, &fee_collector, fee)?;
    }
    Ok((payout, fee))
}

/// Returns the full amount to the payer. Refunds never pay a fee.
pub fn refund(env: &Env, escrow: &Escrow) -> Result<(), Error> {
    transfer(env, &env.current_contract_address(), &escrow.payer, escrow.amount)
}
