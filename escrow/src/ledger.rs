//! Pure escrow state machine: who may act, which status comes next and how
//! a release is split between payee and fee collector.
//!
//! Nothing here touches storage or moves value; the contract entry points in
//! `lib.rs` call these checks before committing anything.

use common::escrow::types::{
    Escrow, EscrowError as Error, EscrowStatus, BPS_DENOMINATOR,
};
use soroban_sdk::Address;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Release,
    Dispute,
    Resolve { refund: bool },
    EmergencyWithdraw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Payer,
    Payee,
    Arbitrator,
}

pub fn role_of(escrow: &Escrow, caller: &Address) -> Option<Role> {
    if *caller == escrow.payer {
        Some(Role::Payer)
    } else if *caller == escrow.payee {
        Some(Role::Payee)
    } else if *caller == escrow.arbitrator {
        Some(Role::Arbitrator)
    } else {
        None
    }
}

pub fn authorize(escrow: &Escrow, caller: &Address, op: Operation) -> Result<Role, Error> {
    let role: Role = role_of(escrow, caller).ok_or(Error::Unauthorized)?;
    let allowed: bool = match (op, role) {
        (Operation::Deposit, Role::Payer) => true,
        (Operation::Release, Role::Payer | Role::Arbitrator) => true,
        (Operation::Dispute, Role::Payer | Role::Payee) => true,
        (Operation::Resolve { .. }, Role::Arbitrator) => true,
        (Operation::EmergencyWithdraw, Role::Payer) => true,
        _ => false,
    };
    if allowed {
        Ok(role)
    } else {
        Err(Error::Unauthorized)
    }
}

pub fn transition(status: EscrowStatus, op: Operation) -> Result<EscrowStatus, Error> {
    match (status, op) {
        (EscrowStatus::Created, Operation::Deposit) => Ok(EscrowStatus::Funded),
        (EscrowStatus::Funded, Operation::Release) => Ok(EscrowStatus::Released),
        (EscrowStatus::Funded, Operation::Dispute) => Ok(EscrowStatus::Disputed),
        (EscrowStatus::Funded, Operation::EmergencyWithdraw) => Ok(EscrowStatus::Refunded),
        (EscrowStatus::Disputed, Operation::Resolve { refund: true }) => {
            Ok(EscrowStatus::Refunded)
        }
        (EscrowStatus::Disputed, Operation::Resolve { refund: false }) => {
            Ok(EscrowStatus::Released)
        }
        _ => Err(Error::WrongState),
    }
}

/// Role check followed by the state check, in that order.
pub fn advance(escrow: &Escrow, caller: &Address, op: Operation) -> Result<Escrow, Error> {
    authorize(escrow, caller, op)?;
    let status: EscrowStatus = transition(escrow.status, op)?;
    Ok(Escrow {
        status,
        ..escrow.clone()
    })
}

pub fn validate_parties(payer: &Address, payee: &Address, arbitrator: &Address) -> Result<(), Error> {
    if payee == payer || arbitrator == payer || arbitrator == payee {
        return Err(Error::InvalidParty);
    }
    Ok(())
}

/// Splits `amount` into `(payee_share, fee)`. The fee rounds down, so the two
/// parts always sum to `amount`.
pub fn split_fee(amount: i128, fee_bps: u32) -> Result<(i128, i128), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let fee: i128 = amount
        .checked_mul(fee_bps as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / BPS_DENOMINATOR;
    Ok((amount - fee, fee))
}

#[cfg(test)]
mod test {
    extern crate std;

    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    fn escrow(env: &Env, status: EscrowStatus) -> Escrow {
        Escrow {
            id: 0,
            payer: Address::generate(env),
            payee: Address::generate(env),
            arbitrator: Address::generate(env),
            amount: 100,
            status,
            evidence_ref: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_transition_graph() {
        use EscrowStatus::*;
        assert_eq!(transition(Created, Operation::Deposit), Ok(Funded));
        assert_eq!(transition(Funded, Operation::Release), Ok(Released));
        assert_eq!(transition(Funded, Operation::Dispute), Ok(Disputed));
        assert_eq!(
            transition(Disputed, Operation::Resolve { refund: true }),
            Ok(Refunded)
        );
        assert_eq!(
            transition(Disputed, Operation::Resolve { refund: false }),
            Ok(Released)
        );
        assert_eq!(transition(Funded, Operation::EmergencyWithdraw), Ok(Refunded));

        assert_eq!(transition(Created, Operation::Release), Err(Error::WrongState));
        assert_eq!(transition(Funded, Operation::Deposit), Err(Error::WrongState));
        assert_eq!(transition(Disputed, Operation::Release), Err(Error::WrongState));
        assert_eq!(
            transition(Disputed, Operation::EmergencyWithdraw),
            Err(Error::WrongState)
        );
        assert_eq!(
            transition(Created, Operation::EmergencyWithdraw),
            Err(Error::WrongState)
        );
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        let ops = [
            Operation::Deposit,
            Operation::Release,
            Operation::Dispute,
            Operation::Resolve { refund: true },
            Operation::Resolve { refund: false },
            Operation::EmergencyWithdraw,
        ];
        for status in [EscrowStatus::Released, EscrowStatus::Refunded] {
            assert!(status.is_terminal());
            for op in ops {
                assert_eq!(transition(status, op), Err(Error::WrongState));
            }
        }
    }

    #[test]
    fn test_role_table() {
        let env = Env::default();
        let e = escrow(&env, EscrowStatus::Funded);
        let outsider = Address::generate(&env);

        assert_eq!(authorize(&e, &e.payer, Operation::Release), Ok(Role::Payer));
        assert_eq!(
            authorize(&e, &e.arbitrator, Operation::Release),
            Ok(Role::Arbitrator)
        );
        assert_eq!(
            authorize(&e, &e.payee, Operation::Release),
            Err(Error::Unauthorized)
        );
        assert_eq!(authorize(&e, &e.payee, Operation::Dispute), Ok(Role::Payee));
        assert_eq!(
            authorize(&e, &e.arbitrator, Operation::Dispute),
            Err(Error::Unauthorized)
        );
        assert_eq!(
            authorize(&e, &e.payer, Operation::Resolve { refund: true }),
            Err(Error::Unauthorized)
        );
        assert_eq!(
            authorize(&e, &e.payee, Operation::EmergencyWithdraw),
            Err(Error::Unauthorized)
        );
        assert_eq!(
            authorize(&e, &e.arbitrator, Operation::Deposit),
            Err(Error::Unauthorized)
        );
        assert_eq!(
            authorize(&e, &outsider, Operation::Dispute),
            Err(Error::Unauthorized)
        );
    }

    #[test]
    fn test_advance_checks_role_before_state() {
        let env = Env::default();
        let e = escrow(&env, EscrowStatus::Released);

        assert_eq!(
            advance(&e, &e.payee, Operation::Release),
            Err(Error::Unauthorized)
        );
        assert_eq!(
            advance(&e, &e.payer, Operation::Release),
            Err(Error::WrongState)
        );

        let funded = escrow(&env, EscrowStatus::Funded);
        let next = advance(&funded, &funded.payee, Operation::Dispute).unwrap();
        assert_eq!(next.status, EscrowStatus::Disputed);
        assert_eq!(next.amount, funded.amount);
        assert_eq!(next.payer, funded.payer);
    }

    #[test]
    fn test_validate_parties() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let c = Address::generate(&env);

        assert_eq!(validate_parties(&a, &b, &c), Ok(()));
        assert_eq!(validate_parties(&a, &a, &c), Err(Error::InvalidParty));
        assert_eq!(validate_parties(&a, &b, &a), Err(Error::InvalidParty));
        assert_eq!(validate_parties(&a, &b, &b), Err(Error::InvalidParty));
    }

    #[test]
    fn test_split_fee() {
        assert_eq!(split_fee(100, 100), Ok((99, 1)));
        assert_eq!(split_fee(50, 100), Ok((50, 0)));
        assert_eq!(split_fee(1_000_0000000, 250), Ok((975_0000000, 25_0000000)));
        assert_eq!(split_fee(100, 0), Ok((100, 0)));
        assert_eq!(split_fee(0, 100), Err(Error::InvalidAmount));
        assert_eq!(split_fee(i128::MAX, 100), Err(Error::ArithmeticOverflow));

        for amount in [1_i128, 7, 99, 101, 12_345, 9_999_999] {
            let (payout, fee) = split_fee(amount, 1_000).unwrap();
            assert_eq!(payout + fee, amount);
            assert!(fee >= 0 && payout > 0);
        }
    }
}
