use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    Unauthorized = 1,
    NotFound = 2,
    WrongState = 3,
    InvalidParty = 4,
    InvalidArbitrator = 5,
    InvalidAmount = 6,
    AmountMismatch = 7,
    Paused = 8,
    TransferFailed = 9,
    AlreadyInitialized = 10,
    NotInitialized = 11,
    NotPaused = 12,
    InvalidFeeRate = 13,
    ArithmeticOverflow = 14,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct Escrow {
    pub id: u64,
    pub payer: Address,
    pub payee: Address,
    pub arbitrator: Address,
    pub amount: i128,
    pub status: EscrowStatus,
    pub evidence_ref: Option<String>, // Opaque pointer into the evidence store
    pub created_at: u64,
}

/// Lifecycle of a single escrow.
///
/// `Released` and `Refunded` are terminal. Discriminants are part of the
/// public interface and must not be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum EscrowStatus {
    Created = 0,
    Funded = 1,
    Released = 2,
    Disputed = 3,
    Refunded = 4,
}

impl EscrowStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, EscrowStatus::Released | EscrowStatus::Refunded)
    }
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    EscrowCount,
    Escrow(u64),            // Escrow record by id
    PartyEscrowCount(Address),    // Number of escrows the address is party to
    PartyEscrowPage(Address, u32), // Fixed-size page of those escrow ids
    Arbitrator(Address),    // Registry membership
}

pub const OWNER: Symbol = symbol_short!("OWNER");
pub const FEE_COLLECTOR: Symbol = symbol_short!("FEE_COL");
pub const FEE_BPS: Symbol = symbol_short!("FEE_BPS");
pub const PAUSED: Symbol = symbol_short!("PAUSED");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("TOKEN");

pub const BPS_DENOMINATOR: i128 = 10_000;
pub const DEFAULT_FEE_BPS: u32 = 100;
pub const MAX_FEE_BPS: u32 = 1_000;

pub const PARTY_PAGE_SIZE: u32 = 32;
