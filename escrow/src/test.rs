#![cfg(test)]
extern crate std;

use crate::{events::EscrowEvent, EscrowContract};
use common::escrow::{
    interface::EscrowContractClient,
    types::{Escrow, EscrowStatus, DEFAULT_FEE_BPS},
};
use soroban_sdk::testutils::{Address as _, Events, StellarAssetContract};
use soroban_sdk::{token, Address, Env, IntoVal, Val, Vec};

pub const PAYER_BALANCE: i128 = 10_000;

fn create_escrow_contract<'a>(env: &Env) -> EscrowContractClient<'a> {
    let contract_id: Address = env.register(EscrowContract, ());
    let contract_client: EscrowContractClient<'a> = EscrowContractClient::new(env, &contract_id);
    contract_client
}

fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac: StellarAssetContract = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

pub struct EscrowTest {
    env: Env,
    escrow_client: EscrowContractClient<'static>,
    token_client: token::TokenClient<'static>,
    owner: Address,
    payer: Address,
    payee: Address,
    arbitrator: Address,
    fee_collector: Address,
}

impl EscrowTest {
    fn setup() -> Self {
        let test = Self::setup_no_init(Env::default());

        test.escrow_client
            .initialize(&test.owner, &test.token_client.address, &DEFAULT_FEE_BPS);
        test.escrow_client.set_fee_collector(&test.fee_collector);
        test.escrow_client.add_arbitrator(&test.arbitrator);

        test
    }

    fn setup_no_init(env: Env) -> Self {
        env.mock_all_auths();

        let escrow_client: EscrowContractClient<'_> = create_escrow_contract(&env);

        let owner: Address = Address::generate(&env);
        let payer: Address = Address::generate(&env);
        let payee: Address = Address::generate(&env);
        let arbitrator: Address = Address::generate(&env);
        let fee_collector: Address = Address::generate(&env);

        let (token_client, token_admin_client) = create_token_contract(&env, &owner);
        token_admin_client.mint(&payer, &PAYER_BALANCE);

        EscrowTest {
            env,
            escrow_client,
            token_client,
            owner,
            payer,
            payee,
            arbitrator,
            fee_collector,
        }
    }

    fn create(&self, amount: i128) -> u64 {
        self.escrow_client
            .create_escrow(&self.payer, &self.payee, &self.arbitrator, &amount)
    }

    fn create_funded(&self, amount: i128) -> u64 {
        let escrow_id: u64 = self.create(amount);
        self.escrow_client
            .deposit_funds(&self.payer, &escrow_id, &amount);
        escrow_id
    }

    fn create_disputed(&self, amount: i128) -> u64 {
        let escrow_id: u64 = self.create_funded(amount);
        self.escrow_client.raise_dispute(
            &self.payee,
            &escrow_id,
            &soroban_sdk::String::from_str(&self.env, "QmEvidence"),
        );
        escrow_id
    }

    fn escrow(&self, escrow_id: u64) -> Escrow {
        self.escrow_client.get_escrow(&escrow_id)
    }

    fn balance(&self, id: &Address) -> i128 {
        self.token_client.balance(id)
    }

    fn custody_balance(&self) -> i128 {
        self.token_client.balance(&self.escrow_client.address)
    }

    fn assert_status(&self, escrow_id: u64, status: EscrowStatus) {
        assert_eq!(self.escrow_client.status(&escrow_id), status);
    }

    fn assert_emitted(&self, event: EscrowEvent) {
        let topics: Vec<Val> = (event.name(),).into_val(&self.env);
        let data: Val = event.payload(&self.env).into_val(&self.env);
        assert!(
            self.env
                .events()
                .all()
                .contains((self.escrow_client.address.clone(), topics, data)),
            "{} event not present",
            event.name()
        );
    }
}
