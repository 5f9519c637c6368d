use soroban_sdk::{Address, Env, IntoVal, String, Val, Vec};

pub enum EscrowEvent {
    Initialized,
    Upgraded(u32),
    ArbitratorAdded(Address),
    ArbitratorRemoved(Address),
    Paused,
    Unpaused,
    FeeCollectorUpdated(Address),
    FeeRateUpdated(u32),
    OwnershipTransferred(Address, Address),
    EscrowCreated(u64),
    EscrowFunded(u64),
    Released(u64),
    DisputeRaised(u64, String),
    DisputeResolved(u64, bool),
    EmergencyWithdrawal(u64),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized => stringify!(Initialized),
            EscrowEvent::Upgraded(..) => stringify!(Upgraded),
            EscrowEvent::ArbitratorAdded(..) => stringify!(ArbitratorAdded),
            EscrowEvent::ArbitratorRemoved(..) => stringify!(ArbitratorRemoved),
            EscrowEvent::Paused => stringify!(Paused),
            EscrowEvent::Unpaused => stringify!(Unpaused),
            EscrowEvent::FeeCollectorUpdated(..) => stringify!(FeeCollectorUpdated),
            EscrowEvent::FeeRateUpdated(..) => stringify!(FeeRateUpdated),
            EscrowEvent::OwnershipTransferred(..) => stringify!(OwnershipTransferred),
            EscrowEvent::EscrowCreated(..) => stringify!(EscrowCreated),
            EscrowEvent::EscrowFunded(..) => stringify!(EscrowFunded),
            EscrowEvent::Released(..) => stringify!(Released),
            EscrowEvent::DisputeRaised(..) => stringify!(DisputeRaised),
            EscrowEvent::DisputeResolved(..) => stringify!(DisputeResolved),
            EscrowEvent::EmergencyWithdrawal(..) => stringify!(EmergencyWithdrawal),
        }
    }

    pub fn payload(&self, env: &Env) -> Vec<Val> {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            EscrowEvent::Initialized | EscrowEvent::Paused | EscrowEvent::Unpaused => {}
            EscrowEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            EscrowEvent::ArbitratorAdded(arbitrator)
            | EscrowEvent::ArbitratorRemoved(arbitrator) => {
                v.push_back(arbitrator.into_val(env));
            }
            EscrowEvent::FeeCollectorUpdated(fee_collector) => {
                v.push_back(fee_collector.into_val(env));
            }
            EscrowEvent::FeeRateUpdated(fee_bps) => {
                v.push_back(fee_bps.into_val(env));
            }
            EscrowEvent::OwnershipTransferred(previous, new_owner) => {
                v.push_back(previous.into_val(env));
                v.push_back(new_owner.into_val(env));
            }
            EscrowEvent::EscrowCreated(escrow_id)
            | EscrowEvent::EscrowFunded(escrow_id)
            | EscrowEvent::Released(escrow_id)
            | EscrowEvent::EmergencyWithdrawal(escrow_id) => {
                v.push_back(escrow_id.into_val(env));
            }
            EscrowEvent::DisputeRaised(escrow_id, evidence_ref) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(evidence_ref.into_val(env));
            }
            EscrowEvent::DisputeResolved(escrow_id, refunded) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(refunded.into_val(env));
            }
        }

        v
    }

    pub fn publish(&self, env: &Env) {
        env.events().publish((self.name(),), self.payload(env))
    }
}
