use super::policy::POLICIES;
use crate::types::scoring::{Score, ScoreCard};

pub const CSR_SPEND_DIVISOR: f64 = 500.0;
pub const CSR_COMPONENT_CAP: f64 = 50.0;
pub const TOTAL_ENERGY_GUARD: f64 = 10.0;
pub const POLICY_DENOMINATOR: usize = POLICIES.len();

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub policy_count: u8,
    pub csr_spend: f64,
    pub renewable_energy: f64,
    pub total_energy: f64,
}

pub fn talk_score(policy_count: u8) -> Score {
    (f64::from(policy_count) / POLICY_DENOMINATOR as f64) * 100.0
}

/// Share of renewable energy, zero while total energy is still at or near its sentinel.
pub fn renew_mix(renewable_energy: f64, total_energy: f64) -> Score {
    if total_energy > TOTAL_ENERGY_GUARD {
        (renewable_energy / total_energy) * 100.0
    } else {
        0.0
    }
}

pub fn csr_component(csr_spend: f64) -> Score {
    ((csr_spend / CSR_SPEND_DIVISOR) * CSR_COMPONENT_CAP).min(CSR_COMPONENT_CAP)
}

pub fn walk_score(renewable_energy: f64, total_energy: f64, csr_spend: f64) -> Score {
    (renew_mix(renewable_energy, total_energy) + csr_component(csr_spend)).min(100.0)
}

pub fn score(inputs: &ScoreInputs) -> ScoreCard {
    let talk = talk_score(inputs.policy_count);
    let walk = walk_score(
        inputs.renewable_energy,
        inputs.total_energy,
        inputs.csr_spend,
    );
    let risk = (talk - walk).max(0.0);
    ScoreCard::new(talk, walk, risk)
}
