use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::{DataKey, TreatmentPlan, UpgradeRecord};

/// Persistent entries are bumped back to ~30 days once they fall under ~7 days.
const PLAN_TTL_THRESHOLD: u32 = 120_960;
const PLAN_TTL_EXTEND_TO: u32 = 518_400;
const INSTANCE_TTL_THRESHOLD: u32 = 120_960;
const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;

// ==================== Instance ====================

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_version(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Version)
        .unwrap_or(0)
}

pub fn set_version(env: &Env, version: u32) {
    env.storage().instance().set(&DataKey::Version, &version);
}

pub fn get_upgrade_history(env: &Env) -> Vec<UpgradeRecord> {
    env.storage()
        .instance()
        .get(&DataKey::UpgradeHistory)
        .unwrap_or(Vec::new(env))
}

pub fn add_upgrade_record(env: &Env, wasm_hash: BytesN<32>, version: u32) {
    let mut history = get_upgrade_history(env);
    history.push_back(UpgradeRecord {
        wasm_hash,
        version,
        upgraded_at: env.ledger().timestamp(),
    });
    env.storage()
        .instance()
        .set(&DataKey::UpgradeHistory, &history);
}

// ==================== Doctor Treatment Store ====================

pub fn has_plan(env: &Env, doctor: &Address, patient: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Plan(doctor.clone(), patient.clone()))
}

pub fn get_plan(env: &Env, doctor: &Address, patient: &Address) -> Option<TreatmentPlan> {
    env.storage()
        .persistent()
        .get(&DataKey::Plan(doctor.clone(), patient.clone()))
}

/// Writes the plan back in place. The caller is responsible for `last_updated`.
pub fn set_plan(env: &Env, plan: &TreatmentPlan) {
    let key = DataKey::Plan(plan.doctor.clone(), plan.patient.clone());
    env.storage().persistent().set(&key, plan);
    env.storage()
        .persistent()
        .extend_ttl(&key, PLAN_TTL_THRESHOLD, PLAN_TTL_EXTEND_TO);
}

pub fn get_doctor_patients(env: &Env, doctor: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::DoctorPatients(doctor.clone()))
        .unwrap_or(Vec::new(env))
}

/// Appends to the doctor's store, creating it on first use.
pub fn append_doctor_patient(env: &Env, doctor: &Address, patient: &Address) {
    let key = DataKey::DoctorPatients(doctor.clone());
    let mut patients = get_doctor_patients(env, doctor);
    patients.push_back(patient.clone());
    env.storage().persistent().set(&key, &patients);
    env.storage()
        .persistent()
        .extend_ttl(&key, PLAN_TTL_THRESHOLD, PLAN_TTL_EXTEND_TO);
}

// ==================== Patient Back-Reference Index ====================

pub fn get_patient_doctors(env: &Env, patient: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientDoctors(patient.clone()))
        .unwrap_or(Vec::new(env))
}

/// Append-only; no deduplication.
pub fn append_patient_doctor(env: &Env, patient: &Address, doctor: &Address) {
    let key = DataKey::PatientDoctors(patient.clone());
    let mut doctors = get_patient_doctors(env, patient);
    doctors.push_back(doctor.clone());
    env.storage().persistent().set(&key, &doctors);
    env.storage()
        .persistent()
        .extend_ttl(&key, PLAN_TTL_THRESHOLD, PLAN_TTL_EXTEND_TO);
}
