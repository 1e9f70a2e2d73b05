use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

// ==================== Event Payload Structs ====================
// Published to the Soroban event log under ("TREAT", symbol_short!("…")).

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PlanEvent {
    pub doctor: Address,
    pub patient: Address,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PlanCompletedEvent {
    pub doctor: Address,
    pub patient: Address,
    pub medication_count: u32,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MedicationAddedEvent {
    pub doctor: Address,
    pub patient: Address,
    pub name: String,
    pub end_date: u64,
    /// Count after the addition.
    pub medication_count: u32,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AdminActionEvent {
    pub admin: Address,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UpgradeEvent {
    pub admin: Address,
    pub version: u32,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

fn plan_event(env: &Env, doctor: Address, patient: Address) -> PlanEvent {
    PlanEvent {
        doctor,
        patient,
        timestamp: env.ledger().timestamp(),
    }
}

pub fn emit_plan_created(env: &Env, doctor: Address, patient: Address) {
    env.events().publish(
        ("TREAT", symbol_short!("PLAN_NEW")),
        plan_event(env, doctor, patient),
    );
}

pub fn emit_plan_updated(env: &Env, doctor: Address, patient: Address) {
    env.events().publish(
        ("TREAT", symbol_short!("PLAN_UPD")),
        plan_event(env, doctor, patient),
    );
}

pub fn emit_consent_given(env: &Env, doctor: Address, patient: Address) {
    env.events().publish(
        ("TREAT", symbol_short!("CONSENT")),
        plan_event(env, doctor, patient),
    );
}

pub fn emit_plan_completed(env: &Env, doctor: Address, patient: Address, medication_count: u32) {
    env.events().publish(
        ("TREAT", symbol_short!("PLAN_DONE")),
        PlanCompletedEvent {
            doctor,
            patient,
            medication_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_medication_added(
    env: &Env,
    doctor: Address,
    patient: Address,
    name: String,
    end_date: u64,
    medication_count: u32,
) {
    env.events().publish(
        ("TREAT", symbol_short!("MED_ADD")),
        MedicationAddedEvent {
            doctor,
            patient,
            name,
            end_date,
            medication_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_paused(env: &Env, admin: Address) {
    env.events().publish(
        ("TREAT", symbol_short!("PAUSED")),
        AdminActionEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_unpaused(env: &Env, admin: Address) {
    env.events().publish(
        ("TREAT", symbol_short!("UNPAUSED")),
        AdminActionEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_upgraded(env: &Env, admin: Address, version: u32) {
    env.events().publish(
        ("TREAT", symbol_short!("UPGRADED")),
        UpgradeEvent {
            admin,
            version,
            timestamp: env.ledger().timestamp(),
        },
    );
}
