#![no_std]
#![allow(clippy::too_many_arguments)]


mod errors;
pub mod events;
mod storage;
mod types;
mod validation;

pub use errors::{get_suggestion, Error};
pub use types::{DataKey, Medication, PlanStatus, TreatmentPlan, UpgradeRecord};
pub use validation::{MAX_DESCRIPTION_LEN, MAX_MEDICATIONS, MAX_MEDICATION_FIELD_LEN};

use soroban_sdk::{contract, contractimpl, contractmeta, Address, BytesN, Env, String, Vec};

// ==================== Constants ====================

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Version written by `initialize`; upgrades must move strictly past it.
const INITIAL_VERSION: u32 = 1;

contractmeta!(
    key = "Description",
    val = "Doctor-authored treatment plans gated by patient consent"
);

// ==================== Contract ====================

#[contract]
pub struct TreatmentPlanContract;

#[contractimpl]
impl TreatmentPlanContract {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Set the admin allowed to pause and upgrade. Must be called at most once.
    /// Plan operations work without it.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::get_admin(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_paused(&env, false);
        storage::set_version(&env, INITIAL_VERSION);
        storage::bump_instance(&env);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn pause(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;
        storage::set_paused(&env, true);
        storage::bump_instance(&env);
        events::emit_paused(&env, admin);
        Ok(())
    }

    pub fn unpause(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;
        storage::set_paused(&env, false);
        storage::bump_instance(&env);
        events::emit_unpaused(&env, admin);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn get_version(env: Env) -> u32 {
        storage::get_version(&env)
    }

    /// Swap the contract WASM. `new_version` must be greater than the current one.
    pub fn upgrade(
        env: Env,
        admin: Address,
        new_wasm_hash: BytesN<32>,
        new_version: u32,
    ) -> Result<(), Error> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        if new_version <= storage::get_version(&env) {
            return Err(Error::InvalidVersion);
        }

        storage::add_upgrade_record(&env, new_wasm_hash.clone(), new_version);
        storage::set_version(&env, new_version);
        storage::bump_instance(&env);
        events::emit_upgraded(&env, admin, new_version);

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    pub fn get_upgrade_history(env: Env) -> Vec<UpgradeRecord> {
        storage::get_upgrade_history(&env)
    }

    // ------------------------------------------------------------------
    // Plan lifecycle
    // ------------------------------------------------------------------

    /// Open a plan for `patient`, authored by `doctor`. One plan per pair.
    pub fn create_treatment_plan(
        env: Env,
        doctor: Address,
        patient: Address,
        description: String,
    ) -> Result<(), Error> {
        doctor.require_auth();
        Self::require_not_paused(&env)?;
        validation::validate_description(&description)?;

        if storage::has_plan(&env, &doctor, &patient) {
            return Err(Error::TreatmentAlreadyExists);
        }

        let now = env.ledger().timestamp();
        let plan = TreatmentPlan {
            doctor: doctor.clone(),
            patient: patient.clone(),
            description,
            created_at: now,
            last_updated: now,
            is_completed: false,
            patient_consent: false,
            medications: Vec::new(&env),
        };

        storage::set_plan(&env, &plan);
        storage::append_doctor_patient(&env, &doctor, &patient);
        storage::append_patient_doctor(&env, &patient, &doctor);
        storage::bump_instance(&env);

        events::emit_plan_created(&env, doctor, patient);
        Ok(())
    }

    /// Replace the plan description. Requires consent and an open plan.
    pub fn update_treatment(
        env: Env,
        doctor: Address,
        patient: Address,
        new_description: String,
    ) -> Result<(), Error> {
        doctor.require_auth();
        Self::require_not_paused(&env)?;
        validation::validate_description(&new_description)?;

        let mut plan = Self::load_doctor_plan(&env, &doctor, &patient)?;
        Self::require_open(&plan)?;

        plan.description = new_description;
        plan.touch(env.ledger().timestamp());
        storage::set_plan(&env, &plan);
        storage::bump_instance(&env);

        events::emit_plan_updated(&env, doctor, patient);
        Ok(())
    }

    /// Patient-side consent to `doctor`'s plan. Repeat calls only refresh `last_updated`.
    pub fn provide_consent(env: Env, patient: Address, doctor: Address) -> Result<(), Error> {
        patient.require_auth();
        Self::require_not_paused(&env)?;

        let mut plan = storage::get_plan(&env, &doctor, &patient).ok_or(Error::TreatmentNotFound)?;
        if plan.patient != patient {
            return Err(Error::NotAuthorized);
        }

        plan.patient_consent = true;
        plan.touch(env.ledger().timestamp());
        storage::set_plan(&env, &plan);
        storage::bump_instance(&env);

        events::emit_consent_given(&env, doctor, patient);
        Ok(())
    }

    /// Close the plan. Completing twice is rejected.
    pub fn complete_treatment(env: Env, doctor: Address, patient: Address) -> Result<(), Error> {
        doctor.require_auth();
        Self::require_not_paused(&env)?;

        let mut plan = Self::load_doctor_plan(&env, &doctor, &patient)?;
        Self::require_open(&plan)?;

        plan.is_completed = true;
        plan.touch(env.ledger().timestamp());
        storage::set_plan(&env, &plan);
        storage::bump_instance(&env);

        events::emit_plan_completed(&env, doctor, patient, plan.medications.len());
        Ok(())
    }

    /// Prescribe a medication running `duration_days` from now. Zero days is allowed.
    pub fn add_medication(
        env: Env,
        doctor: Address,
        patient: Address,
        name: String,
        dosage: String,
        frequency: String,
        duration_days: u32,
    ) -> Result<(), Error> {
        doctor.require_auth();
        Self::require_not_paused(&env)?;
        validation::validate_medication_fields(&name, &dosage, &frequency)?;

        let mut plan = Self::load_doctor_plan(&env, &doctor, &patient)?;
        Self::require_open(&plan)?;
        if plan.medications.len() >= MAX_MEDICATIONS {
            return Err(Error::TooManyMedications);
        }

        let now = env.ledger().timestamp();
        let end_date = now.saturating_add(u64::from(duration_days) * SECONDS_PER_DAY);
        plan.medications.push_back(Medication {
            name: name.clone(),
            dosage,
            frequency,
            start_date: now,
            end_date,
        });
        plan.touch(now);
        storage::set_plan(&env, &plan);
        storage::bump_instance(&env);

        events::emit_medication_added(
            &env,
            doctor,
            patient,
            name,
            end_date,
            plan.medications.len(),
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries (public, unauthenticated)
    // ------------------------------------------------------------------

    /// Returns `(description, created_at, is_completed, medication_count)`.
    pub fn get_treatment_details(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<(String, u64, bool, u32), Error> {
        let plan = storage::get_plan(&env, &doctor, &patient).ok_or(Error::TreatmentNotFound)?;
        let medication_count = plan.medications.len();
        Ok((plan.description, plan.created_at, plan.is_completed, medication_count))
    }

    pub fn get_treatment_plan(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<TreatmentPlan, Error> {
        storage::get_plan(&env, &doctor, &patient).ok_or(Error::TreatmentNotFound)
    }

    pub fn get_plan_status(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<PlanStatus, Error> {
        storage::get_plan(&env, &doctor, &patient)
            .map(|plan| plan.status())
            .ok_or(Error::TreatmentNotFound)
    }

    pub fn get_medications(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<Vec<Medication>, Error> {
        storage::get_plan(&env, &doctor, &patient)
            .map(|plan| plan.medications)
            .ok_or(Error::TreatmentNotFound)
    }

    pub fn has_treatment_plan(env: Env, doctor: Address, patient: Address) -> bool {
        storage::has_plan(&env, &doctor, &patient)
    }

    /// Patients in the doctor's store, in plan creation order.
    pub fn get_doctor_patients(env: Env, doctor: Address) -> Vec<Address> {
        storage::get_doctor_patients(&env, &doctor)
    }

    pub fn get_doctor_plans(env: Env, doctor: Address) -> Vec<TreatmentPlan> {
        let mut plans = Vec::new(&env);
        for patient in storage::get_doctor_patients(&env, &doctor).iter() {
            if let Some(plan) = storage::get_plan(&env, &doctor, &patient) {
                plans.push_back(plan);
            }
        }
        plans
    }

    /// Back-reference index: doctors holding a plan for `patient`.
    pub fn get_patient_doctors(env: Env, patient: Address) -> Vec<Address> {
        storage::get_patient_doctors(&env, &patient)
    }

    /// Resolves the back-reference index against each doctor's store.
    pub fn get_patient_plans(env: Env, patient: Address) -> Vec<TreatmentPlan> {
        let mut plans = Vec::new(&env);
        for doctor in storage::get_patient_doctors(&env, &patient).iter() {
            if let Some(plan) = storage::get_plan(&env, &doctor, &patient) {
                plans.push_back(plan);
            }
        }
        plans
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *caller != admin {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), Error> {
        if storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    /// Resolves the caller's own plan for `patient`, checking record authorship.
    fn load_doctor_plan(
        env: &Env,
        doctor: &Address,
        patient: &Address,
    ) -> Result<TreatmentPlan, Error> {
        let plan = storage::get_plan(env, doctor, patient).ok_or(Error::TreatmentNotFound)?;
        if plan.doctor != *doctor {
            return Err(Error::NotAuthorized);
        }
        Ok(plan)
    }

    /// Consent gate, then completion gate.
    fn require_open(plan: &TreatmentPlan) -> Result<(), Error> {
        if !plan.patient_consent {
            return Err(Error::ConsentRequired);
        }
        if plan.is_completed {
            return Err(Error::AlreadyCompleted);
        }
        Ok(())
    }
}
