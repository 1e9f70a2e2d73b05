use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

// ==================== Medication ====================

/// A prescribed medication. Never edited once appended to a plan.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: u64,
    pub end_date: u64,
}

// ==================== Treatment Plan ====================

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TreatmentPlan {
    pub doctor: Address,
    pub patient: Address,
    pub description: String,
    pub created_at: u64,
    pub last_updated: u64,
    pub is_completed: bool,
    pub patient_consent: bool,
    /// Append-only, in prescription order.
    pub medications: Vec<Medication>,
}

/// Lifecycle stage of a plan. Derived from the plan flags, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum PlanStatus {
    /// Awaiting patient consent.
    Created = 0,
    /// Patient consented; the doctor may edit, prescribe and complete.
    Consented = 1,
    /// Terminal.
    Completed = 2,
}

impl TreatmentPlan {
    pub fn status(&self) -> PlanStatus {
        if self.is_completed {
            PlanStatus::Completed
        } else if self.patient_consent {
            PlanStatus::Consented
        } else {
            PlanStatus::Created
        }
    }

    /// Stamps a mutation. `last_updated` never moves behind its previous value.
    pub(crate) fn touch(&mut self, now: u64) {
        if now > self.last_updated {
            self.last_updated = now;
        }
    }
}

// ==================== Administration ====================

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UpgradeRecord {
    pub wasm_hash: BytesN<32>,
    pub version: u32,
    pub upgraded_at: u64,
}

// ==================== Storage Keys ====================

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // Singleton / lifecycle — instance storage
    Admin,
    Paused,
    Version,
    UpgradeHistory, // Vec<UpgradeRecord>

    // Doctor treatment store — persistent
    Plan(Address, Address),   // (doctor, patient) → TreatmentPlan
    DoctorPatients(Address),  // Vec<Address> — creation order

    // Patient back-reference index — persistent
    PatientDoctors(Address),  // Vec<Address> — creation order
}
