use soroban_sdk::{contracterror, symbol_short, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3–4) ---
    NotAuthorized = 3,
    ContractPaused = 4,

    // --- Plan lookup (5–6) ---
    TreatmentNotFound = 5,
    TreatmentAlreadyExists = 6,

    // --- State transitions (7–8) ---
    ConsentRequired = 7,
    AlreadyCompleted = 8,

    // --- Input validation (9–11) ---
    DescriptionTooLong = 9,
    MedicationFieldTooLong = 10,
    TooManyMedications = 11,

    // --- Upgrades (12) ---
    InvalidVersion = 12,
}

/// Recovery hints surfaced to callers alongside an error.
pub fn get_suggestion(error: Error) -> Symbol {
    match error {
        Error::NotAuthorized => symbol_short!("CHK_AUTH"),
        Error::ContractPaused => symbol_short!("ASK_ADMN"),
        Error::TreatmentNotFound => symbol_short!("CHK_PAIR"),
        Error::TreatmentAlreadyExists => symbol_short!("USE_UPD"),
        Error::ConsentRequired => symbol_short!("GET_CONS"),
        Error::AlreadyCompleted => symbol_short!("NEW_PLAN"),
        Error::DescriptionTooLong | Error::MedicationFieldTooLong => symbol_short!("SHORTEN"),
        Error::TooManyMedications => symbol_short!("NEW_PLAN"),
        Error::InvalidVersion => symbol_short!("BUMP_VER"),
        _ => symbol_short!("CONTACT"),
    }
}
