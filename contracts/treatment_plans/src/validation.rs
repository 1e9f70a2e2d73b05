//! Input bounds for plan text and medication fields.
//!
//! Every check runs before any plan state is read, so a rejected call leaves
//! storage untouched.

use soroban_sdk::String;

use crate::Error;

/// Maximum byte length of a plan description.
pub const MAX_DESCRIPTION_LEN: u32 = 1024;
/// Maximum byte length of a medication name, dosage or frequency.
pub const MAX_MEDICATION_FIELD_LEN: u32 = 128;
/// Maximum number of medications held by one plan.
pub const MAX_MEDICATIONS: u32 = 50;

pub fn validate_description(description: &String) -> Result<(), Error> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::DescriptionTooLong);
    }
    Ok(())
}

pub fn validate_medication_fields(
    name: &String,
    dosage: &String,
    frequency: &String,
) -> Result<(), Error> {
    for field in [name, dosage, frequency] {
        if field.len() > MAX_MEDICATION_FIELD_LEN {
            return Err(Error::MedicationFieldTooLong);
        }
    }
    Ok(())
}
