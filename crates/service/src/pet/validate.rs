//! Domain rule checked before a pet is persisted.

use models::pet::{PetType, TrackerType};

use crate::errors::ServiceError;
use crate::pet::domain::{PetInput, PetKind};

/// Dogs cannot carry a MEDIUM tracker. Every other combination passes.
/// Runs on create only; update intentionally skips it.
pub fn validate(pet: &PetInput) -> Result<(), ServiceError> {
    if let PetKind::Dog = pet.kind {
        if pet.tracker_type == Some(TrackerType::Medium) {
            return Err(ServiceError::Validation(format!(
                "Tracker type {} is not applicable for {}",
                TrackerType::Medium,
                PetType::Dog
            )));
        }
    }
    Ok(())
}
