//! Explicit decoding of pet payloads.
//!
//! The `petType` discriminator is read first, then every remaining key is
//! checked against the allowed set for that variant. Unknown keys are a
//! hard error, never silently absorbed.

use models::pet::{PetType, TrackerType};
use serde_json::{Map, Value};
use service::pet::{PetInput, PetKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("Unknown property '{0}' found in request")]
    UnknownProperty(String),
    #[error("Missing required property 'petType'")]
    MissingPetType,
    #[error("Invalid value for property '{field}': {detail}")]
    InvalidProperty { field: &'static str, detail: String },
    #[error("Request body must be a JSON object")]
    NotAnObject,
}

// Shared fields; `id` is accepted and ignored so clients may echo records
// back on update.
const BASE_PROPERTIES: [&str; 5] = ["id", "petType", "trackerType", "ownerId", "inZone"];

pub fn decode_pet_input(value: &Value) -> Result<PetInput, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let pet_type = decode_pet_type(obj)?;
    reject_unknown_properties(obj, pet_type)?;

    let tracker_type = decode_tracker_type(obj)?;
    let owner_id = decode_owner_id(obj)?;
    let in_zone = decode_bool(obj, "inZone")?;

    let kind = match pet_type {
        PetType::Cat => PetKind::Cat { lost_tracker: decode_bool(obj, "lostTracker")? },
        PetType::Dog => PetKind::Dog,
    };

    Ok(PetInput { tracker_type, owner_id, in_zone, kind })
}

fn decode_pet_type(obj: &Map<String, Value>) -> Result<PetType, DecodeError> {
    match obj.get("petType") {
        None | Some(Value::Null) => Err(DecodeError::MissingPetType),
        Some(Value::String(s)) if s == "CAT" => Ok(PetType::Cat),
        Some(Value::String(s)) if s == "DOG" => Ok(PetType::Dog),
        Some(other) => Err(DecodeError::InvalidProperty {
            field: "petType",
            detail: format!("expected \"CAT\" or \"DOG\", got {}", other),
        }),
    }
}

fn reject_unknown_properties(obj: &Map<String, Value>, pet_type: PetType) -> Result<(), DecodeError> {
    for key in obj.keys() {
        let allowed = BASE_PROPERTIES.contains(&key.as_str())
            || (pet_type == PetType::Cat && key == "lostTracker");
        if !allowed {
            return Err(DecodeError::UnknownProperty(key.clone()));
        }
    }
    Ok(())
}

fn decode_tracker_type(obj: &Map<String, Value>) -> Result<Option<TrackerType>, DecodeError> {
    match obj.get("trackerType") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => match s.as_str() {
            "SMALL" => Ok(Some(TrackerType::Small)),
            "MEDIUM" => Ok(Some(TrackerType::Medium)),
            "BIG" => Ok(Some(TrackerType::Big)),
            other => Err(DecodeError::InvalidProperty {
                field: "trackerType",
                detail: format!("expected one of SMALL, MEDIUM, BIG, got \"{}\"", other),
            }),
        },
        Some(other) => Err(DecodeError::InvalidProperty {
            field: "trackerType",
            detail: format!("expected a string, got {}", other),
        }),
    }
}

fn decode_owner_id(obj: &Map<String, Value>) -> Result<Option<i32>, DecodeError> {
    match obj.get("ownerId") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let id = n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or(DecodeError::InvalidProperty {
                    field: "ownerId",
                    detail: format!("expected a 32-bit integer, got {}", n),
                })?;
            Ok(Some(id))
        }
        Some(other) => Err(DecodeError::InvalidProperty {
            field: "ownerId",
            detail: format!("expected an integer, got {}", other),
        }),
    }
}

fn decode_bool(obj: &Map<String, Value>, field: &'static str) -> Result<Option<bool>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(DecodeError::InvalidProperty {
            field,
            detail: format!("expected a boolean, got {}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_cat() {
        let input = decode_pet_input(&json!({
            "petType": "CAT",
            "trackerType": "SMALL",
            "ownerId": 1,
            "inZone": false,
            "lostTracker": false
        }))
        .unwrap();
        assert_eq!(input.pet_type(), PetType::Cat);
        assert_eq!(input.tracker_type, Some(TrackerType::Small));
        assert_eq!(input.owner_id, Some(1));
        assert_eq!(input.in_zone, Some(false));
        assert_eq!(input.kind, PetKind::Cat { lost_tracker: Some(false) });
    }

    #[test]
    fn decodes_dog_without_lost_tracker_field() {
        let input = decode_pet_input(&json!({
            "petType": "DOG",
            "trackerType": "MEDIUM",
            "ownerId": 1,
            "inZone": true
        }))
        .unwrap();
        // decoding accepts MEDIUM; the validation rule rejects it later
        assert_eq!(input.kind, PetKind::Dog);
        assert_eq!(input.tracker_type, Some(TrackerType::Medium));
    }

    #[test]
    fn lost_tracker_on_dog_is_unknown_property() {
        let err = decode_pet_input(&json!({
            "petType": "DOG",
            "lostTracker": true
        }))
        .unwrap_err();
        assert_eq!(err, DecodeError::UnknownProperty("lostTracker".into()));
    }

    #[test]
    fn unknown_property_names_the_offender() {
        let err = decode_pet_input(&json!({
            "petType": "CAT",
            "nickname": "whiskers"
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown property 'nickname' found in request");
    }

    #[test]
    fn missing_discriminator_rejected() {
        let err = decode_pet_input(&json!({"trackerType": "SMALL"})).unwrap_err();
        assert_eq!(err, DecodeError::MissingPetType);
    }

    #[test]
    fn invalid_discriminator_rejected() {
        let err = decode_pet_input(&json!({"petType": "HAMSTER"})).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidProperty { field: "petType", .. }));
    }

    #[test]
    fn nullable_fields_decode_to_none() {
        let input = decode_pet_input(&json!({
            "petType": "CAT",
            "trackerType": null,
            "inZone": null
        }))
        .unwrap();
        assert_eq!(input.tracker_type, None);
        assert_eq!(input.in_zone, None);
        assert_eq!(input.owner_id, None);
        assert_eq!(input.kind, PetKind::Cat { lost_tracker: None });
    }

    #[test]
    fn id_is_accepted_and_ignored() {
        let input = decode_pet_input(&json!({
            "petType": "DOG",
            "id": 17,
            "trackerType": "BIG"
        }))
        .unwrap();
        assert_eq!(input.kind, PetKind::Dog);
    }

    #[test]
    fn non_object_rejected() {
        assert_eq!(decode_pet_input(&json!([1, 2])).unwrap_err(), DecodeError::NotAnObject);
    }

    #[test]
    fn wrong_scalar_types_rejected() {
        assert!(matches!(
            decode_pet_input(&json!({"petType": "CAT", "ownerId": "one"})).unwrap_err(),
            DecodeError::InvalidProperty { field: "ownerId", .. }
        ));
        assert!(matches!(
            decode_pet_input(&json!({"petType": "CAT", "inZone": "yes"})).unwrap_err(),
            DecodeError::InvalidProperty { field: "inZone", .. }
        ));
    }
}
