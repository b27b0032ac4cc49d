use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use models::pet::PetType;
use service::pet::PetRecord;

use crate::errors::ApiError;
use crate::payload::{self, DecodeError};
use crate::routes::ServerState;

fn require_variant(pet_type: PetType, expected: PetType) -> Result<(), ApiError> {
    if pet_type != expected {
        return Err(ApiError::bad_request(format!(
            "petType {} is not valid for the {} endpoint",
            pet_type,
            expected.to_string().to_lowercase()
        )));
    }
    Ok(())
}

/// Create a cat. The payload's `petType` must say CAT.
pub async fn add_cat(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<Json<PetRecord>, ApiError> {
    let input = payload::decode_pet_input(&body)?;
    require_variant(input.pet_type(), PetType::Cat)?;
    Ok(Json(state.pets.add_pet(input).await?))
}

/// Create a dog. `lostTracker` gets a dedicated error here because it is
/// the one cat-only field clients keep sending to this endpoint.
pub async fn add_dog(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<Json<PetRecord>, ApiError> {
    let input = payload::decode_pet_input(&body).map_err(|e| match e {
        DecodeError::UnknownProperty(ref p) if p == "lostTracker" => ApiError::bad_request(
            "The 'lostTracker' property is not allowed for Dog type. \
             This property is only valid for Cat type.",
        ),
        other => other.into(),
    })?;
    require_variant(input.pet_type(), PetType::Dog)?;
    Ok(Json(state.pets.add_pet(input).await?))
}

pub async fn get_all_pets(State(state): State<ServerState>) -> Result<Json<Vec<PetRecord>>, ApiError> {
    Ok(Json(state.pets.get_all_pets().await?))
}

pub async fn get_pets_outside_zone(
    State(state): State<ServerState>,
) -> Result<Json<HashMap<String, u64>>, ApiError> {
    Ok(Json(state.pets.get_pets_outside_zone().await?))
}

pub async fn get_lost_tracker_cats(
    State(state): State<ServerState>,
) -> Result<Json<Vec<PetRecord>>, ApiError> {
    Ok(Json(state.pets.get_lost_tracker_cats().await?))
}

pub async fn get_pet_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<PetRecord>, ApiError> {
    Ok(Json(state.pets.get_pet_by_id(id).await?))
}

/// Update accepts either variant; the service decides which fields carry
/// over onto the stored record.
pub async fn update_pet(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<PetRecord>, ApiError> {
    let input = payload::decode_pet_input(&body)?;
    Ok(Json(state.pets.update_pet(id, input).await?))
}

pub async fn delete_pet(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.pets.delete_pet(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_pets_by_owner_id(
    State(state): State<ServerState>,
    Path(owner_id): Path<i32>,
) -> Result<Json<Vec<PetRecord>>, ApiError> {
    Ok(Json(state.pets.get_pets_by_owner_id(owner_id).await?))
}

pub async fn get_all_cats(State(state): State<ServerState>) -> Result<Json<Vec<PetRecord>>, ApiError> {
    Ok(Json(state.pets.get_all_cats().await?))
}

pub async fn get_all_dogs(State(state): State<ServerState>) -> Result<Json<Vec<PetRecord>>, ApiError> {
    Ok(Json(state.pets.get_all_dogs().await?))
}
