use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pet::domain::{PetInput, PetKind, PetRecord};
use crate::pet::repository::PetRepository;
use crate::pet::validate::validate;

/// Application service encapsulating pet business rules on top of a
/// repository. Holds no state of its own between calls.
pub struct PetService<R: PetRepository> {
    repo: Arc<R>,
}

impl<R: PetRepository> PetService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate, then persist. Invalid pets never reach the store.
    #[instrument(skip(self, pet), fields(pet_type = %pet.pet_type()))]
    pub async fn add_pet(&self, pet: PetInput) -> Result<PetRecord, ServiceError> {
        validate(&pet)?;
        let saved = self.repo.insert(pet).await?;
        info!(id = saved.id, "pet_created");
        Ok(saved)
    }

    pub async fn get_all_pets(&self) -> Result<Vec<PetRecord>, ServiceError> {
        self.repo.get_all().await
    }

    /// Count pets outside their zone, grouped by `<petType>-<trackerType>`.
    pub async fn get_pets_outside_zone(&self) -> Result<HashMap<String, u64>, ServiceError> {
        let pets = self.repo.get_out_of_zone().await?;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for pet in pets {
            *counts.entry(pet.group_key()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// No existence check: deleting an absent id is a no-op success.
    pub async fn delete_pet(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "pet_deleted");
        Ok(())
    }

    /// Copy mutable fields from `pet` onto the stored record. The stored
    /// variant is preserved even when the incoming discriminator disagrees,
    /// and `lost_tracker` moves over only cat-to-cat. The tracker rule is
    /// not re-checked on update.
    pub async fn update_pet(&self, id: i64, pet: PetInput) -> Result<PetRecord, ServiceError> {
        let mut existing = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::pet_not_found(id))?;

        existing.tracker_type = pet.tracker_type;
        existing.owner_id = pet.owner_id;
        existing.in_zone = pet.in_zone;
        if let (PetKind::Cat { lost_tracker }, PetKind::Cat { lost_tracker: incoming }) =
            (&mut existing.kind, &pet.kind)
        {
            *lost_tracker = *incoming;
        }

        self.repo.update(existing).await
    }

    pub async fn get_pet_by_id(&self, id: i64) -> Result<PetRecord, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::pet_not_found(id))
    }

    pub async fn get_pets_by_owner_id(&self, owner_id: i32) -> Result<Vec<PetRecord>, ServiceError> {
        self.repo.get_by_owner(owner_id).await
    }

    pub async fn get_all_cats(&self) -> Result<Vec<PetRecord>, ServiceError> {
        let pets = self.repo.get_all().await?;
        Ok(pets.into_iter().filter(|p| matches!(p.kind, PetKind::Cat { .. })).collect())
    }

    pub async fn get_all_dogs(&self) -> Result<Vec<PetRecord>, ServiceError> {
        let pets = self.repo.get_all().await?;
        Ok(pets.into_iter().filter(|p| matches!(p.kind, PetKind::Dog)).collect())
    }

    pub async fn get_lost_tracker_cats(&self) -> Result<Vec<PetRecord>, ServiceError> {
        self.repo.get_cats_with_lost_tracker().await
    }
}
