use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use models::pet::{self, PetType};

use crate::errors::ServiceError;
use crate::pet::domain::{PetInput, PetRecord};

/// Durable mapping from id to pet record.
///
/// Per-operation atomicity only; `delete` is idempotent and `update`
/// requires the row to exist.
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn insert(&self, pet: PetInput) -> Result<PetRecord, ServiceError>;
    async fn update(&self, pet: PetRecord) -> Result<PetRecord, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<PetRecord>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<PetRecord>, ServiceError>;
    async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<PetRecord>, ServiceError>;
    async fn get_out_of_zone(&self) -> Result<Vec<PetRecord>, ServiceError>;
    async fn get_cats_with_lost_tracker(&self) -> Result<Vec<PetRecord>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPetRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

#[async_trait]
impl PetRepository for SeaOrmPetRepository {
    async fn insert(&self, pet: PetInput) -> Result<PetRecord, ServiceError> {
        let model = pet.into_active_model().insert(&self.db).await.map_err(db_err)?;
        Ok(PetRecord::from_model(model))
    }

    async fn update(&self, pet: PetRecord) -> Result<PetRecord, ServiceError> {
        let id = pet.id;
        let model = pet
            .into_active_model()
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ServiceError::pet_not_found(id),
                e => db_err(e),
            })?;
        Ok(PetRecord::from_model(model))
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        pet::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<PetRecord>, ServiceError> {
        let found = pet::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(PetRecord::from_model))
    }

    async fn get_all(&self) -> Result<Vec<PetRecord>, ServiceError> {
        let rows = pet::Entity::find()
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(PetRecord::from_model).collect())
    }

    async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<PetRecord>, ServiceError> {
        let rows = pet::Entity::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(PetRecord::from_model).collect())
    }

    async fn get_out_of_zone(&self) -> Result<Vec<PetRecord>, ServiceError> {
        // NULL in_zone means "not yet observed" and is not out of zone
        let rows = pet::Entity::find()
            .filter(pet::Column::InZone.eq(false))
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(PetRecord::from_model).collect())
    }

    async fn get_cats_with_lost_tracker(&self) -> Result<Vec<PetRecord>, ServiceError> {
        let rows = pet::Entity::find()
            .filter(pet::Column::PetType.eq(PetType::Cat))
            .filter(pet::Column::LostTracker.eq(true))
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(PetRecord::from_model).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::domain::PetKind;
    use crate::test_support::get_db;
    use models::pet::TrackerType;

    fn cat(tracker: Option<TrackerType>, owner: i32, in_zone: bool, lost: bool) -> PetInput {
        PetInput {
            tracker_type: tracker,
            owner_id: Some(owner),
            in_zone: Some(in_zone),
            kind: PetKind::Cat { lost_tracker: Some(lost) },
        }
    }

    fn dog(tracker: Option<TrackerType>, owner: i32, in_zone: bool) -> PetInput {
        PetInput {
            tracker_type: tracker,
            owner_id: Some(owner),
            in_zone: Some(in_zone),
            kind: PetKind::Dog,
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() -> anyhow::Result<()> {
        let repo = SeaOrmPetRepository::new(get_db().await?);

        let a = repo.insert(cat(Some(TrackerType::Small), 1, true, false)).await?;
        let b = repo.insert(dog(Some(TrackerType::Big), 2, false)).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(a.pet_type(), PetType::Cat);
        assert_eq!(b.pet_type(), PetType::Dog);

        let found = repo.get_by_id(a.id).await?.expect("cat row");
        assert_eq!(found, a);
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_mutable_columns() -> anyhow::Result<()> {
        let repo = SeaOrmPetRepository::new(get_db().await?);

        let mut rec = repo.insert(cat(Some(TrackerType::Small), 1, true, false)).await?;
        rec.tracker_type = Some(TrackerType::Big);
        rec.in_zone = Some(false);
        rec.kind = PetKind::Cat { lost_tracker: Some(true) };
        let updated = repo.update(rec.clone()).await?;
        assert_eq!(updated, rec);

        let reread = repo.get_by_id(rec.id).await?.expect("row");
        assert_eq!(reread.tracker_type, Some(TrackerType::Big));
        assert_eq!(reread.kind.lost_tracker(), Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() -> anyhow::Result<()> {
        let repo = SeaOrmPetRepository::new(get_db().await?);
        let ghost = PetRecord {
            id: 4242,
            tracker_type: None,
            owner_id: None,
            in_zone: None,
            kind: PetKind::Dog,
        };
        let err = repo.update(ghost).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> anyhow::Result<()> {
        let repo = SeaOrmPetRepository::new(get_db().await?);
        let rec = repo.insert(dog(Some(TrackerType::Small), 9, true)).await?;

        repo.delete(rec.id).await?;
        assert!(repo.get_by_id(rec.id).await?.is_none());
        // second delete of the same id must also succeed
        repo.delete(rec.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn owner_and_zone_queries() -> anyhow::Result<()> {
        let repo = SeaOrmPetRepository::new(get_db().await?);

        repo.insert(cat(Some(TrackerType::Small), 1, false, false)).await?;
        repo.insert(dog(Some(TrackerType::Big), 1, false)).await?;
        repo.insert(cat(Some(TrackerType::Small), 2, true, false)).await?;
        // null in_zone stays out of the out-of-zone result
        repo.insert(PetInput {
            tracker_type: None,
            owner_id: Some(1),
            in_zone: None,
            kind: PetKind::Dog,
        })
        .await?;

        assert_eq!(repo.get_by_owner(1).await?.len(), 3);
        assert_eq!(repo.get_by_owner(7).await?.len(), 0);
        assert_eq!(repo.get_out_of_zone().await?.len(), 2);
        assert_eq!(repo.get_all().await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn lost_tracker_query_returns_only_matching_cats() -> anyhow::Result<()> {
        let repo = SeaOrmPetRepository::new(get_db().await?);

        let lost = repo.insert(cat(Some(TrackerType::Small), 1, true, true)).await?;
        repo.insert(cat(Some(TrackerType::Small), 1, true, false)).await?;
        repo.insert(dog(Some(TrackerType::Big), 1, true)).await?;

        let cats = repo.get_cats_with_lost_tracker().await?;
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].id, lost.id);
        assert_eq!(cats[0].kind.lost_tracker(), Some(true));
        Ok(())
    }
}
