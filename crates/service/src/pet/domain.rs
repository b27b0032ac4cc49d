//! Domain representation of pets: shared fields plus a tagged union for the
//! variant-specific payload. The `pet_type` discriminator is derived from
//! the variant, so record and discriminator can never disagree here.

use models::pet::{self, PetType, TrackerType};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Variant-specific payload. `lost_tracker` exists only for cats.
#[derive(Debug, Clone, PartialEq)]
pub enum PetKind {
    Cat { lost_tracker: Option<bool> },
    Dog,
}

impl PetKind {
    pub fn pet_type(&self) -> PetType {
        match self {
            PetKind::Cat { .. } => PetType::Cat,
            PetKind::Dog => PetType::Dog,
        }
    }

    pub fn lost_tracker(&self) -> Option<bool> {
        match self {
            PetKind::Cat { lost_tracker } => *lost_tracker,
            PetKind::Dog => None,
        }
    }
}

/// Inbound pet, before the store has assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct PetInput {
    pub tracker_type: Option<TrackerType>,
    pub owner_id: Option<i32>,
    pub in_zone: Option<bool>,
    pub kind: PetKind,
}

/// Persisted pet.
#[derive(Debug, Clone, PartialEq)]
pub struct PetRecord {
    pub id: i64,
    pub tracker_type: Option<TrackerType>,
    pub owner_id: Option<i32>,
    pub in_zone: Option<bool>,
    pub kind: PetKind,
}

impl PetInput {
    pub fn pet_type(&self) -> PetType {
        self.kind.pet_type()
    }

    pub fn into_active_model(self) -> pet::ActiveModel {
        pet::ActiveModel {
            id: NotSet,
            pet_type: Set(self.kind.pet_type()),
            tracker_type: Set(self.tracker_type),
            owner_id: Set(self.owner_id),
            in_zone: Set(self.in_zone),
            lost_tracker: Set(self.kind.lost_tracker()),
        }
    }
}

impl PetRecord {
    pub fn pet_type(&self) -> PetType {
        self.kind.pet_type()
    }

    pub fn from_model(m: pet::Model) -> Self {
        let kind = match m.pet_type {
            PetType::Cat => PetKind::Cat { lost_tracker: m.lost_tracker },
            // a stray lost_tracker value on a DOG row carries no meaning
            PetType::Dog => PetKind::Dog,
        };
        Self {
            id: m.id,
            tracker_type: m.tracker_type,
            owner_id: m.owner_id,
            in_zone: m.in_zone,
            kind,
        }
    }

    pub fn into_active_model(self) -> pet::ActiveModel {
        pet::ActiveModel {
            id: Set(self.id),
            pet_type: Set(self.kind.pet_type()),
            tracker_type: Set(self.tracker_type),
            owner_id: Set(self.owner_id),
            in_zone: Set(self.in_zone),
            lost_tracker: Set(self.kind.lost_tracker()),
        }
    }

    /// Aggregation key for the outside-zone report, e.g. `CAT-SMALL`.
    /// A missing tracker renders as the literal `null`.
    pub fn group_key(&self) -> String {
        match self.tracker_type {
            Some(t) => format!("{}-{}", self.pet_type(), t),
            None => format!("{}-null", self.pet_type()),
        }
    }
}

// Wire shape is camelCase with the discriminator inline; `lostTracker`
// appears only on cats.
impl Serialize for PetRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match self.kind {
            PetKind::Cat { .. } => 6,
            PetKind::Dog => 5,
        };
        let mut map = serializer.serialize_map(Some(fields))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("petType", &self.pet_type())?;
        map.serialize_entry("trackerType", &self.tracker_type)?;
        map.serialize_entry("ownerId", &self.owner_id)?;
        map.serialize_entry("inZone", &self.in_zone)?;
        if let PetKind::Cat { lost_tracker } = &self.kind {
            map.serialize_entry("lostTracker", lost_tracker)?;
        }
        map.end()
    }
}
