use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator stored alongside every row; always agrees with which
/// variant-specific columns are meaningful.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PetType {
    #[sea_orm(string_value = "CAT")]
    #[serde(rename = "CAT")]
    Cat,
    #[sea_orm(string_value = "DOG")]
    #[serde(rename = "DOG")]
    Dog,
}

/// Size class of the tracking device attached to a pet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TrackerType {
    #[sea_orm(string_value = "SMALL")]
    #[serde(rename = "SMALL")]
    Small,
    #[sea_orm(string_value = "MEDIUM")]
    #[serde(rename = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "BIG")]
    #[serde(rename = "BIG")]
    Big,
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetType::Cat => f.write_str("CAT"),
            PetType::Dog => f.write_str("DOG"),
        }
    }
}

impl fmt::Display for TrackerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerType::Small => f.write_str("SMALL"),
            TrackerType::Medium => f.write_str("MEDIUM"),
            TrackerType::Big => f.write_str("BIG"),
        }
    }
}

/// Single-table layout for both variants; `lost_tracker` is only
/// meaningful on CAT rows and stays NULL for dogs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pet_type: PetType,
    pub tracker_type: Option<TrackerType>,
    pub owner_id: Option<i32>,
    pub in_zone: Option<bool>,
    pub lost_tracker: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_display_matches_wire_names() {
        assert_eq!(PetType::Cat.to_string(), "CAT");
        assert_eq!(PetType::Dog.to_string(), "DOG");
        assert_eq!(TrackerType::Medium.to_string(), "MEDIUM");
    }

    #[test]
    fn enums_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&PetType::Cat).unwrap(), "\"CAT\"");
        assert_eq!(serde_json::to_string(&TrackerType::Big).unwrap(), "\"BIG\"");
        let t: TrackerType = serde_json::from_str("\"SMALL\"").unwrap();
        assert_eq!(t, TrackerType::Small);
    }
}
