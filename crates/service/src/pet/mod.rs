pub mod domain;
pub mod repository;
pub mod service;
pub mod validate;

pub use domain::{PetInput, PetKind, PetRecord};
pub use repository::{PetRepository, SeaOrmPetRepository};
pub use service::PetService;
