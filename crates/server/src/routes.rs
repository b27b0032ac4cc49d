use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::pet::{PetService, SeaOrmPetRepository};

pub mod pets;

#[derive(Clone)]
pub struct ServerState {
    pub pets: Arc<PetService<SeaOrmPetRepository>>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/api/pets", get(pets::get_all_pets))
        .route("/api/pets/cat", post(pets::add_cat))
        .route("/api/pets/dog", post(pets::add_dog))
        .route("/api/pets/outside-zone", get(pets::get_pets_outside_zone))
        .route("/api/pets/lost-trackers", get(pets::get_lost_tracker_cats))
        .route("/api/pets/cats", get(pets::get_all_cats))
        .route("/api/pets/dogs", get(pets::get_all_dogs))
        .route("/api/pets/owner/:owner_id", get(pets::get_pets_by_owner_id))
        .route(
            "/api/pets/:id",
            get(pets::get_pet_by_id).put(pets::update_pet).delete(pets::delete_pet),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(cors)
}
