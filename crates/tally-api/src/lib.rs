//! JSON REST API for Tally.
//!
//! Exposes axum [`Router`]s for the two outcome collections and the
//! organization directory, backed by any [`tally_core::store::OutcomesStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .nest("/api/program_outcomes", tally_api::program_outcomes_router(store.clone()))
//!   .nest("/api/kitchen_outcomes", tally_api::kitchen_outcomes_router(store.clone()))
//!   .nest("/api/organization", tally_api::organization_router(store))
//! ```

pub mod error;
pub mod organizations;
pub mod outcomes;
pub mod program;
pub mod service;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
  Router,
  routing::{MethodFilter, get},
};
use tally_core::{
  kitchen::KitchenOutcomes, program::ProgramOutcomes, record::Outcomes, store::OutcomesStore,
};

pub use error::ApiError;
pub use service::ServiceError;

/// The routes every outcome collection shares, still awaiting their state.
fn outcomes_routes<S, T>() -> Router<Arc<S>>
where
  S: OutcomesStore + 'static,
  T: Outcomes,
{
  Router::new()
    .route(
      "/",
      get(outcomes::list::<S, T>)
        .post(outcomes::create::<S, T>)
        .merge(outcomes::missing(MethodFilter::DELETE, &["id"])),
    )
    .route("/orgs", get(outcomes::org_ids::<S, T>))
    // `/{key}` is a record id for DELETE and a year in `/{key}/{org_id}`.
    .route("/{key}", axum::routing::delete(outcomes::delete_one::<S, T>))
    .route("/{key}/{org_id}", get(outcomes::get_one::<S, T>))
    .route("/year/{year}", get(outcomes::by_year::<S, T>))
    .route("/org/{org_id}", get(outcomes::by_org::<S, T>))
    .route("/years/{org_id}", get(outcomes::distinct_years::<S, T>))
    .route("/values/{org_id}/{field}", get(outcomes::field_values::<S, T>))
    .route("/{key}/", outcomes::missing(MethodFilter::GET, &["orgId"]))
    .route("/year/", outcomes::missing(MethodFilter::GET, &["year"]))
    .route("/org/", outcomes::missing(MethodFilter::GET, &["orgId"]))
    .route("/years/", outcomes::missing(MethodFilter::GET, &["orgId"]))
    .route("/values/{org_id}/", outcomes::missing(MethodFilter::GET, &["field"]))
}

/// Router for `/api/program_outcomes`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn program_outcomes_router<S>(store: Arc<S>) -> Router<()>
where
  S: OutcomesStore + 'static,
{
  outcomes_routes::<S, ProgramOutcomes>()
    .route("/average", get(program::average::<S>))
    .route("/barriers/{year}/{org_id}", get(program::barriers::<S>))
    .route("/barriers/{year}/", outcomes::missing(MethodFilter::GET, &["orgId"]))
    .with_state(store)
}

/// Router for `/api/kitchen_outcomes`.
pub fn kitchen_outcomes_router<S>(store: Arc<S>) -> Router<()>
where
  S: OutcomesStore + 'static,
{
  outcomes_routes::<S, KitchenOutcomes>().with_state(store)
}

/// Router for `/api/organization`.
pub fn organization_router<S>(store: Arc<S>) -> Router<()>
where
  S: OutcomesStore + 'static,
{
  Router::new()
    .route("/", get(organizations::list::<S>).post(organizations::create::<S>))
    .route("/{id}", get(organizations::get_one::<S>))
    .route("/name/{name}", get(organizations::by_name::<S>))
    .with_state(store)
}
