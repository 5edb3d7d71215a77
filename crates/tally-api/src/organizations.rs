//! Handlers for the organization directory.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Every organization, ordered by name |
//! | `POST` | `/` | Body: `{"organizationName", "_id"?, "modelOrganization"?}`; returns 201 |
//! | `GET`  | `/{id}` | The organization, or `null` |
//! | `GET`  | `/name/{name}` | Exact name match, or `null` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use tally_core::{
  organization::{NewOrganization, Organization},
  store::OutcomesStore,
};

use crate::{
  error::{ApiError, require},
  service,
};

/// `GET /`
pub async fn list<S: OutcomesStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Organization>>, ApiError> {
  let orgs = service::get_all_organizations(store.as_ref())
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch organizations"))?;
  Ok(Json(orgs))
}

/// `POST /`
pub async fn create<S: OutcomesStore>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewOrganization>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
  let Json(input) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  require([("organizationName", input.name.as_str())])?;
  let org = service::add_organization(store.as_ref(), input)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to add organization"))?;
  Ok((StatusCode::CREATED, Json(org)))
}

/// `GET /{id}`
pub async fn get_one<S: OutcomesStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Option<Organization>>, ApiError> {
  require([("id", id.as_str())])?;
  let org = service::get_organization_by_id(store.as_ref(), &id)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch organization"))?;
  Ok(Json(org))
}

/// `GET /name/{name}`
pub async fn by_name<S: OutcomesStore>(
  State(store): State<Arc<S>>,
  Path(name): Path<String>,
) -> Result<Json<Option<Organization>>, ApiError> {
  require([("name", name.as_str())])?;
  let org = service::get_organization_by_name(store.as_ref(), &name)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch organization"))?;
  Ok(Json(org))
}
