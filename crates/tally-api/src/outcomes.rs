//! Handlers shared by both outcome collections.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/` | Every record, insertion order |
//! | `POST`   | `/` | Body: one full record; returns 201 + stored record |
//! | `GET`    | `/{year}/{orgId}` | The record, or `null` |
//! | `DELETE` | `/{id}` | Returns the deleted record; 404 if absent |
//! | `GET`    | `/year/{year}` | All records for a year |
//! | `GET`    | `/org/{orgId}` | All records for an organization |
//! | `GET`    | `/years/{orgId}` | Distinct years, ascending |
//! | `GET`    | `/orgs` | Distinct organization ids |
//! | `GET`    | `/values/{orgId}/{field}` | `{ "<year>": value }` |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
  routing::{MethodFilter, MethodRouter, on},
};
use tally_core::{
  organization::OrgId,
  record::{Outcomes, Stored},
  store::OutcomesStore,
};

use crate::{
  error::{ApiError, require},
  service,
};

/// A route that exists only to report which path parameters were left off.
pub fn missing<St>(method: MethodFilter, fields: &'static [&'static str]) -> MethodRouter<St>
where
  St: Clone + Send + Sync + 'static,
{
  on(method, move || async move { ApiError::MissingFields(fields.to_vec()) })
}

// ─── Point lookup ─────────────────────────────────────────────────────────────

/// `GET /{year}/{orgId}`
pub async fn get_one<S, T>(
  State(store): State<Arc<S>>,
  Path((year, org_id)): Path<(String, String)>,
) -> Result<Json<Option<Stored<T>>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  require([("year", year.as_str()), ("orgId", org_id.as_str())])?;
  let found = service::get_one_outcomes(store.as_ref(), &year, &org_id)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch outcomes"))?;
  Ok(Json(found))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /`: returns 201 + the stored record with its generated `_id`.
pub async fn create<S, T>(
  State(store): State<Arc<S>>,
  body: Result<Json<T>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let Json(record) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let stored = service::add_outcomes(store.as_ref(), record)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to add outcomes"))?;
  Ok((StatusCode::CREATED, Json(stored)))
}

// ─── Bulk reads ───────────────────────────────────────────────────────────────

/// `GET /`
pub async fn list<S, T>(State(store): State<Arc<S>>) -> Result<Json<Vec<Stored<T>>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let all = service::get_all_outcomes(store.as_ref())
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch all outcomes"))?;
  Ok(Json(all))
}

/// `GET /year/{year}`
pub async fn by_year<S, T>(
  State(store): State<Arc<S>>,
  Path(year): Path<String>,
) -> Result<Json<Vec<Stored<T>>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  require([("year", year.as_str())])?;
  let records = service::get_outcomes_by_year(store.as_ref(), &year)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch outcomes by year"))?;
  Ok(Json(records))
}

/// `GET /org/{orgId}`
pub async fn by_org<S, T>(
  State(store): State<Arc<S>>,
  Path(org_id): Path<String>,
) -> Result<Json<Vec<Stored<T>>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  require([("orgId", org_id.as_str())])?;
  let records = service::get_outcomes_by_org(store.as_ref(), &org_id)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch outcomes by organization"))?;
  Ok(Json(records))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /{id}`
pub async fn delete_one<S, T>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Stored<T>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  require([("id", id.as_str())])?;
  let deleted = service::delete_outcomes_by_id(store.as_ref(), &id)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to delete outcomes"))?;
  Ok(Json(deleted))
}

// ─── Aggregates ───────────────────────────────────────────────────────────────

/// `GET /years/{orgId}`
pub async fn distinct_years<S, T>(
  State(store): State<Arc<S>>,
  Path(org_id): Path<String>,
) -> Result<Json<Vec<i32>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  require([("orgId", org_id.as_str())])?;
  let years = service::get_distinct_years::<S, T>(store.as_ref(), &org_id)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch distinct years"))?;
  Ok(Json(years))
}

/// `GET /orgs`
pub async fn org_ids<S, T>(State(store): State<Arc<S>>) -> Result<Json<Vec<OrgId>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let ids = service::get_org_ids::<S, T>(store.as_ref())
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch organization ids"))?;
  Ok(Json(ids))
}

/// `GET /values/{orgId}/{field}`
pub async fn field_values<S, T>(
  State(store): State<Arc<S>>,
  Path((org_id, field)): Path<(String, String)>,
) -> Result<Json<BTreeMap<i32, serde_json::Value>>, ApiError>
where
  S: OutcomesStore,
  T: Outcomes,
{
  require([("orgId", org_id.as_str()), ("field", field.as_str())])?;
  let values = service::get_field_values_by_year::<S, T>(store.as_ref(), &org_id, &field)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch field values"))?;
  Ok(Json(values))
}
