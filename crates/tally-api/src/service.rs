//! The service layer: one async function per operation.
//!
//! Controllers hand over raw path and query strings; this layer coerces them
//! into domain types, calls the store once, and reports failures as
//! [`ServiceError`]. Bucket labels are never rejected here: an unrecognized
//! label means "All".

use std::collections::BTreeMap;

use tally_core::{
  average::{NetworkAverage, NetworkAverageQuery},
  bucket::{BarrierBucket, ProgramSizeBucket},
  organization::{NewOrganization, OrgId, Organization},
  program::{BarrierProfile, ProgramOutcomes},
  record::{Outcomes, Stored},
  store::OutcomesStore,
  year::ReportingYear,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("invalid {param} format: {value:?}")]
  InvalidYear { param: &'static str, value: String },

  #[error("invalid id format: {0:?}")]
  InvalidId(String),

  #[error("invalid field name: {0:?}")]
  InvalidField(String),

  #[error("organization id must not be blank")]
  InvalidOrgId,

  #[error("{0}")]
  NotFound(String),

  #[error("organization {0} already exists")]
  OrganizationExists(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// Wrap a backend failure, surfacing a duplicate organization id anywhere in
/// its source chain as [`ServiceError::OrganizationExists`].
fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ServiceError {
  let duplicate = std::iter::successors(
    Some(&e as &(dyn std::error::Error + 'static)),
    |err| err.source(),
  )
  .find_map(|err| match err.downcast_ref::<tally_core::Error>() {
    Some(tally_core::Error::OrganizationExists(id)) => Some(id.clone()),
    _ => None,
  });

  match duplicate {
    Some(id) => ServiceError::OrganizationExists(id),
    None => ServiceError::Store(Box::new(e)),
  }
}

// ─── Coercion ────────────────────────────────────────────────────────────────

pub fn parse_year(param: &'static str, value: &str) -> Result<ReportingYear> {
  value.parse().map_err(|_| ServiceError::InvalidYear {
    param,
    value: value.to_owned(),
  })
}

pub fn parse_org_id(value: &str) -> Result<OrgId> {
  OrgId::new(value).map_err(|_| ServiceError::InvalidOrgId)
}

pub fn parse_id(value: &str) -> Result<Uuid> {
  Uuid::parse_str(value.trim()).map_err(|_| ServiceError::InvalidId(value.to_owned()))
}

// ─── Outcome records ─────────────────────────────────────────────────────────

pub async fn get_one_outcomes<S, T>(
  store: &S,
  year: &str,
  org_id: &str,
) -> Result<Option<Stored<T>>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let year = parse_year("year", year)?;
  let org_id = parse_org_id(org_id)?;
  store.find_outcomes(year, org_id).await.map_err(store_err)
}

/// Full-document insert; validation is whatever deserializing `T` enforced.
pub async fn add_outcomes<S, T>(store: &S, record: T) -> Result<Stored<T>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  store.add_outcomes(record).await.map_err(store_err)
}

pub async fn get_all_outcomes<S, T>(store: &S) -> Result<Vec<Stored<T>>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  store.list_outcomes().await.map_err(store_err)
}

pub async fn get_outcomes_by_year<S, T>(store: &S, year: &str) -> Result<Vec<Stored<T>>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let year = parse_year("year", year)?;
  store.list_outcomes_by_year(year).await.map_err(store_err)
}

pub async fn get_outcomes_by_org<S, T>(store: &S, org_id: &str) -> Result<Vec<Stored<T>>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let org_id = parse_org_id(org_id)?;
  store.list_outcomes_by_org(org_id).await.map_err(store_err)
}

/// Delete a record and return it. A missing id is
/// [`ServiceError::NotFound`].
pub async fn delete_outcomes_by_id<S, T>(store: &S, id: &str) -> Result<Stored<T>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let id = parse_id(id)?;
  let not_found = || ServiceError::NotFound(format!("{} {id} not found", T::KIND.label()));

  let existing = store
    .get_outcomes::<T>(id)
    .await
    .map_err(store_err)?
    .ok_or_else(not_found)?;

  // A concurrent delete between the read and this call still reports 404.
  if store.delete_outcomes::<T>(id).await.map_err(store_err)? {
    Ok(existing)
  } else {
    Err(not_found())
  }
}

pub async fn get_distinct_years<S, T>(store: &S, org_id: &str) -> Result<Vec<i32>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let org_id = parse_org_id(org_id)?;
  let years = store.distinct_years::<T>(org_id).await.map_err(store_err)?;
  Ok(years.into_iter().map(ReportingYear::get).collect())
}

pub async fn get_org_ids<S, T>(store: &S) -> Result<Vec<OrgId>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  store.distinct_org_ids::<T>().await.map_err(store_err)
}

pub async fn get_field_values_by_year<S, T>(
  store: &S,
  org_id: &str,
  field: &str,
) -> Result<BTreeMap<i32, serde_json::Value>>
where
  S: OutcomesStore,
  T: Outcomes,
{
  let org_id = parse_org_id(org_id)?;
  store
    .field_values_by_year::<T>(org_id, field.to_owned())
    .await
    .map_err(store_err)
}

// ─── Program-only reads ──────────────────────────────────────────────────────

/// Raw, already-present network-average parameters.
#[derive(Debug, Clone)]
pub struct AverageParams<'a> {
  pub field:                      &'a str,
  pub year:                       &'a str,
  pub end_year:                   &'a str,
  pub adult_program_size:         &'a str,
  pub youth_program_size:         &'a str,
  pub barrier_homelessness:       &'a str,
  pub barrier_in_recovery:        &'a str,
  pub barrier_returning_citizens: &'a str,
  pub compare_model_organization: &'a str,
}

impl AverageParams<'_> {
  pub fn to_query(&self) -> Result<NetworkAverageQuery> {
    let start_year = parse_year("year", self.year)?;
    let end_year = parse_year("endYear", self.end_year)?;

    let mut query = NetworkAverageQuery::new(self.field.trim(), start_year, end_year)
      .map_err(|_| ServiceError::InvalidField(self.field.to_owned()))?;
    query.adult_program_size = ProgramSizeBucket::parse(self.adult_program_size);
    query.youth_program_size = ProgramSizeBucket::parse(self.youth_program_size);
    query.barrier_homelessness = BarrierBucket::parse(self.barrier_homelessness);
    query.barrier_in_recovery = BarrierBucket::parse(self.barrier_in_recovery);
    query.barrier_returning_citizens = BarrierBucket::parse(self.barrier_returning_citizens);
    query.model_organizations_only = self.compare_model_organization == "true";
    Ok(query)
  }
}

pub async fn get_network_average<S>(store: &S, params: AverageParams<'_>) -> Result<NetworkAverage>
where
  S: OutcomesStore,
{
  let query = params.to_query()?;
  let average = store.network_average(&query).await.map_err(store_err)?;
  Ok(NetworkAverage {
    field: query.field,
    year: query.start_year.get(),
    average,
  })
}

/// The barrier answers of the (year, organization) program record.
pub async fn get_barrier_information<S>(
  store: &S,
  year: &str,
  org_id: &str,
) -> Result<Option<BarrierProfile>>
where
  S: OutcomesStore,
{
  let found = get_one_outcomes::<S, ProgramOutcomes>(store, year, org_id).await?;
  Ok(found.map(|stored| stored.record.barriers()))
}

// ─── Organizations ───────────────────────────────────────────────────────────

pub async fn add_organization<S: OutcomesStore>(
  store: &S,
  input: NewOrganization,
) -> Result<Organization> {
  store.add_organization(input).await.map_err(store_err)
}

pub async fn get_organization_by_id<S: OutcomesStore>(
  store: &S,
  id: &str,
) -> Result<Option<Organization>> {
  let id = parse_org_id(id)?;
  store.get_organization(id).await.map_err(store_err)
}

pub async fn get_organization_by_name<S: OutcomesStore>(
  store: &S,
  name: &str,
) -> Result<Option<Organization>> {
  store
    .get_organization_by_name(name.to_owned())
    .await
    .map_err(store_err)
}

pub async fn get_all_organizations<S: OutcomesStore>(store: &S) -> Result<Vec<Organization>> {
  store.list_organizations().await.map_err(store_err)
}
