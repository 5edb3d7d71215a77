//! The `OutcomesStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tally-store-sqlite`).
//! Higher layers (`tally-api`, `tally-server`) depend on this abstraction, not
//! on any concrete backend.

use std::{collections::BTreeMap, future::Future};

use uuid::Uuid;

use crate::{
  average::NetworkAverageQuery,
  organization::{NewOrganization, OrgId, Organization},
  record::{Outcomes, Stored},
  year::ReportingYear,
};

/// Abstraction over a Tally store backend: the organization directory and
/// one document collection per outcome record variant.
///
/// Every call is a single attempt. Backend failures surface as
/// `Self::Error`; "nothing matched" is always `None`, an empty collection, or
/// `false`, never an error.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait OutcomesStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Organizations ─────────────────────────────────────────────────────

  /// Create an organization. Fails if a caller-supplied id is already taken.
  fn add_organization(
    &self,
    input: NewOrganization,
  ) -> impl Future<Output = Result<Organization, Self::Error>> + Send + '_;

  fn get_organization(
    &self,
    id: OrgId,
  ) -> impl Future<Output = Result<Option<Organization>, Self::Error>> + Send + '_;

  /// Exact, case-sensitive name match. The first-created wins on duplicates.
  fn get_organization_by_name(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Option<Organization>, Self::Error>> + Send + '_;

  fn list_organizations(
    &self,
  ) -> impl Future<Output = Result<Vec<Organization>, Self::Error>> + Send + '_;

  // ── Outcome records ───────────────────────────────────────────────────

  /// Insert `record` as a new document. No merge or upsert: submitting the
  /// same (organization, year) twice stores two documents.
  fn add_outcomes<T: Outcomes>(
    &self,
    record: T,
  ) -> impl Future<Output = Result<Stored<T>, Self::Error>> + Send + '_;

  fn get_outcomes<T: Outcomes>(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Stored<T>>, Self::Error>> + Send + '_;

  /// The record for `org_id` in `year`. With duplicates, the earliest
  /// inserted is returned.
  fn find_outcomes<T: Outcomes>(
    &self,
    year: ReportingYear,
    org_id: OrgId,
  ) -> impl Future<Output = Result<Option<Stored<T>>, Self::Error>> + Send + '_;

  /// Every record, in insertion order.
  fn list_outcomes<T: Outcomes>(
    &self,
  ) -> impl Future<Output = Result<Vec<Stored<T>>, Self::Error>> + Send + '_;

  fn list_outcomes_by_year<T: Outcomes>(
    &self,
    year: ReportingYear,
  ) -> impl Future<Output = Result<Vec<Stored<T>>, Self::Error>> + Send + '_;

  fn list_outcomes_by_org<T: Outcomes>(
    &self,
    org_id: OrgId,
  ) -> impl Future<Output = Result<Vec<Stored<T>>, Self::Error>> + Send + '_;

  /// Remove a record. Returns `false` if no record had that id.
  fn delete_outcomes<T: Outcomes>(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Distinct years with at least one record for `org_id`, ascending.
  fn distinct_years<T: Outcomes>(
    &self,
    org_id: OrgId,
  ) -> impl Future<Output = Result<Vec<ReportingYear>, Self::Error>> + Send + '_;

  /// Distinct organizations with at least one record, ascending.
  fn distinct_org_ids<T: Outcomes>(
    &self,
  ) -> impl Future<Output = Result<Vec<OrgId>, Self::Error>> + Send + '_;

  /// One field of every dated record for `org_id`, keyed by year.
  ///
  /// Years whose record lacks the field (or holds `null`) are omitted. When a
  /// year has duplicate records, the latest inserted value wins.
  fn field_values_by_year<T: Outcomes>(
    &self,
    org_id: OrgId,
    field: String,
  ) -> impl Future<Output = Result<BTreeMap<i32, serde_json::Value>, Self::Error>>
  + Send
  + '_;

  /// Mean of `query.field` over the program records that pass every filter.
  /// `None` when no record qualifies or none of them has a numeric value.
  fn network_average<'a>(
    &'a self,
    query: &'a NetworkAverageQuery,
  ) -> impl Future<Output = Result<Option<f64>, Self::Error>> + Send + 'a;
}
