//! Handlers that only exist for program outcomes.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/average` | All nine query parameters required; see [`AverageQuery`] |
//! | `GET`  | `/barriers/{year}/{orgId}` | The eight barrier answers, or `null` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use tally_core::{average::NetworkAverage, program::BarrierProfile, store::OutcomesStore};

use crate::{
  error::{ApiError, require},
  service::{self, AverageParams},
};

// ─── Network average ──────────────────────────────────────────────────────────

/// Query string of `GET /average`.
///
/// Every parameter must be present and non-blank. Bucket values outside the
/// known labels are accepted and mean "All".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageQuery {
  pub field:                      Option<String>,
  pub year:                       Option<String>,
  pub end_year:                   Option<String>,
  pub adult_program_size:         Option<String>,
  pub youth_program_size:         Option<String>,
  pub barrier_homelessness:       Option<String>,
  pub barrier_in_recovery:        Option<String>,
  pub barrier_returning_citizens: Option<String>,
  /// Only the literal `"true"` restricts the average to model organizations.
  pub compare_model_organization: Option<String>,
}

/// `GET /average?field=..&year=..&endYear=..&...`
pub async fn average<S>(
  State(store): State<Arc<S>>,
  Query(q): Query<AverageQuery>,
) -> Result<Json<NetworkAverage>, ApiError>
where
  S: OutcomesStore,
{
  let arg = |v: &Option<String>| v.as_deref().unwrap_or_default().to_owned();
  let field = arg(&q.field);
  let year = arg(&q.year);
  let end_year = arg(&q.end_year);
  let adult = arg(&q.adult_program_size);
  let youth = arg(&q.youth_program_size);
  let homelessness = arg(&q.barrier_homelessness);
  let recovery = arg(&q.barrier_in_recovery);
  let returning = arg(&q.barrier_returning_citizens);
  let compare = arg(&q.compare_model_organization);

  require([
    ("field", field.as_str()),
    ("year", year.as_str()),
    ("endYear", end_year.as_str()),
    ("adultProgramSize", adult.as_str()),
    ("youthProgramSize", youth.as_str()),
    ("barrierHomelessness", homelessness.as_str()),
    ("barrierInRecovery", recovery.as_str()),
    ("barrierReturningCitizens", returning.as_str()),
    ("compareModelOrganization", compare.as_str()),
  ])?;

  let params = AverageParams {
    field:                      &field,
    year:                       &year,
    end_year:                   &end_year,
    adult_program_size:         &adult,
    youth_program_size:         &youth,
    barrier_homelessness:       &homelessness,
    barrier_in_recovery:        &recovery,
    barrier_returning_citizens: &returning,
    compare_model_organization: &compare,
  };

  let result = service::get_network_average(store.as_ref(), params)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to compute network average"))?;
  Ok(Json(result))
}

// ─── Barriers ─────────────────────────────────────────────────────────────────

/// `GET /barriers/{year}/{orgId}`
pub async fn barriers<S>(
  State(store): State<Arc<S>>,
  Path((year, org_id)): Path<(String, String)>,
) -> Result<Json<Option<BarrierProfile>>, ApiError>
where
  S: OutcomesStore,
{
  require([("year", year.as_str()), ("orgId", org_id.as_str())])?;
  let profile = service::get_barrier_information(store.as_ref(), &year, &org_id)
    .await
    .map_err(|e| ApiError::from_service(e, "Failed to fetch barrier information"))?;
  Ok(Json(profile))
}
