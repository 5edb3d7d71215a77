//! Network averages: the mean of one survey answer across every qualifying
//! program record.

use serde::Serialize;

use crate::{
  Result,
  bucket::{BarrierBucket, ProgramSizeBucket, Range},
  record::validate_field_name,
  year::ReportingYear,
};

/// Raw document fields the bucket filters are evaluated against.
pub const ADULT_PROGRAM_SIZE_FIELD: &str = "adultsTrained";
pub const YOUTH_PROGRAM_SIZE_FIELD: &str = "youthTrained";
pub const BARRIER_HOMELESSNESS_FIELD: &str = "barrierUnhoused";
pub const BARRIER_IN_RECOVERY_FIELD: &str = "barrierInRecovery";
pub const BARRIER_RETURNING_CITIZENS_FIELD: &str =
  "barrierReturningCitizensOrFormerlyIncarceratedPersons";

/// A fully-typed network-average request.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkAverageQuery {
  /// Top-level document field to average; see [`validate_field_name`].
  pub field:                      String,
  pub start_year:                 ReportingYear,
  /// Inclusive.
  pub end_year:                   ReportingYear,
  pub adult_program_size:         ProgramSizeBucket,
  pub youth_program_size:         ProgramSizeBucket,
  pub barrier_homelessness:       BarrierBucket,
  pub barrier_in_recovery:        BarrierBucket,
  pub barrier_returning_citizens: BarrierBucket,
  /// Restrict to organizations in the model-organization cohort.
  pub model_organizations_only:   bool,
}

impl NetworkAverageQuery {
  /// An unfiltered query over `[start_year, end_year]`.
  pub fn new(
    field: impl Into<String>,
    start_year: ReportingYear,
    end_year: ReportingYear,
  ) -> Result<Self> {
    let field = field.into();
    validate_field_name(&field)?;
    Ok(Self {
      field,
      start_year,
      end_year,
      adult_program_size: ProgramSizeBucket::All,
      youth_program_size: ProgramSizeBucket::All,
      barrier_homelessness: BarrierBucket::All,
      barrier_in_recovery: BarrierBucket::All,
      barrier_returning_citizens: BarrierBucket::All,
      model_organizations_only: false,
    })
  }

  /// The active bucket filters as `(document field, range)` pairs.
  /// Buckets set to `All` contribute nothing.
  pub fn range_filters(&self) -> Vec<(&'static str, Range)> {
    [
      (ADULT_PROGRAM_SIZE_FIELD, self.adult_program_size.range()),
      (YOUTH_PROGRAM_SIZE_FIELD, self.youth_program_size.range()),
      (BARRIER_HOMELESSNESS_FIELD, self.barrier_homelessness.range()),
      (BARRIER_IN_RECOVERY_FIELD, self.barrier_in_recovery.range()),
      (BARRIER_RETURNING_CITIZENS_FIELD, self.barrier_returning_citizens.range()),
    ]
    .into_iter()
    .filter_map(|(field, range)| range.map(|r| (field, r)))
    .collect()
  }
}

/// Response body for a network average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkAverage {
  pub field:   String,
  pub year:    i32,
  /// `None` when no record qualified, which is distinct from an average of 0.
  pub average: Option<f64>,
}

/// Arithmetic mean of the present values. Absent values count toward neither
/// the sum nor the count; an empty input yields `None`.
pub fn mean_of_present<I>(values: I) -> Option<f64>
where
  I: IntoIterator<Item = Option<f64>>,
{
  let (sum, count) = values
    .into_iter()
    .flatten()
    .fold((0.0_f64, 0_u64), |(sum, count), v| (sum + v, count + 1));
  (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn year(y: i64) -> ReportingYear { ReportingYear::new(y).unwrap() }

  #[test]
  fn mean_skips_absent_values() {
    assert_eq!(mean_of_present([Some(500.0), None, Some(700.0)]), Some(600.0));
  }

  #[test]
  fn mean_of_nothing_is_none() {
    assert_eq!(mean_of_present(Vec::<Option<f64>>::new()), None);
    assert_eq!(mean_of_present([None, None]), None);
  }

  #[test]
  fn mean_of_zeros_is_zero() {
    assert_eq!(mean_of_present([Some(0.0), Some(0.0)]), Some(0.0));
  }

  #[test]
  fn all_buckets_produce_no_filters() {
    let q = NetworkAverageQuery::new("youthWage", year(2020), year(2022)).unwrap();
    assert!(q.range_filters().is_empty());
  }

  #[test]
  fn active_buckets_map_to_raw_fields() {
    let mut q = NetworkAverageQuery::new("youthWage", year(2020), year(2022)).unwrap();
    q.adult_program_size = ProgramSizeBucket::Small;
    q.barrier_in_recovery = BarrierBucket::Half;

    let filters = q.range_filters();
    assert_eq!(filters.len(), 2);
    assert_eq!(filters[0].0, "adultsTrained");
    assert_eq!(filters[1].0, "barrierInRecovery");
    assert_eq!(filters[1].1.min, 26.0);
  }

  #[test]
  fn rejects_path_like_field_names() {
    assert!(NetworkAverageQuery::new("a.b", year(2020), year(2020)).is_err());
  }
}
