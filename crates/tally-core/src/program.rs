//! Program Outcomes: a workforce-training program's annual survey answers.
//!
//! Every survey answer is optional. An unanswered question is `None` and is
//! left out of the stored document entirely; it is never defaulted to zero.

use serde::{Deserialize, Serialize};

use crate::{
  organization::OrgId,
  record::{OutcomeKind, Outcomes},
  survey::{
    AdultEnrollmentStructure, Compensation, Curriculum, GraduatedDefinition,
    JobCategory, JobTypeShare, ParticipantCertification, ProgramCertification,
    SnapEAndT, TrainedDefinition, Wioa, WrapAroundAccess, YouthEnrollmentStructure,
  },
  year::ReportingYear,
};

/// One organization's program outcomes submission for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramOutcomes {
  pub org_id: OrgId,
  /// Submissions without a year are kept but never match a year-scoped query.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub year:   Option<ReportingYear>,
  #[serde(flatten)]
  pub survey: ProgramSurvey,
}

impl ProgramOutcomes {
  pub fn new(org_id: OrgId, year: Option<ReportingYear>) -> Self {
    Self { org_id, year, survey: ProgramSurvey::default() }
  }

  /// The eight barrier-to-employment answers.
  pub fn barriers(&self) -> BarrierProfile {
    let s = &self.survey;
    BarrierProfile {
      barrier_in_recovery: s.barrier_in_recovery,
      barrier_intellectual_or_developmental_disability: s
        .barrier_intellectual_or_developmental_disability,
      barrier_mental_health: s.barrier_mental_health,
      barrier_new_americans: s.barrier_new_americans,
      barrier_physical_disability: s.barrier_physical_disability,
      barrier_returning_citizens_or_formerly_incarcerated_persons: s
        .barrier_returning_citizens_or_formerly_incarcerated_persons,
      barrier_unhoused: s.barrier_unhoused,
      barrier_veteran: s.barrier_veteran,
    }
  }
}

impl Outcomes for ProgramOutcomes {
  const KIND: OutcomeKind = OutcomeKind::Program;

  fn org_id(&self) -> &OrgId { &self.org_id }

  fn year(&self) -> Option<ReportingYear> { self.year }
}

/// The survey answers of a [`ProgramOutcomes`] record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSurvey {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub program_cost_per_trainee: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub program_designed_for_youth_and_adults: Option<bool>,

  // ── Youth programs ──────────────────────────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_trained: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_program_retention_rate: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_positive_outcomes: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_wage: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_job_retention_three_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_job_retention_six_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_job_retention_twelve_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_job_retention_twenty_four_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_program_weeks: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_program_hours: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_enrollment_structure: Option<YouthEnrollmentStructure>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_compensation: Option<Compensation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_trained_definition: Option<TrainedDefinition>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_graduated_definition: Option<GraduatedDefinition>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub youth_outcomes_measure: Option<String>,

  // ── Adult programs ──────────────────────────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub programs_that_serve_adults: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adults_trained: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adults_graduated: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_positive_outcome: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_job_placement: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_wage: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_job_retention_three_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_job_retention_six_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_wage_at_six_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_job_retention_twelve_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_wage_at_twelve_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_job_retention_twenty_four_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_wage_twenty_four_months: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_program_weeks: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_program_hours: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_enrollment_structure: Option<AdultEnrollmentStructure>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_compensation: Option<Compensation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_trained_definition: Option<TrainedDefinition>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub adult_graduated_definition: Option<GraduatedDefinition>,

  // ── Trainee demographics (percentages) ──────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_age: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_female: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_male: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_non_binary: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_transgender: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_american_indian: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_asian_or_asian_american: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_black_or_african_american: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_latina_latino_latinx: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_percent_native_hawaiian_pacific_islander: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_multiracial: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_white: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_other_race: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trainee_race_unknown: Option<f64>,

  // ── Barriers to employment (percent of trainees) ─────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_returning_citizens_or_formerly_incarcerated_persons: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_physical_disability: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_intellectual_or_developmental_disability: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_unhoused: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_mental_health: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_new_americans: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_in_recovery: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub barrier_veteran: Option<f64>,

  // ── Wraparound services ─────────────────────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_housing: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_life_skills_or_social_emotional_learning: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_case_management: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_job_search_and_placement: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_recovery_treatment: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_mental_health_services: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_healthcare_all_other: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_childcare: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap_around_services_transportation: Option<WrapAroundAccess>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub other_please_specify_other_wrap_around_services: Option<String>,

  // ── Funding, curriculum, certifications ─────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub funding_percent_from_public_funding: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub funding_percent_from_private_funding: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub funding_percent_from_social_enterprise_or_generated_revenue: Option<f64>,
  #[serde(rename = "SNAPEAndT", skip_serializing_if = "Option::is_none")]
  pub snap_e_and_t: Option<SnapEAndT>,
  #[serde(rename = "WIOA", skip_serializing_if = "Option::is_none")]
  pub wioa: Option<Wioa>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub curriculum: Option<Curriculum>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub program_certifications: Option<Vec<ProgramCertification>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub other_program_certifications: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub participant_certifications: Option<Vec<ParticipantCertification>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub other_participant_certifications: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub internship_or_externship: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub internship_or_externship_description: Option<String>,

  // ── Placement ───────────────────────────────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum_wage: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub job_type: Option<JobTypeShare>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub job_category: Option<Vec<JobCategory>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub alumni_hired_by_org: Option<f64>,
}

/// The barrier-to-employment slice of a program record, as shown on the
/// barrier chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarrierProfile {
  pub barrier_in_recovery: Option<f64>,
  pub barrier_intellectual_or_developmental_disability: Option<f64>,
  pub barrier_mental_health: Option<f64>,
  pub barrier_new_americans: Option<f64>,
  pub barrier_physical_disability: Option<f64>,
  pub barrier_returning_citizens_or_formerly_incarcerated_persons: Option<f64>,
  pub barrier_unhoused: Option<f64>,
  pub barrier_veteran: Option<f64>,
}
