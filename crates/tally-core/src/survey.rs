//! Enumerated survey answers.
//!
//! The serde names are the exact answer strings the survey forms submit, so
//! documents written by the forms deserialize without translation.

use serde::{Deserialize, Serialize};

// ─── Program design ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YouthEnrollmentStructure {
  Staggered,
  Single,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdultEnrollmentStructure {
  #[serde(rename = "Single Cohort")]
  SingleCohort,
  Staggered,
  Other,
}

/// How trainees are paid while in the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compensation {
  HourlyMin,
  HourlyAboveMin,
  Stipend,
  None,
}

/// The point at which an enrollee counts as "trained".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainedDefinition {
  #[serde(rename = "The first day of program")]
  FirstDay,
  #[serde(rename = "2-4 day provisional period")]
  ShortProvisional,
  #[serde(rename = "One week provisional period")]
  OneWeekProvisional,
  #[serde(rename = "Two week provisional period")]
  TwoWeekProvisional,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraduatedDefinition {
  #[serde(rename = "All weeks of program")]
  AllWeeks,
  #[serde(rename = "Early exit for employment allowed")]
  EarlyExitForEmployment,
  Other,
}

/// How a wraparound service reaches trainees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapAroundAccess {
  #[serde(rename = "You mostly facilitate access through partner agency")]
  PartnerAgency,
  #[serde(rename = "Your program does not provide or facilitate access")]
  NotProvided,
  #[serde(rename = "You mostly provide in-house")]
  InHouse,
}

// ─── Funding and curriculum ──────────────────────────────────────────────────

/// Participation in SNAP Employment & Training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapEAndT {
  Yes,
  NoButInterested,
  NoNotInterested,
  NoRejected,
}

/// Participation in WIOA funding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wioa {
  Yes,
  #[serde(rename = "No But")]
  NoBut,
  #[serde(rename = "No And")]
  NoAnd,
}

/// How much of the curriculum is shared with the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curriculum {
  All,
  Part,
  None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramCertification {
  #[serde(rename = "ACF Quality/Approved Program")]
  AcfApproved,
  #[serde(rename = "DOL approved apprenticeship")]
  DolApprenticeship,
  #[serde(rename = "DOL approved pre-apprenticeship")]
  DolPreApprenticeship,
  #[serde(rename = "State Association apprenticeship")]
  StateApprenticeship,
  #[serde(rename = "State Association pre-apprenticeship")]
  StatePreApprenticeship,
  #[serde(rename = "Local or State Dept. of Education or Community College")]
  EducationDepartment,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantCertification {
  #[serde(rename = "Basic Food Safety (eg ServSafe Handler or similar)")]
  BasicFoodSafety,
  #[serde(rename = "Advanced Food Safety (eg ServSafe Manager or similar)")]
  AdvancedFoodSafety,
  #[serde(rename = "Credit toward Comm College")]
  CommunityCollegeCredit,
  #[serde(rename = "ACF Certification (eg Fundamental Cook)")]
  Acf,
  #[serde(rename = "NRA (eg Pro Start)")]
  Nra,
  #[serde(
    rename = "AHLEI (eg Kitchen Cook, Guest Service Gold, Certified Guest Service Professional, etc.)"
  )]
  Ahlei,
  Nutrition,
  Allergen,
  #[serde(rename = "Customer Services")]
  CustomerServices,
  #[serde(rename = "Alcohol Services")]
  AlcoholServices,
  #[serde(rename = "Non-foodservice certification (including CLA/CLT, CDL, NSC, etc)")]
  NonFoodservice,
  Other,
}

// ─── Placement ───────────────────────────────────────────────────────────────

/// Share of placements that are in foodservice jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobTypeShare {
  #[serde(rename = "1-25%")]
  UpToQuarter,
  #[serde(rename = "26-50%")]
  UpToHalf,
  #[serde(rename = "51-75%")]
  UpToThreeQuarters,
  #[serde(rename = "76-100%")]
  MostlyAll,
  #[serde(rename = "Not Tracked")]
  NotTracked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobCategory {
  #[serde(rename = "Food Service: Restaurant, Cafe")]
  Restaurant,
  #[serde(rename = "Food Service: Institutional (Senior Living, Corporate Dining, etc.)")]
  Institutional,
  #[serde(rename = "Food Service: Grocery")]
  Grocery,
  #[serde(rename = "Customer Service and Retail")]
  CustomerServiceAndRetail,
  #[serde(rename = "Transportation & Warehousing")]
  TransportationAndWarehousing,
  #[serde(rename = "Healthcare & Social Assistance")]
  HealthcareAndSocialAssistance,
  #[serde(rename = "Safety & Maintenance")]
  SafetyAndMaintenance,
  Construction,
  Other,
}

// ─── Kitchen ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareSurvey {
  Yes,
  No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
  #[serde(rename = "Childcare Meals")]
  Childcare,
  #[serde(rename = "School Meals")]
  School,
  #[serde(rename = "Soup Kitchen (onsite)")]
  SoupKitchen,
  #[serde(rename = "Shelter Meals (offsite)")]
  Shelter,
  #[serde(rename = "Meals for Supportive/Transitional Housing")]
  SupportiveHousing,
  #[serde(rename = "Meals For Seniors")]
  Seniors,
  #[serde(rename = "Medically Tailored Meals")]
  MedicallyTailored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapitalExpansionStage {
  #[serde(rename = "We are in early stages of planning a capital expansion")]
  EarlyPlanning,
  #[serde(rename = "We have a capital expansion plan and are fundraising")]
  Fundraising,
  #[serde(rename = "We have a fully funded capital expansion plan")]
  FullyFunded,
  #[serde(rename = "We have recently completed or will soon complete the project")]
  NearingCompletion,
  #[serde(rename = "We have no future plans or projects underway")]
  NoPlans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapitalExpansionNeed {
  #[serde(rename = "How do we even start?")]
  GettingStarted,
  #[serde(rename = "Planning cost expenses")]
  PlanningCosts,
  #[serde(rename = "Creating fundraising strategy")]
  FundraisingStrategy,
  #[serde(rename = "Construction costs")]
  ConstructionCosts,
  #[serde(rename = "Equipment (heavy or small)")]
  Equipment,
  #[serde(rename = "Operating expenses")]
  OperatingExpenses,
  Other,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn answer_strings_match_form_values() {
    assert_eq!(
      serde_json::to_value(AdultEnrollmentStructure::SingleCohort).unwrap(),
      serde_json::json!("Single Cohort")
    );
    let access: WrapAroundAccess =
      serde_json::from_value(serde_json::json!("You mostly provide in-house")).unwrap();
    assert_eq!(access, WrapAroundAccess::InHouse);
  }

  #[test]
  fn unknown_answer_is_rejected() {
    assert!(serde_json::from_value::<Wioa>(serde_json::json!("Maybe")).is_err());
  }
}
