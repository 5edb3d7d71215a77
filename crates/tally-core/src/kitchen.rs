//! Kitchen Outcomes: a food-service operation's annual survey answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  organization::OrgId,
  record::{OutcomeKind, Outcomes},
  survey::{CapitalExpansionNeed, CapitalExpansionStage, MealType, ShareSurvey},
  year::ReportingYear,
};

/// One organization's kitchen outcomes submission for one year.
///
/// Unlike program submissions, the year and the responder details are
/// mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOutcomes {
  pub org_id:            OrgId,
  pub year:              ReportingYear,
  pub organization_name: String,
  pub responder_name:    String,
  pub responder_title:   String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub share_survey:      Option<ShareSurvey>,
  #[serde(flatten)]
  pub survey:            KitchenSurvey,
}

impl Outcomes for KitchenOutcomes {
  const KIND: OutcomeKind = OutcomeKind::Kitchen;

  fn org_id(&self) -> &OrgId { &self.org_id }

  fn year(&self) -> Option<ReportingYear> { Some(self.year) }
}

/// The survey answers of a [`KitchenOutcomes`] record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenSurvey {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hunger_reliefs_meals_served: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_of_meals_served: Option<Vec<MealType>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cost_per_meal: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub food_cost_percentage: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meal_reimbursement: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meal_funding_public: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meal_funding_private_contracts: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meal_funding_private_donations: Option<f64>,

  // ── Meals by demographic ────────────────────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_female: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_male: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_non_binary: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_gender_unknown: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_transgender: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_american_indian: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_asian: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_black: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_latinx: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_native_hawaiian: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_multi_racial: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_white: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_other_race: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_race_unknown: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_infants: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_children: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_adults: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_seniors: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meals_age_unknown: Option<f64>,

  // ── Capital projects ────────────────────────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub capital_expansion_projects: Option<CapitalExpansionStage>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub capital_project_size: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub capital_project_date: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub capital_expansion_project_needs: Option<Vec<CapitalExpansionNeed>>,

  // ── Social enterprise revenue ───────────────────────────────────────────
  #[serde(skip_serializing_if = "Option::is_none")]
  pub retail_social_enterprise_revenue: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gross_revenue_cafe: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gross_revenue_restaurant: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gross_revenue_catering: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gross_revenue_food_truck: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gross_revenue_wholesale: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gross_revenue_food_subscription: Option<f64>,}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn required_fields_are_enforced() {
    let missing_year = serde_json::from_value::<KitchenOutcomes>(json!({
      "orgId": "org1",
      "organizationName": "Kitchen One",
      "responderName": "A. Cook",
      "responderTitle": "Director"
    }));
    assert!(missing_year.is_err());
  }

  #[test]
  fn parses_a_sparse_submission() {
    let record: KitchenOutcomes = serde_json::from_value(json!({
      "orgId": "org1",
      "year": 2023,
      "organizationName": "Kitchen One",
      "responderName": "A. Cook",
      "responderTitle": "Director",
      "shareSurvey": "Yes",
      "typeOfMealsServed": ["School Meals", "Meals For Seniors"],
      "costPerMeal": 3.25,
      "capitalProjectDate": "2024-03-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(record.year.get(), 2023);
    assert_eq!(record.share_survey, Some(ShareSurvey::Yes));
    assert_eq!(
      record.survey.type_of_meals_served,
      Some(vec![MealType::School, MealType::Seniors])
    );
    assert_eq!(record.survey.cost_per_meal, Some(3.25));
    assert_eq!(record.survey.meals_adults, None);
    assert!(record.survey.capital_project_date.is_some());
  }
}
