//! Router-level tests: requests go through the real routers backed by an
//! in-memory SQLite store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tally_store_sqlite::SqliteStore;
use tower::ServiceExt;

use crate::{kitchen_outcomes_router, organization_router, program_outcomes_router};

async fn store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.unwrap())
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let resp = router.oneshot(builder.body(body).unwrap()).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let json = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, json)
}

async fn add_program(s: &Arc<SqliteStore>, record: Value) -> Value {
  let (status, body) = send(program_outcomes_router(s.clone()), "POST", "/", Some(record)).await;
  assert_eq!(status, StatusCode::CREATED, "{body}");
  body
}

const AVERAGE_ALL: &str = "adultProgramSize=All&youthProgramSize=All&barrierHomelessness=All\
                           &barrierInRecovery=All&barrierReturningCitizens=All\
                           &compareModelOrganization=false";

// ── Point lookup ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn point_lookup_of_missing_record_is_null() {
  let s = store().await;
  let (status, body) = send(program_outcomes_router(s), "GET", "/2022/org1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn point_lookup_returns_what_was_added() {
  let s = store().await;
  let added = add_program(
    &s,
    json!({ "orgId": "org1", "year": 2022, "adultWage": 17.5, "programCostPerTrainee": 1000 }),
  )
  .await;
  assert!(added["_id"].is_string());
  assert_eq!(added["year"], "2022-01-01T00:00:00Z");

  let (status, body) = send(program_outcomes_router(s), "GET", "/2022/org1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, added);
}

#[tokio::test]
async fn blank_org_id_is_a_missing_field() {
  let s = store().await;
  let (status, body) = send(program_outcomes_router(s), "GET", "/2022/%20", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["fields"], json!(["orgId"]));
  assert!(body["error"].as_str().unwrap().contains("orgId"));
}

#[tokio::test]
async fn malformed_year_is_a_bad_request() {
  let s = store().await;
  let (status, body) = send(program_outcomes_router(s), "GET", "/twenty/org1", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("invalid year format"));
}

// ── Bulk reads ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn bare_year_prefix_reports_missing_year() {
  let s = store().await;
  let (status, body) = send(kitchen_outcomes_router(s), "GET", "/year/", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["fields"], json!(["year"]));
}

#[tokio::test]
async fn omitted_trailing_params_report_the_missing_field() {
  let s = store().await;
  let cases = [
    ("GET", "/2022/", "orgId"),
    ("GET", "/values/org1/", "field"),
    ("GET", "/barriers/2022/", "orgId"),
    ("DELETE", "/", "id"),
  ];
  for (method, uri, field) in cases {
    let (status, body) = send(program_outcomes_router(s.clone()), method, uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
    assert_eq!(body["fields"], json!([field]), "{method} {uri}");
  }
}

#[tokio::test]
async fn kitchen_routes_report_missing_fields_too() {
  let s = store().await;
  let (status, body) = send(kitchen_outcomes_router(s.clone()), "GET", "/2022/", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["fields"], json!(["orgId"]));

  let (status, body) = send(kitchen_outcomes_router(s), "DELETE", "/", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["fields"], json!(["id"]));
}

#[tokio::test]
async fn list_by_year_and_org() {
  let s = store().await;
  add_program(&s, json!({ "orgId": "org1", "year": 2021 })).await;
  add_program(&s, json!({ "orgId": "org1", "year": 2022 })).await;
  add_program(&s, json!({ "orgId": "org2", "year": 2022 })).await;

  let (_, by_year) = send(program_outcomes_router(s.clone()), "GET", "/year/2022", None).await;
  assert_eq!(by_year.as_array().unwrap().len(), 2);

  let (_, by_org) = send(program_outcomes_router(s.clone()), "GET", "/org/org1", None).await;
  assert_eq!(by_org.as_array().unwrap().len(), 2);

  let (_, all) = send(program_outcomes_router(s.clone()), "GET", "/", None).await;
  assert_eq!(all.as_array().unwrap().len(), 3);

  let (_, orgs) = send(program_outcomes_router(s), "GET", "/orgs", None).await;
  assert_eq!(orgs, json!(["org1", "org2"]));
}

#[tokio::test]
async fn distinct_years_are_ascending_integers() {
  let s = store().await;
  add_program(&s, json!({ "orgId": "org1", "year": 2023 })).await;
  add_program(&s, json!({ "orgId": "org1", "year": 2021 })).await;
  add_program(&s, json!({ "orgId": "org1", "year": 2023 })).await;

  let (status, body) = send(program_outcomes_router(s), "GET", "/years/org1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!([2021, 2023]));
}

#[tokio::test]
async fn field_values_are_keyed_by_year() {
  let s = store().await;
  add_program(&s, json!({ "orgId": "org1", "year": 2021, "adultWage": 500 })).await;
  add_program(&s, json!({ "orgId": "org1", "year": 2022 })).await;
  add_program(&s, json!({ "orgId": "org1", "year": 2023, "adultWage": 700 })).await;

  let (status, body) =
    send(program_outcomes_router(s), "GET", "/values/org1/adultWage", None).await;
  assert_eq!(status, StatusCode::OK);
  let map = body.as_object().unwrap();
  assert_eq!(map.len(), 2);
  assert_eq!(map["2021"].as_f64(), Some(500.0));
  assert_eq!(map["2023"].as_f64(), Some(700.0));
}

// ── Create / delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn kitchen_record_without_required_fields_is_rejected() {
  let s = store().await;
  let (status, body) = send(
    kitchen_outcomes_router(s),
    "POST",
    "/",
    Some(json!({ "orgId": "org1", "year": 2022 })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_returns_the_record_then_404() {
  let s = store().await;
  let added = add_program(&s, json!({ "orgId": "org1", "year": 2022 })).await;
  let uri = format!("/{}", added["_id"].as_str().unwrap());

  let (status, body) = send(program_outcomes_router(s.clone()), "DELETE", &uri, None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, added);

  let (status, body) = send(program_outcomes_router(s), "DELETE", &uri, None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_with_malformed_id_is_a_bad_request() {
  let s = store().await;
  let (status, _) = send(program_outcomes_router(s), "DELETE", "/not-a-uuid", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Network average ──────────────────────────────────────────────────────────

#[tokio::test]
async fn average_lists_every_missing_parameter() {
  let s = store().await;
  let (status, body) =
    send(program_outcomes_router(s), "GET", "/average?field=adultWage&year=2022", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  let fields = body["fields"].as_array().unwrap();
  assert_eq!(fields.len(), 7);
  assert!(fields.contains(&json!("endYear")));
  assert!(fields.contains(&json!("compareModelOrganization")));
}

#[tokio::test]
async fn average_with_no_data_is_null() {
  let s = store().await;
  let uri = format!("/average?field=adultWage&year=2020&endYear=2022&{AVERAGE_ALL}");
  let (status, body) = send(program_outcomes_router(s), "GET", &uri, None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "field": "adultWage", "year": 2020, "average": null }));
}

#[tokio::test]
async fn average_over_year_range() {
  let s = store().await;
  add_program(&s, json!({ "orgId": "org1", "year": 2020, "adultWage": 10 })).await;
  add_program(&s, json!({ "orgId": "org2", "year": 2021, "adultWage": 20 })).await;
  add_program(&s, json!({ "orgId": "org3", "year": 2021 })).await;
  add_program(&s, json!({ "orgId": "org4", "year": 2023, "adultWage": 90 })).await;

  let uri = format!("/average?field=adultWage&year=2020&endYear=2022&{AVERAGE_ALL}");
  let (status, body) = send(program_outcomes_router(s), "GET", &uri, None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["average"].as_f64(), Some(15.0));
}

#[tokio::test]
async fn average_with_malformed_end_year_is_a_bad_request() {
  let s = store().await;
  let uri = format!("/average?field=adultWage&year=2020&endYear=later&{AVERAGE_ALL}");
  let (status, body) = send(program_outcomes_router(s), "GET", &uri, None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("endYear"));
}

#[tokio::test]
async fn average_is_not_routed_for_kitchens() {
  let s = store().await;
  let uri = format!("/average?field=costPerMeal&year=2020&endYear=2022&{AVERAGE_ALL}");
  let (status, _) = send(kitchen_outcomes_router(s), "GET", &uri, None).await;
  assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ── Barriers ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn barriers_project_the_program_record() {
  let s = store().await;
  add_program(
    &s,
    json!({ "orgId": "org1", "year": 2022, "barrierUnhoused": 30, "barrierVeteran": 5 }),
  )
  .await;

  let (status, body) = send(program_outcomes_router(s), "GET", "/barriers/2022/org1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["barrierUnhoused"].as_f64(), Some(30.0));
  assert_eq!(body["barrierVeteran"].as_f64(), Some(5.0));
  assert_eq!(body["barrierMentalHealth"], Value::Null);
}

// ── Organizations ────────────────────────────────────────────────────────────

#[tokio::test]
async fn organizations_round_trip_through_the_router() {
  let s = store().await;
  let (status, created) = send(
    organization_router(s.clone()),
    "POST",
    "/",
    Some(json!({ "_id": "org1", "organizationName": "Kitchen One", "modelOrganization": true })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["_id"], "org1");

  let (_, by_id) = send(organization_router(s.clone()), "GET", "/org1", None).await;
  assert_eq!(by_id["organizationName"], "Kitchen One");

  let (_, by_name) =
    send(organization_router(s.clone()), "GET", "/name/Kitchen%20One", None).await;
  assert_eq!(by_name["_id"], "org1");

  let (status, _) = send(
    organization_router(s.clone()),
    "POST",
    "/",
    Some(json!({ "_id": "org1", "organizationName": "Duplicate" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, all) = send(organization_router(s), "GET", "/", None).await;
  assert_eq!(all.as_array().unwrap().len(), 1);
}
