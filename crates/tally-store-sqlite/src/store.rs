//! [`SqliteStore`]: the SQLite implementation of [`OutcomesStore`].

use std::{collections::BTreeMap, path::Path};

use chrono::Utc;
use rusqlite::{OptionalExtension as _, types::Value};
use uuid::Uuid;

use tally_core::{
  average::{NetworkAverageQuery, mean_of_present},
  organization::{NewOrganization, OrgId, Organization},
  record::{OutcomeKind, Outcomes, Stored},
  store::OutcomesStore,
  year::ReportingYear,
};

use crate::{
  Error, Result,
  encode::{
    ORGANIZATION_COLUMNS, RECORD_COLUMNS, RawOrganization, RawRecord, encode_dt,
    encode_uuid, table_for,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Tally store backed by a single SQLite file.
///
/// Cloning shares the inner connection.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT record_id, doc ...` statement and collect the raw rows.
  async fn query_records(&self, sql: String, params: Vec<Value>) -> Result<Vec<RawRecord>> {
    let raws = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(raws)
  }

  async fn query_organizations(
    &self,
    sql: String,
    params: Vec<Value>,
  ) -> Result<Vec<Organization>> {
    let raws: Vec<RawOrganization> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawOrganization::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawOrganization::into_organization).collect()
  }
}

fn decode_all<T: Outcomes>(raws: Vec<RawRecord>) -> Result<Vec<Stored<T>>> {
  raws.into_iter().map(RawRecord::into_stored).collect()
}

fn year_value(year: ReportingYear) -> Value { Value::Integer(i64::from(year.get())) }

// ─── OutcomesStore impl ──────────────────────────────────────────────────────

impl OutcomesStore for SqliteStore {
  type Error = Error;

  // ── Organizations ─────────────────────────────────────────────────────────

  async fn add_organization(&self, input: NewOrganization) -> Result<Organization> {
    let id = match input.id {
      Some(id) => id,
      None => OrgId::new(encode_uuid(Uuid::new_v4()))?,
    };

    let org = Organization {
      id,
      name: input.name,
      model_organization: input.model_organization,
      created_at: Utc::now(),
    };

    let id_str = org.id.to_string();
    let name   = org.name.clone();
    let model  = org.model_organization;
    let at_str = encode_dt(org.created_at);

    let inserted = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO organizations (org_id, name, model_organization, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, name, model, at_str],
        );
        match res {
          Ok(_) => Ok(true),
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
          {
            Ok(false)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    if !inserted {
      return Err(tally_core::Error::OrganizationExists(org.id.to_string()).into());
    }

    tracing::debug!(org_id = %org.id, "organization created");
    Ok(org)
  }

  async fn get_organization(&self, id: OrgId) -> Result<Option<Organization>> {
    let id_str = id.to_string();

    let raw: Option<RawOrganization> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {ORGANIZATION_COLUMNS} FROM organizations WHERE org_id = ?1"),
              rusqlite::params![id_str],
              RawOrganization::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawOrganization::into_organization).transpose()
  }

  async fn get_organization_by_name(&self, name: String) -> Result<Option<Organization>> {
    let mut orgs = self
      .query_organizations(
        format!(
          "SELECT {ORGANIZATION_COLUMNS} FROM organizations
           WHERE name = ?1 ORDER BY created_at, rowid LIMIT 1"
        ),
        vec![Value::Text(name)],
      )
      .await?;
    Ok(orgs.pop())
  }

  async fn list_organizations(&self) -> Result<Vec<Organization>> {
    self
      .query_organizations(
        format!("SELECT {ORGANIZATION_COLUMNS} FROM organizations ORDER BY name, org_id"),
        Vec::new(),
      )
      .await
  }

  // ── Outcome records ───────────────────────────────────────────────────────

  async fn add_outcomes<T: Outcomes>(&self, record: T) -> Result<Stored<T>> {
    let stored = Stored { id: Uuid::new_v4(), record };

    let table      = table_for(T::KIND);
    let id_str     = encode_uuid(stored.id);
    let org_id_str = stored.record.org_id().to_string();
    let year       = stored.record.year().map(|y| i64::from(y.get()));
    let doc        = serde_json::to_string(&stored.record)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          &format!(
            "INSERT INTO {table} (record_id, org_id, year, doc) VALUES (?1, ?2, ?3, ?4)"
          ),
          rusqlite::params![id_str, org_id_str, year, doc],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(kind = T::KIND.label(), id = %stored.id, "outcomes record inserted");
    Ok(stored)
  }

  async fn get_outcomes<T: Outcomes>(&self, id: Uuid) -> Result<Option<Stored<T>>> {
    let table = table_for(T::KIND);
    let raws = self
      .query_records(
        format!("SELECT {RECORD_COLUMNS} FROM {table} WHERE record_id = ?1"),
        vec![Value::Text(encode_uuid(id))],
      )
      .await?;
    raws.into_iter().next().map(RawRecord::into_stored).transpose()
  }

  async fn find_outcomes<T: Outcomes>(
    &self,
    year: ReportingYear,
    org_id: OrgId,
  ) -> Result<Option<Stored<T>>> {
    let table = table_for(T::KIND);
    let raws = self
      .query_records(
        format!(
          "SELECT {RECORD_COLUMNS} FROM {table}
           WHERE org_id = ?1 AND year = ?2 ORDER BY seq LIMIT 1"
        ),
        vec![Value::Text(org_id.to_string()), year_value(year)],
      )
      .await?;
    raws.into_iter().next().map(RawRecord::into_stored).transpose()
  }

  async fn list_outcomes<T: Outcomes>(&self) -> Result<Vec<Stored<T>>> {
    let table = table_for(T::KIND);
    let raws = self
      .query_records(
        format!("SELECT {RECORD_COLUMNS} FROM {table} ORDER BY seq"),
        Vec::new(),
      )
      .await?;
    decode_all(raws)
  }

  async fn list_outcomes_by_year<T: Outcomes>(
    &self,
    year: ReportingYear,
  ) -> Result<Vec<Stored<T>>> {
    let table = table_for(T::KIND);
    let raws = self
      .query_records(
        format!("SELECT {RECORD_COLUMNS} FROM {table} WHERE year = ?1 ORDER BY seq"),
        vec![year_value(year)],
      )
      .await?;
    decode_all(raws)
  }

  async fn list_outcomes_by_org<T: Outcomes>(&self, org_id: OrgId) -> Result<Vec<Stored<T>>> {
    let table = table_for(T::KIND);
    let raws = self
      .query_records(
        format!("SELECT {RECORD_COLUMNS} FROM {table} WHERE org_id = ?1 ORDER BY seq"),
        vec![Value::Text(org_id.to_string())],
      )
      .await?;
    decode_all(raws)
  }

  async fn delete_outcomes<T: Outcomes>(&self, id: Uuid) -> Result<bool> {
    let table  = table_for(T::KIND);
    let id_str = encode_uuid(id);

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          &format!("DELETE FROM {table} WHERE record_id = ?1"),
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if deleted > 0 {
      tracing::debug!(kind = T::KIND.label(), %id, "outcomes record deleted");
    }
    Ok(deleted > 0)
  }

  async fn distinct_years<T: Outcomes>(&self, org_id: OrgId) -> Result<Vec<ReportingYear>> {
    let table      = table_for(T::KIND);
    let org_id_str = org_id.to_string();

    let years: Vec<i64> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT DISTINCT year FROM {table}
           WHERE org_id = ?1 AND year IS NOT NULL ORDER BY year"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![org_id_str], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(
      years
        .into_iter()
        .map(ReportingYear::new)
        .collect::<tally_core::Result<_>>()?,
    )
  }

  async fn distinct_org_ids<T: Outcomes>(&self) -> Result<Vec<OrgId>> {
    let table = table_for(T::KIND);

    let ids: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT DISTINCT org_id FROM {table} ORDER BY org_id"))?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(ids.into_iter().map(OrgId::new).collect::<tally_core::Result<_>>()?)
  }

  async fn field_values_by_year<T: Outcomes>(
    &self,
    org_id: OrgId,
    field: String,
  ) -> Result<BTreeMap<i32, serde_json::Value>> {
    let table      = table_for(T::KIND);
    let org_id_str = org_id.to_string();

    let rows: Vec<(i64, String)> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT year, doc FROM {table}
           WHERE org_id = ?1 AND year IS NOT NULL ORDER BY seq"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![org_id_str], |row| Ok((row.get(0)?, row.get(1)?)))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut values = BTreeMap::new();
    for (year, doc) in rows {
      let mut doc: serde_json::Value = serde_json::from_str(&doc)?;
      let value = doc
        .get_mut(&field)
        .map(serde_json::Value::take)
        .filter(|v| !v.is_null());
      if let Some(value) = value {
        values.insert(ReportingYear::new(year)?.get(), value);
      }
    }
    Ok(values)
  }

  async fn network_average(&self, query: &NetworkAverageQuery) -> Result<Option<f64>> {
    let table = table_for(OutcomeKind::Program);

    // ?1, ?2: year range; ?3: JSON path of the averaged field.
    let mut params = vec![
      year_value(query.start_year),
      year_value(query.end_year),
      Value::Text(format!("$.{}", query.field)),
    ];
    let mut conds = vec!["p.year BETWEEN ?1 AND ?2".to_owned()];

    for (field, range) in query.range_filters() {
      params.push(Value::Real(range.min));
      let mut cond = format!("json_extract(p.doc, '$.{field}') >= ?{}", params.len());
      if let Some(max) = range.max {
        params.push(Value::Real(max));
        cond.push_str(&format!(" AND json_extract(p.doc, '$.{field}') < ?{}", params.len()));
      }
      conds.push(cond);
    }

    if query.model_organizations_only {
      conds.push(
        "EXISTS (SELECT 1 FROM organizations o
                 WHERE o.org_id = p.org_id AND o.model_organization = 1)"
          .to_owned(),
      );
    }

    // Only JSON numbers are averaged; strings, booleans and missing keys
    // come back as NULL and are skipped.
    let sql = format!(
      "SELECT CASE WHEN json_type(p.doc, ?3) IN ('integer', 'real')
                   THEN json_extract(p.doc, ?3) END
       FROM {table} p
       WHERE {}",
      conds.join(" AND ")
    );

    let values: Vec<Option<f64>> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    tracing::debug!(
      field = %query.field,
      matched = values.len(),
      "network average computed"
    );
    Ok(mean_of_present(values))
  }
}
