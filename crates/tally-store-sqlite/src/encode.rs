//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated lowercase
//! strings, and outcome records as compact JSON documents.

use chrono::{DateTime, Utc};
use tally_core::{
  organization::{OrgId, Organization},
  record::{OutcomeKind, Outcomes, Stored},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Collections ─────────────────────────────────────────────────────────────

/// The table holding documents of `kind`.
pub fn table_for(kind: OutcomeKind) -> &'static str {
  match kind {
    OutcomeKind::Program => "program_outcomes",
    OutcomeKind::Kitchen => "kitchen_outcomes",
  }
}

/// Columns shared by both outcome tables, in [`RawRecord`] order.
pub const RECORD_COLUMNS: &str = "record_id, doc";

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an outcome table row.
pub struct RawRecord {
  pub record_id: String,
  pub doc:       String,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { record_id: row.get(0)?, doc: row.get(1)? })
  }

  pub fn into_stored<T: Outcomes>(self) -> Result<Stored<T>> {
    Ok(Stored {
      id:     decode_uuid(&self.record_id)?,
      record: serde_json::from_str(&self.doc)?,
    })
  }
}

/// Raw values read directly from an `organizations` row.
pub struct RawOrganization {
  pub org_id:             String,
  pub name:               String,
  pub model_organization: bool,
  pub created_at:         String,
}

/// Columns in [`RawOrganization`] order.
pub const ORGANIZATION_COLUMNS: &str = "org_id, name, model_organization, created_at";

impl RawOrganization {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      org_id:             row.get(0)?,
      name:               row.get(1)?,
      model_organization: row.get(2)?,
      created_at:         row.get(3)?,
    })
  }

  pub fn into_organization(self) -> Result<Organization> {
    Ok(Organization {
      id:                 OrgId::new(self.org_id)?,
      name:               self.name,
      model_organization: self.model_organization,
      created_at:         decode_dt(&self.created_at)?,
    })
  }
}
