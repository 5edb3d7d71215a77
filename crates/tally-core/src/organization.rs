//! Organization: the member organization an outcomes record belongs to.
//!
//! Outcome records reference organizations by [`OrgId`] only. The reference
//! is weak: nothing cascades when an organization goes away.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Opaque, non-blank organization identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrgId(String);

impl OrgId {
  pub fn new(id: impl Into<String>) -> Result<Self> {
    let id = id.into();
    let trimmed = id.trim();
    if trimmed.is_empty() {
      return Err(Error::BlankOrgId);
    }
    Ok(Self(trimmed.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for OrgId {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::new(value) }
}

impl From<OrgId> for String {
  fn from(id: OrgId) -> Self { id.0 }
}

impl fmt::Display for OrgId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// A member organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
  #[serde(rename = "_id")]
  pub id:                 OrgId,
  #[serde(rename = "organizationName")]
  pub name:               String,
  /// Member of the peer-comparison cohort used by network averages.
  pub model_organization: bool,
  pub created_at:         DateTime<Utc>,
}

/// Input to [`crate::store::OutcomesStore::add_organization`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
  /// Caller-chosen id; the store generates one when absent.
  #[serde(rename = "_id", default)]
  pub id:                 Option<OrgId>,
  #[serde(rename = "organizationName")]
  pub name:               String,
  #[serde(default)]
  pub model_organization: bool,
}

impl NewOrganization {
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: None, name: name.into(), model_organization: false }
  }

  pub fn with_id(mut self, id: OrgId) -> Self {
    self.id = Some(id);
    self
  }

  pub fn model(mut self) -> Self {
    self.model_organization = true;
    self
  }
}
