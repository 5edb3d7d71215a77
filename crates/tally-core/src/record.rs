//! The [`Outcomes`] trait shared by both record variants, and the stored
//! envelope that adds the store-assigned id.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::{Error, Result, organization::OrgId, year::ReportingYear};

/// Which survey a record answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
  Program,
  Kitchen,
}

impl OutcomeKind {
  /// Human-readable name used in error messages.
  pub fn label(self) -> &'static str {
    match self {
      Self::Program => "program outcomes",
      Self::Kitchen => "kitchen outcomes",
    }
  }
}

/// A survey submission variant that can live in the record store.
pub trait Outcomes:
  Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
  const KIND: OutcomeKind;

  fn org_id(&self) -> &OrgId;

  /// `None` only for program submissions that did not state a year.
  fn year(&self) -> Option<ReportingYear>;
}

/// A record as persisted: the submitted document plus its store id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
  #[serde(rename = "_id")]
  pub id:     Uuid,
  #[serde(flatten)]
  pub record: T,
}

/// Check that `field` can name a top-level document field.
///
/// Field names reach the store as JSON paths, so anything beyond
/// `[A-Za-z0-9_]` is refused rather than escaped.
pub fn validate_field_name(field: &str) -> Result<&str> {
  let valid = !field.is_empty()
    && field.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
  if valid {
    Ok(field)
  } else {
    Err(Error::InvalidField(field.to_owned()))
  }
}
