//! Error types for `tally-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid year format: {0:?}")]
  InvalidYear(String),

  #[error("year {0} is outside the supported range")]
  YearOutOfRange(i64),

  #[error("organization id must not be blank")]
  BlankOrgId,

  #[error("invalid field name: {0:?}")]
  InvalidField(String),

  #[error("organization {0} already exists")]
  OrganizationExists(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
