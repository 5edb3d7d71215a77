//! The reporting year of an outcomes submission.
//!
//! Stored documents carry the year as an instant pinned to midnight UTC on
//! January 1. [`ReportingYear`] only keeps the calendar year, so every value
//! that reaches the store is already normalized and a lookup can never be off
//! by a year because of a time zone or a half-parsed date.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

const MIN_YEAR: i64 = 1;
const MAX_YEAR: i64 = 9999;

/// A calendar year in which an organization reported outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportingYear(i32);

impl ReportingYear {
  pub fn new(year: i64) -> Result<Self> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
      return Err(Error::YearOutOfRange(year));
    }
    Ok(Self(year as i32))
  }

  /// The UTC calendar year that `instant` falls in.
  pub fn from_instant(instant: DateTime<Utc>) -> Result<Self> {
    Self::new(i64::from(instant.year()))
  }

  pub fn get(self) -> i32 { self.0 }

  /// Midnight UTC on January 1 of this year.
  pub fn start(self) -> DateTime<Utc> {
    Utc
      .with_ymd_and_hms(self.0, 1, 1, 0, 0, 0)
      .single()
      .unwrap_or(DateTime::<Utc>::MIN_UTC)
  }
}

impl fmt::Display for ReportingYear {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Accepts a bare year (`2023`), a date (`2023-01-01`), a naive timestamp
/// (`2023-01-01T00:00:00`), or an RFC 3339 timestamp.
impl FromStr for ReportingYear {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    if s.is_empty() {
      return Err(Error::InvalidYear(s.to_owned()));
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
      let year: i64 = s.parse().map_err(|_| Error::InvalidYear(s.to_owned()))?;
      return Self::new(year);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
      return Self::from_instant(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
      return Self::new(i64::from(date.year()));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
      return Self::new(i64::from(naive.year()));
    }

    Err(Error::InvalidYear(s.to_owned()))
  }
}

impl Serialize for ReportingYear {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer
      .serialize_str(&self.start().to_rfc3339_opts(SecondsFormat::Secs, true))
  }
}

impl<'de> Deserialize<'de> for ReportingYear {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
      Number(i64),
      Text(String),
    }

    match Repr::deserialize(deserializer)? {
      Repr::Number(year) => Self::new(year),
      Repr::Text(text) => text.parse(),
    }
    .map_err(serde::de::Error::custom)
  }
}
