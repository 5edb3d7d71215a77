//! Categorical filters for network averages.
//!
//! Each bucket names a numeric range over one raw survey answer. Parsing is
//! total: a label that names no bucket selects `All`, so a stale or mistyped
//! filter widens the comparison instead of failing the request.

use serde::Serialize;

/// A half-open numeric range `[min, max)`; `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
  pub min: f64,
  pub max: Option<f64>,
}

impl Range {
  const fn new(min: f64, max: Option<f64>) -> Self { Self { min, max } }
}

/// Program size, measured by the number of trainees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ProgramSizeBucket {
  #[default]
  All,
  #[serde(rename = "1-19")]
  Small,
  #[serde(rename = "20-49")]
  Medium,
  #[serde(rename = "50-99")]
  Large,
  #[serde(rename = "100+")]
  VeryLarge,
}

impl ProgramSizeBucket {
  pub fn parse(label: &str) -> Self {
    match label.trim() {
      "1-19" => Self::Small,
      "20-49" => Self::Medium,
      "50-99" => Self::Large,
      "100+" => Self::VeryLarge,
      _ => Self::All,
    }
  }

  /// `None` for [`ProgramSizeBucket::All`].
  pub fn range(self) -> Option<Range> {
    match self {
      Self::All => None,
      Self::Small => Some(Range::new(1.0, Some(20.0))),
      Self::Medium => Some(Range::new(20.0, Some(50.0))),
      Self::Large => Some(Range::new(50.0, Some(100.0))),
      Self::VeryLarge => Some(Range::new(100.0, None)),
    }
  }
}

/// Share of trainees facing a barrier to employment, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BarrierBucket {
  #[default]
  All,
  #[serde(rename = "0-25%")]
  Quarter,
  #[serde(rename = "26-50%")]
  Half,
  #[serde(rename = "51-75%")]
  ThreeQuarters,
  #[serde(rename = "76-100%")]
  Most,
}

impl BarrierBucket {
  pub fn parse(label: &str) -> Self {
    match label.trim() {
      "0-25%" => Self::Quarter,
      "26-50%" => Self::Half,
      "51-75%" => Self::ThreeQuarters,
      "76-100%" => Self::Most,
      _ => Self::All,
    }
  }

  /// `None` for [`BarrierBucket::All`].
  pub fn range(self) -> Option<Range> {
    match self {
      Self::All => None,
      Self::Quarter => Some(Range::new(0.0, Some(26.0))),
      Self::Half => Some(Range::new(26.0, Some(51.0))),
      Self::ThreeQuarters => Some(Range::new(51.0, Some(76.0))),
      Self::Most => Some(Range::new(76.0, None)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_labels_parse() {
    assert_eq!(ProgramSizeBucket::parse("20-49"), ProgramSizeBucket::Medium);
    assert_eq!(ProgramSizeBucket::parse("100+"), ProgramSizeBucket::VeryLarge);
    assert_eq!(BarrierBucket::parse("51-75%"), BarrierBucket::ThreeQuarters);
  }

  #[test]
  fn unknown_labels_fall_back_to_all() {
    assert_eq!(ProgramSizeBucket::parse("All"), ProgramSizeBucket::All);
    assert_eq!(ProgramSizeBucket::parse("huge"), ProgramSizeBucket::All);
    assert_eq!(BarrierBucket::parse(""), BarrierBucket::All);
    assert_eq!(BarrierBucket::parse("0-25"), BarrierBucket::All);
    assert!(BarrierBucket::All.range().is_none());
  }

  #[test]
  fn ranges_are_half_open() {
    assert_eq!(
      ProgramSizeBucket::Medium.range(),
      Some(Range { min: 20.0, max: Some(50.0) })
    );
    assert_eq!(
      ProgramSizeBucket::VeryLarge.range(),
      Some(Range { min: 100.0, max: None })
    );
    assert_eq!(BarrierBucket::Most.range(), Some(Range { min: 76.0, max: None }));
  }
}
