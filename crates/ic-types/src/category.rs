//! Category selectors used by the tabbed pages.
//!
//! Tabs carry their value as a string id ("1".."6" for semesters, "1".."3"
//! for study years), the store filters on the integer column. Both
//! conversions go through these types so an out-of-range value never
//! reaches a query.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected category value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("semester must be between 1 and 6, got {0}")]
    Semester(i64),
    #[error("study year must be between 1 and 3, got {0}")]
    StudyYear(i64),
    #[error("invalid category id '{0}'")]
    InvalidId(String),
}

/// Academic semester, 1 through 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Semester(u8);

impl Semester {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: i64) -> Result<Self, CategoryError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CategoryError::Semester(value))
        }
    }

    /// All semesters in tab order.
    pub fn all() -> impl Iterator<Item = Semester> {
        (Self::MIN..=Self::MAX).map(Semester)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Tab value, e.g. `"3"`.
    pub fn id(self) -> String {
        self.0.to_string()
    }

    /// Short tab label, e.g. `"S3"`.
    pub fn short_label(self) -> String {
        format!("S{}", self.0)
    }

    /// Long label, e.g. `"Semestre 3"`.
    pub fn label(self) -> String {
        format!("Semestre {}", self.0)
    }
}

impl Default for Semester {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for Semester {
    type Error = CategoryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Semester> for i64 {
    fn from(value: Semester) -> Self {
        i64::from(value.0)
    }
}

impl FromStr for Semester {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| CategoryError::InvalidId(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Year of study, 1 through 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct StudyYear(u8);

impl StudyYear {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn new(value: i64) -> Result<Self, CategoryError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CategoryError::StudyYear(value))
        }
    }

    pub fn all() -> impl Iterator<Item = StudyYear> {
        (Self::MIN..=Self::MAX).map(StudyYear)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn id(self) -> String {
        self.0.to_string()
    }

    /// French ordinal label: "1ère Année", "2ème Année", ...
    pub fn label(self) -> String {
        let suffix = if self.0 == 1 { "ère" } else { "ème" };
        format!("{}{} Année", self.0, suffix)
    }
}

impl Default for StudyYear {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for StudyYear {
    type Error = CategoryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudyYear> for i64 {
    fn from(value: StudyYear) -> Self {
        i64::from(value.0)
    }
}

impl FromStr for StudyYear {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| CategoryError::InvalidId(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for StudyYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
