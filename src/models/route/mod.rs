//! Gym areas and routes shown on the home screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hardest grade on the V scale.
pub const MAX_V_GRADE: u8 = 17;

/// Boulder grade on the V scale (V0 to V17).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grade(u8);

impl Grade {
    pub fn new(value: u8) -> Result<Self, GradeParseError> {
        if value > MAX_V_GRADE {
            return Err(GradeParseError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Clamp anything above V17 down to V17.
    pub const fn saturating(value: u8) -> Self {
        if value > MAX_V_GRADE {
            Self(MAX_V_GRADE)
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

impl FromStr for Grade {
    type Err = GradeParseError;

    /// Accepts "V4", "v4" or a bare "4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('V')
            .or_else(|| trimmed.strip_prefix('v'))
            .unwrap_or(trimmed);
        let value: u8 = digits
            .parse()
            .map_err(|_| GradeParseError::Invalid(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<String> for Grade {
    type Error = GradeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

/// Errors from parsing a V grade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeParseError {
    #[error("'{0}' is not a V grade")]
    Invalid(String),
    #[error("V{0} is beyond V{max}", max = MAX_V_GRADE)]
    OutOfRange(u8),
}

/// A marked section of the gym map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymArea {
    pub id: String,
    /// Name shown on the map, e.g. "Mezzanine"
    pub name: String,
    /// Short wall label, e.g. "11"
    pub label: Option<String>,
}

impl GymArea {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// "11 Mezzanine" when a wall label exists, otherwise just the name.
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}", label, self.name),
            None => self.name.clone(),
        }
    }
}

/// A set boulder problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    /// Hold color plus grade, e.g. "White V4"
    pub name: String,
    pub grade: Grade,
    /// Id of the `GymArea` the route is set in
    pub area_id: String,
    /// Style tags without the leading '#', e.g. "Crimp"
    pub tags: Vec<String>,
    pub ascents: u32,
}

impl Route {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grade: Grade,
        area_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade,
            area_id: area_id.into(),
            tags: Vec::new(),
            ascents: 0,
        }
    }

    /// Add a style tag; a leading '#' is stripped.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(normalize_tag(tag).to_string());
        self
    }

    pub fn with_ascents(mut self, ascents: u32) -> Self {
        self.ascents = ascents;
        self
    }

    /// Case-insensitive tag match, '#' optional.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Tags formatted as on the route card: "#Crimp #Coordination".
    pub fn hashtags(&self) -> String {
        self.tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn normalize_tag(tag: &str) -> &str {
    tag.trim().trim_start_matches('#')
}
