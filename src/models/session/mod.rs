//! Logged climbing session model.
//!
//! A session records one day at the gym: how the climber felt and which
//! routes they tried. Sessions are keyed by calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::day_key;

/// How the session felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    #[default]
    Good,
    Okay,
    Tired,
    Rough,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "🙂",
            Mood::Okay => "😐",
            Mood::Tired => "😴",
            Mood::Rough => "😣",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Tired => "Tired",
            Mood::Rough => "Rough",
        }
    }
}

/// One route tried during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAttempt {
    /// Route name as shown on the wall, e.g. "White V4"
    pub name: String,
    /// Whether the route was sent
    pub sent: bool,
}

impl RouteAttempt {
    pub fn new(name: impl Into<String>, sent: bool) -> Self {
        Self {
            name: name.into(),
            sent,
        }
    }
}

/// A climbing session logged for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedSession {
    /// Store-assigned identifier, `None` until the session is added
    #[serde(default)]
    pub id: Option<u64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub routes: Vec<RouteAttempt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LoggedSession {
    /// Create a session with no route attempts yet.
    pub fn new(date: NaiveDate, mood: Mood) -> Self {
        Self {
            id: None,
            date,
            mood,
            routes: Vec::new(),
            notes: None,
        }
    }

    /// Add a route attempt, builder style.
    pub fn with_route(mut self, name: impl Into<String>, sent: bool) -> Self {
        self.routes.push(RouteAttempt::new(name, sent));
        self
    }

    /// Attach free-form notes, builder style.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The `YYYY-MM-DD` key this session is looked up by.
    pub fn day_key(&self) -> String {
        day_key(self.date)
    }

    /// Number of routes sent.
    pub fn sends(&self) -> usize {
        self.routes.iter().filter(|r| r.sent).count()
    }

    /// Validate the session data.
    pub fn validate(&self) -> Result<(), SessionValidationError> {
        if self.routes.is_empty() {
            return Err(SessionValidationError::NoRoutes);
        }

        for (index, route) in self.routes.iter().enumerate() {
            let name = route.name.trim();
            if name.is_empty() {
                return Err(SessionValidationError::EmptyRouteName { index });
            }
            if name.chars().count() > MAX_ROUTE_NAME_LEN {
                return Err(SessionValidationError::RouteNameTooLong { index });
            }
        }

        Ok(())
    }
}

/// Longest route name accepted, in characters.
pub const MAX_ROUTE_NAME_LEN: usize = 60;

/// Validation errors for LoggedSession.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionValidationError {
    #[error("A session needs at least one route")]
    NoRoutes,
    #[error("Route #{} has no name", .index + 1)]
    EmptyRouteName { index: usize },
    #[error("Route #{} name must be {} characters or less", .index + 1, MAX_ROUTE_NAME_LEN)]
    RouteNameTooLong { index: usize },
}
