//! State of the "log a session" dialog.
//!
//! The form is plain value data. Every edit returns a new form with a fresh
//! route list, so callers never hold a view into a list that is being
//! mutated. Edits aimed at a route index that doesn't exist return the form
//! unchanged.

use chrono::NaiveDate;

use crate::models::session::{LoggedSession, Mood, RouteAttempt, SessionValidationError};

/// One editable route row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteInput {
    pub name: String,
    pub sent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionForm {
    date: NaiveDate,
    mood: Mood,
    routes: Vec<RouteInput>,
    notes: String,
}

impl SessionForm {
    /// A fresh form for `date` with one empty route row.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            mood: Mood::default(),
            routes: vec![RouteInput::default()],
            notes: String::new(),
        }
    }

    /// Prefill the form from an existing session.
    pub fn from_session(session: &LoggedSession) -> Self {
        Self {
            date: session.date,
            mood: session.mood,
            routes: session
                .routes
                .iter()
                .map(|r| RouteInput {
                    name: r.name.clone(),
                    sent: r.sent,
                })
                .collect(),
            notes: session.notes.clone().unwrap_or_default(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn routes(&self) -> &[RouteInput] {
        &self.routes
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self { date, ..self.clone() }
    }

    pub fn with_mood(&self, mood: Mood) -> Self {
        Self { mood, ..self.clone() }
    }

    pub fn with_notes(&self, notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..self.clone()
        }
    }

    /// Append an empty route row.
    pub fn with_route_added(&self) -> Self {
        let routes = self
            .routes
            .iter()
            .cloned()
            .chain(std::iter::once(RouteInput::default()))
            .collect();
        Self {
            routes,
            ..self.clone()
        }
    }

    pub fn with_route_name(&self, index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        self.replace_route(index, |route| RouteInput {
            name,
            sent: route.sent,
        })
    }

    pub fn with_route_sent(&self, index: usize, sent: bool) -> Self {
        self.replace_route(index, |route| RouteInput {
            name: route.name.clone(),
            sent,
        })
    }

    pub fn with_route_removed(&self, index: usize) -> Self {
        if index >= self.routes.len() {
            return self.clone();
        }
        let routes = self
            .routes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, r)| r.clone())
            .collect();
        Self {
            routes,
            ..self.clone()
        }
    }

    fn replace_route(&self, index: usize, edit: impl FnOnce(&RouteInput) -> RouteInput) -> Self {
        let Some(current) = self.routes.get(index) else {
            return self.clone();
        };
        let replacement = edit(current);
        let routes = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, r)| if i == index { replacement.clone() } else { r.clone() })
            .collect();
        Self {
            routes,
            ..self.clone()
        }
    }

    /// Turn the form into a session.
    ///
    /// Route names are trimmed and blank rows dropped; at least one named
    /// route must remain. Blank notes become `None`.
    pub fn submit(&self) -> Result<LoggedSession, SessionValidationError> {
        let routes: Vec<RouteAttempt> = self
            .routes
            .iter()
            .filter(|r| !r.name.trim().is_empty())
            .map(|r| RouteAttempt::new(r.name.trim(), r.sent))
            .collect();

        let notes = self.notes.trim();
        let session = LoggedSession {
            id: None,
            date: self.date,
            mood: self.mood,
            routes,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        };

        session.validate()?;
        Ok(session)
    }
}
