//! In-memory store of logged climbing sessions.
//!
//! At most one session is kept per calendar day: `add` rejects a second
//! session for a day that is already logged, `replace` swaps an edited
//! session in for the original, and bulk loading keeps the first entry per
//! day. Lookups return the first match in store order.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::session::{LoggedSession, SessionValidationError};

/// Errors from writing to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("A session is already logged for {0}")]
    DuplicateDay(String),
    #[error(transparent)]
    Invalid(#[from] SessionValidationError),
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Vec<LoggedSession>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from existing sessions, keeping the first per day.
    ///
    /// Later duplicates are dropped with a warning; invalid sessions are
    /// kept as-is since they come from outside the form.
    pub fn from_sessions(sessions: impl IntoIterator<Item = LoggedSession>) -> Self {
        let mut store = Self::new();
        for session in sessions {
            if store.find_for_date(session.date).is_some() {
                log::warn!(
                    "Dropping duplicate session for {}; keeping the first one",
                    session.day_key()
                );
                continue;
            }
            store.insert(session);
        }
        store
    }

    /// Load sessions from a JSON array, e.g. a seed file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read sessions from {}", path.display()))?;
        let sessions: Vec<LoggedSession> = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse sessions from {}", path.display()))?;
        log::info!("Loaded {} sessions from {}", sessions.len(), path.display());
        Ok(Self::from_sessions(sessions))
    }

    /// Validate and add a session. Returns the stored copy with its id.
    pub fn add(&mut self, session: LoggedSession) -> Result<&LoggedSession, SessionStoreError> {
        session.validate()?;

        if self.find_for_date(session.date).is_some() {
            return Err(SessionStoreError::DuplicateDay(session.day_key()));
        }

        log::info!(
            "Logged session for {} ({} routes, {} sends)",
            session.day_key(),
            session.routes.len(),
            session.sends()
        );
        Ok(self.insert(session))
    }

    /// Swap the session logged on `original` for an edited one.
    ///
    /// The edited session keeps the original's id and may move to another
    /// day, as long as that day is free. With nothing on `original` this
    /// behaves like `add`.
    pub fn replace(
        &mut self,
        original: NaiveDate,
        mut session: LoggedSession,
    ) -> Result<&LoggedSession, SessionStoreError> {
        session.validate()?;

        if session.date != original && self.find_for_date(session.date).is_some() {
            return Err(SessionStoreError::DuplicateDay(session.day_key()));
        }

        let Some(previous) = self.remove_for_date(original) else {
            return self.add(session);
        };

        log::info!(
            "Updated session for {} ({} routes, {} sends)",
            session.day_key(),
            session.routes.len(),
            session.sends()
        );
        session.id = previous.id;
        self.sessions.push(session);
        Ok(&self.sessions[self.sessions.len() - 1])
    }

    fn insert(&mut self, mut session: LoggedSession) -> &LoggedSession {
        session.id = Some(self.next_id);
        self.next_id += 1;
        self.sessions.push(session);
        &self.sessions[self.sessions.len() - 1]
    }

    /// The session logged on `date`'s calendar day, if any.
    pub fn find_for_date(&self, date: NaiveDate) -> Option<&LoggedSession> {
        self.sessions.iter().find(|s| s.date == date)
    }

    /// Sessions within the given month, in store order.
    pub fn sessions_in_month(&self, year: i32, month: u32) -> Vec<&LoggedSession> {
        self.sessions
            .iter()
            .filter(|s| s.date.year() == year && s.date.month() == month)
            .collect()
    }

    /// Days of the month that have a session, for grid markers.
    pub fn dates_with_sessions(&self, year: i32, month: u32) -> BTreeSet<NaiveDate> {
        self.sessions_in_month(year, month)
            .into_iter()
            .map(|s| s.date)
            .collect()
    }

    /// Remove the session on `date`, returning it.
    pub fn remove_for_date(&mut self, date: NaiveDate) -> Option<LoggedSession> {
        let index = self.sessions.iter().position(|s| s.date == date)?;
        Some(self.sessions.remove(index))
    }

    pub fn all(&self) -> &[LoggedSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
