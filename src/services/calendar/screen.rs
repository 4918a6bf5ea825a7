//! Calendar screen view state.
//!
//! Owns everything the calendar screen keeps between redraws: the displayed
//! month, the selected day, the session store and the logging dialog. The
//! state lives only as long as the screen.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use super::MonthGrid;
use crate::models::session::LoggedSession;
use crate::services::session::SessionStore;
use crate::services::session_form::SessionForm;
use crate::utils::date::{first_of_month, is_same_month, next_month, previous_month};

/// Source of the current local day.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the device's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Pinned to one day; handy for scripted rendering.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct CalendarScreen<C: Clock> {
    clock: C,
    current_month: NaiveDate,
    selected_date: NaiveDate,
    store: SessionStore,
    dialog: Option<SessionForm>,
    /// Day of the session being edited, `None` for a new entry.
    editing: Option<NaiveDate>,
}

impl<C: Clock> CalendarScreen<C> {
    /// Open the screen on today's month with today selected.
    pub fn new(clock: C, store: SessionStore) -> Self {
        let today = clock.today();
        Self {
            clock,
            current_month: first_of_month(today),
            selected_date: today,
            store,
            dialog: None,
            editing: None,
        }
    }

    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn previous_month(&mut self) {
        self.current_month = previous_month(self.current_month);
        log::debug!("Calendar moved back to {}", self.current_month);
    }

    pub fn next_month(&mut self) {
        self.current_month = next_month(self.current_month);
        log::debug!("Calendar moved forward to {}", self.current_month);
    }

    /// Show `month`'s month without changing the selection.
    pub fn show_month(&mut self, month: NaiveDate) {
        self.current_month = first_of_month(month);
    }

    /// Jump back to today's month and select today.
    pub fn go_to_today(&mut self) {
        let today = self.clock.today();
        self.current_month = first_of_month(today);
        self.selected_date = today;
    }

    /// Select a day. Selecting outside the displayed month also moves there.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        if !is_same_month(date, self.current_month) {
            self.current_month = first_of_month(date);
        }
    }

    /// The grid for the displayed month as of the clock's today.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.current_month, self.selected_date, self.clock.today())
    }

    /// Session logged on the selected day, `None` for the empty state.
    pub fn selected_session(&self) -> Option<&LoggedSession> {
        self.store.find_for_date(self.selected_date)
    }

    pub fn dialog(&self) -> Option<&SessionForm> {
        self.dialog.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Open the logging dialog for the selected day.
    ///
    /// A day that already has a session opens prefilled for editing.
    pub fn open_log_dialog(&mut self) {
        let form = match self.store.find_for_date(self.selected_date) {
            Some(session) => {
                self.editing = Some(session.date);
                SessionForm::from_session(session)
            }
            None => {
                self.editing = None;
                SessionForm::new(self.selected_date)
            }
        };
        self.dialog = Some(form);
    }

    /// True when the open dialog edits an existing session.
    pub fn is_editing(&self) -> bool {
        self.dialog.is_some() && self.editing.is_some()
    }

    /// Apply an edit to the open dialog's form. No-op when closed.
    pub fn update_form(&mut self, edit: impl FnOnce(&SessionForm) -> SessionForm) {
        if let Some(form) = self.dialog.as_ref() {
            self.dialog = Some(edit(form));
        }
    }

    pub fn cancel_log_dialog(&mut self) {
        self.dialog = None;
        self.editing = None;
    }

    /// Submit the dialog into the store and close it.
    ///
    /// An edit replaces the original session. On a validation or duplicate-day
    /// error the dialog stays open with its contents intact.
    pub fn save_log_dialog(&mut self) -> Result<()> {
        let Some(form) = self.dialog.as_ref() else {
            anyhow::bail!("No session dialog is open");
        };
        let session = form.submit()?;
        match self.editing {
            Some(original) => self.store.replace(original, session)?,
            None => self.store.add(session)?,
        };
        self.dialog = None;
        self.editing = None;
        Ok(())
    }
}
