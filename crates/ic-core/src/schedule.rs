//! Schedule page state: one study year selected, entries grouped by weekday.

use std::rc::Rc;

use ic_types::{ScheduleEntry, StudyYear, Weekday};

use crate::{
    error::PortalResult,
    session::SessionState,
    store::PortalStore,
    tracker::{FetchOutcome, FetchTicket, RequestTracker},
};

/// Classes of one weekday, earliest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub entries: Vec<ScheduleEntry>,
}

impl DaySchedule {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// No loading flag: the grid keeps showing the last entries while a
/// fetch is in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleState {
    tracker: RequestTracker<StudyYear>,
    entries: Vec<ScheduleEntry>,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            tracker: RequestTracker::new(StudyYear::default()),
            entries: Vec::new(),
        }
    }
}

impl ScheduleState {
    pub fn selected(&self) -> StudyYear {
        self.tracker.current()
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn select(&mut self, year: StudyYear) -> FetchTicket<StudyYear> {
        self.tracker.issue(year)
    }

    pub fn request(&mut self, session: &SessionState, year: StudyYear) -> Option<FetchTicket<StudyYear>> {
        session.can_fetch().then(|| self.select(year))
    }

    /// Same policy as the library: stale tickets are dropped, failures keep
    /// the previous entries.
    pub fn resolve(&mut self, ticket: FetchTicket<StudyYear>, result: PortalResult<Vec<ScheduleEntry>>) -> bool {
        if !self.tracker.is_current(&ticket) {
            tracing::debug!(year = %ticket.category, "discarding stale schedule response");
            return false;
        }

        match result {
            Ok(entries) => self.entries = entries,
            Err(e) => tracing::warn!(year = %ticket.category, error = %e, "schedule fetch failed, keeping previous entries"),
        }
        true
    }

    /// One group per weekday in calendar order. Every held entry lands in
    /// exactly one group.
    pub fn days(&self) -> Vec<DaySchedule> {
        Weekday::ALL
            .into_iter()
            .map(|day| {
                let mut entries: Vec<ScheduleEntry> =
                    self.entries.iter().filter(|e| e.day_of_week == day).cloned().collect();
                // `HH:MM:SS` sorts correctly as text
                entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));
                DaySchedule { day, entries }
            })
            .collect()
    }

    pub async fn fetch<S: PortalStore + ?Sized>(
        store: &S,
        ticket: &FetchTicket<StudyYear>,
    ) -> PortalResult<Vec<ScheduleEntry>> {
        tracing::debug!(year = %ticket.category, generation = ticket.generation(), "fetching schedule");
        store.list_schedule(ticket.category).await
    }
}

/// Drives the schedule page: one store query per year selection.
pub struct ScheduleController<S: ?Sized> {
    store: Rc<S>,
}

impl<S: ?Sized> Clone for ScheduleController<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: PortalStore + ?Sized> ScheduleController<S> {
    pub fn new(store: Rc<S>) -> Self {
        Self { store }
    }

    pub fn request(
        &self,
        state: &mut ScheduleState,
        session: &SessionState,
        year: StudyYear,
    ) -> Option<FetchTicket<StudyYear>> {
        state.request(session, year)
    }

    pub async fn load(&self, ticket: &FetchTicket<StudyYear>) -> PortalResult<Vec<ScheduleEntry>> {
        ScheduleState::fetch(&*self.store, ticket).await
    }

    pub fn complete(
        &self,
        state: &mut ScheduleState,
        ticket: FetchTicket<StudyYear>,
        result: PortalResult<Vec<ScheduleEntry>>,
    ) -> FetchOutcome {
        let lost = matches!(&result, Err(e) if e.is_session_lost());
        if !state.resolve(ticket, result) {
            FetchOutcome::Stale
        } else if lost {
            FetchOutcome::SessionLost
        } else {
            FetchOutcome::Applied
        }
    }

    pub async fn select(
        &self,
        state: &mut ScheduleState,
        session: &SessionState,
        year: StudyYear,
    ) -> Option<FetchOutcome> {
        let ticket = self.request(state, session, year)?;
        let result = self.load(&ticket).await;
        Some(self.complete(state, ticket, result))
    }
}
