//! Request tagging for category-scoped fetches.
//!
//! Every selection issues a ticket carrying the category and a generation
//! number. A response is applied only if its ticket is still the latest one,
//! so a slow reply for a tab the user already left cannot overwrite the
//! data for the tab they are looking at.

/// Handle for one outstanding fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket<C> {
    pub category: C,
    generation: u64,
}

impl<C> FetchTicket<C> {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result (data or a suppressed failure) reached the page state.
    Applied,
    /// A newer selection superseded the ticket; the result was dropped.
    Stale,
    /// The store no longer accepts the session. The page should treat the
    /// user as signed out.
    SessionLost,
}

/// Tracks the most recently issued ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTracker<C> {
    current: C,
    generation: u64,
}

impl<C: Copy + PartialEq> RequestTracker<C> {
    pub fn new(initial: C) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    /// Category of the latest ticket (or the initial value).
    pub fn current(&self) -> C {
        self.current
    }

    pub fn issue(&mut self, category: C) -> FetchTicket<C> {
        self.generation += 1;
        self.current = category;
        FetchTicket {
            category,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket<C>) -> bool {
        ticket.generation == self.generation && ticket.category == self.current
    }
}
