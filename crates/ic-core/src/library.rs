//! Library page state: one semester selected, its documents held locally.

use std::rc::Rc;

use ic_types::{Document, Semester};

use crate::{
    error::PortalResult,
    session::SessionState,
    store::{PortalStore, SemesterCounts},
    tracker::{FetchOutcome, FetchTicket, RequestTracker},
};

/// What the document area shows. Exactly one applies at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibraryView<'a> {
    Loading,
    Empty,
    Documents(&'a [Document]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LibraryState {
    tracker: RequestTracker<Semester>,
    documents: Vec<Document>,
    loading: bool,
    counts: Option<SemesterCounts>,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            tracker: RequestTracker::new(Semester::default()),
            documents: Vec::new(),
            loading: true,
            counts: None,
        }
    }
}

impl LibraryState {
    pub fn selected(&self) -> Semester {
        self.tracker.current()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a fetch for `semester`. Any fetch still in flight becomes stale.
    pub fn select(&mut self, semester: Semester) -> FetchTicket<Semester> {
        self.loading = true;
        self.tracker.issue(semester)
    }

    /// [`select`](Self::select) gated on the session: nothing is issued
    /// until a signed-in user is known.
    pub fn request(&mut self, session: &SessionState, semester: Semester) -> Option<FetchTicket<Semester>> {
        session.can_fetch().then(|| self.select(semester))
    }

    /// Apply a fetch result. Returns `false` when the ticket was superseded
    /// and the result dropped.
    ///
    /// A failed fetch keeps whatever list was held before.
    pub fn resolve(&mut self, ticket: FetchTicket<Semester>, result: PortalResult<Vec<Document>>) -> bool {
        if !self.tracker.is_current(&ticket) {
            tracing::debug!(semester = %ticket.category, "discarding stale document response");
            return false;
        }

        match result {
            Ok(mut documents) => {
                documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.documents = documents;
            }
            Err(e) => {
                tracing::warn!(semester = %ticket.category, error = %e, "document fetch failed, keeping previous list");
            }
        }
        self.loading = false;
        true
    }

    pub fn set_counts(&mut self, result: PortalResult<SemesterCounts>) {
        match result {
            Ok(counts) => self.counts = Some(counts),
            Err(e) => tracing::warn!(error = %e, "semester count fetch failed, falling back to held documents"),
        }
    }

    /// Badge count for every tab. Uses the per-semester totals when they
    /// loaded, otherwise counts the held documents.
    pub fn tab_counts(&self) -> Vec<(Semester, usize)> {
        Semester::all()
            .map(|semester| {
                let count = match &self.counts {
                    Some(counts) => counts.get(semester),
                    None => self.documents.iter().filter(|d| d.semester == semester).count(),
                };
                (semester, count)
            })
            .collect()
    }

    pub fn view(&self) -> LibraryView<'_> {
        if self.loading {
            LibraryView::Loading
        } else if self.documents.is_empty() {
            LibraryView::Empty
        } else {
            LibraryView::Documents(&self.documents)
        }
    }

    /// Run the query a ticket stands for.
    pub async fn fetch<S: PortalStore + ?Sized>(
        store: &S,
        ticket: &FetchTicket<Semester>,
    ) -> PortalResult<Vec<Document>> {
        tracing::debug!(semester = %ticket.category, generation = ticket.generation(), "fetching documents");
        store.list_documents(ticket.category).await
    }
}

/// Drives the library page: one store query per semester selection.
///
/// The state is passed in rather than owned so the page can keep it in a
/// signal and release it while the query is in flight.
pub struct LibraryController<S: ?Sized> {
    store: Rc<S>,
}

impl<S: ?Sized> Clone for LibraryController<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: PortalStore + ?Sized> LibraryController<S> {
    pub fn new(store: Rc<S>) -> Self {
        Self { store }
    }

    /// Ticket for the semester just selected, `None` while no user is known.
    pub fn request(
        &self,
        state: &mut LibraryState,
        session: &SessionState,
        semester: Semester,
    ) -> Option<FetchTicket<Semester>> {
        state.request(session, semester)
    }

    pub async fn load(&self, ticket: &FetchTicket<Semester>) -> PortalResult<Vec<Document>> {
        LibraryState::fetch(&*self.store, ticket).await
    }

    pub fn complete(
        &self,
        state: &mut LibraryState,
        ticket: FetchTicket<Semester>,
        result: PortalResult<Vec<Document>>,
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

    /// Request, load and complete in one go. `None` when nothing was issued.
    pub async fn select(
        &self,
        state: &mut LibraryState,
        session: &SessionState,
        semester: Semester,
    ) -> Option<FetchOutcome> {
        let ticket = self.request(state, session, semester)?;
        let result = self.load(&ticket).await;
        Some(self.complete(state, ticket, result))
    }

    /// Per-semester totals for the tab badges.
    pub async fn counts(&self) -> PortalResult<SemesterCounts> {
        self.store.document_counts().await
    }
}
