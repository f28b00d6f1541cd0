//! Read-only access to the `documents` and `schedules` tables.

use std::fmt;

use async_trait::async_trait;
use ic_types::{Document, ScheduleEntry, Semester, StudyYear};
use serde::Deserialize;
use url::Url;

use crate::{
    client::BackendClient,
    error::{PortalError, PortalResult},
};

pub const DOCUMENTS_TABLE: &str = "documents";
pub const SCHEDULES_TABLE: &str = "schedules";

/// Queries the pages issue against the remote store.
///
/// `?Send` because the browser HTTP client produces non-`Send` futures.
#[async_trait(?Send)]
pub trait PortalStore {
    /// Documents of one semester, newest first.
    async fn list_documents(&self, semester: Semester) -> PortalResult<Vec<Document>>;

    /// Schedule entries of one study year, ordered by day then start time.
    async fn list_schedule(&self, year: StudyYear) -> PortalResult<Vec<ScheduleEntry>>;

    /// Number of documents in every semester.
    async fn document_counts(&self) -> PortalResult<SemesterCounts>;
}

/// Per-semester document totals shown on the library tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SemesterCounts([usize; Semester::MAX as usize]);

impl SemesterCounts {
    pub fn tally(semesters: impl IntoIterator<Item = Semester>) -> Self {
        let mut counts = Self::default();
        for semester in semesters {
            counts.0[usize::from(semester.number() - 1)] += 1;
        }
        counts
    }

    pub fn get(&self, semester: Semester) -> usize {
        self.0[usize::from(semester.number() - 1)]
    }
}

/// Equality-filtered, ordered select on one table, in PostgREST syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    select: String,
    filters: Vec<(String, String)>,
    order: Vec<(String, bool)>,
}

impl TableQuery {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            select: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order.push((column.to_string(), ascending));
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn path(&self) -> String {
        format!("rest/v1/{}", self.table)
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select.clone())];
        pairs.extend(self.filters.iter().cloned());
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, ascending)| format!("{}.{}", column, if *ascending { "asc" } else { "desc" }))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_string(), order));
        }
        pairs
    }

    pub fn url(&self, base: &Url) -> PortalResult<Url> {
        let mut url = base.join(&self.path())?;
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        Ok(url)
    }
}

pub fn documents_query(semester: Semester) -> TableQuery {
    TableQuery::new(DOCUMENTS_TABLE)
        .eq("semester", semester)
        .order("created_at", false)
}

// Day order is whatever the column encoding sorts to; pages regroup by calendar day.
pub fn schedule_query(year: StudyYear) -> TableQuery {
    TableQuery::new(SCHEDULES_TABLE)
        .eq("year", year)
        .order("day_of_week", true)
        .order("start_time", true)
}

pub fn semester_tally_query() -> TableQuery {
    TableQuery::new(DOCUMENTS_TABLE).select("semester")
}

#[derive(Deserialize)]
struct SemesterRow {
    semester: Semester,
}

/// [`PortalStore`] backed by the project's REST endpoint.
#[derive(Clone, Debug)]
pub struct RestStore {
    client: BackendClient,
}

impl RestStore {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Refreshes an expired session before querying. A session that can no
    /// longer be refreshed fails the query with [`PortalError::NotSignedIn`]
    /// instead of silently falling back to anonymous access.
    async fn fetch<T: serde::de::DeserializeOwned>(&self, query: &TableQuery) -> PortalResult<Vec<T>> {
        let signed_in = self.client.current_session().is_some();
        if signed_in && self.client.fresh_session().await?.is_none() {
            return Err(PortalError::NotSignedIn);
        }
        let url = query.url(self.client.base_url())?;
        tracing::debug!(table = query.table(), url = %url, "querying remote store");
        BackendClient::send_json(self.client.get(url)).await
    }
}

#[async_trait(?Send)]
impl PortalStore for RestStore {
    async fn list_documents(&self, semester: Semester) -> PortalResult<Vec<Document>> {
        self.fetch(&documents_query(semester)).await
    }

    async fn list_schedule(&self, year: StudyYear) -> PortalResult<Vec<ScheduleEntry>> {
        self.fetch(&schedule_query(year)).await
    }

    async fn document_counts(&self) -> PortalResult<SemesterCounts> {
        let rows: Vec<SemesterRow> = self.fetch(&semester_tally_query()).await?;
        Ok(SemesterCounts::tally(rows.into_iter().map(|row| row.semester)))
    }
}
