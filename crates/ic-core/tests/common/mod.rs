//! In-memory doubles for the store and auth seams.
#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ic_core::{AuthProvider, PortalError, PortalResult, PortalStore, SemesterCounts};
use ic_types::{AuthUser, Document, DocumentType, ScheduleEntry, Semester, SignInRequest, StudyYear, Weekday};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};
use uuid::Uuid;

/// Store whose tables are plain vectors. Every call is recorded.
#[derive(Default)]
pub struct MockStore {
    pub documents: RefCell<Vec<Document>>,
    pub schedule: RefCell<Vec<ScheduleEntry>>,
    pub fail: RefCell<Option<u16>>,
    pub document_calls: RefCell<Vec<Semester>>,
    pub schedule_calls: RefCell<Vec<StudyYear>>,
    pub count_calls: RefCell<usize>,
}

impl MockStore {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RefCell::new(documents),
            ..Default::default()
        }
    }

    pub fn with_schedule(schedule: Vec<ScheduleEntry>) -> Self {
        Self {
            schedule: RefCell::new(schedule),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.borrow_mut() = fail.then_some(503);
    }

    /// Answer every query as if the access token had been revoked.
    pub fn reject_session(&self) {
        *self.fail.borrow_mut() = Some(401);
    }

    fn check(&self) -> PortalResult<()> {
        match *self.fail.borrow() {
            Some(status) => Err(PortalError::Http {
                status,
                body: "unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl PortalStore for MockStore {
    async fn list_documents(&self, semester: Semester) -> PortalResult<Vec<Document>> {
        self.document_calls.borrow_mut().push(semester);
        self.check()?;
        // Insertion order on purpose; the state sorts by creation time
        Ok(self.documents.borrow().iter().filter(|d| d.semester == semester).cloned().collect())
    }

    async fn list_schedule(&self, year: StudyYear) -> PortalResult<Vec<ScheduleEntry>> {
        self.schedule_calls.borrow_mut().push(year);
        self.check()?;
        Ok(self.schedule.borrow().iter().filter(|e| e.year == year).cloned().collect())
    }

    async fn document_counts(&self) -> PortalResult<SemesterCounts> {
        *self.count_calls.borrow_mut() += 1;
        self.check()?;
        Ok(SemesterCounts::tally(self.documents.borrow().iter().map(|d| d.semester)))
    }
}

/// Auth provider with a fixed user and a switchable sign-out result.
#[derive(Default)]
pub struct MockAuth {
    pub user: RefCell<Option<AuthUser>>,
    pub fail_sign_out: bool,
    pub passwords: HashMap<String, String>,
}

impl MockAuth {
    pub fn signed_in() -> Self {
        Self {
            user: RefCell::new(Some(user())),
            ..Default::default()
        }
    }
}

#[async_trait(?Send)]
impl AuthProvider for MockAuth {
    async fn current_user(&self) -> PortalResult<Option<AuthUser>> {
        Ok(self.user.borrow().clone())
    }

    async fn sign_in_with_password(&self, request: &SignInRequest) -> PortalResult<AuthUser> {
        match self.passwords.get(&request.email) {
            Some(password) if *password == request.password => {
                let user = AuthUser {
                    id: Uuid::new_v4(),
                    email: Some(request.email.clone()),
                };
                *self.user.borrow_mut() = Some(user.clone());
                Ok(user)
            }
            _ => Err(PortalError::Http {
                status: 400,
                body: "invalid_grant".to_string(),
            }),
        }
    }

    async fn sign_out(&self) -> PortalResult<()> {
        if self.user.borrow().is_none() {
            return Err(PortalError::NotSignedIn);
        }
        if self.fail_sign_out {
            return Err(PortalError::Http {
                status: 500,
                body: "logout failed".to_string(),
            });
        }
        *self.user.borrow_mut() = None;
        Ok(())
    }
}

pub fn user() -> AuthUser {
    AuthUser {
        id: Uuid::from_u128(0x1a2b_3c4d),
        email: Some("etudiant@ifri.bj".to_string()),
    }
}

pub fn semester(n: i64) -> Semester {
    Semester::new(n).unwrap()
}

pub fn year(n: i64) -> StudyYear {
    StudyYear::new(n).unwrap()
}

/// Document created on day `day` of October 2024.
pub fn document(title: &str, sem: i64, day: u32) -> Document {
    Document {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        document_type: DocumentType::Examen,
        semester: semester(sem),
        file_url: format!("https://files.example.org/{}.pdf", title.to_lowercase().replace(' ', "-")),
        created_at: Utc.with_ymd_and_hms(2024, 10, day, 9, 0, 0).unwrap(),
    }
}

pub fn entry(subject: &str, yr: i64, day: Weekday, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry {
        id: Uuid::new_v4(),
        year: year(yr),
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        subject: subject.to_string(),
        professor: "M. Dossou".to_string(),
        room: "Salle 1".to_string(),
    }
}

/// Loopback HTTP server answering by request-line substring.
///
/// Unmatched requests get a 404. Every request head is recorded.
pub struct FakeBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub async fn start(routes: Vec<(&'static str, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let head = read_request(&mut socket).await;
                let request_line = head.lines().next().unwrap_or_default().to_string();
                log.lock().unwrap().push(head);

                let (status, body) = routes
                    .iter()
                    .find(|(needle, _, _)| request_line.contains(needle))
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, "{}".to_string()));
                let response = format!(
                    "HTTP/1.1 {status} Fake\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { url, requests }
    }

    /// Request heads received so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Read one request, body included, and return its head.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&data).into_owned();
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                return text[..end].to_string();
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

/// Session payload as the auth endpoints return it.
pub fn session_json(access_token: &str, expires_at: i64) -> String {
    format!(
        r#"{{"access_token":"{access_token}","refresh_token":"refresh-2","expires_at":{expires_at},"user":{{"id":"{}","email":"etudiant@ifri.bj"}}}}"#,
        user().id
    )
}
