mod common;

use std::{collections::HashSet, rc::Rc};

use common::*;
use ic_core::{FetchOutcome, ScheduleController, ScheduleState, SessionState};
use ic_types::{StudyYear, Weekday};

fn week() -> Vec<ic_types::ScheduleEntry> {
    vec![
        entry("Réseaux", 1, Weekday::Lundi, "10:00:00", "12:00:00"),
        entry("Algorithmique", 1, Weekday::Lundi, "08:00:00", "10:00:00"),
        entry("Anglais", 1, Weekday::Mercredi, "14:30:00", "16:00:00"),
        entry("Bases de données", 1, Weekday::Samedi, "09:05:00", "11:00:00"),
        entry("Compilation", 2, Weekday::Mardi, "08:00:00", "10:00:00"),
        entry("Systèmes", 3, Weekday::Jeudi, "08:00:00", "12:00:00"),
        entry("Projet", 3, Weekday::Vendredi, "13:00:00", "17:00:00"),
    ]
}

async fn load(state: &mut ScheduleState, store: &MockStore, yr: i64) {
    let ticket = state.select(year(yr));
    let result = ScheduleState::fetch(store, &ticket).await;
    assert!(state.resolve(ticket, result));
}

#[tokio::test]
async fn test_each_year_issues_one_query_and_days_partition_entries() {
    let store = MockStore::with_schedule(week());
    let mut state = ScheduleState::default();

    for yr in StudyYear::all() {
        let before = store.schedule_calls.borrow().len();
        load(&mut state, &store, i64::from(yr.number())).await;
        assert_eq!(store.schedule_calls.borrow().len(), before + 1);
        assert_eq!(store.schedule_calls.borrow().last(), Some(&yr));

        let days = state.days();
        assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), Weekday::ALL.to_vec());

        let grouped: Vec<_> = days.iter().flat_map(|d| d.entries.iter().map(|e| e.id)).collect();
        let unique: HashSet<_> = grouped.iter().copied().collect();
        assert_eq!(grouped.len(), state.entries().len(), "no entry omitted or duplicated");
        assert_eq!(unique.len(), grouped.len());
        assert!(days.iter().all(|d| d.entries.iter().all(|e| e.day_of_week == d.day)));
    }
}

#[tokio::test]
async fn test_empty_day_alongside_populated_days() {
    let store = MockStore::with_schedule(week());
    let mut state = ScheduleState::default();
    load(&mut state, &store, 1).await;

    let days = state.days();
    let monday = &days[0];
    assert_eq!(monday.day, Weekday::Lundi);
    let subjects: Vec<&str> = monday.entries.iter().map(|e| e.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Algorithmique", "Réseaux"]);
    assert_eq!(monday.entries[0].time_range(), "08:00 - 10:00");

    let tuesday = &days[1];
    assert!(tuesday.is_empty());
    assert_eq!(days[5].entries[0].time_range(), "09:05 - 11:00");
}

#[tokio::test]
async fn test_stale_year_response_is_discarded() {
    let store = MockStore::with_schedule(week());
    let mut state = ScheduleState::default();

    let slow = state.select(year(3));
    let fast = state.select(year(2));
    let fast_result = ScheduleState::fetch(&store, &fast).await;
    state.resolve(fast, fast_result);
    let slow_result = ScheduleState::fetch(&store, &slow).await;
    assert!(!state.resolve(slow, slow_result));

    assert_eq!(state.selected(), year(2));
    assert!(state.entries().iter().all(|e| e.year == year(2)));
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_entries() {
    let store = MockStore::with_schedule(week());
    let mut state = ScheduleState::default();
    load(&mut state, &store, 3).await;
    assert_eq!(state.entries().len(), 2);

    store.set_failing(true);
    load(&mut state, &store, 1).await;
    assert_eq!(state.entries().len(), 2);
    assert_eq!(state.selected(), year(1));
}

#[test]
fn test_no_query_without_session() {
    let mut state = ScheduleState::default();
    assert!(state.request(&SessionState::signed_out(), year(2)).is_none());
    assert!(state.request(&SessionState::default(), year(2)).is_none());
    let ticket = state.request(&SessionState::signed_in(user()), year(2)).unwrap();
    assert_eq!(ticket.category, year(2));
}

#[tokio::test]
async fn test_controller_issues_exactly_one_query_per_year_change() {
    let store = Rc::new(MockStore::with_schedule(week()));
    let controller = ScheduleController::new(store.clone());
    let session = SessionState::signed_in(user());
    let mut state = ScheduleState::default();

    for yr in [1, 3, 2, 1] {
        let outcome = controller.select(&mut state, &session, year(yr)).await;
        assert_eq!(outcome, Some(FetchOutcome::Applied));
        assert!(state.entries().iter().all(|e| e.year == year(yr)));
    }
    assert_eq!(*store.schedule_calls.borrow(), vec![year(1), year(3), year(2), year(1)]);

    assert_eq!(controller.select(&mut state, &SessionState::signed_out(), year(2)).await, None);
    assert_eq!(store.schedule_calls.borrow().len(), 4);
}

#[tokio::test]
async fn test_controller_reports_revoked_session() {
    let store = Rc::new(MockStore::with_schedule(week()));
    let controller = ScheduleController::new(store.clone());
    let session = SessionState::signed_in(user());
    let mut state = ScheduleState::default();
    controller.select(&mut state, &session, year(3)).await;

    store.reject_session();
    assert_eq!(controller.select(&mut state, &session, year(1)).await, Some(FetchOutcome::SessionLost));
    assert_eq!(state.entries().len(), 2);
}
