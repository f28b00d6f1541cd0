mod common;

use common::*;
use ic_core::{
    AuthProvider, GateDecision, LibraryState, Route, ScheduleState, SessionState, SignOutOutcome, gate, sign_out,
};
use ic_types::SignInRequest;

async fn settle(auth: &MockAuth) -> SessionState {
    match auth.current_user().await {
        Ok(Some(user)) => SessionState::signed_in(user),
        _ => SessionState::signed_out(),
    }
}

#[tokio::test]
async fn test_unauthenticated_pages_redirect_without_fetching() {
    let auth = MockAuth::default();
    let store = MockStore::with_documents(vec![document("Algo", 1, 1)]);
    let session = settle(&auth).await;

    assert_eq!(gate(&session), GateDecision::Redirect(Route::Auth));
    assert_eq!(Route::Auth.path(), "/auth");

    let mut library = LibraryState::default();
    let mut schedule = ScheduleState::default();
    assert!(library.request(&session, semester(1)).is_none());
    assert!(schedule.request(&session, year(1)).is_none());
    assert!(store.document_calls.borrow().is_empty());
    assert!(store.schedule_calls.borrow().is_empty());
}

#[tokio::test]
async fn test_sign_out_success_notifies_and_goes_home() {
    let auth = MockAuth::signed_in();
    match sign_out(&auth).await {
        SignOutOutcome::SignedOut { notice, redirect } => {
            assert_eq!(notice.title, "Déconnexion réussie");
            assert_eq!(notice.description, "À bientôt !");
            assert_eq!(redirect, Route::Landing);
        }
        SignOutOutcome::Failed => panic!("sign-out should succeed"),
    }
    assert_eq!(gate(&settle(&auth).await), GateDecision::Redirect(Route::Auth));
}

#[tokio::test]
async fn test_sign_out_failure_keeps_user_signed_in() {
    let auth = MockAuth {
        fail_sign_out: true,
        ..MockAuth::signed_in()
    };
    assert_eq!(sign_out(&auth).await, SignOutOutcome::Failed);
    assert_eq!(gate(&settle(&auth).await), GateDecision::Render);
}

#[tokio::test]
async fn test_sign_out_while_signed_out_is_a_no_op() {
    let auth = MockAuth::default();
    assert_eq!(sign_out(&auth).await, SignOutOutcome::Failed);
    assert_eq!(gate(&settle(&auth).await), GateDecision::Redirect(Route::Auth));
}

#[tokio::test]
async fn test_sign_in_then_pages_render() {
    let mut auth = MockAuth::default();
    auth.passwords.insert("etudiant@ifri.bj".to_string(), "secret".to_string());

    let wrong = SignInRequest {
        email: "etudiant@ifri.bj".to_string(),
        password: "nope".to_string(),
    };
    assert!(auth.sign_in_with_password(&wrong).await.is_err());

    let right = SignInRequest {
        password: "secret".to_string(),
        ..wrong
    };
    let user = auth.sign_in_with_password(&right).await.unwrap();
    assert_eq!(user.email.as_deref(), Some("etudiant@ifri.bj"));
    assert_eq!(gate(&settle(&auth).await), GateDecision::Render);
}
