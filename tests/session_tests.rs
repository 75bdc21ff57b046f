mod common;

use std::sync::Arc;

use common::make_entry;
use futures::future::join_all;
use rewards_engine::account_link::BANK_ACCOUNTS;
use rewards_engine::error::EngineError;
use rewards_engine::identity::{AuthSession, UserId};
use rewards_engine::models::BankLinkFields;
use rewards_engine::session::Session;
use rewards_engine::storage::InMemoryStore;
use rust_decimal_macros::dec;

fn make_session() -> (Session<AuthSession, InMemoryStore>, Arc<AuthSession>, Arc<InMemoryStore>) {
    let auth = Arc::new(AuthSession::new());
    let store = Arc::new(InMemoryStore::new());
    let session = Session::new(Arc::clone(&auth), Arc::clone(&store));
    (session, auth, store)
}

fn make_fields() -> BankLinkFields {
    BankLinkFields {
        full_name: "Ada Lovelace".to_string(),
        bank_name: "First National".to_string(),
        account_number: "12345678".to_string(),
        routing_number: "021000021".to_string(),
    }
}

/// Submissions from many tasks all land in the one session ledger
#[tokio::test]
async fn test_concurrent_submissions() {
    let (session, _auth, _store) = make_session();

    let mut handles = vec![];

    for i in 0..100 {
        let session = session.clone_handle();

        handles.push(tokio::spawn(async move {
            session
                .submit_purchase(make_entry("2025-01-01", &format!("item{}", i), "10.00"))
                .await
                .unwrap()
        }));
    }

    for result in join_all(handles).await {
        let tx = result.unwrap();
        assert_eq!(tx.points, 1);
        assert_eq!(tx.credit, dec!(0.50));
    }

    let summary = session.summary().await;
    assert_eq!(summary.totals.points, 100);
    assert_eq!(summary.totals.credit, dec!(50.00));
    assert_eq!(summary.progress.percent, dec!(10));
    assert_eq!(summary.progress.remaining, 900);
}

#[tokio::test]
async fn test_summary_reads_do_not_block_each_other() {
    let (session, _auth, _store) = make_session();

    session
        .submit_purchase(make_entry("2025-01-01", "book", "100.00"))
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let session = session.clone_handle();
        handles.push(tokio::spawn(async move { session.summary().await }));
    }

    for result in join_all(handles).await {
        let summary = result.unwrap();
        assert_eq!(summary.totals.points, 10);
    }
}

#[tokio::test]
async fn test_tier_progress_scenario() {
    let (session, _auth, _store) = make_session();

    session
        .submit_purchase(make_entry("2025-01-01", "tuition", "5500"))
        .await
        .unwrap();

    let summary = session.summary().await;
    assert_eq!(summary.totals.points, 550);
    assert_eq!(summary.progress.percent, dec!(55));
    assert_eq!(summary.progress.remaining, 450);
    assert_eq!(summary.progress.dollars_to_unlock(), dec!(4500));
}

#[tokio::test]
async fn test_link_bank_requires_signed_in_user() {
    let (session, _auth, store) = make_session();

    let err = session.link_bank(&make_fields()).await.unwrap_err();

    assert!(matches!(err, EngineError::NotAuthenticated));
    // Precondition failure: no write was issued
    assert_eq!(store.collection_len(BANK_ACCOUNTS), 0);
}

#[tokio::test]
async fn test_link_bank_signed_in() {
    let (session, auth, store) = make_session();
    auth.sign_in(UserId::new("u1"));

    let record = session.link_bank(&make_fields()).await.unwrap();

    assert_eq!(record.user_id, UserId::new("u1"));
    assert_eq!(store.collection_len(BANK_ACCOUNTS), 1);
}

#[tokio::test]
async fn test_link_bank_after_sign_out() {
    let (session, auth, store) = make_session();

    auth.sign_in(UserId::new("u1"));
    session.link_bank(&make_fields()).await.unwrap();

    auth.sign_out();
    let err = session.link_bank(&make_fields()).await.unwrap_err();

    assert!(matches!(err, EngineError::NotAuthenticated));
    assert_eq!(store.collection_len(BANK_ACCOUNTS), 1);
}

#[tokio::test]
async fn test_auth_transitions_observable() {
    let auth = AuthSession::new();
    let mut rx = auth.subscribe();

    assert!(rx.borrow().is_none());

    auth.sign_in(UserId::new("u1"));
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), Some(UserId::new("u1")));

    auth.sign_out();
    rx.changed().await.unwrap();
    assert!(rx.borrow().is_none());
}
