// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use dose_certa_core::{FixedClock, SequenceIdSource, UserId};
use dose_certa_model::{NotificationPreferences, User, UserAccount, UserKind};
use dose_certa_store::{
    FileSessionStore, InMemoryGateway, RecordGateway, SessionStore, StoreErrorCode,
    UserDirectory, SESSION_FILE_NAME,
};

fn user() -> User {
    User {
        id: UserId::new("user-1").expect("id"),
        name: "Maria Silva".to_string(),
        email: "cidadao@teste.com".to_string(),
        kind: UserKind::Citizen,
        phone: None,
        address: None,
        notifications: NotificationPreferences::default(),
    }
}

fn demo_gateway() -> InMemoryGateway {
    let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 10, 10).expect("date"));
    InMemoryGateway::from_file(
        std::path::Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/demo.json")),
        Arc::new(SequenceIdSource::new("s")),
        Arc::new(clock),
    )
    .expect("demo gateway")
}

#[test]
fn file_session_round_trip_and_clear() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path());
    assert_eq!(store.load().expect("empty"), None);

    store.save(&user()).expect("save");
    assert!(dir.path().join(SESSION_FILE_NAME).exists());
    assert_eq!(store.load().expect("load"), Some(user()));

    store.clear().expect("clear");
    store.clear().expect("clear twice");
    assert_eq!(store.load().expect("cleared"), None);
}

#[test]
fn corrupt_session_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(SESSION_FILE_NAME), "{not json").expect("write");
    let err = FileSessionStore::new(dir.path())
        .load()
        .expect_err("corrupt");
    assert_eq!(err.code, StoreErrorCode::Corrupt);
}

#[tokio::test]
async fn directory_lookup_is_case_insensitive_and_insert_rejects_duplicates() {
    let gateway = demo_gateway();
    let found = gateway
        .find_by_email("  CIDADAO@teste.com ")
        .await
        .expect("lookup")
        .expect("user");
    assert_eq!(found.user.kind, UserKind::Citizen);

    let mut duplicate = UserAccount {
        user: user(),
        password: None,
    };
    duplicate.user.name = "Someone Else".to_string();
    let err = gateway.insert(duplicate).await.expect_err("duplicate");
    assert_eq!(err.code, StoreErrorCode::Conflict);

    let kept = gateway
        .find_by_email("cidadao@teste.com")
        .await
        .expect("lookup")
        .expect("user");
    assert_eq!(kept.user.name, "Maria Silva");
    assert!(kept.password.is_some());
}

#[tokio::test]
async fn save_stock_replaces_known_lines_only() {
    let gateway = demo_gateway();
    let mut stock = gateway.fetch_stock().await.expect("stock");
    let mut first = stock.remove(0);
    first.current_stock = 99;
    gateway.save_stock(first.clone()).await.expect("save");
    assert_eq!(gateway.fetch_stock().await.expect("stock")[0].current_stock, 99);

    first.id = dose_certa_core::RecordId::new("stock-missing").expect("id");
    let err = gateway.save_stock(first).await.expect_err("missing");
    assert_eq!(err.code, StoreErrorCode::NotFound);
}
