use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::net::latency::Immediate;
use crate::util::credentials::{TOKEN_KEY, USER_KEY};
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

/// Suspends once so a concurrent future can observe the in-flight state.
struct YieldOnce;

#[async_trait(?Send)]
impl Latency for YieldOnce {
    async fn settle(&self) {
        tokio::task::yield_now().await;
    }
}

/// Holds the first call until `release`; later calls settle immediately.
#[derive(Default)]
struct FirstCallGated {
    calls: AtomicUsize,
    gate: Notify,
}

impl FirstCallGated {
    fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait(?Send)]
impl Latency for FirstCallGated {
    async fn settle(&self) {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
    }
}

fn session_over(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Arc::new(storage.clone()), Arc::new(Immediate))
}

fn stored_user(storage: &MemoryStorage) -> Option<User> {
    storage.get(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}

fn make_user() -> User {
    User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "a".to_owned(),
        avatar: Some(avatar_url("a@b.com")),
    }
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn display_name_is_local_part() {
    assert_eq!(display_name_from_email("jane.doe@example.com"), "jane.doe");
}

#[test]
fn display_name_splits_on_first_at() {
    assert_eq!(display_name_from_email("a@b@c"), "a");
}

#[test]
fn display_name_without_at_is_whole_email() {
    assert_eq!(display_name_from_email("operator"), "operator");
}

#[test]
fn avatar_url_is_seeded_by_email() {
    assert_eq!(avatar_url("a@b.com"), "https://api.dicebear.com/7.x/avataaars/svg?seed=a@b.com");
    assert_eq!(avatar_url("a@b.com"), avatar_url("a@b.com"));
}

#[test]
fn generate_token_is_unique_and_prefixed() {
    let first = generate_token();
    let second = generate_token();
    assert!(first.starts_with("session-"));
    assert_ne!(first, second);
}

#[test]
fn validate_sign_in_requires_email() {
    assert_eq!(validate_sign_in("", "abcdef"), Err(CredentialError::MissingEmail));
}

#[test]
fn validate_sign_in_rejects_every_short_password() {
    for len in 0..MIN_PASSWORD_LEN {
        let password = "x".repeat(len);
        assert_eq!(
            validate_sign_in("a@b.com", &password),
            Err(CredentialError::PasswordTooShort),
            "length {len} should be rejected"
        );
    }
    assert_eq!(validate_sign_in("a@b.com", "abcdef"), Ok(()));
}

#[test]
fn validate_sign_in_counts_characters_not_bytes() {
    assert_eq!(validate_sign_in("a@b.com", "ééééé"), Err(CredentialError::PasswordTooShort));
    assert_eq!(validate_sign_in("a@b.com", "éééééé"), Ok(()));
}

#[test]
fn validate_sign_up_requires_name() {
    assert_eq!(validate_sign_up("a@b.com", "abcdef", ""), Err(CredentialError::MissingName));
    assert_eq!(validate_sign_up("a@b.com", "abcdef", "Alice"), Ok(()));
}

#[test]
fn credential_error_messages_mention_minimum() {
    assert_eq!(CredentialError::PasswordTooShort.to_string(), "password must be at least 6 characters");
}

// =============================================================
// sign_in
// =============================================================

#[tokio::test]
async fn sign_in_with_valid_credentials_creates_session() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);

    assert!(session.sign_in("a@b.com", "abcdef").await);

    assert_eq!(session.user(), Some(make_user()));
    assert!(session.is_authenticated());
    let token = storage.get(TOKEN_KEY).unwrap_or_default();
    assert!(!token.is_empty());
    assert_eq!(stored_user(&storage), Some(make_user()));
}

#[tokio::test]
async fn sign_in_with_short_password_fails_without_side_effects() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);

    assert!(!session.sign_in("x@y.com", "abc").await);

    assert_eq!(session.user(), None);
    assert!(storage.entries().is_empty());
}

#[tokio::test]
async fn sign_in_with_empty_email_fails() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(!session.sign_in("", "abcdef").await);
    assert!(storage.entries().is_empty());
}

#[tokio::test]
async fn failed_sign_in_keeps_existing_session() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(session.sign_in("a@b.com", "abcdef").await);
    let before = storage.entries();

    assert!(!session.sign_in("x@y.com", "abc").await);

    assert_eq!(session.user(), Some(make_user()));
    assert_eq!(storage.entries(), before);
}

#[tokio::test]
async fn sign_in_issues_new_token_each_time() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(session.sign_in("a@b.com", "abcdef").await);
    let first = storage.get(TOKEN_KEY);
    assert!(session.sign_in("a@b.com", "abcdef").await);
    assert_ne!(storage.get(TOKEN_KEY), first);
}

#[tokio::test]
async fn sign_in_fails_when_storage_rejects_write() {
    let storage = MemoryStorage::rejecting_writes_to(USER_KEY);
    let session = session_over(&storage);

    assert!(!session.sign_in("a@b.com", "abcdef").await);

    assert_eq!(session.user(), None);
    assert!(storage.entries().is_empty());
    assert_eq!(session.snapshot().in_flight, 0);
}

#[tokio::test]
async fn sign_in_is_loading_until_settled() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(Arc::new(storage.clone()), Arc::new(YieldOnce));
    session.restore();
    assert!(!session.is_loading());

    let (ok, loading_mid_call) = tokio::join!(session.sign_in("a@b.com", "abcdef"), async {
        session.is_loading()
    });

    assert!(ok);
    assert!(loading_mid_call);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn concurrent_sign_ins_last_settled_wins() {
    let storage = MemoryStorage::new();
    let latency = Arc::new(FirstCallGated::default());
    let session = SessionStore::new(Arc::new(storage.clone()), latency.clone());
    session.restore();

    let first = session.sign_in("first@example.com", "abcdef");
    tokio::pin!(first);
    // Poll the first call once so it goes in flight and parks on the gate.
    tokio::select! {
        biased;
        _ = &mut first => panic!("gated sign-in settled early"),
        () = std::future::ready(()) => {}
    }
    assert_eq!(session.snapshot().in_flight, 1);

    assert!(session.sign_in("second@example.com", "abcdef").await);
    assert_eq!(session.user().unwrap().email, "second@example.com");
    assert!(session.is_loading());

    latency.release();
    assert!(first.await);

    let user = session.user().unwrap();
    assert_eq!(user.email, "first@example.com");
    assert_eq!(stored_user(&storage), Some(user));
    assert_eq!(session.snapshot().in_flight, 0);
}

// =============================================================
// sign_up
// =============================================================

#[tokio::test]
async fn sign_up_uses_name_verbatim() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);

    assert!(session.sign_up("a@b.com", "abcdef", "Alice Admin").await);

    let user = session.user().unwrap();
    assert_eq!(user.name, "Alice Admin");
    assert_eq!(user.id, MOCK_USER_ID);
    assert_eq!(user.avatar, Some(avatar_url("a@b.com")));
    assert_eq!(stored_user(&storage), Some(user));
}

#[tokio::test]
async fn sign_up_without_name_fails() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(!session.sign_up("a@b.com", "abcdef", "").await);
    assert_eq!(session.user(), None);
    assert!(storage.entries().is_empty());
}

#[tokio::test]
async fn sign_up_with_short_password_fails() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(!session.sign_up("a@b.com", "abc", "Alice").await);
    assert!(storage.entries().is_empty());
}

// =============================================================
// sign_out
// =============================================================

#[tokio::test]
async fn sign_out_clears_session_and_storage() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(session.sign_in("a@b.com", "abcdef").await);

    session.sign_out();

    assert_eq!(session.user(), None);
    assert!(storage.entries().is_empty());
}

#[tokio::test]
async fn sign_out_twice_is_noop() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(session.sign_in("a@b.com", "abcdef").await);

    session.sign_out();
    let after_first = session.snapshot();
    session.sign_out();

    assert_eq!(session.snapshot(), after_first);
    assert!(storage.entries().is_empty());
}

#[test]
fn sign_out_when_signed_out_is_noop() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    session.sign_out();
    assert_eq!(session.user(), None);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_empty_store_is_ready_and_signed_out() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    assert!(session.is_loading());

    session.restore();

    assert_eq!(session.snapshot().phase, AuthPhase::Ready);
    assert!(!session.is_loading());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn restore_round_trips_stored_session() {
    let storage = MemoryStorage::new();
    assert!(session_over(&storage).sign_in("a@b.com", "abcdef").await);

    let restarted = session_over(&storage);
    restarted.restore();

    assert_eq!(restarted.user(), Some(make_user()));
    assert!(restarted.is_authenticated());
}

#[test]
fn restore_purges_corrupt_user_record() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "session-abc").unwrap();
    storage.set(USER_KEY, "{\"id\":").unwrap();
    let session = session_over(&storage);

    session.restore();

    assert_eq!(session.user(), None);
    assert!(storage.entries().is_empty());
    assert_eq!(session.snapshot().phase, AuthPhase::Ready);
}

#[test]
fn restore_purges_orphaned_token() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "session-abc").unwrap();
    let session = session_over(&storage);

    session.restore();

    assert_eq!(session.user(), None);
    assert!(storage.entries().is_empty());
}

#[test]
fn restore_runs_only_once() {
    let storage = MemoryStorage::new();
    let session = session_over(&storage);
    session.restore();

    write_credentials(&storage, "session-late", &make_user()).unwrap();
    session.restore();

    assert_eq!(session.user(), None);
}

#[test]
fn state_signal_reflects_restored_session() {
    let storage = MemoryStorage::new();
    write_credentials(&storage, "session-abc", &make_user()).unwrap();
    let session = session_over(&storage);

    session.restore();

    let state = session.state().get_untracked();
    assert!(state.is_ready());
    assert_eq!(state.user, Some(make_user()));
}
