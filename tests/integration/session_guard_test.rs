//! Session guard scenarios against the file-backed token store.
//!
//! Exercises the guard exactly as the gateway wires it in production:
//! real HS256 tokens, a token store persisted to disk, and a recording
//! notifier standing in for the toast channel.

use std::sync::Arc;

use toptop_session::{
    FileTokenStore, Notifier, RecordingNotifier, RedirectReason, SessionClaims, SessionDecision,
    SessionGuard, Severity, TokenStore, ACCESS_TOKEN,
};

const FAR_FUTURE: i64 = 4102444800; // 2100-01-01

fn mint(email: Option<&str>, role: Option<&str>, exp: Option<i64>) -> String {
    let claims = SessionClaims {
        email: email.map(str::to_string),
        role: role.map(str::to_string),
        exp,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"integration-secret"),
    )
    .expect("token minting failed")
}

struct Fixture {
    guard: SessionGuard,
    store: Arc<FileTokenStore>,
    notifier: Arc<RecordingNotifier>,
    _dir: tempfile::TempDir,
}

fn fixture(token: Option<&str>) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(FileTokenStore::open(dir.path().join("session.json")).expect("store"));
    if let Some(token) = token {
        store.set(ACCESS_TOKEN, token);
    }
    let notifier = Arc::new(RecordingNotifier::new());
    Fixture {
        guard: SessionGuard::new(store.clone(), notifier.clone()),
        store,
        notifier,
        _dir: dir,
    }
}

#[test]
fn empty_store_redirects_silently() {
    let f = fixture(None);

    let decision = f.guard.evaluate("/");
    assert_eq!(
        decision,
        SessionDecision::RedirectToLogin {
            reason: RedirectReason::NoToken,
            original_path: "/".to_string(),
        }
    );
    assert!(f.notifier.notices().is_empty());
}

#[test]
fn garbage_token_is_removed_from_disk() {
    let f = fixture(Some("not-a-valid-token"));

    let decision = f.guard.evaluate("/products");
    assert_eq!(
        decision,
        SessionDecision::RedirectToLogin {
            reason: RedirectReason::InvalidToken,
            original_path: "/products".to_string(),
        }
    );
    assert_eq!(f.store.get(ACCESS_TOKEN), None);
}

#[test]
fn expired_admin_token_redirects_with_one_notice() {
    let token = mint(Some("a@b.com"), Some("admin"), Some(1));
    let f = fixture(Some(&token));

    let decision = f.guard.evaluate("/matches");
    assert!(matches!(
        decision,
        SessionDecision::RedirectToLogin {
            reason: RedirectReason::Expired,
            ..
        }
    ));
    assert_eq!(f.store.get(ACCESS_TOKEN), None);

    let notices = f.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0],
        (
            Severity::Error,
            "session expired, please log in again".to_string()
        )
    );
}

#[test]
fn player_token_survives_the_refusal() {
    let token = mint(Some("a@b.com"), Some("player"), Some(FAR_FUTURE));
    let f = fixture(Some(&token));

    let decision = f.guard.evaluate("/users");
    assert!(matches!(
        decision,
        SessionDecision::RedirectToLogin {
            reason: RedirectReason::UnauthorizedRole,
            ..
        }
    ));
    assert_eq!(f.store.get(ACCESS_TOKEN), Some(token));
    assert_eq!(f.notifier.notices().len(), 1);
}

#[test]
fn admin_token_is_allowed_without_side_effects() {
    let token = mint(Some("a@b.com"), Some("admin"), Some(FAR_FUTURE));
    let f = fixture(Some(&token));

    assert_eq!(f.guard.evaluate("/payments"), SessionDecision::Allowed);
    assert_eq!(f.store.get(ACCESS_TOKEN), Some(token));
    assert!(f.notifier.notices().is_empty());
}

#[test]
fn decision_is_stable_across_repeated_evaluations() {
    let token = mint(Some("a@b.com"), Some("admin"), Some(FAR_FUTURE));
    let f = fixture(Some(&token));

    let first = f.guard.evaluate("/overview");
    let second = f.guard.evaluate("/overview");
    assert_eq!(first, second);
    assert_eq!(first, SessionDecision::Allowed);
}

#[test]
fn session_survives_guard_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    let token = mint(Some("a@b.com"), Some("admin"), Some(FAR_FUTURE));

    {
        let store = Arc::new(FileTokenStore::open(&path).expect("store"));
        store.set(ACCESS_TOKEN, &token);
    }

    // A fresh process opens the same file and the session is still valid.
    let store = Arc::new(FileTokenStore::open(&path).expect("store"));
    let guard = SessionGuard::new(store, Arc::new(RecordingNotifier::new()));
    assert_eq!(guard.evaluate("/overview"), SessionDecision::Allowed);
}

/// The notifier trait object is usable behind Arc from multiple owners.
#[test]
fn notifier_is_shareable() {
    let notifier: Arc<dyn Notifier> = Arc::new(RecordingNotifier::new());
    notifier.notify(Severity::Info, "hello");
}
