//! Integration tests for the session lifecycle and guard interplay

use std::sync::Arc;
use std::time::Duration;

use pharmdash_permissions::Role;
use pharmdash_sessions::{
    GuardOutcome, GuardState, InMemoryDirectory, RouteGuard, SessionManager, SessionStore,
};
use pharmdash_storage::BlobStore;
use tempfile::TempDir;

fn manager_over(dir: &TempDir) -> SessionManager {
    let blobs = BlobStore::new(dir.path().to_path_buf());
    blobs.initialize().expect("Failed to initialize storage");
    SessionManager::new(
        SessionStore::new(blobs),
        Arc::new(InMemoryDirectory::new(Duration::ZERO)),
    )
}

#[tokio::test]
async fn guard_never_authorizes_before_hydration() {
    let dir = TempDir::new().unwrap();
    let manager = manager_over(&dir);

    // Sign in so the session is authenticated — the guard must still wait
    // for hydration before looking at that flag.
    manager
        .authenticate("admin@nordmed.test", "admin-demo")
        .await
        .expect("authenticate");

    let mut guard = RouteGuard::new();
    guard.mount();

    let before = guard.resolve(&manager.snapshot());
    assert_eq!(before, GuardState::Hydrating);
    assert_eq!(guard.outcome(), GuardOutcome::Loading);

    manager.mark_hydrated(true);
    let after = guard.resolve(&manager.snapshot());
    assert_eq!(after, GuardState::Authorized);
    assert_eq!(guard.outcome(), GuardOutcome::RenderChildren);
}

#[tokio::test]
async fn restart_restores_session_then_guard_authorizes() {
    let dir = TempDir::new().unwrap();

    {
        let manager = manager_over(&dir);
        manager
            .authenticate("qa.manager@nordmed.test", "qa-mgr-demo")
            .await
            .expect("authenticate");
    }

    // Simulated restart over the same storage directory.
    let manager = manager_over(&dir);
    let mut guard = RouteGuard::new();
    guard.mount();
    assert_eq!(guard.resolve(&manager.snapshot()), GuardState::Hydrating);

    let restored = manager.hydrate(Duration::from_millis(50)).await;
    assert!(restored);

    assert_eq!(guard.resolve(&manager.snapshot()), GuardState::Authorized);
    let view = manager.permission_view().expect("view after restore");
    assert_eq!(view.role, Role::QaManager);
    assert!(view.can_release_batch);
}

#[tokio::test]
async fn restart_after_logout_redirects() {
    let dir = TempDir::new().unwrap();

    {
        let manager = manager_over(&dir);
        manager
            .authenticate("sales@nordmed.test", "sales-demo")
            .await
            .expect("authenticate");
        manager.end_session().await.expect("end_session");
    }

    let manager = manager_over(&dir);
    let restored = manager.hydrate(Duration::from_millis(50)).await;
    assert!(!restored);

    let mut guard = RouteGuard::new();
    guard.mount();
    assert_eq!(guard.resolve(&manager.snapshot()), GuardState::Redirecting);
    assert_eq!(guard.outcome(), GuardOutcome::RedirectToLogin);
}

#[tokio::test]
async fn silent_storage_still_reaches_a_decision() {
    let dir = TempDir::new().unwrap();
    let manager = manager_over(&dir);

    // Restore that never answers: the bounded hydrate must still complete
    // and the guard must settle on a redirect instead of spinning.
    manager
        .hydrate_from(std::future::pending(), Duration::from_millis(20))
        .await;

    let mut guard = RouteGuard::new();
    guard.mount();
    assert_eq!(guard.resolve(&manager.snapshot()), GuardState::Redirecting);
}

#[tokio::test]
async fn permission_view_tracks_sign_in_and_out() {
    let dir = TempDir::new().unwrap();
    let manager = manager_over(&dir);

    assert!(manager.permission_view().is_none());

    manager
        .authenticate("qa.analyst@nordmed.test", "qa-demo")
        .await
        .expect("authenticate");
    let view = manager.permission_view().expect("view");
    assert!(view.can_record_qc_result);
    assert!(!view.can_approve_qc_result);

    manager.end_session().await.expect("end_session");
    assert!(manager.permission_view().is_none());
}
