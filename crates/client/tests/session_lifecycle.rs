//! Session lifecycle behavior: startup validation over every persisted
//! state, login, logout, and forced invalidation.

mod support;

use shelf::{SessionState, SessionStore, SessionStoreFile};
use support::{FakeCatalog, make_token, session_fixture};

#[test]
fn validating_an_empty_store_leaves_no_trace() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);

	let state = session.validate_session().unwrap();
	assert_eq!(*state, SessionState::Unauthenticated);
	assert!(!token.is_present());
	// No side effects: nothing was written either.
	assert!(!dir.path().join("session.json").exists());
}

#[test]
fn complete_persisted_state_with_valid_token_restores_the_session() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	let store = SessionStore::new(dir.path().join("session.json"));
	store
		.save(&SessionStoreFile {
			token: Some(make_token("a1", "admin", true)),
			admin_id: Some("a1".into()),
			username: Some("admin".into()),
			superadmin: Some(true),
			..Default::default()
		})
		.unwrap();

	session.validate_session().unwrap();

	let restored = session.session().expect("session should be authenticated");
	assert_eq!(restored.admin_id, "a1");
	assert_eq!(restored.username, "admin");
	assert!(restored.superadmin);
	assert!(token.is_present());
}

#[test]
fn identity_comes_from_the_token_not_the_cached_copies() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, _token) = session_fixture(&dir);
	let store = SessionStore::new(dir.path().join("session.json"));
	// Cached copies are stale relative to the token's claims.
	store
		.save(&SessionStoreFile {
			token: Some(make_token("a1", "admin", false)),
			admin_id: Some("someone-else".into()),
			username: Some("stale-name".into()),
			superadmin: Some(true),
			..Default::default()
		})
		.unwrap();

	session.validate_session().unwrap();

	let restored = session.session().unwrap();
	assert_eq!(restored.username, "admin");
	assert_eq!(restored.admin_id, "a1");
	assert!(!restored.superadmin);
}

#[test]
fn validation_always_terminates_in_exactly_one_settled_state() {
	// Every combination of the four persisted fields being present or
	// absent must end Authenticated or Unauthenticated - Authenticated
	// only when all four are present and the token decodes.
	for mask in 0u32..16 {
		let dir = tempfile::tempdir().unwrap();
		let (mut session, token) = session_fixture(&dir);
		let store = SessionStore::new(dir.path().join("session.json"));

		let file = SessionStoreFile {
			token: (mask & 1 != 0).then(|| make_token("a1", "admin", false)),
			admin_id: (mask & 2 != 0).then(|| "a1".into()),
			username: (mask & 4 != 0).then(|| "admin".into()),
			superadmin: (mask & 8 != 0).then_some(false),
			..Default::default()
		};
		if !file.is_empty() {
			store.save(&file).unwrap();
		}

		let state = session.validate_session().unwrap().clone();
		match state {
			SessionState::Authenticated(_) => {
				assert_eq!(mask, 15, "only the all-present combination may authenticate");
				assert!(token.is_present());
			}
			SessionState::Unauthenticated => {
				assert!(!token.is_present());
			}
			SessionState::Unvalidated => panic!("validation left state unsettled for mask {mask}"),
		}
	}
}

#[test]
fn token_present_but_username_missing_clears_everything() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	let store = SessionStore::new(dir.path().join("session.json"));
	// The token itself is perfectly valid; partial state is still invalid.
	store
		.save(&SessionStoreFile {
			token: Some(make_token("a1", "admin", false)),
			admin_id: Some("a1".into()),
			superadmin: Some(false),
			..Default::default()
		})
		.unwrap();

	let state = session.validate_session().unwrap();
	assert_eq!(*state, SessionState::Unauthenticated);
	assert!(!token.is_present());
	assert!(store.load().unwrap().is_empty());
}

#[test]
fn undecodable_persisted_token_clears_everything() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	let store = SessionStore::new(dir.path().join("session.json"));
	store
		.save(&SessionStoreFile {
			token: Some("only.two-segments".into()),
			admin_id: Some("a1".into()),
			username: Some("admin".into()),
			superadmin: Some(false),
			..Default::default()
		})
		.unwrap();

	let state = session.validate_session().unwrap();
	assert_eq!(*state, SessionState::Unauthenticated);
	assert!(!token.is_present());
	assert!(store.load().unwrap().is_empty());
}

#[test]
fn corrupt_store_file_clears_everything() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	std::fs::write(dir.path().join("session.json"), "{definitely not json").unwrap();

	let state = session.validate_session().unwrap();
	assert_eq!(*state, SessionState::Unauthenticated);
	assert!(!token.is_present());
	assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn login_persists_token_and_identity_from_claims() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	let api = FakeCatalog::new();
	api.accept_login(&make_token("a7", "editor", false));

	let logged_in = session.login(&api, "editor", "pw").await.unwrap();
	assert_eq!(logged_in.admin_id, "a7");
	assert_eq!(logged_in.username, "editor");
	assert!(!logged_in.superadmin);
	assert!(token.is_present());
	assert!(session.state().is_authenticated());

	let persisted = SessionStore::new(dir.path().join("session.json")).load().unwrap();
	assert!(persisted.is_complete());
	assert_eq!(persisted.username.as_deref(), Some("editor"));
}

#[tokio::test]
async fn rejected_login_changes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	session.validate_session().unwrap();
	let api = FakeCatalog::new();

	let err = session.login(&api, "admin", "wrong").await.unwrap_err();
	assert!(err.is_unauthorized());
	assert!(!token.is_present());
	assert_eq!(*session.state(), SessionState::Unauthenticated);
	assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn undecodable_login_token_is_an_error_and_persists_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	let api = FakeCatalog::new();
	api.accept_login("garbage-token-without-segments");

	let err = session.login(&api, "admin", "pw").await.unwrap_err();
	assert!(matches!(err, shelf::ApiError::TokenDecode(_)));
	assert!(!token.is_present());
	assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn logout_and_forced_invalidation_are_idempotent() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	let api = FakeCatalog::new();
	api.accept_login(&make_token("a1", "admin", true));
	session.login(&api, "admin", "pw").await.unwrap();

	session.logout().unwrap();
	let after_first = SessionStore::new(dir.path().join("session.json")).load().unwrap();
	assert!(after_first.is_empty());

	// Repeating either clearing operation any number of times leaves the
	// identical cleared state.
	session.logout().unwrap();
	session.on_unauthorized().unwrap();
	session.on_unauthorized().unwrap();

	assert_eq!(*session.state(), SessionState::Unauthenticated);
	assert!(!token.is_present());
	assert!(SessionStore::new(dir.path().join("session.json")).load().unwrap().is_empty());
}

#[tokio::test]
async fn forced_invalidation_clears_a_live_session() {
	let dir = tempfile::tempdir().unwrap();
	let (mut session, token) = session_fixture(&dir);
	let api = FakeCatalog::new();
	api.accept_login(&make_token("a1", "admin", true));
	session.login(&api, "admin", "pw").await.unwrap();
	assert!(token.is_present());

	// A 401 observed on any request - whoever issued it - routes here.
	session.on_unauthorized().unwrap();

	assert_eq!(*session.state(), SessionState::Unauthenticated);
	assert!(!token.is_present());
}
