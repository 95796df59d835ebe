use portaria_core::store::Store;
use portaria_core::{
    seed_defaults, AuthOutcome, FixedClock, MemoryStore, SessionManager, Theme,
    ThemePreferences, UserRepository, SESSION_KEY,
};
use chrono::{TimeZone, Utc};

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 25, 10, 0, 0).unwrap());
    seed_defaults(&store, &clock).unwrap();
    store
}

#[test]
fn authenticate_persists_full_user_snapshot() {
    let store = seeded_store();
    let sessions = SessionManager::new(&store);

    let outcome = sessions.authenticate("apt101", "123456").unwrap();
    let AuthOutcome::Authenticated(user) = outcome else {
        panic!("expected authentication to succeed");
    };
    assert_eq!(user.id, "res-001");

    // The session record is the full snapshot, password included.
    let raw = store.read(SESSION_KEY).unwrap().unwrap();
    assert!(raw.contains("\"password\":\"123456\""));

    let current = sessions.current_user().unwrap().unwrap();
    assert_eq!(current, user);
}

#[test]
fn wrong_password_and_unknown_login_are_rejected_cleanly() {
    let store = seeded_store();
    let sessions = SessionManager::new(&store);

    assert_eq!(
        sessions.authenticate("apt101", "wrong").unwrap(),
        AuthOutcome::Rejected
    );
    assert_eq!(
        sessions.authenticate("nobody", "123456").unwrap(),
        AuthOutcome::Rejected
    );
    // Login matching is case-sensitive.
    assert_eq!(
        sessions.authenticate("APT101", "123456").unwrap(),
        AuthOutcome::Rejected
    );

    // No partial session state was created.
    assert!(sessions.current_user().unwrap().is_none());
}

#[test]
fn session_is_not_revalidated_after_password_change() {
    let store = seeded_store();
    let sessions = SessionManager::new(&store);
    sessions.authenticate("apt101", "123456").unwrap();

    // Change the password behind the live session's back.
    let users = UserRepository::new(&store);
    let mut all = users.get_all().unwrap();
    all.iter_mut()
        .find(|user| user.login == "apt101")
        .unwrap()
        .password = "novasenha".to_string();
    users.save_all(&all).unwrap();

    // The stale snapshot stays valid until explicit logout.
    let current = sessions.current_user().unwrap().unwrap();
    assert_eq!(current.password, "123456");

    sessions.end_session().unwrap();
    assert!(sessions.current_user().unwrap().is_none());
}

#[test]
fn malformed_session_record_reads_as_no_session() {
    let store = seeded_store();
    store.write(SESSION_KEY, "{not-json").unwrap();

    let sessions = SessionManager::new(&store);
    assert!(sessions.current_user().unwrap().is_none());
}

#[test]
fn theme_preference_follows_the_session_user() {
    let store = seeded_store();
    let sessions = SessionManager::new(&store);
    let prefs = ThemePreferences::new(&store);

    let AuthOutcome::Authenticated(resident) =
        sessions.authenticate("apt101", "123456").unwrap()
    else {
        panic!("resident login should succeed");
    };
    prefs.set_theme(&resident.id, Theme::Sunset).unwrap();
    assert_eq!(prefs.theme_for(&resident.id).unwrap(), Theme::Sunset);

    sessions.end_session().unwrap();
    let AuthOutcome::Authenticated(admin) =
        sessions.authenticate("admin", "admin123").unwrap()
    else {
        panic!("admin login should succeed");
    };

    // The admin never chose a theme: the default applies, never the
    // previous user's choice.
    assert_eq!(prefs.theme_for(&admin.id).unwrap(), Theme::default());
}
