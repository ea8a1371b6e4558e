//! End-to-end shell flows: login, guarded navigation, menu activation, and
//! observer notification, driven the way a frontend would drive them.

use std::sync::Arc;

use atrium_app::{
    Decision, HeadlessBridge, Intent, MenuConfig, MenuEntry, ShellConfig, ShellCore,
    ShellObserver, StateSnapshot,
};
use atrium_core::{Role, RouteTable, Session};
use parking_lot::Mutex;

#[derive(Default)]
struct Recorder {
    snapshots: Mutex<Vec<StateSnapshot>>,
}

impl ShellObserver for Recorder {
    fn state_changed(&self, snapshot: &StateSnapshot) {
        self.snapshots.lock().push(snapshot.clone());
    }
}

fn standard_shell(width: u32) -> (ShellCore, HeadlessBridge, Arc<Recorder>) {
    let bridge = HeadlessBridge::new(width);
    let mut core = ShellCore::standard(Box::new(bridge.clone()));
    let recorder = Arc::new(Recorder::default());
    core.observe(recorder.clone());
    (core, bridge, recorder)
}

#[test]
fn anonymous_user_is_funneled_to_landing() {
    let (mut core, bridge, _rec) = standard_shell(1280);

    for name in ["dashboard", "wallets", "superadmin"] {
        let decision = core.navigate(name).expect("route exists");
        assert_eq!(
            decision,
            Decision::RedirectTo("landing".into()),
            "{name} should redirect without a session"
        );
        assert_eq!(core.current_route(), Some("landing"));
    }
    // Landing carries no title, so none of those transitions published one.
    assert_eq!(bridge.title_publish_count(), 0);
}

#[test]
fn admin_login_unlocks_admin_routes_and_breadcrumbs() {
    let (mut core, bridge, rec) = standard_shell(1280);

    core.dispatch(Intent::SessionReplaced {
        session: Some(Session::with_roles([Role::Admin]).organizations(3)),
    })
    .expect("dispatch");

    let decision = core
        .dispatch(Intent::Navigate {
            route: "dashboard".into(),
        })
        .expect("dispatch")
        .expect("decision");
    assert!(decision.is_proceed());
    assert_eq!(bridge.title().as_deref(), Some("User Activity"));
    assert_eq!(bridge.title_publish_count(), 1);

    let last = rec.snapshots.lock().last().cloned().expect("snapshot");
    assert_eq!(last.current_route.as_deref(), Some("dashboard"));
    assert_eq!(last.active_path, ["Dashboard"]);
    assert!(last.is_authenticated);
    assert_eq!(last.organization_count, 3);
    assert!(!last.is_super_admin);

    // But the super-admin area stays closed: the gates are independent.
    let decision = core.navigate("superadmin").expect("route exists");
    assert!(!decision.is_proceed());
}

#[test]
fn titles_publish_once_per_successful_transition() {
    let (mut core, bridge, _rec) = standard_shell(1280);

    core.replace_session(Some(Session::with_roles([Role::SuperAdmin]).organizations(1)));

    core.navigate("dashboard").expect("route exists");
    core.navigate("wallets").expect("route exists");
    core.navigate("superadmin").expect("route exists");

    assert_eq!(bridge.title_publish_count(), 3);
    assert_eq!(bridge.title().as_deref(), Some("Super Admin"));
}

#[test]
fn observers_see_each_mutation_in_order() {
    let (mut core, _bridge, rec) = standard_shell(640);

    core.dispatch(Intent::SetLoading { loading: true })
        .expect("dispatch");
    core.dispatch(Intent::SetLoading { loading: true })
        .expect("dispatch");
    core.dispatch(Intent::SetLoading { loading: false })
        .expect("dispatch");
    core.dispatch(Intent::ToggleSidebar).expect("dispatch");

    let depths: Vec<u32> = rec
        .snapshots
        .lock()
        .iter()
        .map(|s| s.layout.loading_depth)
        .collect();
    assert_eq!(depths, [1, 2, 1, 1]);

    let last = rec.snapshots.lock().last().cloned().expect("snapshot");
    assert!(!last.layout.sidebar_open);
    assert!(last.layout.overlay_visible); // 640 < 991
}

#[test]
fn search_flows_through_dispatch_into_snapshots() {
    let (mut core, _bridge, rec) = standard_shell(1280);

    core.dispatch(Intent::Search {
        query: "wallet".into(),
    })
    .expect("dispatch");

    let last = rec.snapshots.lock().last().cloned().expect("snapshot");
    let titles: Vec<&str> = last
        .search_results
        .iter()
        .map(|h| h.title.as_str())
        .collect();
    assert_eq!(titles, ["Wallets", "Approved Wallets"]);

    // Nested hits inherit the top-level ancestor's icon.
    let approved = &last.search_results[1];
    assert_eq!(approved.icon.as_deref(), Some("briefcase"));
}

#[test]
fn custom_shell_with_missing_fallback_degrades_safely() {
    let bridge = HeadlessBridge::new(1280);
    let routes = RouteTable::new([atrium_core::RouteDescriptor::new("/secure", "secure")
        .access(atrium_core::AccessLevel::SuperAdmin)
        .title("Secure")])
    .expect("table");
    let menu = MenuConfig {
        entries: vec![MenuEntry::link("Secure").path("/secure")],
    };
    let mut core = ShellCore::new(ShellConfig::default(), routes, &menu, Box::new(bridge.clone()));

    // The fallback "landing" is not in this table; the denial still
    // resolves without error and publishes nothing.
    let decision = core.navigate("secure").expect("route exists");
    assert_eq!(decision, Decision::RedirectTo("landing".into()));
    assert_eq!(core.current_route(), Some("landing"));
    assert_eq!(bridge.title_publish_count(), 0);
}
