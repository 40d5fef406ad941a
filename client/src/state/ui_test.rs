use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_dashboard() {
    let state = UiState::default();
    assert_eq!(state.active_tab, DashboardTab::Dashboard);
    assert_eq!(state.notice, None);
}

// =============================================================
// DashboardTab
// =============================================================

#[test]
fn tab_ids_round_trip() {
    for tab in DashboardTab::ALL {
        assert_eq!(DashboardTab::from_id(tab.id()), tab);
    }
}

#[test]
fn unknown_tab_id_falls_back_to_dashboard() {
    assert_eq!(DashboardTab::from_id("billing"), DashboardTab::Dashboard);
    assert_eq!(DashboardTab::from_id(""), DashboardTab::Dashboard);
}

#[test]
fn only_incidents_tab_has_badge() {
    let badged: Vec<_> = DashboardTab::ALL.into_iter().filter(|t| t.badge().is_some()).collect();
    assert_eq!(badged, vec![DashboardTab::Incidents]);
    assert_eq!(DashboardTab::Incidents.badge(), Some("2"));
}

#[test]
fn scripts_tab_label() {
    assert_eq!(DashboardTab::Scripts.label(), "Script Helper");
}

// =============================================================
// Notice
// =============================================================

#[test]
fn notice_constructors_set_tone() {
    assert_eq!(Notice::info("a", "b").tone, NoticeTone::Info);
    assert_eq!(Notice::destructive("a", "b").tone, NoticeTone::Destructive);
}
