use super::*;

// =============================================================
// Seed data
// =============================================================

#[test]
fn default_state_has_two_seeded_incidents() {
    let state = IncidentsState::default();
    let ids: Vec<_> = state.incidents.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["INC-001", "INC-002"]);
    assert_eq!(state.metrics.total_incidents, 2);
    assert_eq!(state.metrics.active_alerts, 1);
}

// =============================================================
// approve / dismiss
// =============================================================

#[test]
fn approve_removes_incident_and_decrements_both_counters() {
    let mut state = IncidentsState::default();
    assert!(state.approve("INC-001"));
    assert_eq!(state.incidents.len(), 1);
    assert_eq!(state.metrics.total_incidents, 1);
    assert_eq!(state.metrics.active_alerts, 0);
}

#[test]
fn approve_never_takes_active_alerts_below_zero() {
    let mut state = IncidentsState::default();
    assert!(state.approve("INC-001"));
    assert!(state.approve("INC-002"));
    assert_eq!(state.metrics.total_incidents, 0);
    assert_eq!(state.metrics.active_alerts, 0);
    assert!(state.incidents.is_empty());
}

#[test]
fn dismiss_only_decrements_total() {
    let mut state = IncidentsState::default();
    assert!(state.dismiss("INC-002"));
    assert_eq!(state.metrics.total_incidents, 1);
    assert_eq!(state.metrics.active_alerts, 1);
}

#[test]
fn unknown_incident_is_noop() {
    let mut state = IncidentsState::default();
    let before = state.clone();
    assert!(!state.approve("INC-404"));
    assert!(!state.dismiss("INC-404"));
    assert_eq!(state, before);
}

#[test]
fn acting_twice_on_same_incident_only_counts_once() {
    let mut state = IncidentsState::default();
    assert!(state.dismiss("INC-001"));
    assert!(!state.approve("INC-001"));
    assert_eq!(state.metrics.total_incidents, 1);
    assert_eq!(state.metrics.active_alerts, 1);
}

// =============================================================
// Derived status and live metrics
// =============================================================

#[test]
fn incident_count_status_thresholds() {
    assert_eq!(incident_count_status(0), HealthStatus::Operational);
    assert_eq!(incident_count_status(1), HealthStatus::Warning);
    assert_eq!(incident_count_status(2), HealthStatus::Warning);
    assert_eq!(incident_count_status(3), HealthStatus::Critical);
}

#[test]
fn health_roll_spans_85_to_94() {
    assert_eq!(health_from_roll(0.0), "85%");
    assert_eq!(health_from_roll(0.55), "90%");
    assert_eq!(health_from_roll(0.999), "94%");
    assert_eq!(health_from_roll(1.0), "94%");
}

#[test]
fn response_time_roll_has_one_decimal() {
    assert_eq!(response_time_from_roll(0.0), "1.0s");
    assert_eq!(response_time_from_roll(0.4), "1.2s");
    assert_eq!(response_time_from_roll(0.999), "1.5s");
}

#[test]
fn refresh_live_leaves_counters_alone() {
    let mut state = IncidentsState::default();
    state.refresh_live(0.3, 0.2);
    assert_eq!(state.metrics.system_health, "88%");
    assert_eq!(state.metrics.response_time, "1.1s");
    assert_eq!(state.metrics.total_incidents, 2);
}

#[test]
fn trend_glyphs() {
    assert_eq!(Trend::Up.glyph(), "↗");
    assert_eq!(Trend::Down.glyph(), "↘");
    assert_eq!(Trend::Stable.glyph(), "→");
}
