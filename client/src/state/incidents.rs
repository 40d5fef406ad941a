//! Mock incident feed and headline metrics for the console overview.
//!
//! DESIGN
//! ======
//! Incidents are seeded from static data and only ever shrink: approving or
//! dismissing removes an entry and adjusts the counters. Live metrics are
//! re-rolled by the overview timer, which supplies the random draws so the
//! arithmetic here stays deterministic.

#[cfg(test)]
#[path = "incidents_test.rs"]
mod incidents_test;

use std::time::Duration;

/// How often the overview re-rolls live metrics.
pub const METRICS_REFRESH: Duration = Duration::from_secs(5);

/// Incident severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Traffic-light status for a status card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    Operational,
    Warning,
    Critical,
}

impl HealthStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Direction hint rendered next to a status card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
            Self::Stable => "→",
        }
    }
}

/// An open infrastructure incident with a suggested remediation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub resource: String,
    pub metric: String,
    pub suggested_action: String,
}

/// Headline numbers shown in the overview status cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_incidents: u32,
    pub active_alerts: u32,
    pub system_health: String,
    pub response_time: String,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            total_incidents: 2,
            active_alerts: 1,
            system_health: "85%".to_owned(),
            response_time: "1.2s".to_owned(),
        }
    }
}

/// Card status for the "Active Incidents" count.
#[must_use]
pub fn incident_count_status(count: u32) -> HealthStatus {
    match count {
        0 => HealthStatus::Operational,
        1 | 2 => HealthStatus::Warning,
        _ => HealthStatus::Critical,
    }
}

/// System health percentage for a draw in `[0, 1)`: 85..=94.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn health_from_roll(roll: f64) -> String {
    let step = (roll.clamp(0.0, 1.0) * 10.0).floor().min(9.0) as u32;
    format!("{}%", 85 + step)
}

/// Response time for a draw in `[0, 1)`: 1.0s..=1.5s, one decimal.
#[must_use]
pub fn response_time_from_roll(roll: f64) -> String {
    format!("{:.1}s", 1.0 + roll.clamp(0.0, 1.0) * 0.5)
}

/// The incidents the mock monitor reports at startup.
#[must_use]
pub fn seed_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "INC-001".to_owned(),
            severity: Severity::Critical,
            title: "High CPU Utilization Detected".to_owned(),
            description: "EC2 instance i-0abc123def456789 has been running at 85% CPU for the last 8 minutes, \
                          exceeding the 80% threshold."
                .to_owned(),
            timestamp: "2 minutes ago".to_owned(),
            resource: "i-0abc123def456789 (web-server-01)".to_owned(),
            metric: "CPUUtilization: 85%".to_owned(),
            suggested_action: "Scale out Auto Scaling Group by +1 instance to distribute load".to_owned(),
        },
        Incident {
            id: "INC-002".to_owned(),
            severity: Severity::Warning,
            title: "Memory Usage Alert".to_owned(),
            description: "RDS instance database-prod is showing elevated memory usage patterns.".to_owned(),
            timestamp: "5 minutes ago".to_owned(),
            resource: "database-prod (db.t3.large)".to_owned(),
            metric: "DatabaseConnections: 78/80".to_owned(),
            suggested_action: "Monitor connection pooling and consider instance upgrade".to_owned(),
        },
    ]
}

/// Open incidents plus the counters derived from operator actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentsState {
    pub incidents: Vec<Incident>,
    pub metrics: DashboardMetrics,
}

impl Default for IncidentsState {
    fn default() -> Self {
        Self { incidents: seed_incidents(), metrics: DashboardMetrics::default() }
    }
}

impl IncidentsState {
    /// Approve the suggested remediation. Returns `false` for unknown ids.
    pub fn approve(&mut self, id: &str) -> bool {
        if !self.remove(id) {
            return false;
        }
        self.metrics.total_incidents = self.metrics.total_incidents.saturating_sub(1);
        self.metrics.active_alerts = self.metrics.active_alerts.saturating_sub(1);
        true
    }

    /// Acknowledge without remediation. Returns `false` for unknown ids.
    pub fn dismiss(&mut self, id: &str) -> bool {
        if !self.remove(id) {
            return false;
        }
        self.metrics.total_incidents = self.metrics.total_incidents.saturating_sub(1);
        true
    }

    /// Re-roll the live metrics from two draws in `[0, 1)`.
    pub fn refresh_live(&mut self, health_roll: f64, latency_roll: f64) {
        self.metrics.system_health = health_from_roll(health_roll);
        self.metrics.response_time = response_time_from_roll(latency_roll);
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.incidents.len();
        self.incidents.retain(|incident| incident.id != id);
        self.incidents.len() != before
    }
}
