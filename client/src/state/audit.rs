//! Static audit trail shown in the console's Audit Log tab.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

/// Total entries the (mock) audit service claims to hold.
pub const AUDIT_TOTAL_ENTRIES: usize = 47;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditAction {
    ApprovedRemediation,
    DismissedAlert,
    ScriptGenerated,
    Login2fa,
    IncidentDetected,
}

impl AuditAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApprovedRemediation => "approved_remediation",
            Self::DismissedAlert => "dismissed_alert",
            Self::ScriptGenerated => "script_generated",
            Self::Login2fa => "login_2fa",
            Self::IncidentDetected => "incident_detected",
        }
    }

    /// Human-readable form: underscores become spaces.
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Icon tint modifier for the entry's action glyph.
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            Self::ApprovedRemediation => "success",
            Self::DismissedAlert => "warning",
            Self::ScriptGenerated => "info",
            Self::Login2fa => "primary",
            Self::IncidentDetected => "critical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditStatus {
    Success,
    Acknowledged,
    Triggered,
    Failed,
}

impl AuditStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Acknowledged => "acknowledged",
            Self::Triggered => "triggered",
            Self::Failed => "failed",
        }
    }

    /// Badge color modifier. Failures share the critical color.
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Acknowledged => "warning",
            Self::Triggered | Self::Failed => "critical",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: &'static str,
    pub timestamp: &'static str,
    pub user: &'static str,
    pub action: AuditAction,
    pub resource: &'static str,
    pub details: &'static str,
    pub status: AuditStatus,
    pub ip: &'static str,
    pub user_agent: &'static str,
}

impl AuditEntry {
    fn matches(&self, needle: &str) -> bool {
        [self.user, self.action.as_str(), self.resource, self.details]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
            || self.action.label().contains(needle)
    }
}

/// Most recent entries, newest first.
#[must_use]
pub fn seed_entries() -> Vec<AuditEntry> {
    vec![
        AuditEntry {
            id: "AUD-001",
            timestamp: "2024-08-28 14:23:15 UTC",
            user: "john.doe@company.com",
            action: AuditAction::ApprovedRemediation,
            resource: "Auto Scaling Group: web-servers-asg",
            details: "Scaled out by +1 instance (i-0def456ghi789012)",
            status: AuditStatus::Success,
            ip: "192.168.1.100",
            user_agent: "Slack Bot Approval",
        },
        AuditEntry {
            id: "AUD-002",
            timestamp: "2024-08-28 14:20:42 UTC",
            user: "sarah.smith@company.com",
            action: AuditAction::DismissedAlert,
            resource: "RDS Instance: database-prod",
            details: "Dismissed memory usage warning after investigation",
            status: AuditStatus::Acknowledged,
            ip: "10.0.1.50",
            user_agent: "Web Dashboard",
        },
        AuditEntry {
            id: "AUD-003",
            timestamp: "2024-08-28 14:15:30 UTC",
            user: "CloudGuardian Bot",
            action: AuditAction::ScriptGenerated,
            resource: "Lambda Function Template",
            details: "Generated S3 duplicate cleanup script for mike.wilson@company.com",
            status: AuditStatus::Success,
            ip: "AWS Lambda",
            user_agent: "Automated",
        },
        AuditEntry {
            id: "AUD-004",
            timestamp: "2024-08-28 14:10:18 UTC",
            user: "mike.wilson@company.com",
            action: AuditAction::Login2fa,
            resource: "Authentication System",
            details: "Successful 2FA verification for privileged action approval",
            status: AuditStatus::Success,
            ip: "172.16.0.25",
            user_agent: "Chrome 128.0.0.0",
        },
        AuditEntry {
            id: "AUD-005",
            timestamp: "2024-08-28 14:05:55 UTC",
            user: "CloudGuardian Bot",
            action: AuditAction::IncidentDetected,
            resource: "EC2 Instance: i-0abc123def456789",
            details: "High CPU utilization detected (85% for 8 minutes)",
            status: AuditStatus::Triggered,
            ip: "AWS CloudWatch",
            user_agent: "Automated",
        },
    ]
}

/// Entries whose user, action, resource or details contain `query`,
/// case-insensitively. A blank query keeps everything.
#[must_use]
pub fn filter_entries<'a>(entries: &'a [AuditEntry], query: &str) -> Vec<&'a AuditEntry> {
    let needle = query.trim().to_lowercase();
    entries.iter().filter(|entry| needle.is_empty() || entry.matches(&needle)).collect()
}

/// Footer line under the list.
#[must_use]
pub fn showing_summary(shown: usize) -> String {
    format!("Showing {shown} of {AUDIT_TOTAL_ENTRIES} entries")
}
