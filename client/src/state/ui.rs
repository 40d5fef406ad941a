//! Local UI chrome state (dashboard tab, transient notices).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the session core so the console
//! layout can evolve without touching authentication.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sections of the signed-in console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Dashboard,
    Incidents,
    Scripts,
    Audit,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Incidents, Self::Scripts, Self::Audit];

    /// Stable identifier used in markup and URLs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Incidents => "incidents",
            Self::Scripts => "scripts",
            Self::Audit => "audit",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Incidents => "Incidents",
            Self::Scripts => "Script Helper",
            Self::Audit => "Audit Log",
        }
    }

    /// Counter badge shown next to the label, if any.
    #[must_use]
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::Incidents => Some("2"),
            _ => None,
        }
    }

    /// Parse a tab id. Unknown ids fall back to the dashboard.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|tab| tab.id() == id).unwrap_or_default()
    }
}

/// Visual weight of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeTone {
    #[default]
    Info,
    Destructive,
}

/// A short toast-style message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: NoticeTone,
}

impl Notice {
    #[must_use]
    pub fn info(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), tone: NoticeTone::Info }
    }

    #[must_use]
    pub fn destructive(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), tone: NoticeTone::Destructive }
    }
}

/// UI state shared across pages through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: DashboardTab,
    pub notice: Option<Notice>,
}
