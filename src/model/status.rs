//! Status catalog: the canonical mapping from status code to label, colour and role.
//!
//! A record only ever stores its numeric `code`. Everything else a reader wants to
//! show (the label, the chart colour) is looked up here at read time, so a record
//! can never carry a label that disagrees with its code.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lifecycle role a status plays, independent of its code or label.
///
/// The simulator and the invariant checks reason about roles, which lets tests
/// swap in a catalog with different codes or labels without touching the logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusRole {
    /// Freshly opened order
    New,
    /// Blocked until spare parts arrive
    WaitingForParts,
    /// Terminal state; the order is finished
    Resolved,
    /// Handed in for processing
    Submitted,
}

impl StatusRole {
    /// Returns true if the role is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StatusRole::Resolved)
    }

    /// Returns true if an order in this role can still be resolved.
    pub fn is_resolvable(&self) -> bool {
        matches!(self, StatusRole::New | StatusRole::WaitingForParts)
    }
}

impl Display for StatusRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::WaitingForParts => write!(f, "waiting_for_parts"),
            Self::Resolved => write!(f, "resolved"),
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub code: u16,
    pub name: String,
    pub color: String,
    pub role: StatusRole,
}

impl StatusEntry {
    pub fn new(code: u16, name: impl Into<String>, color: impl Into<String>, role: StatusRole) -> Self {
        Self {
            code,
            name: name.into(),
            color: color.into(),
            role,
        }
    }
}

/// Ordered set of known statuses.
///
/// Order matters: status counts and per-status series are reported in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCatalog {
    entries: Vec<StatusEntry>,
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self::new(vec![
            StatusEntry::new(100, "New", "#4e79a7", StatusRole::New),
            StatusEntry::new(151, "Waiting for Spare Parts", "#e15759", StatusRole::WaitingForParts),
            StatusEntry::new(500, "Problem Solved", "#59a14f", StatusRole::Resolved),
            StatusEntry::new(600, "Submitted", "#f28e2b", StatusRole::Submitted),
        ])
    }
}

impl StatusCatalog {
    pub fn new(entries: Vec<StatusEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn entry(&self, code: u16) -> Option<&StatusEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn is_known(&self, code: u16) -> bool {
        self.entry(code).is_some()
    }

    /// Canonical label for a code.
    pub fn name_of(&self, code: u16) -> Option<&str> {
        self.entry(code).map(|e| e.name.as_str())
    }

    /// Inverse of [`StatusCatalog::name_of`].
    pub fn code_of(&self, name: &str) -> Option<u16> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.code)
    }

    pub fn color_of(&self, code: u16) -> Option<&str> {
        self.entry(code).map(|e| e.color.as_str())
    }

    pub fn role_of(&self, code: u16) -> Option<StatusRole> {
        self.entry(code).map(|e| e.role)
    }

    /// First entry carrying `role`. A validated catalog has exactly one.
    pub fn entry_for_role(&self, role: StatusRole) -> Option<&StatusEntry> {
        self.entries.iter().find(|e| e.role == role)
    }

    pub fn code_for_role(&self, role: StatusRole) -> Option<u16> {
        self.entry_for_role(role).map(|e| e.code)
    }

    /// Codes a brand-new order may start with, in catalog order.
    pub fn arrival_codes(&self) -> Vec<u16> {
        self.entries
            .iter()
            .filter(|e| !e.role.is_terminal())
            .map(|e| e.code)
            .collect()
    }

    /// Whether an order with this code may still transition to the terminal status.
    /// Unknown codes are never resolvable.
    pub fn is_resolvable(&self, code: u16) -> bool {
        self.role_of(code).is_some_and(|r| r.is_resolvable())
    }

    pub fn has_role(&self, code: u16, role: StatusRole) -> bool {
        self.role_of(code) == Some(role)
    }
}
