//! Project aggregate: the entity tracked through the delivery pipeline.
//!
//! A project is one of three explicit variants (wedding, studio, corporate)
//! sharing a common base shape. Only weddings run through the schedule
//! generator and carry a task checklist; studio and corporate engagements
//! are priced from package tables instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::formula::ServiceType;
use crate::pricing::Country;
use crate::task::{Task, TaskStatus};
use crate::types::{ProjectId, Timestamp};

/// Derived pipeline status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    AVenir,
    EnCours,
    EnRetard,
    Termine,
}

/// One append-only audit trail entry. Entries are never mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub user: String,
    pub timestamp: Timestamp,
    /// Opaque diff/payload, e.g. the field set applied by an update.
    pub details: serde_json::Value,
}

/// Reference to an uploaded document; storage itself is external.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Wedding
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeddingType {
    French,
    Cameroonian,
}

/// The formula a wedding project was created from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaSelection {
    pub service_type: ServiceType,
    pub has_teaser: bool,
    pub has_album: bool,
    /// Catalog id of the formula (e.g. `"photo_film_teaser"`).
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingDetails {
    pub wedding_type: WeddingType,
    pub location: String,
    pub formula: FormulaSelection,
    pub tasks: Vec<Task>,
}

// ---------------------------------------------------------------------------
// Studio
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Portrait,
    Couple,
    Family,
    Children,
    Pregnancy,
    Newborn,
    Fashion,
    Product,
    Corporate,
    Event,
    Graduation,
    Artistic,
    Boudoir,
    Pet,
    Other,
}

/// Snapshot of the package a studio session was booked under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioPackageRef {
    pub name: String,
    pub duration_minutes: u32,
    pub photos: u32,
    pub print_included: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioDeliverables {
    pub hd_photos: u32,
    pub web_photos: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioDetails {
    pub session_type: SessionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<StudioPackageRef>,
    #[serde(default)]
    pub deliverables: StudioDeliverables,
    pub price: i64,
    pub backdrop: String,
    pub props: Vec<String>,
}

// ---------------------------------------------------------------------------
// Corporate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorporateEventType {
    Conference,
    TeamBuilding,
    ProductLaunch,
    CorporatePortrait,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyContact {
    pub name: String,
    pub contact: String,
    pub position: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CorporateDeliverables {
    pub photos: bool,
    pub video: bool,
    pub streaming: bool,
    pub prints: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorporateDetails {
    pub event_type: CorporateEventType,
    pub location: String,
    pub company: CompanyContact,
    pub attendees: u32,
    pub requirements: Vec<String>,
    pub deliverables: CorporateDeliverables,
    pub price: i64,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// Variant-specific payload, tagged by `type` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectKind {
    Wedding(WeddingDetails),
    Studio(StudioDetails),
    Corporate(CorporateDetails),
}

/// The mutable project aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Display label of the primary contact: the couple for weddings, the
    /// client or company otherwise.
    pub client: String,
    /// Anchor date all task offsets are computed from.
    pub date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub country: Country,
    pub delivery_days: u32,
    pub status: ProjectStatus,
    pub notes: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    pub activity_log: Vec<ActivityLogEntry>,
    pub documents: Vec<DocumentRef>,
    #[serde(flatten)]
    pub kind: ProjectKind,
}

impl Project {
    /// The project's task checklist. Empty for studio and corporate
    /// projects, which have no generated schedule.
    pub fn tasks(&self) -> &[Task] {
        match &self.kind {
            ProjectKind::Wedding(w) => &w.tasks,
            ProjectKind::Studio(_) | ProjectKind::Corporate(_) => &[],
        }
    }

    /// Mutable checklist access; `None` for variants without tasks.
    pub fn tasks_mut(&mut self) -> Option<&mut Vec<Task>> {
        match &mut self.kind {
            ProjectKind::Wedding(w) => Some(&mut w.tasks),
            ProjectKind::Studio(_) | ProjectKind::Corporate(_) => None,
        }
    }

    /// Completion percentage, `round(100 * completed / total)`.
    /// Zero tasks yield 0 rather than a division by zero.
    pub fn progress(&self) -> u8 {
        let tasks = self.tasks();
        if tasks.is_empty() {
            return 0;
        }
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        ((completed as f64 / tasks.len() as f64) * 100.0).round() as u8
    }

    /// Append an audit trail entry.
    pub fn log_activity(&mut self, entry: ActivityLogEntry) {
        self.activity_log.push(entry);
    }
}
