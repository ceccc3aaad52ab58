//! Read-side filtering predicates over denormalized project fields.
//!
//! Filters are pure: they never mutate projects and empty criteria match
//! everything, so a default filter is a no-op.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::project::{Project, ProjectKind, ProjectStatus, WeddingType};
use crate::task::Priority;

/// Filter criteria for project listings. Every field is optional; list
/// criteria with no entries are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    /// Case-insensitive substring match on the client/couple label.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub statuses: Vec<ProjectStatus>,
    #[serde(default)]
    pub wedding_types: Vec<WeddingType>,
    /// Formula catalog ids (wedding projects only).
    #[serde(default)]
    pub formulas: Vec<String>,
    #[serde(default)]
    pub priorities: Vec<Priority>,
    /// A project matches if it carries any of these tags.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

impl ProjectFilter {
    /// Whether `project` satisfies every set criterion.
    pub fn matches(&self, project: &Project) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !project.client.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&project.status) {
            return false;
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|t| project.tags.contains(t)) {
            return false;
        }

        if let Some(season_id) = &self.season_id {
            if project.season_id.as_ref() != Some(season_id) {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if project.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if project.date > to {
                return false;
            }
        }

        if !self.wedding_types.is_empty() || !self.formulas.is_empty() {
            let ProjectKind::Wedding(wedding) = &project.kind else {
                return false;
            };
            if !self.wedding_types.is_empty()
                && !self.wedding_types.contains(&wedding.wedding_type)
            {
                return false;
            }
            if !self.formulas.is_empty() && !self.formulas.contains(&wedding.formula.name) {
                return false;
            }
        }

        if !self.priorities.is_empty() {
            let any = project
                .tasks()
                .iter()
                .any(|t| self.priorities.contains(&t.priority));
            if !any {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::ServiceType;
    use crate::pricing::Country;
    use crate::project::{FormulaSelection, WeddingDetails};

    fn wedding(client: &str, date: NaiveDate, formula: &str) -> Project {
        Project {
            id: 1,
            client: client.into(),
            date,
            email: String::new(),
            phone: String::new(),
            country: Country::Fr,
            delivery_days: 80,
            status: ProjectStatus::EnCours,
            notes: String::new(),
            tags: vec!["2024".into()],
            season_id: Some("2024".into()),
            activity_log: Vec::new(),
            documents: Vec::new(),
            kind: ProjectKind::Wedding(WeddingDetails {
                wedding_type: WeddingType::French,
                location: "Lyon".into(),
                formula: FormulaSelection {
                    service_type: ServiceType::Photo,
                    has_teaser: false,
                    has_album: false,
                    name: formula.into(),
                },
                tasks: Vec::new(),
            }),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_filter_matches_everything() {
        let p = wedding("Alice & Bob", date(2024, 6, 1), "photo");
        assert!(ProjectFilter::default().matches(&p));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let p = wedding("Alice & Bob", date(2024, 6, 1), "photo");
        let filter = ProjectFilter {
            search: "alice".into(),
            ..Default::default()
        };
        assert!(filter.matches(&p));

        let miss = ProjectFilter {
            search: "claire".into(),
            ..Default::default()
        };
        assert!(!miss.matches(&p));
    }

    #[test]
    fn status_membership_filters() {
        let p = wedding("Alice & Bob", date(2024, 6, 1), "photo");
        let filter = ProjectFilter {
            statuses: vec![ProjectStatus::Termine],
            ..Default::default()
        };
        assert!(!filter.matches(&p));
    }

    #[test]
    fn date_range_is_inclusive() {
        let p = wedding("Alice & Bob", date(2024, 6, 1), "photo");
        let filter = ProjectFilter {
            date_from: Some(date(2024, 6, 1)),
            date_to: Some(date(2024, 6, 1)),
            ..Default::default()
        };
        assert!(filter.matches(&p));

        let after = ProjectFilter {
            date_from: Some(date(2024, 6, 2)),
            ..Default::default()
        };
        assert!(!after.matches(&p));
    }

    #[test]
    fn formula_filter_only_matches_weddings() {
        let p = wedding("Alice & Bob", date(2024, 6, 1), "photo");
        let filter = ProjectFilter {
            formulas: vec!["photo".into()],
            ..Default::default()
        };
        assert!(filter.matches(&p));

        let other = ProjectFilter {
            formulas: vec!["complete".into()],
            ..Default::default()
        };
        assert!(!other.matches(&p));
    }

    #[test]
    fn season_equality_filters() {
        let p = wedding("Alice & Bob", date(2024, 6, 1), "photo");
        let filter = ProjectFilter {
            season_id: Some("2025".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&p));
    }
}
