//! Export rendering: CSV and JSON dumps of wedding projects.
//!
//! Pure string builders; content types and download plumbing are the HTTP
//! layer's concern. The CSV layout is fixed and consumed by the studio's
//! spreadsheets, so the header and date format must not drift.

use chrono::NaiveDate;

use crate::project::{Project, ProjectKind, ProjectStatus, WeddingType};
use crate::task::TaskStatus;

/// Fixed CSV header expected by downstream spreadsheets.
pub const CSV_HEADER: &str = "Couple,Date,Type,Formule,Statut,Tâches complétées";

/// Render a date as `dd/MM/yyyy`.
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn status_token(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::AVenir => "a_venir",
        ProjectStatus::EnCours => "en_cours",
        ProjectStatus::EnRetard => "en_retard",
        ProjectStatus::Termine => "termine",
    }
}

fn wedding_type_label(wedding_type: WeddingType) -> &'static str {
    match wedding_type {
        WeddingType::French => "Français",
        WeddingType::Cameroonian => "Camerounais",
    }
}

/// Render the wedding projects among `projects` as CSV. Non-wedding
/// projects are skipped; they carry no formula or checklist columns.
pub fn weddings_csv(projects: &[Project]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];

    for project in projects {
        let ProjectKind::Wedding(wedding) = &project.kind else {
            continue;
        };
        let completed = wedding
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        lines.push(format!(
            "{},{},{},{},{},{}/{}",
            project.client,
            format_date_fr(project.date),
            wedding_type_label(wedding.wedding_type),
            wedding.formula.name,
            status_token(project.status),
            completed,
            wedding.tasks.len(),
        ));
    }

    lines.join("\n")
}

/// Render selected projects as pretty-printed JSON: a direct structural
/// dump of the records.
pub fn projects_json(projects: &[Project]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{FormulaCatalog, ServiceType};
    use crate::pricing::Country;
    use crate::project::{FormulaSelection, WeddingDetails};
    use crate::schedule;
    use chrono::Utc;

    fn wedding() -> Project {
        let catalog = FormulaCatalog::builtin();
        let photo = catalog.find("photo").unwrap();
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut tasks = schedule::generate(photo, anchor, 1);
        tasks[0].set_status(TaskStatus::Completed, Utc::now());
        tasks[1].set_status(TaskStatus::Completed, Utc::now());

        Project {
            id: 1,
            client: "Alice & Bob".into(),
            date: anchor,
            email: String::new(),
            phone: String::new(),
            country: Country::Fr,
            delivery_days: 80,
            status: ProjectStatus::EnCours,
            notes: String::new(),
            tags: Vec::new(),
            season_id: None,
            activity_log: Vec::new(),
            documents: Vec::new(),
            kind: ProjectKind::Wedding(WeddingDetails {
                wedding_type: WeddingType::French,
                location: "Paris".into(),
                formula: FormulaSelection {
                    service_type: ServiceType::Photo,
                    has_teaser: false,
                    has_album: false,
                    name: "photo".into(),
                },
                tasks,
            }),
        }
    }

    #[test]
    fn csv_starts_with_fixed_header() {
        let csv = weddings_csv(&[wedding()]);
        assert!(csv.starts_with("Couple,Date,Type,Formule,Statut,Tâches complétées\n"));
    }

    #[test]
    fn csv_row_renders_date_type_and_completion() {
        let csv = weddings_csv(&[wedding()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Alice & Bob,01/06/2024,Français,photo,en_cours,2/5");
    }

    #[test]
    fn csv_with_no_projects_is_header_only() {
        assert_eq!(weddings_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn json_dump_round_trips() {
        let json = projects_json(&[wedding()]).unwrap();
        let back: Vec<Project> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].client, "Alice & Bob");
    }

    #[test]
    fn dates_render_day_month_year() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(format_date_fr(d), "09/01/2024");
    }
}
