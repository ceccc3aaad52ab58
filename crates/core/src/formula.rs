//! Formula catalog: the named task templates a wedding project is built from.
//!
//! Each formula lists task titles, day offsets from the anchor (event) date
//! and a default assignee. The catalog is immutable reference data; the
//! schedule generator ([`crate::schedule`]) expands a formula into concrete
//! dated tasks.

use serde::{Deserialize, Serialize};

use crate::task::Priority;

/// Service type covered by a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Photo,
    Video,
    PhotoVideo,
}

/// One task line of a formula: title, offset in days after the anchor date,
/// and the staff member it is assigned to by default.
///
/// Offsets are not required to be sorted; template order is authoritative.
#[derive(Debug, Clone, Serialize)]
pub struct TaskTemplate {
    pub title: String,
    pub day_offset: i64,
    pub default_assignee: String,
    /// Optional template-level priority; tasks default to medium when unset.
    pub priority: Option<Priority>,
}

/// A named, immutable service formula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaTemplate {
    pub id: String,
    pub name: String,
    pub service_type: ServiceType,
    pub description: String,
    pub tasks: Vec<TaskTemplate>,
}

impl FormulaTemplate {
    /// Whether the formula includes a teaser video, derived from the task
    /// list itself rather than the formula id.
    pub fn has_teaser(&self) -> bool {
        self.tasks
            .iter()
            .any(|t| t.title.to_lowercase().contains("teaser"))
    }

    /// Whether the formula includes a photo album, derived from the task
    /// list itself rather than the formula id.
    pub fn has_album(&self) -> bool {
        self.tasks
            .iter()
            .any(|t| t.title.to_lowercase().contains("album"))
    }
}

/// The immutable set of formulas offered by the studio.
#[derive(Debug, Clone)]
pub struct FormulaCatalog {
    formulas: Vec<FormulaTemplate>,
}

/// Shorthand for one catalog task line.
fn t(title: &str, day_offset: i64, assignee: &str) -> TaskTemplate {
    TaskTemplate {
        title: title.to_string(),
        day_offset,
        default_assignee: assignee.to_string(),
        priority: None,
    }
}

impl FormulaCatalog {
    /// The studio's eight built-in formulas.
    pub fn builtin() -> Self {
        let formulas = vec![
            FormulaTemplate {
                id: "complete".into(),
                name: "Photo classique + Film long + Album + Teaser".into(),
                service_type: ServiceType::PhotoVideo,
                description:
                    "Formule complète incluant photos retouchées, film long, album photo et teaser vidéo"
                        .into(),
                tasks: vec![
                    t("Obtenir vocal des chefs d'équipe", 3, "marvel"),
                    t("Demander vocal aux mariés sur moments clés", 3, "marvel"),
                    t("Envoi photos brutes pour sélection", 10, "damien"),
                    t("Envoi modèles covers pour album", 10, "marvel"),
                    t("Envoi des proxies", 10, "narcisse"),
                    t("Vérification envoi photos brutes", 10, "marvel"),
                    t("Demande musiques film long", 12, "marvel"),
                    t("Début retouches globales", 42, "retoucheur"),
                    t("Relance sélection photos classiques et album", 42, "marvel"),
                    t("Relance sélection modèles covers", 42, "marvel"),
                    t("Fabrication couverture album", 45, "marvel"),
                    t("Montage teaser vidéo", 45, "luc"),
                    t("Montage film long", 60, "bruce"),
                    t("Vérification interne film long", 67, "marvel"),
                    t("Étalonnage film long", 70, "etalonneur"),
                    t("Finalisation teaser et DVD", 80, "marvel"),
                    t("Livraison au client", 80, "marvel"),
                ],
            },
            FormulaTemplate {
                id: "photo_film_album".into(),
                name: "Photo classique + Film long + Album".into(),
                service_type: ServiceType::PhotoVideo,
                description: "Photos retouchées, film long et album photo (sans teaser)".into(),
                tasks: vec![
                    t("Obtenir vocal des chefs d'équipe", 3, "marvel"),
                    t("Demander vocal aux mariés sur moments clés", 3, "marvel"),
                    t("Envoi photos brutes pour sélection", 10, "damien"),
                    t("Envoi modèles covers pour album", 10, "marvel"),
                    t("Envoi des proxies", 10, "narcisse"),
                    t("Vérification envoi photos brutes", 10, "marvel"),
                    t("Demande musiques film long", 12, "marvel"),
                    t("Début retouches globales", 42, "retoucheur"),
                    t("Relance sélection photos classiques et album", 42, "marvel"),
                    t("Relance sélection modèles covers", 42, "marvel"),
                    t("Fabrication couverture album", 45, "marvel"),
                    t("Montage film long", 60, "bruce"),
                    t("Vérification interne film long", 67, "marvel"),
                    t("Étalonnage film long", 70, "etalonneur"),
                    t("Livraison au client", 80, "marvel"),
                ],
            },
            FormulaTemplate {
                id: "photo_film_teaser".into(),
                name: "Photo classique + Film long + Teaser".into(),
                service_type: ServiceType::PhotoVideo,
                description: "Photos retouchées, film long et teaser vidéo (sans album)".into(),
                tasks: vec![
                    t("Obtenir vocal des chefs d'équipe", 3, "marvel"),
                    t("Demander vocal aux mariés sur moments clés", 3, "marvel"),
                    t("Envoi photos brutes pour sélection", 10, "damien"),
                    t("Envoi des proxies", 10, "narcisse"),
                    t("Vérification envoi photos brutes", 10, "marvel"),
                    t("Demande musiques film long", 12, "marvel"),
                    t("Début retouches globales", 42, "retoucheur"),
                    t("Relance sélection photos classiques", 42, "marvel"),
                    t("Montage teaser vidéo", 45, "luc"),
                    t("Montage film long", 60, "bruce"),
                    t("Vérification interne film long", 67, "marvel"),
                    t("Étalonnage film long", 70, "etalonneur"),
                    t("Finalisation teaser et DVD", 80, "marvel"),
                    t("Livraison au client", 80, "marvel"),
                ],
            },
            FormulaTemplate {
                id: "photo_film".into(),
                name: "Photo classique + Film long".into(),
                service_type: ServiceType::PhotoVideo,
                description: "Photos retouchées et film long uniquement".into(),
                tasks: vec![
                    t("Obtenir vocal des chefs d'équipe", 3, "marvel"),
                    t("Demander vocal aux mariés", 3, "marvel"),
                    t("Envoi photos brutes pour sélection", 10, "damien"),
                    t("Envoi des proxies", 10, "narcisse"),
                    t("Vérification envoi photos brutes et proxies", 10, "marvel"),
                    t("Relance sélection photos classiques", 35, "marvel"),
                    t("Début retouches globales", 42, "retoucheur"),
                    t("Montage film long", 60, "bruce"),
                    t("Vérification interne film long", 67, "marvel"),
                    t("Étalonnage", 70, "etalonneur"),
                    t("Finalisation DVD", 80, "marvel"),
                    t("Livraison au client", 80, "marvel"),
                ],
            },
            FormulaTemplate {
                id: "photo_album".into(),
                name: "Photo classique + Album".into(),
                service_type: ServiceType::Photo,
                description: "Photos retouchées et album photo uniquement".into(),
                tasks: vec![
                    t("Envoi photos brutes pour sélection", 10, "damien"),
                    t("Envoi modèles covers pour album", 10, "marvel"),
                    t("Vérification envoi photos brutes", 10, "marvel"),
                    t("Relance sélection photos classiques et album", 35, "marvel"),
                    t("Début retouches globales", 42, "retoucheur"),
                    t("Fabrication couverture album", 45, "marvel"),
                    t("Livraison au client", 70, "marvel"),
                ],
            },
            FormulaTemplate {
                id: "photo".into(),
                name: "Photo classique uniquement".into(),
                service_type: ServiceType::Photo,
                description: "Photos retouchées uniquement".into(),
                tasks: vec![
                    t("Envoi photos brutes pour sélection", 10, "damien"),
                    t("Vérification envoi photos brutes", 10, "marvel"),
                    t("Relance sélection photos classiques", 35, "marvel"),
                    t("Début retouches globales", 42, "retoucheur"),
                    t("Livraison photos au client", 70, "marvel"),
                ],
            },
            FormulaTemplate {
                id: "video_complete".into(),
                name: "Film long + Teaser".into(),
                service_type: ServiceType::Video,
                description: "Film long et teaser vidéo".into(),
                tasks: vec![
                    t("Obtenir vocal des chefs d'équipe", 3, "marvel"),
                    t("Demander vocal aux mariés sur moments clés", 3, "marvel"),
                    t("Envoi des proxies", 10, "narcisse"),
                    t("Demande musiques film long", 12, "marvel"),
                    t("Montage teaser vidéo", 45, "luc"),
                    t("Montage film long", 60, "bruce"),
                    t("Vérification interne film long", 67, "marvel"),
                    t("Étalonnage film long", 70, "etalonneur"),
                    t("Finalisation teaser et DVD", 80, "marvel"),
                    t("Livraison au client", 80, "marvel"),
                ],
            },
            FormulaTemplate {
                id: "video_long".into(),
                name: "Film long uniquement".into(),
                service_type: ServiceType::Video,
                description: "Film long uniquement".into(),
                tasks: vec![
                    t("Obtenir vocal des chefs d'équipe", 3, "marvel"),
                    t("Demander vocal aux mariés", 3, "marvel"),
                    t("Envoi des proxies", 10, "narcisse"),
                    t("Demande musiques film long", 12, "marvel"),
                    t("Montage film long", 60, "bruce"),
                    t("Vérification interne film long", 67, "marvel"),
                    t("Étalonnage", 70, "etalonneur"),
                    t("Finalisation DVD", 80, "marvel"),
                    t("Livraison au client", 80, "marvel"),
                ],
            },
        ];

        Self { formulas }
    }

    /// Look up a formula by id.
    pub fn find(&self, id: &str) -> Option<&FormulaTemplate> {
        self.formulas.iter().find(|f| f.id == id)
    }

    /// All formulas, in catalog order.
    pub fn all(&self) -> &[FormulaTemplate] {
        &self.formulas
    }
}

impl Default for FormulaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
