//! Static staff catalog: read-only reference data, not owned by projects.
//!
//! Assignments on tasks reference these ids, but references are never
//! validated against the catalog (mentions and assignees are stored raw).

use serde::Serialize;

/// Roles a staff member can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    ProjectManager,
    Photographer,
    Videographer,
    Teaser,
    Film,
    Retoucher,
    Colorist,
}

/// One staff catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Staff {
    pub id: &'static str,
    pub name: &'static str,
    pub roles: &'static [StaffRole],
}

/// The studio's team.
pub const STAFF: &[Staff] = &[
    Staff {
        id: "marvel",
        name: "Marvel",
        roles: &[StaffRole::ProjectManager],
    },
    Staff {
        id: "damien",
        name: "Damien",
        roles: &[StaffRole::Photographer],
    },
    Staff {
        id: "celine",
        name: "Céline",
        roles: &[StaffRole::Photographer],
    },
    Staff {
        id: "narcisse",
        name: "Narcisse",
        roles: &[StaffRole::Photographer],
    },
    Staff {
        id: "luc",
        name: "Luc",
        roles: &[StaffRole::Videographer, StaffRole::Teaser],
    },
    Staff {
        id: "sacha",
        name: "Sacha",
        roles: &[StaffRole::Videographer, StaffRole::Teaser],
    },
    Staff {
        id: "oscar",
        name: "Oscar",
        roles: &[StaffRole::Videographer, StaffRole::Teaser],
    },
    Staff {
        id: "bruce",
        name: "Bruce",
        roles: &[StaffRole::Videographer, StaffRole::Film],
    },
    Staff {
        id: "steve",
        name: "Steve",
        roles: &[StaffRole::Videographer, StaffRole::Film],
    },
    Staff {
        id: "retoucheur",
        name: "Retoucheur",
        roles: &[StaffRole::Retoucher],
    },
    Staff {
        id: "etalonneur",
        name: "Étalonneur",
        roles: &[StaffRole::Colorist],
    },
];

/// Look up a staff member by id.
pub fn find(id: &str) -> Option<&'static Staff> {
    STAFF.iter().find(|s| s.id == id)
}
