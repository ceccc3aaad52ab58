//! Project repository: create, query and mutate project aggregates.
//!
//! The store owns `HashMap<ProjectId, Project>` behind one `RwLock`; every
//! mutation takes the write lock, applies a whole-record replacement and
//! publishes a domain event. Unknown ids on update paths are no-ops
//! returning `None`/`false`; only `create` can fail.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use marvelous_core::error::CoreError;
use marvelous_core::formula::FormulaCatalog;
use marvelous_core::pricing::{self, Country};
use marvelous_core::project::{
    ActivityLogEntry, CompanyContact, CorporateDeliverables, CorporateDetails,
    CorporateEventType, FormulaSelection, Project, ProjectKind, ProjectStatus, SessionType,
    StudioDeliverables, StudioDetails, StudioPackageRef, WeddingDetails, WeddingType,
};
use marvelous_core::schedule;
use marvelous_core::search::ProjectFilter;
use marvelous_core::status::derive_status;
use marvelous_core::task::{Comment, Priority, SubTask, Task, TaskStatus};
use marvelous_core::types::ProjectId;
use marvelous_events::{event_types, EventBus, StudioEvent};

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request to create a project. The variant payload is tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub client: String,
    /// Anchor (event) date.
    pub date: NaiveDate,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub country: Country,
    #[serde(default = "default_delivery_days")]
    pub delivery_days: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(flatten)]
    pub kind: CreateProjectKind,
}

fn default_delivery_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CreateProjectKind {
    Wedding(CreateWedding),
    Studio(CreateStudio),
    Corporate(CreateCorporate),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWedding {
    pub wedding_type: WeddingType,
    #[serde(default)]
    pub location: String,
    /// Catalog id; creation fails with `UnknownFormula` if it does not
    /// resolve, and nothing is persisted.
    pub formula_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudio {
    pub session_type: SessionType,
    pub package_id: String,
    #[serde(default)]
    pub deliverables: StudioDeliverables,
    #[serde(default)]
    pub backdrop: String,
    #[serde(default)]
    pub props: Vec<String>,
    /// Replaces the package table price when set.
    #[serde(default)]
    pub price_override: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCorporate {
    pub event_type: CorporateEventType,
    #[serde(default)]
    pub location: String,
    pub company: CompanyContact,
    #[serde(default)]
    pub attendees: u32,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub deliverables: CorporateDeliverables,
    /// Replaces the rate table price when set; required for event types
    /// without a table entry.
    #[serde(default)]
    pub price_override: Option<i64>,
}

/// Partial project update; only provided fields are applied. Serialized
/// as-is into the activity log's `details` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<u32>,
    /// Manual status override; the next task-status change re-derives it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
}

/// Partial task update. Does NOT carry status; status changes go through
/// [`ProjectStore::update_task_status`] so the derived project status stays
/// in sync.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub estimated_time: Option<u32>,
    #[serde(default)]
    pub actual_time: Option<u32>,
    #[serde(default)]
    pub assigned_to: Option<Vec<String>>,
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

struct Inner {
    projects: HashMap<ProjectId, Project>,
    next_id: ProjectId,
}

/// Repository owning the project collection.
pub struct ProjectStore {
    catalog: FormulaCatalog,
    bus: Arc<EventBus>,
    inner: RwLock<Inner>,
}

impl ProjectStore {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            catalog: FormulaCatalog::builtin(),
            bus,
            inner: RwLock::new(Inner {
                projects: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// The formula catalog this store resolves wedding formulas against.
    pub fn catalog(&self) -> &FormulaCatalog {
        &self.catalog
    }

    /// Create a project. Weddings are created atomically with their full
    /// generated task list; studio/corporate projects carry a computed or
    /// overridden price instead of a checklist.
    pub fn create(&self, input: CreateProject) -> Result<Project, CoreError> {
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let id = inner.next_id;

        let kind = match &input.kind {
            CreateProjectKind::Wedding(wedding) => {
                let template = self.catalog.find(&wedding.formula_id).ok_or_else(|| {
                    CoreError::UnknownFormula {
                        id: wedding.formula_id.clone(),
                    }
                })?;
                let tasks = schedule::generate(template, input.date, id);
                ProjectKind::Wedding(WeddingDetails {
                    wedding_type: wedding.wedding_type,
                    location: wedding.location.clone(),
                    formula: FormulaSelection {
                        service_type: template.service_type,
                        has_teaser: template.has_teaser(),
                        has_album: template.has_album(),
                        name: template.id.clone(),
                    },
                    tasks,
                })
            }
            CreateProjectKind::Studio(studio) => {
                let package = pricing::studio_package(&studio.package_id).ok_or_else(|| {
                    CoreError::NotFound {
                        entity: "StudioPackage",
                        id: studio.package_id.clone(),
                    }
                })?;
                let price =
                    pricing::apply_override(package.price(input.country), studio.price_override)?;
                ProjectKind::Studio(StudioDetails {
                    session_type: studio.session_type,
                    package: Some(StudioPackageRef {
                        name: package.name.to_string(),
                        duration_minutes: package.duration_minutes,
                        photos: package.photos,
                        print_included: package.print_included,
                    }),
                    deliverables: studio.deliverables.clone(),
                    price,
                    backdrop: studio.backdrop.clone(),
                    props: studio.props.clone(),
                })
            }
            CreateProjectKind::Corporate(corporate) => {
                // An override replaces the table price entirely, so the rate
                // table is only consulted when none is given (portrait/other
                // have no table entry and require the override).
                let price = match corporate.price_override {
                    Some(p) => pricing::apply_override(0, Some(p))?,
                    None => pricing::corporate_price(
                        corporate.event_type,
                        input.country,
                        &corporate.deliverables,
                    )?,
                };
                ProjectKind::Corporate(CorporateDetails {
                    event_type: corporate.event_type,
                    location: corporate.location.clone(),
                    company: corporate.company.clone(),
                    attendees: corporate.attendees,
                    requirements: corporate.requirements.clone(),
                    deliverables: corporate.deliverables,
                    price,
                })
            }
        };

        let project = Project {
            id,
            client: input.client,
            date: input.date,
            email: input.email,
            phone: input.phone,
            country: input.country,
            delivery_days: input.delivery_days,
            status: ProjectStatus::EnCours,
            notes: input.notes,
            tags: Vec::new(),
            season_id: input.season_id,
            activity_log: Vec::new(),
            documents: Vec::new(),
            kind,
        };

        inner.next_id += 1;
        inner.projects.insert(id, project.clone());
        tracing::info!(project_id = id, client = %project.client, "Project created");

        self.bus.publish(
            StudioEvent::new(event_types::PROJECT_CREATED)
                .with_project(id)
                .with_payload(serde_json::json!({ "client": project.client })),
        );

        Ok(project)
    }

    /// Fetch a snapshot of one project.
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.inner
            .read()
            .expect("project store lock poisoned")
            .projects
            .get(&id)
            .cloned()
    }

    /// All projects in creation order (ascending id).
    pub fn list(&self) -> Vec<Project> {
        let inner = self.inner.read().expect("project store lock poisoned");
        let mut projects: Vec<Project> = inner.projects.values().cloned().collect();
        projects.sort_by_key(|p| p.id);
        projects
    }

    /// Projects matching `filter`, in creation order.
    pub fn search(&self, filter: &ProjectFilter) -> Vec<Project> {
        self.list()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect()
    }

    /// Shallow-merge the provided fields into the project and append one
    /// `update` activity-log entry carrying them. Unknown id is a no-op
    /// returning `None`.
    pub fn update(&self, id: ProjectId, input: UpdateProject) -> Option<Project> {
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let project = inner.projects.get_mut(&id)?;

        let details = serde_json::to_value(&input).unwrap_or(serde_json::Value::Null);

        if let Some(client) = input.client {
            project.client = client;
        }
        if let Some(date) = input.date {
            project.date = date;
        }
        if let Some(email) = input.email {
            project.email = email;
        }
        if let Some(phone) = input.phone {
            project.phone = phone;
        }
        if let Some(country) = input.country {
            project.country = country;
        }
        if let Some(delivery_days) = input.delivery_days {
            project.delivery_days = delivery_days;
        }
        if let Some(status) = input.status {
            project.status = status;
        }
        if let Some(notes) = input.notes {
            project.notes = notes;
        }
        if let Some(tags) = input.tags {
            project.tags = tags;
        }
        if let Some(season_id) = input.season_id {
            project.season_id = Some(season_id);
        }

        project.log_activity(ActivityLogEntry {
            id: Uuid::new_v4().to_string(),
            kind: "update".into(),
            description: "Projet mis à jour".into(),
            user: "current-user".into(),
            timestamp: Utc::now(),
            details,
        });

        let snapshot = project.clone();
        drop(inner);

        tracing::debug!(project_id = id, "Project updated");
        self.bus
            .publish(StudioEvent::new(event_types::PROJECT_UPDATED).with_project(id));

        Some(snapshot)
    }

    /// Hard-delete a project. Returns whether a record was removed;
    /// unknown id is a no-op.
    pub fn delete(&self, id: ProjectId) -> bool {
        let removed = self
            .inner
            .write()
            .expect("project store lock poisoned")
            .projects
            .remove(&id)
            .is_some();

        if removed {
            tracing::info!(project_id = id, "Project deleted");
            self.bus
                .publish(StudioEvent::new(event_types::PROJECT_DELETED).with_project(id));
        }
        removed
    }

    /// Completion percentage for a project; `None` for unknown ids.
    pub fn progress(&self, id: ProjectId) -> Option<u8> {
        self.inner
            .read()
            .expect("project store lock poisoned")
            .projects
            .get(&id)
            .map(Project::progress)
    }

    /// Change a task's status and re-derive the project status from the
    /// updated task list. Unknown project or task ids are no-ops.
    pub fn update_task_status(
        &self,
        project_id: ProjectId,
        task_id: &str,
        status: TaskStatus,
    ) -> Option<Project> {
        let now = Utc::now();
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let project = inner.projects.get_mut(&project_id)?;

        let tasks = project.tasks_mut()?;
        let task = tasks.iter_mut().find(|t| t.id == task_id)?;
        task.set_status(status, now);

        let old_status = project.status;
        project.status = derive_status(project.tasks(), now);
        let status_changed = project.status != old_status;
        let snapshot = project.clone();
        drop(inner);

        tracing::debug!(project_id, task_id, ?status, "Task status changed");
        self.bus.publish(
            StudioEvent::new(event_types::TASK_STATUS_CHANGED)
                .with_project(project_id)
                .with_payload(serde_json::json!({ "task_id": task_id, "status": status })),
        );
        if status_changed {
            self.bus.publish(
                StudioEvent::new(event_types::PROJECT_STATUS_CHANGED)
                    .with_project(project_id)
                    .with_payload(serde_json::json!({
                        "client": snapshot.client,
                        "status": snapshot.status,
                    })),
            );
        }

        Some(snapshot)
    }

    /// Shallow-merge non-status task fields. Does not re-derive the project
    /// status; only status changes do.
    pub fn update_task(
        &self,
        project_id: ProjectId,
        task_id: &str,
        input: UpdateTask,
    ) -> Option<Task> {
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let project = inner.projects.get_mut(&project_id)?;
        let task = project
            .tasks_mut()?
            .iter_mut()
            .find(|t| t.id == task_id)?;

        if let Some(title) = input.title {
            task.title = title;
        }
        if let Some(due_date) = input.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(estimated_time) = input.estimated_time {
            task.estimated_time = estimated_time;
        }
        if let Some(actual_time) = input.actual_time {
            task.actual_time = actual_time;
        }
        if let Some(assigned_to) = input.assigned_to {
            task.assigned_to = assigned_to;
        }
        if let Some(dependencies) = input.dependencies {
            task.dependencies = dependencies;
        }

        Some(task.clone())
    }

    /// Append a comment to a task, extracting `@mentions` from its text.
    pub fn add_comment(
        &self,
        project_id: ProjectId,
        task_id: &str,
        author: String,
        text: String,
    ) -> Option<Comment> {
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let project = inner.projects.get_mut(&project_id)?;
        let task = project
            .tasks_mut()?
            .iter_mut()
            .find(|t| t.id == task_id)?;

        let comment = task
            .add_comment(Uuid::new_v4().to_string(), text, author, Utc::now())
            .clone();
        drop(inner);

        self.bus.publish(
            StudioEvent::new(event_types::COMMENT_ADDED)
                .with_project(project_id)
                .with_payload(serde_json::json!({
                    "task_id": task_id,
                    "mentions": comment.mentions,
                })),
        );

        Some(comment)
    }

    /// Add a tag to a task (set semantics). Returns the updated task.
    pub fn add_task_tag(&self, project_id: ProjectId, task_id: &str, tag: String) -> Option<Task> {
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let project = inner.projects.get_mut(&project_id)?;
        let task = project
            .tasks_mut()?
            .iter_mut()
            .find(|t| t.id == task_id)?;
        task.add_tag(tag);
        Some(task.clone())
    }

    /// Append a sub-task with default state.
    pub fn add_sub_task(
        &self,
        project_id: ProjectId,
        task_id: &str,
        title: String,
    ) -> Option<SubTask> {
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let project = inner.projects.get_mut(&project_id)?;
        let task = project
            .tasks_mut()?
            .iter_mut()
            .find(|t| t.id == task_id)?;
        Some(task.add_sub_task(Uuid::new_v4().to_string(), title).clone())
    }

    /// Change one sub-task's status without touching the parent task.
    pub fn set_sub_task_status(
        &self,
        project_id: ProjectId,
        task_id: &str,
        sub_task_id: &str,
        status: TaskStatus,
    ) -> Option<SubTask> {
        let mut inner = self.inner.write().expect("project store lock poisoned");
        let project = inner.projects.get_mut(&project_id)?;
        let task = project
            .tasks_mut()?
            .iter_mut()
            .find(|t| t.id == task_id)?;
        if !task.set_sub_task_status(sub_task_id, status) {
            return None;
        }
        task.sub_tasks.iter().find(|s| s.id == sub_task_id).cloned()
    }
}
