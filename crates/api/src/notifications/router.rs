//! Event-to-notification routing engine.
//!
//! [`NotificationRouter`] subscribes to the event bus and writes an inbox
//! notification for the events worth surfacing to the team. Routine churn
//! (plain project updates, task reopenings) is deliberately not surfaced.

use std::sync::Arc;

use tokio::sync::broadcast;

use marvelous_events::{event_types, StudioEvent};
use marvelous_store::{NotificationKind, NotificationStore};

/// Routes domain events to inbox notifications.
pub struct NotificationRouter {
    store: Arc<NotificationStore>,
}

impl NotificationRouter {
    pub fn new(store: Arc<NotificationStore>) -> Self {
        Self { store }
    }

    /// Run the main routing loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each event.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](marvelous_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<StudioEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.route_event(&event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    /// Turn a single event into a notification, when it warrants one.
    fn route_event(&self, event: &StudioEvent) {
        let link = event.project_id.map(|id| format!("/projects/{id}"));
        let client = event.payload["client"].as_str().unwrap_or("").to_string();

        match event.event_type.as_str() {
            event_types::PROJECT_CREATED => {
                self.store.push(
                    "Nouveau projet".into(),
                    if client.is_empty() {
                        "Projet créé avec succès".into()
                    } else {
                        format!("Projet créé avec succès : {client}")
                    },
                    NotificationKind::Info,
                    link,
                );
            }
            event_types::PROJECT_DELETED => {
                self.store.push(
                    "Projet supprimé".into(),
                    "Le projet a été supprimé définitivement".into(),
                    NotificationKind::Warning,
                    None,
                );
            }
            event_types::PROJECT_STATUS_CHANGED => {
                match event.payload["status"].as_str() {
                    Some("en_retard") => {
                        self.store.push(
                            "Projet en retard".into(),
                            format!("Le projet {client} a des tâches en retard"),
                            NotificationKind::Warning,
                            link,
                        );
                    }
                    Some("termine") => {
                        self.store.push(
                            "Projet terminé".into(),
                            format!("Toutes les tâches du projet {client} sont terminées"),
                            NotificationKind::Info,
                            link,
                        );
                    }
                    // Back to en_cours / a_venir: routine, no notification.
                    _ => {}
                }
            }
            event_types::COMMENT_ADDED => {
                let mentions: Vec<&str> = event.payload["mentions"]
                    .as_array()
                    .map(|arr| arr.iter().filter_map(|m| m.as_str()).collect())
                    .unwrap_or_default();
                if !mentions.is_empty() {
                    self.store.push(
                        "Nouvelle mention".into(),
                        format!("Mention dans un commentaire : @{}", mentions.join(", @")),
                        NotificationKind::Info,
                        link,
                    );
                }
            }
            event_types::PROJECT_UPDATED | event_types::TASK_STATUS_CHANGED => {}
            other => {
                tracing::debug!(event_type = other, "Ignoring unrouted event type");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marvelous_events::EventBus;

    fn router_with_store() -> (NotificationRouter, Arc<NotificationStore>) {
        let store = Arc::new(NotificationStore::new());
        (NotificationRouter::new(Arc::clone(&store)), store)
    }

    #[test]
    fn project_creation_produces_an_info_notification() {
        let (router, store) = router_with_store();
        router.route_event(
            &StudioEvent::new(event_types::PROJECT_CREATED)
                .with_project(3)
                .with_payload(serde_json::json!({ "client": "Alice & Bob" })),
        );

        let inbox = store.list(false);
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, NotificationKind::Info);
        assert_eq!(inbox[0].link.as_deref(), Some("/projects/3"));
        assert!(inbox[0].message.contains("Alice & Bob"));
    }

    #[test]
    fn late_status_produces_a_warning() {
        let (router, store) = router_with_store();
        router.route_event(
            &StudioEvent::new(event_types::PROJECT_STATUS_CHANGED)
                .with_project(1)
                .with_payload(serde_json::json!({ "client": "Alice & Bob", "status": "en_retard" })),
        );

        let inbox = store.list(false);
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, NotificationKind::Warning);
    }

    #[test]
    fn comments_without_mentions_stay_silent() {
        let (router, store) = router_with_store();
        router.route_event(
            &StudioEvent::new(event_types::COMMENT_ADDED)
                .with_project(1)
                .with_payload(serde_json::json!({ "task_id": "1-task-0", "mentions": [] })),
        );
        assert!(store.list(false).is_empty());
    }

    #[tokio::test]
    async fn run_loop_consumes_bus_events_until_close() {
        let (router, store) = router_with_store();
        let bus = EventBus::default();
        let handle = tokio::spawn(router.run(bus.subscribe()));

        bus.publish(
            StudioEvent::new(event_types::PROJECT_CREATED)
                .with_project(1)
                .with_payload(serde_json::json!({ "client": "Claire" })),
        );
        drop(bus);

        handle.await.unwrap();
        assert_eq!(store.list(false).len(), 1);
    }
}
