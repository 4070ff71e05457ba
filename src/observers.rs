use tracing::info;

use crate::events::CatalogEvent;

/// Trait for catalog change observation
pub trait CatalogObserver {
    /// Called after a mutation has been applied
    fn on_event(&self, event: &CatalogEvent);
}

/// Emits every catalog mutation as a structured `tracing` event
#[derive(Debug)]
pub struct EventLogger;

impl CatalogObserver for EventLogger {
    fn on_event(&self, event: &CatalogEvent) {
        match event {
            CatalogEvent::Added { title, author } => {
                info!(%title, %author, "book added");
            }
            CatalogEvent::Borrowed { user, title } => {
                info!(%user, %title, "book borrowed");
            }
            CatalogEvent::Returned { user, title } => {
                info!(%user, %title, "book returned");
            }
        }
    }
}
