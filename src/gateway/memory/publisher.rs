use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use tracing::debug;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher records published events; clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<RwLock<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        let events = self.events.read().map_err(|err| LibraryError::runtime(
            format!("event log lock poisoned {}", err).as_str(), None))?;
        Ok(events.clone())
    }

    pub fn events_named(&self, name: &str) -> Result<Vec<DomainEvent>, LibraryError> {
        Ok(self.events()?.into_iter().filter(|e| e.name == name).collect())
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn get_topics(&self) -> Result<Vec<String>, LibraryError> {
        let mut topics: Vec<String> = vec![];
        for event in self.events()? {
            if !topics.contains(&event.name) {
                topics.push(event.name);
            }
        }
        Ok(topics)
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.write().map_err(|err| LibraryError::runtime(
            format!("event log lock poisoned {}", err).as_str(), None))?;
        debug!("recording event {} {}", event.name, event.key);
        events.push(event.clone());
        Ok(())
    }
}
