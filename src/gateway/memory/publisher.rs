use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events around, clones share the same event list.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<RwLock<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_publish_to_memory() {
        let publisher = MemoryPublisher::new();
        let observer = publisher.clone();
        let event = DomainEvent::borrowed("book_borrowed", "catalog", "B1", &HashMap::new(), &"B1").expect("build event");
        publisher.publish(&event).await.expect("should publish");

        let events = observer.events().await;
        assert_eq!(1, events.len());
        assert_eq!(DomainEventType::Borrowed, events[0].kind);
        assert_eq!("B1", events[0].key.as_str());
    }
}
