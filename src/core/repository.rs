use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // creates or replaces an entity keyed by its id
    async fn save(&self, entity: &Entity) -> LibraryResult<usize>;

    // finds an entity, unknown ids are not an error
    async fn find_by_id(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // all entities in a stable order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::InMemory => { GatewayPublisherVia::Logs }
        }
    }
}
