use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::gateway::GatewayPublisherVia;
use crate::utils::memory::MemoryClient;

#[async_trait]
pub(crate) trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity if its version still matches the stored version
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // find by attribute equality
    async fn query(&self, predicate: &HashMap::<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Entity>>;
}

// RepositoryStore bundles the shared in-memory registry with the way domain events leave the process.
#[derive(Debug, Clone, Default)]
pub struct RepositoryStore {
    client: MemoryClient,
    via: GatewayPublisherVia,
}

impl RepositoryStore {
    pub fn new(via: GatewayPublisherVia) -> Self {
        Self {
            client: MemoryClient::new(),
            via,
        }
    }

    pub fn gateway_publisher(&self) -> &GatewayPublisherVia {
        &self.via
    }

    pub(crate) fn client(&self) -> &MemoryClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_build_store() {
        let store = RepositoryStore::default();
        assert!(matches!(store.gateway_publisher(), GatewayPublisherVia::Logs));
        let store = RepositoryStore::new(GatewayPublisherVia::Memory(MemoryPublisher::new()));
        assert!(matches!(store.gateway_publisher(), GatewayPublisherVia::Memory(_)));
    }
}
