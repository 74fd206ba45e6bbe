use tracing::warn;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::patrons::repository::PatronRepository;
use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;
use crate::utils::memory::ensure_table;

pub(crate) async fn create_patron_repository(store: &RepositoryStore) -> Box<dyn PatronRepository> {
    // the table outlives every repository built over the same store
    if let Err(err) = ensure_table(store.client(), "patrons", "patron_id") {
        warn!("could not prepare patrons table: {}", err);
    }
    Box::new(MemoryPatronRepository::new(store.client().clone(), "patrons"))
}

pub async fn create_patron_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn PatronService> {
    let patron_repo = create_patron_repository(store).await;
    let catalog_svc = create_catalog_service(config, store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(PatronServiceImpl::new(config, patron_repo, catalog_svc, publisher))
}
