use tracing::warn;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::sections::domain::SectionService;
use crate::sections::domain::service::SectionServiceImpl;
use crate::sections::repository::SectionRepository;
use crate::sections::repository::memory_section_repository::MemorySectionRepository;
use crate::utils::memory::ensure_table;

pub(crate) async fn create_section_repository(store: &RepositoryStore) -> Box<dyn SectionRepository> {
    // the table outlives every repository built over the same store
    if let Err(err) = ensure_table(store.client(), "sections", "section_id") {
        warn!("could not prepare sections table: {}", err);
    }
    Box::new(MemorySectionRepository::new(store.client().clone(), "sections"))
}

pub async fn create_section_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn SectionService> {
    let section_repo = create_section_repository(store).await;
    let catalog_svc = create_catalog_service(config, store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(SectionServiceImpl::new(config, section_repo, catalog_svc, publisher))
}
