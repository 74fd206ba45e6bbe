use std::collections::HashMap;
use async_trait::async_trait;
use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::sections::domain::model::SectionEntity;
use crate::sections::domain::SectionService;
use crate::sections::dto::SectionDto;
use crate::sections::report::SectionReport;
use crate::sections::repository::SectionRepository;

const MAX_SHELVE_ATTEMPTS: usize = 3;

pub(crate) struct SectionServiceImpl {
    section_repository: Box<dyn SectionRepository>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl SectionServiceImpl {
    pub(crate) fn new(_config: &Configuration, section_repository: Box<dyn SectionRepository>,
                      catalog_service: Box<dyn CatalogService>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            section_repository,
            catalog_service,
            events_publisher,
        }
    }

    // resolves every key against the registry so the view reflects current state
    async fn books(&self, section: &SectionDto) -> LibraryResult<Vec<BookDto>> {
        let mut books = vec![];
        for book_id in &section.book_ids {
            books.push(self.catalog_service.find_book_by_id(book_id).await?);
        }
        Ok(books)
    }
}

#[async_trait]
impl SectionService for SectionServiceImpl {
    async fn add_section(&self, section: &SectionDto) -> LibraryResult<SectionDto> {
        let _ = self.section_repository.create(&SectionEntity::from(section)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "sections", "sections", section.section_id.as_str(), &HashMap::new(), section)?).await?;
        info!(section_id = section.section_id.as_str(), "added section {}", section.name);
        Ok(section.clone())
    }

    async fn find_section_by_id(&self, id: &str) -> LibraryResult<SectionDto> {
        self.section_repository.get(id).await.map(|s| SectionDto::from(&s))
    }

    async fn find_section_by_name(&self, name: &str) -> LibraryResult<Vec<SectionDto>> {
        let res = self.section_repository.find_by_name(name).await?;
        Ok(res.iter().map(SectionDto::from).collect())
    }

    async fn add_book(&self, section_id: &str, book_id: &str) -> LibraryResult<SectionDto> {
        let book = self.catalog_service.find_book_by_id(book_id).await?;
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut section = self.find_section_by_id(section_id).await?;
            section.book_ids.push(book.book_id.to_string());
            match self.section_repository.update(&SectionEntity::from(&section)).await {
                Ok(_) => {
                    let updated = self.find_section_by_id(section_id).await?;
                    let _ = self.events_publisher.publish(&DomainEvent::updated(
                        "sections", "sections", section_id, &HashMap::new(), &updated)?).await?;
                    info!(section_id, book_id, "shelved {} in {}", book.title, updated.name);
                    return Ok(updated);
                }
                Err(err) if err.retryable() && attempt < MAX_SHELVE_ATTEMPTS => continue,
                Err(err) => return Err(err),
            }
        }
    }

    async fn available_books(&self, section_id: &str) -> LibraryResult<usize> {
        Ok(self.report(section_id).await?.available())
    }

    async fn calculate_total_books_available(&self, section_id: &str) -> LibraryResult<usize> {
        self.available_books(section_id).await
    }

    async fn list_books(&self, section_id: &str) -> LibraryResult<String> {
        Ok(self.report(section_id).await?.list_books())
    }

    async fn report(&self, section_id: &str) -> LibraryResult<SectionReport> {
        let section = self.find_section_by_id(section_id).await?;
        let books = self.books(&section).await?;
        Ok(SectionReport::new(section.name.as_str(), &books))
    }
}

impl From<&SectionEntity> for SectionDto {
    fn from(other: &SectionEntity) -> Self {
        Self {
            section_id: other.section_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            book_ids: other.book_ids.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&SectionDto> for SectionEntity {
    fn from(other: &SectionDto) -> Self {
        Self {
            section_id: other.section_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            book_ids: other.book_ids.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
