use std::collections::HashMap;
use async_trait::async_trait;
use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;

pub(crate) struct PatronServiceImpl {
    patron_repository: Box<dyn PatronRepository>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl PatronServiceImpl {
    pub(crate) fn new(_config: &Configuration, patron_repository: Box<dyn PatronRepository>,
                      catalog_service: Box<dyn CatalogService>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        PatronServiceImpl {
            patron_repository,
            catalog_service,
            events_publisher,
        }
    }
}

#[async_trait]
impl PatronService for PatronServiceImpl {
    async fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto> {
        let _ = self.patron_repository.create(&PatronEntity::from(patron)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "patrons", "patrons", patron.patron_id.as_str(), &HashMap::new(), patron)?).await?;
        info!(patron_id = patron.patron_id.as_str(), "added {} patron {}", patron.kind, patron.name);
        Ok(patron.clone())
    }

    async fn update_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto> {
        let _ = self.patron_repository.update(&PatronEntity::from(patron)).await?;
        self.find_patron_by_id(patron.patron_id.as_str()).await
    }

    async fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto> {
        self.patron_repository.get(id).await.map(|p| PatronDto::from(&p))
    }

    async fn find_patron_by_name(&self, name: &str) -> LibraryResult<Vec<PatronDto>> {
        let res = self.patron_repository.find_by_name(name).await?;
        Ok(res.iter().map(PatronDto::from).collect())
    }

    async fn find_borrowed_books(&self, id: &str) -> LibraryResult<Vec<BookDto>> {
        let patron = self.find_patron_by_id(id).await?;
        let mut books = vec![];
        for book_id in &patron.borrowed_book_ids {
            books.push(self.catalog_service.find_book_by_id(book_id).await?);
        }
        Ok(books)
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            kind: other.kind,
            priority: other.priority,
            borrowed_book_ids: other.borrowed_book_ids.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            kind: other.kind,
            priority: other.priority,
            borrowed_book_ids: other.borrowed_book_ids.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
