use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryResult, PaginatedResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    max_page_size: usize,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            max_page_size: config.max_page_size,
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", "books", book.book_id.as_str(), &HashMap::new(), book)?).await?;
        info!(book_id = book.book_id.as_str(), "added book {}", book.title);
        Ok(book.clone())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await?;
        let updated = self.find_book_by_id(book.book_id.as_str()).await?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "books", "books", book.book_id.as_str(), &HashMap::new(), &updated)?).await?;
        Ok(updated)
    }

    async fn set_availability(&self, id: &str, available: bool) -> LibraryResult<BookDto> {
        let mut book = self.find_book_by_id(id).await?;
        book.set_available(available);
        debug!(book_id = id, "marking book {} as {}", book.title, book.book_status);
        self.update_book(&book).await
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(
            &HashMap::from([("isbn".to_string(), isbn.to_string())]), None, self.max_page_size).await?;
        Ok(res.records.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_status(&self, status: BookStatus,
                                  page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>> {
        let res = self.book_repository.find_by_status(status, page, page_size).await?;
        let records = res.records.iter().map(BookDto::from).collect();
        Ok(PaginatedResult::new(page, res.page_size, res.next_page, records))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            book_status: other.book_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            book_status: other.book_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
