use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryRepository;

pub(crate) type MemoryBookRepository = MemoryRepository<BookEntity>;

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_status(&self, status: BookStatus,
                            page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        self.query(&HashMap::from([("book_status".to_string(), status.to_string())]), page, page_size).await
    }
}
