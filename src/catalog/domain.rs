pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{BookStatus, LibraryResult, PaginatedResult};

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    // conditional on the version carried by the book
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn set_availability(&self, id: &str, available: bool) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_status(&self, status: BookStatus,
                                  page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>>;
}
