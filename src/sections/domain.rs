pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::sections::dto::SectionDto;
use crate::sections::report::SectionReport;

#[async_trait]
pub trait SectionService: Sync + Send {
    async fn add_section(&self, section: &SectionDto) -> LibraryResult<SectionDto>;
    async fn find_section_by_id(&self, id: &str) -> LibraryResult<SectionDto>;
    async fn find_section_by_name(&self, name: &str) -> LibraryResult<Vec<SectionDto>>;
    // appends to the end of the section; the same book may be added twice
    async fn add_book(&self, section_id: &str, book_id: &str) -> LibraryResult<SectionDto>;
    async fn available_books(&self, section_id: &str) -> LibraryResult<usize>;
    async fn calculate_total_books_available(&self, section_id: &str) -> LibraryResult<usize>;
    async fn list_books(&self, section_id: &str) -> LibraryResult<String>;
    async fn report(&self, section_id: &str) -> LibraryResult<SectionReport>;
}
