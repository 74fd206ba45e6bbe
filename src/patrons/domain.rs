pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::domain::Identifiable;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, PatronKind};
use crate::patrons::dto::PatronDto;

#[async_trait]
pub trait PatronService: Sync + Send {
    async fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto>;
    // conditional on the version carried by the patron
    async fn update_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto>;
    async fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto>;
    async fn find_patron_by_name(&self, name: &str) -> LibraryResult<Vec<PatronDto>>;
    // books currently held, in borrow order
    async fn find_borrowed_books(&self, id: &str) -> LibraryResult<Vec<BookDto>>;
}

pub trait Patron: Identifiable {
    fn name(&self) -> &str;
    fn kind(&self) -> PatronKind;
    fn has_priority(&self) -> bool;
    fn borrowed_book_ids(&self) -> &[String];

    fn is_vip(&self) -> bool {
        self.kind() == PatronKind::Vip
    }

    fn holds(&self, book_id: &str) -> bool {
        self.borrowed_book_ids().iter().any(|id| id == book_id)
    }
}
