use tracing::warn;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;
use crate::utils::memory::ensure_table;

pub(crate) async fn create_book_repository(store: &RepositoryStore) -> Box<dyn BookRepository> {
    // the table outlives every repository built over the same store
    if let Err(err) = ensure_table(store.client(), "books", "book_id") {
        warn!("could not prepare books table: {}", err);
    }
    Box::new(MemoryBookRepository::new(store.client().clone(), "books"))
}
