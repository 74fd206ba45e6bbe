pub mod policy;
pub mod service;

use async_trait::async_trait;
use crate::checkout::dto::{BorrowOutcome, ReturnOutcome};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    // a book that cannot be lent is an outcome, not an error
    async fn borrow(&self, patron_id: &str, book_id: &str) -> LibraryResult<BorrowOutcome>;
    async fn return_book(&self, patron_id: &str, book_id: &str) -> LibraryResult<ReturnOutcome>;
}
