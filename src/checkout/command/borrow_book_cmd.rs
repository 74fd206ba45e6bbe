use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::BorrowOutcome;
use crate::core::command::{Command, CommandError};

pub struct BorrowBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl BorrowBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub(crate) patron_id: String,
    pub(crate) book_id: String,
}

impl BorrowBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub outcome: BorrowOutcome,
}

impl BorrowBookCommandResponse {
    pub fn new(outcome: BorrowOutcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.checkout_service.borrow(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::PatronKind;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
    use crate::patrons::factory::create_patron_service;

    #[tokio::test]
    async fn test_should_run_borrow_book() {
        let store = RepositoryStore::default();
        let config = Configuration::new("test");
        let add_book = AddBookCommand::new(create_catalog_service(&config, &store).await);
        let add_patron = AddPatronCommand::new(create_patron_service(&config, &store).await);
        let borrow = BorrowBookCommand::new(create_checkout_service(&config, &store).await);

        let book = add_book.execute(AddBookCommandRequest::new("1984", "George Orwell", "9780451524935"))
            .await.expect("should add book").book;
        let alice = add_patron.execute(AddPatronCommandRequest::new("Alice", PatronKind::Standard))
            .await.expect("should add patron").patron;
        let bob = add_patron.execute(AddPatronCommandRequest::new("Bob", PatronKind::Vip))
            .await.expect("should add patron").patron;

        let res = borrow.execute(BorrowBookCommandRequest::new(alice.patron_id.as_str(), book.book_id.as_str()))
            .await.expect("should borrow");
        assert_eq!("Alice borrowed \"1984\".", res.outcome.to_string());
        let res = borrow.execute(BorrowBookCommandRequest::new(bob.patron_id.as_str(), book.book_id.as_str()))
            .await.expect("should borrow");
        assert_eq!("Bob (VIP) could not borrow \"1984\" as it's currently borrowed.", res.outcome.to_string());

        let res = borrow.execute(BorrowBookCommandRequest::new("missing", book.book_id.as_str())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
