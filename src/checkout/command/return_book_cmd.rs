use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::ReturnOutcome;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub(crate) patron_id: String,
    pub(crate) book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub outcome: ReturnOutcome,
}

impl ReturnBookCommandResponse {
    pub fn new(outcome: ReturnOutcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.return_book(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::PatronKind;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
    use crate::patrons::factory::create_patron_service;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let store = RepositoryStore::default();
        let config = Configuration::new("test");
        let add_book = AddBookCommand::new(create_catalog_service(&config, &store).await);
        let get_book = GetBookCommand::new(create_catalog_service(&config, &store).await);
        let add_patron = AddPatronCommand::new(create_patron_service(&config, &store).await);
        let borrow = BorrowBookCommand::new(create_checkout_service(&config, &store).await);
        let give_back = ReturnBookCommand::new(create_checkout_service(&config, &store).await);

        let book = add_book.execute(AddBookCommandRequest::new("The Hobbit", "J.R.R. Tolkien", "9780547928227"))
            .await.expect("should add book").book;
        let alice = add_patron.execute(AddPatronCommandRequest::new("Alice", PatronKind::Standard))
            .await.expect("should add patron").patron;
        let _ = borrow.execute(BorrowBookCommandRequest::new(alice.patron_id.as_str(), book.book_id.as_str()))
            .await.expect("should borrow");

        let res = give_back.execute(ReturnBookCommandRequest::new(alice.patron_id.as_str(), book.book_id.as_str()))
            .await.expect("should return");
        assert_eq!("Alice returned \"The Hobbit\".", res.outcome.to_string());
        let res = give_back.execute(ReturnBookCommandRequest::new(alice.patron_id.as_str(), book.book_id.as_str()))
            .await.expect("should return");
        assert_eq!("\"The Hobbit\" was not borrowed by Alice.", res.outcome.to_string());

        let loaded = get_book.execute(GetBookCommandRequest::new(book.book_id.to_string())).await.expect("should get book");
        assert!(loaded.book.is_available());
    }
}
