use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::policy::policy_for;
use crate::checkout::dto::{BorrowOutcome, ReturnOutcome};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::{Patron, PatronService};
use crate::patrons::dto::PatronDto;

const MAX_LOAN_ATTEMPTS: usize = 3;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    patron_service: Box<dyn PatronService>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, patron_service: Box<dyn PatronService>,
                      catalog_service: Box<dyn CatalogService>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            patron_service,
            catalog_service,
            events_publisher,
        }
    }

    // applies change to a fresh copy of the patron's loans and writes it back,
    // reloading when another writer got there first. change returns None when
    // there is nothing to write.
    async fn update_loans<F, R>(&self, patron_id: &str, change: F) -> LibraryResult<(PatronDto, Option<R>)>
        where F: Fn(&mut Vec<String>) -> Option<R> + Send + Sync, R: Send {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut patron = self.patron_service.find_patron_by_id(patron_id).await?;
            let applied = match change(&mut patron.borrowed_book_ids) {
                Some(applied) => applied,
                None => return Ok((patron, None)),
            };
            match self.patron_service.update_patron(&patron).await {
                Ok(updated) => return Ok((updated, Some(applied))),
                Err(err) if err.retryable() && attempt < MAX_LOAN_ATTEMPTS => {
                    debug!(patron_id, attempt, "patron changed concurrently, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }

    // the loan is already committed when this runs, so a lost event is only logged
    async fn publish<T: serde::Serialize + Sync>(&self, name: &str, patron_id: &str, book_id: &str, data: &T) {
        let metadata = HashMap::from([
            ("branch_id".to_string(), self.branch_id.to_string()),
            ("patron_id".to_string(), patron_id.to_string()),
        ]);
        let res = match DomainEvent::updated(name, "checkout", book_id, &metadata, data) {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            warn!(patron_id, book_id, "could not publish {}: {}", name, err);
        }
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn borrow(&self, patron_id: &str, book_id: &str) -> LibraryResult<BorrowOutcome> {
        let patron = self.patron_service.find_patron_by_id(patron_id).await?;
        let mut book = self.catalog_service.find_book_by_id(book_id).await?;
        let policy = policy_for(patron.kind());
        if !book.is_available() {
            debug!(patron_id, book_id, "{} is not on the shelf", book.title());
            return Ok(policy.unavailable(&patron, &book));
        }

        // the write only lands if nobody changed the book since it was read
        book.set_available(false);
        match self.catalog_service.update_book(&book).await {
            Ok(_) => {}
            Err(err) if err.retryable() => {
                warn!(patron_id, book_id, "{} was lent to someone else first", book.title());
                return Ok(policy.unavailable(&patron, &book));
            }
            Err(err) => return Err(err),
        }

        let loan = book.book_id.to_string();
        if let Err(err) = self.update_loans(patron_id, |ids| {
            ids.push(loan.to_string());
            Some(())
        }).await {
            if let Err(rollback) = self.catalog_service.set_availability(book_id, true).await {
                warn!(book_id, "could not put {} back on the shelf: {}", book.title(), rollback);
            }
            return Err(err);
        }

        let outcome = policy.granted(&patron, &book);
        self.publish("book_borrowed", patron_id, book_id, &outcome).await;
        info!(patron_id, book_id, "{}", outcome);
        Ok(outcome)
    }

    async fn return_book(&self, patron_id: &str, book_id: &str) -> LibraryResult<ReturnOutcome> {
        let book = self.catalog_service.find_book_by_id(book_id).await?;
        let (patron, removed_at) = self.update_loans(patron_id, |ids| {
            let ndx = ids.iter().position(|id| id == book_id)?;
            ids.remove(ndx);
            Some(ndx)
        }).await?;

        let (name, title) = (patron.name().to_string(), book.title().to_string());
        let ndx = match removed_at {
            Some(ndx) => ndx,
            None => {
                debug!(patron_id, book_id, "{} does not hold {}", name, title);
                return Ok(ReturnOutcome::NotBorrowed { patron: name, title });
            }
        };

        // a book off every list must not stay marked borrowed, so the loan goes back
        if let Err(err) = self.catalog_service.set_availability(book_id, true).await {
            if let Err(restore) = self.update_loans(patron_id, |ids| {
                ids.insert(ndx.min(ids.len()), book_id.to_string());
                Some(())
            }).await {
                warn!(patron_id, book_id, "could not give {} back to {}: {}", title, name, restore);
            }
            return Err(err);
        }
        let outcome = ReturnOutcome::Returned { patron: name, title };
        self.publish("book_returned", patron_id, book_id, &outcome).await;
        info!(patron_id, book_id, "{}", outcome);
        Ok(outcome)
    }
}
