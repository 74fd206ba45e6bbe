use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::factory::create_catalog_service;
use crate::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::factory::create_checkout_service;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
use crate::patrons::dto::PatronDto;
use crate::patrons::factory::create_patron_service;
use crate::core::library::PatronKind;
use crate::sections::command::add_section_cmd::{AddSectionCommand, AddSectionCommandRequest};
use crate::sections::command::section_report_cmd::{SectionReportCommand, SectionReportCommandRequest};
use crate::sections::command::shelve_book_cmd::{ShelveBookCommand, ShelveBookCommandRequest};
use crate::sections::dto::SectionDto;
use crate::sections::factory::create_section_service;
use tracing::info;

struct Desk {
    add_book: AddBookCommand,
    add_section: AddSectionCommand,
    shelve_book: ShelveBookCommand,
    section_report: SectionReportCommand,
    add_patron: AddPatronCommand,
    borrow_book: BorrowBookCommand,
    return_book: ReturnBookCommand,
}

impl Desk {
    async fn new(config: &Configuration, store: &RepositoryStore) -> Self {
        Self {
            add_book: AddBookCommand::new(create_catalog_service(config, store).await),
            add_section: AddSectionCommand::new(create_section_service(config, store).await),
            shelve_book: ShelveBookCommand::new(create_section_service(config, store).await),
            section_report: SectionReportCommand::new(create_section_service(config, store).await),
            add_patron: AddPatronCommand::new(create_patron_service(config, store).await),
            borrow_book: BorrowBookCommand::new(create_checkout_service(config, store).await),
            return_book: ReturnBookCommand::new(create_checkout_service(config, store).await),
        }
    }

    async fn book(&self, title: &str, author: &str, isbn: &str) -> Result<BookDto, CommandError> {
        Ok(self.add_book.execute(AddBookCommandRequest::new(title, author, isbn)).await?.book)
    }

    async fn section(&self, name: &str, books: &[&BookDto]) -> Result<SectionDto, CommandError> {
        let mut section = self.add_section.execute(AddSectionCommandRequest::new(name)).await?.section;
        for book in books {
            section = self.shelve_book.execute(ShelveBookCommandRequest::new(
                section.section_id.as_str(), book.book_id.as_str())).await?.section;
        }
        Ok(section)
    }

    async fn patron(&self, name: &str, kind: PatronKind) -> Result<PatronDto, CommandError> {
        Ok(self.add_patron.execute(AddPatronCommandRequest::new(name, kind)).await?.patron)
    }

    async fn borrow(&self, patron: &PatronDto, book: &BookDto) -> Result<String, CommandError> {
        let res = self.borrow_book.execute(BorrowBookCommandRequest::new(
            patron.patron_id.as_str(), book.book_id.as_str())).await?;
        Ok(res.outcome.to_string())
    }

    async fn give_back(&self, patron: &PatronDto, book: &BookDto) -> Result<String, CommandError> {
        let res = self.return_book.execute(ReturnBookCommandRequest::new(
            patron.patron_id.as_str(), book.book_id.as_str())).await?;
        Ok(res.outcome.to_string())
    }

    async fn availability(&self, section: &SectionDto, phase: Option<&str>) -> Result<String, CommandError> {
        let report = self.section_report.execute(SectionReportCommandRequest::new(section.section_id.as_str())).await?.report;
        Ok(match phase {
            Some(phase) => report.availability_line_after(phase),
            None => report.availability_line(),
        })
    }

    async fn listing(&self, section: &SectionDto) -> Result<String, CommandError> {
        let report = self.section_report.execute(SectionReportCommandRequest::new(section.section_id.as_str())).await?.report;
        Ok(report.listing())
    }
}

/// Runs the fixed front-desk scenario against `store` and returns the lines
/// it would print, in order. A section listing is a single multi-line entry.
pub async fn run_script(config: &Configuration, store: &RepositoryStore) -> Result<Vec<String>, CommandError> {
    let desk = Desk::new(config, store).await;
    let mut lines = vec![];

    let gatsby = desk.book("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565").await?;
    let orwell = desk.book("1984", "George Orwell", "9780451524935").await?;
    let crime = desk.book("Crime and Punishment", "Fyodor Dostoevsky", "9780486454115").await?;
    let hobbit = desk.book("The Hobbit", "J.R.R. Tolkien", "9780547928227").await?;

    let fiction = desk.section("Fiction", &[&gatsby, &orwell, &crime]).await?;
    let science = desk.section("Science", &[&hobbit]).await?;

    let alice = desk.patron("Alice", PatronKind::Standard).await?;
    let bob = desk.patron("Bob", PatronKind::Vip).await?;
    info!(branch_id = config.branch_id.as_str(), "library ready");

    lines.push(desk.borrow(&alice, &gatsby).await?);
    lines.push(desk.borrow(&bob, &orwell).await?);
    lines.push(desk.borrow(&bob, &crime).await?);
    lines.push(desk.borrow(&alice, &hobbit).await?);

    lines.push(desk.availability(&fiction, None).await?);
    lines.push(desk.availability(&science, None).await?);

    lines.push(desk.give_back(&alice, &gatsby).await?);
    lines.push(desk.give_back(&bob, &orwell).await?);

    lines.push(desk.availability(&fiction, Some("after returns")).await?);
    lines.push(desk.availability(&science, Some("after returns")).await?);

    lines.push(desk.listing(&fiction).await?);
    lines.push(desk.listing(&science).await?);
    Ok(lines)
}
