use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::sections::domain::SectionService;
use crate::sections::dto::SectionDto;

pub struct ShelveBookCommand {
    section_service: Box<dyn SectionService>,
}

impl ShelveBookCommand {
    pub fn new(section_service: Box<dyn SectionService>) -> Self {
        Self {
            section_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShelveBookCommandRequest {
    pub(crate) section_id: String,
    pub(crate) book_id: String,
}

impl ShelveBookCommandRequest {
    pub fn new(section_id: &str, book_id: &str) -> Self {
        Self {
            section_id: section_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShelveBookCommandResponse {
    pub section: SectionDto,
}

#[async_trait]
impl Command<ShelveBookCommandRequest, ShelveBookCommandResponse> for ShelveBookCommand {
    async fn execute(&self, req: ShelveBookCommandRequest) -> Result<ShelveBookCommandResponse, CommandError> {
        let section = self.section_service.add_book(req.section_id.as_str(), req.book_id.as_str()).await?;
        Ok(ShelveBookCommandResponse { section })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::sections::command::shelve_book_cmd::{ShelveBookCommand, ShelveBookCommandRequest};
    use crate::sections::dto::SectionDto;
    use crate::sections::factory;

    #[tokio::test]
    async fn test_should_run_shelve_book() {
        let store = RepositoryStore::default();
        let config = Configuration::new("test");
        let catalog_svc = create_catalog_service(&config, &store).await;
        let section_svc = factory::create_section_service(&config, &store).await;
        let book = catalog_svc.add_book(&BookDto::new("1984", "George Orwell", "9780451524935")).await.expect("should add book");
        let section = section_svc.add_section(&SectionDto::new("Fiction")).await.expect("should add section");

        let cmd = ShelveBookCommand::new(section_svc);
        let res = cmd.execute(ShelveBookCommandRequest::new(section.section_id.as_str(), book.book_id.as_str()))
            .await.expect("should shelve book");
        assert_eq!(vec![book.book_id], res.section.book_ids);

        let res = cmd.execute(ShelveBookCommandRequest::new(section.section_id.as_str(), "missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
