use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::patrons::dto::PatronDto;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;

pub struct GetPatronCommand {
    patron_service: Box<dyn PatronService>,
}

impl GetPatronCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPatronCommandRequest {
    pub patron_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(patron_id: String) -> Self {
        Self {
            patron_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetPatronCommandResponse {
    pub patron: PatronDto,
    pub borrowed_books: Vec<BookDto>,
}

impl GetPatronCommandResponse {
    pub fn new(patron: PatronDto, borrowed_books: Vec<BookDto>) -> Self {
        Self {
            patron,
            borrowed_books,
        }
    }
}

#[async_trait]
impl Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand {
    async fn execute(&self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        let patron = self.patron_service.find_patron_by_id(req.patron_id.as_str()).await?;
        let borrowed_books = self.patron_service.find_borrowed_books(req.patron_id.as_str()).await?;
        Ok(GetPatronCommandResponse::new(patron, borrowed_books))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::PatronKind;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
    use crate::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest};
    use crate::patrons::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_get_patron() {
        let store = RepositoryStore::default();
        let config = Configuration::new("test");
        let add_cmd = AddPatronCommand::new(factory::create_patron_service(&config, &store).await);
        let get_cmd = GetPatronCommand::new(factory::create_patron_service(&config, &store).await);

        let add_res = add_cmd.execute(AddPatronCommandRequest::new("Bob", PatronKind::Vip)).await.expect("should add patron");
        let get_res = get_cmd.execute(GetPatronCommandRequest::new(add_res.patron.patron_id.to_string())).await.expect("should get patron");
        assert_eq!(add_res.patron.patron_id, get_res.patron.patron_id);
        assert_eq!(add_res.patron.name, get_res.patron.name);
        assert!(get_res.borrowed_books.is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_get_unknown_patron() {
        let store = RepositoryStore::default();
        let get_cmd = GetPatronCommand::new(factory::create_patron_service(&Configuration::new("test"), &store).await);
        let res = get_cmd.execute(GetPatronCommandRequest::new("missing".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
