use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::PatronKind;
use crate::patrons::dto::PatronDto;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;

pub struct AddPatronCommand {
    patron_service: Box<dyn PatronService>,
}

impl AddPatronCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPatronCommandRequest {
    pub name: String,
    pub kind: PatronKind,
}

impl AddPatronCommandRequest {
    pub fn new(name: &str, kind: PatronKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
    pub fn build_patron(&self) -> PatronDto {
        PatronDto::new(self.kind, self.name.as_str())
    }
}


#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand {
    async fn execute(&self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        let patron = req.build_patron();
        self.patron_service.add_patron(&patron).await.map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}
