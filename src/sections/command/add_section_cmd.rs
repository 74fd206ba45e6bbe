use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::sections::domain::SectionService;
use crate::sections::dto::SectionDto;

pub struct AddSectionCommand {
    section_service: Box<dyn SectionService>,
}

impl AddSectionCommand {
    pub fn new(section_service: Box<dyn SectionService>) -> Self {
        Self {
            section_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddSectionCommandRequest {
    pub(crate) name: String,
}

impl AddSectionCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddSectionCommandResponse {
    pub section: SectionDto,
}

#[async_trait]
impl Command<AddSectionCommandRequest, AddSectionCommandResponse> for AddSectionCommand {
    async fn execute(&self, req: AddSectionCommandRequest) -> Result<AddSectionCommandResponse, CommandError> {
        let section = self.section_service.add_section(&SectionDto::new(req.name.as_str())).await?;
        Ok(AddSectionCommandResponse { section })
    }
}
