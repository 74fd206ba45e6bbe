use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::sections::domain::SectionService;
use crate::sections::report::SectionReport;

pub struct SectionReportCommand {
    section_service: Box<dyn SectionService>,
}

impl SectionReportCommand {
    pub fn new(section_service: Box<dyn SectionService>) -> Self {
        Self {
            section_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SectionReportCommandRequest {
    pub(crate) section_id: String,
}

impl SectionReportCommandRequest {
    pub fn new(section_id: &str) -> Self {
        Self {
            section_id: section_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SectionReportCommandResponse {
    pub report: SectionReport,
}

#[async_trait]
impl Command<SectionReportCommandRequest, SectionReportCommandResponse> for SectionReportCommand {
    async fn execute(&self, req: SectionReportCommandRequest) -> Result<SectionReportCommandResponse, CommandError> {
        let report = self.section_service.report(req.section_id.as_str()).await?;
        Ok(SectionReportCommandResponse { report })
    }
}
