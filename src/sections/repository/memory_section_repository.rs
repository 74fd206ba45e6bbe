use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::sections::domain::model::SectionEntity;
use crate::sections::repository::SectionRepository;
use crate::utils::memory::MemoryRepository;

pub(crate) type MemorySectionRepository = MemoryRepository<SectionEntity>;

#[async_trait]
impl SectionRepository for MemorySectionRepository {
    // sections are few, a single page is enough
    async fn find_by_name(&self, name: &str) -> LibraryResult<Vec<SectionEntity>> {
        let res = self.query(&HashMap::from([("name".to_string(), name.to_string())]), None, 100).await?;
        Ok(res.records)
    }
}
