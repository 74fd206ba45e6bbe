pub(crate) mod memory_section_repository;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::sections::domain::model::SectionEntity;

#[async_trait]
pub(crate) trait SectionRepository: Repository<SectionEntity> {
    async fn find_by_name(&self, name: &str) -> LibraryResult<Vec<SectionEntity>>;
}
