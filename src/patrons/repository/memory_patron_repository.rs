use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;
use crate::utils::memory::MemoryRepository;

pub(crate) type MemoryPatronRepository = MemoryRepository<PatronEntity>;

#[async_trait]
impl PatronRepository for MemoryPatronRepository {
    async fn find_by_name(&self, name: &str) -> LibraryResult<Vec<PatronEntity>> {
        let mut patrons = vec![];
        let predicate = HashMap::from([("name".to_string(), name.to_string())]);
        let mut page: Option<String> = None;
        loop {
            let res = self.query(&predicate, page.as_deref(), 100).await?;
            patrons.extend(res.records);
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        Ok(patrons)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::PatronKind;
    use crate::core::repository::Repository;
    use crate::patrons::domain::model::PatronEntity;
    use crate::patrons::repository::PatronRepository;
    use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;
    use crate::utils::memory::{create_table, MemoryClient};

    fn build_repo() -> MemoryPatronRepository {
        let client = MemoryClient::new();
        create_table(&client, "patrons", "patron_id").expect("should create table");
        MemoryPatronRepository::new(client, "patrons")
    }

    #[tokio::test]
    async fn test_should_create_get_patrons() {
        let repo = build_repo();
        let patron = PatronEntity::new(PatronKind::Vip, "Bob");
        let _ = repo.create(&patron).await.expect("should create patron");
        let loaded = repo.get(patron.patron_id.as_str()).await.expect("should return patron");
        assert_eq!(patron.patron_id, loaded.patron_id);
        assert_eq!(PatronKind::Vip, loaded.kind);
        assert!(loaded.priority);
    }

    #[tokio::test]
    async fn test_should_update_patrons() {
        let repo = build_repo();
        let mut patron = PatronEntity::new(PatronKind::Standard, "Alice");
        let _ = repo.create(&patron).await.expect("should create patron");
        patron.borrowed_book_ids = vec!["b1".to_string(), "b2".to_string()];
        let _ = repo.update(&patron).await.expect("should update patron");
        let loaded = repo.get(patron.patron_id.as_str()).await.expect("should return patron");
        assert_eq!(vec!["b1".to_string(), "b2".to_string()], loaded.borrowed_book_ids);
        assert_eq!(1, loaded.version);
    }

    #[tokio::test]
    async fn test_should_find_by_name_across_pages() {
        let repo = build_repo();
        for _ in 0..150 {
            let _ = repo.create(&PatronEntity::new(PatronKind::Standard, "Carol")).await.expect("should create patron");
        }
        let _ = repo.create(&PatronEntity::new(PatronKind::Standard, "Dave")).await.expect("should create patron");
        let res = repo.find_by_name("Carol").await.expect("should return patrons");
        assert_eq!(150, res.len());
    }
}
