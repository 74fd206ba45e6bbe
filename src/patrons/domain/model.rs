use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::PatronKind;
use crate::utils::date::serializer;

// PatronEntity abstracts library member; borrowed books are kept as registry keys in borrow order.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct PatronEntity {
    pub patron_id: String,
    pub version: i64,
    pub name: String,
    pub kind: PatronKind,
    pub priority: bool,
    pub borrowed_book_ids: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronEntity {
    pub fn new(kind: PatronKind, name: &str) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            kind,
            priority: kind == PatronKind::Vip,
            borrowed_book_ids: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::PatronKind;
    use crate::patrons::domain::model::PatronEntity;

    #[tokio::test]
    async fn test_should_build_patron_entity() {
        let patron = PatronEntity::new(PatronKind::Vip, "Bob");
        assert_eq!("Bob", patron.name.as_str());
        assert!(patron.priority);
        assert!(patron.borrowed_book_ids.is_empty());
        assert!(!PatronEntity::new(PatronKind::Standard, "Alice").priority);
    }
}
