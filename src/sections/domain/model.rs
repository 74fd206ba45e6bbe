use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// SectionEntity groups books by registry key; it never owns the books themselves.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct SectionEntity {
    pub section_id: String,
    pub version: i64,
    pub name: String,
    pub book_ids: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl SectionEntity {
    pub fn new(name: &str) -> Self {
        Self {
            section_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            book_ids: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for SectionEntity {
    fn id(&self) -> String {
        self.section_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
