use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::PatronKind;
use crate::patrons::domain::Patron;
use crate::utils::date::serializer;


// Patron abstracts library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub version: i64,
    pub name: String,
    pub kind: PatronKind,
    // every VIP starts with priority; standard patrons never have it
    pub priority: bool,
    pub borrowed_book_ids: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronDto {
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

    pub fn standard(name: &str) -> Self {
        Self::new(PatronKind::Standard, name)
    }

    pub fn vip(name: &str) -> Self {
        Self::new(PatronKind::Vip, name)
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Patron for PatronDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }
    fn kind(&self) -> PatronKind {
        self.kind
    }
    fn has_priority(&self) -> bool {
        self.priority
    }
    fn borrowed_book_ids(&self) -> &[String] {
        self.borrowed_book_ids.as_slice()
    }
}
