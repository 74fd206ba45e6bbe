use serde::{Deserialize, Serialize};

// BorrowOutcome reports what happened to a borrow request; rendering lives in notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum BorrowOutcome {
    Borrowed { patron: String, title: String },
    Unavailable { title: String },
    VipUnavailable { patron: String, title: String },
    PriorityBlocked { patron: String, title: String },
}

impl BorrowOutcome {
    pub fn is_borrowed(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            BorrowOutcome::Borrowed { title, .. } => title,
            BorrowOutcome::Unavailable { title } => title,
            BorrowOutcome::VipUnavailable { title, .. } => title,
            BorrowOutcome::PriorityBlocked { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum ReturnOutcome {
    Returned { patron: String, title: String },
    NotBorrowed { patron: String, title: String },
}

impl ReturnOutcome {
    pub fn is_returned(&self) -> bool {
        matches!(self, ReturnOutcome::Returned { .. })
    }
}
