use std::fmt;
use std::fmt::{Display, Formatter};
use crate::checkout::dto::{BorrowOutcome, ReturnOutcome};

impl Display for BorrowOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BorrowOutcome::Borrowed { patron, title } => write!(f, "{} borrowed \"{}\".", patron, title),
            BorrowOutcome::Unavailable { title } => write!(f, "\"{}\" is currently unavailable.", title),
            BorrowOutcome::VipUnavailable { patron, title } => {
                write!(f, "\"{}\" is currently unavailable for {} (VIP).", title, patron)
            }
            BorrowOutcome::PriorityBlocked { patron, title } => {
                write!(f, "{} (VIP) could not borrow \"{}\" as it's currently borrowed.", patron, title)
            }
        }
    }
}

impl Display for ReturnOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned { patron, title } => write!(f, "{} returned \"{}\".", patron, title),
            ReturnOutcome::NotBorrowed { patron, title } => write!(f, "\"{}\" was not borrowed by {}.", title, patron),
        }
    }
}
