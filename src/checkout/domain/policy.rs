use crate::books::domain::Book;
use crate::checkout::dto::BorrowOutcome;
use crate::core::library::PatronKind;
use crate::patrons::domain::Patron;

/// Decides what a patron is told when a book can or cannot be lent.
///
/// Lending itself is identical for every patron kind; only the outcome
/// reported for an unavailable book differs.
pub trait BorrowPolicy: Sync + Send {
    fn granted(&self, patron: &dyn Patron, book: &dyn Book) -> BorrowOutcome {
        BorrowOutcome::Borrowed { patron: patron.name().to_string(), title: book.title().to_string() }
    }

    fn unavailable(&self, patron: &dyn Patron, book: &dyn Book) -> BorrowOutcome;
}

pub struct StandardBorrowPolicy;

impl BorrowPolicy for StandardBorrowPolicy {
    fn unavailable(&self, _patron: &dyn Patron, book: &dyn Book) -> BorrowOutcome {
        BorrowOutcome::Unavailable { title: book.title().to_string() }
    }
}

pub struct VipBorrowPolicy;

impl BorrowPolicy for VipBorrowPolicy {
    fn unavailable(&self, patron: &dyn Patron, book: &dyn Book) -> BorrowOutcome {
        let (name, title) = (patron.name().to_string(), book.title().to_string());
        if patron.has_priority() {
            BorrowOutcome::PriorityBlocked { patron: name, title }
        } else {
            BorrowOutcome::VipUnavailable { patron: name, title }
        }
    }
}

static STANDARD: StandardBorrowPolicy = StandardBorrowPolicy;
static VIP: VipBorrowPolicy = VipBorrowPolicy;

pub fn policy_for(kind: PatronKind) -> &'static dyn BorrowPolicy {
    match kind {
        PatronKind::Standard => &STANDARD,
        PatronKind::Vip => &VIP,
    }
}
