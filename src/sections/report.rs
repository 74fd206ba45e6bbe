use serde::Serialize;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::library::BookStatus;

/// One line of a section listing: the title and whether the book is on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfEntry {
    pub title: String,
    pub status: BookStatus,
}

impl ShelfEntry {
    pub fn line(&self) -> String {
        match self.status {
            BookStatus::Available => format!("{} - Available", self.title),
            BookStatus::Borrowed => format!("{} - Borrowed", self.title),
        }
    }
}

impl From<&BookDto> for ShelfEntry {
    fn from(book: &BookDto) -> Self {
        Self {
            title: book.title().to_string(),
            status: book.status(),
        }
    }
}

/// Snapshot of a section, computed from the registry when it is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub entries: Vec<ShelfEntry>,
}

impl SectionReport {
    pub fn new(name: &str, books: &[BookDto]) -> Self {
        Self {
            name: name.to_string(),
            entries: books.iter().map(ShelfEntry::from).collect(),
        }
    }

    /// Entries on the shelf; a book added twice counts twice.
    pub fn available(&self) -> usize {
        self.entries.iter().filter(|e| e.status == BookStatus::Available).count()
    }

    pub fn availability_line(&self) -> String {
        format!("Total available books in {}: {}", self.name, self.available())
    }

    pub fn availability_line_after(&self, phase: &str) -> String {
        format!("Total available books in {} {}: {}", self.name, phase, self.available())
    }

    /// Newline-joined entry lines in insertion order; empty for an empty section.
    pub fn list_books(&self) -> String {
        self.entries.iter().map(ShelfEntry::line).collect::<Vec<String>>().join("\n")
    }

    pub fn listing(&self) -> String {
        format!("{} Section Books:\n{}", self.name, self.list_books())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::sections::report::SectionReport;

    fn shelf() -> Vec<BookDto> {
        let gatsby = BookDto::new("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565");
        let mut orwell = BookDto::new("1984", "George Orwell", "9780451524935");
        orwell.set_available(false);
        vec![gatsby, orwell]
    }

    #[tokio::test]
    async fn test_should_format_listing() {
        let report = SectionReport::new("Fiction", &shelf());
        assert_eq!("The Great Gatsby - Available\n1984 - Borrowed", report.list_books());
        assert_eq!("Fiction Section Books:\nThe Great Gatsby - Available\n1984 - Borrowed", report.listing());
    }

    #[tokio::test]
    async fn test_should_format_availability() {
        let report = SectionReport::new("Fiction", &shelf());
        assert_eq!(1, report.available());
        assert_eq!("Total available books in Fiction: 1", report.availability_line());
        assert_eq!("Total available books in Fiction after returns: 1", report.availability_line_after("after returns"));
    }

    #[tokio::test]
    async fn test_should_format_empty_section() {
        let report = SectionReport::new("Empty", &[]);
        assert_eq!(0, report.available());
        assert_eq!("", report.list_books());
        assert_eq!("Empty Section Books:\n", report.listing());
    }

    #[tokio::test]
    async fn test_should_count_duplicates_per_entry() {
        let book = BookDto::new("The Hobbit", "J.R.R. Tolkien", "9780547928227");
        let report = SectionReport::new("Science", &[book.clone(), book]);
        assert_eq!(2, report.available());
        assert_eq!("The Hobbit - Available\nThe Hobbit - Available", report.list_books());
    }
}
