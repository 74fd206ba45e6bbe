use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    // new books start out available; neither the title nor the isbn is validated
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            book_status: BookStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // sets the flag unconditionally, marking an available book available again is allowed
    pub fn set_available(&mut self, status: bool) {
        self.book_status = BookStatus::from(status);
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn details(&self) -> String {
        format!("Title: {}, Author: {}, ISBN: {}", self.title, self.author, self.isbn)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("The Hobbit", "J.R.R. Tolkien", "9780547928227");
        assert_eq!("The Hobbit", book.title());
        assert_eq!("9780547928227", book.isbn.as_str());
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_format_details() {
        let book = BookDto::new("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565");
        assert_eq!("Title: The Great Gatsby, Author: F. Scott Fitzgerald, ISBN: 9780743273565", book.details());
    }

    #[tokio::test]
    async fn test_should_set_available_unconditionally() {
        let mut book = BookDto::new("1984", "George Orwell", "9780451524935");
        book.set_available(true);
        assert_eq!(BookStatus::Available, book.status());
        book.set_available(false);
        assert!(!book.is_available());
        book.set_available(false);
        assert_eq!(BookStatus::Borrowed, book.status());
        book.set_available(true);
        assert!(book.is_available());
    }
}
