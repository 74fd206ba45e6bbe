pub mod add_book_cmd;
pub mod get_book_cmd;
