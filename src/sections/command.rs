pub mod add_section_cmd;
pub mod section_report_cmd;
pub mod shelve_book_cmd;
