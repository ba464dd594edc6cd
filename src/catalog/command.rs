pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod lend_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod return_book_cmd;
