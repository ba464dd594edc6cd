pub mod seed;
pub mod service;

use crate::books::domain::record::BookRecord;
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, book: BookRecord) -> LibraryResult<&BookRecord>;
    fn remove_book(&mut self, title: &str) -> LibraryResult<BookRecord>;
    fn find_book(&self, title: &str) -> Option<&BookRecord>;
    fn list_books(&self, only_available: bool) -> Box<dyn Iterator<Item=&BookRecord> + '_>;
    fn lend_book(&mut self, title: &str) -> LibraryResult<&BookRecord>;
    fn return_book(&mut self, title: &str) -> LibraryResult<&BookRecord>;
    fn save(&self) -> LibraryResult<()>;
    fn load(&mut self) -> LibraryResult<()>;
    fn len(&self) -> usize;
    fn autosave(&self) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
