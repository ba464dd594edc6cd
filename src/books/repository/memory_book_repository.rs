use std::cell::RefCell;
use std::rc::Rc;
use crate::books::domain::record::BookRecord;
use crate::books::repository::{decode_records, encode_records, BookRepository};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// InMemoryBookRepository keeps the encoded catalog in memory. Clones share
// the same snapshot, which lets a caller inspect what a service saved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
    snapshot: Rc<RefCell<Option<String>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(text: &str) -> Self {
        Self {
            snapshot: Rc::new(RefCell::new(Some(text.to_string()))),
        }
    }

    // replaces the stored text as is, without any validation
    pub fn set_content(&self, text: &str) {
        *self.snapshot.borrow_mut() = Some(text.to_string());
    }

    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.borrow().clone()
    }
}

impl Repository<BookRecord> for InMemoryBookRepository {
    fn exists(&self) -> bool {
        self.snapshot.borrow().is_some()
    }

    fn load_all(&self) -> LibraryResult<Vec<BookRecord>> {
        match self.snapshot.borrow().as_deref() {
            Some(text) => decode_records(text),
            None => Ok(vec![]),
        }
    }

    fn save_all(&self, entities: &[BookRecord]) -> LibraryResult<()> {
        let text = encode_records(entities)?;
        *self.snapshot.borrow_mut() = Some(text);
        Ok(())
    }
}

impl BookRepository for InMemoryBookRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}
