use tracing::{debug, info};
use crate::books::domain::Book;
use crate::books::domain::record::BookRecord;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::seed::default_catalog;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    books: Vec<BookRecord>,
    book_repository: Box<dyn BookRepository>,
    autosave: bool,
}

impl CatalogServiceImpl {
    // Builds an empty catalog without touching the repository.
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            books: vec![],
            book_repository,
            autosave: config.autosave,
        }
    }

    /// Loads the stored catalog, or seeds and saves the default one when
    /// nothing has been stored yet. An existing store is never overwritten.
    pub fn initialize(config: &Configuration, book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        let mut svc = Self::new(config, book_repository);
        if svc.book_repository.exists() {
            svc.load()?;
        } else {
            info!("no catalog at {}, seeding default books", svc.book_repository.location());
            svc.books = default_catalog()?;
            svc.save()?;
        }
        Ok(svc)
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|b| b.has_title(title))
    }

    fn position_or_not_found(&self, title: &str) -> LibraryResult<usize> {
        self.position(title)
            .ok_or_else(|| LibraryError::not_found(format!("no book titled '{}'", title.trim()).as_str()))
    }

    fn save_if_autosave(&self) -> LibraryResult<()> {
        if self.autosave {
            self.save()
        } else {
            Ok(())
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: BookRecord) -> LibraryResult<&BookRecord> {
        let id = book.id();
        if self.books.iter().any(|b| b.id() == id) {
            return Err(LibraryError::duplicate_key(format!("a book titled '{}' by {} already exists",
                                                           book.title(), book.author()).as_str()));
        }
        info!("adding {:?} '{}' by {}", book.kind(), book.title(), book.author());
        self.books.push(book);
        let idx = self.books.len() - 1;
        self.save_if_autosave()?;
        Ok(&self.books[idx])
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<BookRecord> {
        let idx = self.position_or_not_found(title)?;
        let removed = self.books.remove(idx);
        info!("removed '{}' by {}", removed.title(), removed.author());
        self.save_if_autosave()?;
        Ok(removed)
    }

    fn find_book(&self, title: &str) -> Option<&BookRecord> {
        self.position(title).map(|idx| &self.books[idx])
    }

    fn list_books(&self, only_available: bool) -> Box<dyn Iterator<Item=&BookRecord> + '_> {
        Box::new(self.books.iter().filter(move |b| !only_available || b.is_available()))
    }

    fn lend_book(&mut self, title: &str) -> LibraryResult<&BookRecord> {
        let idx = self.position_or_not_found(title)?;
        self.books[idx].lend()?;
        info!("lent '{}'", self.books[idx].title());
        self.save_if_autosave()?;
        Ok(&self.books[idx])
    }

    fn return_book(&mut self, title: &str) -> LibraryResult<&BookRecord> {
        let idx = self.position_or_not_found(title)?;
        self.books[idx].return_book()?;
        info!("returned '{}'", self.books[idx].title());
        self.save_if_autosave()?;
        Ok(&self.books[idx])
    }

    fn save(&self) -> LibraryResult<()> {
        self.book_repository.save_all(&self.books)?;
        debug!("catalog of {} books saved to {}", self.books.len(), self.book_repository.location());
        Ok(())
    }

    // Replaces the in-memory catalog only when the whole store loads cleanly.
    fn load(&mut self) -> LibraryResult<()> {
        let books = self.book_repository.load_all()?;
        info!("loaded {} books from {}", books.len(), self.book_repository.location());
        self.books = books;
        Ok(())
    }

    fn len(&self) -> usize {
        self.books.len()
    }

    fn autosave(&self) -> bool {
        self.autosave
    }
}
