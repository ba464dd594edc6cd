use std::fmt;
use std::fmt::{Display, Formatter};
use serde::Deserialize;
use serde_json::Value;
use crate::books::domain::Book;
use crate::books::domain::model::{same_text, BookEntity, DigitalBookEntity, PublicationYear};
use crate::books::dto::{BookDto, RecordKind};
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookRecord is any entry of the catalog: a printed book or a digital one.
#[derive(Debug, PartialEq, Clone)]
pub enum BookRecord {
    Book(BookEntity),
    DigitalBook(DigitalBookEntity),
}

impl BookRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            BookRecord::Book(_) => RecordKind::Book,
            BookRecord::DigitalBook(_) => RecordKind::DigitalBook,
        }
    }

    pub fn as_digital(&self) -> Option<&DigitalBookEntity> {
        match self {
            BookRecord::Book(_) => None,
            BookRecord::DigitalBook(digital) => Some(digital),
        }
    }

    /// Plain JSON object carrying the `kind` discriminator and every attribute.
    pub fn to_record(&self) -> LibraryResult<Value> {
        Ok(serde_json::to_value(BookDto::from(self))?)
    }

    /// Rebuilds the variant named by `kind`, applying the same validation as
    /// the constructors. Records without `kind` are read as plain books.
    pub fn from_record(value: &Value) -> LibraryResult<BookRecord> {
        let dto = BookDto::deserialize(value).map_err(|err| {
            LibraryError::validation(format!("malformed record: {}", err).as_str(), None)
        })?;
        BookRecord::try_from(dto)
    }

    // Case-insensitive exact match on the title.
    pub fn has_title(&self, title: &str) -> bool {
        same_text(self.title(), title.trim())
    }
}

impl From<BookEntity> for BookRecord {
    fn from(book: BookEntity) -> Self {
        BookRecord::Book(book)
    }
}

impl From<DigitalBookEntity> for BookRecord {
    fn from(book: DigitalBookEntity) -> Self {
        BookRecord::DigitalBook(book)
    }
}

impl Identifiable for BookRecord {
    fn id(&self) -> String {
        match self {
            BookRecord::Book(book) => book.id(),
            BookRecord::DigitalBook(book) => book.id(),
        }
    }
}

impl Book for BookRecord {
    fn title(&self) -> &str {
        match self {
            BookRecord::Book(book) => book.title(),
            BookRecord::DigitalBook(book) => book.title(),
        }
    }

    fn author(&self) -> &str {
        match self {
            BookRecord::Book(book) => book.author(),
            BookRecord::DigitalBook(book) => book.author(),
        }
    }

    fn year(&self) -> PublicationYear {
        match self {
            BookRecord::Book(book) => book.year(),
            BookRecord::DigitalBook(book) => book.year(),
        }
    }

    fn status(&self) -> BookStatus {
        match self {
            BookRecord::Book(book) => book.status(),
            BookRecord::DigitalBook(book) => book.status(),
        }
    }

    fn lend(&mut self) -> LibraryResult<()> {
        match self {
            BookRecord::Book(book) => book.lend(),
            BookRecord::DigitalBook(book) => book.lend(),
        }
    }

    fn return_book(&mut self) -> LibraryResult<()> {
        match self {
            BookRecord::Book(book) => book.return_book(),
            BookRecord::DigitalBook(book) => book.return_book(),
        }
    }
}

impl Display for BookRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookRecord::Book(book) => write!(f, "{}", book),
            BookRecord::DigitalBook(book) => write!(f, "{}", book),
        }
    }
}
