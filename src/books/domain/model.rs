use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::{IntErrorKind, ParseIntError};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult, ALREADY_AVAILABLE, ALREADY_LOANED,
                           EMPTY_FIELD, NON_POSITIVE_YEAR, NOT_AN_INTEGER, YEAR_OUT_OF_RANGE};

// Returns the trimmed value or fails when nothing is left after trimming.
fn non_empty(value: &str, field: &str) -> LibraryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::validation(EMPTY_FIELD, Some(field)));
    }
    Ok(trimmed.to_string())
}

// Case-insensitive text comparison used for titles and authors.
pub(crate) fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Publication year, always strictly positive.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct PublicationYear(u32);

impl PublicationYear {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for PublicationYear {
    type Error = LibraryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(LibraryError::validation(NON_POSITIVE_YEAR, Some("year")));
        }
        u32::try_from(value)
            .map(PublicationYear)
            .map_err(|_| LibraryError::validation(YEAR_OUT_OF_RANGE, Some("year")))
    }
}

impl TryFrom<i32> for PublicationYear {
    type Error = LibraryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        PublicationYear::try_from(i64::from(value))
    }
}

impl TryFrom<u32> for PublicationYear {
    type Error = LibraryError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PublicationYear::try_from(i64::from(value))
    }
}

impl TryFrom<&str> for PublicationYear {
    type Error = LibraryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parsed: i64 = value.trim().parse().map_err(|err: ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow => LibraryError::validation(YEAR_OUT_OF_RANGE, Some("year")),
            IntErrorKind::NegOverflow => LibraryError::validation(NON_POSITIVE_YEAR, Some("year")),
            _ => LibraryError::validation(NOT_AN_INTEGER, Some("year")),
        })?;
        PublicationYear::try_from(parsed)
    }
}

impl TryFrom<String> for PublicationYear {
    type Error = LibraryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PublicationYear::try_from(value.as_str())
    }
}

impl From<PublicationYear> for u32 {
    fn from(year: PublicationYear) -> Self {
        year.0
    }
}

impl Display for PublicationYear {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// BookEntity abstracts a printed book in the catalog. Fields are private so
// that every change goes through a validating setter.
#[derive(Debug, PartialEq, Clone)]
pub struct BookEntity {
    title: String,
    author: String,
    year: PublicationYear,
    status: BookStatus,
}

impl BookEntity {
    pub fn new<Y>(title: &str, author: &str, year: Y) -> LibraryResult<Self>
        where Y: TryInto<PublicationYear>, LibraryError: From<Y::Error> {
        Self::with_status(title, author, year, BookStatus::Available)
    }

    pub fn with_status<Y>(title: &str, author: &str, year: Y, status: BookStatus) -> LibraryResult<Self>
        where Y: TryInto<PublicationYear>, LibraryError: From<Y::Error> {
        Ok(Self {
            title: non_empty(title, "title")?,
            author: non_empty(author, "author")?,
            year: year.try_into()?,
            status,
        })
    }

    pub fn set_title(&mut self, title: &str) -> LibraryResult<()> {
        self.title = non_empty(title, "title")?;
        Ok(())
    }

    pub fn set_author(&mut self, author: &str) -> LibraryResult<()> {
        self.author = non_empty(author, "author")?;
        Ok(())
    }

    pub fn set_year<Y>(&mut self, year: Y) -> LibraryResult<()>
        where Y: TryInto<PublicationYear>, LibraryError: From<Y::Error> {
        self.year = year.try_into()?;
        Ok(())
    }

    // Accepts "available" or "loaned" in any case.
    pub fn set_status(&mut self, status: &str) -> LibraryResult<()> {
        self.status = status.parse()?;
        Ok(())
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        format!("{}|{}", self.title.to_lowercase(), self.author.to_lowercase())
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> PublicationYear {
        self.year
    }

    fn status(&self) -> BookStatus {
        self.status
    }

    fn lend(&mut self) -> LibraryResult<()> {
        if self.status == BookStatus::Loaned {
            return Err(LibraryError::validation(ALREADY_LOANED, None));
        }
        self.status = BookStatus::Loaned;
        Ok(())
    }

    fn return_book(&mut self) -> LibraryResult<()> {
        if self.status == BookStatus::Available {
            return Err(LibraryError::validation(ALREADY_AVAILABLE, None));
        }
        self.status = BookStatus::Available;
        Ok(())
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, Year: {}, Status: {}",
               self.title, self.author, self.year, self.status.label())
    }
}

// DigitalBookEntity is a book distributed as a file, e.g. PDF or ePub.
#[derive(Debug, PartialEq, Clone)]
pub struct DigitalBookEntity {
    book: BookEntity,
    format: String,
}

impl DigitalBookEntity {
    pub fn new<Y>(title: &str, author: &str, year: Y, format: &str) -> LibraryResult<Self>
        where Y: TryInto<PublicationYear>, LibraryError: From<Y::Error> {
        Self::with_status(title, author, year, format, BookStatus::Available)
    }

    pub fn with_status<Y>(title: &str, author: &str, year: Y, format: &str,
                          status: BookStatus) -> LibraryResult<Self>
        where Y: TryInto<PublicationYear>, LibraryError: From<Y::Error> {
        let book = BookEntity::with_status(title, author, year, status)?;
        Ok(Self {
            book,
            format: non_empty(format, "format")?,
        })
    }

    pub fn format(&self) -> &str {
        self.format.as_str()
    }

    pub fn set_format(&mut self, format: &str) -> LibraryResult<()> {
        self.format = non_empty(format, "format")?;
        Ok(())
    }

    pub fn book(&self) -> &BookEntity {
        &self.book
    }

    // setters on the inner book still validate
    pub fn book_mut(&mut self) -> &mut BookEntity {
        &mut self.book
    }
}

impl Identifiable for DigitalBookEntity {
    fn id(&self) -> String {
        self.book.id()
    }
}

impl Book for DigitalBookEntity {
    fn title(&self) -> &str {
        self.book.title()
    }

    fn author(&self) -> &str {
        self.book.author()
    }

    fn year(&self) -> PublicationYear {
        self.book.year()
    }

    fn status(&self) -> BookStatus {
        self.book.status()
    }

    fn lend(&mut self) -> LibraryResult<()> {
        self.book.lend()
    }

    fn return_book(&mut self) -> LibraryResult<()> {
        self.book.return_book()
    }
}

impl Display for DigitalBookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}, Format: {}", self.book, self.format)
    }
}
