use crate::books::domain::model::{BookEntity, DigitalBookEntity};
use crate::books::domain::record::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BookStatus, LibraryResult};

pub struct AddBookCommand<'a, S: CatalogService + ?Sized> {
    catalog_service: &'a mut S,
}

impl<'a, S: CatalogService + ?Sized> AddBookCommand<'a, S> {
    pub fn new(catalog_service: &'a mut S) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: i64,
    // blank or missing means available
    pub status: Option<String>,
    // only digital books carry a format
    pub format: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            status: None,
            format: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn build_book(&self) -> LibraryResult<BookRecord> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => BookStatus::Available,
            Some(status) => status.parse()?,
        };
        match self.format.as_deref() {
            Some(format) => Ok(BookRecord::from(DigitalBookEntity::with_status(
                self.title.as_str(), self.author.as_str(), self.year, format, status)?)),
            None => Ok(BookRecord::from(BookEntity::with_status(
                self.title.as_str(), self.author.as_str(), self.year, status)?)),
        }
    }
}


#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: BookRecord,
}

impl AddBookCommandResponse {
    pub fn new(book: BookRecord) -> Self {
        Self {
            book,
        }
    }
}

impl<S: CatalogService + ?Sized> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_, S> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(book)
            .map(|added| AddBookCommandResponse::new(added.clone()))
            .map_err(CommandError::from)
    }
}
