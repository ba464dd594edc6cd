use crate::books::domain::record::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a, S: CatalogService + ?Sized> {
    catalog_service: &'a mut S,
}

impl<'a, S: CatalogService + ?Sized> RemoveBookCommand<'a, S> {
    pub fn new(catalog_service: &'a mut S) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct RemoveBookCommandResponse {
    pub book: BookRecord,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookRecord) -> Self {
        Self {
            book,
        }
    }
}

impl<S: CatalogService + ?Sized> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'_, S> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.title.as_str())
            .map(RemoveBookCommandResponse::new)
            .map_err(CommandError::from)
    }
}
