use crate::books::domain::record::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a, S: CatalogService + ?Sized> {
    catalog_service: &'a S,
}

impl<'a, S: CatalogService + ?Sized> ListBooksCommand<'a, S> {
    pub fn new(catalog_service: &'a S) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {
    pub only_available: bool,
}

impl ListBooksCommandRequest {
    pub fn new(only_available: bool) -> Self {
        Self {
            only_available,
        }
    }
}


#[derive(Debug)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookRecord>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self {
            books,
        }
    }
}

impl<S: CatalogService + ?Sized> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_, S> {
    fn execute(&mut self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = self.catalog_service.list_books(req.only_available).cloned().collect();
        Ok(ListBooksCommandResponse::new(books))
    }
}
