use crate::books::domain::record::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a, S: CatalogService + ?Sized> {
    catalog_service: &'a mut S,
}

impl<'a, S: CatalogService + ?Sized> ReturnBookCommand<'a, S> {
    pub fn new(catalog_service: &'a mut S) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ReturnBookCommandRequest {
    pub title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct ReturnBookCommandResponse {
    pub book: BookRecord,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookRecord) -> Self {
        Self {
            book,
        }
    }
}

impl<S: CatalogService + ?Sized> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_, S> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.title.as_str())
            .map(|book| ReturnBookCommandResponse::new(book.clone()))
            .map_err(CommandError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::books::domain::Book;
    use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_return_book() {
        let config = Configuration::new(Path::new("test.json")).with_store(RepositoryStore::InMemory);
        let mut svc = factory::create_catalog_service(&config).expect("should build service");
        let err = ReturnBookCommand::new(svc.as_mut())
            .execute(ReturnBookCommandRequest::new("Amrita")).expect_err("should not return available book");
        assert!(matches!(err, CommandError::Validation { .. }));

        LendBookCommand::new(svc.as_mut())
            .execute(LendBookCommandRequest::new("Amrita")).expect("should lend book");
        let res = ReturnBookCommand::new(svc.as_mut())
            .execute(ReturnBookCommandRequest::new("amrita")).expect("should return book");
        assert_eq!(BookStatus::Available, res.book.status());
    }
}
