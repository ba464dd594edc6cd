use crate::books::domain::record::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct LendBookCommand<'a, S: CatalogService + ?Sized> {
    catalog_service: &'a mut S,
}

impl<'a, S: CatalogService + ?Sized> LendBookCommand<'a, S> {
    pub fn new(catalog_service: &'a mut S) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct LendBookCommandRequest {
    pub title: String,
}

impl LendBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct LendBookCommandResponse {
    pub book: BookRecord,
}

impl LendBookCommandResponse {
    pub fn new(book: BookRecord) -> Self {
        Self {
            book,
        }
    }
}

impl<S: CatalogService + ?Sized> Command<LendBookCommandRequest, LendBookCommandResponse> for LendBookCommand<'_, S> {
    fn execute(&mut self, req: LendBookCommandRequest) -> Result<LendBookCommandResponse, CommandError> {
        self.catalog_service.lend_book(req.title.as_str())
            .map(|book| LendBookCommandResponse::new(book.clone()))
            .map_err(CommandError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::books::domain::Book;
    use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_lend_book() {
        let config = Configuration::new(Path::new("test.json")).with_store(RepositoryStore::InMemory);
        let mut svc = factory::create_catalog_service(&config).expect("should build service");
        let mut cmd = LendBookCommand::new(svc.as_mut());
        let res = cmd.execute(LendBookCommandRequest::new("Amrita")).expect("should lend book");
        assert_eq!(BookStatus::Loaned, res.book.status());
        let err = cmd.execute(LendBookCommandRequest::new("Amrita")).expect_err("should not lend twice");
        assert!(matches!(err, CommandError::Validation { .. }));
        let err = cmd.execute(LendBookCommandRequest::new("Kokoro")).expect_err("should not find book");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
