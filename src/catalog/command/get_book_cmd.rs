use crate::books::domain::record::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand<'a, S: CatalogService + ?Sized> {
    catalog_service: &'a S,
}

impl<'a, S: CatalogService + ?Sized> GetBookCommand<'a, S> {
    pub fn new(catalog_service: &'a S) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub title: String,
}

impl GetBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


// An unknown title is not an error, the response simply carries no book.
#[derive(Debug)]
pub struct GetBookCommandResponse {
    pub book: Option<BookRecord>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<BookRecord>) -> Self {
        Self {
            book,
        }
    }
}

impl<S: CatalogService + ?Sized> Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'_, S> {
    fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        Ok(GetBookCommandResponse::new(self.catalog_service.find_book(req.title.as_str()).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::books::domain::Book;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_get_book() {
        let config = Configuration::new(Path::new("test.json")).with_store(RepositoryStore::InMemory);
        let svc = factory::create_catalog_service(&config).expect("should build service");
        let mut cmd = GetBookCommand::new(svc.as_ref());
        let res = cmd.execute(GetBookCommandRequest::new("país de nieve")).expect("should get book");
        assert_eq!(Some("Yasunari Kawabata"), res.book.as_ref().map(|b| b.author()));
        let res = cmd.execute(GetBookCommandRequest::new("Kokoro")).expect("should get nothing");
        assert!(res.book.is_none());
    }
}
