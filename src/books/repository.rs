pub mod json_book_repository;
pub mod memory_book_repository;

use serde_json::Value;
use crate::books::domain::record::BookRecord;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookRecord> {
    // where the catalog is kept, used in logs and messages
    fn location(&self) -> String;
}

// Renders the catalog as a pretty-printed JSON array, non-ASCII text kept as is.
pub(crate) fn encode_records(records: &[BookRecord]) -> LibraryResult<String> {
    let dtos: Vec<BookDto> = records.iter().map(BookDto::from).collect();
    Ok(serde_json::to_string_pretty(&dtos)?)
}

// Parses a JSON array of records. Anything that is not a JSON array is a
// corrupt store, a record that fails validation is a validation error.
pub(crate) fn decode_records(text: &str) -> LibraryResult<Vec<BookRecord>> {
    let values: Vec<Value> = serde_json::from_str(text).map_err(|err| {
        LibraryError::corrupt_store(format!("catalog is not a valid JSON array of records: {}", err).as_str())
    })?;
    values.iter().map(BookRecord::from_record).collect()
}
