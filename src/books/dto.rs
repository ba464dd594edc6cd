use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, DigitalBookEntity, PublicationYear};
use crate::books::domain::record::BookRecord;
use crate::core::library::{BookStatus, LibraryError, LibraryResult, EMPTY_FIELD, INVALID_STATUS, MISSING_FIELD,
                           NOT_AN_INTEGER, YEAR_OUT_OF_RANGE};

// Format assumed for digital records written before the format was stored.
pub const DEFAULT_DIGITAL_FORMAT: &str = "PDF";

// RecordKind is the discriminator stored with every record
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    #[default]
    Book,
    DigitalBook,
}

// BookDto is the persisted shape of a catalog record. Every field is optional
// here so that missing fields surface as validation errors naming the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub kind: RecordKind,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<Value>,
    // None when the key is absent, Some(None) when it is set to null
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub format: Option<Option<String>>,
}

// Wraps whatever the key holds, null included, so that only an absent key
// falls back to the field default.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where D: Deserializer<'de>, T: Deserialize<'de> {
    Option::<T>::deserialize(deserializer).map(Some)
}

fn required<'a>(value: &'a Option<String>, field: &str) -> LibraryResult<&'a str> {
    value.as_deref().ok_or_else(|| LibraryError::validation(MISSING_FIELD, Some(field)))
}

// Years may be stored as numbers or as integer strings.
fn parse_year(value: &Option<Value>) -> LibraryResult<PublicationYear> {
    match value {
        None | Some(Value::Null) => Err(LibraryError::validation(MISSING_FIELD, Some("year"))),
        Some(Value::Number(n)) => {
            if let Some(year) = n.as_i64() {
                PublicationYear::try_from(year)
            } else if n.as_u64().is_some() {
                Err(LibraryError::validation(YEAR_OUT_OF_RANGE, Some("year")))
            } else {
                match n.as_f64() {
                    // whole floats such as 1999.0, saturating casts land out of range
                    Some(year) if year.fract() == 0.0 => PublicationYear::try_from(year as i64),
                    _ => Err(LibraryError::validation(NOT_AN_INTEGER, Some("year"))),
                }
            }
        }
        Some(Value::String(s)) => PublicationYear::try_from(s.as_str()),
        Some(_) => Err(LibraryError::validation(NOT_AN_INTEGER, Some("year"))),
    }
}

impl From<&BookRecord> for BookDto {
    fn from(other: &BookRecord) -> Self {
        let format = match other {
            BookRecord::Book(_) => None,
            BookRecord::DigitalBook(digital) => Some(Some(digital.format().to_string())),
        };
        Self {
            kind: other.kind(),
            title: Some(other.title().to_string()),
            author: Some(other.author().to_string()),
            year: Some(Value::from(other.year().value())),
            status: Some(Some(other.status().as_str().to_string())),
            format,
        }
    }
}

impl TryFrom<BookDto> for BookRecord {
    type Error = LibraryError;

    fn try_from(other: BookDto) -> Result<Self, Self::Error> {
        let title = required(&other.title, "title")?;
        let author = required(&other.author, "author")?;
        let year = parse_year(&other.year)?;
        let status = match &other.status {
            Some(Some(status)) => status.parse()?,
            Some(None) => return Err(LibraryError::validation(INVALID_STATUS, Some("status"))),
            None => BookStatus::Available,
        };
        match other.kind {
            RecordKind::Book => {
                Ok(BookRecord::Book(BookEntity::with_status(title, author, year, status)?))
            }
            RecordKind::DigitalBook => {
                let format = match &other.format {
                    Some(Some(format)) => format.as_str(),
                    Some(None) => return Err(LibraryError::validation(EMPTY_FIELD, Some("format"))),
                    None => {
                        warn!("digital record '{}' has no format, assuming {}", title, DEFAULT_DIGITAL_FORMAT);
                        DEFAULT_DIGITAL_FORMAT
                    }
                };
                Ok(BookRecord::DigitalBook(DigitalBookEntity::with_status(title, author, year, format, status)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::domain::record::BookRecord;
    use crate::books::dto::{BookDto, RecordKind};
    use rstest::rstest;
    use serde_json::Value;
    use crate::core::library::{BookStatus, EMPTY_FIELD, INVALID_STATUS, MISSING_FIELD, NOT_AN_INTEGER,
                               YEAR_OUT_OF_RANGE};

    #[test]
    fn test_should_build_dto_from_record() {
        let record = BookRecord::from(BookEntity::new("Kitchen", "Banana Yoshimoto", 1988).expect("should build book"));
        let dto = BookDto::from(&record);
        assert_eq!(RecordKind::Book, dto.kind);
        assert_eq!(Some("Kitchen".to_string()), dto.title);
        assert_eq!(Some(json!(1988)), dto.year);
        assert_eq!(Some(Some("available".to_string())), dto.status);
        assert_eq!(None, dto.format);
    }

    #[test]
    fn test_should_accept_string_year() {
        let dto: BookDto = serde_json::from_value(json!({
            "kind": "book", "title": "Kitchen", "author": "Banana Yoshimoto", "year": "1988", "status": "LOANED"
        })).expect("should parse dto");
        let record = BookRecord::try_from(dto).expect("should build record");
        assert_eq!(1988, record.year().value());
        assert_eq!(BookStatus::Loaned, record.status());
    }

    #[test]
    fn test_should_reject_fractional_year() {
        let dto: BookDto = serde_json::from_value(json!({
            "title": "Kitchen", "author": "Banana Yoshimoto", "year": 1988.5
        })).expect("should parse dto");
        let err = BookRecord::try_from(dto).expect_err("should reject year");
        assert_eq!(NOT_AN_INTEGER, err.message());
    }

    #[rstest]
    #[case(json!(1999.0), 1999)]
    #[case(json!(" 2001 "), 2001)]
    #[case(json!(4294967295u64), u32::MAX)]
    fn test_should_accept_whole_year(#[case] year: Value, #[case] expected: u32) {
        let dto: BookDto = serde_json::from_value(json!({
            "title": "Kitchen", "author": "Banana Yoshimoto", "year": year
        })).expect("should parse dto");
        let record = BookRecord::try_from(dto).expect("should build record");
        assert_eq!(expected, record.year().value());
    }

    #[rstest]
    #[case(json!(4294967296u64))]
    #[case(json!(18446744073709551615u64))]
    #[case(json!("18446744073709551615"))]
    #[case(json!(1e20))]
    fn test_should_reject_year_out_of_range(#[case] year: Value) {
        let dto: BookDto = serde_json::from_value(json!({
            "title": "Kitchen", "author": "Banana Yoshimoto", "year": year
        })).expect("should parse dto");
        let err = BookRecord::try_from(dto).expect_err("should reject year");
        assert_eq!(YEAR_OUT_OF_RANGE, err.message());
    }

    #[test]
    fn test_should_tell_null_from_absent() {
        let absent: BookDto = serde_json::from_value(json!({
            "kind": "digital_book", "title": "Kitchen", "author": "Banana Yoshimoto", "year": 1988
        })).expect("should parse dto");
        assert_eq!(None, absent.status);
        assert_eq!(None, absent.format);

        let null: BookDto = serde_json::from_value(json!({
            "kind": "digital_book", "title": "Kitchen", "author": "Banana Yoshimoto", "year": 1988,
            "status": null, "format": null
        })).expect("should parse dto");
        assert_eq!(Some(None), null.status);
        assert_eq!(Some(None), null.format);
    }

    #[test]
    fn test_should_reject_null_status() {
        let dto: BookDto = serde_json::from_value(json!({
            "kind": "book", "title": "Kitchen", "author": "Banana Yoshimoto", "year": 1988, "status": null
        })).expect("should parse dto");
        let err = BookRecord::try_from(dto).expect_err("should reject status");
        assert_eq!(INVALID_STATUS, err.message());
        assert_eq!("status: invalid status", err.to_string());
    }

    #[test]
    fn test_should_reject_null_format() {
        let dto: BookDto = serde_json::from_value(json!({
            "kind": "digital_book", "title": "Kitchen", "author": "Banana Yoshimoto", "year": 1988, "format": null
        })).expect("should parse dto");
        let err = BookRecord::try_from(dto).expect_err("should reject format");
        assert_eq!(EMPTY_FIELD, err.message());
        assert_eq!("format: empty field", err.to_string());
    }

    #[test]
    fn test_should_not_write_null_format_for_books() {
        let record = BookRecord::from(BookEntity::new("Kitchen", "Banana Yoshimoto", 1988).expect("should build book"));
        let value = serde_json::to_value(BookDto::from(&record)).expect("should serialize");
        assert!(value.get("format").is_none());
        assert_eq!(Some("available"), value["status"].as_str());
    }

    #[test]
    fn test_should_name_missing_field() {
        let dto: BookDto = serde_json::from_value(json!({
            "kind": "book", "title": "Kitchen", "year": 1988
        })).expect("should parse dto");
        let err = BookRecord::try_from(dto).expect_err("should reject record");
        assert_eq!(MISSING_FIELD, err.message());
        assert_eq!("author: missing field", err.to_string());
    }
}
