use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use crate::books::domain::record::BookRecord;
use crate::books::repository::{decode_records, encode_records, BookRepository};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the catalog as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Repository<BookRecord> for JsonBookRepository {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load_all(&self) -> LibraryResult<Vec<BookRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("catalog file {} does not exist yet", self.path.display());
                return Ok(vec![]);
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                return Err(LibraryError::corrupt_store(
                    format!("catalog file {} is not valid UTF-8", self.path.display()).as_str()));
            }
            Err(err) => {
                let message = format!("failed to read {}: {}", self.path.display(), err);
                return Err(LibraryError::runtime(message.as_str(), Some(err)));
            }
        };
        let records = decode_records(&text).map_err(|err| match err {
            LibraryError::CorruptStore { message } => {
                LibraryError::corrupt_store(format!("{}: {}", self.path.display(), message).as_str())
            }
            other => other,
        })?;
        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    // Writes into a temporary file next to the target and renames it over the
    // target, so a failed write leaves the previous catalog untouched.
    fn save_all(&self, entities: &[BookRecord]) -> LibraryResult<()> {
        let text = encode_records(entities)?;
        let dir = self.directory();
        fs::create_dir_all(dir)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| {
            let message = format!("failed to replace {}: {}", self.path.display(), err.error);
            LibraryError::runtime(message.as_str(), Some(err.error))
        })?;
        debug!("saved {} records to {}", entities.len(), self.path.display());
        Ok(())
    }
}

impl BookRepository for JsonBookRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
