use std::path::{Path, PathBuf};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_DATA_FILE: &str = "library.json";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    // natural key of the object, unique within its collection
    fn id(&self) -> String;
}


// Configuration abstracts config options for the library catalog
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub autosave: bool,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            data_file: data_file.to_path_buf(),
            autosave: true,
            store: RepositoryStore::JsonFile,
        }
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }

    // The catalog file lives alongside the executable unless told otherwise.
    pub fn default_data_file() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DATA_FILE)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(Configuration::default_data_file().as_path())
    }
}
