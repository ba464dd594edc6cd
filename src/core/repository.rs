use crate::core::library::LibraryResult;

// Repository persists a whole ordered collection at once.
pub trait Repository<Entity> {
    // whether a previously saved collection exists
    fn exists(&self) -> bool;

    // loads every entity in stored order, an absent store yields an empty list
    fn load_all(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the stored collection with the given entities
    fn save_all(&self, entities: &[Entity]) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}
