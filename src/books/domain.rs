use crate::books::domain::model::PublicationYear;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryResult};

pub mod model;
pub mod record;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn year(&self) -> PublicationYear;
    fn status(&self) -> BookStatus;

    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }

    // marks the book as loaned, fails if it already is
    fn lend(&mut self) -> LibraryResult<()>;

    // marks the book as available again, fails if it already is
    fn return_book(&mut self) -> LibraryResult<()>;
}
