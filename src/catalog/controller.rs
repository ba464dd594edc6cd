use std::io::{BufRead, Write};
use tracing::warn;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

const MENU: &str = "
--- Library Catalog ---
1. Add book
2. Remove book
3. List all books
4. List available books
5. Find book
6. Lend book
7. Return book
8. Save and exit";

// MenuController runs the interactive menu over any line based input and
// output. It is the only place where errors are turned into user text.
pub struct MenuController<R, W> {
    catalog: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(catalog: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (Box<dyn CatalogService>, W) {
        (self.catalog, self.output)
    }

    /// Runs until the user picks "Save and exit" or the input ends, then
    /// saves the catalog once whatever the autosave setting.
    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else { break };
            let keep_going = match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.remove_book()?,
                "3" => self.list_books(false)?,
                "4" => self.list_books(true)?,
                "5" => self.find_book()?,
                "6" => self.lend_book()?,
                "7" => self.return_book()?,
                "8" => false,
                _ => {
                    writeln!(self.output, "Invalid option, try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.save_on_exit()
    }

    // Each handler returns false when the input ran out mid-dialog.
    fn add_book(&mut self) -> LibraryResult<bool> {
        writeln!(self.output, "\nAdd book")?;
        let Some(digital) = self.prompt("Is it a digital book? (y/n): ")? else { return Ok(false) };
        let Some(title) = self.ask_text("Title: ")? else { return Ok(false) };
        let Some(author) = self.ask_text("Author: ")? else { return Ok(false) };
        let Some(year) = self.ask_year("Publication year: ")? else { return Ok(false) };
        let Some(status) = self.prompt("Status (available/loaned): ")? else { return Ok(false) };
        let mut req = AddBookCommandRequest::new(title.as_str(), author.as_str(), year)
            .with_status(status.as_str());
        if digital.eq_ignore_ascii_case("y") {
            let Some(format) = self.ask_text("Format (e.g. PDF, ePub): ")? else { return Ok(false) };
            req = req.with_format(format.as_str());
        }
        let result = AddBookCommand::new(&mut *self.catalog).execute(req);
        match result {
            Ok(res) => writeln!(self.output, "Book added: {}", res.book)?,
            Err(err) => self.report(err)?,
        }
        Ok(true)
    }

    fn remove_book(&mut self) -> LibraryResult<bool> {
        writeln!(self.output, "\nRemove book")?;
        let Some(title) = self.ask_text("Title of the book to remove: ")? else { return Ok(false) };
        let result = RemoveBookCommand::new(&mut *self.catalog)
            .execute(RemoveBookCommandRequest::new(title.as_str()));
        match result {
            Ok(res) => writeln!(self.output, "Book removed: {}", res.book)?,
            Err(err) => self.report(err)?,
        }
        Ok(true)
    }

    fn list_books(&mut self, only_available: bool) -> LibraryResult<bool> {
        let heading = if only_available { "Available books" } else { "All books" };
        writeln!(self.output, "\n{}", heading)?;
        let result = ListBooksCommand::new(&*self.catalog)
            .execute(ListBooksCommandRequest::new(only_available));
        match result {
            Ok(res) if res.books.is_empty() => writeln!(self.output, "Nothing to show.")?,
            Ok(res) => {
                for book in &res.books {
                    writeln!(self.output, "{}", book)?;
                }
            }
            Err(err) => self.report(err)?,
        }
        Ok(true)
    }

    fn find_book(&mut self) -> LibraryResult<bool> {
        writeln!(self.output, "\nFind book")?;
        let Some(title) = self.ask_text("Title to search for: ")? else { return Ok(false) };
        let result = GetBookCommand::new(&*self.catalog)
            .execute(GetBookCommandRequest::new(title.as_str()));
        match result {
            Ok(res) => match res.book {
                Some(book) => writeln!(self.output, "Found: {}", book)?,
                None => writeln!(self.output, "No book with that title.")?,
            },
            Err(err) => self.report(err)?,
        }
        Ok(true)
    }

    fn lend_book(&mut self) -> LibraryResult<bool> {
        writeln!(self.output, "\nLend book")?;
        let Some(title) = self.ask_text("Title to lend: ")? else { return Ok(false) };
        let result = LendBookCommand::new(&mut *self.catalog)
            .execute(LendBookCommandRequest::new(title.as_str()));
        match result {
            Ok(res) => writeln!(self.output, "Marked as loaned: {}", res.book)?,
            Err(err) => self.report(err)?,
        }
        Ok(true)
    }

    fn return_book(&mut self) -> LibraryResult<bool> {
        writeln!(self.output, "\nReturn book")?;
        let Some(title) = self.ask_text("Title to return: ")? else { return Ok(false) };
        let result = ReturnBookCommand::new(&mut *self.catalog)
            .execute(ReturnBookCommandRequest::new(title.as_str()));
        match result {
            Ok(res) => writeln!(self.output, "Marked as available: {}", res.book)?,
            Err(err) => self.report(err)?,
        }
        Ok(true)
    }

    fn save_on_exit(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\nSaving and exiting...")?;
        if let Err(err) = self.catalog.save() {
            warn!("final save failed: {}", err);
            writeln!(self.output, "Warning: could not save the catalog: {}", err)?;
        }
        writeln!(self.output, "See you next time!")?;
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, err: CommandError) -> LibraryResult<()> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    // Trimmed next line, None once the input is exhausted.
    fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_text(&mut self, label: &str) -> LibraryResult<Option<String>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(text) if text.is_empty() => writeln!(self.output, "This field cannot be empty.")?,
                Some(text) => return Ok(Some(text)),
            }
        }
    }

    fn ask_year(&mut self, label: &str) -> LibraryResult<Option<i64>> {
        loop {
            let Some(text) = self.prompt(label)? else { return Ok(None) };
            match text.parse::<i64>() {
                Ok(year) if year >= 1 => return Ok(Some(year)),
                Ok(_) => writeln!(self.output, "Must be a number >= 1.")?,
                Err(_) => writeln!(self.output, "Enter a valid number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::books::domain::Book;
    use crate::books::repository::memory_book_repository::InMemoryBookRepository;
    use crate::catalog::controller::MenuController;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::core::repository::RepositoryStore;

    fn run_script_with(repo: &InMemoryBookRepository, autosave: bool, script: &str) -> (Box<dyn CatalogService>, String) {
        let config = Configuration::new(Path::new("test.json"))
            .with_store(RepositoryStore::InMemory)
            .with_autosave(autosave);
        let svc = CatalogServiceImpl::initialize(&config, Box::new(repo.clone())).expect("should initialize catalog");
        let mut controller = MenuController::new(Box::new(svc), script.as_bytes(), Vec::new());
        controller.run().expect("menu should run");
        let (catalog, output) = controller.into_parts();
        (catalog, String::from_utf8(output).expect("output should be utf-8"))
    }

    fn run_script(script: &str) -> (Box<dyn CatalogService>, String) {
        run_script_with(&InMemoryBookRepository::new(), true, script)
    }

    #[test]
    fn test_should_add_book_from_menu() {
        let (catalog, output) = run_script("1\nn\nKokoro\nNatsume Soseki\n1914\n\n8\n");
        assert!(output.contains("Book added: Title: Kokoro, Author: Natsume Soseki, Year: 1914, Status: Available"));
        assert_eq!(11, catalog.len());
        assert!(output.contains("See you next time!"));
    }

    #[test]
    fn test_should_add_digital_book_from_menu() {
        let (catalog, output) = run_script("1\ny\nKokoro\nNatsume Soseki\n1914\nloaned\nePub\n8\n");
        assert!(output.contains("Format: ePub"));
        let book = catalog.find_book("kokoro").expect("should find book");
        assert_eq!(BookStatus::Loaned, book.status());
        assert_eq!(Some("ePub"), book.as_digital().map(|d| d.format()));
    }

    #[test]
    fn test_should_reprompt_for_bad_input() {
        let (catalog, output) = run_script("1\nn\n\nKokoro\nNatsume Soseki\nabc\n0\n1914\n\n8\n");
        assert!(output.contains("This field cannot be empty."));
        assert!(output.contains("Enter a valid number."));
        assert!(output.contains("Must be a number >= 1."));
        assert_eq!(Some(1914), catalog.find_book("Kokoro").map(|b| b.year().value()));
    }

    #[test]
    fn test_should_report_command_errors() {
        let (catalog, output) = run_script("1\nn\nkitchen\nBANANA YOSHIMOTO\n2000\n\n1\nn\nKokoro\nNatsume Soseki\n1914\nlost\n6\nAmrita\n6\nAmrita\n2\nKokoro\n8\n");
        assert!(output.contains("Error: a book titled 'kitchen' by BANANA YOSHIMOTO already exists"));
        assert!(output.contains("Error: status: invalid status"));
        assert!(output.contains("Marked as loaned: Title: Amrita"));
        assert!(output.contains("Error: already loaned"));
        assert!(output.contains("Error: no book titled 'Kokoro'"));
        assert_eq!(10, catalog.len());
    }

    #[test]
    fn test_should_lend_list_and_return() {
        let (catalog, output) = run_script("6\nAmrita\n4\n7\namrita\n8\n");
        let available = output.split("Available books").nth(1).expect("should list available books");
        let available = available.split("Return book").next().expect("should end listing");
        assert!(available.contains("Title: Kitchen"));
        assert!(!available.contains("Title: Amrita"));
        assert!(output.contains("Marked as available: Title: Amrita"));
        assert_eq!(Some(BookStatus::Available), catalog.find_book("Amrita").map(|b| b.status()));
    }

    #[test]
    fn test_should_find_and_remove_books() {
        let (catalog, output) = run_script("5\nrashōmon\n5\nKokoro\n2\nKitchen\n3\n8\n");
        assert!(output.contains("Found: Title: Rashōmon, Author: Ryunosuke Akutagawa"));
        assert!(output.contains("No book with that title."));
        assert!(output.contains("Book removed: Title: Kitchen"));
        assert_eq!(9, catalog.len());
    }

    #[test]
    fn test_should_show_nothing_for_empty_list() {
        let repo = InMemoryBookRepository::with_content("[]");
        let (_, output) = run_script_with(&repo, true, "3\n4\n8\n");
        assert_eq!(2, output.matches("Nothing to show.").count());
    }

    #[test]
    fn test_should_reject_unknown_option() {
        let (_, output) = run_script("9\n8\n");
        assert!(output.contains("Invalid option, try again."));
    }

    #[test]
    fn test_should_save_on_end_of_input() {
        let repo = InMemoryBookRepository::new();
        let (_, output) = run_script_with(&repo, false, "1\nn\nKokoro\nNatsume Soseki\n1914\n\n");
        assert!(output.contains("Saving and exiting..."));
        assert!(repo.snapshot().expect("should have snapshot").contains("Kokoro"));
    }

    #[test]
    fn test_should_stop_when_input_ends_mid_dialog() {
        let repo = InMemoryBookRepository::new();
        let (catalog, output) = run_script_with(&repo, false, "1\nn\nKokoro\n");
        assert_eq!(10, catalog.len());
        assert!(output.contains("See you next time!"));
    }
}
