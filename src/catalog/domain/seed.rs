use crate::books::domain::model::BookEntity;
use crate::books::domain::record::BookRecord;
use crate::core::library::LibraryResult;

const DEFAULT_BOOKS: [(&str, &str, i64); 10] = [
    ("Kitchen", "Banana Yoshimoto", 1988),
    ("Amrita", "Banana Yoshimoto", 1994),
    ("La casa de las bellas durmientes", "Yasunari Kawabata", 1961),
    ("País de nieve", "Yasunari Kawabata", 1947),
    ("Lo bello y lo triste", "Yasunari Kawabata", 1964),
    ("Una pastelería en Tokio", "Dorian Sukegawa", 2013),
    ("Midaregami (Cabello desordenado)", "Yosano Akiko", 1901),
    ("Tanka de amor", "Yosano Akiko", 1910),
    ("Rashōmon", "Ryunosuke Akutagawa", 1915),
    ("En el bosque", "Ryunosuke Akutagawa", 1922),
];

// Catalog used the first time the program runs, before any file exists.
pub fn default_catalog() -> LibraryResult<Vec<BookRecord>> {
    DEFAULT_BOOKS.iter()
        .map(|(title, author, year)| BookEntity::new(title, author, *year).map(BookRecord::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::catalog::domain::seed::default_catalog;

    #[test]
    fn test_should_build_default_catalog() {
        let books = default_catalog().expect("should build default catalog");
        assert_eq!(10, books.len());
        assert_eq!("Kitchen", books[0].title());
        assert_eq!("Amrita", books[1].title());
        assert!(books.iter().all(|b| b.is_available()));
        assert!(books.iter().all(|b| b.as_digital().is_none()));
    }
}
