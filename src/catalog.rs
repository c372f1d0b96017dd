use crate::error::CatalogError;
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Catalog compiled into the binary, used when no catalog file is configured.
const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// A single book record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    /// Calendar year of publication (UTC).
    pub fn year(&self) -> i32 {
        self.published.year()
    }
}

/// On-disk layout of a catalog file. Name tables are read as JSON objects so
/// their key order survives (`preserve_order`).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
    #[serde(default)]
    authors: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    genres: serde_json::Map<String, serde_json::Value>,
}

/// Id to display name table in source order.
#[derive(Debug, Clone, Default)]
pub struct Names {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Names {
    /// Read a JSON name table. Every value must be a string.
    fn from_json(
        table: &'static str,
        map: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, CatalogError> {
        map.into_iter()
            .map(|(id, value)| match value {
                serde_json::Value::String(name) => Ok((id, name)),
                _ => Err(CatalogError::InvalidName { table, id }),
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// `(id, name)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }
}

impl FromIterator<(String, String)> for Names {
    /// A repeated id keeps its first position and takes the last name.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut names = Names::default();
        for (id, name) in iter {
            match names.index.get(&id) {
                Some(&i) => names.entries[i].1 = name,
                None => {
                    names.index.insert(id.clone(), names.entries.len());
                    names.entries.push((id, name));
                }
            }
        }
        names
    }
}

/// The immutable in-memory catalog: books in source order plus name lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Names,
    genres: Names,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate book ids.
    pub fn new(
        books: Vec<Book>,
        authors: impl IntoIterator<Item = (String, String)>,
        genres: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, CatalogError> {
        let authors: Names = authors.into_iter().collect();
        let genres: Names = genres.into_iter().collect();
        let mut by_id = HashMap::with_capacity(books.len());
        for (i, book) in books.iter().enumerate() {
            if by_id.insert(book.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(book.id.clone()));
            }
            if !authors.contains(&book.author) {
                tracing::warn!(book = %book.id, author = %book.author, "book references unknown author");
            }
            for genre in &book.genres {
                if !genres.contains(genre) {
                    tracing::warn!(book = %book.id, %genre, "book references unknown genre");
                }
            }
        }
        Ok(Self {
            books,
            authors,
            genres,
            by_id,
        })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let authors = Names::from_json("authors", file.authors)?;
        let genres = Names::from_json("genres", file.genres)?;
        Self::new(file.books, authors.entries, genres.entries)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), books = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The catalog bundled with the binary.
    pub fn sample() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SAMPLE_CATALOG)?;
        tracing::info!(books = catalog.len(), "using bundled sample catalog");
        Ok(catalog)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Book at a catalog position.
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Look a book up by id.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.by_id.get(id).and_then(|&i| self.books.get(i))
    }

    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id)
    }

    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id)
    }

    /// Author table in catalog order.
    pub fn authors(&self) -> &Names {
        &self.authors
    }

    /// Genre table in catalog order.
    pub fn genres(&self) -> &Names {
        &self.genres
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    /// Build a book for tests.
    pub(crate) fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("https://covers.test/{id}.jpg"),
            description: format!("About {title}"),
            published: Utc.with_ymd_and_hms(1965, 8, 1, 0, 0, 0).unwrap(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn names(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Catalog of `n` generic books, authors "a0".."a2", genres "g0".."g1".
    pub(crate) fn numbered_catalog(n: usize) -> Catalog {
        let books = (0..n)
            .map(|i| {
                book(
                    &format!("b{i}"),
                    &format!("Book {i}"),
                    &format!("a{}", i % 3),
                    &[&format!("g{}", i % 2)],
                )
            })
            .collect();
        Catalog::new(
            books,
            names(&[("a0", "Ann"), ("a1", "Bob"), ("a2", "Cy")]),
            names(&[("g0", "Fiction"), ("g1", "History")]),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let books = vec![book("x", "One", "a", &[]), book("x", "Two", "a", &[])];
        let err = Catalog::new(books, Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "x"));
    }

    #[test]
    fn test_find_and_names() {
        let catalog = numbered_catalog(5);
        assert_eq!(catalog.find("b3").unwrap().title, "Book 3");
        assert!(catalog.find("missing").is_none());
        assert_eq!(catalog.author_name("a1"), Some("Bob"));
        assert_eq!(catalog.author_name("zz"), None);
        assert_eq!(catalog.genre_name("g1"), Some("History"));
    }

    #[test]
    fn test_from_json_parses_published_year() {
        let json = r#"{
            "books": [{
                "id": "d1", "title": "Dune", "author": "fh",
                "image": "https://covers.test/dune.jpg",
                "description": "Spice.",
                "published": "1965-08-01T00:00:00.000Z",
                "genres": ["sf"]
            }],
            "authors": {"fh": "Frank Herbert"},
            "genres": {"sf": "Science Fiction"}
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].year(), 1965);
        assert_eq!(catalog.books()[0].genres, vec!["sf".to_string()]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"books":[{{"id":"1","title":"T","author":"a","image":"i","published":"2001-02-03T00:00:00Z"}}]}}"#
        )
        .unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.find("1").unwrap().year(), 2001);
        assert!(catalog.find("1").unwrap().genres.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = Catalog::sample().unwrap();
        assert!(!catalog.is_empty());
        for book in catalog.books() {
            assert!(catalog.author_name(&book.author).is_some(), "{}", book.id);
            for genre in &book.genres {
                assert!(catalog.genre_name(genre).is_some(), "{}", book.id);
            }
        }
    }

    #[test]
    fn test_name_tables_keep_source_order() {
        let json = r#"{
            "books": [],
            "authors": {"z": "adams", "a": "Zola", "m": "Brontë"},
            "genres": {"sf": "Science Fiction", "bio": "Biography"}
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let ids: Vec<&str> = catalog.authors().iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        let genres: Vec<&str> = catalog.genres().iter().map(|(_, name)| name).collect();
        assert_eq!(genres, vec!["Science Fiction", "Biography"]);
    }

    #[test]
    fn test_repeated_name_id_keeps_first_position() {
        let catalog = Catalog::new(
            Vec::new(),
            names(&[("a", "Ann"), ("b", "Bob"), ("a", "Anna")]),
            Vec::new(),
        )
        .unwrap();
        let entries: Vec<(&str, &str)> = catalog.authors().iter().collect();
        assert_eq!(entries, vec![("a", "Anna"), ("b", "Bob")]);
    }

    #[test]
    fn test_non_string_name_rejected() {
        let json = r#"{"books": [], "authors": {"a": 7}}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidName { table: "authors", id } if id == "a"
        ));
    }
}
