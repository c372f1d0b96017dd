use crate::catalog::Catalog;

/// Shown in place of an author whose id has no display name.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Contents of the detail overlay for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    /// Backdrop image; the same cover rendered behind the overlay.
    pub blurred_image: String,
    pub image: String,
    pub title: String,
    /// "Author (year)".
    pub subtitle: String,
    pub description: String,
    pub genres: Vec<String>,
}

impl DetailView {
    /// Build the overlay for `id`, or `None` if the catalog has no such book.
    pub fn open(catalog: &Catalog, id: &str) -> Option<Self> {
        let Some(book) = catalog.find(id) else {
            tracing::debug!(%id, "detail requested for unknown book id, ignoring");
            return None;
        };
        let author = catalog.author_name(&book.author).unwrap_or(UNKNOWN_AUTHOR);
        Some(Self {
            id: book.id.clone(),
            blurred_image: book.image.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author, book.year()),
            description: book.description.clone(),
            genres: book
                .genres
                .iter()
                .map(|g| catalog.genre_name(g).unwrap_or(g).to_string())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{book, numbered_catalog};

    #[test]
    fn test_open_populates_fields() {
        let catalog = numbered_catalog(4);
        let view = DetailView::open(&catalog, "b2").unwrap();
        assert_eq!(view.title, "Book 2");
        assert_eq!(view.subtitle, "Cy (1965)");
        assert_eq!(view.description, "About Book 2");
        assert_eq!(view.image, "https://covers.test/b2.jpg");
        assert_eq!(view.blurred_image, view.image);
        assert_eq!(view.genres, vec!["Fiction".to_string()]);
    }

    #[test]
    fn test_open_unknown_id_is_none() {
        let catalog = numbered_catalog(4);
        assert!(DetailView::open(&catalog, "nope").is_none());
    }

    #[test]
    fn test_unknown_author_and_genre_fall_back() {
        let catalog = Catalog::new(
            vec![book("x", "Stray", "ghost", &["weird"])],
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        let view = DetailView::open(&catalog, "x").unwrap();
        assert_eq!(view.subtitle, "Unknown author (1965)");
        assert_eq!(view.genres, vec!["weird".to_string()]);
    }
}
