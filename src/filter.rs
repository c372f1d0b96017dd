use crate::catalog::Book;

/// Form value that stands for "no restriction" in the author and genre selects.
pub const ANY: &str = "any";

/// One select dimension of a search: unrestricted or an exact id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Map a raw form value; `"any"` and blank values mean no restriction.
    pub fn from_form(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Selection::Any
        } else {
            Selection::Id(value.to_string())
        }
    }

    pub fn as_form_value(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }
}

/// Search criteria, rebuilt from scratch on every submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl Filter {
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: Selection::from_form(author),
            genre: Selection::from_form(genre),
        }
    }

    /// True when no dimension restricts the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.title.trim().is_empty() && self.author == Selection::Any && self.genre == Selection::Any
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }

    fn title_matches(&self, book: &Book) -> bool {
        self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    fn author_matches(&self, book: &Book) -> bool {
        match &self.author {
            Selection::Any => true,
            Selection::Id(id) => book.author == *id,
        }
    }

    fn genre_matches(&self, book: &Book) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Id(id) => book.genres.iter().any(|g| g == id),
        }
    }
}

/// Books satisfying `filter`, in input order.
pub fn filter_books<'a, I>(books: I, filter: &Filter) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    books.into_iter().filter(|b| filter.matches(b)).collect()
}

/// Catalog positions of the books satisfying `filter`, ascending.
pub fn matching_indices(books: &[Book], filter: &Filter) -> Vec<usize> {
    books
        .iter()
        .enumerate()
        .filter(|(_, b)| filter.matches(b))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{book, numbered_catalog};
    use proptest::prelude::*;

    fn shelf() -> Vec<Book> {
        vec![
            book("1", "Dune", "herbert", &["sf"]),
            book("2", "Dune Messiah", "herbert", &["sf"]),
            book("3", "Emma", "austen", &["romance", "classic"]),
            book("4", "Persuasion", "austen", &["romance"]),
            book("5", "Dracula", "stoker", &["horror", "classic"]),
        ]
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_unrestricted_returns_everything_in_order() {
        let books = shelf();
        let result = filter_books(&books, &Filter::from_form("", "any", "any"));
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_whitespace_title_matches_all() {
        let books = shelf();
        assert_eq!(filter_books(&books, &Filter::from_form("   ", "any", "any")).len(), 5);
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let books = shelf();
        let result = filter_books(&books, &Filter::from_form("dUNE", "any", "any"));
        assert_eq!(ids(&result), vec!["1", "2"]);
        let result = filter_books(&books, &Filter::from_form("messiah", "any", "any"));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_author_and_genre_are_exact() {
        let books = shelf();
        let result = filter_books(&books, &Filter::from_form("", "austen", "any"));
        assert_eq!(ids(&result), vec!["3", "4"]);
        let result = filter_books(&books, &Filter::from_form("", "any", "classic"));
        assert_eq!(ids(&result), vec!["3", "5"]);
        let result = filter_books(&books, &Filter::from_form("", "aust", "any"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_predicates_are_anded() {
        let books = shelf();
        let result = filter_books(&books, &Filter::from_form("e", "austen", "classic"));
        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn test_single_dune_scenario() {
        let books = vec![
            book("1", "Dune", "herbert", &["sf"]),
            book("2", "Emma", "austen", &["romance"]),
        ];
        let result = filter_books(&books, &Filter::from_form("dune", "any", "any"));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_blank_selection_defaults_to_any() {
        assert_eq!(Selection::from_form(""), Selection::Any);
        assert_eq!(Selection::from_form(" any "), Selection::Any);
        assert_eq!(Selection::from_form("x"), Selection::Id("x".to_string()));
        assert_eq!(Selection::Id("x".to_string()).as_form_value(), "x");
        assert_eq!(Selection::Any.as_form_value(), ANY);
    }

    #[test]
    fn test_matching_indices_follow_catalog_positions() {
        let books = shelf();
        let filter = Filter::from_form("", "any", "romance");
        assert_eq!(matching_indices(&books, &filter), vec![2, 3]);
    }

    fn arb_filter() -> impl Strategy<Value = Filter> {
        (
            prop_oneof![Just(String::new()), Just(" ".to_string()), "[a-zA-Z0-9 ]{1,3}"],
            prop_oneof![Just("any".to_string()), "a[0-3]"],
            prop_oneof![Just("any".to_string()), "g[0-2]"],
        )
            .prop_map(|(t, a, g)| Filter::from_form(&t, &a, &g))
    }

    proptest! {
        #[test]
        fn prop_every_result_satisfies_filter(n in 0usize..40, filter in arb_filter()) {
            let catalog = numbered_catalog(n);
            for b in filter_books(catalog.books(), &filter) {
                prop_assert!(filter.matches(b));
                if !filter.title.trim().is_empty() {
                    prop_assert!(b.title.to_lowercase().contains(&filter.title.to_lowercase()));
                }
                if let Selection::Id(a) = &filter.author {
                    prop_assert_eq!(&b.author, a);
                }
                if let Selection::Id(g) = &filter.genre {
                    prop_assert!(b.genres.contains(g));
                }
            }
        }

        #[test]
        fn prop_filter_is_idempotent(n in 0usize..40, filter in arb_filter()) {
            let catalog = numbered_catalog(n);
            let once = filter_books(catalog.books(), &filter);
            let twice = filter_books(once.iter().copied(), &filter);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_indices_are_ascending_subset(n in 0usize..40, filter in arb_filter()) {
            let catalog = numbered_catalog(n);
            let idx = matching_indices(catalog.books(), &filter);
            prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(idx.iter().all(|&i| i < n));
            prop_assert_eq!(idx.len(), filter_books(catalog.books(), &filter).len());
        }
    }
}
