/// Number of previews revealed per page unless configured otherwise.
pub const PAGE_SIZE: usize = 36;

/// Page counter over a match set.
///
/// The initial render shows pages `1..=page`; every "show more" reveals
/// exactly the next `page_size` items without touching the ones already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    /// A pager on page 1. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Everything revealed so far: `matches[0 .. page * P)`.
    pub fn initial_slice<'a, T>(&self, matches: &'a [T]) -> &'a [T] {
        &matches[..self.revealed(matches.len())]
    }

    /// The slice the next "show more" would append.
    pub fn next_slice<'a, T>(&self, matches: &'a [T]) -> &'a [T] {
        let start = self.revealed(matches.len());
        let end = ((self.page + 1) * self.page_size).min(matches.len());
        &matches[start..end]
    }

    /// Reveal the next page. Returns the newly revealed items; when nothing
    /// remains the page counter stays put and the slice is empty.
    pub fn advance<'a, T>(&mut self, matches: &'a [T]) -> &'a [T] {
        let slice = self.next_slice(matches);
        if !slice.is_empty() {
            self.page += 1;
        }
        slice
    }

    /// Number of items revealed for a match set of `len`.
    pub fn revealed(&self, len: usize) -> usize {
        (self.page * self.page_size).min(len)
    }

    pub fn remaining(&self, len: usize) -> usize {
        len.saturating_sub(self.page * self.page_size)
    }

    pub fn can_show_more(&self, len: usize) -> bool {
        self.remaining(len) > 0
    }

    pub fn show_more_label(&self, len: usize) -> String {
        format!("Show more ({})", self.remaining(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twenty_five_items_page_size_ten() {
        let matches: Vec<usize> = (0..25).collect();
        let mut pager = Pager::new(10);

        assert_eq!(pager.initial_slice(&matches), &matches[0..10]);
        assert_eq!(pager.show_more_label(matches.len()), "Show more (15)");
        assert!(pager.can_show_more(matches.len()));

        assert_eq!(pager.advance(&matches), &matches[10..20]);
        assert_eq!(pager.revealed(matches.len()), 20);
        assert_eq!(pager.remaining(matches.len()), 5);

        assert_eq!(pager.advance(&matches), &matches[20..25]);
        assert_eq!(pager.revealed(matches.len()), 25);
        assert_eq!(pager.remaining(matches.len()), 0);
        assert!(!pager.can_show_more(matches.len()));
        assert_eq!(pager.show_more_label(matches.len()), "Show more (0)");
    }

    #[test]
    fn test_advance_when_exhausted_is_noop() {
        let matches = [1, 2, 3];
        let mut pager = Pager::new(10);
        assert!(pager.advance(&matches).is_empty());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let matches: Vec<usize> = (0..100).collect();
        let mut pager = Pager::new(10);
        pager.advance(&matches);
        pager.advance(&matches);
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.initial_slice(&matches).len(), 30);
        pager.reset();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.initial_slice(&matches).len(), 10);
    }

    #[test]
    fn test_empty_matches() {
        let matches: [u8; 0] = [];
        let pager = Pager::default();
        assert_eq!(pager.page_size(), PAGE_SIZE);
        assert!(pager.initial_slice(&matches).is_empty());
        assert!(pager.next_slice(&matches).is_empty());
        assert!(!pager.can_show_more(0));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }

    proptest! {
        #[test]
        fn prop_remaining_hits_zero_exactly_when_all_revealed(len in 0usize..200, size in 1usize..30) {
            let matches: Vec<usize> = (0..len).collect();
            let mut pager = Pager::new(size);
            let mut shown = pager.initial_slice(&matches).to_vec();
            loop {
                prop_assert_eq!(pager.revealed(len), shown.len());
                prop_assert_eq!(pager.remaining(len) == 0, shown.len() == len);
                if !pager.can_show_more(len) {
                    break;
                }
                let next = pager.advance(&matches);
                prop_assert!(next.len() <= size && !next.is_empty());
                shown.extend_from_slice(next);
            }
            prop_assert_eq!(shown, matches);
            prop_assert!(pager.page() * size < len + size || len == 0);
        }
    }
}
