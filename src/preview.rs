use crate::catalog::{Book, Catalog};
use crate::theme::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Signal emitted when a card is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    Selected { id: String },
}

/// Everything a preview shows. Rendering is a pure function of these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub id: String,
    pub image: String,
    pub title: String,
    /// `None` when the book's author id has no display name.
    pub author: Option<String>,
}

impl PreviewCard {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).map(str::to_string),
        }
    }

    /// Card body for an inner width of `width` cells.
    pub fn render_lines(&self, width: usize, palette: Palette) -> Vec<Line<'static>> {
        let text = Style::default().fg(palette.dark).bg(palette.light);
        vec![
            Line::from(Span::styled(
                truncate_width(&self.title, width),
                text.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_width(self.author.as_deref().unwrap_or(""), width),
                text.add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                truncate_width(&format!("▣ {}", self.image), width),
                text.add_modifier(Modifier::DIM),
            )),
        ]
    }
}

/// Truncate to at most `max_width` display cells, adding "…" if truncated.
pub fn truncate_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        result.push(c);
        used += w;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

/// The revealed cards plus the grid cursor.
#[derive(Debug, Clone, Default)]
pub struct PreviewGrid {
    cards: Vec<PreviewCard>,
    selected: usize,
    /// First visible row.
    scroll_row: usize,
}

impl PreviewGrid {
    pub fn cards(&self) -> &[PreviewCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Drop every card and insert `batch` in one step, cursor back at the top.
    pub fn replace(&mut self, batch: Vec<PreviewCard>) {
        self.cards = batch;
        self.selected = 0;
        self.scroll_row = 0;
    }

    /// Append `batch` after the existing cards, which are left untouched.
    pub fn append(&mut self, batch: Vec<PreviewCard>) {
        self.cards.extend(batch);
    }

    /// Emit the selection signal for the card at `index`.
    pub fn activate(&self, index: usize) -> Option<PreviewEvent> {
        self.cards.get(index).map(|card| PreviewEvent::Selected {
            id: card.id.clone(),
        })
    }

    pub fn activate_selected(&self) -> Option<PreviewEvent> {
        self.activate(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.cards.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self, columns: usize) {
        let target = self.selected + columns.max(1);
        if target < self.cards.len() {
            self.selected = target;
        } else if !self.cards.is_empty() {
            self.selected = self.cards.len() - 1;
        }
    }

    pub fn select_up(&mut self, columns: usize) {
        self.selected = self.selected.saturating_sub(columns.max(1));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.cards.len().saturating_sub(1);
    }

    /// Adjust the scroll so the selected card's row is inside the viewport.
    pub fn ensure_visible(&mut self, columns: usize, rows: usize) {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let row = self.selected / columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }
}
