use crate::catalog::Catalog;
use crate::filter::{ANY, Filter};
use crate::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::layout::centered_rect;

/// Result of search form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInputResult {
    Submit(Filter),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}

/// A select control: `(value, label)` options with "any" first.
#[derive(Debug, Clone)]
pub struct Select {
    options: Vec<(String, String)>,
    selected: usize,
}

impl Select {
    fn new<'a>(any_label: &str, entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut options = vec![(ANY.to_string(), any_label.to_string())];
        options.extend(
            entries
                .into_iter()
                .map(|(id, name)| (id.to_string(), name.to_string())),
        );
        Self {
            options,
            selected: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.options[self.selected].0
    }

    pub fn label(&self) -> &str {
        &self.options[self.selected].1
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }
}

/// The search overlay: title text plus author and genre selects.
///
/// Values are kept between openings, like a form that is hidden and shown.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub title: String,
    pub author: Select,
    pub genre: Select,
    pub focus: SearchField,
}

impl SearchForm {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            author: Select::new("All Authors", catalog.authors().iter()),
            genre: Select::new("All Genres", catalog.genres().iter()),
            focus: SearchField::Title,
        }
    }

    /// Prepare for display; the title field gets focus.
    pub fn open(&mut self) {
        self.focus = SearchField::Title;
    }

    /// Display columns taken by the title text.
    fn title_width(&self) -> u16 {
        u16::try_from(self.title.width()).unwrap_or(u16::MAX)
    }

    pub fn to_filter(&self) -> Filter {
        Filter::from_form(&self.title, self.author.value(), self.genre.value())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchInputResult> {
        match key.code {
            KeyCode::Enter => return Some(SearchInputResult::Submit(self.to_filter())),
            KeyCode::Esc => return Some(SearchInputResult::Cancel),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Right => match self.focus {
                SearchField::Author => self.author.next(),
                SearchField::Genre => self.genre.next(),
                SearchField::Title => {}
            },
            KeyCode::Left => match self.focus {
                SearchField::Author => self.author.prev(),
                SearchField::Genre => self.genre.prev(),
                SearchField::Title => {}
            },
            KeyCode::Char(c) if self.focus == SearchField::Title => self.title.push(c),
            KeyCode::Backspace if self.focus == SearchField::Title => {
                self.title.pop();
            }
            _ => {}
        }
        None
    }

    /// Render the search overlay
    pub fn render(&self, frame: &mut Frame, palette: Palette) {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);

        let base = Style::default().fg(palette.dark).bg(palette.light);
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(base.fg(Color::Cyan))
            .title_bottom(
                Line::from(" Tab: Field | ←→: Choose | Enter: Search | Esc: Cancel ")
                    .style(base.fg(Color::DarkGray)),
            )
            .style(base);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let field_style = |field: SearchField| {
            if self.focus == field {
                base.fg(Color::Yellow)
            } else {
                base
            }
        };

        let title = Paragraph::new(self.title.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_style(SearchField::Title))
                .title(" Title "),
        );
        frame.render_widget(title, chunks[0]);

        let author = Paragraph::new(format!("‹ {} ›", self.author.label())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_style(SearchField::Author))
                .title(" Author "),
        );
        frame.render_widget(author, chunks[1]);

        let genre = Paragraph::new(format!("‹ {} ›", self.genre.label())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_style(SearchField::Genre))
                .title(" Genre "),
        );
        frame.render_widget(genre, chunks[2]);

        if self.focus == SearchField::Title {
            let x = (chunks[0].x + 1).saturating_add(self.title_width());
            frame.set_cursor_position((x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));
        }
    }
}
