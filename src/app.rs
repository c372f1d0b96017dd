use crate::catalog::Catalog;
use crate::detail::DetailView;
use crate::filter::{Filter, matching_indices};
use crate::pager::Pager;
use crate::preview::{PreviewCard, PreviewEvent, PreviewGrid};
use crate::theme::Theme;
use crate::ui::layout::{self, MainLayout};
use crate::ui::search::{SearchForm, SearchInputResult};
use crate::ui::settings::{SettingsForm, SettingsInputResult};
use ratatui::layout::{Position, Rect};

/// Which overlay is currently on top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Search,
    Settings,
    Detail,
    Help,
}

/// Main application state. The only owner of the match set and page counter.
pub struct App {
    pub catalog: Catalog,
    pub should_quit: bool,
    pub overlay: Overlay,
    pub theme: Theme,

    // Last applied search
    pub filter: Filter,
    pub matches: Vec<usize>,
    pub pager: Pager,

    // Revealed previews
    pub grid: PreviewGrid,
    pub grid_columns: usize,
    pub grid_rows: usize,
    pub screen: Rect,

    pub detail: Option<DetailView>,
    pub search_form: SearchForm,
    pub settings_form: SettingsForm,

    // Status message
    pub status_msg: String,
}

/// Previews for the given catalog positions, built as one batch.
fn cards_for(catalog: &Catalog, indices: &[usize]) -> Vec<PreviewCard> {
    indices
        .iter()
        .filter_map(|&i| catalog.get(i))
        .map(|book| PreviewCard::from_book(book, catalog))
        .collect()
}

impl App {
    pub fn new(catalog: Catalog, page_size: usize, theme: Theme) -> Self {
        let search_form = SearchForm::new(&catalog);
        Self {
            catalog,
            should_quit: false,
            overlay: Overlay::None,
            theme,

            filter: Filter::default(),
            matches: Vec::new(),
            pager: Pager::new(page_size),

            grid: PreviewGrid::default(),
            grid_columns: 1,
            grid_rows: 1,
            screen: Rect::default(),

            detail: None,
            search_form,
            settings_form: SettingsForm::default(),

            status_msg: String::new(),
        }
    }

    /// Initial render: the whole catalog, first page.
    pub fn init(&mut self) {
        self.apply_filter(Filter::default());
        self.status_msg = if self.catalog.is_empty() {
            "Catalog has no books".to_string()
        } else {
            format!("{} books loaded", self.catalog.len())
        };
    }

    /// Replace the active filter, reset to page 1 and redraw the grid.
    pub fn apply_filter(&mut self, filter: Filter) {
        self.matches = matching_indices(self.catalog.books(), &filter);
        self.filter = filter;
        self.pager.reset();

        let batch = cards_for(&self.catalog, self.pager.initial_slice(&self.matches));
        self.grid.replace(batch);

        tracing::debug!(
            title = %self.filter.title,
            author = self.filter.author.as_form_value(),
            genre = self.filter.genre.as_form_value(),
            matches = self.matches.len(),
            "filter applied"
        );
        self.status_msg = if self.filter.is_unrestricted() {
            format!("{} books", self.matches.len())
        } else {
            format!("{} matches", self.matches.len())
        };
    }

    /// Back to the whole catalog with a blank search form.
    pub fn clear_filter(&mut self) {
        self.search_form = SearchForm::new(&self.catalog);
        self.apply_filter(Filter::default());
    }

    /// Append the next page of previews. No-op once everything is shown.
    pub fn show_more(&mut self) {
        let slice = self.pager.advance(&self.matches);
        if slice.is_empty() {
            return;
        }
        let batch = cards_for(&self.catalog, slice);
        self.grid.append(batch);
        tracing::debug!(
            page = self.pager.page(),
            page_size = self.pager.page_size(),
            shown = self.grid.len(),
            "show more"
        );
    }

    pub fn remaining(&self) -> usize {
        self.pager.remaining(self.matches.len())
    }

    pub fn can_show_more(&self) -> bool {
        self.remaining() > 0
    }

    pub fn show_more_label(&self) -> String {
        self.pager.show_more_label(self.matches.len())
    }

    // ── Overlays ──

    pub fn open_search(&mut self) {
        self.search_form.open();
        self.overlay = Overlay::Search;
    }

    pub fn handle_search_result(&mut self, result: SearchInputResult) {
        match result {
            SearchInputResult::Submit(filter) => {
                self.apply_filter(filter);
                self.overlay = Overlay::None;
            }
            SearchInputResult::Cancel => self.overlay = Overlay::None,
        }
    }

    pub fn open_settings(&mut self) {
        self.settings_form.open(self.theme);
        self.overlay = Overlay::Settings;
    }

    pub fn handle_settings_result(&mut self, result: SettingsInputResult) {
        if let SettingsInputResult::Submit(theme) = result {
            tracing::debug!(%theme, "theme applied");
            self.theme = theme;
        }
        self.overlay = Overlay::None;
    }

    /// Open the detail overlay for `id`. Unknown ids leave everything as is.
    pub fn open_detail(&mut self, id: &str) {
        if let Some(view) = DetailView::open(&self.catalog, id) {
            self.detail = Some(view);
            self.overlay = Overlay::Detail;
        }
    }

    /// Dismiss whatever overlay is open, dropping any detail view.
    pub fn close_overlay(&mut self) {
        self.detail = None;
        self.overlay = Overlay::None;
    }

    pub fn handle_preview_event(&mut self, event: PreviewEvent) {
        match event {
            PreviewEvent::Selected { id } => self.open_detail(&id),
        }
    }

    /// Activate the selected card.
    pub fn activate_selected(&mut self) {
        if let Some(event) = self.grid.activate_selected() {
            self.handle_preview_event(event);
        }
    }

    pub fn toggle_help(&mut self) {
        self.overlay = if self.overlay == Overlay::Help {
            Overlay::None
        } else {
            Overlay::Help
        };
    }

    // ── Grid navigation ──

    /// Record the terminal size and recompute how many cards fit.
    pub fn update_viewport(&mut self, screen: Rect) {
        self.screen = screen;
        let grid = self.layout().grid;
        self.grid_columns = layout::grid_columns(grid);
        self.grid_rows = layout::grid_rows(grid);
        self.grid.ensure_visible(self.grid_columns, self.grid_rows);
    }

    pub fn layout(&self) -> MainLayout {
        layout::main_layout(self.screen)
    }

    pub fn move_left(&mut self) {
        self.grid.select_prev();
        self.grid.ensure_visible(self.grid_columns, self.grid_rows);
    }

    pub fn move_right(&mut self) {
        self.grid.select_next();
        self.grid.ensure_visible(self.grid_columns, self.grid_rows);
    }

    pub fn move_up(&mut self) {
        self.grid.select_up(self.grid_columns);
        self.grid.ensure_visible(self.grid_columns, self.grid_rows);
    }

    pub fn move_down(&mut self) {
        self.grid.select_down(self.grid_columns);
        self.grid.ensure_visible(self.grid_columns, self.grid_rows);
    }

    pub fn move_first(&mut self) {
        self.grid.select_first();
        self.grid.ensure_visible(self.grid_columns, self.grid_rows);
    }

    pub fn move_last(&mut self) {
        self.grid.select_last();
        self.grid.ensure_visible(self.grid_columns, self.grid_rows);
    }

    /// Left click at a screen position.
    pub fn click(&mut self, x: u16, y: u16) {
        match self.overlay {
            Overlay::Detail | Overlay::Help => {
                self.close_overlay();
                return;
            }
            Overlay::Search | Overlay::Settings => return,
            Overlay::None => {}
        }

        let layout = self.layout();
        if layout.button.contains(Position::new(x, y)) {
            self.show_more();
            return;
        }
        if let Some(slot) = layout::hit_card(layout.grid, self.grid_columns, x, y) {
            let index = self.grid.scroll_row() * self.grid_columns + slot;
            if let Some(event) = self.grid.activate(index) {
                self.grid.select(index);
                self.handle_preview_event(event);
            }
        }
    }
}
