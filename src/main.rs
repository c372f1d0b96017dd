mod app;
mod catalog;
mod config;
mod detail;
mod error;
mod filter;
mod logging;
mod pager;
mod preview;
mod theme;
mod ui;

use app::{App, Overlay};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use detail::DetailView;
use error::AppError;
use filter::Filter;
use pager::Pager;
use preview::PreviewCard;
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use theme::Theme;

/// TUI browser for a book catalog
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog JSON file (defaults to the bundled sample catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Startup theme: day or night
    #[arg(short, long, global = true)]
    theme: Option<Theme>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively (default)
    Run,
    /// Print the previews revealed for a search
    Search {
        /// Case-insensitive title substring
        #[arg(long, default_value = "")]
        title: String,
        /// Author id, or "any"
        #[arg(long, default_value = filter::ANY)]
        author: String,
        /// Genre id, or "any"
        #[arg(long, default_value = filter::ANY)]
        genre: String,
        /// Number of pages to reveal
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        page: u16,
    },
    /// Print the detail view of one book
    Show {
        /// Book id
        id: String,
    },
    /// List author ids and names
    Authors,
    /// List genre ids and names
    Genres,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e.user_message());
        if let Some(hint) = e.recovery_instructions() {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let _log_guard = match logging::init(&config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {}", e.user_message());
            None
        }
    };

    let catalog = match catalog_path(cli.catalog.as_deref(), config.catalog.as_deref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample()?,
    };
    let theme = startup_theme(cli.theme, config.theme, Theme::detect);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let mut app = App::new(catalog, config.page_size, theme);
            app.init();
            run_tui(&mut app)
        }
        Commands::Search {
            title,
            author,
            genre,
            page,
        } => {
            let filter = Filter::from_form(&title, &author, &genre);
            for line in search_lines(&catalog, &filter, config.page_size, page) {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Show { id } => {
            if let Some(view) = DetailView::open(&catalog, &id) {
                print_detail(&view);
            }
            Ok(())
        }
        Commands::Authors => {
            for (id, name) in catalog.authors().iter() {
                println!("{id}\t{name}");
            }
            Ok(())
        }
        Commands::Genres => {
            for (id, name) in catalog.genres().iter() {
                println!("{id}\t{name}");
            }
            Ok(())
        }
    }
}

/// `--catalog` wins over the config file; `None` means the bundled sample.
fn catalog_path<'a>(cli: Option<&'a Path>, config: Option<&'a Path>) -> Option<&'a Path> {
    cli.or(config)
}

/// `--theme`, then the config file, then terminal detection.
fn startup_theme(
    cli: Option<Theme>,
    config: Option<Theme>,
    detected: impl FnOnce() -> Theme,
) -> Theme {
    cli.or(config).unwrap_or_else(detected)
}

/// Output of the `search` command: one `id, title, author` row per revealed
/// preview, then the show-more button state.
fn search_lines(catalog: &Catalog, filter: &Filter, page_size: usize, pages: u16) -> Vec<String> {
    let matches = filter::filter_books(catalog.books(), filter);
    let mut pager = Pager::new(page_size);
    for _ in 1..pages {
        pager.advance(&matches);
    }

    let mut lines = Vec::new();
    if matches.is_empty() {
        lines.push("No results found. Your filters might be too narrow.".to_string());
    }
    for book in pager.initial_slice(&matches) {
        let card = PreviewCard::from_book(book, catalog);
        lines.push(format!(
            "{}\t{}\t{}",
            card.id,
            card.title,
            card.author.as_deref().unwrap_or("")
        ));
    }
    let state = if pager.can_show_more(matches.len()) { "" } else { " [disabled]" };
    lines.push(format!("{}{}", pager.show_more_label(matches.len()), state));
    lines
}

fn print_detail(view: &DetailView) {
    println!("{}", view.title);
    println!("{}", view.subtitle);
    println!("Cover: {}", view.image);
    if !view.genres.is_empty() {
        println!("Genres: {}", view.genres.join(", "));
    }
    println!();
    println!("{}", view.description);
}

fn run_tui(app: &mut App) -> Result<(), AppError> {
    // Init terminal
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    let size = terminal.size()?;
    app.update_viewport(Rect::new(0, 0, size.width, size.height));
    tracing::info!(width = size.width, height = size.height, theme = %app.theme, "tui started");

    // Main loop
    let result = run_app(&mut terminal, app);

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(app, key);
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(width, height) => {
                    app.update_viewport(Rect::new(0, 0, width, height));
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.overlay {
        Overlay::Search => {
            if let Some(result) = app.search_form.handle_key(key) {
                app.handle_search_result(result);
            }
        }
        Overlay::Settings => {
            if let Some(result) = app.settings_form.handle_key(key) {
                app.handle_settings_result(result);
            }
        }
        // If help is showing, any key closes it
        Overlay::Help => app.close_overlay(),
        Overlay::Detail => handle_detail_key(app, key),
        Overlay::None => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
        }
        KeyCode::Char('/') => {
            app.open_search();
        }
        KeyCode::Char('t') => {
            app.open_settings();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.move_left();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.move_right();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_down();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.move_first();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.move_last();
        }
        KeyCode::Enter => {
            app.activate_selected();
        }
        KeyCode::Char('m') | KeyCode::Char(' ') => {
            app.show_more();
        }
        KeyCode::Esc => {
            // Clear search
            if !app.filter.is_unrestricted() {
                app.clear_filter();
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
        app.close_overlay();
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown if app.overlay == Overlay::None => app.move_down(),
        MouseEventKind::ScrollUp if app.overlay == Overlay::None => app.move_up(),
        _ => {}
    }
}
