mod detail;
mod help;
pub mod layout;
mod list;
pub mod search;
pub mod settings;

use crate::app::{App, Overlay};
use ratatui::Frame;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.theme.palette();
    list::render(app, frame, palette);

    // Overlays on top of the grid
    match app.overlay {
        Overlay::None => {}
        Overlay::Search => app.search_form.render(frame, palette),
        Overlay::Settings => app.settings_form.render(frame, palette),
        Overlay::Detail => {
            if let Some(view) = &app.detail {
                detail::render(view, frame, palette);
            }
        }
        Overlay::Help => help::render(frame, palette),
    }
}
