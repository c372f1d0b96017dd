use crate::theme::Palette;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("?", "Toggle this help"),
            ("q", "Quit application"),
            ("Ctrl+C", "Quit from anywhere"),
        ],
    ),
    (
        "Books",
        &[
            ("←↑↓→/hjkl", "Move between previews"),
            ("Enter/click", "Open book detail"),
            ("m/Space", "Show more"),
            ("g/G", "Jump to first/last preview"),
            ("/", "Search by title, author, genre"),
            ("t", "Theme settings"),
        ],
    ),
    (
        "Search",
        &[
            ("Tab/↑↓", "Next/previous field"),
            ("←→", "Change author or genre"),
            ("Enter", "Apply search"),
            ("Esc", "Cancel"),
        ],
    ),
    ("Detail", &[("Esc/q/click", "Close")]),
];

pub fn render(frame: &mut Frame, palette: Palette) {
    let area = centered_rect(70, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let base = Style::default().fg(palette.dark).bg(palette.light);
    let mut help_text = vec![Line::from("")];
    for (title, keys) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            format!("  {}", title),
            base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (key, action) in keys.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("    {:<14}", key), base.fg(Color::Yellow)),
                Span::styled(*action, base),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(base.fg(Color::Cyan))
                .title(" Help - Keybindings ")
                .title_bottom(Line::from(" Press ? or Esc to close ").style(base.fg(Color::DarkGray))),
        )
        .style(base);

    frame.render_widget(help, area);
}
