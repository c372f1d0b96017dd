use crate::app::App;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::card_rect;

pub fn render(app: &App, frame: &mut Frame, palette: Palette) {
    let area = frame.area();
    let base = Style::default().fg(palette.dark).bg(palette.light);
    let muted = base.fg(Color::DarkGray);
    let key = base.fg(Color::Cyan).add_modifier(Modifier::BOLD);

    // Paint the theme background under everything
    frame.render_widget(Block::default().style(base), area);

    let layout = super::layout::main_layout(area);

    // ── Header ──
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Book Explorer ", key),
        Span::styled(format!("  [{} books in catalog]", app.catalog.len()), muted),
    ]))
    .style(base)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(muted),
    );
    frame.render_widget(header, layout.header);

    // ── Grid ──
    let page_info = format!(
        " {} of {} ",
        app.grid.len(),
        app.matches.len()
    );
    let grid_block = Block::default()
        .borders(Borders::ALL)
        .border_style(muted)
        .title(" Books ")
        .title_bottom(Line::from(page_info).alignment(Alignment::Right))
        .style(base);
    frame.render_widget(grid_block, layout.grid);

    if app.grid.is_empty() {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No results found. Your filters might be too narrow.",
                base.add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(base);
        frame.render_widget(message, super::layout::grid_inner(layout.grid));
    } else {
        let columns = app.grid_columns.max(1);
        let first = app.grid.scroll_row() * columns;
        for (slot, card) in app.grid.cards().iter().skip(first).enumerate() {
            let Some(rect) = card_rect(layout.grid, columns, slot) else {
                break;
            };
            let selected = slot + first == app.grid.selected();
            let border = if selected {
                base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                muted
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .style(base);
            let width = block.inner(rect).width as usize;
            let body = Paragraph::new(card.render_lines(width, palette)).block(block);
            frame.render_widget(body, rect);
        }
    }

    // ── Show more button ──
    let button_style = if app.can_show_more() {
        base.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        muted
    };
    let button = Paragraph::new(Line::from(app.show_more_label()))
        .alignment(Alignment::Center)
        .style(button_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(button_style),
        );
    frame.render_widget(button, layout.button);

    // ── Status bar ──
    let mut spans = Vec::new();
    for (k, label) in [
        (" ←↑↓→", " Move  "),
        ("Enter", " Detail  "),
        ("m", " More  "),
        ("/", " Search  "),
        ("t", " Theme  "),
        ("?", " Help  "),
        ("q", " Quit  "),
    ] {
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(label, base));
    }
    spans.push(Span::styled(app.status_msg.as_str(), muted));
    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), layout.status);
}
