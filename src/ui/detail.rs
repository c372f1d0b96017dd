use crate::detail::DetailView;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;

pub fn render(view: &DetailView, frame: &mut Frame, palette: Palette) {
    let base = Style::default().fg(palette.dark).bg(palette.light);
    let muted = base.fg(Color::DarkGray);

    // Backdrop: the cover url dimmed across the whole screen
    let backdrop = Paragraph::new(Line::from(Span::styled(
        view.blurred_image.as_str(),
        muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    let backdrop_area = centered_rect(90, 90, frame.area());
    frame.render_widget(Clear, backdrop_area);
    frame.render_widget(backdrop.style(muted), backdrop_area);

    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(base.fg(Color::Cyan))
        .title(" Book Detail ")
        .title_bottom(Line::from(" Esc/q: Close ").style(muted))
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Layout: cover(1) + title(1) + subtitle(1) + genres(1) + gap(1) + description(min)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Cover: ", muted),
            Span::styled(
                view.image.as_str(),
                base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ])),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", view.title),
            base.add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", view.subtitle), muted)),
        chunks[2],
    );
    if !view.genres.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", view.genres.join(" · ")),
                base.fg(Color::Magenta),
            )),
            chunks[3],
        );
    }

    let description = Paragraph::new(view.description.as_str())
        .wrap(Wrap { trim: false })
        .style(base)
        .block(Block::default().borders(Borders::TOP).border_style(muted));
    frame.render_widget(description, chunks[5]);
}
