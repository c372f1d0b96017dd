use crate::theme::{Palette, Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::layout::centered_rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsInputResult {
    Submit(Theme),
    Cancel,
}

/// Theme picker overlay.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub theme: Theme,
}

impl SettingsForm {
    /// Show the picker with the active theme preselected.
    pub fn open(&mut self, current: Theme) {
        self.theme = current;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SettingsInputResult> {
        match key.code {
            KeyCode::Enter => Some(SettingsInputResult::Submit(self.theme)),
            KeyCode::Esc => Some(SettingsInputResult::Cancel),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.theme = self.theme.toggle();
                None
            }
            KeyCode::Char('d') => {
                self.theme = Theme::Day;
                None
            }
            KeyCode::Char('n') => {
                self.theme = Theme::Night;
                None
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, palette: Palette) {
        let area = centered_rect(40, 30, frame.area());
        frame.render_widget(Clear, area);

        let base = Style::default().fg(palette.dark).bg(palette.light);
        let options: Vec<Span> = Theme::ALL
            .iter()
            .flat_map(|t| {
                let style = if *t == self.theme {
                    base.fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    base
                };
                [Span::styled(format!(" {} ", t.label()), style), Span::raw("   ")]
            })
            .collect();

        let text = vec![
            Line::from(""),
            Line::from(Span::styled("Theme", base.add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(options),
        ];

        let form = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(base)
            .block(
                Block::default()
                    .title(" Settings ")
                    .borders(Borders::ALL)
                    .border_style(base.fg(Color::Cyan))
                    .title_bottom(
                        Line::from(" ←→: Choose | Enter: Save | Esc: Cancel ")
                            .style(base.fg(Color::DarkGray)),
                    ),
            );
        frame.render_widget(form, area);
    }
}
