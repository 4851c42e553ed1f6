use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let motion_str = if app.motion.is_reduced() {
            "REDUCED"
        } else {
            "FULL"
        };

        let status_text = format!(
            " {} | y: {:.0}px | {:.0}% | motion: {}",
            app.active_section_name(),
            app.last_sample.offset,
            app.scroll_progress() * 100.0,
            motion_str,
        );

        let help_hint = " q:quit j/k:scroll g/G:jump m:motion ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
