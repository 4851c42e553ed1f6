use choreo_core::{Phase, SectionFrame};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::content;
use crate::theme::Theme;

/// Renders the four page sections as overlapping layers.
///
/// Sections are painted in z-order with the active section last, so
/// its cells win wherever layers overlap. A section whose opacity has
/// reached zero is simply not painted.
pub struct SectionsWidget;

impl SectionsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let mut order: Vec<&SectionFrame> = app.frames.iter().collect();
        order.sort_by_key(|f| matches!(f.phase, Phase::Active { .. }));

        for section in order {
            if section.state.opacity < 0.05 {
                continue;
            }
            let Some(rect) = offset_rect(
                area,
                section.state.translate_x / CELL_WIDTH_PX,
                section.state.translate_y / CELL_HEIGHT_PX,
            ) else {
                continue;
            };

            let style = layer_style(section, theme);
            match section.name.as_str() {
                "hero" => render_hero(frame, rect, style, section, theme),
                "about" => render_about(frame, rect, style, section, theme),
                "services" => render_services(frame, rect, style, section, app, theme),
                _ => render_contact(frame, rect, style, section, theme),
            }
        }
    }
}

/// Translate a layer rect by a fractional cell offset, clipped to the
/// parent area. `None` when the layer has left the screen entirely.
fn offset_rect(area: Rect, dx_cells: f64, dy_cells: f64) -> Option<Rect> {
    let dx = dx_cells.round() as i32;
    let dy = dy_cells.round() as i32;

    let x = area.x as i32 + dx;
    let y = area.y as i32 + dy;
    let right = (x + area.width as i32).min((area.x + area.width) as i32);
    let bottom = (y + area.height as i32).min((area.y + area.height) as i32);
    let x = x.max(area.x as i32);
    let y = y.max(area.y as i32);

    if right <= x || bottom <= y {
        return None;
    }
    Some(Rect {
        x: x as u16,
        y: y as u16,
        width: (right - x) as u16,
        height: (bottom - y) as u16,
    })
}

/// Map the continuous opacity/blur channels onto terminal styling:
/// half-faded or blurred layers render dim.
fn layer_style(section: &SectionFrame, theme: &Theme) -> Style {
    let mut style = Style::default().fg(theme.section_accent(section.index));
    if section.state.opacity < 0.5 || section.state.blur_px > 1.5 {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

fn hint_line(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        "▼ scroll",
        Style::default().fg(theme.hint).add_modifier(Modifier::DIM),
    ))
    .centered()
}

fn render_hero(frame: &mut Frame, area: Rect, style: Style, section: &SectionFrame, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::default());
    for word in content::HERO_HEADLINE {
        lines.push(
            Line::from(Span::styled(word, style.add_modifier(Modifier::BOLD))).centered(),
        );
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            content::HERO_TAGLINE,
            Style::default().fg(theme.fg1),
        ))
        .centered(),
    );
    if section.hint_arrow {
        lines.push(Line::default());
        lines.push(hint_line(theme));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_about(frame: &mut Frame, area: Rect, style: Style, section: &SectionFrame, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled("About", style.add_modifier(Modifier::BOLD))).centered());
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(content::ABOUT_BODY, Style::default().fg(theme.fg0))));
    lines.push(Line::default());
    for stat in &content::ABOUT_STATS {
        lines.push(Line::from(vec![
            Span::styled(stat.value, style.add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(stat.label, Style::default().fg(theme.grey)),
        ]));
    }
    if section.hint_arrow {
        lines.push(Line::default());
        lines.push(hint_line(theme));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_services(
    frame: &mut Frame,
    area: Rect,
    style: Style,
    section: &SectionFrame,
    app: &App,
    theme: &Theme,
) {
    let nudge = (app.heading_nudge / CELL_HEIGHT_PX).round() as i32;
    let heading_row = (area.y as i32 + 1 + nudge).max(area.y as i32) as u16;
    let heading_area = Rect {
        y: heading_row,
        height: 1,
        ..area
    }
    .intersection(area);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                content::SERVICES_HEADING,
                style.add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ),
        heading_area,
    );

    let Some(reveal) = &section.reveal else {
        return;
    };

    // Card row below the heading, one column per card.
    let body = Rect {
        y: area.y.saturating_add(3),
        height: area.height.saturating_sub(5),
        ..area
    }
    .intersection(area);
    if body.height == 0 {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(body);

    for (index, card) in content::SERVICE_CARDS.iter().enumerate() {
        let Some(card_anim) = reveal.cards.get(index) else {
            continue;
        };
        if card_anim.opacity < 0.05 {
            continue;
        }
        let Some(rect) = offset_rect(
            columns[index],
            card_anim.translate_x / CELL_WIDTH_PX,
            card_anim.translate_y / CELL_HEIGHT_PX,
        ) else {
            continue;
        };

        let mut lines = vec![Line::from(Span::styled(
            card.title,
            style.add_modifier(Modifier::BOLD),
        ))];
        for bullet in &card.bullets {
            lines.push(Line::from(vec![
                Span::styled("• ", style),
                Span::styled(*bullet, Style::default().fg(theme.fg0)),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(style)),
            rect,
        );
    }

    if reveal.state.cta_visible && reveal.cta.opacity >= 0.05 {
        let cta_area = Rect {
            y: (area.y + area.height).saturating_sub(2),
            height: 1,
            ..area
        }
        .intersection(area);
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    content::SERVICES_CTA,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ))
                .centered(),
            ),
            cta_area,
        );
    }
}

fn render_contact(
    frame: &mut Frame,
    area: Rect,
    style: Style,
    section: &SectionFrame,
    theme: &Theme,
) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            content::CONTACT_HEADING,
            style.add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(content::CONTACT_BODY, Style::default().fg(theme.fg0))).centered(),
    );
    lines.push(Line::default());
    if section.state.interactive {
        lines.push(
            Line::from(Span::styled(
                content::CONTACT_CTA,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))
            .centered(),
        );
    }
    frame.render_widget(Paragraph::new(lines), area);
}
