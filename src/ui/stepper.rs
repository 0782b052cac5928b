// Stepper bar rendering.
// Shows the deck title, the step indicators, and the theme glyph.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

use super::Palette;

/// Draw the stepper bar at the top of the screen.
pub fn draw_stepper_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut spans = Vec::new();
    for (index, section) in app.deck.sections.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(palette.dim)));
        }

        let marker = if app.stepper.indicator_active(index) {
            "●"
        } else {
            "○"
        };
        let style = if app.stepper.indicator_active(index) {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        spans.push(Span::styled(
            format!("{marker} {} {}", index + 1, section.title),
            style,
        ));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.dim))
        .title(format!(" {} ", app.deck.title))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );

    let indicators = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(indicators, area);

    // Theme glyph mirrors the flag, right-aligned on the title row.
    let glyph = if app.theme.is_dark() { "🌙" } else { "☀" };
    let glyph_para = Paragraph::new(Line::from(Span::styled(
        format!("{glyph} "),
        Style::default().fg(palette.fg),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(
        glyph_para,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );
}
