// Model card row rendering.
// Horizontal row of selectable model cards with the active one highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::state::ModelScroller;

use super::Palette;

/// Draw the horizontal model picker.
pub fn draw_cards(frame: &mut Frame, scroller: &ModelScroller, palette: &Palette, area: Rect) {
    if scroller.cards.is_empty() {
        return;
    }

    let count = scroller.cards.len() as u32;
    let constraints: Vec<Constraint> = scroller
        .cards
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, card) in scroller.cards.iter().enumerate() {
        let active = scroller.active_index() == Some(index);
        let border_style = if active {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.dim)
        };
        let label_style = if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };

        let mut lines = vec![Line::from(Span::styled(card.label.clone(), label_style))];
        if let Some(caption) = &card.caption {
            lines.push(Line::from(Span::styled(
                caption.clone(),
                Style::default().fg(palette.dim),
            )));
        }

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(widget, chunks[index]);
    }
}
