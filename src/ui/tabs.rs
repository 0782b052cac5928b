// Option bar rendering.
// Draws a tab group's selector bar and its active content panel.

use ratatui::{prelude::*, widgets::*};

use crate::state::TabGroup;

use super::{Palette, content};

/// Draw a tab group: option bar on top, active panel below.
pub fn draw_tab_group(frame: &mut Frame, group: &TabGroup, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let titles: Vec<Line> = group
        .buttons
        .iter()
        .map(|button| {
            let style = if button.active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            Line::from(Span::styled(button.label.clone(), style))
        })
        .collect();

    let bar = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.dim)),
        )
        .select(group.active_index())
        .highlight_style(Style::default().fg(palette.accent))
        .divider(Span::raw(" │ "));
    frame.render_widget(bar, chunks[0]);

    match group.active_panel() {
        Some(panel) => content::draw_blocks(frame, &panel.blocks, palette, chunks[1]),
        None => content::render_empty(frame, palette, chunks[1], "No content for this tab"),
    }
}
