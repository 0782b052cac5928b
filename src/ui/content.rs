// Panel content rendering.
// Turns live blocks into display lines: inline text, preformatted markup,
// metric comparison tables, and per-slot loading/error indicators.

use ratatui::{prelude::*, widgets::*};

use crate::state::{LiveBlock, LoadingState, MetricRow, Rendered};

use super::Palette;

/// Draw a panel's blocks into the content area.
pub fn draw_blocks(frame: &mut Frame, blocks: &[LiveBlock], palette: &Palette, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for block in blocks {
        match block {
            LiveBlock::Text(body) => {
                for text_line in body.lines() {
                    lines.push(Line::raw(text_line.to_string()));
                }
            }
            LiveBlock::Resource(slot) => match &slot.state {
                LoadingState::Idle => lines.push(Line::from(Span::styled(
                    format!("… {}", slot.src),
                    Style::default().fg(palette.dim),
                ))),
                LoadingState::Loading => lines.push(Line::from(Span::styled(
                    format!("⏳ Loading {}...", slot.src),
                    Style::default().fg(palette.accent),
                ))),
                LoadingState::Error(e) => lines.push(Line::from(Span::styled(
                    format!("❌ {}: {}", slot.src, e),
                    Style::default().fg(palette.error),
                ))),
                LoadingState::Loaded(rendered) => {
                    append_rendered(&mut lines, rendered, palette);
                }
            },
        }
        lines.push(Line::raw(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim)),
        );
    frame.render_widget(paragraph, area);
}

fn append_rendered(lines: &mut Vec<Line>, rendered: &Rendered, palette: &Palette) {
    match rendered {
        Rendered::Markup(markup) => {
            // Trusted markup, shown preformatted.
            for text_line in markup.lines() {
                lines.push(Line::from(Span::styled(
                    text_line.to_string(),
                    Style::default().fg(palette.fg),
                )));
            }
        }
        Rendered::Text(text) => {
            for text_line in text.lines() {
                lines.push(Line::raw(text_line.to_string()));
            }
        }
        Rendered::Metrics(rows) => append_metric_table(lines, rows, palette),
    }
}

/// Append the 3-column model comparison table.
fn append_metric_table(lines: &mut Vec<Line>, rows: &[MetricRow], palette: &Palette) {
    let model_width = rows
        .iter()
        .map(|r| r.model.len())
        .chain(["Model".len()])
        .max()
        .unwrap_or(5);
    let primary_width = rows
        .iter()
        .map(|r| r.primary.len())
        .chain(["Primary".len()])
        .max()
        .unwrap_or(7);

    lines.push(Line::from(Span::styled(
        format!("{:<model_width$}  {:>primary_width$}  Secondary", "Model", "Primary"),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(model_width + primary_width + 13),
        Style::default().fg(palette.dim),
    )));

    for row in rows {
        lines.push(Line::raw(format!(
            "{:<model_width$}  {:>primary_width$}  {:>9}",
            row.model, row.primary, row.secondary
        )));
    }
}

/// Render an empty-state message.
pub fn render_empty(frame: &mut Frame, palette: &Palette, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.dim));
    frame.render_widget(text, area);
}

/// Render an inline placeholder (template not found).
pub fn render_placeholder(frame: &mut Frame, palette: &Palette, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.error))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim)),
        );
    frame.render_widget(text, area);
}
