// Modal overlays.
// Completion notice, diagnostics console, and keybinding help.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::{Console, ConsoleLevel};

use super::Palette;

/// Center a popup of the given size within the frame.
fn centered(frame: &Frame, width: u16, height: u16) -> Rect {
    let area = frame.area();
    Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Format a timestamp as relative time (e.g., "2m ago").
fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(*dt);
    if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Draw the completion notice raised by the terminal "Finish" action.
pub fn draw_finished(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered(frame, 46, 7);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Walkthrough complete",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("You have reached the end of the report."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(palette.dim),
        )),
    ];

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.fg).bg(palette.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(widget, popup_area);
}

/// Draw the diagnostics console overlay.
pub fn draw_console(frame: &mut Frame, console: &mut Console, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered(
        frame,
        area.width.saturating_sub(8).max(40),
        area.height.saturating_sub(6).max(8),
    );
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .title(" Console ")
        .title_style(Style::default().fg(palette.accent))
        .style(Style::default().fg(palette.fg).bg(palette.bg));

    if console.messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.dim))
            .block(block);
        frame.render_widget(text, popup_area);
        return;
    }

    let items: Vec<ListItem> = console
        .messages
        .iter()
        .map(|msg| {
            let (icon, color) = match msg.level {
                ConsoleLevel::Error => ("❌", palette.error),
                ConsoleLevel::Warn => ("⚠", Color::Yellow),
                ConsoleLevel::Info => ("ℹ", palette.accent),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{icon} ")),
                Span::styled(
                    format_relative_time(&msg.timestamp),
                    Style::default().fg(palette.dim),
                ),
                Span::raw(" "),
                Span::styled(msg.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list_widget, popup_area, &mut console.list_state);
}

/// Draw the help overlay.
pub fn draw_help(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered(frame, 48, 15);
    frame.render_widget(Clear, popup_area);

    let key = Style::default().fg(palette.accent);
    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("  →/n  ←/p   ", key), Span::raw("Next / previous step")]),
        Line::from(vec![Span::styled("  1-9        ", key), Span::raw("Jump to step")]),
        Line::from(vec![Span::styled("  Tab        ", key), Span::raw("Cycle tabs")]),
        Line::from(vec![Span::styled("  [ ]        ", key), Span::raw("Cycle model cards")]),
        Line::from(vec![Span::styled("  t          ", key), Span::raw("Toggle light/dark theme")]),
        Line::from(vec![Span::styled("  e          ", key), Span::raw("Show console")]),
        Line::from(vec![Span::styled("  ?          ", key), Span::raw("Show/hide this help")]),
        Line::from(vec![Span::styled("  q          ", key), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(palette.dim),
        )),
    ];

    let widget = Paragraph::new(help_text)
        .style(Style::default().fg(palette.fg).bg(palette.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Help "),
        );
    frame.render_widget(widget, popup_area);
}
