// UI module for rendering the TUI.
// Contains widgets for the stepper bar, model card row, option bars, panel
// content, and modal overlays.

mod content;
mod modal;
mod scroller;
mod stepper;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::ScrollerContent;
use crate::theme::Theme;

/// Colors derived from the theme flag.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub dim: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                dim: Color::DarkGray,
                error: Color::Red,
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Yellow,
                dim: Color::DarkGray,
                error: Color::LightRed,
            },
        }
    }
}

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);

    // Theme background for the whole frame.
    frame.render_widget(
        Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stepper bar
            Constraint::Min(1),    // Section content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    stepper::draw_stepper_bar(frame, app, &palette, chunks[0]);
    draw_section(frame, app, &palette, chunks[1]);
    draw_status_bar(frame, app, &palette, chunks[2]);

    // Overlays (rendered last, on top of everything).
    if app.console.visible {
        modal::draw_console(frame, &mut app.console, &palette);
    }
    if app.show_finished {
        modal::draw_finished(frame, &palette);
    }
    if app.show_help {
        modal::draw_help(frame, &palette);
    }
}

/// Draw the current page section: intro, model cards, tabs, and content.
fn draw_section(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let index = app.stepper.current();
    let (Some(section), Some(state)) = (app.deck.sections.get(index), app.sections.get(index))
    else {
        content::render_empty(frame, palette, area, "This deck has no sections");
        return;
    };

    let mut constraints = Vec::new();
    if section.intro.is_some() {
        constraints.push(Constraint::Length(2));
    }
    if state.scroller.is_some() {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(1));
    let chunks = Layout::vertical(constraints).split(area);

    let mut next = 0;
    if let Some(intro) = &section.intro {
        let paragraph = Paragraph::new(intro.as_str())
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(palette.fg));
        frame.render_widget(paragraph, chunks[next]);
        next += 1;
    }

    if let Some(picker) = &state.scroller {
        scroller::draw_cards(frame, picker, palette, chunks[next]);
        next += 1;
    }

    let body = chunks[next];
    match (&state.tabs, &state.scroller) {
        (Some(tab_group), Some(picker)) => {
            let halves =
                Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(body);
            tabs::draw_tab_group(frame, tab_group, palette, halves[0]);
            draw_scroller_content(frame, &picker.content, palette, halves[1]);
        }
        (Some(tab_group), None) => tabs::draw_tab_group(frame, tab_group, palette, body),
        (None, Some(picker)) => draw_scroller_content(frame, &picker.content, palette, body),
        (None, None) => content::render_empty(frame, palette, body, ""),
    }
}

/// Draw the content area owned by a model scroller.
fn draw_scroller_content(
    frame: &mut Frame,
    scroller_content: &ScrollerContent,
    palette: &Palette,
    area: Rect,
) {
    match scroller_content {
        ScrollerContent::Empty => {
            content::render_empty(frame, palette, area, "Select a model card");
        }
        ScrollerContent::NotFound(model) => {
            content::render_placeholder(
                frame,
                palette,
                area,
                &format!("Content for '{model}' not found"),
            );
        }
        ScrollerContent::Model(model_content) => {
            tabs::draw_tab_group(frame, &model_content.tabs, palette, area);
        }
    }
}

/// Draw the status bar with navigation controls and keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let nav = app.stepper.nav();

    let mut hints = Vec::new();
    if nav.prev_visible {
        hints.push(Span::styled(" ← ", Style::default().fg(palette.accent)));
        hints.push(Span::styled("Prev", Style::default().fg(palette.dim)));
    }
    hints.push(Span::styled(" → ", Style::default().fg(palette.accent)));
    hints.push(Span::styled(nav.next_label, Style::default().fg(palette.dim)));
    hints.push(Span::raw("  Tab "));
    hints.push(Span::styled("Tabs", Style::default().fg(palette.dim)));
    hints.push(Span::raw("  [ ] "));
    hints.push(Span::styled("Models", Style::default().fg(palette.dim)));
    hints.push(Span::raw("  t "));
    hints.push(Span::styled("Theme", Style::default().fg(palette.dim)));
    hints.push(Span::raw("  e "));
    if app.console.unread > 0 {
        hints.push(Span::styled(
            format!("Console ({})", app.console.unread),
            Style::default().fg(palette.error),
        ));
    } else {
        hints.push(Span::styled("Console", Style::default().fg(palette.dim)));
    }
    hints.push(Span::raw("  ? "));
    hints.push(Span::styled("Help", Style::default().fg(palette.dim)));
    hints.push(Span::raw("  q "));
    hints.push(Span::styled("Quit", Style::default().fg(palette.dim)));

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
