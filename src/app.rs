// App state and main event loop.
// Owns the stepper, per-section view state, the hydration channel, and
// keyboard input handling.

use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::deck::Deck;
use crate::error::Result;
use crate::fetch::{self, FetchRequest, Fetcher, HydrationEvent};
use crate::state::{Console, LoadingState, ModelScroller, ResourceSlot, ScrollerContent, Stepper, TabGroup};
use crate::theme::{self, Theme};
use crate::ui;

/// Runtime view state for one page section.
pub struct SectionState {
    /// Section-level tab group, bound lazily on first visit.
    pub tabs: Option<TabGroup>,
    /// Model picker, for the model steps.
    pub scroller: Option<ModelScroller>,
}

impl SectionState {
    /// Find a resource slot anywhere in this section's live subtrees.
    fn slot_mut(&mut self, slot: u64) -> Option<&mut ResourceSlot> {
        let scroller_tabs = self.scroller.as_mut().and_then(|s| s.tabs_mut());
        self.tabs
            .iter_mut()
            .chain(scroller_tabs)
            .find_map(|tabs| tabs.slot_mut(slot))
    }
}

/// Main application state.
pub struct App {
    pub deck: Deck,
    pub stepper: Stepper,
    pub sections: Vec<SectionState>,
    pub theme: Theme,
    pub console: Console,
    /// Completion notice raised by the terminal "Finish" action.
    pub show_finished: bool,
    pub show_help: bool,
    pub should_quit: bool,
    theme_path: Option<PathBuf>,
    fetcher: Fetcher,
    events_tx: UnboundedSender<HydrationEvent>,
    events_rx: UnboundedReceiver<HydrationEvent>,
    next_slot: u64,
}

impl App {
    pub fn new(deck: Deck, base: &Path) -> Result<Self> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let theme_path = theme::theme_path();
        let theme = theme_path
            .as_deref()
            .map(theme::restore)
            .unwrap_or_default();

        let sections = deck
            .sections
            .iter()
            .map(|section| SectionState {
                tabs: None,
                scroller: section.scroller.as_ref().map(ModelScroller::new),
            })
            .collect();

        Ok(Self {
            stepper: Stepper::new(deck.sections.len()),
            sections,
            deck,
            theme,
            console: Console::new(),
            show_finished: false,
            show_help: false,
            should_quit: false,
            theme_path,
            fetcher: Fetcher::new(base)?,
            events_tx,
            events_rx,
            next_slot: 0,
        })
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.enter_step();
        while !self.should_quit {
            self.drain_hydration_events();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                _ => {}
            }
            return;
        }

        if self.show_finished {
            match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter => self.show_finished = false,
                _ => {}
            }
            return;
        }

        if self.console.visible {
            match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Char('e') => self.console.toggle(),
                KeyCode::Up | KeyCode::Char('k') => self.console.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.console.select_next(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('e') => self.console.toggle(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Right | KeyCode::Char('n') => self.next_action(),
            KeyCode::Left | KeyCode::Char('p') => self.prev_action(),
            KeyCode::Tab => self.cycle_tabs(true),
            KeyCode::BackTab => self.cycle_tabs(false),
            KeyCode::Char(']') => self.cycle_cards(true),
            KeyCode::Char('[') => self.cycle_cards(false),
            KeyCode::Char(c @ '1'..='9') => self.jump_to(c as usize - '1' as usize),
            _ => {}
        }
    }

    /// The "next" control: advance, or the terminal acknowledgment on the
    /// last step.
    pub fn next_action(&mut self) {
        if self.stepper.is_last() {
            self.show_finished = true;
        } else if self.stepper.advance() {
            self.enter_step();
        }
    }

    /// The "prev" control; hidden (no-op) on the first step.
    pub fn prev_action(&mut self) {
        if self.stepper.retreat() {
            self.enter_step();
        }
    }

    /// Jump directly to a step indicator.
    pub fn jump_to(&mut self, step: usize) {
        self.stepper.go_to(step);
        self.enter_step();
    }

    /// Hydrate the newly visible section: bind its tab group on first visit,
    /// give its scroller a default selection, and issue pending fetches.
    /// Idempotent across repeat visits.
    pub fn enter_step(&mut self) {
        let index = self.stepper.current();
        if index >= self.sections.len() {
            return;
        }

        let definition = &self.deck.sections[index];
        let state = &mut self.sections[index];
        if state.tabs.is_none() && !definition.tabs.is_empty() {
            state.tabs = Some(TabGroup::bind(&definition.tabs, &mut self.next_slot));
        }

        let mut missing_template = None;
        if let Some(scroller) = &mut state.scroller {
            if !scroller.ensure_selection(&self.deck.templates, &mut self.next_slot) {
                missing_template = scroller.active_model().map(str::to_string);
            }
        }
        if let Some(model) = missing_template {
            self.console
                .log_warn(format!("no template registered for model '{model}'"));
        }

        self.hydrate_current();
    }

    /// Issue fetches for every not-yet-fetched resource in the current
    /// section, in document order. Safe to call repeatedly.
    pub fn hydrate_current(&mut self) {
        let index = self.stepper.current();
        let Some(state) = self.sections.get_mut(index) else {
            return;
        };

        let mut requests: Vec<FetchRequest> = Vec::new();
        if let Some(tabs) = &mut state.tabs {
            requests.extend(fetch::collect_requests(tabs));
        }
        if let Some(tabs) = state.scroller.as_mut().and_then(|s| s.tabs_mut()) {
            requests.extend(fetch::collect_requests(tabs));
        }
        self.spawn_fetches(requests);
    }

    /// Spawn one independent fetch task per request. Completions come back
    /// over the hydration channel and are applied in the event loop.
    fn spawn_fetches(&self, requests: Vec<FetchRequest>) {
        for request in requests {
            let fetcher = self.fetcher.clone();
            let tx = self.events_tx.clone();
            tokio::spawn(async move {
                let result = match fetcher.fetch_text(&request.src).await {
                    Ok(body) => fetch::render(request.kind, &body).map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                let _ = tx.send(HydrationEvent {
                    slot: request.slot,
                    src: request.src,
                    result,
                });
            });
        }
    }

    fn drain_hydration_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_hydration(event);
        }
    }

    /// Apply one fetch completion to its slot. Completions for slots whose
    /// subtree was replaced in the meantime are dropped.
    pub fn apply_hydration(&mut self, event: HydrationEvent) {
        let mut failure = None;
        if let Some(slot) = self
            .sections
            .iter_mut()
            .find_map(|section| section.slot_mut(event.slot))
        {
            if slot.state.is_loading() {
                match event.result {
                    Ok(rendered) => slot.state = LoadingState::Loaded(rendered),
                    Err(message) => {
                        slot.state = LoadingState::Error(message.clone());
                        failure = Some(message);
                    }
                }
            }
        }
        if let Some(message) = failure {
            self.console
                .log_error(format!("failed to load {}: {message}", event.src));
        }
    }

    /// Cycle the innermost tab group of the current section.
    fn cycle_tabs(&mut self, forward: bool) {
        let index = self.stepper.current();
        let Some(state) = self.sections.get_mut(index) else {
            return;
        };

        let model_tabs_shown = matches!(
            state.scroller.as_ref().map(|s| &s.content),
            Some(ScrollerContent::Model(_))
        );
        let tabs = if model_tabs_shown {
            state.scroller.as_mut().and_then(|s| s.tabs_mut())
        } else {
            state.tabs.as_mut()
        };
        let Some(tabs) = tabs else {
            return;
        };

        let panel_found = if forward {
            tabs.select_next()
        } else {
            tabs.select_prev()
        };
        if !panel_found {
            self.console.log_warn("tab has no matching content panel");
        }
    }

    /// Move the model card selection in the current section's scroller.
    fn cycle_cards(&mut self, forward: bool) {
        let index = self.stepper.current();
        let Some(state) = self.sections.get_mut(index) else {
            return;
        };
        let Some(scroller) = &mut state.scroller else {
            return;
        };

        let template_found = if forward {
            scroller.select_next(&self.deck.templates, &mut self.next_slot)
        } else {
            scroller.select_prev(&self.deck.templates, &mut self.next_slot)
        };
        let model = scroller.active_model().map(str::to_string);
        if !template_found {
            self.console.log_warn(format!(
                "no template registered for model '{}'",
                model.unwrap_or_default()
            ));
        }
        self.hydrate_current();
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(path) = &self.theme_path {
            if let Err(e) = theme::persist(path, self.theme) {
                self.console.log_error(format!("failed to persist theme: {e}"));
            }
        }
    }
}
