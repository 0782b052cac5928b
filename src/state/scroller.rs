// Model scroller state.
// Exclusive card selection driving template injection into the content area.

use crate::deck::{ScrollerDef, Template};

use super::tabs::TabGroup;

/// A model card in the horizontal picker.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub model: String,
    pub label: String,
    pub caption: Option<String>,
}

/// The content area's current subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScrollerContent {
    /// Nothing selected yet.
    #[default]
    Empty,
    /// Placeholder for a model id with no registered template.
    NotFound(String),
    /// Instantiated template for the last-selected model.
    Model(ModelContent),
}

/// Live subtree cloned from a model template.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelContent {
    pub model: String,
    pub tabs: TabGroup,
}

/// A mutually exclusive set of model cards bound to one content area.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelScroller {
    pub cards: Vec<Card>,
    active: Option<usize>,
    pub content: ScrollerContent,
}

impl ModelScroller {
    pub fn new(def: &ScrollerDef) -> Self {
        Self {
            cards: def
                .cards
                .iter()
                .map(|card| Card {
                    model: card.model.clone(),
                    label: card.label.clone(),
                    caption: card.caption.clone(),
                })
                .collect(),
            active: None,
            content: ScrollerContent::Empty,
        }
    }

    /// Index of the active card.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Model id of the active card.
    pub fn active_model(&self) -> Option<&str> {
        self.active.map(|i| self.cards[i].model.as_str())
    }

    /// Select a model: activate its card and swap the content area's subtree
    /// to the matching template, binding a fresh tab group over it.
    ///
    /// Re-selecting the already-rendered model keeps the existing subtree so
    /// fetched resources are never requested again. An id with no template
    /// renders a not-found placeholder. Returns false in the placeholder
    /// case so the caller can log it.
    pub fn select(&mut self, model: &str, templates: &[Template], next_slot: &mut u64) -> bool {
        if let Some(index) = self.cards.iter().position(|c| c.model == model) {
            self.active = Some(index);
        }

        if let ScrollerContent::Model(content) = &self.content {
            if content.model == model {
                return true;
            }
        }

        match templates.iter().find(|t| t.model == model) {
            Some(template) => {
                self.content = ScrollerContent::Model(ModelContent {
                    model: model.to_string(),
                    tabs: TabGroup::bind(&template.tabs, next_slot),
                });
                true
            }
            None => {
                self.content = ScrollerContent::NotFound(model.to_string());
                false
            }
        }
    }

    /// Auto-select the first card if nothing is selected yet.
    ///
    /// Invoked when the owning section becomes current; idempotent.
    pub fn ensure_selection(&mut self, templates: &[Template], next_slot: &mut u64) -> bool {
        if self.active.is_some() {
            return true;
        }
        match self.cards.first().map(|c| c.model.clone()) {
            Some(model) => self.select(&model, templates, next_slot),
            None => true,
        }
    }

    /// Move selection to the next card.
    pub fn select_next(&mut self, templates: &[Template], next_slot: &mut u64) -> bool {
        self.select_offset(1, templates, next_slot)
    }

    /// Move selection to the previous card.
    pub fn select_prev(&mut self, templates: &[Template], next_slot: &mut u64) -> bool {
        self.select_offset(self.cards.len().wrapping_sub(1), templates, next_slot)
    }

    fn select_offset(&mut self, offset: usize, templates: &[Template], next_slot: &mut u64) -> bool {
        if self.cards.is_empty() {
            return true;
        }
        let current = self.active.unwrap_or(0);
        let model = self.cards[(current + offset) % self.cards.len()].model.clone();
        self.select(&model, templates, next_slot)
    }

    /// Tab group of the rendered subtree, if a model is shown.
    pub fn tabs_mut(&mut self) -> Option<&mut TabGroup> {
        match &mut self.content {
            ScrollerContent::Model(content) => Some(&mut content.tabs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Block, CardDef, ResourceKind, TabDef};
    use crate::state::content::{LiveBlock, LoadingState, Rendered};

    fn scroller() -> ModelScroller {
        ModelScroller::new(&ScrollerDef {
            cards: vec![
                CardDef {
                    model: "linreg".to_string(),
                    label: "Linear Regression".to_string(),
                    caption: None,
                },
                CardDef {
                    model: "ridge".to_string(),
                    label: "Ridge".to_string(),
                    caption: None,
                },
            ],
        })
    }

    fn templates() -> Vec<Template> {
        ["linreg", "ridge"]
            .iter()
            .map(|model| Template {
                model: model.to_string(),
                tabs: vec![TabDef {
                    id: "output".to_string(),
                    label: "Output".to_string(),
                    blocks: vec![Block::Resource {
                        src: format!("{model}.txt"),
                        kind: ResourceKind::Text,
                    }],
                }],
            })
            .collect()
    }

    #[test]
    fn test_select_swaps_subtree() {
        let mut scroller = scroller();
        let templates = templates();
        let mut next_slot = 0;

        assert!(scroller.select("linreg", &templates, &mut next_slot));
        assert_eq!(scroller.active_model(), Some("linreg"));

        assert!(scroller.select("ridge", &templates, &mut next_slot));
        assert_eq!(scroller.active_model(), Some("ridge"));
        // Only one card active: the previously active one is deselected.
        assert_eq!(scroller.active_index(), Some(1));

        match &scroller.content {
            ScrollerContent::Model(content) => {
                assert_eq!(content.model, "ridge");
                // Fresh tab group defaults to its first tab.
                assert_eq!(content.tabs.active_index(), Some(0));
            }
            other => panic!("expected model content, got {other:?}"),
        }
    }

    #[test]
    fn test_select_missing_template() {
        let mut scroller = scroller();
        let mut next_slot = 0;

        assert!(!scroller.select("missing", &templates(), &mut next_slot));
        assert_eq!(scroller.content, ScrollerContent::NotFound("missing".to_string()));
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut scroller = scroller();
        let templates = templates();
        let mut next_slot = 0;

        scroller.select("ridge", &templates, &mut next_slot);

        // Simulate a completed fetch on the injected subtree.
        if let ScrollerContent::Model(content) = &mut scroller.content {
            match &mut content.tabs.panels[0].blocks[0] {
                LiveBlock::Resource(slot) => {
                    slot.state = LoadingState::Loaded(Rendered::Text("done".to_string()));
                }
                _ => panic!("expected resource block"),
            }
        }
        let before = scroller.content.clone();

        // Re-selecting keeps the subtree: fetched slots stay fetched and no
        // new slot ids are allocated.
        let slots_before = next_slot;
        scroller.select("ridge", &templates, &mut next_slot);
        assert_eq!(scroller.content, before);
        assert_eq!(next_slot, slots_before);
    }

    #[test]
    fn test_ensure_selection_picks_first_card_once() {
        let mut scroller = scroller();
        let templates = templates();
        let mut next_slot = 0;

        scroller.ensure_selection(&templates, &mut next_slot);
        assert_eq!(scroller.active_model(), Some("linreg"));

        scroller.select("ridge", &templates, &mut next_slot);
        scroller.ensure_selection(&templates, &mut next_slot);
        // Does not reset an existing selection.
        assert_eq!(scroller.active_model(), Some("ridge"));
    }

    #[test]
    fn test_card_cycling() {
        let mut scroller = scroller();
        let templates = templates();
        let mut next_slot = 0;

        scroller.ensure_selection(&templates, &mut next_slot);
        scroller.select_next(&templates, &mut next_slot);
        assert_eq!(scroller.active_model(), Some("ridge"));
        scroller.select_next(&templates, &mut next_slot);
        assert_eq!(scroller.active_model(), Some("linreg"));
        scroller.select_prev(&templates, &mut next_slot);
        assert_eq!(scroller.active_model(), Some("ridge"));
    }
}
