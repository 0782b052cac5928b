// Tab group state.
// Enforces mutual exclusivity of tab buttons and content panels under one
// option bar; rebuilt from scratch whenever a subtree is replaced.

use crate::deck::TabDef;

use super::content::{self, LiveBlock, ResourceSlot};

/// A tab button in the option bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TabButton {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// A content panel keyed by tab identity.
#[derive(Debug, Clone, PartialEq)]
pub struct LivePanel {
    pub tab: String,
    pub blocks: Vec<LiveBlock>,
    pub active: bool,
}

/// A set of mutually exclusive labeled panels under one selector bar.
///
/// Bindings do not survive subtree replacement: `ModelScroller::select`
/// constructs a fresh group over every injected template, so there is no
/// stale-handler state to invalidate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabGroup {
    pub buttons: Vec<TabButton>,
    pub panels: Vec<LivePanel>,
}

impl TabGroup {
    /// Bind a tab group over freshly instantiated content.
    ///
    /// The first tab button, if any, is activated along with its panel.
    pub fn bind(tabs: &[TabDef], next_slot: &mut u64) -> Self {
        let mut group = Self {
            buttons: tabs
                .iter()
                .map(|tab| TabButton {
                    id: tab.id.clone(),
                    label: tab.label.clone(),
                    active: false,
                })
                .collect(),
            panels: tabs
                .iter()
                .map(|tab| LivePanel {
                    tab: tab.id.clone(),
                    blocks: content::instantiate_blocks(&tab.blocks, next_slot),
                    active: false,
                })
                .collect(),
        };

        if let Some(first) = group.buttons.first().map(|b| b.id.clone()) {
            group.select(&first);
        }
        group
    }

    /// Activate the tab with the given identity.
    ///
    /// Deactivates all sibling buttons and panels, then activates the
    /// matching button and the matching panel. Returns false when no panel
    /// matches (the button stays active, nothing is shown) so the caller can
    /// report the structural defect.
    pub fn select(&mut self, tab: &str) -> bool {
        for button in &mut self.buttons {
            button.active = button.id == tab;
        }

        let mut panel_found = false;
        for panel in &mut self.panels {
            panel.active = panel.tab == tab;
            panel_found |= panel.active;
        }
        panel_found
    }

    /// Index of the active button.
    pub fn active_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.active)
    }

    /// The currently active panel, if any.
    pub fn active_panel(&self) -> Option<&LivePanel> {
        self.panels.iter().find(|p| p.active)
    }

    /// Find the resource slot with the given id anywhere in this subtree.
    pub fn slot_mut(&mut self, slot: u64) -> Option<&mut ResourceSlot> {
        self.panels
            .iter_mut()
            .flat_map(|panel| panel.blocks.iter_mut())
            .find_map(|block| match block {
                LiveBlock::Resource(resource) if resource.slot == slot => Some(resource),
                _ => None,
            })
    }

    /// Cycle to the next tab button.
    pub fn select_next(&mut self) -> bool {
        self.cycle(1)
    }

    /// Cycle to the previous tab button.
    pub fn select_prev(&mut self) -> bool {
        self.cycle(self.buttons.len().wrapping_sub(1))
    }

    fn cycle(&mut self, offset: usize) -> bool {
        if self.buttons.is_empty() {
            return true;
        }
        let current = self.active_index().unwrap_or(0);
        let target = self.buttons[(current + offset) % self.buttons.len()].id.clone();
        self.select(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::TabDef;

    fn tab(id: &str) -> TabDef {
        TabDef {
            id: id.to_string(),
            label: id.to_string(),
            blocks: Vec::new(),
        }
    }

    fn bind(tabs: &[TabDef]) -> TabGroup {
        let mut next_slot = 0;
        TabGroup::bind(tabs, &mut next_slot)
    }

    fn active_buttons(group: &TabGroup) -> usize {
        group.buttons.iter().filter(|b| b.active).count()
    }

    fn active_panels(group: &TabGroup) -> usize {
        group.panels.iter().filter(|p| p.active).count()
    }

    #[test]
    fn test_bind_activates_first_tab() {
        let group = bind(&[tab("code"), tab("output"), tab("analysis")]);

        assert_eq!(group.active_index(), Some(0));
        assert_eq!(group.active_panel().unwrap().tab, "code");
        assert_eq!(active_buttons(&group), 1);
        assert_eq!(active_panels(&group), 1);
    }

    #[test]
    fn test_bind_empty() {
        let group = bind(&[]);
        assert_eq!(group.active_index(), None);
        assert!(group.active_panel().is_none());
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut group = bind(&[tab("code"), tab("output"), tab("analysis")]);

        // Any click sequence leaves exactly one button and one panel active.
        for id in ["analysis", "code", "output", "output"] {
            assert!(group.select(id));
            assert_eq!(active_buttons(&group), 1);
            assert_eq!(active_panels(&group), 1);
            assert_eq!(group.active_panel().unwrap().tab, id);
        }
    }

    #[test]
    fn test_select_without_matching_panel() {
        let mut group = bind(&[tab("code"), tab("output")]);
        group.panels.retain(|p| p.tab != "output");

        assert!(!group.select("output"));
        // Button activates, no panel does.
        assert_eq!(group.active_index(), Some(1));
        assert_eq!(active_panels(&group), 0);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut group = bind(&[tab("code"), tab("output"), tab("analysis")]);

        group.select_next();
        assert_eq!(group.active_index(), Some(1));
        group.select_next();
        group.select_next();
        assert_eq!(group.active_index(), Some(0));

        group.select_prev();
        assert_eq!(group.active_index(), Some(2));
    }
}
