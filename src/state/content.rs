// Live content subtrees.
// Instantiated panel blocks with per-node resource slots tracking fetch state.

use crate::deck::{Block, ResourceKind};

/// Loading state for async data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// A fetched resource rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Trusted markup shown preformatted.
    Markup(String),
    /// Literal text.
    Text(String),
    /// Model comparison table from a JSON metric payload.
    Metrics(Vec<MetricRow>),
}

/// One row of the metric comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub model: String,
    pub primary: String,
    pub secondary: String,
}

/// A lazily loaded node in a live subtree.
///
/// The slot id is unique per node lifetime and routes fetch completions back
/// from spawned tasks. Leaving `Idle` marks the node as fetched: it happens
/// synchronously when the request is issued, so a slot sees at most one
/// fetch attempt no matter how often its scope is hydrated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSlot {
    pub slot: u64,
    pub src: String,
    pub kind: ResourceKind,
    pub state: LoadingState<Rendered>,
}

impl ResourceSlot {
    pub fn is_fetched(&self) -> bool {
        !matches!(self.state, LoadingState::Idle)
    }
}

/// A content block in a live subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveBlock {
    Text(String),
    Resource(ResourceSlot),
}

/// Instantiate manifest blocks into live blocks, assigning fresh slot ids.
pub fn instantiate_blocks(blocks: &[Block], next_slot: &mut u64) -> Vec<LiveBlock> {
    blocks
        .iter()
        .map(|block| match block {
            Block::Text { body } => LiveBlock::Text(body.clone()),
            Block::Resource { src, kind } => {
                let slot = *next_slot;
                *next_slot += 1;
                LiveBlock::Resource(ResourceSlot {
                    slot,
                    src: src.clone(),
                    kind: *kind,
                    state: LoadingState::Idle,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_assigns_unique_slots() {
        let blocks = vec![
            Block::Text {
                body: "intro".to_string(),
            },
            Block::Resource {
                src: "a.html".to_string(),
                kind: ResourceKind::Html,
            },
            Block::Resource {
                src: "b.txt".to_string(),
                kind: ResourceKind::Text,
            },
        ];

        let mut next_slot = 7;
        let live = instantiate_blocks(&blocks, &mut next_slot);
        assert_eq!(next_slot, 9);

        match (&live[1], &live[2]) {
            (LiveBlock::Resource(a), LiveBlock::Resource(b)) => {
                assert_eq!(a.slot, 7);
                assert_eq!(b.slot, 8);
                assert!(!a.is_fetched());
                assert_eq!(a.state, LoadingState::Idle);
            }
            _ => panic!("expected resource blocks"),
        }
    }
}
