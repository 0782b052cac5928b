// Deck manifest model.
// Defines the declarative report structure loaded from a JSON file: ordered
// page sections, tab definitions, model scrollers, and the template registry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A complete walkthrough deck: sections in step order plus model templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// One page section, bound 1:1 to a step by its position in the deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    /// Section-level tab group (Code / Output / Analysis in the report).
    #[serde(default)]
    pub tabs: Vec<TabDef>,
    /// Horizontal model picker, present on the model steps.
    #[serde(default)]
    pub scroller: Option<ScrollerDef>,
}

/// A labeled tab with its content panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A content block inside a panel: inline text or a lazily fetched resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Text { body: String },
    Resource { src: String, kind: ResourceKind },
}

/// How a fetched resource body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Trusted markup, shown preformatted.
    Html,
    /// Literal text.
    Text,
    /// Metric payload, rendered as a model comparison table.
    Json,
}

/// Model picker definition: one card per model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollerDef {
    pub cards: Vec<CardDef>,
}

/// A selectable model card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDef {
    pub model: String,
    pub label: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Template content injected when a model card is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub model: String,
    pub tabs: Vec<TabDef>,
}

impl Deck {
    /// Load a deck manifest from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a deck manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a model template by id.
    pub fn template(&self, model: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.model == model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let json = r#"{
            "title": "ML Report",
            "sections": [
                {
                    "id": "overview",
                    "title": "Overview",
                    "intro": "Project summary",
                    "tabs": [
                        {
                            "id": "code",
                            "label": "Code",
                            "blocks": [
                                { "type": "text", "body": "import pandas" },
                                { "type": "resource", "src": "tables/summary.html", "kind": "html" }
                            ]
                        }
                    ]
                },
                {
                    "id": "regression",
                    "title": "Regression",
                    "scroller": {
                        "cards": [
                            { "model": "linreg", "label": "Linear Regression" },
                            { "model": "ridge", "label": "Ridge", "caption": "L2 penalty" }
                        ]
                    }
                }
            ],
            "templates": [
                { "model": "linreg", "tabs": [ { "id": "output", "label": "Output" } ] }
            ]
        }"#;

        let deck = Deck::from_json(json).unwrap();
        assert_eq!(deck.sections.len(), 2);
        assert_eq!(deck.sections[0].tabs.len(), 1);
        assert_eq!(deck.sections[0].tabs[0].blocks.len(), 2);
        assert!(matches!(
            deck.sections[0].tabs[0].blocks[1],
            Block::Resource {
                kind: ResourceKind::Html,
                ..
            }
        ));

        let scroller = deck.sections[1].scroller.as_ref().unwrap();
        assert_eq!(scroller.cards[1].caption.as_deref(), Some("L2 penalty"));

        assert!(deck.template("linreg").is_some());
        assert!(deck.template("svm").is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = Deck::from_path(Path::new("/nonexistent/deck.json"));
        assert!(err.is_err());
    }
}
